use std::collections::HashMap;
use std::sync::Arc;

use super::handler::{HandlerFn, VerbObject, Verbs};
use super::pattern::{match_path, Params};
use crate::errors::{DispatchError, RouteError};

enum Registered {
    ByVerb(HashMap<String, HandlerFn>),
    Object(Arc<VerbObject>),
}

/// Registered routes in insertion order. Lookup scans patterns in the
/// order they were registered and the first structural match wins, so
/// patterns are not required to be mutually exclusive.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<(String, Registered)>,
}

impl RouteTable {
    pub fn register(
        &mut self,
        pattern: &str,
        handler: HandlerFn,
        verbs: Verbs,
    ) -> Result<(), RouteError> {
        let verbs = verbs.normalized();
        match self.entries.iter_mut().find(|(p, _)| p.as_str() == pattern) {
            Some((_, Registered::Object(_))) => Err(RouteError::PatternInUse {
                pattern: pattern.to_string(),
            }),
            Some((_, Registered::ByVerb(map))) => {
                // validate the whole verb set before inserting anything
                if let Some(verb) = verbs.iter().find(|verb| map.contains_key(verb.as_str())) {
                    return Err(RouteError::Duplicate {
                        pattern: pattern.to_string(),
                        verb: verb.clone(),
                    });
                }
                for verb in verbs {
                    map.insert(verb, handler.clone());
                }
                Ok(())
            }
            None => {
                let mut map = HashMap::new();
                for verb in verbs {
                    map.insert(verb, handler.clone());
                }
                self.entries
                    .push((pattern.to_string(), Registered::ByVerb(map)));
                Ok(())
            }
        }
    }

    // a verb object claims every verb of its pattern, so conflicts are
    // pattern-level in both directions
    pub fn register_object(&mut self, pattern: &str, object: VerbObject) -> Result<(), RouteError> {
        if self.entries.iter().any(|(p, _)| p.as_str() == pattern) {
            return Err(RouteError::PatternInUse {
                pattern: pattern.to_string(),
            });
        }
        self.entries
            .push((pattern.to_string(), Registered::Object(Arc::new(object))));
        Ok(())
    }

    pub fn resolve(&self, path: &str, method: &str) -> Result<(HandlerFn, Params), DispatchError> {
        let verb = method.to_lowercase();
        let mut matched_other_verb = false;
        for (pattern, registered) in &self.entries {
            let params = match match_path(pattern, path) {
                Some(params) => params,
                None => continue,
            };
            match registered {
                Registered::Object(object) => {
                    return match object.capability(&verb) {
                        Some(handler) => Ok((handler, params)),
                        None => Err(DispatchError::MethodNotAllowed),
                    };
                }
                Registered::ByVerb(map) => {
                    if let Some(handler) = map.get(&verb) {
                        return Ok((handler.clone(), params));
                    }
                    matched_other_verb = true;
                }
            }
        }
        if matched_other_verb {
            Err(DispatchError::MethodNotAllowed)
        } else {
            Err(DispatchError::NotFound)
        }
    }
}
