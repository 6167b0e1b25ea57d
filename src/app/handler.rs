use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use super::pattern::Params;
use crate::http::{Request, Response};

pub type HandlerError = Box<dyn Error + Send + Sync>;
pub type HandlerResult = Result<Option<String>, HandlerError>;
pub type HandlerFn =
    Arc<dyn Fn(&Request, &mut Response, &Params) -> HandlerResult + Send + Sync>;

/// Registration-time verb input: a single verb or a collection of verbs,
/// normalized to lower-cased, de-duplicated strings.
pub enum Verbs {
    One(String),
    Many(Vec<String>),
}

impl Verbs {
    pub fn normalized(self) -> Vec<String> {
        let raw = match self {
            Verbs::One(verb) => vec![verb],
            Verbs::Many(verbs) => verbs,
        };
        let mut verbs: Vec<String> = Vec::with_capacity(raw.len());
        for verb in raw {
            let verb = verb.to_lowercase();
            if !verbs.contains(&verb) {
                verbs.push(verb);
            }
        }
        verbs
    }
}

impl From<&str> for Verbs {
    fn from(verb: &str) -> Self {
        Verbs::One(verb.to_string())
    }
}

impl From<String> for Verbs {
    fn from(verb: String) -> Self {
        Verbs::One(verb)
    }
}

impl From<Vec<&str>> for Verbs {
    fn from(verbs: Vec<&str>) -> Self {
        Verbs::Many(verbs.into_iter().map(|v| v.to_string()).collect())
    }
}

impl From<Vec<String>> for Verbs {
    fn from(verbs: Vec<String>) -> Self {
        Verbs::Many(verbs)
    }
}

/// A handler exposing one capability per verb. The table is populated once
/// at registration; dispatch looks a capability up by lower-cased method
/// name and reports the verb as unsupported when the slot is empty.
#[derive(Default)]
pub struct VerbObject {
    capabilities: HashMap<String, HandlerFn>,
}

impl VerbObject {
    pub fn new() -> Self {
        VerbObject::default()
    }

    pub fn on(
        mut self,
        verb: &str,
        handler: impl Fn(&Request, &mut Response, &Params) -> HandlerResult + Send + Sync + 'static,
    ) -> Self {
        self.capabilities
            .insert(verb.to_lowercase(), Arc::new(handler));
        self
    }

    pub fn capability(&self, verb: &str) -> Option<HandlerFn> {
        self.capabilities.get(&verb.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_verb_normalizes() {
        assert_eq!(Verbs::from("GET").normalized(), vec!["get".to_string()]);
    }

    #[test]
    fn verb_list_normalizes_and_dedupes() {
        let verbs = Verbs::from(vec!["GET", "post", "get"]).normalized();
        assert_eq!(verbs, vec!["get".to_string(), "post".to_string()]);
    }

    #[test]
    fn verb_object_capability_lookup_is_case_insensitive() {
        let object = VerbObject::new().on(
            "GET",
            |_req: &Request, _res: &mut Response, _params: &Params| Ok(None),
        );
        assert!(object.capability("get").is_some());
        assert!(object.capability("GET").is_some());
        assert!(object.capability("delete").is_none());
    }
}
