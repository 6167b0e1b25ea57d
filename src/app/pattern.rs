use std::collections::HashMap;

pub type Params = HashMap<String, String>;

/// Matches a concrete path against a route pattern segment by segment.
/// A `{name}` segment captures exactly one non-empty path segment; every
/// other segment must compare equal as plain text.
pub fn match_path(pattern: &str, path: &str) -> Option<Params> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }
    let mut params = Params::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(path_segments.iter()) {
        match placeholder_name(pattern_segment) {
            Some(name) => {
                if path_segment.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), (*path_segment).to_string());
            }
            None => {
                if pattern_segment != path_segment {
                    return None;
                }
            }
        }
    }
    Some(params)
}

fn placeholder_name(segment: &str) -> Option<&str> {
    if segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}') {
        Some(&segment[1..segment.len() - 1])
    } else {
        None
    }
}
