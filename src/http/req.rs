use crate::gateway::{Environ, PATH_INFO, REQUEST_METHOD};

pub struct Request {
    pub method: String,
    pub path: String,
}

impl Request {
    pub fn new(method: &str, path: &str) -> Self {
        Request {
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    // missing keys fall back the way the source environ behaved
    pub fn from_environ(environ: &Environ) -> Self {
        let method = environ
            .get(REQUEST_METHOD)
            .cloned()
            .unwrap_or_else(|| "GET".to_string());
        let path = environ
            .get(PATH_INFO)
            .cloned()
            .unwrap_or_else(|| "/".to_string());
        Request { method, path }
    }
}

impl Default for Request {
    fn default() -> Self {
        Request {
            method: "GET".to_string(),
            path: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::build_environ;

    #[test]
    fn builds_from_environ() {
        let req = Request::from_environ(&build_environ("POST", "/book"));
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/book");
    }

    #[test]
    fn missing_environ_keys_default() {
        let req = Request::from_environ(&Environ::new());
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/");
    }
}
