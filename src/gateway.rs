use std::collections::HashMap;

pub type Environ = HashMap<String, String>;

pub const PATH_INFO: &str = "PATH_INFO";
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";

/// The calling convention between the connection server and the
/// application. The application must invoke `set_headers` exactly once,
/// with `("<code> <reason>", headers)`, before returning the body.
pub trait Application: Send + Sync {
    fn call(
        &self,
        environ: &Environ,
        set_headers: &mut dyn FnMut(&str, &[(String, String)]),
    ) -> String;
}

pub fn build_environ(method: &str, path: &str) -> Environ {
    let mut environ = Environ::new();
    environ.insert(REQUEST_METHOD.to_string(), method.to_string());
    environ.insert(PATH_INFO.to_string(), path.to_string());
    environ
}
