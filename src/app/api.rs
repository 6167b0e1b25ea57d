use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::error;

use super::handler::{HandlerResult, VerbObject, Verbs};
use super::pattern::Params;
use super::router::RouteTable;
use crate::errors::{DispatchError, RouteError};
use crate::gateway::{Application, Environ};
use crate::http::{Request, Response};

/// The application context: a route table plus the dispatch cycle that
/// turns a request into a response. Built once at startup and shared
/// read-only with the connection server.
#[derive(Default)]
pub struct Api {
    routes: RouteTable,
}

impl Api {
    pub fn new() -> Self {
        Api::default()
    }

    pub fn route(
        &mut self,
        pattern: &str,
        handler: impl Fn(&Request, &mut Response, &Params) -> HandlerResult + Send + Sync + 'static,
    ) -> Result<(), RouteError> {
        self.register(pattern, handler, "get")
    }

    pub fn register<V: Into<Verbs>>(
        &mut self,
        pattern: &str,
        handler: impl Fn(&Request, &mut Response, &Params) -> HandlerResult + Send + Sync + 'static,
        verbs: V,
    ) -> Result<(), RouteError> {
        self.routes.register(pattern, Arc::new(handler), verbs.into())
    }

    pub fn register_object(&mut self, pattern: &str, object: VerbObject) -> Result<(), RouteError> {
        self.routes.register_object(pattern, object)
    }

    pub fn handle(&self, request: &Request) -> Response {
        let mut response = Response::default();
        let (handler, params) = match self.routes.resolve(&request.path, &request.method) {
            Ok(found) => found,
            Err(DispatchError::NotFound) => {
                response.set_status(404, "Not Found");
                response.body = "Not Found".to_string();
                return response;
            }
            Err(DispatchError::MethodNotAllowed) => {
                response.set_status(405, "Method Not Allowed");
                response.body = "Method Not Allowed".to_string();
                return response;
            }
        };
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| handler(request, &mut response, &params)));
        match outcome {
            Ok(Ok(Some(body))) => {
                if !body.is_empty() {
                    response.body = body;
                }
            }
            Ok(Ok(None)) => {}
            Ok(Err(e)) => {
                error!("handler failed on {} {}: {}", request.method, request.path, e);
                response = server_error();
            }
            Err(_) => {
                error!("handler panicked on {} {}", request.method, request.path);
                response = server_error();
            }
        }
        response
    }
}

// a failed handler leaves the response half-mutated; start over
fn server_error() -> Response {
    let mut response = Response::default();
    response.set_status(500, "Internal Server Error");
    response.body = "Internal Server Error".to_string();
    response
}

impl Application for Api {
    fn call(
        &self,
        environ: &Environ,
        set_headers: &mut dyn FnMut(&str, &[(String, String)]),
    ) -> String {
        let request = Request::from_environ(environ);
        let response = self.handle(&request);
        let mut headers = response.headers().to_vec();
        headers.push(("Content-Length".to_string(), response.body.len().to_string()));
        set_headers(&response.status_line(), &headers);
        response.body
    }
}
