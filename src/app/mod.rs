pub mod api;
pub mod handler;
pub mod pattern;
pub mod render;
pub mod router;

pub use {
    api::Api,
    handler::{HandlerError, HandlerFn, HandlerResult, VerbObject, Verbs},
    pattern::{match_path, Params},
    render::Renderer,
    router::RouteTable,
};
