mod app;
mod config;
mod errors;
mod gateway;
mod http;
mod logger;
mod server;

pub use {
    app::*,
    config::*,
    errors::*,
    gateway::*,
    http::*,
    logger::*,
    server::*,
};
