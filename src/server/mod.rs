pub mod conn;
pub mod executor;
pub mod line;
pub mod server;
pub mod static_files;

pub use {
    executor::{ConnHandler, Executor, LinePool, Sequential},
    line::{Line, SendError},
    server::Server,
    static_files::{StaticRoot, MISSING_FILE_BODY},
};
