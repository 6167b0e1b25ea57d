use std::fs;
use std::io;
use std::path::PathBuf;

pub const MISSING_FILE_BODY: &str = "<h1>not found file</h1>";

/// Resolves request paths to files under a fixed root, bypassing the
/// dispatcher. Files are opened per request; a failed open is the caller's
/// signal to answer 404.
pub struct StaticRoot {
    root: PathBuf,
}

impl StaticRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StaticRoot { root: root.into() }
    }

    pub fn resolve(&self, path: &str) -> io::Result<Vec<u8>> {
        let relative = path.trim_start_matches('/');
        fs::read(self.root.join(relative))
    }
}
