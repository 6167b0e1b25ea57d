use std::io;
use std::net;
use std::sync::Arc;
use std::thread;

use log::{debug, error, warn};

use super::line::{Line, SendError};
use crate::config::ExecutorKind;

pub type ConnHandler = Arc<dyn Fn(net::TcpStream) -> io::Result<()> + Send + Sync>;

/// Scheduling policy for accepted connections. The accept loop hands each
/// stream to `submit` and is free to block inside it.
pub trait Executor: Send {
    fn submit(&mut self, stream: net::TcpStream);
}

pub fn build(kind: ExecutorKind, pool_size: usize, handler: ConnHandler) -> Box<dyn Executor> {
    match kind {
        ExecutorKind::Sequential => Box::new(Sequential::new(handler)),
        ExecutorKind::Pool => Box::new(LinePool::new(pool_size, handler)),
    }
}

/// The baseline policy: one isolated worker thread per connection, joined
/// before the next accept. Connections are handled strictly one at a time.
pub struct Sequential {
    handler: ConnHandler,
}

impl Sequential {
    pub fn new(handler: ConnHandler) -> Self {
        Sequential { handler }
    }
}

impl Executor for Sequential {
    fn submit(&mut self, stream: net::TcpStream) {
        let handler = self.handler.clone();
        let worker = thread::spawn(move || handler(stream));
        match worker.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("connection failed: {}", e),
            Err(_) => error!("connection worker panicked"),
        }
    }
}

/// The opt-in concurrent policy: a bank of worker lines grown on demand up
/// to `max_line`. Streams arriving with every line busy at capacity are
/// dropped.
pub struct LinePool {
    lines: Vec<Line>,
    max_line: usize,
    handler: ConnHandler,
}

impl LinePool {
    pub fn new(max_line: usize, handler: ConnHandler) -> Self {
        let max_line = if max_line == 0 {
            num_cpus::get() * 2
        } else {
            max_line
        };
        LinePool {
            lines: Vec::new(),
            max_line,
            handler,
        }
    }

    fn add_new_line(&mut self) {
        self.lines.push(Line::new(self.handler.clone()));
        debug!("new line added. line count: {}", self.lines.len());
    }

    fn send_to_line(&mut self, stream: net::TcpStream, idx: usize) {
        if idx == self.lines.len() {
            if self.lines.len() == self.max_line {
                warn!("out of capacity to handle incoming TCP stream");
                if let Err(e) = stream.shutdown(net::Shutdown::Both) {
                    error!("failed to shut down over-capacity TCP stream: {}", e);
                }
                return;
            }
            self.add_new_line();
        }
        match self.lines[idx].send(stream) {
            Ok(()) => {}
            Err((stream, SendError::LineBusy)) => self.send_to_line(stream, idx + 1),
            Err((stream, SendError::Disconnected)) => {
                self.lines.remove(idx);
                debug!("line #{} removed after disconnect", idx);
                self.send_to_line(stream, idx);
            }
        }
    }
}

impl Executor for LinePool {
    fn submit(&mut self, stream: net::TcpStream) {
        self.send_to_line(stream, 0);
    }
}
