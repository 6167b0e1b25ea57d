use std::io::{self, Read, Write};
use std::net;
use std::sync::Arc;

use log::{debug, info};

use super::executor::ConnHandler;
use super::static_files::{StaticRoot, MISSING_FILE_BODY};
use crate::config::Config;
use crate::gateway::{self, Application};

pub fn handler(config: Arc<Config>, app: Arc<dyn Application>) -> ConnHandler {
    let static_root = StaticRoot::new(config.static_root.clone());
    Arc::new(move |mut stream| serve(&mut stream, &config, &static_root, app.as_ref()))
}

/// One full exchange: Read -> Classify -> {Static | Dynamic} -> Respond ->
/// Close. A single bounded read; anything past `read_limit` is truncated.
fn serve(
    stream: &mut net::TcpStream,
    config: &Config,
    static_root: &StaticRoot,
    app: &dyn Application,
) -> io::Result<()> {
    let mut buf = vec![0u8; config.read_limit];
    let n = stream.read(&mut buf)?;
    let head = String::from_utf8_lossy(&buf[..n]);
    let request_line = head.lines().next().unwrap_or("");

    match parse_request_line(request_line) {
        None => write_bad_request(stream)?,
        Some((method, path)) => {
            let path = if path == "/" {
                format!("/{}", config.default_document)
            } else {
                path
            };
            info!("{} {}", method, path);
            if path.ends_with(config.dynamic_suffix.as_str()) {
                serve_dynamic(stream, app, &method, &path)?;
            } else {
                serve_static(stream, static_root, &path)?;
            }
        }
    }
    stream.shutdown(net::Shutdown::Both)
}

// only the first line is parsed: `METHOD /path HTTP/version`
fn parse_request_line(line: &str) -> Option<(String, String)> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    if !target.starts_with('/') {
        return None;
    }
    Some((method.to_string(), target.to_string()))
}

fn serve_static(stream: &mut net::TcpStream, root: &StaticRoot, path: &str) -> io::Result<()> {
    match root.resolve(path) {
        Ok(bytes) => {
            stream.write_all(b"HTTP/1.1 200 OK\r\n\r\n")?;
            stream.write_all(&bytes)?;
        }
        Err(e) => {
            debug!("static miss {}: {}", path, e);
            stream.write_all(b"HTTP/1.1 404 Not Found\r\n\r\n")?;
            stream.write_all(MISSING_FILE_BODY.as_bytes())?;
        }
    }
    stream.flush()
}

fn serve_dynamic(
    stream: &mut net::TcpStream,
    app: &dyn Application,
    method: &str,
    path: &str,
) -> io::Result<()> {
    let environ = gateway::build_environ(method, path);
    let mut status_line = String::new();
    let mut header_list: Vec<(String, String)> = Vec::new();
    let body = app.call(&environ, &mut |status, headers| {
        status_line = status.to_string();
        header_list = headers.to_vec();
    });

    let mut head = format!("HTTP/1.1 {}\r\n", status_line);
    for (name, value) in &header_list {
        head.push_str(name);
        head.push(':');
        head.push_str(value);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");
    stream.write_all(head.as_bytes())?;
    stream.write_all(body.as_bytes())?;
    stream.flush()
}

fn write_bad_request(stream: &mut net::TcpStream) -> io::Result<()> {
    stream.write_all(b"HTTP/1.1 400 Bad Request\r\n\r\nBad Request")?;
    stream.flush()
}
