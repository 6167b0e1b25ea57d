use std::fmt;
use std::net;
use std::sync::mpsc;
use std::thread;

use log::{error, warn};

use super::executor::ConnHandler;

const SYNC_CHANNEL_BUFFER_SIZE: usize = 2;

#[derive(Debug, PartialEq)]
pub enum SendError {
    LineBusy,
    Disconnected,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SendError::LineBusy => write!(f, "SendError::LineBusy"),
            SendError::Disconnected => write!(f, "SendError::Disconnected"),
        }
    }
}

/// A long-lived worker thread fed streams over a bounded channel. `None`
/// on the channel tells the worker to exit.
pub struct Line {
    sender: mpsc::SyncSender<Option<net::TcpStream>>,
}

impl Line {
    pub fn new(handler: ConnHandler) -> Self {
        let (sender, receiver) = mpsc::sync_channel::<Option<net::TcpStream>>(SYNC_CHANNEL_BUFFER_SIZE);
        thread::spawn(move || {
            for stream in receiver {
                match stream {
                    Some(stream) => {
                        if let Err(e) = handler(stream) {
                            warn!("connection failed: {}", e);
                        }
                    }
                    None => break,
                }
            }
        });
        Self { sender }
    }

    pub fn send(&mut self, stream: net::TcpStream) -> Result<(), (net::TcpStream, SendError)> {
        self.sender.try_send(Some(stream)).map_err(|e| match e {
            mpsc::TrySendError::Full(s) => (s.unwrap(), SendError::LineBusy),
            mpsc::TrySendError::Disconnected(s) => (s.unwrap(), SendError::Disconnected),
        })
    }
}

impl Drop for Line {
    fn drop(&mut self) {
        self.sender.send(None).unwrap_or_else(|e| {
            error!("failed to shut down a worker line: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::{Arc, Mutex};
    use std::time;

    fn stream_pair(listener: &TcpListener) -> (TcpStream, TcpStream) {
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).unwrap();
        let (server_side, _) = listener.accept().unwrap();
        (client, server_side)
    }

    #[test]
    fn handler_sees_the_stream_bytes() -> io::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0")?;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_ref = seen.clone();
        let mut line = Line::new(Arc::new(move |mut stream: TcpStream| {
            let mut buf = [0u8; 3];
            stream.read_exact(&mut buf)?;
            seen_ref.lock().unwrap().extend_from_slice(&buf);
            Ok(())
        }));

        let (mut client, server_side) = stream_pair(&listener);
        line.send(server_side).unwrap();
        client.write_all(b"abc")?;
        thread::sleep(time::Duration::from_millis(300));
        assert_eq!(seen.lock().unwrap().as_slice(), b"abc");

        Ok(())
    }

    #[test]
    fn reports_busy_while_processing() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();

        let mut line = Line::new(Arc::new(|_stream: TcpStream| {
            thread::sleep(time::Duration::from_millis(600));
            Ok(())
        }));

        // one in flight plus two buffered fills the line
        let (_c1, s1) = stream_pair(&listener);
        let (_c2, s2) = stream_pair(&listener);
        let (_c3, s3) = stream_pair(&listener);
        assert!(line.send(s1).is_ok());
        thread::sleep(time::Duration::from_millis(100));
        assert!(line.send(s2).is_ok());
        assert!(line.send(s3).is_ok());

        let (_c4, s4) = stream_pair(&listener);
        assert_eq!(line.send(s4).map_err(|(_, e)| e), Err(SendError::LineBusy));

        thread::sleep(time::Duration::from_millis(700));
        let (_c5, s5) = stream_pair(&listener);
        assert!(line.send(s5).is_ok());
    }
}
