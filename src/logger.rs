use std::io;
use std::sync::mpsc;
use std::thread;

use log::{Metadata, Record};
pub use log::{set_boxed_logger, set_max_level, Level, LevelFilter, Log, SetLoggerError};

enum LogMsg {
    Line(String),
    Shutdown,
}

/// Logger backed by a bounded channel into a dedicated writer thread, so
/// connection workers never block on the destination.
pub struct ChannelLogger {
    sender: mpsc::SyncSender<LogMsg>,
    worker: Option<thread::JoinHandle<()>>,
    level: Level,
}

impl ChannelLogger {
    pub fn new<T: io::Write + Send + 'static>(buf_size: usize, destination: T, level: Level) -> Self {
        let (sender, receiver) = mpsc::sync_channel(buf_size);
        let worker = thread::spawn(move || {
            let mut destination = destination;
            for msg in receiver {
                match msg {
                    LogMsg::Line(line) => {
                        if let Err(e) = writeln!(destination, "{}", line) {
                            println!("logger error: {}", e);
                        }
                    }
                    LogMsg::Shutdown => break,
                }
            }
        });
        Self {
            sender,
            worker: Some(worker),
            level,
        }
    }
}

impl Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!("[{}] {}", record.level(), record.args());
            if let Err(e) = self.sender.send(LogMsg::Line(line)) {
                println!("logger error: {}", e);
            }
        }
    }

    fn flush(&self) {}
}

impl Drop for ChannelLogger {
    fn drop(&mut self) {
        if self.sender.send(LogMsg::Shutdown).is_ok() {
            if let Some(worker) = self.worker.take() {
                let _ = worker.join();
            }
        }
    }
}

pub fn init_stdout_logger(msg_buffer_size: usize, level: Level) -> Result<(), SetLoggerError> {
    set_boxed_logger(Box::new(ChannelLogger::new(
        msg_buffer_size,
        io::stdout(),
        level,
    )))
    .map(|()| set_max_level(level.to_level_filter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time;

    #[derive(Default)]
    struct TestWriter {
        content: Arc<Mutex<String>>,
    }

    impl io::Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut content = self.content.lock().unwrap();
            content.push_str(&String::from_utf8_lossy(buf));
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl TestWriter {
        fn spy(&self) -> Arc<Mutex<String>> {
            self.content.clone()
        }
    }

    #[test]
    fn can_create() {
        ChannelLogger::new(100, io::stdout(), Level::Debug);
    }

    #[test]
    fn delivers_formatted_records() {
        let writer = TestWriter::default();
        let spy = writer.spy();
        let logger = ChannelLogger::new(10, writer, Level::Info);

        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Info)
                .build(),
        );
        thread::sleep(time::Duration::from_millis(200));

        assert_eq!(*spy.lock().unwrap(), "[INFO] hello\n".to_string());
    }

    #[test]
    fn filters_below_configured_level() {
        let writer = TestWriter::default();
        let spy = writer.spy();
        let logger = ChannelLogger::new(10, writer, Level::Warn);

        logger.log(
            &Record::builder()
                .args(format_args!("chatty"))
                .level(Level::Debug)
                .build(),
        );
        thread::sleep(time::Duration::from_millis(200));

        assert!(spy.lock().unwrap().is_empty());
    }
}
