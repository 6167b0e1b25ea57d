use std::io;
use std::net;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{info, trace};

use super::{conn, executor};
use crate::config::Config;
use crate::gateway::Application;

pub struct Server {
    listener: net::TcpListener,
    stop: Arc<AtomicBool>,
    executor: Box<dyn executor::Executor>,
}

impl Server {
    pub fn new(config: &Config, app: Arc<dyn Application>) -> io::Result<Self> {
        let addr = format!("127.0.0.1:{}", config.port);
        let listener = net::TcpListener::bind(&addr)?;
        info!("gateway created @ {}", listener.local_addr()?);
        let handler = conn::handler(Arc::new(config.clone()), app);
        let executor = executor::build(config.executor, config.pool_size, handler);
        Ok(Server {
            listener,
            stop: Arc::new(AtomicBool::new(false)),
            executor,
        })
    }

    pub fn local_addr(&self) -> io::Result<net::SocketAddr> {
        self.listener.local_addr()
    }

    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    // the stop flag is only checked between connections; a blocked accept
    // is not interrupted
    pub fn start(&mut self) -> io::Result<()> {
        info!("gateway start listening");
        while !self.stop.load(Ordering::SeqCst) {
            let (stream, addr) = self.listener.accept()?;
            trace!("incoming connection from {}", addr);
            self.executor.submit(stream);
        }
        Ok(())
    }
}
