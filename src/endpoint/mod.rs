//! Asynchronous UDP endpoint runtime: binds a socket, drives the receive
//! loop, and dispatches decoded messages to user-supplied handlers.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::config::Role;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::transport::UdpTransport;

/// Message handler contract: invoked with a borrowed [`Message`], the
/// sender's address, and port. Must not retain `message` beyond the call.
pub type MessageHandler = Arc<dyn Fn(&Message, Ipv4Addr, u16) + Send + Sync>;

/// Error handler contract: invoked on transport and parse errors. Never
/// called for a cancelled receive.
pub type ErrorHandler = Arc<dyn Fn(&Error) + Send + Sync>;

struct Inner {
    role: Role,
    transport: RwLock<Option<Arc<UdpTransport>>>,
    message_handler: RwLock<Option<MessageHandler>>,
    error_handler: RwLock<Option<ErrorHandler>>,
    running: AtomicBool,
    stop_signal: Notify,
    recv_buffer_size: usize,
    loop_handle: RwLock<Option<JoinHandle<()>>>,
}

/// An SNMP endpoint: an Agent (default port 161) or Manager (default port
/// 162). Cheaply cloneable - clones share the same underlying socket and
/// handler registrations, which is how the receive loop keeps itself
/// alive across the async task boundary.
#[derive(Clone)]
pub struct Endpoint(Arc<Inner>);

impl Drop for Inner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.stop_signal.notify_waiters();
        if let Some(handle) = self.loop_handle.write().unwrap().take() {
            handle.abort();
        }
    }
}

impl Endpoint {
    /// Constructs an endpoint bound to no address. Binding happens in
    /// [`Endpoint::initialize`].
    pub fn new(role: Role) -> Self {
        Self::with_buffer_size(role, crate::MAX_DATAGRAM_SIZE)
    }

    /// As [`Endpoint::new`], with a non-default receive buffer. Datagrams
    /// larger than this are truncated by the OS recv_from call; the codec
    /// then classifies anything it cannot fully parse as `Malformed`
    /// rather than growing the buffer.
    pub fn with_buffer_size(role: Role, recv_buffer_size: usize) -> Self {
        Endpoint(Arc::new(Inner {
            role,
            transport: RwLock::new(None),
            message_handler: RwLock::new(None),
            error_handler: RwLock::new(None),
            running: AtomicBool::new(false),
            stop_signal: Notify::new(),
            recv_buffer_size,
            loop_handle: RwLock::new(None),
        }))
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    /// The bound socket address, once [`Endpoint::initialize`] has run.
    /// Useful for tests and demos that bind to port 0 and need to learn
    /// the OS-assigned port.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        match self.0.transport.read().unwrap().clone() {
            Some(t) => t.local_addr(),
            None => Err(Error::NotInitialized),
        }
    }

    /// Opens a UDPv4 socket and binds it. `port == 0` means "use the
    /// role's default" (161 for Agent, 162 for Manager).
    pub async fn initialize(&self, bind_address: Ipv4Addr, port: u16) -> Result<()> {
        let effective_port = if port == 0 { self.0.role.default_port() } else { port };
        let addr = SocketAddr::from((bind_address, effective_port));
        let transport = UdpTransport::bind(addr).await?;
        debug!(%addr, "endpoint bound");
        *self.0.transport.write().unwrap() = Some(Arc::new(transport));
        Ok(())
    }

    /// Registers the message handler. Taking effect mid-loop is safe:
    /// the receive loop reads the current handler on every iteration.
    pub fn on_message<F>(&self, handler: F)
    where
        F: Fn(&Message, Ipv4Addr, u16) + Send + Sync + 'static,
    {
        *self.0.message_handler.write().unwrap() = Some(Arc::new(handler));
    }

    /// Registers the error handler. See [`Endpoint::on_message`] on
    /// timing.
    pub fn on_error<F>(&self, handler: F)
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        *self.0.error_handler.write().unwrap() = Some(Arc::new(handler));
    }

    /// Begins the asynchronous receive loop. Idempotent: calling again
    /// while a loop is already running is a no-op that returns `true`.
    /// Returns `false` if [`Endpoint::initialize`] has not been called.
    pub fn start(&self) -> bool {
        if self.0.running.swap(true, Ordering::SeqCst) {
            return true;
        }
        if self.0.transport.read().unwrap().is_none() {
            self.0.running.store(false, Ordering::SeqCst);
            return false;
        }
        let endpoint = self.clone();
        let handle = tokio::spawn(async move {
            endpoint.receive_loop().await;
        });
        *self.0.loop_handle.write().unwrap() = Some(handle);
        true
    }

    /// Requests loop termination. An in-flight receive is cancelled;
    /// an in-flight handler invocation is allowed to complete.
    pub fn stop(&self) {
        self.0.running.store(false, Ordering::SeqCst);
        self.0.stop_signal.notify_waiters();
    }

    /// Computes the message's encoded size, serializes it into a fresh
    /// buffer, and hands the bytes to the transport. Returns whether the
    /// OS accepted all bytes.
    pub async fn send(&self, message: &Message, ip: Ipv4Addr, port: u16) -> bool {
        let transport = match self.0.transport.read().unwrap().clone() {
            Some(t) => t,
            None => {
                self.dispatch_error(&Error::NotInitialized);
                return false;
            }
        };
        let mut buf = Vec::with_capacity(message.encoded_size());
        message.build(&mut buf);
        match transport.send_to(&buf, SocketAddr::from((ip, port))).await {
            Ok(()) => true,
            Err(e) => {
                self.dispatch_error(&e);
                false
            }
        }
    }

    async fn receive_loop(&self) {
        let transport = match self.0.transport.read().unwrap().clone() {
            Some(t) => t,
            None => return,
        };
        let mut buf = vec![0u8; self.0.recv_buffer_size];

        while self.0.running.load(Ordering::SeqCst) {
            let recv_result = tokio::select! {
                biased;
                _ = self.0.stop_signal.notified() => None,
                result = transport.recv_from(&mut buf) => Some(result),
            };

            let Some(result) = recv_result else {
                break;
            };

            match result {
                Ok((len, addr)) if len > 0 => {
                    trace!(len, %addr, "datagram received");
                    self.handle_datagram(&buf[..len], addr);
                }
                Ok(_) => {
                    // zero-length datagram; nothing to dispatch
                }
                Err(e) => {
                    warn!(error = %e, "receive failed");
                    self.dispatch_error(&e);
                }
            }
        }
    }

    fn handle_datagram(&self, bytes: &[u8], addr: SocketAddr) {
        let SocketAddr::V4(addr) = addr else {
            self.dispatch_error(&Error::malformed("non-IPv4 sender address"));
            return;
        };
        match Message::parse(bytes) {
            Ok(message) => {
                if let Some(handler) = self.0.message_handler.read().unwrap().clone() {
                    handler(&message, *addr.ip(), addr.port());
                }
            }
            Err(e) => {
                debug!(error = %e, %addr, "datagram failed to parse");
                self.dispatch_error(&e);
            }
        }
    }

    fn dispatch_error(&self, error: &Error) {
        if let Some(handler) = self.0.error_handler.read().unwrap().clone() {
            handler(error);
        }
    }
}
