//! Minimal async UDP transport the endpoint runtime drives.
//!
//! Collapses the source's stream-I/O-flavored socket interface to the
//! three operations the codec actually needs (spec.md Design Notes §9):
//! `bind`, `send_to`, `recv_from`.

use std::net::SocketAddr;

use tokio::net::UdpSocket;

use crate::error::{Error, Result};

/// A bound UDPv4 socket.
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    /// Binds a UDPv4 socket to `addr`.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(addr).await.map_err(|source| Error::BindFailed {
            addr: addr.to_string(),
            source,
        })?;
        Ok(UdpTransport { socket })
    }

    /// Sends `buf` to `addr`. Returns `SendFailed` on any OS error or a
    /// short write (spec.md §7).
    pub async fn send_to(&self, buf: &[u8], addr: SocketAddr) -> Result<()> {
        let sent = self
            .socket
            .send_to(buf, addr)
            .await
            .map_err(|source| Error::SendFailed {
                addr: addr.to_string(),
                source,
            })?;
        if sent != buf.len() {
            return Err(Error::SendFailed {
                addr: addr.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    format!("wrote {sent} of {} bytes", buf.len()),
                ),
            });
        }
        Ok(())
    }

    /// Receives one datagram into `buf`, returning the number of bytes
    /// written and the sender's address.
    pub async fn recv_from(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr)> {
        self.socket.recv_from(buf).await.map_err(Error::ReceiveFailed)
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr().map_err(Error::ReceiveFailed)
    }
}
