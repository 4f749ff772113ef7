//! snmp-endpoint - wire-level core of an SNMP agent/manager.
//!
//! Provides the ASN.1 BER codec, the SNMP v1/v2c message grammar built on
//! top of it, and an asynchronous UDP endpoint runtime that dispatches
//! decoded messages to user-supplied handlers. MIB storage, access
//! control, and SNMPv3 are deliberately out of scope; see the module docs
//! on [`endpoint`] for the handler contract external collaborators use.

pub mod ber;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod oid;
pub mod transport;

pub use error::{Error, Result};

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default UDP port an Agent listens on.
pub const DEFAULT_AGENT_PORT: u16 = 161;

/// Default UDP port a Manager listens on.
pub const DEFAULT_MANAGER_PORT: u16 = 162;

/// Maximum datagram size the receive loop accepts, per RFC 1157's
/// conventional SNMP-over-UDP transport.
pub const MAX_DATAGRAM_SIZE: usize = 1500;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";
