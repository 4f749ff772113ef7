//! Error taxonomy for the BER codec, message grammar, and endpoint runtime.

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// BER byte stream violates encoding rules: bad length field, truncated
    /// payload, unknown tag, or an OID subidentifier overflowing 32 bits.
    #[error("malformed BER encoding: {0}")]
    Malformed(String),

    /// BER parsed cleanly but the SNMP message grammar was not honored:
    /// wrong child count, wrong type at a required position.
    #[error("SNMP grammar violation: {0}")]
    GrammarViolation(String),

    /// The (version, PDU type) pair is not permitted by RFC 1157/3416.
    #[error("PDU type 0x{pdu_type:02x} is not valid for SNMP version {version}")]
    UnsupportedForVersion { version: u8, pdu_type: u8 },

    /// The OS refused a bind() call.
    #[error("failed to bind UDP socket on {addr}: {source}")]
    BindFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// send_to returned an error or wrote fewer bytes than requested.
    #[error("failed to send datagram to {addr}: {source}")]
    SendFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// recv_from returned a non-cancellation OS error.
    #[error("failed to receive datagram: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// An operation was attempted before `Endpoint::initialize`.
    #[error("endpoint not initialized")]
    NotInitialized,
}

impl Error {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn grammar_violation<S: Into<String>>(msg: S) -> Self {
        Self::GrammarViolation(msg.into())
    }

    /// True when this is the `Malformed` variant - the category the
    /// endpoint's error handler reports parse failures as.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }
}
