//! SNMP v1/v2c message grammar built on the BER codec (spec.md §3.3, §4.2).

mod pdu;
mod varbind;

pub use pdu::{Pdu, PduKind, StandardPdu, TrapV1Pdu};
pub use varbind::{VarBind, VarBindList};

use crate::ber::Value;
use crate::error::{Error, Result};
use crate::oid::ObjectIdentifier;

/// SNMP protocol version discriminant carried as the message's first
/// field. Only v1 and v2c are in scope; v3 is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1 = 0,
    V2c = 1,
}

impl Version {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Version::V1),
            1 => Ok(Version::V2c),
            other => Err(Error::grammar_violation(format!(
                "unsupported SNMP version {other} (only v1=0 and v2c=1 are handled by this core)"
            ))),
        }
    }
}

/// Generates a request-id for an outbound request PDU. Not part of the
/// wire grammar - a convenience for callers that don't need to track
/// their own request-id sequence.
pub fn random_request_id() -> u32 {
    rand::random::<u16>() as u32
}

/// Error-status enumeration (spec.md §3.3.4). Accessors expose the raw
/// `u8` per the wire contract; these constants name the values.
pub mod error_status {
    pub const NO_ERROR: u8 = 0;
    pub const TOO_BIG: u8 = 1;
    pub const NO_SUCH_NAME: u8 = 2;
    pub const BAD_VALUE: u8 = 3;
    pub const READ_ONLY: u8 = 4;
    pub const GEN_ERR: u8 = 5;
    pub const NO_ACCESS: u8 = 6;
    pub const WRONG_TYPE: u8 = 7;
    pub const WRONG_LENGTH: u8 = 8;
    pub const WRONG_ENCODING: u8 = 9;
    pub const WRONG_VALUE: u8 = 10;
    pub const NO_CREATION: u8 = 11;
    pub const INCONSISTENT_VALUE: u8 = 12;
    pub const RESOURCE_UNAVAILABLE: u8 = 13;
    pub const COMMIT_FAILED: u8 = 14;
    pub const UNDO_FAILED: u8 = 15;
    pub const AUTHORIZATION_ERROR: u8 = 16;
    pub const NOT_WRITABLE: u8 = 17;
    pub const INCONSISTENT_NAME: u8 = 18;

    pub const MAX: u8 = INCONSISTENT_NAME;
}

/// A top-level SNMP message: version, community, and one PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    version: u8,
    community: String,
    pdu: Pdu,
}

impl Message {
    /// Creates an empty message of the given kind. Fails
    /// `UnsupportedForVersion` if `(version, pdu_kind)` is disallowed
    /// (spec.md §3.3).
    pub fn new(version: u8, community: impl Into<String>, pdu_kind: PduKind) -> Result<Self> {
        Version::from_u8(version)?;
        if !pdu_kind.allowed_for_version(version) {
            return Err(Error::UnsupportedForVersion {
                version,
                pdu_type: pdu_kind.tag(),
            });
        }
        let pdu = if pdu_kind == PduKind::TrapV1 {
            Pdu::TrapV1(TrapV1Pdu {
                enterprise: ObjectIdentifier::new(vec![0, 0]),
                agent_addr: [0, 0, 0, 0],
                generic_trap: 0,
                specific_trap: 0,
                timestamp: 0,
                varbinds: VarBindList::new(),
            })
        } else {
            Pdu::Standard(StandardPdu {
                kind: pdu_kind,
                request_id: 0,
                error_status: 0,
                error_index: 0,
                varbinds: VarBindList::new(),
            })
        };
        Ok(Message {
            version,
            community: community.into(),
            pdu,
        })
    }

    // ---- mutators ----

    /// Sets the PDU's request-id. No-op on a v1 Trap PDU, which has no
    /// request-id field.
    pub fn set_request_id(&mut self, request_id: u32) {
        if let Pdu::Standard(p) = &mut self.pdu {
            p.request_id = request_id as i32;
        }
    }

    /// Sets error-status/error-index. For `GetBulkRequest`, these are
    /// `non_repeaters`/`max_repetitions` (spec.md §3.3.1).
    pub fn set_error(&mut self, status: u8, index: u8) {
        if let Pdu::Standard(p) = &mut self.pdu {
            p.error_status = status;
            p.error_index = index;
        }
    }

    /// Appends a variable binding, becoming owned by this message
    /// (spec.md §3.4).
    pub fn add(&mut self, oid: ObjectIdentifier, value: Value) {
        self.pdu.varbinds_mut().push(VarBind::new(oid, value));
    }

    /// Sets the v1 Trap-specific fields. No-op on non-Trap PDUs.
    #[allow(clippy::too_many_arguments)]
    pub fn set_trap_fields(
        &mut self,
        enterprise: ObjectIdentifier,
        agent_addr: [u8; 4],
        generic_trap: u8,
        specific_trap: i32,
        timestamp: u32,
    ) {
        if let Pdu::TrapV1(p) = &mut self.pdu {
            p.enterprise = enterprise;
            p.agent_addr = agent_addr;
            p.generic_trap = generic_trap;
            p.specific_trap = specific_trap;
            p.timestamp = timestamp;
        }
    }

    // ---- accessors ----

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn community(&self) -> &str {
        &self.community
    }

    pub fn pdu_type(&self) -> u8 {
        self.pdu.tag()
    }

    pub fn request_id(&self) -> u32 {
        match &self.pdu {
            Pdu::Standard(p) => p.request_id as u32,
            Pdu::TrapV1(_) => 0,
        }
    }

    pub fn error_status(&self) -> u8 {
        match &self.pdu {
            Pdu::Standard(p) => p.error_status,
            Pdu::TrapV1(_) => 0,
        }
    }

    pub fn error_index(&self) -> u8 {
        match &self.pdu {
            Pdu::Standard(p) => p.error_index,
            Pdu::TrapV1(_) => 0,
        }
    }

    pub fn varbind_list(&self) -> &VarBindList {
        self.pdu.varbinds()
    }

    pub fn enterprise(&self) -> Option<&ObjectIdentifier> {
        match &self.pdu {
            Pdu::TrapV1(p) => Some(&p.enterprise),
            _ => None,
        }
    }

    pub fn agent_addr(&self) -> Option<[u8; 4]> {
        match &self.pdu {
            Pdu::TrapV1(p) => Some(p.agent_addr),
            _ => None,
        }
    }

    pub fn generic_trap(&self) -> Option<u8> {
        match &self.pdu {
            Pdu::TrapV1(p) => Some(p.generic_trap),
            _ => None,
        }
    }

    pub fn specific_trap(&self) -> Option<i32> {
        match &self.pdu {
            Pdu::TrapV1(p) => Some(p.specific_trap),
            _ => None,
        }
    }

    pub fn timestamp(&self) -> Option<u32> {
        match &self.pdu {
            Pdu::TrapV1(p) => Some(p.timestamp),
            _ => None,
        }
    }

    // ---- size and serialize ----

    fn to_value(&self) -> Value {
        let pdu_fields = match &self.pdu {
            Pdu::Standard(p) => vec![
                Value::Integer(p.request_id as i64),
                Value::Integer(p.error_status as i64),
                Value::Integer(p.error_index as i64),
                p.varbinds.to_value(),
            ],
            Pdu::TrapV1(p) => vec![
                Value::ObjectIdentifier(p.enterprise.clone()),
                Value::IpAddress(p.agent_addr),
                Value::Integer(p.generic_trap as i64),
                Value::Integer(p.specific_trap as i64),
                Value::TimeTicks(p.timestamp),
                p.varbinds.to_value(),
            ],
        };
        let pdu_value = Value::Pdu {
            tag: self.pdu.tag(),
            fields: pdu_fields,
        };
        Value::Sequence(vec![
            Value::Integer(self.version as i64),
            Value::OctetString(self.community.as_bytes().to_vec()),
            pdu_value,
        ])
    }

    /// Total BER-encoded size of this message.
    pub fn encoded_size(&self) -> usize {
        self.to_value().encoded_len()
    }

    /// Serializes this message starting at offset 0 of `buffer`, returning
    /// the number of bytes written. `buffer` is cleared first.
    pub fn build(&self, buffer: &mut Vec<u8>) -> usize {
        buffer.clear();
        self.to_value().encode(buffer);
        buffer.len()
    }

    /// Parses and grammar-validates a message from a complete BER byte
    /// buffer (spec.md §4.2's validation policy).
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        let (value, consumed) = Value::parse(buffer, 0)?;
        if consumed != buffer.len() {
            return Err(Error::malformed("trailing bytes after top-level Sequence"));
        }
        let top = value
            .children()
            .filter(|_| value.tag() == crate::ber::Tag::SEQUENCE)
            .ok_or_else(|| Error::grammar_violation("message must be a top-level Sequence"))?;
        let [version_val, community_val, pdu_val] = top else {
            return Err(Error::grammar_violation(format!(
                "message must have exactly 3 fields, found {}",
                top.len()
            )));
        };

        let version_raw = version_val
            .as_integer()
            .ok_or_else(|| Error::grammar_violation("version must be an INTEGER"))?;
        let version = u8::try_from(version_raw)
            .map_err(|_| Error::grammar_violation("version out of range"))?;
        Version::from_u8(version)?;

        let community = community_val
            .as_octet_string()
            .ok_or_else(|| Error::grammar_violation("community must be an OCTET STRING"))?;
        // OctetString is arbitrary bytes (spec.md §3.1); lossy UTF-8
        // conversion would silently rewrite a non-UTF-8 community and break
        // the round-trip invariant (spec.md §3.3). Reject instead.
        let community = String::from_utf8(community.to_vec())
            .map_err(|_| Error::grammar_violation("community is not valid UTF-8"))?;

        let Value::Pdu { tag: pdu_tag, fields } = pdu_val else {
            return Err(Error::grammar_violation("third field must be a PDU"));
        };
        let kind = PduKind::from_tag(*pdu_tag)?;
        if !kind.allowed_for_version(version) {
            return Err(Error::UnsupportedForVersion {
                version,
                pdu_type: *pdu_tag,
            });
        }

        let pdu = if kind == PduKind::TrapV1 {
            let [enterprise, agent_addr, generic_trap, specific_trap, timestamp, varbind_list] =
                fields.as_slice()
            else {
                return Err(Error::grammar_violation(format!(
                    "Trap-PDU must have exactly 6 fields, found {}",
                    fields.len()
                )));
            };
            let enterprise = enterprise
                .as_oid()
                .ok_or_else(|| Error::grammar_violation("enterprise must be an OBJECT IDENTIFIER"))?
                .clone();
            let agent_addr = match agent_addr {
                Value::IpAddress(octets) => *octets,
                _ => return Err(Error::grammar_violation("agent_addr must be an IpAddress")),
            };
            let generic_trap = u8::try_from(
                generic_trap
                    .as_integer()
                    .ok_or_else(|| Error::grammar_violation("generic_trap must be an INTEGER"))?,
            )
            .map_err(|_| Error::grammar_violation("generic_trap out of range"))?;
            if generic_trap > 6 {
                return Err(Error::grammar_violation(format!(
                    "generic_trap {generic_trap} exceeds maximum 6"
                )));
            }
            let specific_trap = i32::try_from(
                specific_trap
                    .as_integer()
                    .ok_or_else(|| Error::grammar_violation("specific_trap must be an INTEGER"))?,
            )
            .map_err(|_| Error::grammar_violation("specific_trap out of range"))?;
            let timestamp = match timestamp {
                Value::TimeTicks(t) => *t,
                _ => return Err(Error::grammar_violation("timestamp must be a TimeTicks")),
            };
            Pdu::TrapV1(TrapV1Pdu {
                enterprise,
                agent_addr,
                generic_trap,
                specific_trap,
                timestamp,
                varbinds: VarBindList::from_value(varbind_list)?,
            })
        } else {
            let [request_id, error_status, error_index, varbind_list] = fields.as_slice() else {
                return Err(Error::grammar_violation(format!(
                    "standard PDU must have exactly 4 fields, found {}",
                    fields.len()
                )));
            };
            let request_id = i32::try_from(
                request_id
                    .as_integer()
                    .ok_or_else(|| Error::grammar_violation("request-id must be an INTEGER"))?,
            )
            .map_err(|_| Error::grammar_violation("request-id out of range"))?;
            let error_status_raw = error_status
                .as_integer()
                .ok_or_else(|| Error::grammar_violation("error-status must be an INTEGER"))?;
            let error_status = u8::try_from(error_status_raw)
                .map_err(|_| Error::grammar_violation("error-status out of range"))?;
            // GetBulkRequest reinterprets this field as non_repeaters, which
            // isn't bounded by the error-status enum (spec.md §3.3.1).
            if kind != PduKind::GetBulkRequest && error_status > error_status::MAX {
                return Err(Error::grammar_violation(format!(
                    "error-status {error_status} exceeds maximum {}",
                    error_status::MAX
                )));
            }
            let error_index = u8::try_from(
                error_index
                    .as_integer()
                    .ok_or_else(|| Error::grammar_violation("error-index must be an INTEGER"))?,
            )
            .map_err(|_| Error::grammar_violation("error-index does not fit in one unsigned byte"))?;
            Pdu::Standard(StandardPdu {
                kind,
                request_id,
                error_status,
                error_index,
                varbinds: VarBindList::from_value(varbind_list)?,
            })
        };

        Ok(Message {
            version,
            community,
            pdu,
        })
    }
}
