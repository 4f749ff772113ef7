//! PDU kind discrimination and the two PDU body shapes SNMP v1/v2c use.

use crate::ber::Tag;
use crate::error::{Error, Result};

use super::varbind::VarBindList;

/// Which PDU variant a message's tag selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PduKind {
    GetRequest,
    GetNextRequest,
    GetResponse,
    SetRequest,
    TrapV1,
    GetBulkRequest,
    InformRequest,
    TrapV2,
}

impl PduKind {
    pub fn tag(self) -> u8 {
        match self {
            PduKind::GetRequest => Tag::PDU_GET_REQUEST,
            PduKind::GetNextRequest => Tag::PDU_GET_NEXT_REQUEST,
            PduKind::GetResponse => Tag::PDU_GET_RESPONSE,
            PduKind::SetRequest => Tag::PDU_SET_REQUEST,
            PduKind::TrapV1 => Tag::PDU_TRAP_V1,
            PduKind::GetBulkRequest => Tag::PDU_GET_BULK_REQUEST,
            PduKind::InformRequest => Tag::PDU_INFORM_REQUEST,
            PduKind::TrapV2 => Tag::PDU_TRAP_V2,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        Ok(match tag {
            Tag::PDU_GET_REQUEST => PduKind::GetRequest,
            Tag::PDU_GET_NEXT_REQUEST => PduKind::GetNextRequest,
            Tag::PDU_GET_RESPONSE => PduKind::GetResponse,
            Tag::PDU_SET_REQUEST => PduKind::SetRequest,
            Tag::PDU_TRAP_V1 => PduKind::TrapV1,
            Tag::PDU_GET_BULK_REQUEST => PduKind::GetBulkRequest,
            Tag::PDU_INFORM_REQUEST => PduKind::InformRequest,
            Tag::PDU_TRAP_V2 => PduKind::TrapV2,
            other => return Err(Error::malformed(format!("0x{other:02x} is not a PDU tag"))),
        })
    }

    /// True when `(version, self)` is a grammar-legal combination: v1 may
    /// not carry GetBulk/Inform/v2 Trap, and only v1 carries the v1 Trap
    /// PDU.
    pub fn allowed_for_version(self, version: u8) -> bool {
        match self {
            PduKind::GetRequest
            | PduKind::GetNextRequest
            | PduKind::GetResponse
            | PduKind::SetRequest => version == 0 || version == 1,
            PduKind::TrapV1 => version == 0,
            PduKind::GetBulkRequest | PduKind::InformRequest | PduKind::TrapV2 => version == 1,
        }
    }
}

/// The common body shape shared by every PDU except the v1 Trap. For
/// `GetBulkRequest`, `error_status` is `non_repeaters` and `error_index`
/// is `max_repetitions`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardPdu {
    pub kind: PduKind,
    pub request_id: i32,
    pub error_status: u8,
    pub error_index: u8,
    pub varbinds: VarBindList,
}

/// The v1 Trap PDU body.
#[derive(Debug, Clone, PartialEq)]
pub struct TrapV1Pdu {
    pub enterprise: crate::oid::ObjectIdentifier,
    pub agent_addr: [u8; 4],
    pub generic_trap: u8,
    pub specific_trap: i32,
    pub timestamp: u32,
    pub varbinds: VarBindList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pdu {
    Standard(StandardPdu),
    TrapV1(TrapV1Pdu),
}

impl Pdu {
    pub fn kind(&self) -> PduKind {
        match self {
            Pdu::Standard(p) => p.kind,
            Pdu::TrapV1(_) => PduKind::TrapV1,
        }
    }

    pub fn tag(&self) -> u8 {
        self.kind().tag()
    }

    pub fn varbinds(&self) -> &VarBindList {
        match self {
            Pdu::Standard(p) => &p.varbinds,
            Pdu::TrapV1(p) => &p.varbinds,
        }
    }

    pub fn varbinds_mut(&mut self) -> &mut VarBindList {
        match self {
            Pdu::Standard(p) => &mut p.varbinds,
            Pdu::TrapV1(p) => &mut p.varbinds,
        }
    }
}
