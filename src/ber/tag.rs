//! BER/SNMP tag byte constants.

#![allow(missing_docs)]

/// Type-discriminating tag byte recognized by the codec. Kept as a thin
/// newtype over `u8` rather than a bare constant set so unknown tags can
/// still be carried around (e.g. for error messages) without a lossy cast.
pub struct Tag;

impl Tag {
    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30;

    pub const IP_ADDRESS: u8 = 0x40;
    pub const COUNTER32: u8 = 0x41;
    pub const GAUGE32: u8 = 0x42;
    pub const TIME_TICKS: u8 = 0x43;
    pub const OPAQUE: u8 = 0x44;
    pub const COUNTER64: u8 = 0x46;
    pub const FLOAT: u8 = 0x78;

    pub const NO_SUCH_OBJECT: u8 = 0x80;
    pub const NO_SUCH_INSTANCE: u8 = 0x81;
    pub const END_OF_MIB_VIEW: u8 = 0x82;

    pub const PDU_GET_REQUEST: u8 = 0xa0;
    pub const PDU_GET_NEXT_REQUEST: u8 = 0xa1;
    pub const PDU_GET_RESPONSE: u8 = 0xa2;
    pub const PDU_SET_REQUEST: u8 = 0xa3;
    pub const PDU_TRAP_V1: u8 = 0xa4;
    pub const PDU_GET_BULK_REQUEST: u8 = 0xa5;
    pub const PDU_INFORM_REQUEST: u8 = 0xa6;
    pub const PDU_TRAP_V2: u8 = 0xa7;

    /// True when `tag` is one of the PDU-variant tags (0xA0-0xA7).
    pub fn is_pdu(tag: u8) -> bool {
        (Self::PDU_GET_REQUEST..=Self::PDU_TRAP_V2).contains(&tag)
    }
}
