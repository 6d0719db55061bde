//! AMQP 1.0 format codes and section descriptors (OASIS AMQP 1.0, part 1 and 3).

pub const DESCRIBED: u8 = 0x00;

pub const NULL: u8 = 0x40;
pub const TRUE: u8 = 0x41;
pub const FALSE: u8 = 0x42;
pub const BOOLEAN: u8 = 0x56;

pub const UBYTE: u8 = 0x50;
pub const USHORT: u8 = 0x60;
pub const UINT: u8 = 0x70;
pub const SMALL_UINT: u8 = 0x52;
pub const UINT0: u8 = 0x43;
pub const ULONG: u8 = 0x80;
pub const SMALL_ULONG: u8 = 0x53;
pub const ULONG0: u8 = 0x44;

pub const BYTE: u8 = 0x51;
pub const SHORT: u8 = 0x61;
pub const INT: u8 = 0x71;
pub const SMALL_INT: u8 = 0x54;
pub const LONG: u8 = 0x81;
pub const SMALL_LONG: u8 = 0x55;

pub const FLOAT: u8 = 0x72;
pub const DOUBLE: u8 = 0x82;
pub const CHAR: u8 = 0x73;
pub const TIMESTAMP: u8 = 0x83;
pub const UUID: u8 = 0x98;

pub const VBIN8: u8 = 0xa0;
pub const VBIN32: u8 = 0xb0;
pub const STR8: u8 = 0xa1;
pub const STR32: u8 = 0xb1;
pub const SYM8: u8 = 0xa3;
pub const SYM32: u8 = 0xb3;

pub const LIST0: u8 = 0x45;
pub const LIST8: u8 = 0xc0;
pub const LIST32: u8 = 0xd0;
pub const MAP8: u8 = 0xc1;
pub const MAP32: u8 = 0xd1;

// Message section descriptors (numeric form)
pub const SECTION_HEADER: u64 = 0x70;
pub const SECTION_DELIVERY_ANNOTATIONS: u64 = 0x71;
pub const SECTION_MESSAGE_ANNOTATIONS: u64 = 0x72;
pub const SECTION_PROPERTIES: u64 = 0x73;
pub const SECTION_APPLICATION_PROPERTIES: u64 = 0x74;
pub const SECTION_DATA: u64 = 0x75;
pub const SECTION_AMQP_SEQUENCE: u64 = 0x76;
pub const SECTION_AMQP_VALUE: u64 = 0x77;
pub const SECTION_FOOTER: u64 = 0x78;

/// Maps a symbolic section descriptor to its numeric code.
pub fn section_code(symbol: &str) -> Option<u64> {
    match symbol {
        "amqp:header:list" => Some(SECTION_HEADER),
        "amqp:delivery-annotations:map" => Some(SECTION_DELIVERY_ANNOTATIONS),
        "amqp:message-annotations:map" => Some(SECTION_MESSAGE_ANNOTATIONS),
        "amqp:properties:list" => Some(SECTION_PROPERTIES),
        "amqp:application-properties:map" => Some(SECTION_APPLICATION_PROPERTIES),
        "amqp:data:binary" => Some(SECTION_DATA),
        "amqp:amqp-sequence:list" => Some(SECTION_AMQP_SEQUENCE),
        "amqp:amqp-value:*" => Some(SECTION_AMQP_VALUE),
        "amqp:footer:map" => Some(SECTION_FOOTER),
        _ => None,
    }
}
