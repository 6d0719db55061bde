//! AMQP codec error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmqpCodecError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unsupported format code 0x{0:02x}")]
    UnsupportedFormatCode(u8),
    #[error("invalid UTF-8 in string or symbol")]
    InvalidUtf8,
    #[error("invalid char code point 0x{0:x}")]
    InvalidChar(u32),
    #[error("map with odd element count {0}")]
    OddMapCount(usize),
    #[error("compound size does not match its contents")]
    SizeMismatch,
    #[error("lists and maps nested too deeply")]
    TooDeep,
    #[error("value too large to encode")]
    TooLarge,
    #[error("expected a message section at byte {0}")]
    ExpectedSection(usize),
    #[error("unknown message section descriptor {0}")]
    UnknownSection(String),
    #[error("malformed {0} section")]
    InvalidSection(&'static str),
    #[error("application property `{0}` must be a scalar value")]
    NonScalarApplicationProperty(String),
}
