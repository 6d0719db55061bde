//! AMQP 1.0 type-system encoding of bare messages.
//!
//! Reference: OASIS AMQP 1.0, part 1 (types) and part 3 (message format).

pub mod constants;
mod decoder;
mod encoder;
mod error;

pub use decoder::{AmqpDecoder, MAX_DEPTH};
pub use encoder::AmqpEncoder;
pub use error::AmqpCodecError;

use crate::{AmqpMessage, AmqpValue};

/// Encodes the sections of `message` in wire order.
pub fn encode_message(message: &AmqpMessage) -> Result<Vec<u8>, AmqpCodecError> {
    AmqpEncoder::new().encode_message(message)
}

/// Decodes a bare message. Header, annotations and footer are skipped.
pub fn decode_message(bytes: &[u8]) -> Result<AmqpMessage, AmqpCodecError> {
    AmqpDecoder::new(bytes).read_message()
}

pub fn encode_value(value: &AmqpValue) -> Result<Vec<u8>, AmqpCodecError> {
    AmqpEncoder::new().encode(value)
}

/// Decodes exactly one value; trailing bytes are an error.
pub fn decode_value(bytes: &[u8]) -> Result<AmqpValue, AmqpCodecError> {
    let mut decoder = AmqpDecoder::new(bytes);
    let value = decoder.read_any()?;
    if decoder.remaining() != 0 {
        return Err(AmqpCodecError::SizeMismatch);
    }
    Ok(value)
}
