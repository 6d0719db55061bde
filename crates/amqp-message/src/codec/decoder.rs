//! AMQP 1.0 type-system decoder.

use indexmap::IndexMap;

use super::constants::*;
use super::AmqpCodecError;
use crate::{AmqpMessage, AmqpValue, Body, Properties};

/// AMQP 1.0 decoder over a byte slice.
///
/// Every read is bounds-checked; truncated input yields
/// [`AmqpCodecError::UnexpectedEof`]. Lists and maps nested deeper than
/// [`MAX_DEPTH`] yield [`AmqpCodecError::TooDeep`].
pub struct AmqpDecoder<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
}

/// Deepest list or map nesting the decoder accepts.
pub const MAX_DEPTH: usize = 128;

impl<'a> AmqpDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0, depth: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], AmqpCodecError> {
        if self.remaining() < n {
            return Err(AmqpCodecError::UnexpectedEof);
        }
        let bytes = &self.data[self.x..self.x + n];
        self.x += n;
        Ok(bytes)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], AmqpCodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, AmqpCodecError> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32, AmqpCodecError> {
        Ok(u32::from_be_bytes(self.array()?))
    }

    pub fn read_any(&mut self) -> Result<AmqpValue, AmqpCodecError> {
        let code = self.u8()?;
        self.read_value(code)
    }

    fn read_value(&mut self, code: u8) -> Result<AmqpValue, AmqpCodecError> {
        let value = match code {
            NULL => AmqpValue::Null,
            TRUE => AmqpValue::Boolean(true),
            FALSE => AmqpValue::Boolean(false),
            BOOLEAN => AmqpValue::Boolean(self.u8()? != 0),
            UBYTE => AmqpValue::Ubyte(self.u8()?),
            USHORT => AmqpValue::Ushort(u16::from_be_bytes(self.array()?)),
            UINT => AmqpValue::Uint(self.u32()?),
            SMALL_UINT => AmqpValue::Uint(self.u8()? as u32),
            UINT0 => AmqpValue::Uint(0),
            ULONG => AmqpValue::Ulong(u64::from_be_bytes(self.array()?)),
            SMALL_ULONG => AmqpValue::Ulong(self.u8()? as u64),
            ULONG0 => AmqpValue::Ulong(0),
            BYTE => AmqpValue::Byte(self.u8()? as i8),
            SHORT => AmqpValue::Short(i16::from_be_bytes(self.array()?)),
            INT => AmqpValue::Int(i32::from_be_bytes(self.array()?)),
            SMALL_INT => AmqpValue::Int(self.u8()? as i8 as i32),
            LONG => AmqpValue::Long(i64::from_be_bytes(self.array()?)),
            SMALL_LONG => AmqpValue::Long(self.u8()? as i8 as i64),
            FLOAT => AmqpValue::Float(f32::from_be_bytes(self.array()?)),
            DOUBLE => AmqpValue::Double(f64::from_be_bytes(self.array()?)),
            CHAR => {
                let point = self.u32()?;
                AmqpValue::Char(char::from_u32(point).ok_or(AmqpCodecError::InvalidChar(point))?)
            }
            TIMESTAMP => AmqpValue::Timestamp(i64::from_be_bytes(self.array()?)),
            UUID => AmqpValue::Uuid(self.array()?),
            VBIN8 => {
                let len = self.u8()? as usize;
                AmqpValue::Binary(self.take(len)?.to_vec())
            }
            VBIN32 => {
                let len = self.u32()? as usize;
                AmqpValue::Binary(self.take(len)?.to_vec())
            }
            STR8 | SYM8 => {
                let len = self.u8()? as usize;
                self.read_text(code == SYM8, len)?
            }
            STR32 | SYM32 => {
                let len = self.u32()? as usize;
                self.read_text(code == SYM32, len)?
            }
            LIST0 => AmqpValue::List(Vec::new()),
            LIST8 => {
                let size = self.u8()? as usize;
                AmqpValue::List(self.read_compound(size, false)?)
            }
            LIST32 => {
                let size = self.u32()? as usize;
                AmqpValue::List(self.read_compound(size, true)?)
            }
            MAP8 => {
                let size = self.u8()? as usize;
                pairs(self.read_compound(size, false)?)?
            }
            MAP32 => {
                let size = self.u32()? as usize;
                pairs(self.read_compound(size, true)?)?
            }
            other => return Err(AmqpCodecError::UnsupportedFormatCode(other)),
        };
        Ok(value)
    }

    fn read_text(&mut self, symbol: bool, len: usize) -> Result<AmqpValue, AmqpCodecError> {
        let text = std::str::from_utf8(self.take(len)?)
            .map_err(|_| AmqpCodecError::InvalidUtf8)?
            .to_owned();
        Ok(if symbol {
            AmqpValue::Symbol(text)
        } else {
            AmqpValue::String(text)
        })
    }

    /// Reads the count and elements of a list or map whose size field has
    /// already been consumed. The elements must fill the size exactly.
    fn read_compound(&mut self, size: usize, wide: bool) -> Result<Vec<AmqpValue>, AmqpCodecError> {
        if self.depth >= MAX_DEPTH {
            return Err(AmqpCodecError::TooDeep);
        }
        let mut inner = AmqpDecoder {
            data: self.take(size)?,
            x: 0,
            depth: self.depth + 1,
        };
        let count = if wide {
            inner.u32()? as usize
        } else {
            inner.u8()? as usize
        };
        let mut items = Vec::with_capacity(count.min(inner.remaining()));
        for _ in 0..count {
            items.push(inner.read_any()?);
        }
        if inner.remaining() != 0 {
            return Err(AmqpCodecError::SizeMismatch);
        }
        Ok(items)
    }

    /// Reads message sections until the input is exhausted.
    pub fn read_message(&mut self) -> Result<AmqpMessage, AmqpCodecError> {
        let mut message = AmqpMessage::new();
        while self.remaining() > 0 {
            let at = self.x;
            if self.u8()? != DESCRIBED {
                return Err(AmqpCodecError::ExpectedSection(at));
            }
            let code = match self.read_any()? {
                AmqpValue::Ulong(code) => code,
                AmqpValue::Symbol(name) => match section_code(&name) {
                    Some(code) => code,
                    None => return Err(AmqpCodecError::UnknownSection(name)),
                },
                other => return Err(AmqpCodecError::UnknownSection(format!("{other:?}"))),
            };
            let value = self.read_any()?;
            match code {
                SECTION_HEADER
                | SECTION_DELIVERY_ANNOTATIONS
                | SECTION_MESSAGE_ANNOTATIONS
                | SECTION_FOOTER => {}
                SECTION_PROPERTIES => message.properties = properties_from(value)?,
                SECTION_APPLICATION_PROPERTIES => {
                    message.application_properties = application_properties_from(value)?
                }
                SECTION_DATA => {
                    let AmqpValue::Binary(bytes) = value else {
                        return Err(AmqpCodecError::InvalidSection("data"));
                    };
                    if let Body::Data(buf) = &mut message.body {
                        buf.extend_from_slice(&bytes);
                    } else if message.body == Body::Empty {
                        message.body = Body::Data(bytes);
                    } else {
                        return Err(AmqpCodecError::InvalidSection("data"));
                    }
                }
                SECTION_AMQP_SEQUENCE => {
                    let AmqpValue::List(items) = value else {
                        return Err(AmqpCodecError::InvalidSection("amqp-sequence"));
                    };
                    if let Body::Sequence(buf) = &mut message.body {
                        buf.extend(items);
                    } else if message.body == Body::Empty {
                        message.body = Body::Sequence(items);
                    } else {
                        return Err(AmqpCodecError::InvalidSection("amqp-sequence"));
                    }
                }
                SECTION_AMQP_VALUE => {
                    if message.body != Body::Empty {
                        return Err(AmqpCodecError::InvalidSection("amqp-value"));
                    }
                    message.body = Body::Value(value);
                }
                other => return Err(AmqpCodecError::UnknownSection(format!("0x{other:x}"))),
            }
        }
        Ok(message)
    }
}

fn pairs(items: Vec<AmqpValue>) -> Result<AmqpValue, AmqpCodecError> {
    if items.len() % 2 != 0 {
        return Err(AmqpCodecError::OddMapCount(items.len()));
    }
    let mut out = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        out.push((key, value));
    }
    Ok(AmqpValue::Map(out))
}

fn application_properties_from(
    value: AmqpValue,
) -> Result<IndexMap<String, AmqpValue>, AmqpCodecError> {
    let AmqpValue::Map(entries) = value else {
        return Err(AmqpCodecError::InvalidSection("application-properties"));
    };
    let mut out = IndexMap::with_capacity(entries.len());
    for (key, value) in entries {
        let AmqpValue::String(key) = key else {
            return Err(AmqpCodecError::InvalidSection("application-properties"));
        };
        out.insert(key, value);
    }
    Ok(out)
}

fn properties_from(value: AmqpValue) -> Result<Properties, AmqpCodecError> {
    const SECTION: &str = "properties";
    let AmqpValue::List(fields) = value else {
        return Err(AmqpCodecError::InvalidSection(SECTION));
    };
    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or(AmqpValue::Null);

    let any = |v: AmqpValue| match v {
        AmqpValue::Null => None,
        other => Some(other),
    };
    let text = |v: AmqpValue| match v {
        AmqpValue::Null => Ok(None),
        AmqpValue::String(s) | AmqpValue::Symbol(s) => Ok(Some(s)),
        _ => Err(AmqpCodecError::InvalidSection(SECTION)),
    };
    let timestamp = |v: AmqpValue| match v {
        AmqpValue::Null => Ok(None),
        AmqpValue::Timestamp(t) => Ok(Some(t)),
        _ => Err(AmqpCodecError::InvalidSection(SECTION)),
    };

    Ok(Properties {
        message_id: any(next()),
        user_id: match next() {
            AmqpValue::Null => None,
            AmqpValue::Binary(b) => Some(b),
            _ => return Err(AmqpCodecError::InvalidSection(SECTION)),
        },
        to: text(next())?,
        subject: text(next())?,
        reply_to: text(next())?,
        correlation_id: any(next()),
        content_type: text(next())?,
        content_encoding: text(next())?,
        absolute_expiry_time: timestamp(next())?,
        creation_time: timestamp(next())?,
        group_id: text(next())?,
        group_sequence: match next() {
            AmqpValue::Null => None,
            AmqpValue::Uint(v) => Some(v),
            _ => return Err(AmqpCodecError::InvalidSection(SECTION)),
        },
        reply_to_group_id: text(next())?,
    })
}
