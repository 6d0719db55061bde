//! AMQP 1.0 type-system encoder.

use super::constants::*;
use super::AmqpCodecError;
use crate::{AmqpMessage, AmqpValue, Body, Properties};

/// AMQP 1.0 encoder.
///
/// Picks the most compact encoding for each value: `uint0`/`smalluint`,
/// `smalllong`, `str8`, `list0`, one-byte compound headers and so on.
pub struct AmqpEncoder {
    pub buf: Vec<u8>,
}

impl Default for AmqpEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AmqpEncoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Encodes a single value and returns the bytes.
    pub fn encode(&mut self, value: &AmqpValue) -> Result<Vec<u8>, AmqpCodecError> {
        self.buf.clear();
        self.write_any(value)?;
        Ok(std::mem::take(&mut self.buf))
    }

    /// Encodes the properties, application-properties and body sections.
    ///
    /// Empty properties and application-properties are omitted.
    pub fn encode_message(&mut self, message: &AmqpMessage) -> Result<Vec<u8>, AmqpCodecError> {
        self.buf.clear();
        if !message.properties.is_empty() {
            self.write_section(SECTION_PROPERTIES);
            self.write_list(&properties_fields(&message.properties))?;
        }
        if !message.application_properties.is_empty() {
            let mut inner = AmqpEncoder::new();
            for (key, value) in &message.application_properties {
                if !value.is_scalar() {
                    return Err(AmqpCodecError::NonScalarApplicationProperty(key.clone()));
                }
                inner.write_str(key)?;
                inner.write_any(value)?;
            }
            self.write_section(SECTION_APPLICATION_PROPERTIES);
            let count = message.application_properties.len() * 2;
            self.write_compound(MAP8, MAP32, count, &inner.buf)?;
        }
        match &message.body {
            Body::Empty => {}
            Body::Data(bytes) => {
                self.write_section(SECTION_DATA);
                self.write_binary(bytes)?;
            }
            Body::Sequence(items) => {
                self.write_section(SECTION_AMQP_SEQUENCE);
                self.write_list(items)?;
            }
            Body::Value(value) => {
                self.write_section(SECTION_AMQP_VALUE);
                self.write_any(value)?;
            }
        }
        Ok(std::mem::take(&mut self.buf))
    }

    pub fn write_any(&mut self, value: &AmqpValue) -> Result<(), AmqpCodecError> {
        match value {
            AmqpValue::Null => self.write_null(),
            AmqpValue::Boolean(b) => self.write_boolean(*b),
            AmqpValue::Ubyte(v) => self.write_ubyte(*v),
            AmqpValue::Ushort(v) => self.write_ushort(*v),
            AmqpValue::Uint(v) => self.write_uint(*v),
            AmqpValue::Ulong(v) => self.write_ulong(*v),
            AmqpValue::Byte(v) => self.write_byte(*v),
            AmqpValue::Short(v) => self.write_short(*v),
            AmqpValue::Int(v) => self.write_int(*v),
            AmqpValue::Long(v) => self.write_long(*v),
            AmqpValue::Float(v) => self.write_float(*v),
            AmqpValue::Double(v) => self.write_double(*v),
            AmqpValue::Char(c) => self.write_char(*c),
            AmqpValue::Timestamp(ms) => self.write_timestamp(*ms),
            AmqpValue::Uuid(bytes) => self.write_uuid(bytes),
            AmqpValue::Binary(bytes) => return self.write_binary(bytes),
            AmqpValue::String(s) => return self.write_str(s),
            AmqpValue::Symbol(s) => return self.write_symbol(s),
            AmqpValue::List(items) => return self.write_list(items),
            AmqpValue::Map(pairs) => return self.write_map(pairs),
        }
        Ok(())
    }

    /// Writes a section descriptor: `0x00` followed by the numeric code.
    pub fn write_section(&mut self, code: u64) {
        self.buf.push(DESCRIBED);
        self.write_ulong(code);
    }

    pub fn write_null(&mut self) {
        self.buf.push(NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.buf.push(if b { TRUE } else { FALSE });
    }

    pub fn write_ubyte(&mut self, v: u8) {
        self.buf.extend_from_slice(&[UBYTE, v]);
    }

    pub fn write_ushort(&mut self, v: u16) {
        self.buf.push(USHORT);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_uint(&mut self, v: u32) {
        match v {
            0 => self.buf.push(UINT0),
            1..=0xff => self.buf.extend_from_slice(&[SMALL_UINT, v as u8]),
            _ => {
                self.buf.push(UINT);
                self.buf.extend_from_slice(&v.to_be_bytes());
            }
        }
    }

    pub fn write_ulong(&mut self, v: u64) {
        match v {
            0 => self.buf.push(ULONG0),
            1..=0xff => self.buf.extend_from_slice(&[SMALL_ULONG, v as u8]),
            _ => {
                self.buf.push(ULONG);
                self.buf.extend_from_slice(&v.to_be_bytes());
            }
        }
    }

    pub fn write_byte(&mut self, v: i8) {
        self.buf.extend_from_slice(&[BYTE, v as u8]);
    }

    pub fn write_short(&mut self, v: i16) {
        self.buf.push(SHORT);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_int(&mut self, v: i32) {
        if let Ok(small) = i8::try_from(v) {
            self.buf.extend_from_slice(&[SMALL_INT, small as u8]);
        } else {
            self.buf.push(INT);
            self.buf.extend_from_slice(&v.to_be_bytes());
        }
    }

    pub fn write_long(&mut self, v: i64) {
        if let Ok(small) = i8::try_from(v) {
            self.buf.extend_from_slice(&[SMALL_LONG, small as u8]);
        } else {
            self.buf.push(LONG);
            self.buf.extend_from_slice(&v.to_be_bytes());
        }
    }

    pub fn write_float(&mut self, v: f32) {
        self.buf.push(FLOAT);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_double(&mut self, v: f64) {
        self.buf.push(DOUBLE);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Writes a UTF-32BE char.
    pub fn write_char(&mut self, c: char) {
        self.buf.push(CHAR);
        self.buf.extend_from_slice(&(c as u32).to_be_bytes());
    }

    pub fn write_timestamp(&mut self, millis: i64) {
        self.buf.push(TIMESTAMP);
        self.buf.extend_from_slice(&millis.to_be_bytes());
    }

    pub fn write_uuid(&mut self, bytes: &[u8; 16]) {
        self.buf.push(UUID);
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_binary(&mut self, bytes: &[u8]) -> Result<(), AmqpCodecError> {
        self.write_variable(VBIN8, VBIN32, bytes)
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), AmqpCodecError> {
        self.write_variable(STR8, STR32, s.as_bytes())
    }

    pub fn write_symbol(&mut self, s: &str) -> Result<(), AmqpCodecError> {
        self.write_variable(SYM8, SYM32, s.as_bytes())
    }

    pub fn write_list(&mut self, items: &[AmqpValue]) -> Result<(), AmqpCodecError> {
        if items.is_empty() {
            self.buf.push(LIST0);
            return Ok(());
        }
        let mut inner = AmqpEncoder::new();
        for item in items {
            inner.write_any(item)?;
        }
        self.write_compound(LIST8, LIST32, items.len(), &inner.buf)
    }

    pub fn write_map(&mut self, pairs: &[(AmqpValue, AmqpValue)]) -> Result<(), AmqpCodecError> {
        let mut inner = AmqpEncoder::new();
        for (key, value) in pairs {
            inner.write_any(key)?;
            inner.write_any(value)?;
        }
        self.write_compound(MAP8, MAP32, pairs.len() * 2, &inner.buf)
    }

    fn write_variable(&mut self, code8: u8, code32: u8, bytes: &[u8]) -> Result<(), AmqpCodecError> {
        if let Ok(len) = u8::try_from(bytes.len()) {
            self.buf.extend_from_slice(&[code8, len]);
        } else {
            let len = u32::try_from(bytes.len()).map_err(|_| AmqpCodecError::TooLarge)?;
            self.buf.push(code32);
            self.buf.extend_from_slice(&len.to_be_bytes());
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes a list or map header followed by the pre-encoded elements.
    /// The size field counts the count field plus the element bytes.
    fn write_compound(
        &mut self,
        code8: u8,
        code32: u8,
        count: usize,
        body: &[u8],
    ) -> Result<(), AmqpCodecError> {
        match (u8::try_from(body.len() + 1), u8::try_from(count)) {
            (Ok(size), Ok(count)) => self.buf.extend_from_slice(&[code8, size, count]),
            _ => {
                let size = u32::try_from(body.len() + 4).map_err(|_| AmqpCodecError::TooLarge)?;
                let count = u32::try_from(count).map_err(|_| AmqpCodecError::TooLarge)?;
                self.buf.push(code32);
                self.buf.extend_from_slice(&size.to_be_bytes());
                self.buf.extend_from_slice(&count.to_be_bytes());
            }
        }
        self.buf.extend_from_slice(body);
        Ok(())
    }
}

/// The `properties` list with trailing absent fields trimmed.
fn properties_fields(p: &Properties) -> Vec<AmqpValue> {
    let string = |s: &Option<String>| s.clone().map_or(AmqpValue::Null, AmqpValue::String);
    let symbol = |s: &Option<String>| s.clone().map_or(AmqpValue::Null, AmqpValue::Symbol);
    let timestamp = |t: &Option<i64>| t.map_or(AmqpValue::Null, AmqpValue::Timestamp);
    let mut fields = vec![
        p.message_id.clone().unwrap_or(AmqpValue::Null),
        p.user_id.clone().map_or(AmqpValue::Null, AmqpValue::Binary),
        string(&p.to),
        string(&p.subject),
        string(&p.reply_to),
        p.correlation_id.clone().unwrap_or(AmqpValue::Null),
        symbol(&p.content_type),
        symbol(&p.content_encoding),
        timestamp(&p.absolute_expiry_time),
        timestamp(&p.creation_time),
        string(&p.group_id),
        p.group_sequence.map_or(AmqpValue::Null, AmqpValue::Uint),
        string(&p.reply_to_group_id),
    ];
    while fields.last() == Some(&AmqpValue::Null) {
        fields.pop();
    }
    fields
}
