//! AMQP 1.0 type-system values.

/// A value of the AMQP 1.0 type system.
///
/// Arrays and described values other than message sections are not
/// modelled.
#[derive(Debug, Clone, PartialEq)]
pub enum AmqpValue {
    Null,
    Boolean(bool),
    Ubyte(u8),
    Ushort(u16),
    Uint(u32),
    Ulong(u64),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    /// Milliseconds since the Unix epoch, UTC.
    Timestamp(i64),
    Uuid([u8; 16]),
    Binary(Vec<u8>),
    String(String),
    Symbol(String),
    List(Vec<AmqpValue>),
    Map(Vec<(AmqpValue, AmqpValue)>),
}

impl AmqpValue {
    /// AMQP type name, e.g. `"timestamp"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            AmqpValue::Null => "null",
            AmqpValue::Boolean(_) => "boolean",
            AmqpValue::Ubyte(_) => "ubyte",
            AmqpValue::Ushort(_) => "ushort",
            AmqpValue::Uint(_) => "uint",
            AmqpValue::Ulong(_) => "ulong",
            AmqpValue::Byte(_) => "byte",
            AmqpValue::Short(_) => "short",
            AmqpValue::Int(_) => "int",
            AmqpValue::Long(_) => "long",
            AmqpValue::Float(_) => "float",
            AmqpValue::Double(_) => "double",
            AmqpValue::Char(_) => "char",
            AmqpValue::Timestamp(_) => "timestamp",
            AmqpValue::Uuid(_) => "uuid",
            AmqpValue::Binary(_) => "binary",
            AmqpValue::String(_) => "string",
            AmqpValue::Symbol(_) => "symbol",
            AmqpValue::List(_) => "list",
            AmqpValue::Map(_) => "map",
        }
    }

    /// Scalar values are everything but lists and maps; only scalars may
    /// appear in application-properties.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, AmqpValue::List(_) | AmqpValue::Map(_))
    }

    /// Text of a `string` or `symbol`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AmqpValue::String(s) | AmqpValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Any integer value that fits an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            AmqpValue::Ubyte(v) => Some(v as i64),
            AmqpValue::Ushort(v) => Some(v as i64),
            AmqpValue::Uint(v) => Some(v as i64),
            AmqpValue::Ulong(v) => i64::try_from(v).ok(),
            AmqpValue::Byte(v) => Some(v as i64),
            AmqpValue::Short(v) => Some(v as i64),
            AmqpValue::Int(v) => Some(v as i64),
            AmqpValue::Long(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for AmqpValue {
    fn from(value: &str) -> Self {
        AmqpValue::String(value.to_owned())
    }
}

impl From<String> for AmqpValue {
    fn from(value: String) -> Self {
        AmqpValue::String(value)
    }
}

impl From<bool> for AmqpValue {
    fn from(value: bool) -> Self {
        AmqpValue::Boolean(value)
    }
}

impl From<i64> for AmqpValue {
    fn from(value: i64) -> Self {
        AmqpValue::Long(value)
    }
}

impl From<Vec<u8>> for AmqpValue {
    fn from(value: Vec<u8>) -> Self {
        AmqpValue::Binary(value)
    }
}
