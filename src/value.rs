use std::fmt;

use log::trace;

use crate::error::{ConversionError, ConversionReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    String,
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
    F32,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::F32 => write!(f, "f32"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool { value: bool },
    String { value: String },
    I8 { value: i8 },
    I16 { value: i16 },
    I32 { value: i32 },
    U8 { value: u8 },
    U16 { value: u16 },
    U32 { value: u32 },
    F32 { value: f32 },
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool { value: _ } => ValueKind::Bool,
            Self::String { value: _ } => ValueKind::String,
            Self::I8 { value: _ } => ValueKind::I8,
            Self::I16 { value: _ } => ValueKind::I16,
            Self::I32 { value: _ } => ValueKind::I32,
            Self::U8 { value: _ } => ValueKind::U8,
            Self::U16 { value: _ } => ValueKind::U16,
            Self::U32 { value: _ } => ValueKind::U32,
            Self::F32 { value: _ } => ValueKind::F32,
        }
    }

    pub fn default_for(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => Self::Bool { value: false },
            ValueKind::String => Self::String {
                value: String::new(),
            },
            ValueKind::I8 => Self::I8 { value: 0 },
            ValueKind::I16 => Self::I16 { value: 0 },
            ValueKind::I32 => Self::I32 { value: 0 },
            ValueKind::U8 => Self::U8 { value: 0 },
            ValueKind::U16 => Self::U16 { value: 0 },
            ValueKind::U32 => Self::U32 { value: 0 },
            ValueKind::F32 => Self::F32 { value: 0.0 },
        }
    }

    /// Converts a raw command line token into a value of `kind`.
    ///
    /// Integers are read as base-10 numbers of the declared width, floats as
    /// decimal literals. Strings are taken verbatim and never fail.
    pub fn parse(kind: ValueKind, token: &str) -> Result<Self, ConversionError> {
        trace!("value::Value::parse(kind: {kind}, token: {token:?})");
        let value = match kind {
            ValueKind::Bool => match token.to_ascii_lowercase().as_str() {
                "true" => Self::Bool { value: true },
                "false" => Self::Bool { value: false },
                _ => return Err(ConversionError::invalid(kind, token)),
            },
            ValueKind::String => Self::String {
                value: token.to_string(),
            },
            ValueKind::I8 => Self::I8 {
                value: parse_int(kind, token)?,
            },
            ValueKind::I16 => Self::I16 {
                value: parse_int(kind, token)?,
            },
            ValueKind::I32 => Self::I32 {
                value: parse_int(kind, token)?,
            },
            ValueKind::U8 => Self::U8 {
                value: parse_int(kind, token)?,
            },
            ValueKind::U16 => Self::U16 {
                value: parse_int(kind, token)?,
            },
            ValueKind::U32 => Self::U32 {
                value: parse_int(kind, token)?,
            },
            ValueKind::F32 => Self::F32 {
                value: parse_float(token)?,
            },
        };

        Ok(value)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool { value } => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { value } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Any integer kind, widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I8 { value } => Some(i64::from(*value)),
            Self::I16 { value } => Some(i64::from(*value)),
            Self::I32 { value } => Some(i64::from(*value)),
            Self::U8 { value } => Some(i64::from(*value)),
            Self::U16 { value } => Some(i64::from(*value)),
            Self::U32 { value } => Some(i64::from(*value)),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32 { value } => Some(*value),
            _ => None,
        }
    }
}

fn parse_int<T>(kind: ValueKind, token: &str) -> Result<T, ConversionError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    use std::num::IntErrorKind;

    token.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ConversionError::new(kind, token, ConversionReason::OutOfRange)
        }
        _ => ConversionError::invalid(kind, token),
    })
}

fn parse_float(token: &str) -> Result<f32, ConversionError> {
    let Ok(value) = token.parse::<f32>() else {
        return Err(ConversionError::invalid(ValueKind::F32, token));
    };

    // "inf" and "NaN" parse, but they are not decimal numbers.
    let literal = token.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if value.is_nan() || literal == "inf" || literal == "infinity" {
        return Err(ConversionError::invalid(ValueKind::F32, token));
    }

    if value.is_infinite() {
        return Err(ConversionError::new(
            ValueKind::F32,
            token,
            ConversionReason::OutOfRange,
        ));
    }

    Ok(value)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool { value } => write!(f, "{value}"),
            Self::String { value } => write!(f, "{value}"),
            Self::I8 { value } => write!(f, "{value}"),
            Self::I16 { value } => write!(f, "{value}"),
            Self::I32 { value } => write!(f, "{value}"),
            Self::U8 { value } => write!(f, "{value}"),
            Self::U16 { value } => write!(f, "{value}"),
            Self::U32 { value } => write!(f, "{value}"),
            Self::F32 { value } => write!(f, "{value}"),
        }
    }
}
