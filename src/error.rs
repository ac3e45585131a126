use std::error::Error;
use std::fmt;

use crate::value::ValueKind;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    DuplicateFlag {
        flag: String,
    },
    EmptyFlag,
    TypeMismatch {
        flag: String,
        expected: ValueKind,
        found: ValueKind,
    },
    UnknownField,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFlag { flag } => write!(f, "Flag {flag} is already registered"),
            Self::EmptyFlag => write!(f, "Flag must not be empty"),
            Self::TypeMismatch {
                flag,
                expected,
                found,
            } => write!(f, "Flag {flag} expects a {expected} value, got {found}"),
            Self::UnknownField => write!(f, "Field does not belong to this registry"),
        }
    }
}

impl Error for RegistryError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionReason {
    Invalid,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionError {
    pub kind: ValueKind,
    pub token: String,
    pub reason: ConversionReason,
}

impl ConversionError {
    pub fn new(kind: ValueKind, token: &str, reason: ConversionReason) -> Self {
        Self {
            kind,
            token: token.to_string(),
            reason,
        }
    }

    pub fn invalid(kind: ValueKind, token: &str) -> Self {
        Self::new(kind, token, ConversionReason::Invalid)
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            kind,
            token,
            reason,
        } = self;
        match reason {
            ConversionReason::Invalid => write!(f, "{token:?} is not a valid {kind}"),
            ConversionReason::OutOfRange => write!(f, "{token:?} is out of range for {kind}"),
        }
    }
}

impl Error for ConversionError {}

#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    Conversion {
        flag: String,
        source: ConversionError,
    },
    MissingValue {
        flag: String,
    },
}

impl BindError {
    pub fn flag(&self) -> &str {
        match self {
            Self::Conversion { flag, source: _ } => flag,
            Self::MissingValue { flag } => flag,
        }
    }

    pub fn report(&self) {
        log::error!("{}", self);
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conversion { flag, source } => {
                write!(f, "Unable to read value for argument {flag}: {source}")
            }
            Self::MissingValue { flag } => {
                write!(f, "Unable to read value for argument {flag}: no value given")
            }
        }
    }
}

impl Error for BindError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Conversion { flag: _, source } => Some(source),
            Self::MissingValue { flag: _ } => None,
        }
    }
}

impl From<(&str, ConversionError)> for BindError {
    fn from((flag, source): (&str, ConversionError)) -> Self {
        BindError::Conversion {
            flag: flag.to_string(),
            source,
        }
    }
}
