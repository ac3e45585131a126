pub mod binder;
pub mod config;
pub mod error;
pub mod logger;
pub mod registry;
pub mod value;

pub use binder::{BindResult, bind};
pub use config::Config;
pub use error::{BindError, ConversionError, ConversionReason, RegistryError};
pub use registry::{FieldHandle, HelpLine, OptionField, Registry};
pub use value::{Value, ValueKind};
