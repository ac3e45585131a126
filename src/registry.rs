use std::fmt;

use log::trace;

use crate::error::RegistryError;
use crate::value::{Value, ValueKind};

/// Index of a field inside the [`Registry`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(usize);

impl FieldHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct OptionField {
    pub(crate) flag: String,
    pub(crate) description: String,
    pub(crate) kind: ValueKind,
    pub(crate) default: Value,
    pub(crate) value: Value,
    pub(crate) required: bool,
}

impl OptionField {
    pub(crate) fn new(flag: &str, description: String, default: Value) -> Self {
        Self {
            flag: String::from(flag),
            description,
            kind: default.kind(),
            value: default.clone(),
            default,
            required: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.value = self.default.clone();
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HelpLine {
    pub flag: String,
    pub description: String,
}

impl fmt::Display for HelpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} : {}", self.flag, self.description)
    }
}

/// Ordered set of option fields, keyed by a unique flag token.
#[derive(Debug, Default)]
pub struct Registry {
    fields: Vec<OptionField>,
    help: Option<FieldHandle>,
}

impl Registry {
    pub fn new() -> Self {
        trace!("registry::Registry::new()");
        Self::default()
    }

    pub fn register(
        &mut self,
        flag: &str,
        description: impl Into<String>,
        kind: ValueKind,
        default: Value,
    ) -> Result<FieldHandle, RegistryError> {
        trace!("registry::Registry::register(flag: {flag}, kind: {kind}, default: {default:?})");
        if flag.is_empty() {
            return Err(RegistryError::EmptyFlag);
        }

        if self.find(flag).is_some() {
            return Err(RegistryError::DuplicateFlag {
                flag: String::from(flag),
            });
        }

        if default.kind() != kind {
            return Err(RegistryError::TypeMismatch {
                flag: String::from(flag),
                expected: kind,
                found: default.kind(),
            });
        }

        self.fields
            .push(OptionField::new(flag, description.into(), default));

        Ok(FieldHandle(self.fields.len() - 1))
    }

    /// Marks a value field as required for the show-help decision.
    pub fn require(&mut self, handle: FieldHandle) -> Result<(), RegistryError> {
        trace!("registry::Registry::require(handle: {handle:?})");
        let field = self.get_mut(handle)?;
        if field.kind == ValueKind::Bool {
            return Err(RegistryError::TypeMismatch {
                flag: field.flag.clone(),
                expected: ValueKind::String,
                found: ValueKind::Bool,
            });
        }

        field.required = true;
        Ok(())
    }

    pub fn set_help_flag(&mut self, handle: FieldHandle) -> Result<(), RegistryError> {
        trace!("registry::Registry::set_help_flag(handle: {handle:?})");
        let field = self.get(handle)?;
        if field.kind != ValueKind::Bool {
            return Err(RegistryError::TypeMismatch {
                flag: field.flag.clone(),
                expected: ValueKind::Bool,
                found: field.kind,
            });
        }

        self.help = Some(handle);
        Ok(())
    }

    pub fn help_flag(&self) -> Option<FieldHandle> {
        self.help
    }

    pub fn all_fields(&self) -> impl Iterator<Item = FieldHandle> + Clone + use<> {
        (0..self.fields.len()).map(FieldHandle)
    }

    pub fn fields(&self) -> impl Iterator<Item = &OptionField> + Clone {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn find(&self, flag: &str) -> Option<FieldHandle> {
        self.fields
            .iter()
            .position(|field| field.flag == flag)
            .map(FieldHandle)
    }

    pub fn get(&self, handle: FieldHandle) -> Result<&OptionField, RegistryError> {
        self.fields
            .get(handle.0)
            .ok_or(RegistryError::UnknownField)
    }

    pub(crate) fn get_mut(
        &mut self,
        handle: FieldHandle,
    ) -> Result<&mut OptionField, RegistryError> {
        self.fields
            .get_mut(handle.0)
            .ok_or(RegistryError::UnknownField)
    }

    pub fn value(&self, handle: FieldHandle) -> Result<&Value, RegistryError> {
        self.get(handle).map(|field| &field.value)
    }

    pub fn reset(&mut self) {
        trace!("registry::Registry::reset()");
        self.fields.iter_mut().for_each(OptionField::reset);
    }

    /// One line per field in registration order, with every flag padded to
    /// the width of the longest one.
    pub fn render_help(&self) -> Vec<HelpLine> {
        trace!("registry::Registry::render_help()");
        let width = self
            .fields
            .iter()
            .map(|field| field.flag.chars().count())
            .max()
            .unwrap_or(0);

        self.fields
            .iter()
            .map(|field| HelpLine {
                flag: format!("{:<width$}", field.flag),
                description: field.description.clone(),
            })
            .collect()
    }

    pub fn help_text(&self) -> String {
        let mut text = String::from("Arguments:\n");
        for line in self.render_help() {
            text.push_str(&line.to_string());
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(value: &str) -> Value {
        Value::String {
            value: value.to_string(),
        }
    }

    #[test]
    fn register_keeps_registration_order() {
        let mut registry = Registry::new();
        let a = registry
            .register("-of", "Output", ValueKind::String, string(""))
            .unwrap();
        let b = registry
            .register("-n", "Count", ValueKind::U16, Value::U16 { value: 7 })
            .unwrap();

        assert_eq!(registry.all_fields().collect::<Vec<_>>(), vec![a, b]);
        // restartable
        assert_eq!(registry.all_fields().count(), 2);
        assert_eq!(registry.value(b).unwrap(), &Value::U16 { value: 7 });
        assert_eq!(registry.find("-n"), Some(b));
        assert_eq!(registry.find("-N"), None);
    }

    #[test]
    fn duplicate_flag_is_rejected() {
        let mut registry = Registry::new();
        registry
            .register("-of", "Output", ValueKind::String, string(""))
            .unwrap();

        let err = registry
            .register("-of", "Again", ValueKind::Bool, Value::Bool { value: false })
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateFlag {
                flag: "-of".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn default_must_match_declared_kind() {
        let mut registry = Registry::new();
        let err = registry
            .register("-n", "Count", ValueKind::U32, Value::I32 { value: 1 })
            .unwrap_err();
        assert!(matches!(err, RegistryError::TypeMismatch { .. }));

        let err = registry
            .register("", "Nothing", ValueKind::Bool, Value::Bool { value: false })
            .unwrap_err();
        assert_eq!(err, RegistryError::EmptyFlag);
    }

    #[test]
    fn help_flag_must_be_boolean() {
        let mut registry = Registry::new();
        let out = registry
            .register("-of", "Output", ValueKind::String, string(""))
            .unwrap();
        let help = registry
            .register("-help", "Help", ValueKind::Bool, Value::Bool { value: false })
            .unwrap();

        assert!(registry.set_help_flag(out).is_err());
        assert!(registry.require(help).is_err());
        assert!(registry.set_help_flag(help).is_ok());
        assert!(registry.require(out).is_ok());
        assert_eq!(registry.help_flag(), Some(help));
        assert!(registry.get(out).unwrap().required);
    }

    #[test]
    fn foreign_handle_is_unknown() {
        let mut big = Registry::new();
        big.register("-a", "", ValueKind::Bool, Value::Bool { value: false })
            .unwrap();
        let foreign = big
            .register("-b", "", ValueKind::Bool, Value::Bool { value: false })
            .unwrap();

        let small = Registry::new();
        assert_eq!(small.get(foreign).unwrap_err(), RegistryError::UnknownField);
    }

    #[test]
    fn help_columns_align_to_longest_flag() {
        let mut registry = Registry::new();
        registry
            .register(
                "-debug",
                "Controls for extended debug info.",
                ValueKind::Bool,
                Value::Bool { value: false },
            )
            .unwrap();
        registry
            .register(
                "-of",
                format!("Path to the file used for {}.", "output"),
                ValueKind::String,
                string(""),
            )
            .unwrap();

        let lines: Vec<String> = registry
            .render_help()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                " -debug : Controls for extended debug info.",
                " -of    : Path to the file used for output.",
            ]
        );
        assert!(registry.help_text().starts_with("Arguments:\n -debug : "));
    }

    #[test]
    fn empty_registry_renders_no_lines() {
        let registry = Registry::new();
        assert!(registry.render_help().is_empty());
        assert_eq!(registry.help_text(), "Arguments:\n");
    }

    #[test]
    fn field_metadata_is_read_through_accessors() {
        let mut registry = Registry::new();
        let handle = registry
            .register("-n", "Count", ValueKind::U8, Value::U8 { value: 1 })
            .unwrap();
        registry.require(handle).unwrap();

        let field = registry.get(handle).unwrap();
        assert_eq!(field.flag(), "-n");
        assert_eq!(field.description(), "Count");
        assert_eq!(field.kind(), ValueKind::U8);
        assert_eq!(field.default(), &Value::U8 { value: 1 });
        assert_eq!(field.value(), &Value::U8 { value: 1 });
        assert!(field.required());

        let result = crate::binder::bind(&["-n", "5"], &mut registry);
        let field = registry.get(handle).unwrap();
        assert_eq!(field.kind(), ValueKind::U8);
        assert_eq!(field.value(), &Value::U8 { value: 5 });
        assert_eq!(result.found(handle), Some(true));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut registry = Registry::new();
        let handle = registry
            .register("-d", "Diff", ValueKind::String, string("none"))
            .unwrap();
        registry.get_mut(handle).unwrap().value = string("diff.db");

        registry.reset();
        assert_eq!(registry.value(handle).unwrap(), &string("none"));
    }
}
