use log::{debug, trace};

use crate::error::BindError;
use crate::registry::{FieldHandle, Registry};
use crate::value::{Value, ValueKind};

#[derive(Debug, Clone, Default)]
pub struct BindResult {
    outcomes: Vec<(FieldHandle, bool)>,
    errors: Vec<BindError>,
    missing_required: Vec<String>,
    help_requested: bool,
}

impl BindResult {
    /// Whether a value field was bound from the arguments. `None` for
    /// boolean fields.
    pub fn found(&self, handle: FieldHandle) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, found)| *found)
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (FieldHandle, bool)> + '_ {
        self.outcomes.iter().copied()
    }

    pub fn errors(&self) -> &[BindError] {
        &self.errors
    }

    pub fn missing_required(&self) -> &[String] {
        &self.missing_required
    }

    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    pub fn show_help(&self) -> bool {
        self.help_requested || !self.missing_required.is_empty()
    }
}

/// Resolves every registered field from `args` in a single pass.
///
/// Per-field failures are logged and collected in the result; they never
/// abort the pass.
pub fn bind<S: AsRef<str>>(args: &[S], registry: &mut Registry) -> BindResult {
    trace!("binder::bind(args: {} tokens)", args.len());
    let mut result = BindResult::default();
    let help = registry.help_flag();

    for handle in registry.all_fields() {
        let Ok(field) = registry.get_mut(handle) else {
            continue;
        };

        let index = args.iter().position(|arg| arg.as_ref() == field.flag);

        if field.kind == ValueKind::Bool {
            field.value = match index {
                Some(_) => Value::Bool { value: true },
                None => field.default.clone(),
            };
            debug!("{} = {}", field.flag, field.value);

            if Some(handle) == help && index.is_some() {
                result.help_requested = true;
            }
            continue;
        }

        let found = match index.map(|i| args.get(i + 1)) {
            None => {
                field.value = field.default.clone();
                false
            }
            Some(None) => {
                let err = BindError::MissingValue {
                    flag: field.flag.clone(),
                };
                err.report();
                result.errors.push(err);
                field.value = field.default.clone();
                false
            }
            Some(Some(token)) => match Value::parse(field.kind, token.as_ref()) {
                Ok(value) => {
                    field.value = value;
                    true
                }
                Err(source) => {
                    let err = BindError::from((field.flag.as_str(), source));
                    err.report();
                    result.errors.push(err);
                    false
                }
            },
        };
        debug!("{} = {} (found: {found})", field.flag, field.value);

        if field.required && !found {
            result.missing_required.push(field.flag.clone());
        }
        result.outcomes.push((handle, found));
    }

    result
}
