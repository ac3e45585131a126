use log::trace;

use crate::binder::{BindResult, bind};
use crate::error::RegistryError;
use crate::registry::{FieldHandle, Registry};
use crate::value::{Value, ValueKind};

/// The option table of the opcode differ.
#[derive(Debug)]
pub struct Config {
    registry: Registry,
    debug: FieldHandle,
    output_file: FieldHandle,
    bin_diff: FieldHandle,
    opcode: FieldHandle,
    help: FieldHandle,
    last_result: Option<BindResult>,
}

impl Config {
    pub fn new() -> Result<Self, RegistryError> {
        trace!("config::Config::new()");
        let mut registry = Registry::new();

        let debug = registry.register(
            "-debug",
            "Controls for extended debug info to be written to the console.",
            ValueKind::Bool,
            Value::Bool { value: false },
        )?;
        let output_file = registry.register(
            "-of",
            "Path to the file used for output.",
            ValueKind::String,
            Value::default_for(ValueKind::String),
        )?;
        let bin_diff = registry.register(
            "-d",
            format!("Path to bindiff results. Requires {} flag.", "-o"),
            ValueKind::String,
            Value::default_for(ValueKind::String),
        )?;
        let opcode = registry.register(
            "-o",
            format!("Path to sqlite opcode file. Requires {} flag.", "-d"),
            ValueKind::String,
            Value::default_for(ValueKind::String),
        )?;
        let help = registry.register(
            "-help",
            "Shows this help.",
            ValueKind::Bool,
            Value::Bool { value: false },
        )?;

        registry.require(output_file)?;
        registry.require(bin_diff)?;
        registry.require(opcode)?;
        registry.set_help_flag(help)?;

        Ok(Self {
            registry,
            debug,
            output_file,
            bin_diff,
            opcode,
            help,
            last_result: None,
        })
    }

    /// Binds `args` onto the table. Returns `true` when the caller can
    /// proceed, `false` when the help listing should be shown instead.
    pub fn load<S: AsRef<str>>(&mut self, args: &[S]) -> bool {
        trace!("config::Config::load(args: {} tokens)", args.len());
        let result = bind(args, &mut self.registry);
        let proceed = !result.show_help();
        self.last_result = Some(result);
        proceed
    }

    pub fn debug(&self) -> bool {
        self.flag(self.debug)
    }

    pub fn help(&self) -> bool {
        self.flag(self.help)
    }

    pub fn output_file(&self) -> &str {
        self.text(self.output_file)
    }

    pub fn bin_diff(&self) -> &str {
        self.text(self.bin_diff)
    }

    pub fn opcode(&self) -> &str {
        self.text(self.opcode)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn last_result(&self) -> Option<&BindResult> {
        self.last_result.as_ref()
    }

    pub fn help_text(&self) -> String {
        self.registry.help_text()
    }

    fn flag(&self, handle: FieldHandle) -> bool {
        self.registry
            .value(handle)
            .ok()
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn text(&self, handle: FieldHandle) -> &str {
        self.registry
            .value(handle)
            .ok()
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
