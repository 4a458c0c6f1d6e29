use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde_json::Value;
use tracing::debug;
use typeprims::schema::{RegistryConfig, TypeRegistry};

use crate::exit::{io_error, schema_error, CliError, CliResult, DATA_INVALID, USAGE};
use crate::output::OutputFormat;

pub mod check;
pub mod types;
pub mod validate;
pub mod version;

/// Environment variable naming the default schema directory.
pub const SCHEMA_DIR_ENV: &str = "TYPEPRIMS_SCHEMA_DIR";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether a value conforms to a type.
    Check(CheckArgs),
    /// Validate a value against one or more types and explain failures.
    Validate(ValidateArgs),
    /// List the available type names.
    Types(TypesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Validate(args) => validate::run(args, format),
        Command::Types(args) => types::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Directory of `<name>.schema.json` files to load as types.
    #[arg(long, value_name = "DIR", env = SCHEMA_DIR_ENV)]
    pub schemas: Option<PathBuf>,
    /// Reject properties not declared by object schemas.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ValueArgs {
    /// Value as JSON text.
    #[arg(long)]
    pub json: Option<String>,
    /// Value as a plain string.
    #[arg(long)]
    pub data: Option<String>,
    /// Read the JSON value from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Type name to check against.
    #[arg(long = "type", short = 't', value_name = "NAME")]
    pub type_name: String,
    #[command(flatten)]
    pub value: ValueArgs,
    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Type names (comma-separated). Several names validate as a union.
    #[arg(
        long = "type",
        short = 't',
        value_name = "NAME",
        value_delimiter = ',',
        required = true
    )]
    pub type_names: Vec<String>,
    /// Name the value as a parameter in error messages.
    #[arg(long, value_name = "NAME")]
    pub param: Option<String>,
    #[command(flatten)]
    pub value: ValueArgs,
    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Args, Debug)]
pub struct TypesArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn load_registry(args: &RegistryArgs) -> CliResult<TypeRegistry> {
    let config = RegistryConfig {
        strict_mode: args.strict,
        ..RegistryConfig::default()
    };
    match &args.schemas {
        Some(dir) => {
            debug!(dir = %dir.display(), strict = args.strict, "loading schema directory");
            TypeRegistry::from_directory_with_config(dir, config)
                .map_err(|err| schema_error("failed loading schemas", err))
        }
        None => Ok(TypeRegistry::with_config(config)),
    }
}

pub(crate) fn resolve_value(args: &ValueArgs) -> CliResult<Value> {
    if let Some(json) = &args.json {
        return serde_json::from_str(json)
            .map_err(|err| CliError::new(USAGE, format!("--json is not valid JSON: {err}")));
    }
    if let Some(data) = &args.data {
        return Ok(Value::String(data.clone()));
    }
    if let Some(path) = &args.file {
        return read_json_file(path);
    }
    Err(CliError::new(USAGE, "one of --json, --data or --file is required"))
}

fn read_json_file(path: &Path) -> CliResult<Value> {
    let text = fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
    serde_json::from_str(&text).map_err(|err| {
        CliError::new(
            DATA_INVALID,
            format!("{} is not valid JSON: {err}", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_args(json: Option<&str>, data: Option<&str>) -> ValueArgs {
        ValueArgs {
            json: json.map(str::to_string),
            data: data.map(str::to_string),
            file: None,
        }
    }

    #[test]
    fn json_input_is_parsed() {
        let value = resolve_value(&value_args(Some(r#"{"a":[1,2]}"#), None)).unwrap();
        assert_eq!(value, serde_json::json!({"a": [1, 2]}));
    }

    #[test]
    fn data_input_is_a_string() {
        let value = resolve_value(&value_args(None, Some("42"))).unwrap();
        assert_eq!(value, Value::String("42".to_string()));
    }

    #[test]
    fn malformed_json_is_a_usage_error() {
        let err = resolve_value(&value_args(Some("{nope"), None)).unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn registry_without_directory_has_builtins() {
        let registry = load_registry(&RegistryArgs {
            schemas: None,
            strict: true,
        })
        .unwrap();
        assert!(registry.contains("object"));
        assert!(registry.config().strict_mode);
    }
}
