use std::sync::Arc;

use serde_json::{Map, Value};
use typeprims::{validate_multiple, validate_param, Type, ValidationError};

use crate::cmd::{load_registry, resolve_value, ValidateArgs};
use crate::exit::{schema_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_outcome, Outcome, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = load_registry(&args.registry)?;
    let types = registry
        .resolve_all(&args.type_names)
        .map_err(|err| schema_error("cannot validate", err))?;
    let value = resolve_value(&args.value)?;

    let failure = run_validation(value, &types, args.param.as_deref())?;
    let valid = failure.is_none();
    if let Some(err) = &failure {
        tracing::info!(expected = err.expected(), actual = err.actual(), "value rejected");
    }

    print_outcome(
        &Outcome {
            command: "validate",
            types: args.type_names,
            param: args.param,
            valid,
            error: failure.map(|err| err.to_string()),
        },
        format,
    );
    Ok(if valid { SUCCESS } else { DATA_INVALID })
}

/// Validate `value`, returning the failure if there is one.
///
/// A single type uses plain validation, several use union validation, and
/// a parameter name wraps the value as a one-entry object.
fn run_validation(
    value: Value,
    types: &[Arc<dyn Type>],
    param: Option<&str>,
) -> CliResult<Option<ValidationError>> {
    if let Some(name) = param {
        let [ty] = types else {
            return Err(CliError::new(USAGE, "--param requires exactly one --type"));
        };
        let mut params = Map::new();
        params.insert(name.to_string(), value);
        return Ok(validate_param(&params, ty.as_ref()).err());
    }

    let mut failure = None;
    let mut record = |err: ValidationError| failure = Some(err);
    let outcome = match types {
        [ty] => typeprims::validate(&value, ty.as_ref(), Some(&mut record)),
        candidates => validate_multiple(&value, candidates, Some(&mut record)),
    };
    outcome.map_err(|err| CliError::new(DATA_INVALID, err.to_string()))?;
    Ok(failure)
}
