use tracing::debug;

use crate::cmd::{load_registry, resolve_value, CheckArgs};
use crate::exit::{schema_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_outcome, Outcome, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = load_registry(&args.registry)?;
    let ty = registry
        .resolve(&args.type_name)
        .map_err(|err| schema_error("cannot check", err))?;
    let value = resolve_value(&args.value)?;

    let valid = typeprims::check(&value, ty.as_ref());
    debug!(type_name = %args.type_name, valid, "check finished");

    print_outcome(
        &Outcome {
            command: "check",
            types: vec![args.type_name],
            param: None,
            valid,
            error: None,
        },
        format,
    );
    Ok(if valid { SUCCESS } else { DATA_INVALID })
}
