use crate::cmd::{load_registry, TypesArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_types, OutputFormat, TypeRow};

pub fn run(args: TypesArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = load_registry(&args.registry)?;

    let rows: Vec<TypeRow> = registry
        .names()
        .into_iter()
        .map(|name| TypeRow {
            name: name.to_string(),
            origin: registry
                .origin(name)
                .map(|origin| origin.as_str())
                .unwrap_or("unknown"),
        })
        .collect();

    print_types(&rows, format);
    Ok(SUCCESS)
}
