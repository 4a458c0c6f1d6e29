mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "typeprims", version, about = "Runtime type validation CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). `TYPEPRIMS_LOG` directives take precedence.
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_with_union() {
        let cli = Cli::try_parse_from([
            "typeprims",
            "validate",
            "--type",
            "string,number",
            "--json",
            "5",
        ])
        .expect("validate args should parse");

        let Command::Validate(args) = cli.command else {
            panic!("expected validate command");
        };
        assert_eq!(args.type_names, ["string", "number"]);
    }

    #[test]
    fn rejects_conflicting_value_args() {
        let err = Cli::try_parse_from([
            "typeprims",
            "check",
            "--type",
            "number",
            "--json",
            "5",
            "--data",
            "five",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn requires_a_value() {
        let err = Cli::try_parse_from(["typeprims", "check", "--type", "number"])
            .expect_err("missing value should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_types_subcommand() {
        let cli = Cli::try_parse_from(["typeprims", "types", "--strict"])
            .expect("types args should parse");
        assert!(matches!(cli.command, Command::Types(_)));
    }
}
