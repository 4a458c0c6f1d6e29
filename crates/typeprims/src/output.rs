use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Result of a `check` or `validate` run.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One registered type, as listed by `types`.
#[derive(Debug, Serialize)]
pub struct TypeRow {
    pub name: String,
    pub origin: &'static str,
}

pub fn print_outcome(outcome: &Outcome, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(outcome),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "TYPES", "VALID", "ERROR"])
                .add_row(vec![
                    outcome.command.to_string(),
                    outcome.types.join(" | "),
                    outcome.valid.to_string(),
                    outcome.error.clone().unwrap_or_default(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match &outcome.error {
            None if outcome.valid => println!("valid ({})", outcome.types.join(" | ")),
            None => println!("invalid ({})", outcome.types.join(" | ")),
            Some(error) => println!("invalid: {error}"),
        },
    }
}

pub fn print_types(rows: &[TypeRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NAME", "ORIGIN"]);
            for row in rows {
                table.add_row(vec![row.name.clone(), row.origin.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!("{:<20} {}", row.name, row.origin);
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_json_omits_empty_fields() {
        let outcome = Outcome {
            command: "check",
            types: vec!["number".to_string()],
            param: None,
            valid: true,
            error: None,
        };

        let json = serde_json::to_string(&outcome).expect("outcome should serialize");
        assert_eq!(
            json,
            r#"{"command":"check","types":["number"],"valid":true}"#
        );
    }

    #[test]
    fn type_rows_serialize_as_list() {
        let rows = [TypeRow {
            name: "user".to_string(),
            origin: "schema",
        }];
        let json = serde_json::to_string(&rows).expect("rows should serialize");
        assert_eq!(json, r#"[{"name":"user","origin":"schema"}]"#);
    }
}
