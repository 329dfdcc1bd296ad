use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsdef_schema::{DEFAULT_SCHEMA, Schema};

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema file (.toml or .json)
    #[arg(short, long, default_value = DEFAULT_SCHEMA)]
    pub schema: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();

        let report = CheckReport {
            schema_path: self.schema.clone(),
            class_count: schema.registry().len(),
            roots: schema.roots.iter().map(ToString::to_string).collect(),
            unresolved: schema
                .unresolved_references()
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
        report.render(&mut TerminalOutput);

        Ok(())
    }
}
