use std::{fs, path::PathBuf};

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use tsdef_codegen::{TypeScriptGenerator, VoidType};
use tsdef_schema::{DEFAULT_SCHEMA, Schema};

use super::UnwrapOrExit;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VoidTypeArg {
    Null,
    Undefined,
}

impl From<VoidTypeArg> for VoidType {
    fn from(arg: VoidTypeArg) -> Self {
        match arg {
            VoidTypeArg::Null => VoidType::Null,
            VoidTypeArg::Undefined => VoidType::Undefined,
        }
    }
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema file (.toml or .json)
    #[arg(short, long, default_value = DEFAULT_SCHEMA)]
    pub schema: PathBuf,

    /// Write declarations to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name used for integer types (overrides the schema)
    #[arg(long, value_name = "TYPE")]
    int_type: Option<String>,

    /// Absent-value marker in nullable unions (overrides the schema)
    #[arg(long, value_enum)]
    void_type: Option<VoidTypeArg>,

    /// Emit public member functions
    #[arg(long)]
    functions: bool,

    /// Print the distinct declarations as a JSON array
    #[arg(long)]
    json: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut schema = Schema::from_file(&self.schema).unwrap_or_exit();
        self.apply_overrides(&mut schema);

        let generator = schema.generate();
        tracing::info!(
            roots = schema.roots.len(),
            declarations = generator.len(),
            "generated declarations"
        );

        let output = self.render(&generator)?;
        match &self.output {
            Some(path) => {
                fs::write(path, output)
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                eprintln!(
                    "✓ wrote {} declaration{} to {}",
                    generator.len(),
                    if generator.len() == 1 { "" } else { "s" },
                    path.display()
                );
            }
            None => print!("{}", output),
        }

        Ok(())
    }

    fn apply_overrides(&self, schema: &mut Schema) {
        if let Some(int_type) = &self.int_type {
            schema.generator.int_type = Some(int_type.clone());
        }
        if let Some(void_type) = self.void_type {
            schema.generator.void_type = void_type.into();
        }
        if self.functions {
            schema.generator.functions = true;
        }
    }

    fn render(&self, generator: &TypeScriptGenerator) -> Result<String> {
        if self.json {
            let definitions: Vec<String> = generator.individual_definitions().into_iter().collect();
            let mut json = serde_json::to_string_pretty(&definitions)
                .wrap_err("failed to serialize declarations")?;
            json.push('\n');
            return Ok(json);
        }

        let mut text = generator.definitions_text();
        if !text.is_empty() {
            text.push('\n');
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    const SCHEMA: &str = r#"
        roots = ["Counter"]

        [[classes]]
        id = "Counter"
        properties = [{ name = "value", type = { of = "long", nullable = true } }]
        functions = [{ name = "reset" }]
    "#;

    fn parse(args: &[&str]) -> GenerateCommand {
        Harness::parse_from(std::iter::once("generate").chain(args.iter().copied())).cmd
    }

    #[test]
    fn test_defaults() {
        let cmd = parse(&[]);
        assert_eq!(cmd.schema, PathBuf::from("tsdef.toml"));
        assert!(cmd.output.is_none());
        assert!(!cmd.json);
    }

    #[test]
    fn test_overrides_apply_to_schema() {
        let cmd = parse(&["--int-type", "bigint", "--void-type", "undefined", "--functions"]);
        let mut schema: Schema = SCHEMA.parse().unwrap();
        cmd.apply_overrides(&mut schema);

        let text = cmd.render(&schema.generate()).unwrap();
        assert_eq!(
            text,
            "interface Counter {\n    value: bigint | undefined;\n    reset(): void;\n}\n"
        );
    }

    #[test]
    fn test_json_output() {
        let cmd = parse(&["--json"]);
        let schema: Schema = SCHEMA.parse().unwrap();

        let json = cmd.render(&schema.generate()).unwrap();
        let definitions: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            definitions,
            vec!["interface Counter {\n    value: number | null;\n}"]
        );
    }
}
