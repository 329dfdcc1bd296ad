//! Loading schema files from disk.

use std::{fs, path::PathBuf};

use tempfile::TempDir;
use tsdef_codegen::VoidType;
use tsdef_schema::{Error, Schema};

const PERSON_TOML: &str = r#"
roots = ["com.example.Person"]

[generator]
int_type = "int"
void_type = "undefined"
functions = true

[[classes]]
id = "com.example.Person"
supertypes = [{ of = "java.io.Serializable" }]

[[classes.properties]]
name = "name"
type = { of = "string" }

[[classes.properties]]
name = "age"
type = { of = "int", nullable = true }

[[classes.properties]]
name = "role"
type = { of = "com.example.Role" }

[[classes.functions]]
name = "rename"
parameters = [{ name = "to", type = { of = "string" } }]

[[classes]]
id = "com.example.Role"
kind = "enum"
constants = ["Admin", "User"]
"#;

const PERSON_JSON: &str = r#"{
  "roots": ["com.example.Person"],
  "generator": { "int_type": "int", "void_type": "undefined", "functions": true },
  "classes": [
    {
      "id": "com.example.Person",
      "supertypes": [{ "of": "java.io.Serializable" }],
      "properties": [
        { "name": "name", "type": { "of": "string" } },
        { "name": "age", "type": { "of": "int", "nullable": true } },
        { "name": "role", "type": { "of": "com.example.Role" } }
      ],
      "functions": [
        { "name": "rename", "parameters": [{ "name": "to", "type": { "of": "string" } }] }
      ]
    },
    { "id": "com.example.Role", "kind": "enum", "constants": ["Admin", "User"] }
  ]
}"#;

const EXPECTED: &str = "interface Person {
    name: string;
    age: int | undefined;
    role: Role;
    rename(to: string): void;
}

type Role = \"Admin\" | \"User\";";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write schema");
    path
}

#[test]
fn test_toml_file() {
    let dir = TempDir::new().unwrap();
    let schema = Schema::from_file(write(&dir, "tsdef.toml", PERSON_TOML)).unwrap();

    assert_eq!(schema.generator.void_type, VoidType::Undefined);
    assert_eq!(schema.generate().definitions_text(), EXPECTED);
}

#[test]
fn test_json_file() {
    let dir = TempDir::new().unwrap();
    let schema = Schema::from_file(write(&dir, "schema.json", PERSON_JSON)).unwrap();

    assert_eq!(schema.roots.len(), 1);
    assert_eq!(schema.generate().definitions_text(), EXPECTED);
}

#[test]
fn test_settings_can_be_overridden() {
    let mut schema: Schema = PERSON_TOML.parse().unwrap();
    schema.generator.int_type = None;
    schema.generator.void_type = VoidType::Null;
    schema.generator.functions = false;

    let text = schema.generate().definitions_text();
    assert!(text.contains("age: number | null;"), "{text}");
    assert!(!text.contains("rename"), "{text}");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Schema::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_toml_parse_error_reports_filename() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.toml", "roots = [\n");
    let err = Schema::from_file(&path).unwrap_err();

    assert!(matches!(*err, Error::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"), "{err}");
}

#[test]
fn test_json_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ \"roots\": [ }");
    let err = Schema::from_file(&path).unwrap_err();

    assert!(matches!(*err, Error::JsonParse { .. }));
}

#[test]
fn test_unknown_field_rejected() {
    let err = "[[classes]]\nid = \"A\"\nkinds = \"enum\"\n"
        .parse::<Schema>()
        .unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}
