//! Serde model of a schema file, before validation.

use serde::Deserialize;
use tsdef_ir::{ClassKind, Visibility};

use crate::GeneratorSettings;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSchema {
    #[serde(default)]
    pub roots: Vec<String>,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawClass {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub kind: RawKind,
    #[serde(default)]
    pub type_parameters: Vec<RawTypeParameter>,
    #[serde(default)]
    pub supertypes: Vec<RawType>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub functions: Vec<RawFunction>,
    #[serde(default)]
    pub constants: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RawKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl From<RawKind> for ClassKind {
    fn from(kind: RawKind) -> Self {
        match kind {
            RawKind::Class => ClassKind::Class,
            RawKind::Interface => ClassKind::Interface,
            RawKind::Enum => ClassKind::Enum,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RawVisibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

impl From<RawVisibility> for Visibility {
    fn from(visibility: RawVisibility) -> Self {
        match visibility {
            RawVisibility::Public => Visibility::Public,
            RawVisibility::Protected => Visibility::Protected,
            RawVisibility::Internal => Visibility::Internal,
            RawVisibility::Private => Visibility::Private,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTypeParameter {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawType,
    #[serde(default)]
    pub visibility: RawVisibility,
    /// Reachable through a public accessor pair.
    #[serde(default)]
    pub accessor: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawFunction {
    pub name: String,
    #[serde(default)]
    pub visibility: RawVisibility,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    /// Omitted for functions that return nothing.
    pub returns: Option<RawType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawParameter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: RawType,
    #[serde(default)]
    pub receiver: bool,
}

/// A type reference: `{ of = "map", args = [{ of = "string" }, { param = "V" }] }`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawType {
    pub of: Option<String>,
    pub param: Option<String>,
    #[serde(default)]
    pub args: Vec<RawType>,
    #[serde(default)]
    pub nullable: bool,
    pub name: Option<String>,
}
