use std::{path::Path, str::FromStr};

use indexmap::IndexSet;
use tsdef_codegen::{GeneratorConfig, TypeScriptGenerator};
use tsdef_ir::{ClassId, ClassRegistry, TypeArgument, TypeReference};

use crate::{Error, GeneratorSettings, Result, lower, raw::RawSchema, validate::ParseContext};

/// Default schema filename.
pub const DEFAULT_SCHEMA: &str = "tsdef.toml";

/// Schema file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// A validated schema: class descriptors, roots and generator settings.
#[derive(Debug)]
pub struct Schema {
    /// Classes to generate declarations for, in declaration order.
    pub roots: Vec<ClassId>,
    pub generator: GeneratorSettings,
    pub(crate) registry: ClassRegistry,
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_SCHEMA, Format::Toml)
    }
}

impl Schema {
    /// Parse a schema file, choosing the syntax from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_str_with_filename(&content, &filename, Format::from_path(path))
    }

    /// Parse a schema from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Self> {
        let raw: RawSchema = match format {
            Format::Toml => {
                toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?
            }
            Format::Json => serde_json::from_str(content)
                .map_err(|e| Error::json_parse(e, content, filename))?,
        };
        lower::lower(raw, &ParseContext::new(content, filename))
    }

    /// The declared classes.
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Build the generator configuration from the current settings.
    pub fn generator_config(&self) -> GeneratorConfig {
        self.generator.to_config()
    }

    /// Generate declarations for the roots.
    pub fn generate(&self) -> TypeScriptGenerator {
        TypeScriptGenerator::new(
            &self.registry,
            self.roots.iter().cloned(),
            &self.generator_config(),
        )
    }

    /// Class references that are neither declared nor covered by a mapping
    /// or skip prefix. These render as `unknown`.
    ///
    /// Ignored supertypes are never rendered and are not reported.
    pub fn unresolved_references(&self) -> IndexSet<ClassId> {
        let config = self.generator_config();
        let mut unresolved = IndexSet::new();
        for class in self.registry.iter() {
            let supertypes = class
                .supertypes
                .iter()
                .filter(|supertype| !config.is_ignored_supertype(&supertype.classifier));
            let types = class
                .type_parameters
                .iter()
                .flat_map(|parameter| &parameter.upper_bounds)
                .chain(supertypes)
                .chain(class.properties.iter().map(|property| &property.ty))
                .chain(class.functions.iter().flat_map(|function| {
                    function
                        .parameters
                        .iter()
                        .map(|parameter| &parameter.ty)
                        .chain(std::iter::once(&function.return_type))
                }));
            for ty in types {
                self.collect_unresolved(ty, &mut unresolved);
            }
        }
        unresolved
    }

    fn collect_unresolved(&self, ty: &TypeReference, unresolved: &mut IndexSet<ClassId>) {
        if let Some(id) = ty.classifier.class_id() {
            if self.generator.covers(id.as_str()) {
                return;
            }
            if !self.registry.contains(id) {
                unresolved.insert(id.clone());
            }
        }
        for argument in ty.arguments.iter().filter_map(TypeArgument::as_type) {
            self.collect_unresolved(argument, unresolved);
        }
    }
}
