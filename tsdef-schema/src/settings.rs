//! The `[generator]` table.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use tsdef_codegen::{
    DefaultTransformer, GeneratorConfig, SkipClassTransformer, TransformerPipeline, VoidType,
};

use crate::token;

/// Generator settings as written in a schema file.
///
/// Fields are public so command line flags can override them before the
/// [`GeneratorConfig`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Name for the integer family; `number` when unset.
    pub int_type: Option<String>,
    #[serde(deserialize_with = "deserialize_void_type")]
    pub void_type: VoidType,
    pub properties: bool,
    pub functions: bool,
    pub data_class_functions: bool,
    /// Classes under these prefixes are rendered as `any`.
    pub skip_prefixes: Vec<String>,
    /// Extra supertypes left out of `extends` clauses.
    pub ignore_supertypes: Vec<String>,
    /// Type token to TypeScript text overrides.
    pub mappings: IndexMap<String, String>,
    /// Prefix declarations with `export`.
    pub export: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            int_type: None,
            void_type: VoidType::default(),
            properties: true,
            functions: false,
            data_class_functions: false,
            skip_prefixes: vec![SkipClassTransformer::DEFAULT_PREFIX.to_string()],
            ignore_supertypes: Vec::new(),
            mappings: IndexMap::new(),
            export: false,
        }
    }
}

impl GeneratorSettings {
    /// Build the generator configuration.
    ///
    /// The pipeline is a [`DefaultTransformer`] followed, when any prefix is
    /// configured, by a [`SkipClassTransformer`].
    pub fn to_config(&self) -> GeneratorConfig {
        let mut pipeline = TransformerPipeline::new().transformer(
            DefaultTransformer::new()
                .properties(self.properties)
                .functions(self.functions)
                .data_class_functions(self.data_class_functions),
        );
        if !self.skip_prefixes.is_empty() {
            pipeline =
                pipeline.transformer(SkipClassTransformer::new(self.skip_prefixes.clone()));
        }

        let mut config = GeneratorConfig::new()
            .transformers(pipeline)
            .void_type(self.void_type)
            .export(self.export);

        if let Some(int_type) = &self.int_type {
            config = config.int_type_name(int_type);
        }
        for (token, text) in &self.mappings {
            if let Some(classifier) = token::classifier(token) {
                config = config.mapping(classifier, text);
            }
        }
        for token in &self.ignore_supertypes {
            if let Some(classifier) = token::classifier(token) {
                config = config.ignore_supertype(classifier);
            }
        }

        config
    }

    /// Whether a class id is rendered by a mapping or a skip prefix rather
    /// than by a declaration.
    pub(crate) fn covers(&self, id: &str) -> bool {
        self.mappings.contains_key(id)
            || self
                .skip_prefixes
                .iter()
                .any(|prefix| id.starts_with(prefix.as_str()))
    }
}

fn deserialize_void_type<'de, D>(deserializer: D) -> std::result::Result<VoidType, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let name = String::deserialize(deserializer)?;
    match name.as_str() {
        "null" => Ok(VoidType::Null),
        "undefined" => Ok(VoidType::Undefined),
        other => Err(D::Error::unknown_variant(other, &["null", "undefined"])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: GeneratorSettings = toml::from_str("").unwrap();
        assert_eq!(settings, GeneratorSettings::default());
        assert!(settings.properties);
        assert!(!settings.functions);
        assert_eq!(settings.skip_prefixes, vec!["kotlin.reflect."]);
    }

    #[test]
    fn test_void_type() {
        let settings: GeneratorSettings = toml::from_str(r#"void_type = "undefined""#).unwrap();
        assert_eq!(settings.void_type, VoidType::Undefined);

        let err = toml::from_str::<GeneratorSettings>(r#"void_type = "nil""#).unwrap_err();
        assert!(err.message().contains("nil"), "{}", err.message());
    }

    #[test]
    fn test_covers() {
        let settings: GeneratorSettings = toml::from_str(
            r#"
            [mappings]
            "java.time.Instant" = "Date"
            "#,
        )
        .unwrap();

        assert!(settings.covers("java.time.Instant"));
        assert!(settings.covers("kotlin.reflect.KClass"));
        assert!(!settings.covers("com.example.Person"));
    }
}
