//! Generator configuration.

use std::collections::{HashMap, HashSet};

use tsdef_ir::{ClassId, Classifier, Primitive};

use crate::{
    builder::Indent,
    transform::{Transformer, TransformerPipeline},
};

/// The marker used for absent values in nullable unions.
///
/// The unit type of functions that return nothing is always `void`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VoidType {
    /// `T | null`
    #[default]
    Null,
    /// `T | undefined`
    Undefined,
}

impl VoidType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoidType::Null => "null",
            VoidType::Undefined => "undefined",
        }
    }
}

/// Configuration for declaration generation.
#[derive(Debug)]
pub struct GeneratorConfig {
    /// Exact-classifier overrides, checked before any other formatting rule.
    pub(crate) mappings: HashMap<Classifier, String>,
    pub(crate) pipeline: TransformerPipeline,
    /// Supertypes never listed in `extends` clauses.
    pub(crate) ignored_supertypes: HashSet<Classifier>,
    /// Name used for the integer family.
    pub(crate) int_type_name: String,
    pub(crate) void_type: VoidType,
    pub(crate) indent: Indent,
    /// Whether declarations are prefixed with `export`.
    pub(crate) export: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mappings: HashMap::new(),
            pipeline: TransformerPipeline::default(),
            ignored_supertypes: Self::default_ignored_supertypes(),
            int_type_name: "number".to_string(),
            void_type: VoidType::default(),
            indent: Indent::default(),
            export: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The supertypes that are always ignored: the top type and the
    /// serializability and ordering marker interfaces.
    pub fn default_ignored_supertypes() -> HashSet<Classifier> {
        HashSet::from([
            Classifier::Primitive(Primitive::Any),
            Classifier::Class(ClassId::new(ClassId::SERIALIZABLE)),
            Classifier::Class(ClassId::new(ClassId::COMPARABLE)),
        ])
    }

    /// Render `classifier` as `text`, regardless of its arguments.
    pub fn mapping(mut self, classifier: impl Into<Classifier>, text: impl Into<String>) -> Self {
        self.mappings.insert(classifier.into(), text.into());
        self
    }

    /// Replace the transformer pipeline.
    pub fn transformers(mut self, pipeline: TransformerPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Append a transformer to the pipeline.
    pub fn transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.pipeline.push(Box::new(transformer));
        self
    }

    /// Add a supertype to the ignore set.
    pub fn ignore_supertype(mut self, classifier: impl Into<Classifier>) -> Self {
        self.ignored_supertypes.insert(classifier.into());
        self
    }

    /// Set the name used for byte, short, int and long.
    pub fn int_type_name(mut self, name: impl Into<String>) -> Self {
        self.int_type_name = name.into();
        self
    }

    pub fn void_type(mut self, value: VoidType) -> Self {
        self.void_type = value;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether to export declarations.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    pub fn is_ignored_supertype(&self, classifier: &Classifier) -> bool {
        self.ignored_supertypes.contains(classifier)
    }

    pub fn pipeline(&self) -> &TransformerPipeline {
        &self.pipeline
    }
}
