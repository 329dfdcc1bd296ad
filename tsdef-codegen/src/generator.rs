//! Declaration generation entry point.

use indexmap::{IndexMap, IndexSet};
use tsdef_ir::{ClassId, MetadataProvider};

use crate::{GeneratorConfig, walker::Walker};

/// TypeScript declarations for a set of root classes and everything they
/// reach.
///
/// The class graph is walked once, during construction; the result is
/// read-only.
///
/// # Example
///
/// ```
/// use tsdef_codegen::{GeneratorConfig, TypeScriptGenerator};
/// use tsdef_ir::{ClassDescriptor, ClassRegistry, PropertyDescriptor, TypeReference};
///
/// let registry = ClassRegistry::new().with(
///     ClassDescriptor::new("com.example.Person")
///         .property(PropertyDescriptor::new("name", TypeReference::string())),
/// );
///
/// let generator = TypeScriptGenerator::new(
///     &registry,
///     ["com.example.Person"],
///     &GeneratorConfig::default(),
/// );
/// assert_eq!(generator.definitions_text(), "interface Person {\n    name: string;\n}");
/// ```
#[derive(Debug, Clone)]
pub struct TypeScriptGenerator {
    definitions: IndexMap<ClassId, String>,
}

impl TypeScriptGenerator {
    /// Generate declarations for `roots`, visited in the given order.
    ///
    /// Roots the provider cannot resolve are skipped with a warning.
    pub fn new<I>(provider: &dyn MetadataProvider, roots: I, config: &GeneratorConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ClassId>,
    {
        let mut walker = Walker::new(provider, config);
        for root in roots {
            let id = root.into();
            if !walker.visit_id(&id) {
                tracing::warn!(class = %id, "root class not found, skipping");
            }
        }

        let definitions = walker.finish();
        tracing::debug!(count = definitions.len(), "generated declarations");
        Self { definitions }
    }

    /// Every declaration, separated by blank lines, in discovery order.
    ///
    /// Two classes that render identical text both appear; use
    /// [`individual_definitions`](Self::individual_definitions) for the
    /// distinct set.
    pub fn definitions_text(&self) -> String {
        self.definitions
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The distinct declarations. Compare as a set: the iteration order
    /// follows discovery and depends on the order of the roots.
    pub fn individual_definitions(&self) -> IndexSet<String> {
        self.definitions.values().cloned().collect()
    }

    /// The declaration generated for one class.
    pub fn definition(&self, id: &ClassId) -> Option<&str> {
        self.definitions.get(id).map(String::as_str)
    }

    /// Every class that received a declaration, in discovery order.
    pub fn visited_classes(&self) -> impl Iterator<Item = &ClassId> {
        self.definitions.keys()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
