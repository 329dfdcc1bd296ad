//! Class graph traversal.

use indexmap::IndexMap;
use tsdef_ir::{ClassDescriptor, ClassId, MetadataProvider};

use crate::GeneratorConfig;

/// Discovers every class reachable from the roots, emitting each exactly once.
///
/// A class is marked as visited before its declaration is generated, so
/// cyclic references terminate. Declarations are kept in the slot reserved at
/// mark time, which keeps them in first-visit order.
pub(crate) struct Walker<'a> {
    pub(crate) provider: &'a dyn MetadataProvider,
    pub(crate) config: &'a GeneratorConfig,
    visited: IndexMap<ClassId, Option<String>>,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(provider: &'a dyn MetadataProvider, config: &'a GeneratorConfig) -> Self {
        Self {
            provider,
            config,
            visited: IndexMap::new(),
        }
    }

    pub(crate) fn visit(&mut self, class: &'a ClassDescriptor) {
        if self.visited.contains_key(&class.id) {
            return;
        }

        tracing::debug!(class = %class.id, "generating declaration");
        self.visited.insert(class.id.clone(), None);

        let definition = self.generate_definition(class);
        if let Some(slot) = self.visited.get_mut(&class.id) {
            *slot = Some(definition);
        }
    }

    /// Look up and visit a class by id. Returns false if it cannot be resolved.
    pub(crate) fn visit_id(&mut self, id: &ClassId) -> bool {
        let provider = self.provider;
        match provider.class(id) {
            Some(class) => {
                self.visit(class);
                true
            }
            None => false,
        }
    }

    /// Consume the walker, returning declarations in first-visit order.
    pub(crate) fn finish(self) -> IndexMap<ClassId, String> {
        self.visited
            .into_iter()
            .filter_map(|(id, definition)| definition.map(|definition| (id, definition)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tsdef_ir::{ClassRegistry, PropertyDescriptor, TypeReference};

    use super::*;

    #[test]
    fn test_cycle_terminates_and_orders_by_first_visit() {
        let registry = ClassRegistry::new()
            .with(
                ClassDescriptor::new("Parent").property(PropertyDescriptor::new(
                    "children",
                    TypeReference::list(TypeReference::class("Child")),
                )),
            )
            .with(
                ClassDescriptor::new("Child")
                    .property(PropertyDescriptor::new("parent", TypeReference::class("Parent"))),
            );
        let config = GeneratorConfig::default();

        let mut walker = Walker::new(&registry, &config);
        assert!(walker.visit_id(&ClassId::new("Parent")));
        assert!(walker.visit_id(&ClassId::new("Child")));

        let definitions = walker.finish();
        let ids: Vec<_> = definitions.keys().map(ClassId::as_str).collect();
        assert_eq!(ids, vec!["Parent", "Child"]);
    }

    #[test]
    fn test_unknown_id_is_not_visited() {
        let registry = ClassRegistry::new();
        let config = GeneratorConfig::default();

        let mut walker = Walker::new(&registry, &config);
        assert!(!walker.visit_id(&ClassId::new("Missing")));
        assert!(walker.finish().is_empty());
    }
}
