//! Class lookup.

use indexmap::IndexMap;

use crate::{ClassDescriptor, ClassId};

/// Source of class descriptors.
///
/// The generator never inspects a running program; it asks a provider for
/// the descriptor of every class it discovers.
pub trait MetadataProvider {
    /// Look up a class by identity.
    fn class(&self, id: &ClassId) -> Option<&ClassDescriptor>;

    /// Returns true if the class is an enumeration.
    fn is_enum(&self, id: &ClassId) -> bool {
        self.class(id).is_some_and(ClassDescriptor::is_enum)
    }
}

/// In-memory class registry, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: IndexMap<ClassId, ClassDescriptor>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, returning the descriptor it replaced, if any.
    pub fn insert(&mut self, class: ClassDescriptor) -> Option<ClassDescriptor> {
        self.classes.insert(class.id.clone(), class)
    }

    /// Builder-style registration.
    pub fn with(mut self, class: ClassDescriptor) -> Self {
        self.insert(class);
        self
    }

    pub fn contains(&self, id: &ClassId) -> bool {
        self.classes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }
}

impl MetadataProvider for ClassRegistry {
    fn class(&self, id: &ClassId) -> Option<&ClassDescriptor> {
        self.classes.get(id)
    }
}

impl FromIterator<ClassDescriptor> for ClassRegistry {
    fn from_iter<T: IntoIterator<Item = ClassDescriptor>>(iter: T) -> Self {
        let mut registry = Self::new();
        for class in iter {
            registry.insert(class);
        }
        registry
    }
}
