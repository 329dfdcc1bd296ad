//! Class, member and parameter descriptors.

use crate::{ClassId, TypeReference};

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

impl Visibility {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// The kind of a described class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

/// A declared type parameter with its upper bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameterDescriptor {
    pub name: String,
    pub upper_bounds: Vec<TypeReference>,
}

impl TypeParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upper_bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: TypeReference) -> Self {
        self.upper_bounds.push(bound);
        self
    }
}

/// A declared property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: TypeReference,
    pub visibility: Visibility,
    /// The property is reachable through a public getter/setter pair even if
    /// its backing declaration is not public.
    pub has_public_accessor: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            has_public_accessor: false,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_public_accessor(mut self) -> Self {
        self.has_public_accessor = true;
        self
    }

    /// Whether the property can be seen from outside the class.
    pub fn is_externally_visible(&self) -> bool {
        self.visibility.is_public() || self.has_public_accessor
    }
}

/// Whether a parameter is the implicit receiver or a declared value parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    /// The implicit `this` of a member function.
    Receiver,
    #[default]
    Value,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Declared name; `None` when the metadata carries no name.
    pub name: Option<String>,
    pub ty: TypeReference,
    pub kind: ParameterKind,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            kind: ParameterKind::Value,
        }
    }

    pub fn unnamed(ty: TypeReference) -> Self {
        Self {
            name: None,
            ty,
            kind: ParameterKind::Value,
        }
    }

    pub fn receiver(ty: TypeReference) -> Self {
        Self {
            name: None,
            ty,
            kind: ParameterKind::Receiver,
        }
    }

    pub fn is_receiver(&self) -> bool {
        matches!(self.kind, ParameterKind::Receiver)
    }
}

/// A declared member function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: TypeReference,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, return_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Parameters excluding the implicit receiver.
    pub fn value_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| !p.is_receiver())
    }
}

/// Structural description of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub id: ClassId,
    /// Simple name used in declarations.
    pub name: String,
    pub kind: ClassKind,
    pub type_parameters: Vec<TypeParameterDescriptor>,
    pub supertypes: Vec<TypeReference>,
    pub properties: Vec<PropertyDescriptor>,
    pub functions: Vec<FunctionDescriptor>,
    /// Constant names, in declaration order. Only meaningful for enums.
    pub constants: Vec<String>,
}

impl ClassDescriptor {
    /// Create a class descriptor; the simple name is derived from the id.
    pub fn new(id: impl Into<ClassId>) -> Self {
        let id = id.into();
        Self {
            name: id.simple_name().to_string(),
            id,
            kind: ClassKind::Class,
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Create an enum descriptor with the given constants.
    pub fn enumeration<I, S>(id: impl Into<ClassId>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ClassKind::Enum,
            constants: constants.into_iter().map(Into::into).collect(),
            ..Self::new(id)
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn type_parameter(mut self, parameter: TypeParameterDescriptor) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn supertype(mut self, supertype: TypeReference) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn function(mut self, function: FunctionDescriptor) -> Self {
        self.functions.push(function);
        self
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, ClassKind::Enum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_defaults_to_simple_name() {
        let class = ClassDescriptor::new("com.example.Person");
        assert_eq!(class.name, "Person");
        assert_eq!(class.id.as_str(), "com.example.Person");
    }

    #[test]
    fn test_enumeration_keeps_constant_order() {
        let class = ClassDescriptor::enumeration("Color", ["Red", "Green", "Blue"]);
        assert!(class.is_enum());
        assert_eq!(class.constants, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_property_visibility() {
        let public = PropertyDescriptor::new("a", TypeReference::int());
        let private = PropertyDescriptor::new("b", TypeReference::int()).visibility(Visibility::Private);
        let bean = PropertyDescriptor::new("c", TypeReference::int())
            .visibility(Visibility::Private)
            .with_public_accessor();

        assert!(public.is_externally_visible());
        assert!(!private.is_externally_visible());
        assert!(bean.is_externally_visible());
    }

    #[test]
    fn test_value_parameters_skip_receiver() {
        let f = FunctionDescriptor::new("f", TypeReference::unit())
            .parameter(ParameterDescriptor::receiver(TypeReference::class("Foo")))
            .parameter(ParameterDescriptor::new("x", TypeReference::int()));
        let names: Vec<_> = f.value_parameters().map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec![Some("x")]);
    }
}
