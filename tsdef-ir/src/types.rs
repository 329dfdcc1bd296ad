//! Type references and classifiers.

use std::{borrow::Cow, fmt};

/// Qualified name identifying a class, e.g. `com.example.Person`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(String);

impl ClassId {
    /// Generic serializability marker interface.
    pub const SERIALIZABLE: &'static str = "java.io.Serializable";
    /// Natural-ordering interface.
    pub const COMPARABLE: &'static str = "kotlin.Comparable";

    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    /// The full qualified name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last `.`-separated segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Char,
    String,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// The universal top type.
    Any,
    /// The absent-value type of functions that return nothing.
    Unit,
}

impl Primitive {
    pub const ALL: [Primitive; 11] = [
        Primitive::Boolean,
        Primitive::Char,
        Primitive::String,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Any,
        Primitive::Unit,
    ];

    /// Get the lowercase name used in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
            Primitive::String => "string",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Any => "any",
            Primitive::Unit => "unit",
        }
    }

    /// Returns true for the integer family (byte, short, int, long).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Primitive::Byte | Primitive::Short | Primitive::Int | Primitive::Long
        )
    }

    /// Returns true for the floating-point family.
    pub fn is_floating(&self) -> bool {
        matches!(self, Primitive::Float | Primitive::Double)
    }
}

/// What a [`TypeReference`] points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classifier {
    Primitive(Primitive),
    /// Ordered collection or generic array with a single element argument.
    Collection,
    /// Fixed-size native array whose element type is implied.
    PrimitiveArray(Primitive),
    /// Associative collection with key and value arguments.
    Map,
    /// Function shape: parameter types followed by the return type.
    Function,
    /// A user class, resolved through a [`MetadataProvider`](crate::MetadataProvider).
    Class(ClassId),
    /// A reference to a declared type parameter.
    TypeParameter(String),
}

impl Classifier {
    pub fn class(id: impl Into<ClassId>) -> Self {
        Self::Class(id.into())
    }

    /// The class identity, for `Class` classifiers.
    pub fn class_id(&self) -> Option<&ClassId> {
        match self {
            Self::Class(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function)
    }

    /// Number of type arguments this classifier takes.
    ///
    /// Returns `None` when the count is open: functions take any number of
    /// parameters plus a return type, and the arity of a class is declared by
    /// its descriptor.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Primitive(_) | Self::PrimitiveArray(_) | Self::TypeParameter(_) => Some(0),
            Self::Collection => Some(1),
            Self::Map => Some(2),
            Self::Function | Self::Class(_) => None,
        }
    }
}

impl From<Primitive> for Classifier {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

/// A type argument: either a concrete type or an unbounded wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArgument {
    Type(TypeReference),
    Star,
}

impl TypeArgument {
    /// The argument's type, with a star projection widened to `any | null`.
    pub fn resolve(&self) -> Cow<'_, TypeReference> {
        match self {
            Self::Type(ty) => Cow::Borrowed(ty),
            Self::Star => Cow::Owned(TypeReference::any().nullable()),
        }
    }

    pub fn as_type(&self) -> Option<&TypeReference> {
        match self {
            Self::Type(ty) => Some(ty),
            Self::Star => None,
        }
    }
}

impl From<TypeReference> for TypeArgument {
    fn from(value: TypeReference) -> Self {
        Self::Type(value)
    }
}

/// A reference to a type, including nullability and generic arguments.
///
/// Nullability is a property of the reference, not of the classifier: the
/// same class can be referenced both as `T` and `T?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeReference {
    pub classifier: Classifier,
    pub nullable: bool,
    pub arguments: Vec<TypeArgument>,
    /// Declared-name annotation, used for the parameters of function shapes.
    pub name: Option<String>,
}

impl TypeReference {
    pub fn new(classifier: impl Into<Classifier>) -> Self {
        Self {
            classifier: classifier.into(),
            nullable: false,
            arguments: Vec::new(),
            name: None,
        }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(primitive)
    }

    pub fn class(id: impl Into<ClassId>) -> Self {
        Self::new(Classifier::class(id))
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::new(Classifier::TypeParameter(name.into()))
    }

    /// Ordered collection of `element`.
    pub fn list(element: TypeReference) -> Self {
        Self::new(Classifier::Collection).with_argument(element)
    }

    pub fn primitive_array(element: Primitive) -> Self {
        Self::new(Classifier::PrimitiveArray(element))
    }

    pub fn map(key: TypeReference, value: TypeReference) -> Self {
        Self::new(Classifier::Map)
            .with_argument(key)
            .with_argument(value)
    }

    /// Function shape taking `parameters` and returning `returns`.
    pub fn function(
        parameters: impl IntoIterator<Item = TypeReference>,
        returns: TypeReference,
    ) -> Self {
        let mut arguments: Vec<TypeArgument> =
            parameters.into_iter().map(TypeArgument::Type).collect();
        arguments.push(TypeArgument::Type(returns));
        Self {
            arguments,
            ..Self::new(Classifier::Function)
        }
    }

    /// Convenience: the universal top type.
    pub fn any() -> Self {
        Self::primitive(Primitive::Any)
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::primitive(Primitive::String)
    }

    /// Convenience: Int type.
    pub fn int() -> Self {
        Self::primitive(Primitive::Int)
    }

    /// Convenience: Boolean type.
    pub fn boolean() -> Self {
        Self::primitive(Primitive::Boolean)
    }

    /// Convenience: Double type.
    pub fn double() -> Self {
        Self::primitive(Primitive::Double)
    }

    /// Convenience: Unit type.
    pub fn unit() -> Self {
        Self::primitive(Primitive::Unit)
    }

    /// Mark this reference as nullable.
    pub fn nullable(self) -> Self {
        self.with_nullable(true)
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Attach a declared-name annotation.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_argument(mut self, argument: impl Into<TypeArgument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn with_star_argument(mut self) -> Self {
        self.arguments.push(TypeArgument::Star);
        self
    }

    /// Returns true if this is a reference to the universal top type.
    pub fn is_any(&self) -> bool {
        self.classifier == Classifier::Primitive(Primitive::Any)
    }

    /// Returns true if this references a function shape.
    pub fn is_function(&self) -> bool {
        self.classifier.is_function()
    }
}
