//! Rewriting of classes that should not be described.

use tsdef_ir::{Classifier, TypeArgument, TypeReference};

use super::Transformer;

/// Replaces references to classes under the configured prefixes with `any`.
///
/// Nullability and the declared-name annotation of the replaced reference are
/// kept. Type arguments are rewritten recursively, so `List<KProperty<*>>`
/// becomes `List<any>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipClassTransformer {
    prefixes: Vec<String>,
}

impl SkipClassTransformer {
    pub const DEFAULT_PREFIX: &'static str = "kotlin.reflect.";

    /// Skip every class whose qualified name starts with one of `prefixes`.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn is_skipped(&self, classifier: &Classifier) -> bool {
        classifier.class_id().is_some_and(|id| {
            self.prefixes
                .iter()
                .any(|prefix| id.as_str().starts_with(prefix.as_str()))
        })
    }

    fn rewrite(&self, ty: TypeReference) -> TypeReference {
        if self.is_skipped(&ty.classifier) {
            return TypeReference {
                nullable: ty.nullable,
                name: ty.name,
                ..TypeReference::any()
            };
        }

        let arguments = ty
            .arguments
            .into_iter()
            .map(|argument| match argument {
                TypeArgument::Type(inner) => TypeArgument::Type(self.rewrite(inner)),
                TypeArgument::Star => TypeArgument::Star,
            })
            .collect();

        TypeReference { arguments, ..ty }
    }
}

impl Default for SkipClassTransformer {
    fn default() -> Self {
        Self::new([Self::DEFAULT_PREFIX])
    }
}

impl Transformer for SkipClassTransformer {
    fn transform_type(&self, ty: TypeReference) -> TypeReference {
        self.rewrite(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_class_becomes_any() {
        let t = SkipClassTransformer::default();
        let ty = TypeReference::class("kotlin.reflect.KProperty").with_star_argument();
        assert_eq!(t.transform_type(ty), TypeReference::any());
    }

    #[test]
    fn test_nullability_and_name_preserved() {
        let t = SkipClassTransformer::default();
        let ty = TypeReference::class("kotlin.reflect.KClass")
            .nullable()
            .named("klass");
        let rewritten = t.transform_type(ty);

        assert!(rewritten.is_any());
        assert!(rewritten.nullable);
        assert_eq!(rewritten.name.as_deref(), Some("klass"));
    }

    #[test]
    fn test_rewrites_nested_arguments() {
        let t = SkipClassTransformer::default();
        let ty = TypeReference::function(
            [
                TypeReference::class("kotlin.reflect.KProperty").named("property"),
                TypeReference::int(),
            ],
            TypeReference::unit(),
        );
        let expected = TypeReference::function(
            [TypeReference::any().named("property"), TypeReference::int()],
            TypeReference::unit(),
        );
        assert_eq!(t.transform_type(ty), expected);
    }

    #[test]
    fn test_other_classes_untouched() {
        let t = SkipClassTransformer::new(["com.internal."]);
        let ty = TypeReference::list(TypeReference::class("com.example.Person"));
        assert_eq!(t.transform_type(ty.clone()), ty);
    }
}
