//! Ordered composition of transformers.

use std::fmt;

use tsdef_ir::{
    ClassDescriptor, FunctionDescriptor, ParameterDescriptor, PropertyDescriptor, TypeReference,
};

use super::{DefaultTransformer, Transformer};

/// An ordered list of transformers, applied as a left fold.
///
/// Each hook feeds the output of one transformer into the next, so a later
/// transformer sees (and can override) the work of an earlier one.
///
/// Member types go through two stages: every transformer's
/// [`transform_type`](Transformer::transform_type) runs first, then every
/// transformer's member-specific hook.
pub struct TransformerPipeline {
    transformers: Vec<Box<dyn Transformer>>,
}

impl TransformerPipeline {
    /// Create an empty pipeline. Every hook is the identity.
    pub fn new() -> Self {
        Self {
            transformers: Vec::new(),
        }
    }

    /// Append a transformer.
    pub fn transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.push(Box::new(transformer));
        self
    }

    pub fn push(&mut self, transformer: Box<dyn Transformer>) {
        self.transformers.push(transformer);
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    fn fold<T>(&self, value: T, mut next: impl FnMut(&dyn Transformer, T) -> T) -> T {
        self.transformers
            .iter()
            .fold(value, |last, transformer| next(transformer.as_ref(), last))
    }
}

impl Transformer for TransformerPipeline {
    fn transform_property_list<'a>(
        &self,
        properties: Vec<&'a PropertyDescriptor>,
        class: &ClassDescriptor,
    ) -> Vec<&'a PropertyDescriptor> {
        self.fold(properties, |t, last| t.transform_property_list(last, class))
    }

    fn transform_property_name(
        &self,
        name: String,
        property: &PropertyDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        self.fold(name, |t, last| t.transform_property_name(last, property, class))
    }

    fn transform_property_type(
        &self,
        ty: TypeReference,
        property: &PropertyDescriptor,
        class: &ClassDescriptor,
    ) -> TypeReference {
        let ty = self.transform_type(ty);
        self.fold(ty, |t, last| t.transform_property_type(last, property, class))
    }

    fn transform_function_list<'a>(
        &self,
        functions: Vec<&'a FunctionDescriptor>,
        class: &ClassDescriptor,
    ) -> Vec<&'a FunctionDescriptor> {
        self.fold(functions, |t, last| t.transform_function_list(last, class))
    }

    fn transform_function_name(
        &self,
        name: String,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        self.fold(name, |t, last| t.transform_function_name(last, function, class))
    }

    fn transform_parameter_name(
        &self,
        name: String,
        parameter: &ParameterDescriptor,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        self.fold(name, |t, last| {
            t.transform_parameter_name(last, parameter, function, class)
        })
    }

    fn transform_function_type(
        &self,
        ty: TypeReference,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> TypeReference {
        let ty = self.transform_type(ty);
        self.fold(ty, |t, last| t.transform_function_type(last, function, class))
    }

    fn transform_type(&self, ty: TypeReference) -> TypeReference {
        self.fold(ty, |t, last| t.transform_type(last))
    }
}

impl Default for TransformerPipeline {
    /// A pipeline holding a single [`DefaultTransformer`].
    fn default() -> Self {
        Self::new().transformer(DefaultTransformer::default())
    }
}

impl fmt::Debug for TransformerPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerPipeline")
            .field("transformers", &self.transformers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tsdef_ir::Primitive;

    use super::*;

    struct Suffix(&'static str);

    impl Transformer for Suffix {
        fn transform_property_name(
            &self,
            name: String,
            _property: &PropertyDescriptor,
            _class: &ClassDescriptor,
        ) -> String {
            format!("{}{}", name, self.0)
        }
    }

    struct Upper;

    impl Transformer for Upper {
        fn transform_property_name(
            &self,
            name: String,
            _property: &PropertyDescriptor,
            _class: &ClassDescriptor,
        ) -> String {
            name.to_uppercase()
        }
    }

    struct Lower;

    impl Transformer for Lower {
        fn transform_property_name(
            &self,
            name: String,
            _property: &PropertyDescriptor,
            _class: &ClassDescriptor,
        ) -> String {
            name.to_lowercase()
        }
    }

    /// Records which type stage ran by rewriting the type to a marker.
    struct StageMarker;

    impl Transformer for StageMarker {
        fn transform_type(&self, ty: TypeReference) -> TypeReference {
            assert_eq!(ty, TypeReference::int());
            TypeReference::string()
        }

        fn transform_property_type(
            &self,
            ty: TypeReference,
            _property: &PropertyDescriptor,
            _class: &ClassDescriptor,
        ) -> TypeReference {
            assert_eq!(ty, TypeReference::string());
            TypeReference::boolean()
        }
    }

    fn fixture() -> (ClassDescriptor, PropertyDescriptor) {
        let property = PropertyDescriptor::new("Name", TypeReference::int());
        let class = ClassDescriptor::new("Person").property(property.clone());
        (class, property)
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let (class, property) = fixture();
        let pipeline = TransformerPipeline::new();

        assert_eq!(
            pipeline.transform_property_name("Name".into(), &property, &class),
            "Name"
        );
        assert_eq!(
            pipeline.transform_property_list(vec![&property], &class).len(),
            1
        );
    }

    #[test]
    fn test_fold_runs_in_order() {
        let (class, property) = fixture();
        let pipeline = TransformerPipeline::new()
            .transformer(Suffix("_a"))
            .transformer(Suffix("_b"));

        assert_eq!(
            pipeline.transform_property_name("x".into(), &property, &class),
            "x_a_b"
        );
    }

    #[test]
    fn test_later_stage_wins() {
        let (class, property) = fixture();

        let lower_then_upper = TransformerPipeline::new()
            .transformer(Lower)
            .transformer(Upper);
        let upper_then_lower = TransformerPipeline::new()
            .transformer(Upper)
            .transformer(Lower);

        assert_eq!(
            lower_then_upper.transform_property_name("Name".into(), &property, &class),
            "NAME"
        );
        assert_eq!(
            upper_then_lower.transform_property_name("Name".into(), &property, &class),
            "name"
        );
    }

    #[test]
    fn test_generic_type_stage_runs_first() {
        let (class, property) = fixture();
        let pipeline = TransformerPipeline::new().transformer(StageMarker);

        let ty = pipeline.transform_property_type(TypeReference::int(), &property, &class);
        assert_eq!(ty, TypeReference::primitive(Primitive::Boolean));
    }

    #[test]
    fn test_default_pipeline_holds_default_transformer() {
        assert_eq!(TransformerPipeline::default().len(), 1);
        assert!(TransformerPipeline::new().is_empty());
    }
}
