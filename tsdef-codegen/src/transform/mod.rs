//! Member and type transformers.
//!
//! A [`Transformer`] hooks into declaration generation at eight points. Every
//! hook defaults to the identity, so implementations only override what they
//! need. Transformers are composed by a [`TransformerPipeline`].

mod default;
mod pipeline;
mod skip_class;

pub use default::DefaultTransformer;
pub use pipeline::TransformerPipeline;
pub use skip_class::SkipClassTransformer;
use tsdef_ir::{
    ClassDescriptor, FunctionDescriptor, ParameterDescriptor, PropertyDescriptor, TypeReference,
};

/// A customization stage for declaration generation.
///
/// # Example
///
/// ```
/// use tsdef_codegen::Transformer;
/// use tsdef_ir::{ClassDescriptor, PropertyDescriptor};
///
/// struct CamelCase;
///
/// impl Transformer for CamelCase {
///     fn transform_property_name(
///         &self,
///         name: String,
///         _property: &PropertyDescriptor,
///         _class: &ClassDescriptor,
///     ) -> String {
///         name.replace('_', "")
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait Transformer: Send + Sync {
    /// Filter or reorder the properties of a class.
    fn transform_property_list<'a>(
        &self,
        properties: Vec<&'a PropertyDescriptor>,
        class: &ClassDescriptor,
    ) -> Vec<&'a PropertyDescriptor> {
        properties
    }

    fn transform_property_name(
        &self,
        name: String,
        property: &PropertyDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        name
    }

    fn transform_property_type(
        &self,
        ty: TypeReference,
        property: &PropertyDescriptor,
        class: &ClassDescriptor,
    ) -> TypeReference {
        ty
    }

    /// Filter or reorder the member functions of a class.
    fn transform_function_list<'a>(
        &self,
        functions: Vec<&'a FunctionDescriptor>,
        class: &ClassDescriptor,
    ) -> Vec<&'a FunctionDescriptor> {
        functions
    }

    fn transform_function_name(
        &self,
        name: String,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        name
    }

    fn transform_parameter_name(
        &self,
        name: String,
        parameter: &ParameterDescriptor,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        name
    }

    /// Rewrite a parameter type or the return type of a member function.
    fn transform_function_type(
        &self,
        ty: TypeReference,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> TypeReference {
        ty
    }

    /// Rewrite any member type, independent of the member it belongs to.
    ///
    /// Runs before the member-specific type hooks.
    fn transform_type(&self, ty: TypeReference) -> TypeReference {
        ty
    }
}
