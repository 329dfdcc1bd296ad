//! Member filtering.

use tsdef_ir::{ClassDescriptor, FunctionDescriptor, PropertyDescriptor};

use super::Transformer;

/// Names generated for data classes, dropped unless explicitly requested.
const DATA_CLASS_FUNCTIONS: &[&str] = &["copy", "equals", "hashCode", "toString"];

/// Decides whether properties and member functions are emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTransformer {
    pub properties: bool,
    pub functions: bool,
    /// Keep `componentN`, `copy`, `equals`, `hashCode` and `toString`.
    pub data_class_functions: bool,
}

impl DefaultTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(mut self, enabled: bool) -> Self {
        self.properties = enabled;
        self
    }

    pub fn functions(mut self, enabled: bool) -> Self {
        self.functions = enabled;
        self
    }

    pub fn data_class_functions(mut self, enabled: bool) -> Self {
        self.data_class_functions = enabled;
        self
    }
}

impl Default for DefaultTransformer {
    fn default() -> Self {
        Self {
            properties: true,
            functions: false,
            data_class_functions: false,
        }
    }
}

/// Returns true for `componentN` and the other generated data-class members.
pub(crate) fn is_data_class_function(name: &str) -> bool {
    if let Some(index) = name.strip_prefix("component") {
        return !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit());
    }
    DATA_CLASS_FUNCTIONS.contains(&name)
}

impl Transformer for DefaultTransformer {
    fn transform_property_list<'a>(
        &self,
        properties: Vec<&'a PropertyDescriptor>,
        _class: &ClassDescriptor,
    ) -> Vec<&'a PropertyDescriptor> {
        if !self.properties {
            return Vec::new();
        }
        properties
    }

    fn transform_function_list<'a>(
        &self,
        functions: Vec<&'a FunctionDescriptor>,
        _class: &ClassDescriptor,
    ) -> Vec<&'a FunctionDescriptor> {
        if !self.functions {
            return Vec::new();
        }
        functions
            .into_iter()
            .filter(|f| f.visibility.is_public())
            .filter(|f| self.data_class_functions || !is_data_class_function(&f.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tsdef_ir::{TypeReference, Visibility};

    use super::*;

    fn class() -> ClassDescriptor {
        ClassDescriptor::new("com.example.Point")
            .property(PropertyDescriptor::new("x", TypeReference::int()))
            .function(FunctionDescriptor::new("component1", TypeReference::int()))
            .function(FunctionDescriptor::new("copy", TypeReference::class("com.example.Point")))
            .function(FunctionDescriptor::new("hashCode", TypeReference::int()))
            .function(FunctionDescriptor::new("length", TypeReference::double()))
            .function(
                FunctionDescriptor::new("secret", TypeReference::unit())
                    .visibility(Visibility::Private),
            )
    }

    fn function_names(transformer: DefaultTransformer, class: &ClassDescriptor) -> Vec<&str> {
        transformer
            .transform_function_list(class.functions.iter().collect(), class)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect()
    }

    #[test]
    fn test_defaults() {
        let t = DefaultTransformer::default();
        assert!(t.properties);
        assert!(!t.functions);
        assert!(!t.data_class_functions);
    }

    #[test]
    fn test_functions_disabled_by_default() {
        let class = class();
        assert!(function_names(DefaultTransformer::default(), &class).is_empty());
    }

    #[test]
    fn test_functions_drop_data_class_members_and_private() {
        let class = class();
        let names = function_names(DefaultTransformer::new().functions(true), &class);
        assert_eq!(names, vec!["length"]);
    }

    #[test]
    fn test_data_class_functions_kept_when_enabled() {
        let class = class();
        let names = function_names(
            DefaultTransformer::new()
                .functions(true)
                .data_class_functions(true),
            &class,
        );
        assert_eq!(names, vec!["component1", "copy", "hashCode", "length"]);
    }

    #[test]
    fn test_properties_can_be_disabled() {
        let class = class();
        let t = DefaultTransformer::new().properties(false);
        assert!(
            t.transform_property_list(class.properties.iter().collect(), &class)
                .is_empty()
        );
    }

    #[test]
    fn test_is_data_class_function() {
        assert!(is_data_class_function("component1"));
        assert!(is_data_class_function("component12"));
        assert!(is_data_class_function("toString"));
        assert!(!is_data_class_function("component"));
        assert!(!is_data_class_function("componentName"));
        assert!(!is_data_class_function("copyTo"));
    }
}
