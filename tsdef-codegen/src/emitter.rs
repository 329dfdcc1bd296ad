//! Per-class declaration rendering.

use tsdef_ir::{
    ClassDescriptor, FunctionDescriptor, PropertyDescriptor, TypeParameterDescriptor,
    TypeReference,
};

use crate::{
    ast::{Interface, Union},
    builder::{CodeBuilder, Renderable},
    transform::Transformer,
    walker::Walker,
};

impl<'a> Walker<'a> {
    /// Render the declaration of one class.
    pub(crate) fn generate_definition(&mut self, class: &'a ClassDescriptor) -> String {
        if class.is_enum() {
            self.generate_enum(class)
        } else {
            self.generate_interface(class)
        }
    }

    fn generate_enum(&self, class: &ClassDescriptor) -> String {
        let union = class.constants.iter().fold(
            Union::new(&class.name).exported(self.config.export),
            |union, constant| union.variant(serde_json::Value::String(constant.clone()).to_string()),
        );
        self.render(&union)
    }

    fn generate_interface(&mut self, class: &'a ClassDescriptor) -> String {
        let config = self.config;
        let mut interface = Interface::new(&class.name).exported(config.export);

        for parameter in &class.type_parameters {
            interface = interface.type_parameter(self.format_type_parameter(parameter));
        }

        for supertype in &class.supertypes {
            if config.is_ignored_supertype(&supertype.classifier) {
                continue;
            }
            if !self.resolves_supertype(supertype) {
                tracing::warn!(
                    class = %class.id,
                    supertype = ?supertype.classifier,
                    "unresolved supertype, dropping it from `extends`"
                );
                continue;
            }
            interface = interface.extends(self.format_type(supertype).format_without_parenthesis());
        }

        for member in self.generate_properties(class) {
            interface = interface.member(member);
        }
        for member in self.generate_functions(class) {
            interface = interface.member(member);
        }

        self.render(&interface)
    }

    /// A class supertype must be mapped or known to the provider; anything
    /// else would render as `unknown`, which an interface cannot extend.
    fn resolves_supertype(&self, supertype: &TypeReference) -> bool {
        match supertype.classifier.class_id() {
            Some(id) => {
                self.config.mappings.contains_key(&supertype.classifier)
                    || self.provider.class(id).is_some()
            }
            None => true,
        }
    }

    /// `T`, or `T extends A & B` with `any` bounds dropped.
    fn format_type_parameter(&mut self, parameter: &TypeParameterDescriptor) -> String {
        let bounds: Vec<String> = parameter
            .upper_bounds
            .iter()
            .filter(|bound| !bound.is_any())
            .map(|bound| self.format_type(bound).format_with_parenthesis())
            .collect();

        if bounds.is_empty() {
            parameter.name.clone()
        } else {
            format!("{} extends {}", parameter.name, bounds.join(" & "))
        }
    }

    fn generate_properties(&mut self, class: &ClassDescriptor) -> Vec<String> {
        let config = self.config;
        let pipeline = &config.pipeline;
        let candidates: Vec<&PropertyDescriptor> = class
            .properties
            .iter()
            .filter(|property| !property.ty.is_function())
            .filter(|property| property.is_externally_visible())
            .collect();

        pipeline
            .transform_property_list(candidates, class)
            .into_iter()
            .map(|property| {
                let name = pipeline.transform_property_name(property.name.clone(), property, class);
                let ty = pipeline.transform_property_type(property.ty.clone(), property, class);
                format!("{}: {};", name, self.format_type(&ty).format_without_parenthesis())
            })
            .collect()
    }

    fn generate_functions(&mut self, class: &ClassDescriptor) -> Vec<String> {
        let config = self.config;
        let pipeline = &config.pipeline;
        let candidates: Vec<&FunctionDescriptor> = class
            .functions
            .iter()
            .filter(|function| function.visibility.is_public())
            .collect();

        pipeline
            .transform_function_list(candidates, class)
            .into_iter()
            .map(|function| self.generate_member_function(function, class))
            .collect()
    }

    fn generate_member_function(
        &mut self,
        function: &FunctionDescriptor,
        class: &ClassDescriptor,
    ) -> String {
        let config = self.config;
        let pipeline = &config.pipeline;
        let name = pipeline.transform_function_name(function.name.clone(), function, class);

        let parameters: Vec<String> = function
            .value_parameters()
            .enumerate()
            .map(|(index, parameter)| {
                let declared = parameter
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("par{}", index));
                let name = pipeline.transform_parameter_name(declared, parameter, function, class);
                let ty = pipeline.transform_function_type(parameter.ty.clone(), function, class);
                format!("{}: {}", name, self.format_type(&ty).format_without_parenthesis())
            })
            .collect();

        let returns = pipeline.transform_function_type(function.return_type.clone(), function, class);
        format!(
            "{}({}): {};",
            name,
            parameters.join(", "),
            self.format_type(&returns).format_without_parenthesis()
        )
    }

    fn render(&self, node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::new(self.config.indent);
        builder.emit(node);
        builder.build().trim_end().to_string()
    }
}
