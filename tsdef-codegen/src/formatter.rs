//! Type reference formatting.

use tsdef_ir::{ClassId, Classifier, Primitive, TypeArgument, TypeReference};

use crate::{config::VoidType, walker::Walker};

/// A formatted type: one or more union branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TsType {
    branches: Vec<String>,
    /// The single branch is an arrow function type.
    function: bool,
}

impl TsType {
    pub(crate) fn single(text: impl Into<String>) -> Self {
        Self {
            branches: vec![text.into()],
            function: false,
        }
    }

    pub(crate) fn function(text: impl Into<String>) -> Self {
        Self {
            branches: vec![text.into()],
            function: true,
        }
    }

    /// Add the absent-value branch.
    ///
    /// A function type is parenthesized first so the union applies to the
    /// whole function rather than to its return type.
    pub(crate) fn or_void(mut self, void_type: VoidType) -> Self {
        if self.function {
            self.branches = vec![format!("({})", self.format_without_parenthesis())];
            self.function = false;
        }
        self.branches.push(void_type.as_str().to_string());
        self
    }

    /// Whether the type must be parenthesized in postfix position (`T[]`).
    pub(crate) fn needs_parenthesis(&self) -> bool {
        self.branches.len() > 1 || self.function
    }

    pub(crate) fn format_with_parenthesis(&self) -> String {
        if self.needs_parenthesis() {
            format!("({})", self.format_without_parenthesis())
        } else {
            self.format_without_parenthesis()
        }
    }

    pub(crate) fn format_without_parenthesis(&self) -> String {
        self.branches.join(" | ")
    }
}

impl Walker<'_> {
    /// Format a type reference, visiting any class it mentions.
    pub(crate) fn format_type(&mut self, ty: &TypeReference) -> TsType {
        let config = self.config;
        let base = match config.mappings.get(&ty.classifier) {
            Some(text) => TsType::single(text.clone()),
            None => self.format_classifier(ty),
        };

        if ty.nullable {
            base.or_void(config.void_type)
        } else {
            base
        }
    }

    fn format_classifier(&mut self, ty: &TypeReference) -> TsType {
        match &ty.classifier {
            Classifier::Primitive(primitive) => TsType::single(self.format_primitive(*primitive)),
            Classifier::Collection => {
                let element = self.format_argument(ty.arguments.first());
                TsType::single(format!("{}[]", element.format_with_parenthesis()))
            }
            Classifier::PrimitiveArray(element) => {
                TsType::single(format!("{}[]", self.format_primitive(*element)))
            }
            Classifier::Map => self.format_map(ty),
            Classifier::Function => self.format_function(ty),
            Classifier::Class(id) => self.format_class(id, ty),
            Classifier::TypeParameter(name) => TsType::single(name.clone()),
        }
    }

    fn format_primitive(&self, primitive: Primitive) -> String {
        match primitive {
            Primitive::Boolean => "boolean",
            Primitive::Char | Primitive::String => "string",
            Primitive::Byte | Primitive::Short | Primitive::Int | Primitive::Long => {
                return self.config.int_type_name.clone();
            }
            Primitive::Float | Primitive::Double => "number",
            Primitive::Any => "any",
            Primitive::Unit => "void",
        }
        .to_string()
    }

    /// Format a type argument; star projections and missing arguments widen
    /// to `any | null`.
    fn format_argument(&mut self, argument: Option<&TypeArgument>) -> TsType {
        match argument {
            Some(argument) => self.format_type(&argument.resolve()),
            None => self.format_type(&TypeReference::any().nullable()),
        }
    }

    fn format_map(&mut self, ty: &TypeReference) -> TsType {
        let key_argument = ty.arguments.first();
        let key_is_enum = key_argument
            .and_then(TypeArgument::as_type)
            .and_then(|key| key.classifier.class_id())
            .is_some_and(|id| self.provider.is_enum(id));

        let key = self.format_argument(key_argument);
        let value = self.format_argument(ty.arguments.get(1));
        let binder = if key_is_enum { " in " } else { ": " };

        TsType::single(format!(
            "{{ [key{}{}]: {} }}",
            binder,
            key.format_without_parenthesis(),
            value.format_without_parenthesis()
        ))
    }

    fn format_function(&mut self, ty: &TypeReference) -> TsType {
        let (returns, parameters) = match ty.arguments.split_last() {
            Some((returns, parameters)) => (Some(returns), parameters),
            None => (None, &[][..]),
        };

        let parameters: Vec<String> = parameters
            .iter()
            .enumerate()
            .map(|(index, argument)| {
                let name = argument
                    .as_type()
                    .and_then(|ty| ty.name.clone())
                    .unwrap_or_else(|| format!("par{}", index));
                let ty = self.format_argument(Some(argument));
                format!("{}: {}", name, ty.format_without_parenthesis())
            })
            .collect();
        let returns = self.format_argument(returns);

        TsType::function(format!(
            "({}) => {}",
            parameters.join(", "),
            returns.format_without_parenthesis()
        ))
    }

    fn format_class(&mut self, id: &ClassId, ty: &TypeReference) -> TsType {
        let provider = self.provider;
        let Some(class) = provider.class(id) else {
            tracing::warn!(class = %id, "unresolved class reference, emitting `unknown`");
            return TsType::single("unknown");
        };

        self.visit(class);

        if ty.arguments.is_empty() {
            return TsType::single(class.name.clone());
        }

        let arguments: Vec<String> = ty
            .arguments
            .iter()
            .map(|argument| {
                self.format_argument(Some(argument))
                    .format_without_parenthesis()
            })
            .collect();
        TsType::single(format!("{}<{}>", class.name, arguments.join(", ")))
    }
}
