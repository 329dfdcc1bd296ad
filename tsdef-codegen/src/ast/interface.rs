//! TypeScript interface builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript interfaces.
///
/// Type parameters, supertypes and members are taken as already formatted
/// text; the builder only handles layout.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    type_parameters: Vec<String>,
    extends: Vec<String>,
    members: Vec<String>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            extends: Vec::new(),
            members: Vec::new(),
            exported: false,
        }
    }

    /// Add a type parameter, e.g. `T` or `T extends Entity`.
    pub fn type_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.type_parameters.push(parameter.into());
        self
    }

    /// Add a supertype to the `extends` clause.
    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.extends.push(supertype.into());
        self
    }

    /// Add a member line, e.g. `name: string;`.
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Set whether the interface is prefixed with `export`.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let type_parameters = if self.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_parameters.join(", "))
        };
        let extends = if self.extends.is_empty() {
            String::new()
        } else {
            format!(" extends {}", self.extends.join(", "))
        };
        format!("{}interface {}{}{}", export, self.name, type_parameters, extends)
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = self.header();

        if self.members.is_empty() {
            vec![CodeFragment::Line(format!("{} {{}}", header))]
        } else {
            vec![CodeFragment::block(
                format!("{} {{", header),
                self.members.iter().map(CodeFragment::line).collect(),
                Some("}".to_string()),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_members() {
        let i = Interface::new("Person")
            .member("name: string;")
            .member("age: number;")
            .build();
        assert_eq!(i, "interface Person {\n    name: string;\n    age: number;\n}\n");
    }

    #[test]
    fn test_generic_interface_with_supertypes() {
        let i = Interface::new("Box")
            .type_parameter("T extends Entity")
            .type_parameter("U")
            .extends("Base<T>")
            .extends("Tagged")
            .build();
        assert_eq!(i, "interface Box<T extends Entity, U> extends Base<T>, Tagged {}\n");
    }

    #[test]
    fn test_exported_interface() {
        let i = Interface::new("Point").exported(true).member("x: number;").build();
        assert!(i.starts_with("export interface Point {"));
    }
}
