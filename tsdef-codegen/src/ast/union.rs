//! TypeScript union alias builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for named union types (`type Name = A | B;`).
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
    exported: bool,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            exported: false,
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// Set whether the alias is prefixed with `export`.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        // A union without variants has no inhabitants.
        let variants = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };

        vec![CodeFragment::Line(format!(
            "{}type {} = {};",
            export, self.name, variants
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let u = Union::new("Status")
            .variant("\"pending\"")
            .variant("\"active\"")
            .variant("\"completed\"")
            .build();
        assert_eq!(u, "type Status = \"pending\" | \"active\" | \"completed\";\n");
    }

    #[test]
    fn test_empty_union_is_never() {
        assert_eq!(Union::new("Nothing").build(), "type Nothing = never;\n");
    }

    #[test]
    fn test_exported_union() {
        let u = Union::new("Flag").variant("\"on\"").exported(true).build();
        assert_eq!(u, "export type Flag = \"on\";\n");
    }
}
