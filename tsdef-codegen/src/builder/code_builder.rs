//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indented text buffer.
///
/// # Example
///
/// ```
/// use tsdef_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("interface Point {")
///     .push_indent()
///     .push_line("x: number;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "interface Point {\n    x: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("type A = string;");
        assert_eq!(builder.build(), "type A = string;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }

    #[test]
    fn test_two_space_indent() {
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder
            .push_line("interface A {")
            .push_indent()
            .push_line("a: string;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "interface A {\n  a: string;\n}\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "interface Box {".to_string(),
                    body: vec![CodeFragment::line("value: any;")],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "interface Box {\n\tvalue: any;\n}\n");
    }
}
