//! Renderable trait and CodeFragment for decoupled code generation.

/// Represents a fragment of generated code.
///
/// AST nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
/// turns fragments into indented text.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Trait for AST nodes that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node into a list of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
