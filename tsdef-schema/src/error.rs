use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass an existing schema file with '--schema <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(tsdef::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(tsdef::parse_error))]
    JsonParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate class '{id}'")]
    #[diagnostic(
        code(tsdef::duplicate_class),
        help("each class id may only be declared once")
    )]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        id: String,
    },

    #[error("root '{id}' is not a declared class")]
    #[diagnostic(
        code(tsdef::unknown_root),
        help("add a [[classes]] entry with id = \"{id}\" or remove it from roots")
    )]
    UnknownRoot {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown root")]
        span: Option<SourceSpan>,
        id: String,
    },

    #[error("invalid type in {context}: {message}")]
    #[diagnostic(
        code(tsdef::invalid_type),
        help(
            "a type has exactly one of 'of' or 'param'; built-in tokens are: boolean, char, string, byte, short, int, long, float, double, any, unit, list, map, function, <primitive>_array and '*'"
        )
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        context: String,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(tsdef::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }

    /// Create a parse error from a JSON error with source context
    pub fn json_parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = line_column_offset(src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::JsonParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span
    pub fn validation_at(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_offset() {
        let src = "{\n  \"roots\": 1\n}";
        assert_eq!(line_column_offset(src, 1, 1), Some(0));
        assert_eq!(line_column_offset(src, 2, 3), Some(4));
        assert_eq!(line_column_offset(src, 0, 0), None);
    }

    #[test]
    fn test_json_parse_error_has_span() {
        let src = "{\n  \"roots\": [\n}";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::json_parse(err, src, "schema.json");
        match *err {
            Error::JsonParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
