//! Validation context and source span lookup.

use miette::SourceSpan;

use crate::Error;

/// Parsing and validation context that carries source information.
///
/// Tracks the path through the schema (class id, then member name) so error
/// messages can say where a problem was found.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub(crate) fn src(&self) -> &'a str {
        self.src
    }

    pub(crate) fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub(crate) fn push(&self, segment: &str) -> Self {
        let mut path = self.path.clone();
        path.push(segment.to_string());
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    pub(crate) fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// For example: "property 'com.example.Person.age'", or just the kind.
    pub(crate) fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} '{}'", kind, self.path_string())
        }
    }

    pub(crate) fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name)
    }

    pub(crate) fn invalid_type_error(
        &self,
        kind: &str,
        message: impl Into<String>,
        needle: &str,
    ) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: miette::NamedSource::new(self.filename, self.src.to_string()),
            span: self.find_span(needle),
            context: self.context_for(kind),
            message: message.into(),
        })
    }

    pub(crate) fn validation_error_at(
        &self,
        message: impl Into<String>,
        needle: &str,
    ) -> Box<Error> {
        Error::validation_at(message, self.src, self.filename, self.find_span(needle))
    }
}

/// Find where a quoted value appears in the source.
///
/// Schema values are strings in both TOML and JSON, so the quoted form is
/// tried first; the span covers the text between the quotes.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_quoted_spans(src, name).into_iter().next().or_else(|| {
        // Fallback: just find the name anywhere (less precise)
        src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
    })
}

/// Every quoted occurrence of `name`, in source order.
pub(crate) fn find_quoted_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        spans.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| SourceSpan::from((pos + 1, name.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span_prefers_quoted() {
        let src = "roots = [\"Person\"]\n# Person\nid = 'Person'";
        let span = find_name_span(src, "Person").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_quoted_spans_in_order() {
        let src = "id = 'A'\nid = \"A\"\n";
        let offsets: Vec<_> = find_quoted_spans(src, "A").iter().map(|s| s.offset()).collect();
        assert_eq!(offsets, vec![6, 15]);
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "tsdef.toml");
        assert_eq!(ctx.context_for("schema"), "schema");
        let nested = ctx.push("com.example.Person").push("age");
        assert_eq!(nested.context_for("property"), "property 'com.example.Person.age'");
    }
}
