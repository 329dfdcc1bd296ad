//! Type tokens used in schema files.

use tsdef_ir::{Classifier, Primitive};

/// What the `of` field of a schema type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Classifier(Classifier),
    /// `*`: unbounded wildcard, only valid as a type argument.
    Star,
}

/// Resolve a type token. Anything that is not a built-in token is a class id.
pub(crate) fn parse_token(token: &str) -> Token {
    if token == "*" {
        return Token::Star;
    }
    if let Some(primitive) = primitive(token) {
        return Token::Classifier(Classifier::Primitive(primitive));
    }

    let classifier = match token {
        "list" | "set" | "collection" | "array" => Classifier::Collection,
        "map" => Classifier::Map,
        "function" => Classifier::Function,
        _ => match token.strip_suffix("_array").and_then(array_element) {
            Some(element) => Classifier::PrimitiveArray(element),
            None => Classifier::class(token),
        },
    };
    Token::Classifier(classifier)
}

/// Resolve a token that must name a classifier (mapping keys, ignored supertypes).
pub(crate) fn classifier(token: &str) -> Option<Classifier> {
    match parse_token(token) {
        Token::Classifier(classifier) => Some(classifier),
        Token::Star => None,
    }
}

fn primitive(token: &str) -> Option<Primitive> {
    Primitive::ALL.into_iter().find(|p| p.as_str() == token)
}

/// Element types that have a native array form.
fn array_element(token: &str) -> Option<Primitive> {
    primitive(token).filter(|p| {
        p.is_integer() || p.is_floating() || matches!(p, Primitive::Boolean | Primitive::Char)
    })
}

/// Check the number of type arguments given to a classifier.
pub(crate) fn check_arity(classifier: &Classifier, count: usize) -> Result<(), String> {
    let expected = match classifier {
        Classifier::Function if count == 0 => "at least 1 (the return type)",
        Classifier::Function | Classifier::Class(_) => return Ok(()),
        Classifier::Collection if count != 1 => "1",
        Classifier::Map if count != 2 => "2",
        Classifier::Primitive(_) | Classifier::PrimitiveArray(_) | Classifier::TypeParameter(_)
            if count != 0 =>
        {
            "0"
        }
        _ => return Ok(()),
    };
    Err(format!("expected {} type argument(s), found {}", expected, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tokens() {
        assert_eq!(
            parse_token("long"),
            Token::Classifier(Classifier::Primitive(Primitive::Long))
        );
        assert_eq!(parse_token("set"), Token::Classifier(Classifier::Collection));
        assert_eq!(parse_token("map"), Token::Classifier(Classifier::Map));
        assert_eq!(parse_token("function"), Token::Classifier(Classifier::Function));
        assert_eq!(
            parse_token("int_array"),
            Token::Classifier(Classifier::PrimitiveArray(Primitive::Int))
        );
        assert_eq!(parse_token("*"), Token::Star);
    }

    #[test]
    fn test_other_tokens_are_classes() {
        assert_eq!(
            parse_token("com.example.Person"),
            Token::Classifier(Classifier::class("com.example.Person"))
        );
        assert_eq!(
            parse_token("any_array"),
            Token::Classifier(Classifier::class("any_array"))
        );
        assert_eq!(classifier("*"), None);
    }

    #[test]
    fn test_arity() {
        assert!(check_arity(&Classifier::Collection, 1).is_ok());
        assert!(check_arity(&Classifier::Collection, 0).is_err());
        assert!(check_arity(&Classifier::Map, 1).is_err());
        assert!(check_arity(&Classifier::Function, 0).is_err());
        assert!(check_arity(&Classifier::Function, 3).is_ok());
        assert!(check_arity(&Classifier::Primitive(Primitive::Int), 1).is_err());
        assert!(check_arity(&Classifier::class("Box"), 4).is_ok());
    }
}
