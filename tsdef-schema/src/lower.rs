//! Validation and lowering of a parsed schema file to descriptors.

use std::collections::{HashMap, HashSet};

use miette::NamedSource;
use tsdef_ir::{
    ClassDescriptor, ClassId, ClassKind, ClassRegistry, Classifier, FunctionDescriptor,
    ParameterDescriptor, ParameterKind, PropertyDescriptor, TypeArgument, TypeParameterDescriptor,
    TypeReference,
};

use crate::{
    Error, Result, Schema,
    raw::{RawClass, RawFunction, RawProperty, RawSchema, RawType},
    token::{self, Token},
    validate::{ParseContext, find_quoted_spans},
};

/// Validate a parsed schema file and lower it to descriptors.
pub(crate) fn lower(raw: RawSchema, ctx: &ParseContext) -> Result<Schema> {
    validate_settings(&raw, ctx)?;

    let mut registry = ClassRegistry::new();
    let mut declared = HashSet::new();
    let arities: Arities = raw
        .classes
        .iter()
        .map(|class| (class.id.as_str(), class.type_parameters.len()))
        .collect();

    for class in &raw.classes {
        if !declared.insert(class.id.as_str()) {
            return Err(duplicate_class(&class.id, ctx));
        }
        registry.insert(lower_class(class, &ctx.push(&class.id), &arities)?);
    }

    let mut roots = Vec::with_capacity(raw.roots.len());
    for root in &raw.roots {
        let id = ClassId::new(root.as_str());
        if !registry.contains(&id) {
            return Err(Box::new(Error::UnknownRoot {
                src: NamedSource::new(ctx.filename(), ctx.src().to_string()),
                span: ctx.find_span(root),
                id: root.clone(),
            }));
        }
        roots.push(id);
    }

    tracing::debug!(classes = registry.len(), roots = roots.len(), "schema lowered");

    Ok(Schema {
        roots,
        generator: raw.generator,
        registry,
    })
}

/// Number of type parameters declared by each class in the file.
type Arities<'a> = HashMap<&'a str, usize>;

fn validate_settings(raw: &RawSchema, ctx: &ParseContext) -> Result<()> {
    let settings = &raw.generator;
    for token in settings.mappings.keys().chain(&settings.ignore_supertypes) {
        if token::classifier(token).is_none() {
            return Err(ctx.validation_error_at(
                format!("'{}' does not name a type", token),
                token,
            ));
        }
    }
    Ok(())
}

fn duplicate_class(id: &str, ctx: &ParseContext) -> Box<Error> {
    let spans = find_quoted_spans(ctx.src(), id);
    Box::new(Error::DuplicateClass {
        src: NamedSource::new(ctx.filename(), ctx.src().to_string()),
        first_span: spans.first().copied(),
        second_span: spans.get(1).copied(),
        id: id.to_string(),
    })
}

fn lower_class(raw: &RawClass, ctx: &ParseContext, arities: &Arities) -> Result<ClassDescriptor> {
    let kind = ClassKind::from(raw.kind);
    if kind != ClassKind::Enum && !raw.constants.is_empty() {
        return Err(ctx.validation_error_at(
            format!("'{}' declares constants but is not an enum", raw.id),
            &raw.id,
        ));
    }

    let mut class = ClassDescriptor::new(raw.id.as_str()).kind(kind);
    if let Some(name) = &raw.name {
        class = class.name(name);
    }
    class.constants = raw.constants.clone();

    for parameter in &raw.type_parameters {
        let ctx = ctx.push(&parameter.name);
        let mut descriptor = TypeParameterDescriptor::new(&parameter.name);
        for bound in &parameter.bounds {
            descriptor = descriptor.bound(lower_type(bound, &ctx, arities, "type parameter bound")?);
        }
        class = class.type_parameter(descriptor);
    }

    for supertype in &raw.supertypes {
        class = class.supertype(lower_type(supertype, ctx, arities, "supertype")?);
    }

    for property in &raw.properties {
        class = class.property(lower_property(property, &ctx.push(&property.name), arities)?);
    }

    for function in &raw.functions {
        class = class.function(lower_function(function, &ctx.push(&function.name), arities)?);
    }

    Ok(class)
}

fn lower_property(
    raw: &RawProperty,
    ctx: &ParseContext,
    arities: &Arities,
) -> Result<PropertyDescriptor> {
    let ty = lower_type(&raw.ty, ctx, arities, "property")?;
    let mut property = PropertyDescriptor::new(&raw.name, ty).visibility(raw.visibility.into());
    property.has_public_accessor = raw.accessor;
    Ok(property)
}

fn lower_function(
    raw: &RawFunction,
    ctx: &ParseContext,
    arities: &Arities,
) -> Result<FunctionDescriptor> {
    let return_type = match &raw.returns {
        Some(returns) => lower_type(returns, ctx, arities, "return type")?,
        None => TypeReference::unit(),
    };

    let mut function =
        FunctionDescriptor::new(&raw.name, return_type).visibility(raw.visibility.into());
    for parameter in &raw.parameters {
        let ty = lower_type(&parameter.ty, ctx, arities, "parameter")?;
        function = function.parameter(ParameterDescriptor {
            name: parameter.name.clone(),
            ty,
            kind: if parameter.receiver {
                ParameterKind::Receiver
            } else {
                ParameterKind::Value
            },
        });
    }
    Ok(function)
}

/// Lower a type in a position where `*` is not allowed.
fn lower_type(
    raw: &RawType,
    ctx: &ParseContext,
    arities: &Arities,
    kind: &str,
) -> Result<TypeReference> {
    match lower_argument(raw, ctx, arities, kind)? {
        TypeArgument::Type(ty) => Ok(ty),
        TypeArgument::Star => Err(ctx.invalid_type_error(
            kind,
            "'*' is only allowed as a type argument",
            "*",
        )),
    }
}

fn lower_argument(
    raw: &RawType,
    ctx: &ParseContext,
    arities: &Arities,
    kind: &str,
) -> Result<TypeArgument> {
    let classifier = match (&raw.of, &raw.param) {
        (Some(of), Some(_)) => {
            return Err(ctx.invalid_type_error(kind, "both 'of' and 'param' are set", of));
        }
        (None, None) => {
            return Err(ctx.invalid_type_error(
                kind,
                "one of 'of' or 'param' is required",
                ctx.path_string().rsplit('.').next().unwrap_or_default(),
            ));
        }
        (None, Some(param)) => Classifier::TypeParameter(param.clone()),
        (Some(of), None) => match token::parse_token(of) {
            Token::Star if raw.args.is_empty() => return Ok(TypeArgument::Star),
            Token::Star => {
                return Err(ctx.invalid_type_error(kind, "'*' takes no type arguments", of));
            }
            Token::Classifier(classifier) => classifier,
        },
    };

    if let Err(message) = check_arity(&classifier, raw.args.len(), arities) {
        let needle = raw.of.as_deref().or(raw.param.as_deref()).unwrap_or_default();
        return Err(ctx.invalid_type_error(kind, message, needle));
    }

    let arguments = raw
        .args
        .iter()
        .map(|argument| lower_argument(argument, ctx, arities, "type argument"))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeArgument::Type(TypeReference {
        classifier,
        nullable: raw.nullable,
        arguments,
        name: raw.name.clone(),
    }))
}

/// Built-in arity rules, plus the declared type parameters of classes in
/// this file. Undeclared classes are left alone; mappings and skip prefixes
/// may cover them.
fn check_arity(
    classifier: &Classifier,
    count: usize,
    arities: &Arities,
) -> std::result::Result<(), String> {
    token::check_arity(classifier, count)?;
    let declared = classifier
        .class_id()
        .and_then(|id| arities.get(id.as_str()).copied());
    match declared {
        Some(expected) if expected != count => Err(format!(
            "expected {} type argument(s), found {}",
            expected, count
        )),
        _ => Ok(()),
    }
}
