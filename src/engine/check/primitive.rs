use serde_json::Value;

use crate::domain::context::AssertContext;
use crate::domain::error::{
    AssertFailure, AssertResult, ElementType, FailureKind, element_explanation, render_value,
};

pub fn number(ctx: &AssertContext, src: &Value) -> AssertResult {
    if src.is_number() {
        return Ok(());
    }
    let extra = format!("'{}' is not a number.", render_value(src));
    Err(ctx.fail(FailureKind::NotANumber, Some(&extra)).with_value(src))
}

pub fn number_or_null(ctx: &AssertContext, src: &Value) -> AssertResult {
    if src.is_number() || src.is_null() {
        return Ok(());
    }
    let extra = format!("'{}' is not a number or null.", render_value(src));
    Err(ctx
        .fail(FailureKind::NotANumberOrNull, Some(&extra))
        .with_value(src))
}

pub fn string(ctx: &AssertContext, src: &Value) -> AssertResult {
    as_text(ctx, src).map(|_| ())
}

pub fn string_with_something(ctx: &AssertContext, src: &Value) -> AssertResult {
    if as_text(ctx, src)?.is_empty() {
        return Err(ctx.fail(FailureKind::EmptyString, None).with_value(src));
    }
    Ok(())
}

pub fn string_from_distinct<S>(ctx: &AssertContext, src: &Value, allowed: &[S]) -> AssertResult
where
    S: AsRef<str>,
{
    let text = as_text(ctx, src)?;
    if allowed.iter().any(|candidate| candidate.as_ref() == text) {
        return Ok(());
    }
    let extra = format!("'{text}' is not one of {}", join_allowed(allowed));
    Err(ctx
        .fail(FailureKind::NotInEnumeration, Some(&extra))
        .with_value(src))
}

/// Like [`string_from_distinct`], but the empty string also passes.
pub fn string_from_distinct_or_nothing<S>(
    ctx: &AssertContext,
    src: &Value,
    allowed: &[S],
) -> AssertResult
where
    S: AsRef<str>,
{
    let text = as_text(ctx, src)?;
    if text.is_empty() || allowed.iter().any(|candidate| candidate.as_ref() == text) {
        return Ok(());
    }
    let extra = format!("'{text}' is not \"\" or one of {}", join_allowed(allowed));
    Err(ctx
        .fail(FailureKind::NotInEnumerationOrEmpty, Some(&extra))
        .with_value(src))
}

pub fn array(ctx: &AssertContext, src: &Value) -> AssertResult {
    elements(ctx, src).map(|_| ())
}

pub fn array_with_something(ctx: &AssertContext, src: &Value) -> AssertResult {
    non_empty_elements(ctx, src).map(|_| ())
}

pub fn array_of_string_values(ctx: &AssertContext, src: &Value) -> AssertResult {
    elements_of_type(ctx, src, ElementType::String)
}

pub fn array_of_number_values(ctx: &AssertContext, src: &Value) -> AssertResult {
    elements_of_type(ctx, src, ElementType::Number)
}

pub fn array_of_number_or_null_values(ctx: &AssertContext, src: &Value) -> AssertResult {
    elements_of_type(ctx, src, ElementType::NumberOrNull)
}

pub(crate) fn elements<'a>(
    ctx: &AssertContext,
    src: &'a Value,
) -> Result<&'a [Value], AssertFailure> {
    src.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ctx.fail(FailureKind::NotAnArray, None))
}

/// Non-arrays and empty arrays both fail as `EmptyArray`.
pub(crate) fn non_empty_elements<'a>(
    ctx: &AssertContext,
    src: &'a Value,
) -> Result<&'a [Value], AssertFailure> {
    match src.as_array() {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(ctx.fail(FailureKind::EmptyArray, None)),
    }
}

fn elements_of_type(ctx: &AssertContext, src: &Value, element: ElementType) -> AssertResult {
    let items = elements(ctx, src)?;
    let Some(index) = items.iter().position(|item| !element.matches(item)) else {
        return Ok(());
    };
    let item = &items[index];
    let extra = element_explanation(element, item, index);
    Err(ctx
        .fail(FailureKind::ArrayElementWrongType(element), Some(&extra))
        .with_index(index)
        .with_value(item))
}

fn as_text<'a>(ctx: &AssertContext, src: &'a Value) -> Result<&'a str, AssertFailure> {
    src.as_str()
        .ok_or_else(|| ctx.fail(FailureKind::NotAString, None).with_value(src))
}

fn join_allowed<S>(allowed: &[S]) -> String
where
    S: AsRef<str>,
{
    allowed
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("|")
}
