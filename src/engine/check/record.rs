use serde_json::Value;

use crate::domain::context::AssertContext;
use crate::domain::error::{
    AssertFailure, AssertResult, FailureKind, IdViolation, LabelViolation, render_value,
};
use crate::engine::check::{primitive, text};

/// One projected field value and the index of the record it came from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Projected<'a> {
    pub index: usize,
    pub value: &'a Value,
}

#[derive(Debug, Clone, Copy)]
struct Entry<'a> {
    index: usize,
    text: &'a str,
    value: &'a Value,
}

/// Fails on the first record lacking `key`. A present `null` counts as present.
pub fn array_with_record_property(ctx: &AssertContext, src: &Value, key: &str) -> AssertResult {
    required_projection(ctx, src, key).map(|_| ())
}

/// Requires `key` on every record; values must be whitespace-free, must not
/// start with an ASCII digit, and must be unique.
pub fn array_with_record_id(ctx: &AssertContext, src: &Value, key: &str) -> AssertResult {
    let projected = required_projection(ctx, src, key)?;
    let ids = string_entries(&projected)
        .map_err(|offender| id_failure(ctx, key, IdViolation::NotAString, offender))?;

    if let Some(entry) = ids.iter().find(|entry| text::has_whitespace(entry.text)) {
        return Err(id_failure(ctx, key, IdViolation::Whitespace, (*entry).into()));
    }
    if let Some(entry) = ids.iter().find(|entry| text::has_leading_digit(entry.text)) {
        return Err(id_failure(ctx, key, IdViolation::LeadingDigit, (*entry).into()));
    }

    let texts: Vec<&str> = ids.iter().map(|entry| entry.text).collect();
    if let Some(position) = text::first_repeated(&texts) {
        return Err(id_failure(ctx, key, IdViolation::Repeated, ids[position].into()));
    }
    Ok(())
}

/// Checks `key` on the records that carry it; records without it are skipped.
pub fn array_with_optional_record_label(
    ctx: &AssertContext,
    src: &Value,
    key: &str,
) -> AssertResult {
    let projected = optional_projection(ctx, src, key)?;
    let labels = string_entries(&projected)
        .map_err(|offender| label_failure(ctx, key, LabelViolation::NotAString, offender))?;

    let format_passes: [(LabelViolation, fn(&str) -> bool); 3] = [
        (
            LabelViolation::ForeignWhitespace,
            text::has_foreign_whitespace,
        ),
        (
            LabelViolation::ConsecutiveSpaces,
            text::has_consecutive_spaces,
        ),
        (LabelViolation::EdgeSpace, text::has_edge_space),
    ];
    for (violation, violates) in format_passes {
        if let Some(entry) = labels.iter().find(|entry| violates(entry.text)) {
            return Err(label_failure(ctx, key, violation, (*entry).into()));
        }
    }

    let texts: Vec<&str> = labels.iter().map(|entry| entry.text).collect();
    if let Some(position) = text::first_repeated(&texts) {
        return Err(label_failure(
            ctx,
            key,
            LabelViolation::Repeated,
            labels[position].into(),
        ));
    }

    let lowered: Vec<String> = texts.iter().map(|text| text.to_lowercase()).collect();
    if let Some(position) = text::first_repeated(&lowered) {
        let entry = labels[position];
        let mut extra = LabelViolation::CaseRepeated.explain(key, entry.text);
        if let Some(offset) = lowered[position + 1..]
            .iter()
            .position(|other| *other == lowered[position])
        {
            extra.push_str(&format!(" ('{}')", labels[position + 1 + offset].text));
        }
        return Err(ctx
            .fail(
                FailureKind::InvalidLabel(LabelViolation::CaseRepeated),
                Some(&extra),
            )
            .with_index(entry.index)
            .with_value(entry.value));
    }
    Ok(())
}

/// Projects `key` across every record, failing on the first record without it.
fn required_projection<'a>(
    ctx: &AssertContext,
    src: &'a Value,
    key: &str,
) -> Result<Vec<Projected<'a>>, AssertFailure> {
    let records = primitive::non_empty_elements(ctx, src)?;
    let mut projected = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Some(value) = field(record, key) else {
            let extra = format!("property '{key}' is missing from index {index}");
            return Err(ctx
                .fail(FailureKind::MissingProperty, Some(&extra))
                .with_index(index));
        };
        projected.push(Projected { index, value });
    }
    Ok(projected)
}

/// Projects `key` across the records that carry it.
pub(crate) fn optional_projection<'a>(
    ctx: &AssertContext,
    src: &'a Value,
    key: &str,
) -> Result<Vec<Projected<'a>>, AssertFailure> {
    let records = primitive::non_empty_elements(ctx, src)?;
    Ok(records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| field(record, key).map(|value| Projected { index, value }))
        .collect())
}

fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.as_object()?.get(key)
}

fn string_entries<'a>(projected: &[Projected<'a>]) -> Result<Vec<Entry<'a>>, Projected<'a>> {
    projected
        .iter()
        .map(|item| match item.value {
            Value::String(text) => Ok(Entry {
                index: item.index,
                text: text.as_str(),
                value: item.value,
            }),
            _ => Err(*item),
        })
        .collect()
}

impl<'a> From<Entry<'a>> for Projected<'a> {
    fn from(entry: Entry<'a>) -> Self {
        Projected {
            index: entry.index,
            value: entry.value,
        }
    }
}

fn id_failure(
    ctx: &AssertContext,
    key: &str,
    violation: IdViolation,
    offender: Projected<'_>,
) -> AssertFailure {
    let extra = violation.explain(key, &render_value(offender.value));
    ctx.fail(FailureKind::InvalidId(violation), Some(&extra))
        .with_index(offender.index)
        .with_value(offender.value)
}

fn label_failure(
    ctx: &AssertContext,
    key: &str,
    violation: LabelViolation,
    offender: Projected<'_>,
) -> AssertFailure {
    let extra = violation.explain(key, &render_value(offender.value));
    ctx.fail(FailureKind::InvalidLabel(violation), Some(&extra))
        .with_index(offender.index)
        .with_value(offender.value)
}
