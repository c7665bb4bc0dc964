use serde_json::Value;
use tracing::debug;

use crate::domain::context::AssertContext;
use crate::domain::error::AssertResult;
use crate::domain::plan::{CheckPlan, CheckStep, PlanError, ValueExpectation};
use crate::domain::report::{CheckReport, FailureEntry};
use crate::engine::check::{primitive, record};

/// Runs plan steps in order against `collection`, stopping at the first failure.
pub fn run_plan(collection: &Value, plan: &CheckPlan) -> Result<CheckReport, PlanError> {
    plan.validate()?;

    let ctx = AssertContext::new()
        .with_context(plan.context.as_str())
        .with_detail(plan.detail.as_str());
    debug!(
        checks = plan.checks.len(),
        context = %ctx.context,
        detail = %ctx.detail,
        "running check plan"
    );

    for (index, step) in plan.checks.iter().enumerate() {
        debug!(index, check = step.name(), "running check");
        if let Err(failure) = run_step(&ctx, collection, step) {
            return Ok(CheckReport::failed(
                index + 1,
                FailureEntry::from_failure(index, step.name(), failure),
            ));
        }
    }

    Ok(CheckReport::passed(plan.checks.len()))
}

/// Runs a single step with the given context.
pub fn run_step(ctx: &AssertContext, collection: &Value, step: &CheckStep) -> AssertResult {
    match step {
        CheckStep::RecordProperty { field } => {
            record::array_with_record_property(ctx, collection, field)
        }
        CheckStep::RecordId { field } => record::array_with_record_id(ctx, collection, field),
        CheckStep::OptionalRecordLabel { field } => {
            record::array_with_optional_record_label(ctx, collection, field)
        }
        CheckStep::Array => primitive::array(ctx, collection),
        CheckStep::ArrayWithSomething => primitive::array_with_something(ctx, collection),
        CheckStep::ArrayOfStringValues => primitive::array_of_string_values(ctx, collection),
        CheckStep::ArrayOfNumberValues => primitive::array_of_number_values(ctx, collection),
        CheckStep::ArrayOfNumberOrNullValues => {
            primitive::array_of_number_or_null_values(ctx, collection)
        }
        CheckStep::FieldValues {
            field,
            expect,
            allowed,
        } => field_values(ctx, collection, field, *expect, allowed),
    }
}

fn field_values(
    ctx: &AssertContext,
    collection: &Value,
    field: &str,
    expect: ValueExpectation,
    allowed: &[String],
) -> AssertResult {
    for item in record::optional_projection(ctx, collection, field)? {
        let outcome = match expect {
            ValueExpectation::Number => primitive::number(ctx, item.value),
            ValueExpectation::NumberOrNull => primitive::number_or_null(ctx, item.value),
            ValueExpectation::String => primitive::string(ctx, item.value),
            ValueExpectation::StringWithSomething => {
                primitive::string_with_something(ctx, item.value)
            }
            ValueExpectation::OneOf => primitive::string_from_distinct(ctx, item.value, allowed),
            ValueExpectation::OneOfOrEmpty => {
                primitive::string_from_distinct_or_nothing(ctx, item.value, allowed)
            }
        };
        outcome.map_err(|failure| failure.with_index(item.index))?;
    }
    Ok(())
}
