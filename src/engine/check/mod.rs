pub mod plan;
pub mod primitive;
pub mod record;
mod text;

use serde_json::Value;

use crate::domain::context::AssertContext;
use crate::domain::error::{AssertFailure, AssertResult, FailureKind};
use crate::domain::plan::{CheckPlan, PlanError};
use crate::domain::report::CheckReport;

/// Check catalog bound to one context/detail pair.
///
/// Setters need `&mut self`, so one instance serves one validation sequence
/// at a time. Clone it (or build a fresh one from an [`AssertContext`]) to
/// validate from several flows.
#[derive(Debug, Clone, Default)]
pub struct ContextAssert {
    ctx: AssertContext,
}

impl ContextAssert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_context(ctx: AssertContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AssertContext {
        &self.ctx
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.ctx.context = context.into();
    }

    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.ctx.detail = detail.into();
    }

    pub fn fail(&self, kind: FailureKind, extra: Option<&str>) -> AssertFailure {
        self.ctx.fail(kind, extra)
    }

    pub fn number(&self, src: &Value) -> AssertResult {
        primitive::number(&self.ctx, src)
    }

    pub fn number_or_null(&self, src: &Value) -> AssertResult {
        primitive::number_or_null(&self.ctx, src)
    }

    pub fn string(&self, src: &Value) -> AssertResult {
        primitive::string(&self.ctx, src)
    }

    pub fn string_with_something(&self, src: &Value) -> AssertResult {
        primitive::string_with_something(&self.ctx, src)
    }

    pub fn string_from_distinct<S: AsRef<str>>(&self, src: &Value, allowed: &[S]) -> AssertResult {
        primitive::string_from_distinct(&self.ctx, src, allowed)
    }

    pub fn string_from_distinct_or_nothing<S: AsRef<str>>(
        &self,
        src: &Value,
        allowed: &[S],
    ) -> AssertResult {
        primitive::string_from_distinct_or_nothing(&self.ctx, src, allowed)
    }

    pub fn array(&self, src: &Value) -> AssertResult {
        primitive::array(&self.ctx, src)
    }

    pub fn array_with_something(&self, src: &Value) -> AssertResult {
        primitive::array_with_something(&self.ctx, src)
    }

    pub fn array_of_string_values(&self, src: &Value) -> AssertResult {
        primitive::array_of_string_values(&self.ctx, src)
    }

    pub fn array_of_number_values(&self, src: &Value) -> AssertResult {
        primitive::array_of_number_values(&self.ctx, src)
    }

    pub fn array_of_number_or_null_values(&self, src: &Value) -> AssertResult {
        primitive::array_of_number_or_null_values(&self.ctx, src)
    }

    pub fn array_with_record_property(&self, src: &Value, key: &str) -> AssertResult {
        record::array_with_record_property(&self.ctx, src, key)
    }

    pub fn array_with_record_id(&self, src: &Value, key: &str) -> AssertResult {
        record::array_with_record_id(&self.ctx, src, key)
    }

    pub fn array_with_optional_record_label(&self, src: &Value, key: &str) -> AssertResult {
        record::array_with_optional_record_label(&self.ctx, src, key)
    }
}

/// Executes a loaded check plan against a record collection.
pub fn execute_plan(collection: &Value, plan: &CheckPlan) -> Result<CheckReport, PlanError> {
    plan::run_plan(collection, plan)
}
