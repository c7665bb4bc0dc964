use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered list of checks loaded from a plan file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckPlan {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub detail: String,
    pub checks: Vec<CheckStep>,
}

/// One catalog check applied to the record collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CheckStep {
    RecordProperty {
        field: String,
    },
    RecordId {
        field: String,
    },
    OptionalRecordLabel {
        field: String,
    },
    Array,
    ArrayWithSomething,
    ArrayOfStringValues,
    ArrayOfNumberValues,
    ArrayOfNumberOrNullValues,
    /// Applies a primitive check to every record that carries `field`.
    FieldValues {
        field: String,
        expect: ValueExpectation,
        #[serde(default)]
        allowed: Vec<String>,
    },
}

impl CheckStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RecordProperty { .. } => "record_property",
            Self::RecordId { .. } => "record_id",
            Self::OptionalRecordLabel { .. } => "optional_record_label",
            Self::Array => "array",
            Self::ArrayWithSomething => "array_with_something",
            Self::ArrayOfStringValues => "array_of_string_values",
            Self::ArrayOfNumberValues => "array_of_number_values",
            Self::ArrayOfNumberOrNullValues => "array_of_number_or_null_values",
            Self::FieldValues { .. } => "field_values",
        }
    }

    fn field(&self) -> Option<&str> {
        match self {
            Self::RecordProperty { field }
            | Self::RecordId { field }
            | Self::OptionalRecordLabel { field }
            | Self::FieldValues { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Primitive expectation for `field_values` steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValueExpectation {
    Number,
    NumberOrNull,
    String,
    StringWithSomething,
    OneOf,
    OneOfOrEmpty,
}

impl ValueExpectation {
    fn needs_allowed(self) -> bool {
        matches!(self, Self::OneOf | Self::OneOfOrEmpty)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("check plan must contain at least one check")]
    NoChecks,

    #[error("checks[{index}] ({check}) requires a non-empty `field`")]
    EmptyField { index: usize, check: &'static str },

    #[error("checks[{index}] ({check}) requires a non-empty `allowed` list")]
    MissingAllowed { index: usize, check: &'static str },
}

impl CheckPlan {
    /// Rejects plans whose steps cannot run meaningfully.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.checks.is_empty() {
            return Err(PlanError::NoChecks);
        }
        for (index, step) in self.checks.iter().enumerate() {
            if step.field().is_some_and(str::is_empty) {
                return Err(PlanError::EmptyField {
                    index,
                    check: step.name(),
                });
            }
            if let CheckStep::FieldValues {
                expect, allowed, ..
            } = step
            {
                if expect.needs_allowed() && allowed.is_empty() {
                    return Err(PlanError::MissingAllowed {
                        index,
                        check: step.name(),
                    });
                }
            }
        }
        Ok(())
    }
}
