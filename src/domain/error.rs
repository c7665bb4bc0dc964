use serde_json::Value;
use thiserror::Error;

/// Outcome of a single check.
pub type AssertResult = Result<(), AssertFailure>;

/// Element type expected by the array-of-values checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    String,
    Number,
    NumberOrNull,
}

impl ElementType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::NumberOrNull => "number_or_null",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::NumberOrNull => value.is_number() || value.is_null(),
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::NumberOrNull => "a number or null",
        }
    }
}

/// Why an identifier value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdViolation {
    Whitespace,
    LeadingDigit,
    Repeated,
    NotAString,
}

impl IdViolation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::LeadingDigit => "leading_digit",
            Self::Repeated => "repeated",
            Self::NotAString => "not_a_string",
        }
    }

    pub(crate) fn explain(self, key: &str, rendered: &str) -> String {
        match self {
            Self::Whitespace => {
                format!("{key}: '{rendered}' is an invalid id (it contains whitespace)")
            }
            Self::LeadingDigit => {
                format!("{key}: '{rendered}' is an invalid id (it has a leading number)")
            }
            Self::Repeated => format!("{key}: '{rendered}' is repeated"),
            Self::NotAString => format!("{key}: '{rendered}' is an invalid id (it is not a string)"),
        }
    }
}

/// Why a label value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelViolation {
    ForeignWhitespace,
    ConsecutiveSpaces,
    EdgeSpace,
    Repeated,
    CaseRepeated,
    NotAString,
}

impl LabelViolation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForeignWhitespace => "foreign_whitespace",
            Self::ConsecutiveSpaces => "consecutive_spaces",
            Self::EdgeSpace => "edge_space",
            Self::Repeated => "repeated",
            Self::CaseRepeated => "case_repeated",
            Self::NotAString => "not_a_string",
        }
    }

    pub(crate) fn explain(self, key: &str, rendered: &str) -> String {
        match self {
            Self::ForeignWhitespace => {
                format!("{key}: '{rendered}' includes whitespace that is not a plain space")
            }
            Self::ConsecutiveSpaces => format!("{key}: '{rendered}' includes consecutive spaces"),
            Self::EdgeSpace => {
                format!("{key}: '{rendered}' includes a leading and/or trailing space")
            }
            Self::Repeated => format!("{key}: '{rendered}' is repeated"),
            Self::CaseRepeated => {
                format!("{key}: '{rendered}' differs from another entry only in case")
            }
            Self::NotAString => format!("{key}: '{rendered}' is not a string"),
        }
    }
}

/// Closed catalog of failure kinds, one per check family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    NotANumber,
    NotANumberOrNull,
    NotAString,
    EmptyString,
    NotInEnumeration,
    NotInEnumerationOrEmpty,
    NotAnArray,
    EmptyArray,
    ArrayElementWrongType(ElementType),
    MissingProperty,
    InvalidId(IdViolation),
    InvalidLabel(LabelViolation),
}

impl FailureKind {
    /// Stable symbolic name for programmatic branching.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotANumber => "not_a_number",
            Self::NotANumberOrNull => "not_a_number_or_null",
            Self::NotAString => "not_a_string",
            Self::EmptyString => "empty_string",
            Self::NotInEnumeration => "not_in_enumeration",
            Self::NotInEnumerationOrEmpty => "not_in_enumeration_or_empty",
            Self::NotAnArray => "not_an_array",
            Self::EmptyArray => "empty_array",
            Self::ArrayElementWrongType(_) => "array_element_wrong_type",
            Self::MissingProperty => "missing_property",
            Self::InvalidId(_) => "invalid_id",
            Self::InvalidLabel(_) => "invalid_label",
        }
    }

    /// Sub-reason for kinds that carry one.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::ArrayElementWrongType(element) => Some(element.as_str()),
            Self::InvalidId(violation) => Some(violation.as_str()),
            Self::InvalidLabel(violation) => Some(violation.as_str()),
            _ => None,
        }
    }

    /// Fixed leading text of every message of this kind.
    pub fn base_message(self) -> &'static str {
        match self {
            Self::NotANumber => "ASSERT_NUMBER_FAIL: expected a number",
            Self::NotANumberOrNull => "ASSERT_NUMBER_OR_NULL_FAIL: expected a number or null",
            Self::NotAString => "ASSERT_STRING_FAIL: expected a string",
            Self::EmptyString => {
                "ASSERT_STRING_WITH_SOMETHING_FAIL: expected a non-zero-length string"
            }
            Self::NotInEnumeration => {
                "ASSERT_STRING_FROM_DISTINCT_FAIL: expected a string from a list of distinct possible strings"
            }
            Self::NotInEnumerationOrEmpty => {
                "ASSERT_STRING_FROM_DISTINCT_OR_NOTHING_FAIL: expected a string from a list of distinct possible strings or \"\""
            }
            Self::NotAnArray => "ASSERT_ARRAY_FAIL: expected an array",
            Self::EmptyArray => "ASSERT_ARRAY_WITH_SOMETHING_FAIL: expected a non-zero-length array",
            Self::ArrayElementWrongType(ElementType::String) => {
                "ASSERT_ARRAY_OF_STRING_VALUES_FAIL: expected an array of strings"
            }
            Self::ArrayElementWrongType(ElementType::Number) => {
                "ASSERT_ARRAY_OF_NUMBER_VALUES_FAIL: expected an array of numbers"
            }
            Self::ArrayElementWrongType(ElementType::NumberOrNull) => {
                "ASSERT_ARRAY_OF_NUMBER_OR_NULL_VALUES_FAIL: expected an array of numbers or nulls"
            }
            Self::MissingProperty => {
                "ASSERT_ARRAY_WITH_RECORD_PROPERTY_FAIL: expected array of objects with property"
            }
            Self::InvalidId(_) => {
                "ASSERT_ARRAY_WITH_RECORD_ID_FAIL: expected array of objects with unique string identifier"
            }
            Self::InvalidLabel(_) => {
                "ASSERT_ARRAY_WITH_OPTIONAL_RECORD_LABEL_FAIL: expected array of objects with unique label"
            }
        }
    }
}

/// A failed check: the kind, the composed message, and the offender if known.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AssertFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Zero-based position of the offending element or record.
    pub index: Option<usize>,
    pub value: Option<Value>,
}

impl AssertFailure {
    pub fn new(kind: FailureKind, message: String) -> Self {
        Self {
            kind,
            message,
            index: None,
            value: None,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_value(mut self, value: &Value) -> Self {
        self.value = Some(value.clone());
        self
    }
}

/// Renders a value for a failure message: strings verbatim, anything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn element_explanation(element: ElementType, value: &Value, index: usize) -> String {
    format!(
        "'{}' at index {index} is not {}.",
        render_value(value),
        element.noun()
    )
}
