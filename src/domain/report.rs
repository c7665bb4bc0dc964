use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::AssertFailure;

/// Deterministic outcome of running a check plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckReport {
    pub passed: bool,
    pub checks_run: usize,
    pub failure: Option<FailureEntry>,
}

impl CheckReport {
    pub fn passed(checks_run: usize) -> Self {
        Self {
            passed: true,
            checks_run,
            failure: None,
        }
    }

    pub fn failed(checks_run: usize, failure: FailureEntry) -> Self {
        Self {
            passed: false,
            checks_run,
            failure: Some(failure),
        }
    }
}

/// The first failure hit by a plan, flattened for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureEntry {
    pub check_index: usize,
    pub check: String,
    pub kind: String,
    pub reason: Option<String>,
    pub message: String,
    pub index: Option<usize>,
    pub value: Option<Value>,
}

impl FailureEntry {
    pub fn from_failure(check_index: usize, check: &str, failure: AssertFailure) -> Self {
        Self {
            check_index,
            check: check.to_string(),
            kind: failure.kind.as_str().to_string(),
            reason: failure.kind.reason().map(str::to_string),
            message: failure.message,
            index: failure.index,
            value: failure.value,
        }
    }
}
