use tracing::debug;

use crate::domain::error::{AssertFailure, FailureKind};

/// Context and detail labels attached to every failure message.
///
/// Both labels are optional; an empty label is left out of the message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertContext {
    pub context: String,
    pub detail: String,
}

impl AssertContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Builds `<base>[ -- assertion context is '<context>'][ (<detail>)][ -- <extra>]`.
    pub fn compose_message(&self, base: &str, extra: Option<&str>) -> String {
        let mut message = base.to_string();
        if !self.context.is_empty() {
            message.push_str(" -- assertion context is '");
            message.push_str(&self.context);
            message.push('\'');
        }
        if !self.detail.is_empty() {
            message.push_str(" (");
            message.push_str(&self.detail);
            message.push(')');
        }
        if let Some(extra) = extra.filter(|extra| !extra.is_empty()) {
            message.push_str(" -- ");
            message.push_str(extra);
        }
        message
    }

    /// Produces the failure for `kind`, with the composed message.
    pub fn fail(&self, kind: FailureKind, extra: Option<&str>) -> AssertFailure {
        let message = self.compose_message(kind.base_message(), extra);
        debug!(kind = kind.as_str(), reason = kind.reason(), %message, "check failed");
        AssertFailure::new(kind, message)
    }
}
