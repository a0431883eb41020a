//! Aggregation of field-level validation failures.
//!
//! Violations are rendered as `"<field>-<rule>-<message>"` lines, sorted with plain
//! string ordering and joined with `\n`, so the same invalid input always yields
//! byte-identical error text no matter which order the rules ran in.

use std::fmt;

use thiserror::Error;

/// A single rule violated by a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Request field name as it appears in the JSON body.
    pub field: String,
    /// Short rule identifier, e.g. `NotBlank` or `Size`.
    pub rule: &'static str,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.field, self.rule, self.message)
    }
}

/// Every violation found while validating one request body.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", self.render())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when nothing was violated, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Renders the client-facing message: sorted lines joined by newlines.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        lines.sort();
        lines.join("\n")
    }
}

impl FromIterator<FieldViolation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}
