//! Error types shared across the netlist-paths crates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic payload carried inside every [`NetlistError`].
///
/// The code is a stable machine readable slug; details are ordered
/// key/value pairs accumulated as the error bubbles up, so the earliest
/// entries describe the innermost failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable code, e.g. `ref-undeclared`.
    pub code: String,
    /// What went wrong, in one sentence.
    pub message: String,
    /// Ordered key/value details (names, counts, locations).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<(String, String)>,
    /// Optional remediation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload from a code and a message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Vec::new(),
            hint: None,
        }
    }

    /// Appends one key/value detail.
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((key.into(), value.into()));
        self
    }

    /// Attaches a remediation hint.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Looks up the first detail recorded under `key`.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(recorded, _)| recorded.as_str() == key)
            .map(|(_, value)| value.as_str())
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for (key, value) in &self.details {
            write!(f, "; {key}={value}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Errors surfaced by the netlist-paths engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "info")]
pub enum NetlistError {
    /// The input document could not be opened or read.
    #[error("cannot read input: {0}")]
    Input(ErrorInfo),
    /// The input document violates the expected netlist schema.
    #[error("malformed netlist XML: {0}")]
    Malformed(ErrorInfo),
    /// A variable reference has no matching declaration.
    #[error("unresolved reference: {0}")]
    Reference(ErrorInfo),
    /// Graph store structural errors.
    #[error("graph inconsistency: {0}")]
    Graph(ErrorInfo),
    /// A waypoint accumulation rule was violated.
    #[error("waypoint rule: {0}")]
    Waypoint(ErrorInfo),
    /// A name lookup required a concrete vertex but found none.
    #[error("name not found: {0}")]
    NotFound(ErrorInfo),
    /// The external elaborator could not be invoked or failed.
    #[error("elaboration failed: {0}")]
    Elaborate(ErrorInfo),
}

impl NetlistError {
    /// The diagnostic payload, whichever variant carries it.
    pub fn payload(&self) -> &ErrorInfo {
        match self {
            NetlistError::Input(info)
            | NetlistError::Malformed(info)
            | NetlistError::Reference(info)
            | NetlistError::Graph(info)
            | NetlistError::Waypoint(info)
            | NetlistError::NotFound(info)
            | NetlistError::Elaborate(info) => info,
        }
    }
}
