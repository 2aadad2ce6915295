//! Error types for parameter validation.

/// One or more parameters failed validation.
///
/// Carries one message per violated rule, in the order the rules were declared.
/// Raised before any request leaves the process, so it is always safe to fix the
/// input and try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid parameters: {}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error from the collected violation messages.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Returns the violation messages in declaration order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl IntoIterator for ValidationError {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

/// A card control name that does not map to any known control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown card control: {0}")]
pub struct UnknownCardControl(pub String);

/// A statement format that is neither CSV nor PDF.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown statement format: {0}. Supported: text/csv, application/pdf")]
pub struct UnknownStatementFormat(pub String);
