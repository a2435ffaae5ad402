//! Single-slot notification for the outcome of the last operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a flash message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Error,
    Success,
    Warning,
    Info,
}

/// Transient notification. A new one overwrites the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Text shown to the user.
    pub content: String,

    /// When the condition was raised.
    pub timestamp: DateTime<Utc>,

    /// Severity.
    pub kind: FlashKind,
}

impl FlashMessage {
    /// Create a message stamped with the current time.
    pub fn new(kind: FlashKind, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Create an error message.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(FlashKind::Error, content)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == FlashKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let before = Utc::now();
        let msg = FlashMessage::error("Main Deck cannot exceed 60 cards");

        assert!(msg.is_error());
        assert_eq!(msg.content, "Main Deck cannot exceed 60 cards");
        assert!(msg.timestamp >= before);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let msg = FlashMessage::new(FlashKind::Warning, "careful");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "warning");
        assert!(!msg.is_error());
    }
}
