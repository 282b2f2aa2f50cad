use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Photo,
    Weather,
    Experience,
    Safety,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
}

/// An advisory notice derived from the context. Descriptions only; delivery
/// (push/SMS/email) is an external sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: &str,
        message: &str,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            priority,
        }
    }
}
