use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Who wrote a message, relative to the device owner who produced the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The device owner (rendered on the right).
    #[serde(rename = "self")]
    SelfSender,
    /// Anyone else in the conversation (rendered on the left).
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

impl ExportedMessage {
    /// Identifier for a message whose header sits on `line_index` (zero-based).
    pub fn id_for_line(line_index: usize) -> String {
        format!("imported-{}", line_index)
    }

    pub fn is_self(&self) -> bool {
        self.role == Role::SelfSender
    }

    /// Append a continuation line to the message body.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.text.reserve(line.len() + 1);
        self.text.push('\n');
        self.text.push_str(line);
    }
}
