use serde::{Deserialize, Serialize};

use crate::models::{ExportedMessage, Role};

/// Result of importing one chat export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChat {
    /// Best-guess conversation name (most frequent non-owner sender)
    pub name: String,
    pub messages: Vec<ExportedMessage>,
}

impl ParsedChat {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn count_by_role(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    pub fn last_message(&self) -> Option<&ExportedMessage> {
        self.messages.last()
    }
}
