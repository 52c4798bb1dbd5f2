use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExportedMessage, ParsedChat};

/// Chat-list entry for an imported conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub last_message_time: NaiveDateTime,
    pub unread_count: u32,
    pub messages: Vec<ExportedMessage>,
    pub is_ai: bool,
    pub online: bool,
}

impl ChatSession {
    /// Build a session from a parsed export.
    ///
    /// The id is derived from the import time, so two imports of the same file
    /// produce distinct sessions.
    pub fn from_parsed(chat: ParsedChat) -> Self {
        let id = format!("imported-{}", Utc::now().timestamp_millis());
        Self::from_parsed_with_id(chat, id)
    }

    pub fn from_parsed_with_id(chat: ParsedChat, id: String) -> Self {
        let (last_message, last_message_time) = match chat.messages.last() {
            Some(last) => (last.text.clone(), last.timestamp),
            None => (String::new(), chrono::Local::now().naive_local()),
        };

        Self {
            id,
            avatar: avatar_initials(&chat.name),
            name: chat.name,
            last_message,
            last_message_time,
            unread_count: 0,
            messages: chat.messages,
            is_ai: false,
            online: false,
        }
    }
}

/// Up to two uppercase initials from a display name ("Alice Smith" -> "AS").
pub fn avatar_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() { "?".to_string() } else { initials }
}
