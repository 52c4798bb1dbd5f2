//! Chat Export Parser - Import plain-text WhatsApp chat exports
//!
//! This library turns the text file produced by WhatsApp's "Export chat" feature into
//! an ordered list of structured messages. It supports:
//!
//! - Android (`12/25/23, 8:30 PM - Name: text`) and iOS (`[12/25/23, 20:30:12] Name: text`)
//!   header lines, with multi-line messages
//! - Telling the device owner's messages apart from everyone else's, through a pluggable
//!   [`parsers::SelfDetector`]
//! - Guessing the conversation name from the most frequent other sender
//! - Rendering transcripts, building assistant prompts and share links from parsed chats
//!
//! # Example
//!
//! ```
//! use chat_export_parser::parse_whatsapp_chat;
//!
//! let export = "[12/25/23, 20:30:12] Alice: Hi there\nhow are you?";
//! let chat = parse_whatsapp_chat(export).expect("export has messages");
//! assert_eq!(chat.name, "Alice");
//! assert_eq!(chat.messages[0].text, "Hi there\nhow are you?");
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod models;
pub mod parsers;
pub mod prompts;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use models::{ChatSession, DeliveryStatus, ExportedMessage, ParsedChat, Role};
pub use parsers::{
    DateOrder, ParseOptions, SelfDetector, parse_whatsapp_chat, parse_whatsapp_chat_with,
    parse_with_report,
};
pub use render::render_transcript;
