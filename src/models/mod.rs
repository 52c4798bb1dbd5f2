//! Data models for imported chat exports.
//!
//! - [`ExportedMessage`] - One message recovered from an export, with its [`Role`]
//! - [`ParsedChat`] - Ordered messages plus the inferred conversation name
//! - [`ChatSession`] - Chat-list entry built from a parsed chat
//!
//! All models serialize with serde so the CLI can emit them as JSON.

pub mod chat;
pub mod message;
pub mod session;

pub use chat::ParsedChat;
pub use message::{DeliveryStatus, ExportedMessage, Role};
pub use session::{ChatSession, avatar_initials};
