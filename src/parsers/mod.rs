//! Parsers for plain-text WhatsApp chat exports
//!
//! # Error Handling Strategy
//!
//! Chat exports are hand-edited, truncated and localized, so the parser degrades
//! instead of failing:
//!
//! - **Unreadable timestamps**: A header whose date or time cannot be read still yields
//!   a message, stamped with the current local time. The count is reported in
//!   [`ParseStats::fallback_timestamps`] and each occurrence is logged at debug level.
//!
//! - **Unrecognized lines**: Anything that is not a header extends the previous message.
//!   Blank lines and text before the first header are dropped.
//!
//! - **Nothing recognized**: When no header matches at all, the parsers return `None`
//!   rather than an empty chat, so callers can report a failed import.
//!
//! Parsing is a pure function over the input string. All state (sender tally, current
//! message) lives inside one call, so independent calls can run concurrently.

pub mod header;
pub mod sender;
pub mod tally;
pub mod timestamp;
pub mod whatsapp;

pub use header::{HeaderLine, match_header};
pub use sender::{AliasSelfDetector, DefaultSelfDetector, SelfDetector};
pub use tally::SenderTally;
pub use timestamp::{DateOrder, parse_export_timestamp};
pub use whatsapp::{
    DEFAULT_PLACEHOLDER_NAME, ParseOptions, ParseStats, detect_date_order, parse_whatsapp_chat,
    parse_whatsapp_chat_with, parse_with_report,
};
