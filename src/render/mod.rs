//! Plain-text presentation of parsed chats.
//!
//! The renderer places the device owner's messages on the right and everyone
//! else on the left, the way a chat window does.
//!
//! # Security: Terminal Injection Prevention
//!
//! Message text comes straight from an export file. Everything printed here goes
//! through [`sanitize::sanitize_for_terminal`] so escape sequences embedded in a
//! chat cannot move the cursor or recolor the terminal.

pub mod sanitize;
pub mod share;
pub mod timestamps;
pub mod transcript;

pub use sanitize::{sanitize_for_terminal, strip_ansi};
pub use share::share_link;
pub use timestamps::{format_display_time, format_last_seen};
pub use transcript::{DEFAULT_WIDTH, render_transcript};
