//! Prompt templates for the assistant tools that work on chat text.
//!
//! Only the prompt text is built here. Sending it to a model is left to the
//! caller.

pub mod tools;
pub mod transcript;

pub use tools::{ToolType, build_tool_prompt, parse_reply_suggestions};
pub use transcript::{format_conversation, summarize_conversation_prompt};
