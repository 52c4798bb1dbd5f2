use serde::{Deserialize, Serialize};

const DEFAULT_REPLY_CONTEXT: &str = "General chat";

/// Text tools offered next to a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolType {
    /// Rewrite the text to sound professional
    Rewrite,
    /// Translate to English, or to Spanish when already English
    Translate,
    /// One-sentence status summary
    Summarize,
    /// Three short replies separated by pipes
    ReplySuggestion,
}

/// Build the prompt for a single-text tool.
///
/// `context` is only used by [`ToolType::ReplySuggestion`].
pub fn build_tool_prompt(tool: ToolType, text: &str, context: Option<&str>) -> String {
    match tool {
        ToolType::Rewrite => format!(
            "Rewrite the following text to be more professional and clear, suitable for a business WhatsApp message. Return ONLY the rewritten text:\n\n\"{}\"",
            text
        ),
        ToolType::Translate => format!(
            "Translate the following text to English (or to Spanish if it is already English). Return ONLY the translated text:\n\n\"{}\"",
            text
        ),
        ToolType::Summarize => format!(
            "Summarize the following conversation/text into a single short sentence suitable for a quick status update. Return ONLY the summary:\n\n\"{}\"",
            text
        ),
        ToolType::ReplySuggestion => format!(
            "Give me 3 short, relevant reply suggestions for the following message, separated by pipes (|). Example: \"Yes, sure!|Maybe later|Can you call me?\". Context: \"{}\". Message: \"{}\"",
            context.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_REPLY_CONTEXT),
            text
        ),
    }
}

/// Split a pipe-separated reply suggestion answer into individual replies.
pub fn parse_reply_suggestions(answer: &str) -> Vec<String> {
    answer
        .split('|')
        .map(|s| s.trim().trim_matches('"').trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
