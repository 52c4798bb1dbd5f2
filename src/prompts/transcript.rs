use crate::models::{ExportedMessage, Role};

/// Render messages as `Me:` / `Partner:` lines for model input.
pub fn format_conversation(messages: &[ExportedMessage]) -> String {
    let mut out = String::new();
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(match message.role {
            Role::SelfSender => "Me: ",
            Role::Other => "Partner: ",
        });
        out.push_str(&message.text);
    }
    out
}

/// Whole-conversation summary prompt, or `None` when there is nothing to summarize.
pub fn summarize_conversation_prompt(messages: &[ExportedMessage]) -> Option<String> {
    if messages.is_empty() {
        return None;
    }

    Some(format!(
        "Analyze the following WhatsApp conversation and provide a concise summary.\n\
         \n\
         Structure the summary as:\n\
         1. **Topic**: One sentence on what the chat is about.\n\
         2. **Key Points**: 3 bullet points of key details.\n\
         3. **Action Items**: Any pending tasks or questions (if any).\n\
         \n\
         Conversation:\n\
         {}\n",
        format_conversation(messages)
    ))
}
