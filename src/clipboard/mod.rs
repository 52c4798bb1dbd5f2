//! Copying rendered chats, prompts and share links to the system clipboard.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::debug;

/// Largest payload we hand to the clipboard (10MB, same as the export limit)
const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Destination for copied text (allows mocking in tests)
trait ClipboardSink {
    fn put(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn open() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for SystemClipboard {
    fn put(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

/// Trim trailing newlines and check the payload is worth copying.
fn prepare(text: &str) -> Result<&str> {
    let text = text.trim_end_matches(['\n', '\r']);

    if text.trim().is_empty() {
        bail!("Nothing to copy: output is empty");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!("Output too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }

    Ok(text)
}

fn copy_with(text: &str, sink: &mut dyn ClipboardSink) -> Result<()> {
    let text = prepare(text)?;
    sink.put(text)?;
    debug!(bytes = text.len(), "copied output to clipboard");
    Ok(())
}

/// Copy command output to the system clipboard.
///
/// # Errors
///
/// Returns an error if the text is blank, larger than 10MB, or the system
/// clipboard is unavailable (headless sessions, denied access).
pub fn copy_output(text: &str) -> Result<()> {
    // Validate before touching the clipboard so headless CI gets the real error
    prepare(text)?;
    let mut clipboard = SystemClipboard::open()?;
    copy_with(text, &mut clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        copied: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingSink {
        fn put(&mut self, text: &str) -> Result<()> {
            if self.fail {
                bail!("clipboard locked");
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_trims_trailing_newlines() {
        let mut sink = RecordingSink::default();
        copy_with("Partner: hi\nMe: hello\n\n", &mut sink).unwrap();
        assert_eq!(sink.copied, vec!["Partner: hi\nMe: hello"]);
    }

    #[test]
    fn test_copy_keeps_unicode() {
        let mut sink = RecordingSink::default();
        copy_with("¡hola! 👋 世界", &mut sink).unwrap();
        assert_eq!(sink.copied, vec!["¡hola! 👋 世界"]);
    }

    #[test]
    fn test_copy_rejects_blank_output() {
        let mut sink = RecordingSink::default();
        let err = copy_with(" \n\r\n", &mut sink).unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert!(sink.copied.is_empty());
    }

    #[test]
    fn test_copy_size_limit() {
        let mut sink = RecordingSink::default();
        assert!(copy_with(&"a".repeat(MAX_CLIPBOARD_BYTES), &mut sink).is_ok());

        let err = copy_with(&"a".repeat(MAX_CLIPBOARD_BYTES + 1), &mut sink).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert_eq!(sink.copied.len(), 1);
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut sink = RecordingSink { fail: true, ..RecordingSink::default() };
        let err = copy_with("text", &mut sink).unwrap_err();
        assert!(err.to_string().contains("clipboard locked"));
    }
}
