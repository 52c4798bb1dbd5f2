use std::sync::OnceLock;

use regex::Regex;

static ANSI_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ansi_pattern() -> &'static Regex {
    // CSI sequences (colors, cursor movement) and OSC sequences ended by BEL or ST
    ANSI_PATTERN.get_or_init(|| {
        Regex::new(r"\x1B\[[0-9;?]*[A-Za-z]|\x1B\][^\x07\x1B]*(?:\x07|\x1B\\)").unwrap()
    })
}

/// Remove ANSI escape sequences.
///
/// ```
/// use chat_export_parser::render::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[31mRed text\x1b[0m"), "Red text");
/// ```
pub fn strip_ansi(text: &str) -> String {
    ansi_pattern().replace_all(text, "").into_owned()
}

/// Direction controls the exporter wraps names and numbers in.
fn is_bidi_control(ch: char) -> bool {
    matches!(ch, '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

/// Strip escape sequences, control characters and bidi controls.
///
/// Newlines are kept; tabs become a single space.
pub fn sanitize_for_terminal(text: &str) -> String {
    strip_ansi(text)
        .chars()
        .filter_map(|ch| match ch {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() || is_bidi_control(c) => None,
            c => Some(c),
        })
        .collect()
}
