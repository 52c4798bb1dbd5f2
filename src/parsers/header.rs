use std::sync::OnceLock;

use regex::Regex;

/// Header line pattern, compiled once.
///
/// Covers the two common export layouts:
/// - Android: `12/25/23, 8:30 PM - Name: Message`
/// - iOS: `[12/25/23, 20:30:12] Name: Message`
static HEADER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn header_pattern() -> &'static Regex {
    HEADER_PATTERN.get_or_init(|| {
        Regex::new(
            r"^[\u{200E}\u{200F}]?\[?(\d{1,2}/\d{1,2}/\d{2,4}),?\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\]?(?:\s-)?\s(.*?):\s(.*)$",
        )
        .unwrap()
    })
}

/// The pieces of a line that starts a new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

/// Match a single export line against the header pattern.
///
/// Returns `None` for continuation lines, blank lines and system notices that
/// carry no `Name: ` part.
pub fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    let caps = header_pattern().captures(line)?;
    Some(HeaderLine {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        sender: caps.get(3)?.as_str(),
        body: caps.get(4)?.as_str(),
    })
}
