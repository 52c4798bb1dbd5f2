use chrono::Local;
use serde::Serialize;
use tracing::{debug, trace};

use crate::models::{DeliveryStatus, ExportedMessage, ParsedChat, Role};
use crate::parsers::header::match_header;
use crate::parsers::sender::{DefaultSelfDetector, SelfDetector};
use crate::parsers::tally::SenderTally;
use crate::parsers::timestamp::{DateOrder, leading_date_fields, parse_export_timestamp};

/// Conversation name used when every message came from the device owner
pub const DEFAULT_PLACEHOLDER_NAME: &str = "Imported Chat";

/// Knobs for one parse call.
pub struct ParseOptions {
    pub date_order: DateOrder,
    pub placeholder_name: String,
    pub self_detector: Box<dyn SelfDetector>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            date_order: DateOrder::default(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            self_detector: Box::new(DefaultSelfDetector),
        }
    }
}

impl ParseOptions {
    pub fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    pub fn with_self_detector(mut self, detector: impl SelfDetector + 'static) -> Self {
        self.self_detector = Box::new(detector);
        self
    }
}

/// Line-level bookkeeping from one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub header_lines: usize,
    pub continuation_lines: usize,
    /// Blank lines and text before the first header
    pub skipped_lines: usize,
    /// Headers whose date/time could not be read and got the current time instead
    pub fallback_timestamps: usize,
    /// Date order actually used (never `Auto`)
    pub date_order: DateOrder,
}

/// Parse a WhatsApp chat export with the default options.
///
/// Returns `None` when no line looks like a message header, so callers can
/// tell a failed import apart from a valid conversation.
///
/// # Examples
///
/// ```
/// use chat_export_parser::parse_whatsapp_chat;
/// use chat_export_parser::models::Role;
///
/// let chat = parse_whatsapp_chat("12/25/23, 8:30 PM - You: Hello").unwrap();
/// assert_eq!(chat.messages.len(), 1);
/// assert_eq!(chat.messages[0].role, Role::SelfSender);
/// assert_eq!(chat.messages[0].text, "Hello");
/// ```
pub fn parse_whatsapp_chat(text: &str) -> Option<ParsedChat> {
    parse_whatsapp_chat_with(text, &ParseOptions::default())
}

pub fn parse_whatsapp_chat_with(text: &str, options: &ParseOptions) -> Option<ParsedChat> {
    parse_with_report(text, options).0
}

/// Parse an export and also return line statistics.
///
/// Each header line starts a new message; any other non-blank line extends
/// the most recent message. Unreadable timestamps fall back to the current
/// local time instead of dropping the message.
pub fn parse_with_report(text: &str, options: &ParseOptions) -> (Option<ParsedChat>, ParseStats) {
    let date_order = match options.date_order {
        DateOrder::Auto => detect_date_order(text),
        order => order,
    };

    let mut stats = ParseStats { date_order, ..ParseStats::default() };
    let mut messages: Vec<ExportedMessage> = Vec::new();
    let mut tally = SenderTally::new();

    for (index, line) in text.lines().enumerate() {
        if let Some(header) = match_header(line) {
            stats.header_lines += 1;

            let timestamp = match parse_export_timestamp(header.date, header.time, date_order) {
                Some(ts) => ts,
                None => {
                    debug!(
                        line = index + 1,
                        date = header.date,
                        time = header.time,
                        "unreadable timestamp, using current time"
                    );
                    stats.fallback_timestamps += 1;
                    Local::now().naive_local()
                }
            };

            let sender = header.sender.trim();
            let role = if options.self_detector.is_self(sender) {
                Role::SelfSender
            } else {
                tally.record(sender);
                Role::Other
            };

            messages.push(ExportedMessage {
                id: ExportedMessage::id_for_line(index),
                role,
                text: header.body.trim().to_string(),
                timestamp,
                status: Some(DeliveryStatus::Read),
            });
            continue;
        }

        let trimmed = line.trim();
        if let Some(current) = messages.last_mut()
            && !trimmed.is_empty()
        {
            current.push_line(trimmed);
            stats.continuation_lines += 1;
        } else {
            trace!(line = index + 1, "skipping line outside any message");
            stats.skipped_lines += 1;
        }
    }

    debug!(
        messages = messages.len(),
        continuations = stats.continuation_lines,
        skipped = stats.skipped_lines,
        fallback_timestamps = stats.fallback_timestamps,
        "parsed chat export"
    );

    if messages.is_empty() {
        return (None, stats);
    }

    let name = tally.into_display_name(&options.placeholder_name);
    (Some(ParsedChat { name, messages }), stats)
}

/// Guess the date field order from the header lines of an export.
///
/// A leading field above 12 can only be a day; a second field above 12 can
/// only be a day too. Without such evidence the export is read month-first.
pub fn detect_date_order(text: &str) -> DateOrder {
    for line in text.lines() {
        let Some(header) = match_header(line) else {
            continue;
        };
        match leading_date_fields(header.date) {
            Some((first, _)) if first > 12 => return DateOrder::DayFirst,
            Some((_, second)) if second > 12 => return DateOrder::MonthFirst,
            _ => {}
        }
    }
    DateOrder::MonthFirst
}
