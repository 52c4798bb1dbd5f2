use chrono::NaiveDate;

use crate::models::{DeliveryStatus, ExportedMessage, ParsedChat, Role};
use crate::render::sanitize::sanitize_for_terminal;
use crate::render::timestamps::format_display_time;

/// Terminal width used when the caller has no better idea
pub const DEFAULT_WIDTH: usize = 80;

const MIN_WIDTH: usize = 20;

/// Render a chat as plain text bubbles.
///
/// Messages from the device owner are right-aligned within `width` columns,
/// everyone else's are left-aligned. A separator line is printed whenever the
/// calendar day changes. Bubbles use at most two thirds of the width and wrap
/// on word boundaries.
pub fn render_transcript(chat: &ParsedChat, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let bubble_width = width * 2 / 3;
    let mut out = String::new();

    let title = sanitize_for_terminal(&chat.name);
    push_line(&mut out, &center(&format!("{} ({} messages)", title, chat.len()), width));

    let mut current_day: Option<NaiveDate> = None;
    for message in &chat.messages {
        let day = message.timestamp.date();
        if current_day != Some(day) {
            out.push('\n');
            let label = day.format("%a, %b %-d %Y").to_string();
            push_line(&mut out, &center(&format!("-- {} --", label), width));
            current_day = Some(day);
        }
        out.push('\n');
        render_bubble(&mut out, message, bubble_width, width);
    }

    out
}

fn render_bubble(out: &mut String, message: &ExportedMessage, bubble_width: usize, width: usize) {
    let mut lines = wrap_text(&sanitize_for_terminal(&message.text), bubble_width);
    let footer = match (message.role, message.status) {
        (Role::SelfSender, Some(DeliveryStatus::Sent)) => {
            format!("{} ✓", format_display_time(&message.timestamp))
        }
        (Role::SelfSender, Some(_)) => format!("{} ✓✓", format_display_time(&message.timestamp)),
        _ => format_display_time(&message.timestamp),
    };
    lines.push(footer);

    for line in lines {
        match message.role {
            Role::SelfSender => {
                let pad = width.saturating_sub(line.chars().count());
                push_line(out, &format!("{}{}", " ".repeat(pad), line));
            }
            Role::Other => {
                push_line(out, &line);
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Greedy word wrap by character count. Words longer than `max` are split.
fn wrap_text(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in source_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(max);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > max {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        lines.push(line);
    }

    lines
}
