//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Header layout of an export line
#[derive(Clone, Copy)]
pub enum ExportStyle {
    /// `12/25/23, 8:30 PM - Name: text`
    Android,
    /// `[12/25/23, 20:30:12] Name: text`
    Ios,
}

/// Builder for export text
pub struct ExportBuilder {
    style: ExportStyle,
    lines: Vec<String>,
    minute: u32,
}

impl ExportBuilder {
    /// Create a new builder producing Android-style headers
    pub fn android() -> Self {
        Self { style: ExportStyle::Android, lines: Vec::new(), minute: 0 }
    }

    /// Create a new builder producing iOS-style headers
    pub fn ios() -> Self {
        Self { style: ExportStyle::Ios, lines: Vec::new(), minute: 0 }
    }

    /// Add a message; each message is one minute after the previous
    pub fn message(mut self, sender: &str, text: &str) -> Self {
        let minute = self.minute % 60;
        let hour = (20 + self.minute / 60) % 24;
        self.minute += 1;

        let header = match self.style {
            ExportStyle::Android => {
                let meridiem = if hour >= 12 { "PM" } else { "AM" };
                let h12 = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("12/25/23, {}:{:02} {} - {}: ", h12, minute, meridiem, sender)
            }
            ExportStyle::Ios => format!("[12/25/23, {}:{:02}:00] {}: ", hour, minute, sender),
        };

        let mut parts = text.split('\n');
        let first = parts.next().unwrap_or_default();
        self.lines.push(format!("{}{}", header, first));
        for rest in parts {
            self.lines.push(rest.to_string());
        }
        self
    }

    /// Add a raw line (system notice, blank line, garbage)
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Export text joined with `\n`
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }

    /// Export text joined with `\r\n`
    pub fn build_crlf(&self) -> String {
        self.lines.join("\r\n")
    }
}

/// Temporary directory holding export files
pub struct ExportDir {
    temp_dir: TempDir,
}

impl ExportDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an export file and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create export dir");
        }
        fs::write(&path, content).expect("Failed to write export");
        path
    }
}

impl Default for ExportDir {
    fn default() -> Self {
        Self::new()
    }
}
