//! WhatsApp TXT export parser.
//!
//! The export is line-oriented: each message starts on a line of the
//! form `DD/MM/YY, H:MM am - Sender: Body`, and any following line
//! without the timestamp prefix continues the previous message's body.
//! Timestamp-prefixed lines without a `Sender: Body` tail (system
//! notices) are dropped silently, as are malformed lines before the
//! first valid message.

use regex::Regex;

use crate::error::{ChatlensError, Result};
use crate::message::RawMessage;
use crate::parser::{Parser, Platform};

/// Message-start line grammar.
///
/// Two-digit day/month/year, 1-2 digit hour, case-insensitive meridiem.
/// The sender is delimited by the first colon after the dash.
const LINE_PATTERN: &str =
    r"(?i)^(\d{2}/\d{2}/\d{2}),\s+(\d{1,2}:\d{2}\s+(?:am|pm))\s+-\s+([^:]+):\s+(.+)$";

/// Timestamp prefix shared by records and system notices. A line with
/// this prefix that fails the full start grammar carries no
/// `Sender: Body` tail (group add/leave notices, settings changes) and
/// is dropped rather than folded into the previous body.
const PREFIX_PATTERN: &str = r"(?i)^\d{2}/\d{2}/\d{2},\s+\d{1,2}:\d{2}\s+(?:am|pm)";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parsers::WhatsAppParser;
/// use chatlens::parser::Parser;
///
/// let parser = WhatsAppParser::new();
/// let records = parser.parse_str("01/01/24, 10:30 am - Alice: Hello")?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].sender, "Alice");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct WhatsAppParser;

impl WhatsAppParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    fn parse_content(&self, content: &str) -> Result<Vec<RawMessage>> {
        let regex = Regex::new(LINE_PATTERN)
            .map_err(|e| ChatlensError::invalid_format("WhatsApp TXT", e.to_string()))?;
        let prefix = Regex::new(PREFIX_PATTERN)
            .map_err(|e| ChatlensError::invalid_format("WhatsApp TXT", e.to_string()))?;

        let mut messages: Vec<RawMessage> = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                // Blank lines are never separators and never body content.
                continue;
            }

            if let Some(caps) = regex.captures(line) {
                let date = caps.get(1).map_or("", |m| m.as_str());
                let time = caps.get(2).map_or("", |m| m.as_str());
                let sender = caps.get(3).map_or("", |m| m.as_str().trim());
                let body = caps.get(4).map_or("", |m| m.as_str().trim());

                messages.push(RawMessage::new(date, time, sender, body));
            } else if prefix.is_match(line) {
                // Timestamped system notice without a message tail.
                continue;
            } else if let Some(last) = messages.last_mut() {
                // Continuation of the previous message (multiline body).
                last.body.push('\n');
                last.body.push_str(line);
            }
            // Lines before the first valid message are dropped.
        }

        Ok(messages)
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn platform(&self) -> Platform {
        Platform::WhatsApp
    }

    fn parse_str(&self, content: &str) -> Result<Vec<RawMessage>> {
        self.parse_content(content)
    }
}
