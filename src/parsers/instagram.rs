//! Instagram HTML export parser.
//!
//! The export is an HTML document with message blocks at fixed
//! structural selectors. The format is externally defined and carries
//! no schema: selector drift breaks parsing silently, so the selector
//! strings are kept together as data in [`SelectorTable`] rather than
//! scattered through the traversal code.
//!
//! Blocks missing a sender, body, or time element are skipped entirely.
//! The export lists messages most-recent-first; output is reversed to
//! chronological oldest-first, matching the plaintext parser's order.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ChatlensError, Result};
use crate::message::{RawMessage, Reaction};
use crate::parser::{Parser, Platform};

/// Localized filler body the export uses for "liked a message"
/// reactions. Not a real text message; excluded from output.
const LIKED_MESSAGE_FILLER: &str = "मैसेज को लाइक किया है";

/// Time element grammar: `Month D, YYYY H:MM am|pm`.
const TIME_PATTERN: &str = r"(?i)([A-Za-z]+\s+\d+,\s+\d+)\s+(\d+:\d+\s+[ap]m)";

/// CSS selectors for the export's fixed document structure.
///
/// These are external-format constants, not logic. Update here when the
/// export's markup changes.
struct SelectorTable {
    /// One message block per container.
    block: Selector,
    /// Sender heading inside a block.
    sender: Selector,
    /// Body wrapper inside a block.
    body: Selector,
    /// Timestamp element inside a block.
    time: Selector,
    /// Optional reaction list inside a block.
    reactions: Selector,
    /// The text position inside the body wrapper.
    body_inner: Selector,
    /// One reaction entry inside the reaction list.
    reaction_item: Selector,
}

impl SelectorTable {
    fn new() -> Result<Self> {
        Ok(Self {
            block: parse_selector(".pam._3-95._2ph-._a6-g")?,
            sender: parse_selector("h2._3-95._2pim._a6-h._a6-i")?,
            body: parse_selector("._3-95._a6-p")?,
            time: parse_selector("._3-94._a6-o")?,
            reactions: parse_selector("ul._a6-q")?,
            body_inner: parse_selector("div > div:nth-child(2)")?,
            reaction_item: parse_selector("li span")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ChatlensError::invalid_format("Instagram HTML", e.to_string()))
}

/// Parser for Instagram HTML exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parsers::InstagramParser;
/// use chatlens::parser::Parser;
///
/// let parser = InstagramParser::new();
/// let records = parser.parse_str("<html><body></body></html>")?;
/// assert!(records.is_empty());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct InstagramParser;

impl InstagramParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    fn parse_content(&self, content: &str) -> Result<Vec<RawMessage>> {
        let selectors = SelectorTable::new()?;
        let time_regex = Regex::new(TIME_PATTERN)
            .map_err(|e| ChatlensError::invalid_format("Instagram HTML", e.to_string()))?;
        let br_regex = Regex::new(r"(?i)<br\s*/?>")
            .map_err(|e| ChatlensError::invalid_format("Instagram HTML", e.to_string()))?;
        let tag_regex = Regex::new(r"<[^>]*>")
            .map_err(|e| ChatlensError::invalid_format("Instagram HTML", e.to_string()))?;

        let document = Html::parse_document(content);
        let mut messages: Vec<RawMessage> = Vec::new();

        for block in document.select(&selectors.block) {
            // Incomplete block: not an error, just ignored.
            let Some(sender_el) = block.select(&selectors.sender).next() else {
                continue;
            };
            let Some(body_el) = block.select(&selectors.body).next() else {
                continue;
            };
            let Some(time_el) = block.select(&selectors.time).next() else {
                continue;
            };

            let sender = element_text(&sender_el);

            let body = body_el
                .select(&selectors.body_inner)
                .next()
                .map(|inner| {
                    let html = inner.inner_html();
                    let with_breaks = br_regex.replace_all(&html, "\n");
                    tag_regex.replace_all(&with_breaks, "").trim().to_string()
                })
                .unwrap_or_default();

            if body.is_empty() || body == LIKED_MESSAGE_FILLER {
                continue;
            }

            let time_text = element_text(&time_el);
            let (date, time) = match time_regex.captures(&time_text) {
                Some(caps) => (caps[1].to_string(), caps[2].to_string()),
                // Degraded fallback: raw text as date, empty time.
                None => (time_text, String::new()),
            };

            let reactions = block
                .select(&selectors.reactions)
                .next()
                .map(|list| collect_reactions(&list, &selectors.reaction_item))
                .unwrap_or_default();

            messages.push(RawMessage::new(date, time, sender, body).with_reactions(reactions));
        }

        // The export lists newest-first; reverse for chronological order.
        messages.reverse();
        Ok(messages)
    }
}

impl Default for InstagramParser {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Decomposes each reaction entry into its leading glyph and the
/// remaining user name. Entries that don't split this way are skipped.
fn collect_reactions(list: &ElementRef, item: &Selector) -> Vec<Reaction> {
    let mut reactions = Vec::new();

    for span in list.select(item) {
        let text = span.text().collect::<String>();
        let text = text.trim();

        let mut chars = text.chars();
        if let Some(emoji) = chars.next() {
            let user = chars.as_str();
            if !user.is_empty() {
                reactions.push(Reaction {
                    emoji: emoji.to_string(),
                    user: user.to_string(),
                });
            }
        }
    }

    reactions
}

impl Parser for InstagramParser {
    fn name(&self) -> &'static str {
        "Instagram"
    }

    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn parse_str(&self, content: &str) -> Result<Vec<RawMessage>> {
        self.parse_content(content)
    }
}
