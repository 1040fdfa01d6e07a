//! Query-driven match tracking and navigation over the active thread.
//!
//! [`SearchNavigator`] is the state machine behind the in-chat search
//! bar: it recomputes the match index whenever the query changes,
//! tracks a cursor through the matches with circular next/prev
//! navigation, and exposes highlight spans for rendering. It is
//! re-derived per active thread; switching threads resets the query.
//!
//! # Example
//!
//! ```rust
//! use chatlens::{Message, Platform};
//! use chatlens::search::SearchNavigator;
//!
//! let thread = vec![
//!     Message::new("01/01/24", "10:30 am", "Alice", "I love pizza", Platform::WhatsApp),
//!     Message::new("01/01/24", "10:31 am", "Bob", "pizza night!", Platform::WhatsApp),
//! ];
//!
//! let mut nav = SearchNavigator::new();
//! nav.set_query("pizza", &thread);
//! assert_eq!(nav.matches(), &[0, 1]);
//! assert_eq!(nav.counter(), (1, 2));
//!
//! nav.next();
//! assert_eq!(nav.current(), Some(1));
//! ```

use std::time::{Duration, Instant};

use crate::message::Message;

/// One run of display text, tagged with whether it matched the query.
///
/// The display layer renders matched spans as highlights; the one
/// occurrence inside the message at the cursor position gets the
/// "current match" style (see [`SearchNavigator::is_current`]), all
/// others the "found match" style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text of this run.
    pub text: String,
    /// Whether this run case-insensitively equals the query.
    pub matched: bool,
}

/// Match index and cursor over the active thread's message list.
#[derive(Debug)]
pub struct SearchNavigator {
    query: String,
    matches: Vec<usize>,
    cursor: usize,
    last_user_scroll: Option<Instant>,
    quiescence: Duration,
}

impl SearchNavigator {
    /// Creates a navigator with the default 1s scroll-quiescence window.
    pub fn new() -> Self {
        Self::with_quiescence(Duration::from_secs(1))
    }

    /// Creates a navigator with a custom scroll-quiescence window.
    pub fn with_quiescence(quiescence: Duration) -> Self {
        Self {
            query: String::new(),
            matches: Vec::new(),
            cursor: 0,
            last_user_scroll: None,
            quiescence,
        }
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Positions of matching messages in the active thread's display
    /// list, in display order.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Recomputes the match index for a new query over the active
    /// thread's messages.
    ///
    /// A blank query returns the navigator to the idle state. Otherwise
    /// the cursor resets to the first match, whose message index is
    /// returned as the scroll target; `None` means no match and no
    /// scroll.
    pub fn set_query(&mut self, query: &str, messages: &[Message]) -> Option<usize> {
        self.query = query.to_string();
        self.cursor = 0;

        if query.trim().is_empty() {
            self.matches.clear();
            return None;
        }

        self.matches = messages
            .iter()
            .enumerate()
            .filter(|(_, m)| contains_ci(&m.body, query))
            .map(|(i, _)| i)
            .collect();

        self.matches.first().copied()
    }

    /// Advances the cursor to the next match, wrapping from the last
    /// match back to the first. Returns the new scroll target, or
    /// `None` when there are no matches (no-op).
    pub fn next(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
        Some(self.matches[self.cursor])
    }

    /// Moves the cursor to the previous match, wrapping from the first
    /// match to the last. Returns the new scroll target, or `None` when
    /// there are no matches (no-op).
    pub fn prev(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + self.matches.len() - 1) % self.matches.len();
        Some(self.matches[self.cursor])
    }

    /// Message index of the cursor match, if any.
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    /// Whether `message_index` holds the current match.
    pub fn is_current(&self, message_index: usize) -> bool {
        self.current() == Some(message_index)
    }

    /// `(cursor + 1, total)` for "n/m" display; `(0, 0)` when idle or
    /// nothing matched.
    pub fn counter(&self) -> (usize, usize) {
        if self.matches.is_empty() {
            (0, 0)
        } else {
            (self.cursor + 1, self.matches.len())
        }
    }

    /// Records a manual scroll by the viewer. Auto-scroll-to-match
    /// stays suppressed until the quiescence window has elapsed, so the
    /// navigator doesn't fight a user reading history.
    pub fn note_user_scroll(&mut self, now: Instant) {
        self.last_user_scroll = Some(now);
    }

    /// Whether scroll-to-match may run at `now`.
    pub fn auto_scroll_allowed(&self, now: Instant) -> bool {
        match self.last_user_scroll {
            Some(at) => now.duration_since(at) >= self.quiescence,
            None => true,
        }
    }
}

impl Default for SearchNavigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `text` into spans, marking every case-insensitive occurrence
/// of `query`. A blank query yields the whole text as one unmatched
/// span.
pub fn highlight(text: &str, query: &str) -> Vec<Span> {
    if query.trim().is_empty() {
        return vec![Span {
            text: text.to_string(),
            matched: false,
        }];
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_len_at(text, pos, query) {
            if plain_start < pos {
                spans.push(Span {
                    text: text[plain_start..pos].to_string(),
                    matched: false,
                });
            }
            spans.push(Span {
                text: text[pos..pos + len].to_string(),
                matched: true,
            });
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        spans.push(Span {
            text: text[plain_start..].to_string(),
            matched: false,
        });
    }

    spans
}

/// Case-insensitive substring test. Shares [`match_len_at`] with the
/// span scanner so the match index and the highlighting always agree.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .char_indices()
        .any(|(i, _)| match_len_at(haystack, i, needle).is_some())
}

/// Byte length of a query match starting at byte offset `pos`, if any.
/// Characters compare one-to-one via Unicode lowercase equivalence.
fn match_len_at(text: &str, pos: usize, query: &str) -> Option<usize> {
    let mut haystack = text[pos..].chars();
    let mut len = 0;

    for qc in query.chars() {
        let hc = haystack.next()?;
        if !char_eq_ci(hc, qc) {
            return None;
        }
        len += hc.len_utf8();
    }

    Some(len)
}

fn char_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
