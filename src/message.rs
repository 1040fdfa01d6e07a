//! Canonical message types shared by both export parsers.
//!
//! Parsers emit [`RawMessage`] records; the session normalizes them
//! (alias resolution, local-user inference, dedup) into [`Message`],
//! the single record type the rest of the crate works with.
//!
//! # Examples
//!
//! ```
//! use chatlens::{Message, Platform};
//!
//! let msg = Message::new("01/01/24", "10:30 am", "Alice", "Hello", Platform::WhatsApp);
//! assert_eq!(msg.sender, "Alice");
//! assert!(msg.reactions.is_empty());
//! ```
//!
//! Messages serialize cleanly for the CLI's `--json` output:
//!
//! ```
//! use chatlens::{Message, Platform};
//!
//! let msg = Message::new("01/01/24", "10:30 am", "Alice", "Hello", Platform::WhatsApp);
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::parser::Platform;

/// A single emoji reaction attached to a markup-export message.
///
/// The plaintext export has no reaction concept, so plaintext messages
/// always carry an empty reaction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// The reaction glyph (one character in the export's rendering).
    pub emoji: String,
    /// Display name of the reacting user.
    pub user: String,
}

/// Transient parser output before normalization.
///
/// Field semantics match [`Message`], except that `sender` is the raw
/// export name (alias resolution has not run yet) and empty bodies may
/// still be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Calendar date token in the source's native format.
    pub date: String,
    /// Display-formatted time-of-day token.
    pub time: String,
    /// Sender name exactly as it appears in the export.
    pub sender: String,
    /// Message text; embedded line breaks are `\n`.
    pub body: String,
    /// Reactions, markup export only.
    pub reactions: Vec<Reaction>,
}

impl RawMessage {
    /// Creates a raw record without reactions.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            body: body.into(),
            reactions: Vec::new(),
        }
    }

    /// Builder-style method to attach reactions.
    #[must_use]
    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    /// The `(date, time, body)` triple used for duplicate suppression,
    /// identical to [`Message::dedup_key`] so a raw record can be
    /// checked against the canonical collection before normalization.
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.date, &self.time, &self.body)
    }
}

/// The canonical, platform-tagged message record.
///
/// Immutable once created: the session appends Messages to its collection
/// and never mutates or removes them afterwards.
///
/// `date` and `time` are kept as opaque, order-preserving display tokens
/// in the source's native format; the viewer never reparses them into
/// structured timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Calendar date token, used as a grouping label.
    pub date: String,
    /// Display-formatted time-of-day token.
    pub time: String,
    /// Resolved participant identity (post-alias-mapping).
    pub sender: String,
    /// Message text with `\n` line breaks and no markup residue.
    /// Never empty for a retained record.
    pub body: String,
    /// Origin export format. Messages from different origins are never
    /// mixed in the same displayed thread.
    pub platform: Platform,
    /// Reactions, populated only for the markup export.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Reaction>,
}

impl Message {
    /// Creates a message without reactions.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            body: body.into(),
            platform,
            reactions: Vec::new(),
        }
    }

    /// Builder-style method to attach reactions.
    #[must_use]
    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    /// The `(date, time, body)` triple used for duplicate suppression
    /// at merge time. Sender and platform are not part of the key; this
    /// is a coarse heuristic, not a hash-based identity.
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.date, &self.time, &self.body)
    }
}
