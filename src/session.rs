//! Session context owning the canonical message collection.
//!
//! A [`Session`] replaces the ambient mutable state of a live viewer
//! with an explicit context object: the append-only canonical
//! collection, the set-once local-user identity, and the alias table
//! all live here. Ingestions are assumed sequential (user-paced); there
//! is no lock discipline because derived views are pure recomputations
//! from this state.
//!
//! # Example
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let mut session = Session::new();
//! let report = session.ingest(
//!     "01/01/24, 10:30 am - Alice: Hello\n01/01/24, 10:31 am - Bob: Hi",
//!     "chat.txt",
//! )?;
//!
//! assert_eq!(report.added, 2);
//! assert_eq!(session.local_user(), Some("Alice"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::message::Message;
use crate::parser::{Platform, create_parser, platform_for_file};
use crate::search::SearchNavigator;

/// Outcome of one ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Platform the file was parsed as.
    pub platform: Platform,
    /// Raw records the parser produced.
    pub parsed: usize,
    /// Records appended to the canonical collection.
    pub added: usize,
    /// Records dropped by the `(date, time, body)` duplicate check.
    pub duplicates: usize,
}

/// The per-session context: canonical messages, local-user identity,
/// and configuration.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    messages: Vec<Message>,
    local_user: Option<String>,
}

impl Session {
    /// Creates a session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            messages: Vec::new(),
            local_user: None,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The viewer's own identity: the first non-empty sender seen across
    /// all ingestions and both formats. Set once, never reassigned for
    /// the lifetime of the session.
    pub fn local_user(&self) -> Option<&str> {
        self.local_user.as_deref()
    }

    /// The full canonical collection, in ingestion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The canonical collection filtered to one platform.
    pub fn messages_for(&self, platform: Platform) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.platform == platform)
            .cloned()
            .collect()
    }

    /// Ingests one export file's content and merges the result into the
    /// canonical collection.
    ///
    /// The parser is chosen by file extension alone (`.html` →
    /// Instagram markup, anything else → WhatsApp plaintext).
    /// Normalization applies alias resolution, infers the local user
    /// from the first non-empty sender, drops empty bodies, and
    /// discards records whose `(date, time, body)` triple already
    /// exists, so re-uploading the same export is idempotent.
    pub fn ingest(&mut self, content: &str, file_name: &str) -> Result<IngestReport> {
        let platform = platform_for_file(file_name);
        let parser = create_parser(platform);
        let raw = parser.parse_str(content)?;
        let parsed = raw.len();

        let mut seen: HashSet<(String, String, String)> = self
            .messages
            .iter()
            .map(|m| owned_key(m.dedup_key()))
            .collect();

        let mut added = 0;
        let mut duplicates = 0;

        for record in raw {
            let sender = self.resolve_sender(&record.sender);

            // One-shot local-user inference, sticky across ingestions.
            if self.local_user.is_none() && !sender.is_empty() {
                self.local_user = Some(sender.clone());
            }

            if record.body.is_empty() {
                continue;
            }

            if !seen.insert(owned_key(record.dedup_key())) {
                duplicates += 1;
                continue;
            }

            self.messages.push(
                Message::new(record.date, record.time, sender, record.body, platform)
                    .with_reactions(record.reactions),
            );
            added += 1;
        }

        Ok(IngestReport {
            platform,
            parsed,
            added,
            duplicates,
        })
    }

    /// Reads a file from disk and ingests it. The file name drives
    /// parser selection exactly as in [`ingest`](Session::ingest).
    pub fn ingest_file(&mut self, path: &Path) -> Result<IngestReport> {
        let content = fs::read_to_string(path)?;
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        self.ingest(&content, file_name)
    }

    /// Creates a search navigator honoring the session's configured
    /// scroll-quiescence window.
    pub fn search_navigator(&self) -> SearchNavigator {
        SearchNavigator::with_quiescence(self.config.scroll_quiescence)
    }

    fn resolve_sender(&self, raw: &str) -> String {
        self.config
            .aliases
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }
}

fn owned_key((date, time, body): (&str, &str, &str)) -> (String, String, String) {
    (date.to_string(), time.to_string(), body.to_string())
}
