//! # Chatlens
//!
//! A Rust library for viewing chat exports from WhatsApp and Instagram:
//! parsing, conversation grouping, and full-text search with match
//! navigation.
//!
//! ## Overview
//!
//! Chatlens normalizes two heterogeneous export formats into one
//! canonical message model:
//! - **WhatsApp** — plaintext exports, one timestamped line per message
//! - **Instagram** — HTML exports with messages at fixed structural
//!   selectors
//!
//! A [`Session`] owns the canonical collection and the viewer identity;
//! the [`conversation`] module reconstructs per-counterpart threads on
//! demand; [`SearchNavigator`](search::SearchNavigator) tracks query
//! matches and a navigation cursor over the active thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new();
//!     session.ingest(
//!         "01/01/24, 10:30 am - Alice: Hello\n01/01/24, 10:31 am - Bob: Hi",
//!         "chat.txt",
//!     )?;
//!
//!     // The first sender seen becomes the viewer's own identity.
//!     assert_eq!(session.local_user(), Some("Alice"));
//!
//!     let conversations = partition(session.messages(), session.local_user());
//!     assert_eq!(conversations[0].counterpart, "Bob");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Searching a thread
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let thread = vec![
//!     Message::new("01/01/24", "10:30 am", "Alice", "pizza tonight?", Platform::WhatsApp),
//!     Message::new("01/01/24", "10:31 am", "Bob", "always pizza", Platform::WhatsApp),
//! ];
//!
//! let mut nav = SearchNavigator::new();
//! nav.set_query("pizza", &thread);
//! assert_eq!(nav.counter(), (1, 2));
//! nav.next();
//! nav.next(); // wraps back to the first match
//! assert_eq!(nav.current(), Some(0));
//! ```
//!
//! ## Module Structure
//!
//! - [`session`] — [`Session`] context: ingestion, normalization, dedup
//! - [`parser`] — [`Parser`](parser::Parser) trait, [`Platform`],
//!   [`create_parser`](parser::create_parser)
//! - [`parsers`] — format parsers
//!   ([`WhatsAppParser`](parsers::WhatsAppParser),
//!   [`InstagramParser`](parsers::InstagramParser))
//! - [`conversation`] — thread partitioning and summaries
//! - [`search`] — match index, cursor navigation, highlight spans
//! - [`config`] — [`SessionConfig`](config::SessionConfig)
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod search;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{Message, Reaction};
pub use parser::Platform;
pub use session::Session;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::message::{Message, RawMessage, Reaction};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{Parser, Platform, create_parser, platform_for_file};
    pub use crate::parsers::{InstagramParser, WhatsAppParser};

    // Session context
    pub use crate::config::SessionConfig;
    pub use crate::session::{IngestReport, Session};

    // Conversations
    pub use crate::conversation::{Conversation, group_by_date, partition, thread_messages};

    // Search
    pub use crate::search::{SearchNavigator, Span, highlight};
}
