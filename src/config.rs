//! Session configuration types.
//!
//! [`SessionConfig`] carries the settings that shape normalization and
//! navigation for a viewing session: the sender alias table and the
//! scroll-suppression quiescence window.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use chatlens::config::SessionConfig;
//!
//! let config = SessionConfig::new()
//!     .with_alias("+44 7700 900123", "Mum")
//!     .with_scroll_quiescence(Duration::from_millis(500));
//! ```

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for a viewing session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maps raw export sender names to display names. Unmapped senders
    /// pass through unchanged.
    pub aliases: HashMap<String, String>,

    /// Quiescence window after a manual scroll during which automatic
    /// scroll-to-match stays suppressed (default: 1s).
    pub scroll_quiescence: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            aliases: HashMap::new(),
            scroll_quiescence: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one sender → display name mapping.
    #[must_use]
    pub fn with_alias(mut self, sender: impl Into<String>, display: impl Into<String>) -> Self {
        self.aliases.insert(sender.into(), display.into());
        self
    }

    /// Replaces the whole alias table.
    #[must_use]
    pub fn with_aliases(mut self, aliases: HashMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the scroll-suppression quiescence window.
    #[must_use]
    pub fn with_scroll_quiescence(mut self, window: Duration) -> Self {
        self.scroll_quiescence = window;
        self
    }
}
