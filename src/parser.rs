//! Unified parser trait for chat exports.
//!
//! Both export parsers implement [`Parser`], producing raw records from
//! the full file text. Parsers are pure functions of their input: all
//! session state (aliases, local-user inference, dedup) lives in
//! [`Session`](crate::session::Session), so a parser may run zero or
//! more times across a session as more files are uploaded.
//!
//! # Platform Selection
//!
//! ```rust
//! use chatlens::parser::{Platform, create_parser, platform_for_file};
//!
//! let platform = platform_for_file("messages.html");
//! assert_eq!(platform, Platform::Instagram);
//!
//! let parser = create_parser(platform);
//! let records = parser.parse_str("<html></html>")?;
//! assert!(records.is_empty());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::RawMessage;
use crate::parsers::{InstagramParser, WhatsAppParser};

/// Supported export platforms.
///
/// Identifies the origin format of a message. The two formats are never
/// mixed in one displayed thread.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::Platform;
/// use std::str::FromStr;
///
/// let platform = Platform::from_str("whatsapp").unwrap();
/// assert_eq!(platform, Platform::WhatsApp);
///
/// // Aliases are supported
/// let platform = Platform::from_str("ig").unwrap();
/// assert_eq!(platform, Platform::Instagram);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    /// WhatsApp plaintext export (one message per timestamped line)
    #[serde(alias = "wa")]
    WhatsApp,

    /// Instagram HTML export (structured markup blocks)
    #[serde(alias = "ig")]
    Instagram,
}

impl Platform {
    /// Returns the default file extension for exports from this platform.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "txt",
            Platform::Instagram => "html",
        }
    }

    /// Returns all platform names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["whatsapp", "wa", "instagram", "ig"]
    }

    /// Returns all available platforms.
    pub fn all() -> &'static [Platform] {
        &[Platform::WhatsApp, Platform::Instagram]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::WhatsApp => write!(f, "WhatsApp"),
            Platform::Instagram => write!(f, "Instagram"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Platform::WhatsApp),
            "instagram" | "ig" => Ok(Platform::Instagram),
            _ => Err(format!(
                "Unknown platform: '{}'. Expected one of: {}",
                s,
                Platform::all_names().join(", ")
            )),
        }
    }
}

// Conversion from CLI Source to Platform (only with cli feature)
#[cfg(feature = "cli")]
impl From<crate::cli::Source> for Platform {
    fn from(source: crate::cli::Source) -> Self {
        match source {
            crate::cli::Source::WhatsApp => Platform::WhatsApp,
            crate::cli::Source::Instagram => Platform::Instagram,
        }
    }
}

/// Unified trait for parsing chat exports into raw records.
///
/// Implementations must be side-effect free: given the same input text
/// they produce the same record sequence, in chronological oldest-first
/// order.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the platform this parser handles.
    fn platform(&self) -> Platform;

    /// Parses the full export text into an ordered sequence of raw
    /// records. Unparseable content degrades to fewer records, never to
    /// an error; `Err` is reserved for defects in the format definition
    /// itself.
    fn parse_str(&self, content: &str) -> Result<Vec<RawMessage>>;
}

/// Creates a parser for the given platform.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::{Platform, create_parser};
///
/// let parser = create_parser(Platform::WhatsApp);
/// assert_eq!(parser.name(), "WhatsApp");
/// ```
pub fn create_parser(platform: Platform) -> Box<dyn Parser> {
    match platform {
        Platform::WhatsApp => Box::new(WhatsAppParser::new()),
        Platform::Instagram => Box::new(InstagramParser::new()),
    }
}

/// Selects the platform for an uploaded file.
///
/// The file extension alone decides: `.html` means the Instagram markup
/// export, anything else (including extensionless names) the WhatsApp
/// plaintext export.
pub fn platform_for_file(file_name: &str) -> Platform {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") => Platform::Instagram,
        _ => Platform::WhatsApp,
    }
}
