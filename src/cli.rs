//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Source`] - Supported export platforms as a CLI value enum
//!
//! [`Source`] converts into [`Platform`](crate::parser::Platform) so the
//! library itself stays free of CLI framework types.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// View WhatsApp (.txt) and Instagram (.html) chat exports in the
/// terminal: conversations, threads, and full-text search.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt messages.html --platform ig
    chatlens chat.txt --search pizza
    chatlens chat.txt --chat Bob --search hello
    chatlens chat.txt --alias '+44 7700 900123=Mum' --json")]
pub struct Args {
    /// Export files to ingest, in upload order (.html → Instagram,
    /// otherwise WhatsApp)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Platform view to display (defaults to the last ingested file's
    /// platform)
    #[arg(short, long, value_enum)]
    pub platform: Option<Source>,

    /// Conversation to open (defaults to the first one)
    #[arg(short, long, value_name = "NAME")]
    pub chat: Option<String>,

    /// Search the active thread and list the matches
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Map a raw sender name to a display name (repeatable)
    #[arg(long, value_name = "NAME=DISPLAY")]
    pub alias: Vec<String>,

    /// Print the canonical message collection as JSON and exit
    #[arg(long)]
    pub json: bool,
}

/// Supported export platforms.
///
/// Mirrors [`Platform`](crate::parser::Platform) with clap's
/// `ValueEnum` derive for argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Source {
    /// WhatsApp plaintext export
    #[value(name = "whatsapp", alias = "wa")]
    WhatsApp,

    /// Instagram HTML export
    #[value(name = "instagram", alias = "ig")]
    Instagram,
}
