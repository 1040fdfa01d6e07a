//! Chat export parsers.
//!
//! One parser per supported export format:
//! - [`WhatsAppParser`] — plaintext line-oriented export
//! - [`InstagramParser`] — HTML markup export
//!
//! Both implement the unified [`Parser`](crate::parser::Parser) trait.

mod instagram;
mod whatsapp;

pub use instagram::InstagramParser;
pub use whatsapp::WhatsAppParser;
