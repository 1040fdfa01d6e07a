//! Property-based tests for chatlens.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use chatlens::conversation::{PREVIEW_CHARS, partition, truncate_preview};
use chatlens::parsers::WhatsAppParser;
use chatlens::prelude::*;
use chatlens::search::{contains_ci, highlight};

/// Generate a random sender name that the line grammar accepts
/// (non-empty, no colon, no leading/trailing whitespace).
fn arb_sender() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "User123".to_string(),
        "Иван".to_string(),
        "Mom ❤️".to_string(),
        "+91 98765 43210".to_string(),
    ])
}

/// Generate a body that fits on a single export line (no newlines, and
/// non-blank so the line keeps its trailing group).
fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "How are you?".to_string(),
        "meeting at 10:30 am: room B".to_string(),
        "Привет мир".to_string(),
        "🎉🔥 emoji".to_string(),
        "a".repeat(200),
    ])
}

fn arb_record() -> impl Strategy<Value = (String, String)> {
    (arb_sender(), arb_body())
}

/// Render records as a plaintext export, with distinct timestamps so
/// no two records collapse as duplicates.
fn render_export(records: &[(String, String)]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, (sender, body))| {
            format!(
                "{:02}/{:02}/24, {}:{:02} am - {}: {}",
                (i % 28) + 1,
                (i / 28 % 12) + 1,
                (i % 12) + 1,
                i % 60,
                sender,
                body
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // LINE GRAMMAR PROPERTIES
    // ============================================

    /// Every well-formed line yields exactly one record with the
    /// original sender and body.
    #[test]
    fn parse_recovers_every_record(records in prop::collection::vec(arb_record(), 1..20)) {
        let export = render_export(&records);
        let parsed = WhatsAppParser::new().parse_str(&export).unwrap();

        prop_assert_eq!(parsed.len(), records.len());
        for (raw, (sender, body)) in parsed.iter().zip(&records) {
            prop_assert_eq!(&raw.sender, sender);
            prop_assert_eq!(&raw.body, body);
        }
    }

    /// File order is preserved.
    #[test]
    fn parse_preserves_order(bodies in prop::collection::vec(arb_body(), 1..20)) {
        let records: Vec<(String, String)> =
            bodies.iter().map(|b| ("Alice".to_string(), b.clone())).collect();
        let parsed = WhatsAppParser::new().parse_str(&render_export(&records)).unwrap();

        let out: Vec<&str> = parsed.iter().map(|r| r.body.as_str()).collect();
        let expected: Vec<&str> = bodies.iter().map(String::as_str).collect();
        prop_assert_eq!(out, expected);
    }

    /// Malformed lines between records fold into the preceding body,
    /// never into new records.
    #[test]
    fn continuations_never_add_records(
        records in prop::collection::vec(arb_record(), 1..10),
        extra in prop::sample::select(vec!["stray line", "another: stray", "……"]),
    ) {
        let mut export = render_export(&records);
        export.push('\n');
        export.push_str(extra);
        let parsed = WhatsAppParser::new().parse_str(&export).unwrap();

        prop_assert_eq!(parsed.len(), records.len());
        prop_assert!(parsed.last().unwrap().body.ends_with(extra));
    }

    // ============================================
    // SESSION PROPERTIES
    // ============================================

    /// Re-ingesting the same export never grows the collection.
    #[test]
    fn reingest_is_idempotent(records in prop::collection::vec(arb_record(), 1..15)) {
        let export = render_export(&records);
        let mut session = Session::new();

        session.ingest(&export, "chat.txt").unwrap();
        let after_first = session.messages().len();
        let report = session.ingest(&export, "chat.txt").unwrap();

        prop_assert_eq!(session.messages().len(), after_first);
        prop_assert_eq!(report.added, 0);
        prop_assert_eq!(report.duplicates, after_first);
    }

    /// The local user is always the first record's sender.
    #[test]
    fn local_user_is_first_sender(records in prop::collection::vec(arb_record(), 1..15)) {
        let mut session = Session::new();
        session.ingest(&render_export(&records), "chat.txt").unwrap();

        prop_assert_eq!(session.local_user(), Some(records[0].0.as_str()));
    }

    // ============================================
    // CONVERSATION PROPERTIES
    // ============================================

    /// Partitioning never loses or duplicates a message.
    #[test]
    fn partition_conserves_messages(records in prop::collection::vec(arb_record(), 1..20)) {
        let mut session = Session::new();
        session.ingest(&render_export(&records), "chat.txt").unwrap();

        let convos = partition(session.messages(), session.local_user());
        let total: usize = convos.iter().map(|c| c.messages.len()).sum();
        prop_assert_eq!(total, session.messages().len());
    }

    /// Previews never exceed the cap plus the ellipsis.
    #[test]
    fn preview_is_bounded(body in arb_body()) {
        let preview = truncate_preview(&body);
        prop_assert!(preview.chars().count() <= PREVIEW_CHARS + 3);
        if body.chars().count() <= PREVIEW_CHARS {
            prop_assert_eq!(preview, body);
        }
    }

    // ============================================
    // SEARCH PROPERTIES
    // ============================================

    /// Highlight spans always reassemble into the input text.
    #[test]
    fn highlight_partitions_text(text in arb_body(), query in arb_body()) {
        let joined: String = highlight(&text, &query).into_iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }

    /// The membership test and the highlighter always agree.
    #[test]
    fn contains_agrees_with_highlight(text in arb_body(), query in arb_sender()) {
        let any_match = highlight(&text, &query).iter().any(|s| s.matched);
        prop_assert_eq!(contains_ci(&text, &query), any_match);
    }

    /// A body always contains itself, regardless of letter case.
    #[test]
    fn body_matches_itself_case_insensitively(body in arb_body()) {
        prop_assert!(contains_ci(&body, &body.to_lowercase()));
        prop_assert!(contains_ci(&body.to_uppercase(), &body));
    }
}
