//! Integration tests: full ingest → normalize → partition → search
//! pipeline over realistic export fixtures.

use chatlens::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

const WHATSAPP_EXPORT: &str = "\
01/01/24, 10:30 am - Alice: Hello
world
01/01/24, 10:31 am - Bob: Hi";

const WHATSAPP_LONGER: &str = "\
01/01/24, 10:30 am - Alice: Morning!
01/01/24, 10:31 am - Bob: Morning. Coffee later?
01/01/24, 10:32 am - Alice: Sure, the usual place
02/01/24, 9:15 am - Bob: Running late today
02/01/24, 9:16 am - Alice: No problem";

fn instagram_block(sender: &str, body: &str, time: &str, reactions: &str) -> String {
    format!(
        r#"<div class="pam _3-95 _2ph- _a6-g">
  <h2 class="_3-95 _2pim _a6-h _a6-i">{sender}</h2>
  <div class="_3-95 _a6-p"><div><div></div><div>{body}</div></div></div>
  {reactions}
  <div class="_3-94 _a6-o">{time}</div>
</div>"#
    )
}

fn instagram_export() -> String {
    // Export order is newest-first.
    let newest = instagram_block(
        "Priya",
        "See you soon<br/>Bye!",
        "Jan 5, 2024 9:15 pm",
        r#"<ul class="_a6-q"><li><span>❤Rahul</span></li></ul>"#,
    );
    let oldest = instagram_block("Rahul", "Hello there", "Jan 5, 2024 9:10 pm", "");
    format!("<html><body>{newest}{oldest}</body></html>")
}

// ============================================================================
// Plaintext pipeline
// ============================================================================

#[test]
fn whatsapp_scenario_two_messages() {
    let mut session = Session::new();
    let report = session
        .ingest(WHATSAPP_EXPORT, "chat.txt")
        .unwrap();

    assert_eq!(report.added, 2);

    let messages = session.messages();
    assert_eq!(messages[0].date, "01/01/24");
    assert_eq!(messages[0].time, "10:30 am");
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[0].body, "Hello\nworld");
    assert_eq!(messages[1].date, "01/01/24");
    assert_eq!(messages[1].time, "10:31 am");
    assert_eq!(messages[1].sender, "Bob");
    assert_eq!(messages[1].body, "Hi");

    assert_eq!(session.local_user(), Some("Alice"));
}

#[test]
fn whatsapp_reingest_leaves_collection_unchanged() {
    let mut session = Session::new();
    session
        .ingest(WHATSAPP_EXPORT, "chat.txt")
        .unwrap();
    assert_eq!(session.messages().len(), 2);

    let report = session
        .ingest(WHATSAPP_EXPORT, "chat.txt")
        .unwrap();
    assert_eq!(session.messages().len(), 2);
    assert_eq!(report.duplicates, 2);
    assert_eq!(report.added, 0);
}

#[test]
fn whatsapp_conversation_summary() {
    let mut session = Session::new();
    session
        .ingest(WHATSAPP_LONGER, "chat.txt")
        .unwrap();

    let visible = session.messages_for(Platform::WhatsApp);
    let conversations = partition(&visible, session.local_user());

    assert_eq!(conversations.len(), 1);
    let convo = &conversations[0];
    assert_eq!(convo.counterpart, "Bob");
    assert_eq!(convo.messages.len(), 5);
    assert_eq!(convo.preview, "No problem");
    assert_eq!(convo.last_activity, "9:16 am");
}

#[test]
fn whatsapp_date_groups_follow_source_order() {
    let mut session = Session::new();
    session
        .ingest(WHATSAPP_LONGER, "chat.txt")
        .unwrap();

    let thread = thread_messages(
        session.messages(),
        session.local_user(),
        "Bob",
    );
    let groups = group_by_date(&thread);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "01/01/24");
    assert_eq!(groups[0].1.len(), 3);
    assert_eq!(groups[1].0, "02/01/24");
    assert_eq!(groups[1].1.len(), 2);
}

// ============================================================================
// Markup pipeline
// ============================================================================

#[test]
fn instagram_export_parses_chronologically() {
    let mut session = Session::new();
    let report = session
        .ingest(&instagram_export(), "messages.html")
        .unwrap();

    assert_eq!(report.platform, Platform::Instagram);
    assert_eq!(report.added, 2);

    let messages = session.messages();
    assert_eq!(messages[0].sender, "Rahul");
    assert_eq!(messages[0].body, "Hello there");
    assert_eq!(messages[1].sender, "Priya");
    assert_eq!(messages[1].body, "See you soon\nBye!");
    assert_eq!(messages[1].date, "Jan 5, 2024");
    assert_eq!(messages[1].time, "9:15 pm");
    assert_eq!(messages[1].reactions.len(), 1);
    assert_eq!(messages[1].reactions[0].user, "Rahul");

    // Oldest message is first in chronological order, so its sender
    // becomes the local user.
    assert_eq!(session.local_user(), Some("Rahul"));
}

#[test]
fn instagram_thread_summary() {
    let mut session = Session::new();
    session
        .ingest(&instagram_export(), "messages.html")
        .unwrap();

    let visible = session.messages_for(Platform::Instagram);
    let conversations = partition(&visible, session.local_user());

    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].counterpart, "Priya");
    assert_eq!(conversations[0].preview, "See you soon\nBye!");
    assert_eq!(conversations[0].last_activity, "9:15 pm");
}

// ============================================================================
// Cross-format sessions
// ============================================================================

#[test]
fn platforms_stay_separated() {
    let mut session = Session::new();
    session
        .ingest(WHATSAPP_EXPORT, "chat.txt")
        .unwrap();
    session
        .ingest(&instagram_export(), "messages.html")
        .unwrap();

    assert_eq!(session.messages().len(), 4);
    assert_eq!(session.messages_for(Platform::WhatsApp).len(), 2);
    assert_eq!(session.messages_for(Platform::Instagram).len(), 2);
}

#[test]
fn local_user_unchanged_by_second_format() {
    let mut session = Session::new();
    session
        .ingest(WHATSAPP_EXPORT, "chat.txt")
        .unwrap();
    assert_eq!(session.local_user(), Some("Alice"));

    // The markup batch starts with a different sender; the guard holds.
    session
        .ingest(&instagram_export(), "messages.html")
        .unwrap();
    assert_eq!(session.local_user(), Some("Alice"));
}

// ============================================================================
// Search over ingested threads
// ============================================================================

#[test]
fn search_over_active_thread() {
    let mut session = Session::new();
    session
        .ingest(WHATSAPP_LONGER, "chat.txt")
        .unwrap();

    let visible = session.messages_for(Platform::WhatsApp);
    let thread = thread_messages(&visible, session.local_user(), "Bob");

    let mut nav = SearchNavigator::new();
    nav.set_query("morning", &thread);

    assert_eq!(nav.matches(), &[0, 1]);
    assert_eq!(nav.counter(), (1, 2));

    let spans = highlight(&thread[0].body, "morning");
    assert!(spans.iter().any(|s| s.matched && s.text == "Morning"));
}

// ============================================================================
// File-based ingestion
// ============================================================================

#[test]
fn ingest_file_reads_and_detects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    std::fs::write(&path, WHATSAPP_EXPORT).unwrap();

    let mut session = Session::new();
    let report = session.ingest_file(&path).unwrap();

    assert_eq!(report.platform, Platform::WhatsApp);
    assert_eq!(report.added, 2);
}

#[test]
fn ingest_missing_file_is_io_error() {
    let mut session = Session::new();
    let err = session
        .ingest_file(std::path::Path::new("does/not/exist.txt"))
        .unwrap_err();
    assert!(matches!(err, ChatlensError::Io(_)));
}
