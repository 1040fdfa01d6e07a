//! # chatlens CLI
//!
//! Terminal front end for the chatlens library: ingests export files,
//! prints the conversation sidebar, the active thread, and search
//! results with the n/m match counter.

use std::process;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::config::SessionConfig;
use chatlens::conversation::{group_by_date, partition, thread_messages};
use chatlens::parser::Platform;
use chatlens::search::{SearchNavigator, highlight};
use chatlens::session::Session;
use chatlens::{ChatlensError, Message};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();

    let mut config = SessionConfig::new();
    for alias in &args.alias {
        let (name, display) = split_alias(alias)?;
        config = config.with_alias(name, display);
    }

    let mut session = Session::with_config(config);

    println!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // The displayed platform follows the last ingested file unless
    // pinned with --platform.
    let pinned = args.platform.map(Platform::from);
    let mut active_platform = pinned.unwrap_or(Platform::WhatsApp);

    for path in &args.files {
        let report = session.ingest_file(path)?;
        println!(
            "📂 {}: {} parsed, {} added, {} duplicates ({})",
            path.display(),
            report.parsed,
            report.added,
            report.duplicates,
            report.platform
        );
        if pinned.is_none() {
            active_platform = report.platform;
        }
    }
    println!();

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.messages())?);
        return Ok(());
    }

    let visible = session.messages_for(active_platform);
    if visible.is_empty() {
        println!(
            "No {} messages. Upload a .{} export to view them here.",
            active_platform,
            active_platform.default_extension()
        );
        return Ok(());
    }

    let conversations = partition(&visible, session.local_user());

    println!("Conversations ({}):", active_platform);
    for convo in &conversations {
        println!(
            "   {:<24} {:>10}  {}",
            convo.counterpart, convo.last_activity, convo.preview
        );
    }
    println!();

    let Some(first) = conversations.first() else {
        return Ok(());
    };
    let active = args
        .chat
        .clone()
        .unwrap_or_else(|| first.counterpart.clone());
    let thread = thread_messages(&visible, session.local_user(), &active);

    if let Some(query) = &args.search {
        print_search(session.search_navigator(), &thread, query, &active);
    } else {
        print_thread(&thread, session.local_user(), &active);
    }

    Ok(())
}

fn print_thread(thread: &[Message], local_user: Option<&str>, active: &str) {
    println!("👤 {}", active);
    for (date, msgs) in group_by_date(thread) {
        println!("  ── {} ──", date);
        for msg in msgs {
            let arrow = if local_user == Some(msg.sender.as_str()) {
                "→"
            } else {
                "←"
            };
            // Multiline bodies are indented under their first line.
            let body = msg.body.replace('\n', "\n        ");
            println!("  {} {:>10} {}: {}", arrow, msg.time, msg.sender, body);
            if !msg.reactions.is_empty() {
                let glyphs: Vec<&str> = msg.reactions.iter().map(|r| r.emoji.as_str()).collect();
                println!("        [{}]", glyphs.join(" "));
            }
        }
    }
}

fn print_search(mut nav: SearchNavigator, thread: &[Message], query: &str, active: &str) {
    nav.set_query(query, thread);

    let (current, total) = nav.counter();
    println!("👤 {} \"{}\": {}/{}", active, query, current, total);

    for &idx in nav.matches() {
        let msg = &thread[idx];
        let marker = if nav.is_current(idx) { "▶" } else { " " };
        println!(
            " {} [{} {}] {}: {}",
            marker,
            msg.date,
            msg.time,
            msg.sender,
            render_highlighted(&msg.body, query)
        );
    }
}

/// Renders highlight spans for a terminal: matches are wrapped in
/// guillemets since the display styling itself lives outside the core.
fn render_highlighted(text: &str, query: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|span| {
            if span.matched {
                format!("«{}»", span.text)
            } else {
                span.text
            }
        })
        .collect()
}

fn split_alias(input: &str) -> Result<(&str, &str), ChatlensError> {
    input
        .split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| ChatlensError::InvalidAlias {
            input: input.to_string(),
        })
}
