//! Conversation partitioning and thread summaries.
//!
//! Reconstructs distinct two-party threads from a platform-filtered
//! message stream and derives the sidebar summary for each. Threads are
//! recomputed on demand from canonical state; nothing here is cached or
//! incrementally maintained.
//!
//! Known limitation: when the local user's messages appear alongside
//! more than one other sender on a platform, they are all attributed to
//! the first counterpart found. The model assumes one counterpart per
//! platform; it is not a multi-party solution.

use serde::Serialize;

use crate::message::Message;

/// Preview length in visible characters before the ellipsis marker.
pub const PREVIEW_CHARS: usize = 40;

/// Counterpart used when the collection holds only the local user's
/// own messages.
const UNKNOWN_COUNTERPART: &str = "Unknown";

/// A reconstructed thread with one counterpart, plus its sidebar summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    /// The non-local-user identity of the thread.
    pub counterpart: String,
    /// Thread messages in source order (chronological per parser contract).
    pub messages: Vec<Message>,
    /// Last message body truncated to 40 characters, `...` appended only
    /// when truncation occurred.
    pub preview: String,
    /// `time` of the thread's last message.
    pub last_activity: String,
}

/// Partitions a platform-filtered message slice into conversations.
///
/// The thread key for a message is its sender, unless the sender is the
/// local user, in which case it is the first other-party sender found
/// anywhere in the slice (falling back to `"Unknown"`). Distinct keys
/// yield one conversation each, in first-seen order.
///
/// # Example
///
/// ```rust
/// use chatlens::{Message, Platform};
/// use chatlens::conversation::partition;
///
/// let messages = vec![
///     Message::new("01/01/24", "10:30 am", "Alice", "Hello", Platform::WhatsApp),
///     Message::new("01/01/24", "10:31 am", "Bob", "Hi", Platform::WhatsApp),
/// ];
/// let conversations = partition(&messages, Some("Alice"));
///
/// assert_eq!(conversations.len(), 1);
/// assert_eq!(conversations[0].counterpart, "Bob");
/// assert_eq!(conversations[0].messages.len(), 2);
/// ```
pub fn partition(messages: &[Message], local_user: Option<&str>) -> Vec<Conversation> {
    let mut threads: Vec<(String, Vec<Message>)> = Vec::new();

    for msg in messages {
        let key = counterpart_for(msg, messages, local_user);
        match threads.iter_mut().find(|(name, _)| *name == key) {
            Some((_, msgs)) => msgs.push(msg.clone()),
            None => threads.push((key, vec![msg.clone()])),
        }
    }

    threads
        .into_iter()
        .map(|(counterpart, messages)| {
            let (preview, last_activity) = match messages.last() {
                Some(last) => (truncate_preview(&last.body), last.time.clone()),
                None => (String::new(), String::new()),
            };
            Conversation {
                counterpart,
                messages,
                preview,
                last_activity,
            }
        })
        .collect()
}

/// The active thread's flattened display list: the counterpart's
/// messages plus the local user's own, in source order. The local
/// user's messages are included only while the counterpart actually
/// appears in the collection.
pub fn thread_messages(
    messages: &[Message],
    local_user: Option<&str>,
    counterpart: &str,
) -> Vec<Message> {
    let counterpart_present = messages.iter().any(|m| m.sender == counterpart);

    messages
        .iter()
        .filter(|m| {
            m.sender == counterpart
                || (counterpart_present && local_user.is_some_and(|u| m.sender == u))
        })
        .cloned()
        .collect()
}

/// Groups a display list by its opaque date labels, first-seen order.
pub fn group_by_date(messages: &[Message]) -> Vec<(String, Vec<Message>)> {
    let mut groups: Vec<(String, Vec<Message>)> = Vec::new();

    for msg in messages {
        match groups.iter_mut().find(|(date, _)| *date == msg.date) {
            Some((_, msgs)) => msgs.push(msg.clone()),
            None => groups.push((msg.date.clone(), vec![msg.clone()])),
        }
    }

    groups
}

fn counterpart_for(msg: &Message, all: &[Message], local_user: Option<&str>) -> String {
    match local_user {
        Some(user) if msg.sender == user => all
            .iter()
            .find(|m| m.sender != user)
            .map(|m| m.sender.clone())
            .unwrap_or_else(|| UNKNOWN_COUNTERPART.to_string()),
        _ => msg.sender.clone(),
    }
}

/// Cuts `body` to [`PREVIEW_CHARS`] characters, appending `...` when
/// anything was dropped. Counts characters, not bytes, so multibyte
/// text is never split mid-codepoint.
pub fn truncate_preview(body: &str) -> String {
    let mut chars = body.char_indices();
    match chars.nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
