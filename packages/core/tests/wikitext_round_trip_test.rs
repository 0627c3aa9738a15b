//! Integration tests for the wikitext codec
//!
//! Tests cover:
//! - Serialize → parse round trips for nested trees
//! - Unknown metadata and unassigned ids surviving the trip
//! - Re-serializing a parsed page without changes
//! - Pages written by hand with loose whitespace

use chrono::{DateTime, TimeZone, Utc};
use wikiforum_core::wikitext::{parse_document, serialize_document, ParseError};
use wikiforum_core::{Forum, Thread, ThreadMeta};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn thread(id: &str, user: &str, content: &str, replies: Vec<Thread>) -> Thread {
    Thread {
        id: Some(id.into()),
        meta: ThreadMeta::authored(user, "2024-01-01T00:00:00.000Z"),
        content: content.to_string(),
        threads: replies,
    }
}

fn nested_forum() -> Forum {
    let mut forum = Forum::new(Some(1));
    forum.meta.insert("title", "Release planning");
    forum.meta.insert("sticky", "true");
    forum.threads = vec![
        thread("1", "Alice", "When do we ship?", Vec::new()),
        thread(
            "2",
            "Bob",
            "Friday.",
            vec![
                thread(
                    "2-1",
                    "Carol",
                    "Friday works.",
                    vec![thread("2-1-1", "Dan", "Agreed.", Vec::new())],
                ),
                thread("2-2", "Erin", "Monday is safer.", Vec::new()),
            ],
        ),
        thread("3", "Frank", "<b>Bold</b> claim\n\nwith two paragraphs", Vec::new()),
    ];
    forum
}

// =========================================================================
// Round Trip Tests
// =========================================================================

#[test]
fn test_nested_tree_round_trip() {
    let forums = vec![nested_forum()];
    let text = serialize_document(&forums, "Alice", now());

    assert_eq!(parse_document(&text).unwrap(), forums);
}

#[test]
fn test_multiple_forums_round_trip() {
    let mut second = Forum::new(Some(2));
    second.threads = vec![thread("1", "Gina", "Second topic", Vec::new())];
    let forums = vec![nested_forum(), second];

    let text = serialize_document(&forums, "Gina", now());
    assert!(text.contains(" - Total Forums: 2\n"));
    assert_eq!(parse_document(&text).unwrap(), forums);
}

#[test]
fn test_unknown_metadata_survives() {
    let mut forum = nested_forum();
    let op = &mut forum.threads[0];
    op.meta.extra.insert("timeRelease", "2023-12-31T00:00:00.000Z");
    op.meta.extra.insert("pinnedBy", "Mod");

    let text = serialize_document(std::slice::from_ref(&forum), "Alice", now());
    assert!(text.contains(r#"data-pinned-by="Mod""#));

    let parsed = parse_document(&text).unwrap();
    assert_eq!(parsed[0], forum);
    assert_eq!(parsed[0].threads[0].meta.extra.get("pinnedBy"), Some("Mod"));
}

#[test]
fn test_unassigned_ids_round_trip_as_latest() {
    let mut forum = Forum::new(None);
    forum.threads = vec![Thread::new(None, "Draft", "Alice", "2024-01-01T00:00:00.000Z")];

    let text = serialize_document(std::slice::from_ref(&forum), "Alice", now());
    assert!(text.contains("<!-- start forum#latest -->"));
    assert!(text.contains("<!-- start thread#latest -->"));

    assert_eq!(parse_document(&text).unwrap(), vec![forum]);
}

#[test]
fn test_zero_forum_id_round_trips_as_latest() {
    let mut forum = Forum::new(Some(0));
    forum.threads = vec![thread("1", "Alice", "Hi", Vec::new())];

    let text = serialize_document(std::slice::from_ref(&forum), "Alice", now());
    assert!(text.contains("<!-- start forum#latest -->"));
    assert_eq!(parse_document(&text).unwrap(), vec![forum]);
}

#[test]
fn test_reserialize_is_stable() {
    let text = serialize_document(&[nested_forum()], "Alice", now());
    let again = serialize_document(&parse_document(&text).unwrap(), "Alice", now());

    assert_eq!(again, text);
}

// =========================================================================
// Hand-Written Page Tests
// =========================================================================

#[test]
fn test_parse_hand_written_page() {
    let text = r#"<!--
 - WikiForum Container
 -->
<!-- start forum#1 -->
<div class="wiki-forum" data-title="Questions">
  <!-- start thread#1 -->
  <div class="forum-thread" data-user-author="Alice">
    <div class="forum-content">
<!-- start content -->
Anyone?
<!-- end content -->
    </div>
  </div>
  <!-- end thread#1 -->
</div>
<!-- end forum#1 -->
<!-- end WikiForum -->"#;

    let forums = parse_document(text).unwrap();
    assert_eq!(forums.len(), 1);
    assert_eq!(forums[0].title(), "Questions");
    assert_eq!(forums[0].threads[0].content, "Anyone?");
    assert_eq!(forums[0].threads[0].meta.author_or_unsigned(), "Alice");
}

#[test]
fn test_truncated_page_is_rejected() {
    let text = serialize_document(&[nested_forum()], "Alice", now());
    let cut = text.find("<!-- end thread#2-1-1 -->").unwrap();

    let err = parse_document(&text[..cut]).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedBlock { .. }));
}
