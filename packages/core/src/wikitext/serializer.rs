//! Forum → wikitext serializer
//!
//! Renders the discussion tree into the annotated block stored in the page.
//! Marker comments, container tags and line breaks are read back by
//! [`crate::wikitext::parse_document`] and by every existing page reader,
//! so the framing below must not change. Only the header timestamp varies
//! between two renders of the same tree.
//!
//! # Example Output
//!
//! ```text
//! <!--
//!  - WikiForum Container
//!  -
//!  - Total Forums: 1
//!  - Last modiflied: 2024-02-01T00:00:00.000Z
//!  - Last user: Alice
//!  -
//!  - DO NOT EDIT DIRECTLY
//!  -->
//!
//! <!-- start forum#1 -->
//! <div class="wiki-forum" data-title="Hello">
//!
//! <!-- start thread#1 -->
//! <div class="forum-thread" data-user-author="Alice">
//!   <div class="forum-content">
//! <!-- start content -->
//! Hi
//! <!-- end content -->
//!   </div>
//! </div>
//! <!-- end thread#1 -->
//!
//! </div>
//! <!-- end forum#1 -->
//!
//! <!-- end WikiForum -->
//! ```

use crate::models::time::format_timestamp;
use crate::models::{Forum, Thread};
use crate::utils::encode_attributes;
use chrono::{DateTime, Utc};

/// Marker token used when a forum or thread has no id yet
pub const LATEST_TOKEN: &str = "latest";

/// Indentation per nesting level (cosmetic)
const INDENT: &str = "  ";

/// Render every forum of a page, wrapped in the document header
///
/// `user` and `now` are stamped into the header as the last editor and
/// modification time.
pub fn serialize_document(forums: &[Forum], user: &str, now: DateTime<Utc>) -> String {
    let body: String = forums.iter().map(serialize_forum).collect();

    let mut output = String::with_capacity(body.len() + 256);
    output.push_str("<!--\n");
    output.push_str(" - WikiForum Container\n");
    output.push_str(" - \n");
    output.push_str(&format!(" - Total Forums: {}\n", forums.len()));
    output.push_str(&format!(" - Last modiflied: {}\n", format_timestamp(now)));
    output.push_str(&format!(" - Last user: {}\n", user));
    output.push_str(" -\n");
    output.push_str(" - DO NOT EDIT DIRECTLY\n");
    output.push_str(" -->\n");
    output.push_str(&body);
    output.push_str("\n\n<!-- end WikiForum -->");
    output
}

/// Render one forum and all of its threads
pub fn serialize_forum(forum: &Forum) -> String {
    let marker = forum
        .id
        .map_or_else(|| LATEST_TOKEN.to_string(), |id| id.to_string());

    let threads: String = forum
        .threads
        .iter()
        .map(|thread| serialize_thread(thread, 0))
        .collect();

    let mut output = String::with_capacity(threads.len() + 128);
    output.push_str(&format!("\n<!-- start forum#{} -->\n", marker));
    output.push_str(&format!(
        "<div class=\"wiki-forum\" {}>\n",
        encode_attributes(&forum.meta)
    ));
    output.push_str(&threads);
    output.push_str("\n</div>\n");
    output.push_str(&format!("<!-- end forum#{} -->", marker));
    output
}

/// Render a thread and its replies at the given nesting depth
///
/// Top-level threads are rendered at depth 0; replies one level deeper
/// than their parent.
pub fn serialize_thread(thread: &Thread, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    let marker = thread.id.as_ref().map_or(LATEST_TOKEN, |id| id.as_str());

    let replies: String = thread
        .threads
        .iter()
        .map(|reply| serialize_thread(reply, depth + 1))
        .collect();

    let mut output = String::with_capacity(thread.content.len() + replies.len() + 256);
    output.push_str(&format!("\n{}<!-- start thread#{} -->\n", indent, marker));
    output.push_str(&format!(
        "{}<div class=\"forum-thread\" {}>\n",
        indent,
        encode_attributes(&thread.meta.to_attributes())
    ));
    output.push_str(&format!("{}{}<div class=\"forum-content\">\n", indent, INDENT));
    output.push_str("<!-- start content -->\n");
    output.push_str(&thread.content);
    output.push_str("\n<!-- end content -->\n");
    output.push_str(&format!("{}{}</div>", indent, INDENT));
    output.push_str(&replies);
    output.push_str(&format!("\n{}</div>\n", indent));
    output.push_str(&format!("{}<!-- end thread#{} -->\n", indent, marker));
    output
}
