//! Plain-text outline of a page's forums

use std::fmt::Write;
use wikiforum_core::models::{Forum, Thread};

/// Longest content preview shown per thread, in characters
const PREVIEW_CHARS: usize = 60;

/// One line per forum, then one indented line per thread in display order
///
/// ```text
/// forum#1 Sandbox talk (3 threads)
///   #1 Alice @ 2024-01-01T00:00:00.000Z: Hi
///   #2 Bob @ 2024-01-02T00:00:00.000Z: Hello
///     #2-1 Carol @ 2024-01-03T00:00:00.000Z: Hey Bob
/// ```
pub fn render_outline(forums: &[Forum]) -> String {
    let mut out = String::new();

    for forum in forums {
        let label = forum.id.map_or_else(|| "latest".to_string(), |id| id.to_string());
        let _ = writeln!(
            out,
            "forum#{} {} ({} threads)",
            label,
            forum.title(),
            forum.thread_count()
        );
        for thread in &forum.threads {
            outline_thread(&mut out, thread, 1);
        }
    }

    out
}

fn outline_thread(out: &mut String, thread: &Thread, depth: usize) {
    let id = thread.id.as_ref().map_or("latest", |id| id.as_str());
    let meta = &thread.meta;

    let _ = write!(
        out,
        "{}#{} {} @ {}",
        "  ".repeat(depth),
        id,
        meta.author_or_unsigned(),
        meta.published().unwrap_or("?")
    );
    if meta.last_editor() != meta.author_or_unsigned() || meta.modified() != meta.published() {
        let _ = write!(out, " (edited by {})", meta.last_editor());
    }
    let _ = writeln!(out, ": {}", preview(&thread.content));

    for reply in &thread.threads {
        outline_thread(out, reply, depth + 1);
    }
}

/// First line of the content, cut to `PREVIEW_CHARS`
fn preview(content: &str) -> String {
    let line = content.lines().next().unwrap_or("").trim();
    if line.chars().count() <= PREVIEW_CHARS {
        return line.to_string();
    }
    let cut: String = line.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikiforum_core::models::ThreadMeta;

    fn thread(id: &str, user: &str, content: &str) -> Thread {
        Thread::new(Some(id.into()), content, user, "2024-01-01T00:00:00.000Z")
    }

    #[test]
    fn test_outline_nests_replies() {
        let mut bob = thread("2", "Bob", "Hello\nsecond line");
        bob.threads.push(thread("2-1", "Carol", "Hey Bob"));

        let mut forum = Forum::new(Some(1));
        forum.meta.insert("title", "Sandbox talk");
        forum.threads = vec![thread("1", "Alice", "Hi"), bob];

        assert_eq!(
            render_outline(&[forum]),
            "forum#1 Sandbox talk (3 threads)\n\
             \x20 #1 Alice @ 2024-01-01T00:00:00.000Z: Hi\n\
             \x20 #2 Bob @ 2024-01-01T00:00:00.000Z: Hello\n\
             \x20   #2-1 Carol @ 2024-01-01T00:00:00.000Z: Hey Bob\n"
        );
    }

    #[test]
    fn test_outline_shows_fallbacks_and_editor() {
        let mut edited = Thread {
            id: None,
            meta: ThreadMeta::default(),
            content: "x".repeat(80),
            threads: Vec::new(),
        };
        edited.meta.touch("Mod", "2024-02-01T00:00:00.000Z");

        let mut forum = Forum::new(None);
        forum.threads.push(edited);

        let outline = render_outline(&[forum]);
        assert!(outline.starts_with("forum#latest [UNTITLED] Forum Topic #"));
        assert!(outline.contains("#latest unsigned @ ? (edited by Mod): "));
        assert!(outline.trim_end().ends_with(&format!("{}…", "x".repeat(60))));
    }
}
