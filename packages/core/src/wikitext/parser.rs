//! Wikitext → forum parser
//!
//! Reads back the blocks written by [`crate::wikitext::serializer`]. The
//! reader is driven by the marker comments and container tags; whitespace
//! between them (line breaks, indentation) is not significant, so pages
//! that were re-indented by hand still load. Thread content is taken
//! verbatim from between its `start content` / `end content` markers.

use crate::models::{Forum, Thread, ThreadId, ThreadMeta};
use crate::utils::decode_attributes;
use crate::wikitext::serializer::LATEST_TOKEN;
use crate::wikitext::ParseError;
use std::num::NonZeroU32;

const FORUM_START: &str = "<!-- start forum#";
const THREAD_START: &str = "<!-- start thread#";
const MARKER_CLOSE: &str = " -->";
const CONTENT_START: &str = "<!-- start content -->";
const CONTENT_END: &str = "<!-- end content -->";
const CONTENT_OPEN_TAG: &str = "<div class=\"forum-content\">";
const CLOSE_TAG: &str = "</div>";

/// Parse every forum block found in the page text
///
/// Text outside the forum blocks (the document header, surrounding page
/// content) is ignored. A page without forum markers yields no forums.
///
/// # Examples
///
/// ```
/// use wikiforum_core::wikitext::{parse_document, serialize_document};
/// use wikiforum_core::models::{Forum, Thread};
/// use chrono::Utc;
///
/// let mut forum = Forum::new(Some(1));
/// forum.threads.push(Thread::new(Some("1".into()), "Hello", "Alice", "2024-01-01T00:00:00Z"));
///
/// let text = serialize_document(&[forum.clone()], "Alice", Utc::now());
/// assert_eq!(parse_document(&text).unwrap(), vec![forum]);
/// ```
pub fn parse_document(text: &str) -> Result<Vec<Forum>, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut forums = Vec::new();

    while let Some(start) = cursor.seek(FORUM_START) {
        forums.push(parse_forum(&mut cursor, start)?);
    }

    tracing::debug!("Parsed {} forum(s) from {} bytes", forums.len(), text.len());
    Ok(forums)
}

fn parse_forum(cursor: &mut Cursor<'_>, start: usize) -> Result<Forum, ParseError> {
    let marker = cursor
        .take_until(MARKER_CLOSE)
        .ok_or_else(|| ParseError::unterminated(FORUM_START, start))?;

    let id = if marker == LATEST_TOKEN {
        None
    } else {
        let id = marker
            .parse::<NonZeroU32>()
            .map_err(|_| ParseError::invalid_forum_id(marker))?;
        Some(id)
    };

    cursor.skip_whitespace();
    let tag = cursor.read_open_tag()?;

    let threads = parse_thread_list(cursor)?;
    cursor.expect(CLOSE_TAG)?;

    cursor.skip_whitespace();
    let end_marker = format!("<!-- end forum#{} -->", marker);
    if !cursor.eat(&end_marker) {
        return Err(ParseError::unterminated(format!("forum#{}", marker), start));
    }

    Ok(Forum {
        id,
        meta: decode_attributes(tag),
        threads,
    })
}

/// Read consecutive thread blocks until something else follows
fn parse_thread_list(cursor: &mut Cursor<'_>) -> Result<Vec<Thread>, ParseError> {
    let mut threads = Vec::new();

    loop {
        cursor.skip_whitespace();
        let start = cursor.pos;
        if !cursor.eat(THREAD_START) {
            break;
        }
        threads.push(parse_thread(cursor, start)?);
    }

    Ok(threads)
}

fn parse_thread(cursor: &mut Cursor<'_>, start: usize) -> Result<Thread, ParseError> {
    let marker = cursor
        .take_until(MARKER_CLOSE)
        .ok_or_else(|| ParseError::unterminated(THREAD_START, start))?;

    cursor.skip_whitespace();
    let tag = cursor.read_open_tag()?;

    cursor.skip_whitespace();
    cursor.expect(CONTENT_OPEN_TAG)?;
    cursor.skip_whitespace();
    if !cursor.eat(CONTENT_START) {
        return Err(ParseError::missing_content(marker));
    }

    let content = if cursor.eat(CONTENT_END) {
        ""
    } else {
        cursor.eat("\n");
        if cursor.eat(CONTENT_END) {
            ""
        } else {
            cursor
                .take_until(&format!("\n{}", CONTENT_END))
                .ok_or_else(|| ParseError::missing_content(marker))?
        }
    };

    cursor.skip_whitespace();
    cursor.expect(CLOSE_TAG)?;

    let threads = parse_thread_list(cursor)?;
    cursor.expect(CLOSE_TAG)?;

    cursor.skip_whitespace();
    let end_marker = format!("<!-- end thread#{} -->", marker);
    if !cursor.eat(&end_marker) {
        return Err(ParseError::unterminated(format!("thread#{}", marker), start));
    }

    let id = (marker != LATEST_TOKEN).then(|| ThreadId::from(marker));

    Ok(Thread {
        id,
        meta: ThreadMeta::from_attributes(decode_attributes(tag)),
        content: content.to_string(),
        threads,
    })
}

/// Forward-only reader over the page text
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Move past the next occurrence of `token`, returning where it began
    fn seek(&mut self, token: &str) -> Option<usize> {
        let found = self.pos + self.rest().find(token)?;
        self.pos = found + token.len();
        Some(found)
    }

    /// Return the text up to `token` and move past the token
    fn take_until(&mut self, token: &str) -> Option<&'a str> {
        let rest = self.rest();
        let index = rest.find(token)?;
        self.pos += index + token.len();
        Some(&rest[..index])
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.eat(token) {
            Ok(())
        } else {
            Err(ParseError::malformed(token, self.pos))
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Read an opening `<div …>` tag, honouring quoted attribute values
    fn read_open_tag(&mut self) -> Result<&'a str, ParseError> {
        let rest = self.rest();
        if !rest.starts_with("<div") {
            return Err(ParseError::malformed("<div>", self.pos));
        }

        let mut in_quotes = false;
        for (index, c) in rest.char_indices() {
            match c {
                '"' => in_quotes = !in_quotes,
                '>' if !in_quotes => {
                    self.pos += index + 1;
                    return Ok(&rest[..=index]);
                }
                _ => {}
            }
        }

        Err(ParseError::unterminated("<div", self.pos))
    }
}
