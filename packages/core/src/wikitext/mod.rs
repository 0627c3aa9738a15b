//! Wikitext Codec
//!
//! Bidirectional mapping between the forum tree and the annotated text
//! block stored inside a wiki page:
//!
//! - [`serializer`] - forum tree → page text (document header, marker comments)
//! - [`parser`] - page text → forum tree
//!
//! For any well-formed tree `T`, `parse_document(&serialize_document(&[T], ..))`
//! yields `[T]` again.

mod error;
pub mod parser;
pub mod serializer;

pub use error::ParseError;
pub use parser::parse_document;
pub use serializer::{serialize_document, serialize_forum, serialize_thread, LATEST_TOKEN};
