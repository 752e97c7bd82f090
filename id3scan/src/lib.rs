//! Read-only extraction of ID3 metadata.
//!
//! id3scan locates a single ID3 tag in a byte source and decodes its basic fields (title, artist,
//! album, year, comment, track, and genre) into a [`MetadataRecord`](record::MetadataRecord).
//!
//! # Supported tags
//!
//! | Tag             | Location           | Genre representation                  |
//! |-----------------|--------------------|---------------------------------------|
//! | ID3v2.2         | Start of the file  | [`Genre::Text`](record::Genre::Text)  |
//! | ID3v2.3         | Start of the file  | [`Genre::Text`](record::Genre::Text)  |
//! | ID3v1 extended  | 355 bytes from end | [`Genre::Text`](record::Genre::Text)  |
//! | ID3v1 / ID3v1.1 | 128 bytes from end | [`Genre::Index`](record::Genre::Index) |
//!
//! When multiple tags are present, only the first one in that table is read. Writing tags is not
//! supported.
//!
//! # Examples
//!
//! ## Reading from a path
//!
//! ```rust,no_run
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ParseOptions;
//! use id3scan::read_from_path;
//!
//! match read_from_path("test.mp3", ParseOptions::new())? {
//! 	Some(tagged) => println!("{:?}: {:?}", tagged.location, tagged.record.title),
//! 	None => println!("No tag found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using an existing reader
//!
//! ```rust
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::{ParseOptions, ParsingMode};
//! use id3scan::{TagLocation, read_from};
//! use std::io::Cursor;
//!
//! let mut tag = vec![b'I', b'D', b'3', 2, 0, 0, 0, 0, 0, 22];
//! tag.extend(b"TT2\x00\x00\x05Hello");
//!
//! // We need absolute correctness
//! let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
//!
//! let tagged = read_from(&mut Cursor::new(tag), parse_options)?.unwrap();
//! assert_eq!(tagged.location, TagLocation::V2(2));
//! assert_eq!(tagged.record.title.as_deref(), Some("Hello"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading a specific tag
//!
//! The tag readers can also be used directly, skipping detection.
//!
//! ```rust
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ParseOptions;
//! use id3scan::id3::v1::Id3v1Tag;
//! use std::io::Cursor;
//!
//! let mut source = vec![0; 128];
//! source[..3].copy_from_slice(b"TAG");
//!
//! let id3v1 = Id3v1Tag::read_from(&mut Cursor::new(source), ParseOptions::new())?;
//! assert!(id3v1.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! id3scan logs through the [`log`](https://docs.rs/log) facade. No logger is installed, damaged
//! tags that are recovered from are reported at the `warn` level.

pub mod config;
pub mod error;
pub mod id3;
pub mod io;
pub(crate) mod macros;
pub mod probe;
pub mod record;
mod util;

pub use crate::probe::{TagLocation, TaggedMetadata, detect, read_from, read_from_path};
