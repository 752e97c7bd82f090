//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! See also: [`Id3v1Tag`] and [`Id3v1ExtendedTag`]
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte, an index into a list of genres this crate does not
//! provide. The index is preserved as-is in [`Genre::Index`](crate::record::Genre::Index).
//!
//! ## Extended tags
//!
//! An extended (`TAG+`) block is a 227 byte block that sits directly before the 128 byte ID3v1 tag.

pub(crate) mod constants;
mod extended;
mod read;
mod tag;

pub use constants::{ID3V1_EXTENDED_SIZE, ID3V1_SIZE};
pub use extended::{Id3v1ExtendedTag, PlayTime, Speed};
pub use tag::Id3v1Tag;
