//! ID3 specific items
//!
//! ID3 does things differently than other formats, it has no single place in a file. ID3v2 tags
//! sit at the start of the stream, while ID3v1 (and its extended block) sit at the very end.
//!
//! See [`detect`](crate::probe::detect) for how the tag to read is chosen.

pub mod v1;
pub mod v2;
