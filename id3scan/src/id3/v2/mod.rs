//! ID3v2 items
//!
//! Only ID3v2.2 and ID3v2.3 tags are decoded. Any other major version is reported as
//! [`ErrorKind::UnsupportedVersion`](crate::error::ErrorKind::UnsupportedVersion).
//!
//! # ID3v2 notes
//!
//! ## Sizes
//!
//! The tag size in the header is a synchsafe integer, see [`synchsafe::decode_size`]. Frame sizes
//! are plain big-endian integers in both ID3v2.2 and ID3v2.3.
//!
//! ## Frames
//!
//! Only a handful of text and comment frames are mapped to a
//! [`MetadataRecord`](crate::record::MetadataRecord), see [`field_for_frame`]. Every other frame
//! is read and ignored.

mod content;
mod frame;
mod header;
mod mappings;
mod read;
pub mod synchsafe;

pub use frame::{Frame, FrameHeader, FrameLayout, Frames};
pub use header::{ID3V2_HEADER_SIZE, Id3v2Header, Id3v2TagFlags, Id3v2Version};
pub use mappings::field_for_frame;
pub use read::read_frames;
