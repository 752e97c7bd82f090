use super::header::Id3v2Version;
use crate::error::{ErrorKind, Result, ScanError};
use crate::util::text::latin1_decode;

use std::io::Read;

/// The frame header layout of an ID3v2 version
///
/// | Layout | Identifier | Size      | Flags |
/// |--------|------------|-----------|-------|
/// | `V2_2` | 3 bytes    | 3 bytes   | -     |
/// | `V2_3` | 4 bytes    | 4 bytes   | 2     |
///
/// Sizes are plain big-endian integers, not synchsafe. Some readers add the size bytes together
/// instead, which only agrees with the big-endian value while every byte but the last is zero
/// (sizes below 256).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum FrameLayout {
	/// ID3v2.2 frames
	V2_2,
	/// ID3v2.3 frames
	V2_3,
}

impl FrameLayout {
	/// The number of body bytes each frame is accounted beyond its value
	///
	/// This is the same for both layouts, regardless of the actual header length, and matches
	/// how the tag body length is derived from the header size.
	pub const ACCOUNTED_OVERHEAD: i64 = 6;

	/// Length of the frame identifier
	pub const fn id_len(self) -> usize {
		match self {
			Self::V2_2 => 3,
			Self::V2_3 => 4,
		}
	}

	/// Length of the frame size field
	pub const fn size_len(self) -> usize {
		match self {
			Self::V2_2 => 3,
			Self::V2_3 => 4,
		}
	}

	/// Length of the frame flags
	pub const fn flags_len(self) -> usize {
		match self {
			Self::V2_2 => 0,
			Self::V2_3 => 2,
		}
	}

	/// Length of the entire frame header
	pub const fn header_len(self) -> usize {
		self.id_len() + self.size_len() + self.flags_len()
	}
}

impl From<Id3v2Version> for FrameLayout {
	fn from(version: Id3v2Version) -> Self {
		match version {
			Id3v2Version::V2 => Self::V2_2,
			Id3v2Version::V3 => Self::V2_3,
		}
	}
}

/// The header of a single frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
	/// The frame identifier, such as `"TT2"` or `"TIT2"`
	pub id: String,
	/// The declared size of the value
	pub size: u32,
	/// The frame flags (always 0 for ID3v2.2)
	pub flags: u16,
}

impl FrameHeader {
	fn parse(header: &[u8], layout: FrameLayout) -> Self {
		let (id, rest) = header.split_at(layout.id_len());
		let (size, flags) = rest.split_at(layout.size_len());

		Self {
			id: latin1_decode(id),
			size: size.iter().fold(0, |acc, b| (acc << 8) | u32::from(*b)),
			flags: flags.iter().fold(0, |acc, b| (acc << 8) | u16::from(*b)),
		}
	}
}

/// A frame read from a tag body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
	/// The frame header
	pub header: FrameHeader,
	/// The raw frame value
	pub value: Vec<u8>,
}

/// An iterator over the frames of an ID3v2 tag body
///
/// Each frame consumes [`FrameLayout::ACCOUNTED_OVERHEAD`] + its size from the remaining body
/// length, and iteration ends once that count reaches zero or below. Iteration also ends at
/// padding (a null identifier) or when the stream runs out while reading a frame header.
///
/// A frame declaring more bytes than remain yields [`ErrorKind::TruncatedFrame`], after which
/// the iterator is exhausted.
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::{FrameLayout, Frames};
///
/// # fn main() -> id3scan::error::Result<()> {
/// let body = b"TT2\x00\x00\x05HelloTAL\x00\x00\x03Foo";
///
/// let mut frames = Frames::new(&body[..], FrameLayout::V2_2, body.len() as i64);
///
/// let title = frames.next().unwrap()?;
/// assert_eq!(title.header.id, "TT2");
/// assert_eq!(title.value, b"Hello");
///
/// let album = frames.next().unwrap()?;
/// assert_eq!(album.value, b"Foo");
///
/// assert!(frames.next().is_none());
/// # Ok(()) }
/// ```
pub struct Frames<R> {
	reader: R,
	layout: FrameLayout,
	remaining: i64,
	done: bool,
}

impl<R> Frames<R>
where
	R: Read,
{
	/// Create a new `Frames` over `reader`, with `remaining` body bytes
	pub fn new(reader: R, layout: FrameLayout, remaining: i64) -> Self {
		Self {
			reader,
			layout,
			remaining,
			done: false,
		}
	}

	fn read_frame(&mut self) -> Result<Option<Frame>> {
		let mut header = [0; 10];
		let header = &mut header[..self.layout.header_len()];

		match self.reader.read_exact(header) {
			Ok(()) => {},
			Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
				log::debug!("Reached the end of the tag while reading a frame header");
				return Ok(None);
			},
			Err(e) => return Err(e.into()),
		}

		// Assume we just started reading padding
		if header[0] == 0 {
			log::trace!("Found padding, {} body bytes remaining", self.remaining);
			return Ok(None);
		}

		let header = FrameHeader::parse(header, self.layout);

		let accounted = FrameLayout::ACCOUNTED_OVERHEAD + i64::from(header.size);
		if accounted > self.remaining {
			return Err(truncated(header, self.remaining));
		}

		log::trace!("Reading frame \"{}\" of size {}", header.id, header.size);

		let mut value = Vec::new();
		self.reader
			.by_ref()
			.take(u64::from(header.size))
			.read_to_end(&mut value)?;

		if value.len() != header.size as usize {
			return Err(truncated(header, self.remaining));
		}

		self.remaining -= accounted;

		Ok(Some(Frame { header, value }))
	}
}

fn truncated(header: FrameHeader, remaining: i64) -> ScanError {
	ScanError::new(ErrorKind::TruncatedFrame {
		id: header.id,
		size: header.size,
		remaining,
	})
}

impl<R> Iterator for Frames<R>
where
	R: Read,
{
	type Item = Result<Frame>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.remaining <= 0 {
			return None;
		}

		match self.read_frame() {
			Ok(Some(frame)) => Some(Ok(frame)),
			Ok(None) => {
				self.done = true;
				None
			},
			Err(e) => {
				self.done = true;
				Some(Err(e))
			},
		}
	}
}
