//! Utilities for working with synchsafe integers and unsynchronized ID3v2 content

use crate::error::Result;
use crate::macros::err;

use std::io::Read;

/// Decode the 4 byte synchsafe size found in an ID3v2 header
///
/// Every byte contributes its low 7 bits, with the first byte being the most significant. The
/// high bit of each byte is ignored rather than validated, as some writers fail to clear it.
///
/// The result is always within `0..=0x0FFF_FFFF`.
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::synchsafe::decode_size;
///
/// assert_eq!(decode_size([0x00, 0x00, 0x02, 0x01]), 257);
/// assert_eq!(decode_size([0x7F, 0x7F, 0x7F, 0x7F]), 0x0FFF_FFFF);
/// ```
pub fn decode_size(bytes: [u8; 4]) -> u32 {
	u32::from_be_bytes(bytes).unsynch()
}

/// A reader for unsynchronized content
///
/// When a tag has its unsynchronisation flag set, every `0xFF` byte in the body that could be
/// mistaken for an MPEG sync is followed by an inserted `0x00`. This reader removes them.
///
/// # Examples
///
/// ```rust
/// use std::io::{Cursor, Read};
/// use id3scan::id3::v2::synchsafe::UnsynchronizedStream;
///
/// # fn main() -> id3scan::error::Result<()> {
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
///
/// let mut unsynchronized_reader = UnsynchronizedStream::new(Cursor::new(content));
///
/// let mut unsynchronized_content = Vec::new();
/// unsynchronized_reader.read_to_end(&mut unsynchronized_content)?;
///
/// assert_eq!(unsynchronized_content, [0xFF, 0x1A, 0xFF, 0x15]);
/// # Ok(()) }
/// ```
pub struct UnsynchronizedStream<R> {
	reader: R,
	encountered_ff: bool,
}

impl<R> UnsynchronizedStream<R> {
	/// Create a new [`UnsynchronizedStream`]
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			encountered_ff: false,
		}
	}
}

impl<R: Read> Read for UnsynchronizedStream<R> {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		let mut dest_pos = 0;
		let mut byte = [0; 1];

		while dest_pos < buf.len() {
			if self.reader.read(&mut byte)? == 0 {
				break;
			}

			if self.encountered_ff {
				self.encountered_ff = false;

				// Only skip the byte if this is valid unsynchronization
				if byte[0] == 0 {
					continue;
				}
			}

			buf[dest_pos] = byte[0];
			dest_pos += 1;

			if byte[0] == 0xFF {
				self.encountered_ff = true;
			}
		}

		Ok(dest_pos)
	}
}

/// An integer that can be converted to and from a synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 28 bits
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// assert_eq!(synch_number.unsynch(), unsynch_number);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > 0x0FFF_FFFF {
			err!(MalformedHeader("Value does not fit in a synchsafe integer"));
		}

		Ok((self & 0x7F)
			| ((self & (0x7F << 7)) << 1)
			| ((self & (0x7F << 14)) << 2)
			| ((self & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3) | ((self & 0x7F_0000) >> 2) | ((self & 0x7F00) >> 1) | (self & 0x7F)
	}
}
