use super::synchsafe::decode_size;
use crate::error::Result;
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

/// The size of the ID3v2 header
pub const ID3V2_HEADER_SIZE: u32 = 10;

/// The ID3v2 versions that can be decoded
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
}

impl Id3v2Version {
	/// The major version byte
	pub fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
		}
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	pub unsynchronisation: bool,
	/// Whether an extended header follows the header (ID3v2.3 only)
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage (ID3v2.3 only)
	pub experimental: bool,
}

/// A parsed ID3v2 header
///
/// The 10 byte header is laid out as follows:
///
/// | Field      | Size |
/// |------------|------|
/// | `"ID3"`    | 3    |
/// | Version    | 1    |
/// | Revision   | 1    |
/// | Flags      | 1    |
/// | Size       | 4 (synchsafe) |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The major version
	pub version: Id3v2Version,
	/// The revision byte
	pub revision: u8,
	/// The tag flags
	pub flags: Id3v2TagFlags,
	/// The size bytes, as stored
	pub raw_size: [u8; 4],
	/// The decoded size
	pub size: u32,
	/// The size of the extended header, including its own 4 byte size field
	///
	/// This is 0 when no extended header is present.
	pub extended_size: u32,
}

impl Id3v2Header {
	/// Parse an ID3v2 header from the current position of `bytes`
	///
	/// If the header announces an extended header, it is read and skipped, leaving `bytes` at
	/// the start of the frames.
	///
	/// # Errors
	///
	/// * `bytes` doesn't contain enough data
	/// * The identifier isn't `"ID3"`, or the version or revision byte is `0xFF` ([`ErrorKind::MalformedHeader`](crate::error::ErrorKind::MalformedHeader))
	/// * The version isn't 2 or 3 ([`ErrorKind::UnsupportedVersion`](crate::error::ErrorKind::UnsupportedVersion))
	/// * An ID3v2.2 tag is compressed ([`ErrorKind::MalformedHeader`](crate::error::ErrorKind::MalformedHeader))
	/// * The extended header doesn't fit in the tag ([`ErrorKind::MalformedHeader`](crate::error::ErrorKind::MalformedHeader))
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::{Id3v2Header, Id3v2Version};
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let bytes = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0x02, 0x01];
	/// let header = Id3v2Header::parse(&mut &bytes[..])?;
	///
	/// assert_eq!(header.version, Id3v2Version::V3);
	/// assert_eq!(header.size, 257);
	/// # Ok(()) }
	/// ```
	pub fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; ID3V2_HEADER_SIZE as usize];
		bytes.read_exact(&mut header)?;

		if &header[..3] != b"ID3" {
			err!(MalformedHeader("Missing the \"ID3\" identifier"));
		}

		if header[3] == 0xFF || header[4] == 0xFF {
			err!(MalformedHeader("Version and revision bytes must be less than 0xFF"));
		}

		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			major => err!(UnsupportedVersion(major, header[4])),
		};

		let flags = header[5];

		// Compression was a flag only used in ID3v2.2 (bit 6).
		// No compression scheme was ever decided, so the tag can't be read.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			err!(MalformedHeader("Encountered a compressed ID3v2.2 tag"));
		}

		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended_header: version == Id3v2Version::V3 && flags & 0x40 == 0x40,
			experimental: version == Id3v2Version::V3 && flags & 0x20 == 0x20,
		};

		let raw_size = [header[6], header[7], header[8], header[9]];
		let size = decode_size(raw_size);
		let mut extended_size = 0;

		if flags_parsed.extended_header {
			// Unlike the header, the ID3v2.3 extended header size is a plain integer that
			// doesn't include itself
			let declared = bytes.read_u32::<BigEndian>()?;

			if declared < 6 || u64::from(declared) + 4 > u64::from(size) {
				err!(MalformedHeader("Found an extended header with an invalid size"));
			}

			log::debug!("Skipping an extended header of size {declared}");

			let skipped = std::io::copy(
				&mut bytes.by_ref().take(u64::from(declared)),
				&mut std::io::sink(),
			)?;
			if skipped != u64::from(declared) {
				err!(MalformedHeader("Extended header extends past the end of the data"));
			}

			extended_size = declared + 4;
		}

		Ok(Id3v2Header {
			version,
			revision: header[4],
			flags: flags_parsed,
			raw_size,
			size,
			extended_size,
		})
	}

	/// The number of body bytes available to frames
	///
	/// This is the declared size less the 10 byte header, less one more byte, and less the
	/// extended header. The result may be zero or negative, in which case there are no frames.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::Id3v2Header;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let bytes = [b'I', b'D', b'3', 2, 0, 0, 0, 0, 0, 10];
	/// let header = Id3v2Header::parse(&mut &bytes[..])?;
	///
	/// assert!(header.body_len() <= 0);
	/// # Ok(()) }
	/// ```
	pub fn body_len(&self) -> i64 {
		(i64::from(self.size) - 1) - i64::from(ID3V2_HEADER_SIZE) - i64::from(self.extended_size)
	}
}
