use super::constants::ID3V1_SIZE;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::io::ByteSource;
use crate::record::{Genre, MetadataRecord, Track};

use std::io::SeekFrom;

/// An ID3v1 tag
///
/// ID3v1 is a fixed 128 byte record at the very end of a file:
///
/// | Field      | Size | Offset from end |
/// |------------|------|-----------------|
/// | `"TAG"`    | 3    | -128            |
/// | Title      | 30   | -125            |
/// | Artist     | 30   | -95             |
/// | Album      | 30   | -65             |
/// | Year       | 4    | -35             |
/// | Comment    | 28   | -31             |
/// | Reserved   | 1    | -3              |
/// | Track      | 1    | -2              |
/// | Genre      | 1    | -1              |
///
/// The layout never changes: the comment is always 28 bytes, and the track is always read from
/// its own byte, whatever the reserved byte holds.
///
/// Text fields only have their trailing null padding stripped, so a field such as `"Foo\0Bar"`
/// keeps its embedded null.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: Option<String>,
	/// Track artist, 30 bytes max
	pub artist: Option<String>,
	/// Album title, 30 bytes max
	pub album: Option<String>,
	/// Release year, 4 bytes max
	pub year: Option<String>,
	/// A short comment, 28 bytes max
	pub comment: Option<String>,
	/// The reserved byte before the track, normally 0
	pub reserved: u8,
	/// The track number
	///
	/// A track number of 0 is stored as `None`.
	pub track_number: Option<u8>,
	/// The raw genre index
	pub genre: u8,
}

impl Id3v1Tag {
	/// Read an ID3v1 tag from the end of `reader`
	///
	/// This returns `Ok(None)` if `reader` is too short to hold a tag, or if the `"TAG"`
	/// identifier is missing.
	///
	/// # Errors
	///
	/// * `reader` fails to seek or read
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	/// use id3scan::id3::v1::Id3v1Tag;
	/// use std::io::Cursor;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let mut tag = [0; 128];
	/// tag[..3].copy_from_slice(b"TAG");
	/// tag[3..8].copy_from_slice(b"Title");
	///
	/// let id3v1 = Id3v1Tag::read_from(&mut Cursor::new(tag), ParseOptions::new())?.unwrap();
	/// assert_eq!(id3v1.title.as_deref(), Some("Title"));
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Self>>
	where
		R: ByteSource,
	{
		if reader.total_len()? < ID3V1_SIZE {
			log::debug!("Source is too short to contain an ID3v1 tag");
			return Ok(None);
		}

		reader.seek(SeekFrom::End(-(ID3V1_SIZE as i64)))?;

		let mut tag = [0; ID3V1_SIZE as usize];
		reader.read_exact(&mut tag)?;

		Ok(Self::parse(tag, parse_options))
	}

	/// Convert the tag into a [`MetadataRecord`]
	///
	/// The genre is kept as a raw [`Genre::Index`].
	pub fn into_record(self) -> MetadataRecord {
		MetadataRecord {
			title: self.title,
			artist: self.artist,
			album: self.album,
			year: self.year,
			comment: self.comment,
			track: self.track_number.map(Track::Number),
			genre: Some(Genre::Index(self.genre)),
		}
	}
}
