use super::constants::{
	ID3V1_EXTENDED_BLOCK_LEN, ID3V1_EXTENDED_SIZE, ID3V1_EXTENDED_TAG_MARKER,
};
use super::read::decode_field;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::io::ByteSource;
use crate::macros::{err, parse_mode_choice};
use crate::record::{Genre, MetadataRecord};

use std::fmt::{Display, Formatter};
use std::io::SeekFrom;

/// The playback speed stored in an extended tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
	/// No speed set (0)
	#[default]
	Unset,
	/// 1
	Slow,
	/// 2
	Medium,
	/// 3
	Fast,
	/// 4
	Hardcore,
	/// Any value outside of `0..=4`
	Unknown(u8),
}

impl Speed {
	/// Get a `Speed` from its byte value
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v1::Speed;
	///
	/// assert_eq!(Speed::from_u8(3), Speed::Fast);
	/// assert_eq!(Speed::from_u8(9), Speed::Unknown(9));
	/// ```
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			0 => Self::Unset,
			1 => Self::Slow,
			2 => Self::Medium,
			3 => Self::Fast,
			4 => Self::Hardcore,
			_ => Self::Unknown(byte),
		}
	}
}

/// A `mmm:ss` timestamp from an extended tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTime {
	/// Minutes, up to 999
	pub minutes: u16,
	/// Seconds
	pub seconds: u8,
}

impl PlayTime {
	/// Parse a `mmm:ss` field
	///
	/// Leading zeros in the minutes are optional, so `"3:05"` and `"003:05"` are equivalent.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v1::PlayTime;
	///
	/// let time = PlayTime::parse("003:05").unwrap();
	/// assert_eq!(time.minutes, 3);
	/// assert_eq!(time.seconds, 5);
	///
	/// assert!(PlayTime::parse("3m05s").is_none());
	/// ```
	pub fn parse(text: &str) -> Option<Self> {
		let (minutes, seconds) = text.split_once(':')?;

		if minutes.is_empty()
			|| minutes.len() > 3
			|| seconds.len() != 2
			|| !minutes.bytes().chain(seconds.bytes()).all(|b| b.is_ascii_digit())
		{
			return None;
		}

		Some(Self {
			minutes: minutes.parse().ok()?,
			seconds: seconds.parse().ok()?,
		})
	}
}

impl Display for PlayTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:03}:{:02}", self.minutes, self.seconds)
	}
}

/// An ID3v1 extended (`TAG+`) block
///
/// The block is 227 bytes, placed directly before the 128 byte ID3v1 tag:
///
/// | Field        | Size | Offset from end |
/// |--------------|------|-----------------|
/// | `"TAG+"`     | 4    | -355            |
/// | Title        | 60   | -351            |
/// | Artist       | 60   | -291            |
/// | Album        | 60   | -231            |
/// | Speed        | 1    | -171            |
/// | Genre        | 30   | -170            |
/// | Start time   | 6    | -140            |
/// | End time     | 6    | -134            |
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1ExtendedTag {
	/// Track title, 60 bytes max
	pub title: Option<String>,
	/// Track artist, 60 bytes max
	pub artist: Option<String>,
	/// Album title, 60 bytes max
	pub album: Option<String>,
	/// Playback speed
	pub speed: Speed,
	/// Free text genre, 30 bytes max
	pub genre: Option<String>,
	/// Start of the music
	pub start_time: Option<PlayTime>,
	/// End of the music
	pub end_time: Option<PlayTime>,
}

impl Id3v1ExtendedTag {
	/// Read an extended block from `reader`
	///
	/// This returns `Ok(None)` if `reader` is too short to hold a block, or if the `"TAG+"`
	/// identifier is missing.
	///
	/// # Errors
	///
	/// * `reader` fails to seek or read
	/// * [`ParsingMode::Strict`] is used, and the speed or a time field is malformed
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Self>>
	where
		R: ByteSource,
	{
		if reader.total_len()? < ID3V1_EXTENDED_SIZE {
			log::debug!("Source is too short to contain an ID3v1 extended tag");
			return Ok(None);
		}

		reader.seek(SeekFrom::End(-(ID3V1_EXTENDED_SIZE as i64)))?;

		let mut block = [0; ID3V1_EXTENDED_BLOCK_LEN];
		reader.read_exact(&mut block)?;

		Self::parse(&block, parse_options)
	}

	pub(crate) fn parse(
		block: &[u8; ID3V1_EXTENDED_BLOCK_LEN],
		parse_options: ParseOptions,
	) -> Result<Option<Self>> {
		if block[..4] != ID3V1_EXTENDED_TAG_MARKER {
			return Ok(None);
		}

		let parse_mode = parse_options.parsing_mode;
		let trim_spaces = parse_options.trim_trailing_spaces;

		let speed = Speed::from_u8(block[184]);
		if let Speed::Unknown(value) = speed {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(MalformedHeader("ID3v1 extended speed is out of range")),
				DEFAULT: log::warn!("ID3v1 extended speed is out of range: {value}")
			);
		}

		Ok(Some(Self {
			title: decode_field(&block[4..64], trim_spaces),
			artist: decode_field(&block[64..124], trim_spaces),
			album: decode_field(&block[124..184], trim_spaces),
			speed,
			genre: decode_field(&block[185..215], trim_spaces),
			start_time: decode_time(&block[215..221], parse_mode)?,
			end_time: decode_time(&block[221..227], parse_mode)?,
		}))
	}

	/// Convert the block into a [`MetadataRecord`]
	///
	/// Only the title, artist, album, and genre (as [`Genre::Text`]) exist in the block.
	/// The remaining fields are left unset, they are never borrowed from the trailing ID3v1 tag.
	pub fn into_record(self) -> MetadataRecord {
		MetadataRecord {
			title: self.title,
			artist: self.artist,
			album: self.album,
			genre: self.genre.map(Genre::Text),
			..MetadataRecord::default()
		}
	}
}

fn decode_time(data: &[u8], parse_mode: ParsingMode) -> Result<Option<PlayTime>> {
	let Some(text) = decode_field(data, true) else {
		return Ok(None);
	};

	match PlayTime::parse(&text) {
		Some(time) => Ok(Some(time)),
		None => {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(MalformedHeader("ID3v1 extended time is not in mmm:ss form")),
				DEFAULT: log::warn!("Discarding malformed ID3v1 extended time: {text:?}")
			);

			Ok(None)
		},
	}
}
