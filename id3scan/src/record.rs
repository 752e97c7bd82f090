//! The version independent result of reading a tag

use std::fmt::{Display, Formatter};

/// A genre, as stored by the source tag
///
/// The representation depends on where the genre came from and is never converted:
///
/// * ID3v1: [`Genre::Index`], an index into the standard genre list (not provided by this crate)
/// * ID3v1 extended and ID3v2: [`Genre::Text`], free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Genre {
	/// A raw ID3v1 genre index
	Index(u8),
	/// Free text, such as `"Rock"` or `"(17)"`
	Text(String),
}

/// A track number, as stored by the source tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
	/// The raw ID3v1.1 track byte (never 0)
	Number(u8),
	/// An ID3v2 track string, such as `"3"` or `"3/12"`
	Text(String),
}

impl Display for Genre {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Genre::Index(index) => write!(f, "{index}"),
			Genre::Text(text) => f.write_str(text),
		}
	}
}

impl Display for Track {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Track::Number(number) => write!(f, "{number}"),
			Track::Text(text) => f.write_str(text),
		}
	}
}

/// The fields a [`MetadataRecord`] can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	/// Title/songname/content description
	Title,
	/// Lead performer(s)/Soloist(s)
	Artist,
	/// Album/Movie/Show title
	Album,
	/// Year of recording
	Year,
	/// Comment
	Comment,
	/// Track number/Position in set
	Track,
	/// Content type
	Genre,
}

/// The metadata extracted from a single tag
///
/// Every field is optional. A field is only set when the source tag carried it, there is no
/// defaulting and no fallback to other tag versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
	/// The title
	pub title: Option<String>,
	/// The artist
	pub artist: Option<String>,
	/// The album
	pub album: Option<String>,
	/// The year, as text
	pub year: Option<String>,
	/// The comment
	pub comment: Option<String>,
	/// The track number
	pub track: Option<Track>,
	/// The genre
	pub genre: Option<Genre>,
}

impl MetadataRecord {
	/// Whether no field is set
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::record::MetadataRecord;
	///
	/// assert!(MetadataRecord::default().is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Set a text `field` from an ID3v2 frame or an ID3v1 extended field
	///
	/// `Track` and `Genre` are stored as [`Track::Text`] and [`Genre::Text`].
	///
	/// Returns `true` if a previous value was replaced.
	pub fn set_text(&mut self, field: Field, value: String) -> bool {
		match field {
			Field::Title => self.title.replace(value).is_some(),
			Field::Artist => self.artist.replace(value).is_some(),
			Field::Album => self.album.replace(value).is_some(),
			Field::Year => self.year.replace(value).is_some(),
			Field::Comment => self.comment.replace(value).is_some(),
			Field::Track => self.track.replace(Track::Text(value)).is_some(),
			Field::Genre => self.genre.replace(Genre::Text(value)).is_some(),
		}
	}
}
