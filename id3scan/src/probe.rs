//! Tag detection and reading

use crate::config::{ParseOptions, ParsingMode};
use crate::error::{ErrorKind, Result};
use crate::id3::v1::constants::{ID3V1_EXTENDED_TAG_MARKER, ID3V1_TAG_MARKER};
use crate::id3::v1::{ID3V1_EXTENDED_SIZE, ID3V1_SIZE, Id3v1ExtendedTag, Id3v1Tag};
use crate::id3::v2::{ID3V2_HEADER_SIZE, Id3v2Header, read_frames};
use crate::io::ByteSource;
use crate::macros::err;
use crate::record::MetadataRecord;

use std::fs::File;
use std::io::{BufReader, SeekFrom};
use std::path::Path;

/// Where the tag to read was found
///
/// When a source holds multiple tags, only the one with the highest priority is reported:
/// `V2` > `V1Extended` > `V1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagLocation {
	/// No tag was found
	#[default]
	None,
	/// An ID3v1 tag, at the end of the source
	V1,
	/// An ID3v1 extended (`TAG+`) block, at the end of the source
	V1Extended,
	/// An ID3v2 tag at the start of the source, with its major version byte
	///
	/// The version is not validated during detection, reading a `V2(4)` tag will fail with
	/// [`ErrorKind::UnsupportedVersion`].
	V2(u8),
}

/// The result of reading a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMetadata {
	/// Where the tag was found
	pub location: TagLocation,
	/// The metadata read from the tag
	pub record: MetadataRecord,
}

/// Find the highest priority tag in `reader`
///
/// The checks are as follows:
///
/// * ID3v2: the first 10 bytes start with `"ID3"`, neither the version nor revision byte is
///   `0xFF`, and the size bytes sum to less than 128. With [`ParsingMode::Strict`], the size bytes
///   must instead each be less than `0x80`.
/// * ID3v1 extended: `"TAG+"` at 355 bytes from the end
/// * ID3v1: `"TAG"` at 128 bytes from the end
///
/// A source that is too short for a tag simply doesn't have one. The stream position is reset to
/// the start once detection is done.
///
/// # Errors
///
/// `reader` fails to seek or read
///
/// # Examples
///
/// ```rust
/// use id3scan::config::ParseOptions;
/// use id3scan::{TagLocation, detect};
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut source = vec![0; 200];
/// source[72..75].copy_from_slice(b"TAG");
///
/// let location = detect(&mut Cursor::new(source), ParseOptions::new())?;
/// assert_eq!(location, TagLocation::V1);
/// # Ok(()) }
/// ```
pub fn detect<R>(reader: &mut R, parse_options: ParseOptions) -> Result<TagLocation>
where
	R: ByteSource,
{
	reader.rewind()?;
	let stream_len = reader.total_len()?;

	log::debug!("Detecting tags, stream length: {stream_len}");

	let location = if let Some(version) = probe_id3v2(reader, parse_options.parsing_mode)? {
		TagLocation::V2(version)
	} else if has_marker_at_end(
		reader,
		stream_len,
		ID3V1_EXTENDED_SIZE,
		&ID3V1_EXTENDED_TAG_MARKER,
	)? {
		TagLocation::V1Extended
	} else if has_marker_at_end(reader, stream_len, ID3V1_SIZE, &ID3V1_TAG_MARKER)? {
		TagLocation::V1
	} else {
		TagLocation::None
	};

	log::debug!("Detected: {location:?}");

	reader.rewind()?;
	Ok(location)
}

fn probe_id3v2<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<Option<u8>>
where
	R: ByteSource,
{
	let header = reader.read_up_to(u64::from(ID3V2_HEADER_SIZE))?;
	let Ok(header) = <[u8; ID3V2_HEADER_SIZE as usize]>::try_from(header) else {
		log::debug!("ID3v2: source is too short to hold a header");
		return Ok(None);
	};

	let [b'I', b'D', b'3', version, revision, _flags, size @ ..] = header else {
		return Ok(None);
	};

	if version == 0xFF || revision == 0xFF {
		log::debug!("ID3v2: invalid version or revision byte");
		return Ok(None);
	}

	let size_is_valid = match parse_mode {
		ParsingMode::Strict => size.iter().all(|b| *b < 0x80),
		_ => size.iter().map(|b| u32::from(*b)).sum::<u32>() < 128,
	};

	if !size_is_valid {
		log::debug!("ID3v2: rejected size bytes {size:02X?}");
		return Ok(None);
	}

	Ok(Some(version))
}

fn has_marker_at_end<R>(reader: &mut R, stream_len: u64, tag_len: u64, marker: &[u8]) -> Result<bool>
where
	R: ByteSource,
{
	match marker_at_end(reader, stream_len, tag_len, marker) {
		Err(e) if matches!(e.kind(), ErrorKind::FileTooShort) => {
			log::debug!("Source is too short to hold a {tag_len} byte tag");
			Ok(false)
		},
		result => result,
	}
}

fn marker_at_end<R>(reader: &mut R, stream_len: u64, tag_len: u64, marker: &[u8]) -> Result<bool>
where
	R: ByteSource,
{
	if stream_len < tag_len {
		err!(FileTooShort);
	}

	reader.seek(SeekFrom::Start(stream_len - tag_len))?;

	let found = reader.read_up_to(marker.len() as u64)?;
	Ok(found == marker)
}

/// Read the highest priority tag from `reader`
///
/// See [`detect`] for how the tag is chosen. Only that tag is read, fields missing from it are
/// never filled in from another tag.
///
/// This returns `Ok(None)` if no tag was found.
///
/// # Errors
///
/// * `reader` fails to seek or read
/// * The ID3v2 version is unsupported ([`ErrorKind::UnsupportedVersion`])
/// * The ID3v2 header is malformed ([`ErrorKind::MalformedHeader`])
/// * [`ParsingMode::Strict`] is used, and the tag is damaged
///
/// # Examples
///
/// ```rust
/// use id3scan::config::ParseOptions;
/// use id3scan::{TagLocation, read_from};
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut source = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 25];
/// source.extend(b"TPE1\x00\x00\x00\x04\x00\x00Rush");
///
/// let tagged = read_from(&mut Cursor::new(source), ParseOptions::new())?.unwrap();
///
/// assert_eq!(tagged.location, TagLocation::V2(3));
/// assert_eq!(tagged.record.artist.as_deref(), Some("Rush"));
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<TaggedMetadata>>
where
	R: ByteSource,
{
	let location = detect(reader, parse_options)?;

	let record = match location {
		TagLocation::None => return Ok(None),
		TagLocation::V2(_) => {
			let header = Id3v2Header::parse(reader)?;
			read_frames(reader, &header, parse_options)?
		},
		TagLocation::V1Extended => match Id3v1ExtendedTag::read_from(reader, parse_options)? {
			Some(tag) => tag.into_record(),
			None => return Ok(None),
		},
		TagLocation::V1 => match Id3v1Tag::read_from(reader, parse_options)? {
			Some(tag) => tag.into_record(),
			None => return Ok(None),
		},
	};

	Ok(Some(TaggedMetadata { location, record }))
}

/// Read the highest priority tag from a path
///
/// The file is only held open for the duration of the read.
///
/// # Errors
///
/// * `path` does not exist or can't be opened
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use id3scan::config::ParseOptions;
/// use id3scan::read_from_path;
///
/// # fn main() -> id3scan::error::Result<()> {
/// if let Some(tagged) = read_from_path("path/to/my.mp3", ParseOptions::new())? {
/// 	println!("Title: {:?}", tagged.record.title);
/// }
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<Option<TaggedMetadata>>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	log::debug!("Reading tags from {}", path.display());

	let mut reader = BufReader::new(File::open(path)?);
	read_from(&mut reader, parse_options)
}
