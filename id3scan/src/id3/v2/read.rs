use super::content::{decode_comment_frame, decode_text_frame};
use super::frame::{Frame, FrameLayout, Frames};
use super::header::Id3v2Header;
use super::mappings::field_for_frame;
use super::synchsafe::UnsynchronizedStream;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{ErrorKind, Result};
use crate::record::{Field, MetadataRecord};

use std::io::Read;

/// Read the frames following an ID3v2 header into a [`MetadataRecord`]
///
/// `reader` must be positioned directly after the header (and extended header), as left by
/// [`Id3v2Header::parse`]. No more than [`Id3v2Header::body_len`] bytes are read from `reader`, so a
/// frame value running past the end of the body is reported as truncated.
///
/// # Errors
///
/// * `reader` fails to read
/// * [`ParsingMode::Strict`] is used, and a frame is truncated or its text can't be decoded
///
/// Otherwise, a truncated frame ends iteration and the fields decoded so far are returned.
///
/// # Examples
///
/// ```rust
/// use id3scan::config::ParseOptions;
/// use id3scan::id3::v2::{Id3v2Header, read_frames};
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut tag = vec![b'I', b'D', b'3', 2, 0, 0, 0, 0, 0, 22];
/// tag.extend(b"TT2\x00\x00\x05Hello");
///
/// let mut reader = &tag[..];
/// let header = Id3v2Header::parse(&mut reader)?;
/// let record = read_frames(&mut reader, &header, ParseOptions::new())?;
///
/// assert_eq!(record.title.as_deref(), Some("Hello"));
/// # Ok(()) }
/// ```
pub fn read_frames<R>(
	reader: &mut R,
	header: &Id3v2Header,
	parse_options: ParseOptions,
) -> Result<MetadataRecord>
where
	R: Read,
{
	log::debug!(
		"Parsing ID3v2.{} tag, size: {}",
		header.version.major(),
		header.size
	);

	let layout = FrameLayout::from(header.version);
	let body_len = header.body_len();

	// A v2.3 frame header is 10 bytes but only 6 are accounted for, so the accounting alone
	// can let a value overrun the body
	let tag_bytes = reader.take(u64::try_from(body_len).unwrap_or(0));

	if header.flags.unsynchronisation {
		// Unsynchronize the entire tag
		let frames = Frames::new(UnsynchronizedStream::new(tag_bytes), layout, body_len);
		read_all_frames_into_record(frames, layout, parse_options)
	} else {
		read_all_frames_into_record(Frames::new(tag_bytes, layout, body_len), layout, parse_options)
	}
}

fn read_all_frames_into_record<R>(
	frames: Frames<R>,
	layout: FrameLayout,
	parse_options: ParseOptions,
) -> Result<MetadataRecord>
where
	R: Read,
{
	let parse_mode = parse_options.parsing_mode;
	let mut record = MetadataRecord::default();

	for frame in frames {
		let frame = match frame {
			Ok(frame) => frame,
			Err(e) if matches!(e.kind(), ErrorKind::TruncatedFrame { .. }) => {
				if parse_mode == ParsingMode::Strict {
					return Err(e);
				}

				log::warn!("{e}, keeping the fields read so far");
				break;
			},
			Err(e) => return Err(e),
		};

		map_frame(&mut record, frame, layout, parse_options)?;
	}

	Ok(record)
}

fn map_frame(
	record: &mut MetadataRecord,
	frame: Frame,
	layout: FrameLayout,
	parse_options: ParseOptions,
) -> Result<()> {
	let Some(field) = field_for_frame(layout, &frame.header.id) else {
		log::trace!("Ignoring frame \"{}\"", frame.header.id);
		return Ok(());
	};

	let parse_mode = parse_options.parsing_mode;
	let value = match field {
		Field::Comment if !parse_options.read_comments => return Ok(()),
		Field::Comment => decode_comment_frame(&frame.value, parse_mode)?,
		_ => decode_text_frame(&frame.value, parse_mode)?,
	};

	let Some(value) = value else {
		return Ok(());
	};

	if record.set_text(field, value) {
		log::warn!(
			"Replaced frame with ID \"{id}\" by a frame with the same ID",
			id = frame.header.id
		);
	}

	Ok(())
}
