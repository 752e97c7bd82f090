use super::constants::ID3V1_TAG_MARKER;
use super::tag::Id3v1Tag;
use crate::config::ParseOptions;
use crate::util::text::latin1_decode;

impl Id3v1Tag {
	/// Parse a 128 byte ID3v1 record
	///
	/// Returns `None` if the record doesn't start with `"TAG"`.
	pub(crate) fn parse(reader: [u8; 128], parse_options: ParseOptions) -> Option<Self> {
		if reader[..3] != ID3V1_TAG_MARKER {
			return None;
		}

		let trim_spaces = parse_options.trim_trailing_spaces;
		let reader = &reader[3..];

		let reserved = reader[122];
		if reserved != 0 {
			log::debug!("ID3v1 reserved byte is set ({reserved:#04X}), ignoring it");
		}

		let track = reader[123];

		Some(Self {
			title: decode_field(&reader[..30], trim_spaces),
			artist: decode_field(&reader[30..60], trim_spaces),
			album: decode_field(&reader[60..90], trim_spaces),
			year: decode_field(&reader[90..94], trim_spaces),
			comment: decode_field(&reader[94..122], trim_spaces),
			reserved,
			track_number: (track != 0).then_some(track),
			genre: reader[124],
		})
	}
}

/// Decode a fixed-width, null padded Latin-1 field
///
/// Only the trailing run of padding is stripped, nulls inside the field are kept. Trailing spaces
/// are only counted as padding when `trim_spaces` is set.
pub(super) fn decode_field(data: &[u8], trim_spaces: bool) -> Option<String> {
	let is_padding = |b: u8| b == 0 || (trim_spaces && b == b' ');

	let end = data
		.iter()
		.rposition(|b| !is_padding(*b))
		.map_or(0, |last| last + 1);

	let data = &data[..end];
	if data.is_empty() {
		return None;
	}

	Some(latin1_decode(data))
}
