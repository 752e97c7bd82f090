use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};
use crate::util::text::{TextEncoding, decode_text, decode_text_lossy, split_terminated};

/// Decode the value of a text frame (`TT2`, `TIT2`, ...)
///
/// A text frame normally begins with an encoding byte. Some writers leave it out entirely, so if
/// the first byte isn't a known encoding the whole value is treated as Latin-1.
pub(super) fn decode_text_frame(value: &[u8], parse_mode: ParsingMode) -> Result<Option<String>> {
	let (encoding, text) = match value.split_first() {
		Some((first, rest)) => match TextEncoding::from_u8(*first) {
			Some(encoding) => (encoding, rest),
			None => (TextEncoding::Latin1, value),
		},
		None => return Ok(None),
	};

	decode(text, encoding, parse_mode)
}

/// Decode the text of a comment frame (`COM`, `COMM`)
///
/// Layout: encoding (1), language (3), null terminated description, text.
/// Only the text is kept.
pub(super) fn decode_comment_frame(
	value: &[u8],
	parse_mode: ParsingMode,
) -> Result<Option<String>> {
	if value.len() < 4 {
		parse_mode_choice!(
			parse_mode,
			STRICT: err!(TextDecode("Comment frame is too short")),
			DEFAULT: {
				log::warn!("Skipping a comment frame that is too short");
				return Ok(None);
			}
		);
	}

	let encoding = match TextEncoding::from_u8(value[0]) {
		Some(encoding) => encoding,
		None => {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(TextDecode("Found an invalid text encoding")),
				DEFAULT: log::warn!("Comment frame has an invalid encoding, assuming Latin-1")
			);

			TextEncoding::Latin1
		},
	};

	let (description, mut text) = split_terminated(&value[4..], encoding);

	// Some writers only put a BOM on the description, the text shares its byte order
	let shared_bom = match description {
		[b0, b1, ..]
			if encoding == TextEncoding::UTF16
				&& has_bom(&[*b0, *b1])
				&& !text.is_empty()
				&& !has_bom(text) =>
		{
			Some([*b0, *b1])
		},
		_ => None,
	};

	let with_bom: Vec<u8>;
	if let Some(bom) = shared_bom {
		with_bom = [&bom[..], text].concat();
		text = &with_bom;
	}

	decode(text, encoding, parse_mode)
}

fn has_bom(bytes: &[u8]) -> bool {
	matches!(bytes, [0xFF, 0xFE, ..] | [0xFE, 0xFF, ..])
}

fn decode(bytes: &[u8], encoding: TextEncoding, parse_mode: ParsingMode) -> Result<Option<String>> {
	let text = match decode_text(bytes, encoding) {
		Ok(text) => text,
		Err(e) => {
			parse_mode_choice!(
				parse_mode,
				STRICT: return Err(e),
				RELAXED: {
					log::warn!("Discarding undecodable text: {e}");
					return Ok(None);
				},
				DEFAULT: {
					log::warn!("Decoding text lossily: {e}");
					decode_text_lossy(bytes, encoding)
				}
			)
		},
	};

	if text.is_empty() {
		return Ok(None);
	}

	Ok(Some(text))
}
