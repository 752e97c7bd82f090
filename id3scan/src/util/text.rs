use crate::error::{ErrorKind, Result, ScanError};
use crate::macros::err;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	fn terminator_len(self) -> usize {
		match self {
			Self::Latin1 | Self::UTF8 => 1,
			Self::UTF16 | Self::UTF16BE => 2,
		}
	}
}

/// Decode `bytes` with `encoding`, stripping any trailing nulls
pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	match encoding {
		TextEncoding::Latin1 => Ok(latin1_decode(bytes)),
		TextEncoding::UTF16 => {
			if bytes.len() < 2 {
				err!(TextDecode("UTF-16 string has an invalid length (< 2)"));
			}

			match [bytes[0], bytes[1]] {
				[0xFE, 0xFF] => utf16_decode_bytes(&bytes[2..], u16::from_be_bytes),
				[0xFF, 0xFE] => utf16_decode_bytes(&bytes[2..], u16::from_le_bytes),
				_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
			}
		},
		TextEncoding::UTF16BE => utf16_decode_bytes(bytes, u16::from_be_bytes),
		TextEncoding::UTF8 => utf8_decode(bytes.to_vec()),
	}
}

/// Lossy counterpart of [`decode_text`], never fails
pub(crate) fn decode_text_lossy(bytes: &[u8], encoding: TextEncoding) -> String {
	let mut text = match encoding {
		TextEncoding::Latin1 => return latin1_decode(bytes),
		TextEncoding::UTF16 => match bytes {
			[0xFE, 0xFF, rest @ ..] => utf16_lossy(rest, u16::from_be_bytes),
			[0xFF, 0xFE, rest @ ..] => utf16_lossy(rest, u16::from_le_bytes),
			_ => utf16_lossy(bytes, u16::from_le_bytes),
		},
		TextEncoding::UTF16BE => utf16_lossy(bytes, u16::from_be_bytes),
		TextEncoding::UTF8 => String::from_utf8_lossy(bytes).into_owned(),
	};

	trim_end_nulls(&mut text);
	text
}

/// Split `bytes` at the first terminator for `encoding`
///
/// Returns the content before the terminator and everything after it. If no terminator
/// exists, the entire input is the first half.
pub(crate) fn split_terminated(bytes: &[u8], encoding: TextEncoding) -> (&[u8], &[u8]) {
	let step = encoding.terminator_len();

	let mut pos = 0;
	while pos + step <= bytes.len() {
		if bytes[pos..pos + step].iter().all(|b| *b == 0) {
			return (&bytes[..pos], &bytes[pos + step..]);
		}

		pos += step;
	}

	(bytes, &[])
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| *c as char).collect::<String>();
	trim_end_nulls(&mut text);
	text
}

pub(crate) fn utf8_decode(bytes: Vec<u8>) -> Result<String> {
	String::from_utf8(bytes)
		.map(|mut text| {
			trim_end_nulls(&mut text);
			text
		})
		.map_err(Into::into)
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	if bytes.len() % 2 != 0 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	let words: Vec<u16> = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect();

	String::from_utf16(&words)
		.map(|mut text| {
			trim_end_nulls(&mut text);
			text
		})
		.map_err(|_| ScanError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

fn utf16_lossy(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
	let words: Vec<u16> = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect();

	String::from_utf16_lossy(&words)
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}
