//! Contains the errors that can arise within id3scan
//!
//! The primary error is [`ScanError`]. The type of error is determined by [`ErrorKind`].

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, ScanError>`
pub type Result<T> = std::result::Result<T, ScanError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The source is smaller than the region being probed
	///
	/// This never escapes [`detect`](crate::probe::detect) or [`read_from`](crate::read_from),
	/// a short source simply has no tag of that family.
	FileTooShort,
	/// An ID3v2 header, extended header, or ID3v1 field did not match its layout
	MalformedHeader(&'static str),
	/// A frame declared more bytes than remain in the tag body
	TruncatedFrame {
		/// The frame identifier, as read
		id: String,
		/// The size the frame declared
		size: u32,
		/// The body bytes left when the frame was encountered
		remaining: i64,
	},
	/// The ID3v2 major version (and revision) is not one we decode
	///
	/// Only ID3v2.2 and ID3v2.3 are supported.
	UnsupportedVersion(u8, u8),
	/// Errors that arise while decoding text
	TextDecode(&'static str),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within id3scan
pub struct ScanError {
	pub(crate) kind: ErrorKind,
}

impl ScanError {
	/// Create a `ScanError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, ScanError};
	///
	/// let unsupported = ScanError::new(ErrorKind::UnsupportedVersion(4, 0));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, ScanError};
	///
	/// let unsupported = ScanError::new(ErrorKind::UnsupportedVersion(4, 0));
	/// if let ErrorKind::UnsupportedVersion(major, _) = unsupported.kind() {
	/// 	println!("ID3v2.{major} is not supported");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for ScanError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for ScanError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for ScanError {
	fn from(_: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::TextDecode("Expected a UTF-8 string"),
		}
	}
}

impl Display for ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::FileTooShort => {
				write!(f, "The source is too short to contain the probed tag")
			},
			ErrorKind::MalformedHeader(message) => write!(f, "Malformed header: {message}"),
			ErrorKind::TruncatedFrame {
				ref id,
				size,
				remaining,
			} => write!(
				f,
				"Frame \"{id}\" declares {size} bytes, but only {remaining} remain in the tag"
			),
			ErrorKind::UnsupportedVersion(major, minor) => write!(
				f,
				"Found an unsupported version (v2.{major}.{minor}), expected any major revision \
				 in: (2, 3)"
			),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
		}
	}
}
