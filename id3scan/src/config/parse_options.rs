use super::ParsingMode;

/// Options to control how id3scan parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) trim_trailing_spaces: bool,
	pub(crate) read_comments: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	trim_trailing_spaces: false,
	/// 	read_comments: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			trim_trailing_spaces: false,
			read_comments: true,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether to strip trailing spaces from fixed-width ID3v1 fields
	///
	/// Trailing null bytes are always stripped. Writers disagree on whether unused space in a
	/// fixed-width field is null or space padded, so by default the spaces are kept as-is.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	///
	/// // My files are space padded, I don't want the padding
	/// let parsing_options = ParseOptions::new().trim_trailing_spaces(true);
	/// ```
	pub fn trim_trailing_spaces(&mut self, trim_trailing_spaces: bool) -> Self {
		self.trim_trailing_spaces = trim_trailing_spaces;
		*self
	}

	/// Whether to map ID3v2 comment frames (`COM`/`COMM`) to the comment field
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	///
	/// // I only want the ID3v2 text frames
	/// let parsing_options = ParseOptions::new().read_comments(false);
	/// ```
	pub fn read_comments(&mut self, read_comments: bool) -> Self {
		self.read_comments = read_comments;
		*self
	}
}
