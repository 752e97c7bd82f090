/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`](crate::config::ParseOptions::parsing_mode).
///
/// # Examples
///
/// ```rust,no_run
/// use id3scan::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> id3scan::error::Result<()> {
/// // We only want to read spec-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let metadata = id3scan::read_from_path("foo.mp3", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// This mode will eagerly error on any non-spec-compliant input.
	///
	/// ## Examples of behavior
	///
	/// * ID3v2 size bytes with their high bit set - The header is not recognized as a tag
	/// * A frame larger than the remaining tag body - The parser will error and the tag is discarded
	/// * Unable to decode text - The parser will error and the tag is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// This mode will attempt to fill in any holes where possible in otherwise valid input.
	///
	/// ## Examples of behavior
	///
	/// * ID3v2 size bytes - Only the cheap "byte sum < 128" gate is applied
	/// * A frame larger than the remaining tag body - Iteration stops, earlier fields are kept
	/// * Unable to decode text - The text is decoded lossily
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// This mode will discard any invalid fields, and ignore the majority of non-fatal errors.
	///
	/// ## Examples of behavior
	///
	/// * A frame larger than the remaining tag body - Iteration stops, earlier fields are kept
	/// * Unable to decode text - The field is discarded and the parser moves on
	Relaxed,
}
