//! The byte source abstraction tags are read from

use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};

/// A seekable, readable stream of bytes
///
/// This is implemented for anything that is [`Read`] + [`Seek`], such as a [`File`](std::fs::File)
/// or a [`Cursor`](std::io::Cursor). Closing the source is left to [`Drop`], so the handle is released
/// on every exit path.
///
/// # Examples
///
/// ```rust
/// use id3scan::io::ByteSource;
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut source = Cursor::new(vec![0; 200]);
/// assert_eq!(source.total_len()?, 200);
/// # Ok(()) }
/// ```
pub trait ByteSource: Read + Seek {
	/// The total length of the source, in bytes
	///
	/// The current position is preserved.
	///
	/// # Errors
	///
	/// The underlying seek failed
	fn total_len(&mut self) -> Result<u64> {
		let current_pos = self.stream_position()?;
		let len = self.seek(SeekFrom::End(0))?;

		self.seek(SeekFrom::Start(current_pos))?;

		Ok(len)
	}

	/// Read up to `n` bytes from the current position
	///
	/// Fewer than `n` bytes are only returned at the end of the stream.
	///
	/// # Errors
	///
	/// The underlying read failed
	fn read_up_to(&mut self, n: u64) -> Result<Vec<u8>> {
		let mut content = Vec::new();
		Read::take(&mut *self, n).read_to_end(&mut content)?;
		Ok(content)
	}
}

impl<T> ByteSource for T where T: Read + Seek {}
