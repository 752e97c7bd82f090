//! The frames that map to a [`MetadataRecord`](crate::record::MetadataRecord) field

use super::frame::FrameLayout;
use crate::record::Field;

/// Get the [`Field`] a frame identifier maps to
///
/// Any identifier not listed here is read and ignored.
///
/// | Field     | ID3v2.2 | ID3v2.3 |
/// |-----------|---------|---------|
/// | `Title`   | `TT2`   | `TIT2`  |
/// | `Artist`  | `TP1`   | `TPE1`  |
/// | `Album`   | `TAL`   | `TALB`  |
/// | `Year`    | `TYE`   | `TYER`  |
/// | `Track`   | `TRK`   | `TRCK`  |
/// | `Genre`   | `TCO`   | `TCON`  |
/// | `Comment` | `COM`   | `COMM`  |
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::{FrameLayout, field_for_frame};
/// use id3scan::record::Field;
///
/// assert_eq!(field_for_frame(FrameLayout::V2_2, "TT2"), Some(Field::Title));
/// assert_eq!(field_for_frame(FrameLayout::V2_3, "TT2"), None);
/// ```
pub fn field_for_frame(layout: FrameLayout, id: &str) -> Option<Field> {
	let field = match (layout, id) {
		(FrameLayout::V2_2, "TT2") | (FrameLayout::V2_3, "TIT2") => Field::Title,
		(FrameLayout::V2_2, "TP1") | (FrameLayout::V2_3, "TPE1") => Field::Artist,
		(FrameLayout::V2_2, "TAL") | (FrameLayout::V2_3, "TALB") => Field::Album,
		(FrameLayout::V2_2, "TYE") | (FrameLayout::V2_3, "TYER") => Field::Year,
		(FrameLayout::V2_2, "TRK") | (FrameLayout::V2_3, "TRCK") => Field::Track,
		(FrameLayout::V2_2, "TCO") | (FrameLayout::V2_3, "TCON") => Field::Genre,
		(FrameLayout::V2_2, "COM") | (FrameLayout::V2_3, "COMM") => Field::Comment,
		_ => return None,
	};

	Some(field)
}
