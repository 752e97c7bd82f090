/// The size of an ID3v1 tag, measured from the end of the file
pub const ID3V1_SIZE: u64 = 128;

/// The distance of an ID3v1 extended block from the end of the file
///
/// This is the 227 byte extended block followed by the 128 byte ID3v1 tag.
pub const ID3V1_EXTENDED_SIZE: u64 = 355;

pub(crate) const ID3V1_TAG_MARKER: [u8; 3] = *b"TAG";
pub(crate) const ID3V1_EXTENDED_TAG_MARKER: [u8; 4] = *b"TAG+";

pub(crate) const ID3V1_EXTENDED_BLOCK_LEN: usize = 227;
