#![no_main]

use id3scan::config::ParseOptions;
use id3scan::id3::v2::{Id3v2Header, read_frames};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let mut reader = data;
	if let Ok(header) = Id3v2Header::parse(&mut reader) {
		let _ = read_frames(&mut reader, &header, ParseOptions::new());
	}
});
