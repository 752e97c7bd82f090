#![no_main]

use std::io::Cursor;

use id3scan::config::ParseOptions;
use id3scan::id3::v1::Id3v1ExtendedTag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let _ = Id3v1ExtendedTag::read_from(&mut Cursor::new(data), ParseOptions::new());
});
