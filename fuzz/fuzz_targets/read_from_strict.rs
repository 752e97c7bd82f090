#![no_main]

use std::io::Cursor;

use id3scan::config::{ParseOptions, ParsingMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let _ = id3scan::read_from(
		&mut Cursor::new(data),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	);
});
