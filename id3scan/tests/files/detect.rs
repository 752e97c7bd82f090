use crate::util::{id3v2_tag, latin1_text, temp_file, v2_2_frame, with_audio};

use id3scan::config::ParseOptions;
use id3scan::{TagLocation, detect, read_from};

use std::io::{Cursor, Seek as _, SeekFrom};

fn id3v1_tag(title: &[u8]) -> Vec<u8> {
	let mut tag = vec![0; 128];
	tag[..3].copy_from_slice(b"TAG");
	tag[3..3 + title.len()].copy_from_slice(title);
	tag
}

#[test_log::test]
fn v2_over_v1() {
	let mut content = id3v2_tag(2, 0, &v2_2_frame("TT2", &latin1_text("From ID3v2")));
	content.extend([0xAA; 500]);
	content.extend(id3v1_tag(b"From ID3v1"));

	let mut file = temp_file(&content);
	assert_eq!(
		detect(&mut file, ParseOptions::new()).unwrap(),
		TagLocation::V2(2)
	);

	// Only the highest priority tag is read
	let tagged = read_from(&mut file, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("From ID3v2"));
}

#[test_log::test]
fn v1_extended_over_v1() {
	let mut block = vec![0; 227];
	block[..4].copy_from_slice(b"TAG+");

	let mut content = with_audio(20, &block);
	content.extend(id3v1_tag(b"Title"));

	assert_eq!(
		detect(&mut Cursor::new(content), ParseOptions::new()).unwrap(),
		TagLocation::V1Extended
	);
}

#[test_log::test]
fn short_sources() {
	for len in [0, 3, 10, 127] {
		let content = vec![b'T'; len];
		assert_eq!(
			detect(&mut Cursor::new(&content), ParseOptions::new()).unwrap(),
			TagLocation::None
		);
		assert!(
			read_from(&mut Cursor::new(&content), ParseOptions::new())
				.unwrap()
				.is_none()
		);
	}

	// Exactly large enough for an ID3v1 tag, but not for an extended block
	assert_eq!(
		detect(&mut Cursor::new(id3v1_tag(b"")), ParseOptions::new()).unwrap(),
		TagLocation::V1
	);
}

#[test_log::test]
fn no_tag() {
	let content = with_audio(4096, &[]);
	assert!(
		read_from(&mut Cursor::new(content), ParseOptions::new())
			.unwrap()
			.is_none()
	);
}

#[test_log::test]
fn detection_rewinds() {
	let content = with_audio(400, &id3v1_tag(b"Title"));

	let mut reader = Cursor::new(content);
	reader.seek(SeekFrom::End(-10)).unwrap();

	assert_eq!(
		detect(&mut reader, ParseOptions::new()).unwrap(),
		TagLocation::V1
	);
	assert_eq!(reader.stream_position().unwrap(), 0);
}
