use crate::util::{id3v2_tag, latin1_text, v2_2_frame, v2_3_frame, with_audio};

use id3scan::config::{ParseOptions, ParsingMode};
use id3scan::error::ErrorKind;
use id3scan::record::{Genre, MetadataRecord, Track};
use id3scan::{TagLocation, read_from};

use std::io::Cursor;

fn read(content: &[u8], parse_options: ParseOptions) -> id3scan::error::Result<Option<id3scan::TaggedMetadata>> {
	read_from(&mut Cursor::new(content), parse_options)
}

#[test_log::test]
fn empty_v2_2_tag() {
	let tagged = read(b"ID3\x02\x00\x00\x00\x00\x00\x0A", ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tagged.location, TagLocation::V2(2));
	assert!(tagged.record.is_empty());
}

#[test_log::test]
fn v2_2_title() {
	// The value has no encoding byte
	let mut content = b"ID3\x02\x00\x00\x00\x00\x00\x16".to_vec();
	content.extend(b"TT2\x00\x00\x05Hello");

	let tagged = read(&content, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("Hello"));
}

#[test_log::test]
fn v2_3_artist() {
	let mut content = b"ID3\x03\x00\x00\x00\x00\x00\x19".to_vec();
	content.extend(b"TPE1\x00\x00\x00\x04\x00\x00Rush");

	let tagged = read(&content, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.location, TagLocation::V2(3));
	assert_eq!(tagged.record.artist.as_deref(), Some("Rush"));
}

#[test_log::test]
fn v2_3_frame_stops_at_the_body_end() {
	// The frame claims 8 bytes, but the body ends after "Rush"
	let mut content = b"ID3\x03\x00\x00\x00\x00\x00\x19".to_vec();
	content.extend(b"TPE1\x00\x00\x00\x08\x00\x00Rush");
	content.extend(b"JUNK and more audio data");

	let tagged = read(&content, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.location, TagLocation::V2(3));
	assert_eq!(tagged.record.artist, None);

	let err = read(
		&content,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedFrame { .. }));
}

#[test_log::test]
fn v2_4_is_unsupported() {
	let content = id3v2_tag(4, 0, &v2_3_frame("TIT2", &latin1_text("Title")));

	let err = read(&content, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(4, _)));
}

#[test_log::test]
fn v2_2_all_fields() {
	let mut body = Vec::new();
	body.extend(v2_2_frame("TT2", &latin1_text("Title")));
	body.extend(v2_2_frame("TP1", &latin1_text("Artist")));
	body.extend(v2_2_frame("TAL", &latin1_text("Album")));
	body.extend(v2_2_frame("TYE", &latin1_text("1999")));
	body.extend(v2_2_frame("TRK", &latin1_text("4/10")));
	body.extend(v2_2_frame("TCO", &latin1_text("(17)Rock")));
	body.extend(v2_2_frame("COM", b"\x00engdescription\x00Comment"));
	body.extend(v2_2_frame("PIC", &[0; 32]));

	let tagged = read(&with_audio(0, &id3v2_tag(2, 0, &body)), ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(
		tagged.record,
		MetadataRecord {
			title: Some(String::from("Title")),
			artist: Some(String::from("Artist")),
			album: Some(String::from("Album")),
			year: Some(String::from("1999")),
			comment: Some(String::from("Comment")),
			track: Some(Track::Text(String::from("4/10"))),
			genre: Some(Genre::Text(String::from("(17)Rock"))),
		}
	);
}

#[test_log::test]
fn v2_3_encodings() {
	let mut body = Vec::new();
	body.extend(v2_3_frame(
		"TIT2",
		&[0x01, 0xFF, 0xFE, b'H', 0x00, b'i', 0x00, 0x00, 0x00],
	));
	body.extend(v2_3_frame("TALB", &[0x02, 0x00, b'B', 0x00, b'E']));
	body.extend(v2_3_frame("TPE1", b"\x03Bj\xC3\xB6rk"));
	body.extend(v2_3_frame("TCON", &latin1_text("Electronic")));

	let tagged = read(&id3v2_tag(3, 0, &body), ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tagged.record.title.as_deref(), Some("Hi"));
	assert_eq!(tagged.record.album.as_deref(), Some("BE"));
	assert_eq!(tagged.record.artist.as_deref(), Some("Bj\u{f6}rk"));
	assert_eq!(
		tagged.record.genre,
		Some(Genre::Text(String::from("Electronic")))
	);
}

#[test_log::test]
fn v2_2_identifiers_in_v2_3_are_ignored() {
	let body = v2_3_frame("TT2 ", &latin1_text("Title"));

	let tagged = read(&id3v2_tag(3, 0, &body), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert!(tagged.record.is_empty());
}

#[test_log::test]
fn extended_header() {
	// Size (excluding itself), flags, padding size
	let mut body = vec![0, 0, 0, 6, 0, 0, 0, 0, 0, 0];
	body.extend(v2_3_frame("TIT2", &latin1_text("After the extended header")));

	let tagged = read(&id3v2_tag(3, 0x40, &body), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(
		tagged.record.title.as_deref(),
		Some("After the extended header")
	);
}

#[test_log::test]
fn truncated_frame() {
	let mut body = Vec::new();
	body.extend(v2_3_frame("TIT2", &latin1_text("Title")));
	body.extend(b"TPE1\x00\x00\x10\x00\x00\x00Rush");

	let content = id3v2_tag(3, 0, &body);

	let tagged = read(&content, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("Title"));
	assert_eq!(tagged.record.artist, None);

	let err = read(
		&content,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::TruncatedFrame { id, size: 0x1000, .. } if id == "TPE1"
	));
}

#[test_log::test]
fn unsynchronised_body() {
	// The value is `0x00 0xFF b'a' b'b'` once unsynchronised
	let body = b"TIT2\x00\x00\x00\x04\x00\x00\x00\xFF\x00ab";

	let tagged = read(&id3v2_tag(3, 0x80, body), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("\u{FF}ab"));
}

#[test_log::test]
fn padding_ends_the_tag() {
	let mut body = v2_3_frame("TIT2", &latin1_text("Title"));
	body.extend([0; 64]);

	let tagged = read(&id3v2_tag(3, 0, &body), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("Title"));
}

#[test_log::test]
fn strict_size_validation() {
	// A declared size of 255 is encoded as `[0, 0, 1, 0x7F]`, which fails the byte sum check
	let mut body = v2_3_frame("TIT2", &latin1_text("Hello"));
	body.resize(244, 0);

	let content = id3v2_tag(3, 0, &body);
	assert_eq!(&content[6..10], &[0, 0, 1, 0x7F]);

	assert!(read(&content, ParseOptions::new()).unwrap().is_none());

	let tagged = read(
		&content,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap()
	.unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("Hello"));
}

#[test_log::test]
fn comments_can_be_skipped() {
	let body = v2_3_frame("COMM", b"\x00eng\x00Comment");
	let content = id3v2_tag(3, 0, &body);

	let tagged = read(&content, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.record.comment.as_deref(), Some("Comment"));

	let tagged = read(&content, ParseOptions::new().read_comments(false))
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.comment, None);
}

#[test_log::test]
fn duplicate_frames() {
	let mut body = v2_3_frame("TALB", &latin1_text("First"));
	body.extend(v2_3_frame("TALB", &latin1_text("Second")));

	let tagged = read(&id3v2_tag(3, 0, &body), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.album.as_deref(), Some("Second"));
}

#[test_log::test]
fn compressed_v2_2_tag() {
	let content = id3v2_tag(2, 0x40, &v2_2_frame("TT2", &latin1_text("Title")));

	let err = read(&content, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}
