use crate::util::{encode_id3v1, temp_file, with_audio};

use id3scan::config::{ParseOptions, ParsingMode};
use id3scan::id3::v1::{Id3v1ExtendedTag, Id3v1Tag, PlayTime, Speed};
use id3scan::record::{Genre, Track};
use id3scan::{TagLocation, read_from, read_from_path};

use std::io::{Cursor, Write as _};

// A 128 byte ID3v1 region, with fields written at absolute offsets
struct Region([u8; 128]);

impl Region {
	fn new() -> Self {
		let mut region = [0; 128];
		region[..3].copy_from_slice(b"TAG");
		Self(region)
	}

	fn with(mut self, offset: usize, value: &[u8]) -> Self {
		self.0[offset..offset + value.len()].copy_from_slice(value);
		self
	}

	fn bytes(self) -> [u8; 128] {
		self.0
	}
}

fn extended_block(title: &[u8], genre: &[u8]) -> Vec<u8> {
	let mut block = vec![0; 227];
	block[..4].copy_from_slice(b"TAG+");
	block[4..4 + title.len()].copy_from_slice(title);
	block[184] = 1;
	block[185..185 + genre.len()].copy_from_slice(genre);
	block[215..221].copy_from_slice(b"001:30");
	block
}

#[test_log::test]
fn decode_encode_roundtrip() {
	let regions = [
		// ID3v1.1, every field
		Region::new()
			.with(3, b"Title")
			.with(33, b"Artist")
			.with(63, b"Album")
			.with(93, b"1999")
			.with(97, b"Comment")
			.with(126, &[7])
			.with(127, &[17])
			.bytes(),
		// Full width fields
		Region::new()
			.with(3, b"A title that fills all thirty!")
			.with(97, b"A comment spanning 28 bytes.")
			.with(127, &[255])
			.bytes(),
		// Embedded nulls, with the reserved byte set
		Region::new()
			.with(3, b"Foo\0Bar")
			.with(97, b"\0\0leading nulls")
			.with(125, &[0x20])
			.with(126, &[5])
			.bytes(),
		// Space padded fields are kept as-is
		Region::new()
			.with(3, b"Padded    ")
			.with(93, b"84  ")
			.bytes(),
		// Latin-1
		Region::new()
			.with(33, b"Caf\xE9 \xC6sir")
			.with(127, &[2])
			.bytes(),
		// Nothing but the marker
		Region::new().bytes(),
	];

	for region in regions {
		let mut reader = Cursor::new(region);
		let tag = Id3v1Tag::read_from(&mut reader, ParseOptions::new())
			.unwrap()
			.unwrap();

		assert_eq!(encode_id3v1(&tag), region);
	}
}

#[test_log::test]
fn read_v1_from_audio() {
	let tag = Region::new()
		.with(3, b"Title")
		.with(33, b"Artist")
		.with(93, b"2004")
		.with(126, &[3])
		.with(127, &[80])
		.bytes();

	let tagged = read_from(&mut Cursor::new(with_audio(1000, &tag)), ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tagged.location, TagLocation::V1);

	let record = tagged.record;
	assert_eq!(record.title.as_deref(), Some("Title"));
	assert_eq!(record.artist.as_deref(), Some("Artist"));
	assert_eq!(record.album, None);
	assert_eq!(record.year.as_deref(), Some("2004"));
	assert_eq!(record.comment, None);
	assert_eq!(record.track, Some(Track::Number(3)));
	assert_eq!(record.genre, Some(Genre::Index(80)));
}

#[test_log::test]
fn embedded_null_and_reserved_byte() {
	let tag = Region::new()
		.with(3, b"Foo\0Bar")
		.with(125, &[0x20])
		.with(126, &[5])
		.bytes();

	// Nothing about these bytes is malformed, even in strict mode
	for parsing_mode in [ParsingMode::Strict, ParsingMode::BestAttempt] {
		let tag = Id3v1Tag::read_from(
			&mut Cursor::new(tag),
			ParseOptions::new().parsing_mode(parsing_mode),
		)
		.unwrap()
		.unwrap();

		assert_eq!(tag.title.as_deref(), Some("Foo\0Bar"));
		assert_eq!(tag.reserved, 0x20);
		assert_eq!(tag.track_number, Some(5));
	}

	let tagged = read_from(&mut Cursor::new(with_audio(64, &tag)), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.track, Some(Track::Number(5)));
}

#[test_log::test]
fn latin1_fields() {
	let tag = Region::new().with(33, b"Caf\xE9").bytes();

	let tagged = read_from(&mut Cursor::new(tag), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.artist.as_deref(), Some("Caf\u{e9}"));
}

#[test_log::test]
fn trailing_spaces_are_configurable() {
	let tag = Region::new().with(3, b"Padded    ").bytes();

	let kept = read_from(&mut Cursor::new(tag), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(kept.record.title.as_deref(), Some("Padded    "));

	let trimmed = read_from(
		&mut Cursor::new(tag),
		ParseOptions::new().trim_trailing_spaces(true),
	)
	.unwrap()
	.unwrap();
	assert_eq!(trimmed.record.title.as_deref(), Some("Padded"));
}

#[test_log::test]
fn extended_tag() {
	let mut content = with_audio(
		64,
		&extended_block(b"A title longer than thirty bytes", b"Synthwave"),
	);
	content.extend(
		Region::new()
			.with(3, b"A title longer than thirty by")
			.with(93, b"2010")
			.bytes(),
	);

	let tagged = read_from(&mut Cursor::new(&content), ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_eq!(tagged.location, TagLocation::V1Extended);
	assert_eq!(
		tagged.record.title.as_deref(),
		Some("A title longer than thirty bytes")
	);
	assert_eq!(
		tagged.record.genre,
		Some(Genre::Text(String::from("Synthwave")))
	);

	// Nothing is borrowed from the trailing ID3v1 tag
	assert_eq!(tagged.record.year, None);

	let extended = Id3v1ExtendedTag::read_from(&mut Cursor::new(&content), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(extended.speed, Speed::Slow);
	assert_eq!(
		extended.start_time,
		Some(PlayTime {
			minutes: 1,
			seconds: 30
		})
	);
	assert_eq!(extended.end_time, None);
}

#[test_log::test]
fn extended_tag_strict_speed() {
	let mut content = extended_block(b"Title", b"");
	content[184] = 5;
	content.extend(Region::new().bytes());

	let tagged = read_from(&mut Cursor::new(&content), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("Title"));

	assert!(
		read_from(
			&mut Cursor::new(&content),
			ParseOptions::new().parsing_mode(ParsingMode::Strict)
		)
		.is_err()
	);
}

#[test_log::test]
fn read_from_file() {
	let tag = Region::new()
		.with(3, b"On disk")
		.with(127, &[12])
		.bytes();

	let mut file = temp_file(&with_audio(512, &tag));
	let tagged = read_from(&mut file, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tagged.record.title.as_deref(), Some("On disk"));
	assert_eq!(tagged.record.genre, Some(Genre::Index(12)));
}

#[test_log::test]
fn read_from_named_path() {
	let tag = Region::new().with(33, b"Someone").bytes();

	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&with_audio(300, &tag)).unwrap();
	file.flush().unwrap();

	let tagged = read_from_path(file.path(), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tagged.location, TagLocation::V1);
	assert_eq!(tagged.record.artist.as_deref(), Some("Someone"));
	assert_eq!(tagged.record.genre, Some(Genre::Index(0)));
}

#[test_log::test]
fn missing_path() {
	let dir = tempfile::tempdir().unwrap();
	assert!(read_from_path(dir.path().join("missing.mp3"), ParseOptions::new()).is_err());
}
