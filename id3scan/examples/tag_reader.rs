//! Print the ID3 tag of a file

use id3scan::config::ParseOptions;
use id3scan::read_from_path;
use id3scan::record::MetadataRecord;

use std::fmt::Display;
use std::path::Path;

fn print_field<T: Display>(name: &str, value: Option<T>) {
	match value {
		Some(value) => println!("{name}: {value}"),
		None => println!("{name}: None"),
	}
}

fn print_record(record: &MetadataRecord) {
	print_field("Title", record.title.as_deref());
	print_field("Artist", record.artist.as_deref());
	print_field("Album", record.album.as_deref());
	print_field("Year", record.year.as_deref());
	print_field("Comment", record.comment.as_deref());
	print_field("Track", record.track.as_ref());
	print_field("Genre", record.genre.as_ref());
}

fn main() {
	let path_str = std::env::args().nth(1).expect("ERROR: No path specified!");
	let path = Path::new(&path_str);

	if !path.is_file() {
		panic!("ERROR: Path is not a file!");
	}

	let Some(tagged) = read_from_path(path, ParseOptions::new()).expect("ERROR: Failed to read file!")
	else {
		println!("No ID3 tag found");
		return;
	};

	println!("--- Tag Information ({:?}) ---", tagged.location);
	print_record(&tagged.record);
}
