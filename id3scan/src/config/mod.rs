//! Various configuration options to control id3scan

mod parse_options;
mod parsing_mode;

pub use parse_options::ParseOptions;
pub use parsing_mode::ParsingMode;
