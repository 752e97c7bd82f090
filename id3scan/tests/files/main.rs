#![allow(missing_docs)]

mod detect;
mod id3v1;
mod id3v2;
