#![warn(clippy::pedantic)]

pub mod checksum;
pub mod coordinate;
pub mod error;
pub mod fields;
pub mod header;
pub mod sentence;
pub mod writer;

pub use error::SentenceError;
pub use fields::Fields;
pub use header::{HEADER_SIZE, SentenceKind};
pub use sentence::{GgaFix, RmcData};
pub use writer::SentenceWriter;
