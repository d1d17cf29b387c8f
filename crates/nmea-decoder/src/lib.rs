#![warn(clippy::pedantic)]

pub mod buffer;
pub mod config;
pub mod decoder;
pub mod error;
pub mod event;
pub mod state;
pub mod streaming;

pub use config::DecoderConfig;
pub use decoder::{DecoderStats, StreamDecoder};
pub use error::StreamError;
pub use event::{Callbacks, DecodedFix, DecodedHeading, DecoderEvent, EventSink};
pub use state::ParseState;
