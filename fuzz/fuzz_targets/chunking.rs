#![no_main]

use std::time::SystemTime;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmea_decoder::{DecoderConfig, DecoderEvent, StreamDecoder};

// Fuzz target: identical events however the stream is split.
//
// Input format:
//   stream: bytes decoded twice
//   cuts:   chunk lengths applied in a cycle for the second pass
//   chunk_size: payload window for both passes
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    stream: Vec<u8>,
    cuts: Vec<u8>,
    chunk_size: u8,
}

fn decode<'a>(config: DecoderConfig, chunks: impl Iterator<Item = &'a [u8]>) -> Vec<DecoderEvent> {
    let mut decoder = StreamDecoder::with_config(Vec::new(), config);
    for chunk in chunks {
        decoder.append(chunk, SystemTime::UNIX_EPOCH);
    }
    decoder.into_sink()
}

fuzz_target!(|input: FuzzInput| {
    let config = DecoderConfig {
        chunk_size: usize::from(input.chunk_size),
        ..DecoderConfig::default()
    };
    let whole = decode(config, std::iter::once(&input.stream[..]));

    let mut chunks = Vec::new();
    let mut rest = &input.stream[..];
    let mut lengths = input.cuts.iter().map(|&n| usize::from(n).max(1)).cycle();
    while !rest.is_empty() {
        let len = lengths.next().unwrap_or(rest.len()).min(rest.len());
        let (head, tail) = rest.split_at(len);
        chunks.push(head);
        rest = tail;
    }
    let split = decode(config, chunks.into_iter());

    assert_eq!(whole, split);
});
