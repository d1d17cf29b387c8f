#![no_main]

use std::time::SystemTime;

use libfuzzer_sys::fuzz_target;
use nmea_decoder::{DecoderConfig, StreamDecoder};
use nmea_wire::HEADER_SIZE;

// Fuzz target: StreamDecoder::append on arbitrary bytes.
//
// Catches bugs in:
// - Cursor arithmetic around partial headers and terminators
// - Buffer growth under noise (bounded by the high-water mark)
// - Payload growth past max_sentence_len
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig {
        discard_high_water: 256,
        max_sentence_len: 120,
        ..DecoderConfig::default()
    };
    let mut decoder = StreamDecoder::with_config((), config);
    decoder.append(data, SystemTime::UNIX_EPOCH);

    assert!(decoder.buffered_len() <= config.discard_high_water + HEADER_SIZE);
    assert!(decoder.pending_payload().len() <= config.max_sentence_len);
});
