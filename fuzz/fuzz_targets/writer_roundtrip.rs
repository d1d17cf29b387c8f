#![no_main]

use std::time::SystemTime;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmea_decoder::{DecoderEvent, StreamDecoder};
use nmea_wire::SentenceWriter;

// Fuzz target: SentenceWriter output decodes to the written position.
//
// Input format:
//   latitude/longitude: scaled into [-90, 90] and [-180, 180]
//   course: scaled into [0, 360)
//   rmc: write RMC instead of GGA
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    latitude: i32,
    longitude: i32,
    course: u16,
    rmc: bool,
}

fuzz_target!(|input: FuzzInput| {
    let latitude = f64::from(input.latitude) / f64::from(i32::MAX) * 90.0;
    let longitude = f64::from(input.longitude) / f64::from(i32::MAX) * 180.0;
    let course = f64::from(input.course % 3600) / 10.0;

    let line = if input.rmc {
        SentenceWriter::rmc("120000", latitude, longitude, course)
    } else {
        SentenceWriter::gga("120000", latitude, longitude)
    };

    let mut decoder = StreamDecoder::new(Vec::new());
    decoder.append(line.as_bytes(), SystemTime::UNIX_EPOCH);
    let events = decoder.into_sink();

    assert_eq!(events.len(), if input.rmc { 2 } else { 1 });
    let DecoderEvent::Fix(fix) = events[0] else {
        panic!("first event must be a fix: {line}");
    };
    assert!((fix.latitude - latitude).abs() < 1e-6, "{line}");
    assert!((fix.longitude - longitude).abs() < 1e-6, "{line}");
});
