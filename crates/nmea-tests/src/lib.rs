//! Shared fixtures for the integration suites and benches.

use std::fmt::Write as _;
use std::time::SystemTime;

use nmea_decoder::{DecoderEvent, StreamDecoder};

/// Reference `GGA` sentence: 37.391098 N, 122.037826 W.
pub const GGA: &str =
    "$GPGGA,172814.0,3723.46587704,N,12202.26957864,W,2,6,1.2,18.893,M,-25.669,M,2.0,0031*4F\r\n";

/// [`GGA`] with the hemispheres flipped to south/east.
pub const GGA_SOUTH_EAST: &str =
    "$GPGGA,172814.0,3723.46587704,S,12202.26957864,E,2,6,1.2,18.893,M,-25.669,M,2.0,0031*4F\r\n";

/// Reference `RMC` sentence: 49.274167 N, 123.185333 W, course 54.7°.
pub const RMC: &str = "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68\r\n";

/// Decode `chunks` in order with a fresh decoder and return the events.
pub fn decode_chunks<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<DecoderEvent> {
    let mut decoder = StreamDecoder::new(Vec::new());
    for chunk in chunks {
        decoder.append(chunk, SystemTime::UNIX_EPOCH);
    }
    decoder.into_sink()
}

/// Decode `input` delivered in one chunk.
pub fn decode_all(input: &[u8]) -> Vec<DecoderEvent> {
    decode_chunks([input])
}

/// Render events one per line with fixed precision, for snapshots.
///
/// ```text
/// fix 37.391098 -122.037826
/// heading 0.95470
/// ```
pub fn transcript(events: &[DecoderEvent]) -> String {
    let mut out = String::new();
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = match event {
            DecoderEvent::Fix(fix) => write!(out, "fix {:.6} {:.6}", fix.latitude, fix.longitude),
            DecoderEvent::Heading(heading) => write!(out, "heading {:.5}", heading.heading),
        };
    }
    out
}

/// Assert two event lists match kind for kind within float tolerance.
///
/// # Panics
///
/// Panics on any mismatch.
pub fn assert_same_events(actual: &[DecoderEvent], expected: &[DecoderEvent]) {
    assert_eq!(actual.len(), expected.len(), "event count differs");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (DecoderEvent::Fix(a), DecoderEvent::Fix(e)) => {
                assert!((a.latitude - e.latitude).abs() < 1e-9, "latitude differs at {i}");
                assert!((a.longitude - e.longitude).abs() < 1e-9, "longitude differs at {i}");
            }
            (DecoderEvent::Heading(a), DecoderEvent::Heading(e)) => {
                assert!((a.heading - e.heading).abs() < 1e-6, "heading differs at {i}");
            }
            _ => panic!("event kind differs at {i}: {a:?} vs {e:?}"),
        }
    }
}
