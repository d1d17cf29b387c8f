/// Stand-in for the message bus: decoded readings are serialised as
/// JSON lines and written to stdout.
///
/// ```text
/// {"session":111,"sender_stamp":0,"sent_at_us":1700000000000000,"kind":"geodetic_wgs84","latitude":37.391098,"longitude":-122.037826}
/// {"session":111,"sender_stamp":0,"sent_at_us":1700000000000000,"kind":"geodetic_heading","north_heading":0.95469}
/// ```
///
/// [`EventSink`] methods cannot fail, so the first write error is kept
/// and reported by [`Publisher::finish`]; later readings are dropped.
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use nmea_decoder::{DecodedFix, DecodedHeading, EventSink};
use serde::Serialize;
use tracing::{debug, warn};

/// One published reading.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub session: u16,
    pub sender_stamp: u32,
    /// Receipt time of the chunk that completed the sentence, in
    /// microseconds since the Unix epoch.
    pub sent_at_us: u64,
    #[serde(flatten)]
    pub reading: Reading,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reading {
    GeodeticWgs84 { latitude: f64, longitude: f64 },
    GeodeticHeading { north_heading: f32 },
}

pub struct Publisher<W> {
    out: W,
    session: u16,
    sender_stamp: u32,
    published: u64,
    error: Option<io::Error>,
}

impl Publisher<io::Stdout> {
    pub fn stdout(session: u16, sender_stamp: u32) -> Self {
        Self::new(io::stdout(), session, sender_stamp)
    }
}

impl<W: Write> Publisher<W> {
    pub fn new(out: W, session: u16, sender_stamp: u32) -> Self {
        Self {
            out,
            session,
            sender_stamp,
            published: 0,
            error: None,
        }
    }

    pub fn published(&self) -> u64 {
        self.published
    }

    /// Flush the output and surface the first write error, if any.
    pub fn finish(mut self) -> Result<u64> {
        if let Some(e) = self.error.take() {
            return Err(e).context("cannot publish reading");
        }
        self.out.flush().context("cannot flush output")?;
        Ok(self.published)
    }

    fn publish(&mut self, timestamp: SystemTime, reading: Reading) {
        if self.error.is_some() {
            return;
        }
        debug!(?reading, "publishing");

        let envelope = Envelope {
            session: self.session,
            sender_stamp: self.sender_stamp,
            sent_at_us: micros_since_epoch(timestamp),
            reading,
        };
        let written = serde_json::to_writer(&mut self.out, &envelope)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));

        match written {
            Ok(()) => self.published += 1,
            Err(e) => {
                warn!(error = %e, "output closed, dropping further readings");
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> EventSink for Publisher<W> {
    fn on_fix(&mut self, fix: DecodedFix) {
        self.publish(
            fix.timestamp,
            Reading::GeodeticWgs84 {
                latitude: fix.latitude,
                longitude: fix.longitude,
            },
        );
    }

    fn on_heading(&mut self, heading: DecodedHeading) {
        self.publish(
            heading.timestamp,
            Reading::GeodeticHeading {
                north_heading: heading.heading,
            },
        );
    }
}

fn micros_since_epoch(timestamp: SystemTime) -> u64 {
    timestamp
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nmea_decoder::StreamDecoder;

    use super::*;

    const RMC: &[u8] = b"$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68\r\n";

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_json_line_per_reading() {
        let mut decoder = StreamDecoder::new(Publisher::new(Vec::new(), 111, 7));
        decoder.append(RMC, UNIX_EPOCH + Duration::from_micros(42));
        let publisher = decoder.into_sink();
        assert_eq!(publisher.published(), 2);

        let text = String::from_utf8(publisher.out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0]["kind"], "geodetic_wgs84");
        assert_eq!(lines[0]["session"], 111);
        assert_eq!(lines[0]["sender_stamp"], 7);
        assert_eq!(lines[0]["sent_at_us"], 42);
        assert!((lines[0]["latitude"].as_f64().unwrap() - 49.274_167).abs() < 1e-6);
        assert_eq!(lines[1]["kind"], "geodetic_heading");
        assert!((lines[1]["north_heading"].as_f64().unwrap() - 0.954_69).abs() < 1e-4);
    }

    #[test]
    fn write_failure_is_reported_by_finish() {
        let mut decoder = StreamDecoder::new(Publisher::new(ClosedPipe, 0, 0));
        decoder.append(RMC, UNIX_EPOCH);
        let publisher = decoder.into_sink();
        assert_eq!(publisher.published(), 0);
        assert!(publisher.finish().is_err());
    }

    #[test]
    fn pre_epoch_timestamp_clamps_to_zero() {
        assert_eq!(micros_since_epoch(UNIX_EPOCH - Duration::from_secs(1)), 0);
    }
}
