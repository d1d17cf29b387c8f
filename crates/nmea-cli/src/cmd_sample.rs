/// Implementation of `nmea-gps sample`.
///
/// Prints `--count` GGA/RMC pairs describing a slow northeast drift,
/// handy as input for `replay` or for a fake TCP source:
///
/// ```text
/// nmea-gps sample --count 100 > track.nmea
/// nmea-gps sample | nc -l 9999
/// ```
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use nmea_wire::SentenceWriter;

use crate::SampleArgs;

const START_LATITUDE: f64 = 37.391_098;
const START_LONGITUDE: f64 = -122.037_826;
const STEP_DEGREES: f64 = 0.000_05;
const COURSE_DEGREES: f64 = 45.0;

/// Run the `nmea-gps sample` command.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run(args: &SampleArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for i in 0..args.count {
        let time = utc_time(i);
        let offset = f64::from(i) * STEP_DEGREES;
        let (latitude, longitude) = (START_LATITUDE + offset, START_LONGITUDE + offset);

        out.write_all(SentenceWriter::gga(&time, latitude, longitude).as_bytes())
            .context("cannot write to stdout")?;
        out.write_all(SentenceWriter::rmc(&time, latitude, longitude, COURSE_DEGREES).as_bytes())
            .context("cannot write to stdout")?;
    }

    out.flush().context("cannot write to stdout")
}

/// `hhmmss.00` for `seconds` past midnight, wrapping at 24h.
fn utc_time(seconds: u32) -> String {
    let s = seconds % 86_400;
    format!("{:02}{:02}{:02}.00", s / 3600, s % 3600 / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_time_of_day() {
        assert_eq!(utc_time(0), "000000.00");
        assert_eq!(utc_time(3_661), "010101.00");
        assert_eq!(utc_time(86_401), "000001.00");
    }
}
