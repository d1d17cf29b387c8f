use std::fmt::Write as _;

use crate::checksum;
use crate::header::{SENTENCE_START, SentenceKind};

/// Builder that formats a complete sentence, checksum and terminator
/// included.
///
/// Used to produce fixtures, bench inputs and simulated device output.
/// The decoder never needs it.
///
/// # Example
///
/// ```rust
/// use nmea_wire::SentenceWriter;
///
/// let line = SentenceWriter::new("GP", "GGA")
///     .field("172814.0")
///     .field("3723.46587704")
///     .field("N")
///     .finish();
/// assert!(line.starts_with("$GPGGA,172814.0,3723.46587704,N*"));
/// assert!(line.ends_with("\r\n"));
/// ```
#[derive(Clone, Debug)]
pub struct SentenceWriter {
    talker: String,
    sentence_id: String,
    fields: Vec<String>,
}

impl SentenceWriter {
    #[must_use]
    pub fn new(talker: &str, sentence_id: &str) -> Self {
        Self {
            talker: talker.to_string(),
            sentence_id: sentence_id.to_string(),
            fields: Vec::new(),
        }
    }

    /// Start a sentence of a decodable kind with the `GP` talker ID.
    #[must_use]
    pub fn for_kind(kind: SentenceKind) -> Self {
        Self::new("GP", kind.sentence_id())
    }

    /// Append one field verbatim.
    #[must_use]
    pub fn field(mut self, value: impl Into<String>) -> Self {
        self.fields.push(value.into());
        self
    }

    /// Append a latitude as `DDMM.MMMMMM` plus its `N`/`S` field.
    #[must_use]
    pub fn latitude(self, degrees: f64) -> Self {
        let hemisphere = if degrees < 0.0 { "S" } else { "N" };
        self.field(format_degrees_minutes(degrees, 2)).field(hemisphere)
    }

    /// Append a longitude as `DDDMM.MMMMMM` plus its `E`/`W` field.
    #[must_use]
    pub fn longitude(self, degrees: f64) -> Self {
        let hemisphere = if degrees < 0.0 { "W" } else { "E" };
        self.field(format_degrees_minutes(degrees, 3)).field(hemisphere)
    }

    /// Render `$<talker><id>,<fields>*<hh>\r\n`.
    #[must_use]
    pub fn finish(&self) -> String {
        let mut body = String::with_capacity(82);
        body.push_str(&self.talker);
        body.push_str(&self.sentence_id);
        for value in &self.fields {
            body.push(',');
            body.push_str(value);
        }

        let mut line = String::with_capacity(body.len() + 6);
        line.push(char::from(SENTENCE_START));
        line.push_str(&body);
        let _ = write!(line, "*{:02X}\r\n", checksum::compute(body.as_bytes()));
        line
    }

    /// A `GGA` sentence with a GPS fix at the given position.
    #[must_use]
    pub fn gga(time: &str, latitude: f64, longitude: f64) -> String {
        Self::for_kind(SentenceKind::Fix)
            .field(time)
            .latitude(latitude)
            .longitude(longitude)
            .field("1")
            .field("08")
            .field("0.9")
            .field("12.0")
            .field("M")
            .field("0.0")
            .field("M")
            .field("")
            .field("")
            .finish()
    }

    /// An `RMC` sentence with the given position and course in degrees.
    #[must_use]
    pub fn rmc(time: &str, latitude: f64, longitude: f64, course: f64) -> String {
        Self::for_kind(SentenceKind::RecommendedMinimum)
            .field(time)
            .field("A")
            .latitude(latitude)
            .longitude(longitude)
            .field("000.5")
            .field(format!("{course:05.1}"))
            .field("191194")
            .field("")
            .field("")
            .finish()
    }
}

/// Format absolute decimal degrees as degrees-minutes with
/// `degree_digits` zero-padded whole degrees.
fn format_degrees_minutes(degrees: f64, degree_digits: usize) -> String {
    let abs = degrees.abs();
    let whole = abs.trunc();
    let minutes = (abs - whole) * 60.0;
    format!("{whole:0degree_digits$.0}{minutes:09.6}")
}
