use crate::error::SentenceError;

/// Separator between sentence fields.
pub const FIELD_SEPARATOR: char = ',';

/// Marker that introduces the two-digit checksum.
pub const CHECKSUM_MARKER: char = '*';

/// Comma-separated fields of one sentence payload.
///
/// The payload is everything after the 6-byte header, up to (not
/// including) the CR/LF terminator:
///
/// ```text
///   $GPGGA,172814.0,3723.46587704,N,...,0031*4F\r\n
///         └──────────────── payload ──────────┘
///          index 0  index 1      2
/// ```
///
/// The comma that follows the sentence ID is skipped so index 0 is the
/// first data field. Empty fields keep their position. The `*hh` suffix
/// is split off the last field and kept as raw text; it is never
/// checked against the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields<'a> {
    values: Vec<&'a str>,
    checksum: Option<&'a str>,
}

impl<'a> Fields<'a> {
    /// Split a payload string into fields.
    #[must_use]
    pub fn split(payload: &'a str) -> Self {
        let payload = payload.strip_prefix(FIELD_SEPARATOR).unwrap_or(payload);

        let (body, checksum) = match payload.rsplit_once(CHECKSUM_MARKER) {
            Some((body, tail)) if !tail.contains(FIELD_SEPARATOR) => (body, Some(tail)),
            _ => (payload, None),
        };

        Self {
            values: body.split(FIELD_SEPARATOR).collect(),
            checksum,
        }
    }

    /// Split raw payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SentenceError::InvalidUtf8`] if the bytes are not UTF-8.
    pub fn from_bytes(payload: &'a [u8]) -> Result<Self, SentenceError> {
        let text = std::str::from_utf8(payload).map_err(|_| SentenceError::InvalidUtf8)?;
        Ok(Self::split(text))
    }

    /// Field at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied()
    }

    /// Number of fields, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checksum text after `*`, unvalidated.
    #[must_use]
    pub fn checksum(&self) -> Option<&'a str> {
        self.checksum
    }

    /// Parse the field at `index` as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`SentenceError::InvalidNumber`] if the field is missing,
    /// empty, or not a decimal number.
    pub fn number(&self, index: usize, field: &'static str) -> Result<f64, SentenceError> {
        let raw = self.get(index).unwrap_or_default();
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SentenceError::InvalidNumber {
                field,
                index,
                value: raw.to_string(),
            })
    }
}
