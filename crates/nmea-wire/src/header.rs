use std::fmt;

/// Size of the `$ttIII` window that identifies a sentence: the `$`
/// marker, a two-letter talker ID and a three-letter sentence ID.
pub const HEADER_SIZE: usize = 6;

/// Byte that opens every sentence.
pub const SENTENCE_START: u8 = b'$';

/// Sentence layouts the decoder understands.
///
/// The talker ID (`GP`, `GN`, `GL`, ...) is ignored; only the three
/// letters at offsets 3..6 of the header window select the layout.
///
/// ```text
/// ┌────────┬────┬────┬─────────────────────┐
/// │ Offset │ 0  │1-2 │ 3-5                 │
/// ├────────┼────┼────┼─────────────────────┤
/// │ Byte   │ $  │ GP │ GGA → Fix           │
/// │        │    │    │ RMC → Recommended   │
/// └────────┴────┴────┴─────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    /// `GGA`: global positioning system fix data.
    Fix,
    /// `RMC`: recommended minimum navigation data.
    RecommendedMinimum,
}

impl SentenceKind {
    /// Classify a header window.
    ///
    /// Returns `None` when the window is shorter than [`HEADER_SIZE`] or
    /// names a sentence ID this crate does not decode. Offset 0 is not
    /// checked for `$`, matching receivers that emit `!` or omit it.
    #[must_use]
    pub fn from_header(window: &[u8]) -> Option<Self> {
        if window.len() < HEADER_SIZE {
            return None;
        }
        match &window[3..HEADER_SIZE] {
            b"GGA" => Some(Self::Fix),
            b"RMC" => Some(Self::RecommendedMinimum),
            _ => None,
        }
    }

    /// The three-letter sentence ID.
    #[must_use]
    pub fn sentence_id(self) -> &'static str {
        match self {
            Self::Fix => "GGA",
            Self::RecommendedMinimum => "RMC",
        }
    }

    /// Field count a sentence of this kind must exceed to be decoded.
    #[must_use]
    pub fn min_fields(self) -> usize {
        match self {
            Self::Fix => 5,
            Self::RecommendedMinimum => 8,
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sentence_id())
    }
}
