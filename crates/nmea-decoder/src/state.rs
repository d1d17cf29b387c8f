use nmea_wire::SentenceKind;

/// Where the decoder is within the current sentence.
///
/// ```text
///              header matches
///   Scanning ─────────────────▶ Buffering(kind)
///      ▲  │                          │
///      │  └─ no match: skip 1 byte   │ CR seen, or payload too long
///      └─────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Looking for a `$ttGGA` / `$ttRMC` header window.
    #[default]
    Scanning,

    /// A header was recognized; payload bytes accumulate until CR.
    Buffering(SentenceKind),
}

impl ParseState {
    #[must_use]
    pub fn is_scanning(self) -> bool {
        matches!(self, Self::Scanning)
    }

    /// Kind of the sentence being buffered, if any.
    #[must_use]
    pub fn kind(self) -> Option<SentenceKind> {
        match self {
            Self::Scanning => None,
            Self::Buffering(kind) => Some(kind),
        }
    }
}
