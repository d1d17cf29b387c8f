use crate::header::SentenceKind;

/// Errors raised while turning a sentence payload into typed values.
///
/// None of these are fatal to a stream: the decoder drops the offending
/// sentence and resumes scanning. They exist so the reason for a drop
/// can be logged and asserted on in tests.
///
/// ```text
///   SentenceError
///   ├── TooFewFields     ← payload shorter than the kind requires
///   ├── InvalidNumber    ← required numeric field failed to parse
///   └── InvalidUtf8      ← payload bytes are not ASCII/UTF-8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SentenceError {
    /// The sentence carried fewer fields than its layout needs.
    #[error("{kind} sentence needs more than {needed} fields, found {found}")]
    TooFewFields {
        kind: SentenceKind,
        needed: usize,
        found: usize,
    },

    /// A field that must hold a number did not parse as one.
    #[error("field {field} (index {index}) is not a number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        index: usize,
        value: String,
    },

    /// The payload contained bytes that are not valid UTF-8.
    #[error("sentence payload is not valid UTF-8")]
    InvalidUtf8,
}
