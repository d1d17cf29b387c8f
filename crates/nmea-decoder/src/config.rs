/// Bytes copied into the pending payload per decode step.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Retired bytes tolerated at the front of the buffer before it is
/// compacted.
pub const DEFAULT_DISCARD_HIGH_WATER: usize = 32_768;

/// Payload length after which an unterminated sentence is abandoned.
pub const DEFAULT_MAX_SENTENCE_LEN: usize = 200;

/// Ceiling on the up-front accumulation buffer reservation. Larger
/// `initial_capacity` values are honored by growth, not preallocation.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Tuning knobs for [`StreamDecoder`](crate::StreamDecoder).
///
/// ```text
/// ┌────────────────────┬──────────┬──────────────────────────────────────┐
/// │ Field              │ Default  │ Purpose                              │
/// ├────────────────────┼──────────┼──────────────────────────────────────┤
/// │ chunk_size         │ 50       │ Max payload bytes examined per step  │
/// │ discard_high_water │ 32768    │ Compact once this many bytes retire  │
/// │ max_sentence_len   │ 200      │ Drop unterminated longer payloads    │
/// │ initial_capacity   │ 4096     │ Accumulation buffer preallocation    │
/// └────────────────────┴──────────┴──────────────────────────────────────┘
/// ```
///
/// Standard NMEA 0183 caps a sentence at 82 bytes, so the defaults
/// leave room for vendor extensions while keeping a corrupted stream
/// from holding an unbounded payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Upper bound on bytes copied into the payload per loop step.
    /// Values below 1 are treated as 1.
    pub chunk_size: usize,

    /// Number of examined bytes kept in front of the read cursor before
    /// the buffer is physically compacted.
    pub discard_high_water: usize,

    /// Longest payload accepted while waiting for the terminator.
    pub max_sentence_len: usize,

    /// Capacity reserved for the accumulation buffer up front, capped at
    /// [`MAX_INITIAL_CAPACITY`].
    pub initial_capacity: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            discard_high_water: DEFAULT_DISCARD_HIGH_WATER,
            max_sentence_len: DEFAULT_MAX_SENTENCE_LEN,
            initial_capacity: 4096,
        }
    }
}
