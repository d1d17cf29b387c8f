use bytes::BytesMut;

/// Append-only byte store with a read cursor.
///
/// ```text
///   0            read                       write
///   ├─────────────┼───────────────────────────┤
///   │  retired    │  unread (not classified)  │
///   └─────────────┴───────────────────────────┘
///    discard_count()
/// ```
///
/// Bytes behind the read cursor are either part of a consumed sentence
/// or skipped noise. They are not removed one at a time; the owner
/// calls [`compact`](Self::compact) once enough have piled up, or
/// [`reset`](Self::reset) when the buffer is fully drained.
#[derive(Debug, Default)]
pub struct AccumulationBuffer {
    bytes: BytesMut,
    read: usize,
}

impl AccumulationBuffer {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: BytesMut::with_capacity(capacity),
            read: 0,
        }
    }

    /// Append at the write cursor.
    pub fn extend(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    /// Bytes not yet classified.
    #[must_use]
    pub fn unread(&self) -> &[u8] {
        &self.bytes[self.read..]
    }

    /// Move the read cursor forward by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the unread length.
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.bytes.len() - self.read, "consume past write cursor");
        self.read += n;
    }

    #[must_use]
    pub fn read_cursor(&self) -> usize {
        self.read
    }

    #[must_use]
    pub fn write_cursor(&self) -> usize {
        self.bytes.len()
    }

    /// Examined bytes still held in front of the read cursor.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.read
    }

    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.read == self.bytes.len()
    }

    /// Drop everything and rewind both cursors. Keeps the allocation.
    pub fn reset(&mut self) {
        self.bytes.clear();
        self.read = 0;
    }

    /// Physically drop the retired prefix.
    ///
    /// The unread tail is copied into a fresh allocation so the memory
    /// that held the prefix is released rather than kept alive behind
    /// the new start.
    pub fn compact(&mut self) {
        self.bytes = BytesMut::from(self.unread());
        self.read = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_track_appends_and_consumes() {
        let mut buf = AccumulationBuffer::default();
        buf.extend(b"abcdef");
        buf.consume(2);
        assert_eq!(buf.read_cursor(), 2);
        assert_eq!(buf.write_cursor(), 6);
        assert_eq!(buf.unread(), b"cdef");
        assert!(!buf.is_drained());
        buf.consume(4);
        assert!(buf.is_drained());
    }

    #[test]
    fn compact_keeps_unread_tail() {
        let mut buf = AccumulationBuffer::with_capacity(16);
        buf.extend(b"noise$GP");
        buf.consume(5);
        buf.compact();
        assert_eq!(buf.read_cursor(), 0);
        assert_eq!(buf.unread(), b"$GP");
        assert_eq!(buf.write_cursor(), 3);
    }

    #[test]
    fn reset_empties_buffer() {
        let mut buf = AccumulationBuffer::default();
        buf.extend(b"xyz");
        buf.consume(3);
        buf.reset();
        assert_eq!(buf.write_cursor(), 0);
        assert_eq!(buf.discard_count(), 0);
    }

    #[test]
    #[should_panic(expected = "consume past write cursor")]
    fn consume_past_end_panics() {
        let mut buf = AccumulationBuffer::default();
        buf.extend(b"ab");
        buf.consume(3);
    }
}
