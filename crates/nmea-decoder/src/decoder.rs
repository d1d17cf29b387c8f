use std::time::SystemTime;

use nmea_wire::{Fields, GgaFix, HEADER_SIZE, RmcData, SentenceError, SentenceKind};
use tracing::{debug, trace};

use crate::buffer::AccumulationBuffer;
use crate::config::{DEFAULT_MAX_SENTENCE_LEN, DecoderConfig, MAX_INITIAL_CAPACITY};
use crate::event::{Callbacks, DecodedFix, DecodedHeading, EventSink};
use crate::state::ParseState;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Running totals, for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Sentences that produced events.
    pub sentences_decoded: u64,
    /// Recognized sentences dropped for missing or malformed fields,
    /// or for exceeding the payload limit.
    pub sentences_discarded: u64,
    /// Bytes skipped while looking for a header.
    pub noise_bytes: u64,
    /// Times the buffer was compacted.
    pub compactions: u64,
}

/// Incremental NMEA 0183 decoder for one byte stream.
///
/// Feed it chunks of any size with [`append`](Self::append); every
/// `GGA` or `RMC` sentence completed by a chunk is decoded and handed to
/// the [`EventSink`] before `append` returns.
///
/// Decoding runs as a loop over two states:
///
///   1. **Scanning**: test the 6-byte window at the read cursor. A
///      `GGA`/`RMC` sentence ID switches to buffering; anything else
///      skips one byte, which resynchronizes past noise and unknown
///      sentence types.
///   2. **Buffering**: copy payload bytes, at most `chunk_size` per
///      step, until a CR. On CR the terminator is consumed (LF too, if
///      it has arrived), the payload is split into fields and decoded,
///      and the state returns to scanning.
///
/// After the loop a fully drained buffer is reset; otherwise the
/// buffer is compacted once its retired prefix passes
/// `discard_high_water`. Memory therefore stays bounded under endless
/// noise as well as under endless well-formed traffic.
///
/// Malformed sentences never surface as errors: they are counted in
/// [`DecoderStats::sentences_discarded`], logged at `debug`, and
/// skipped.
///
/// # Example
///
/// ```rust
/// use std::time::SystemTime;
/// use nmea_decoder::{DecoderEvent, StreamDecoder};
///
/// let mut decoder = StreamDecoder::new(Vec::<DecoderEvent>::new());
/// decoder.append(b"$GPRMC,225446,A,4916.45,N,12311.12,W,", SystemTime::now());
/// decoder.append(b"000.5,054.7,191194,020.3,E*68\r\n", SystemTime::now());
/// assert_eq!(decoder.sink().len(), 2);
/// ```
pub struct StreamDecoder<S> {
    sink: S,
    config: DecoderConfig,
    buffer: AccumulationBuffer,
    state: ParseState,
    payload: Vec<u8>,
    stats: DecoderStats,
}

impl<S: EventSink> StreamDecoder<S> {
    /// Create a decoder with [`DecoderConfig::default`].
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, DecoderConfig::default())
    }

    /// Create a decoder with explicit tuning.
    ///
    /// Only a bounded amount is reserved up front; the buffer and the
    /// payload grow on demand up to the configured limits.
    #[must_use]
    pub fn with_config(sink: S, config: DecoderConfig) -> Self {
        Self {
            sink,
            buffer: AccumulationBuffer::with_capacity(
                config.initial_capacity.min(MAX_INITIAL_CAPACITY),
            ),
            payload: Vec::with_capacity(config.max_sentence_len.min(DEFAULT_MAX_SENTENCE_LEN)),
            config,
            state: ParseState::Scanning,
            stats: DecoderStats::default(),
        }
    }

    /// Append a chunk received at `timestamp` and decode whatever it
    /// completes.
    ///
    /// Every event produced by this call carries `timestamp`.
    pub fn append(&mut self, chunk: &[u8], timestamp: SystemTime) {
        self.buffer.extend(chunk);

        while self.step(timestamp) {}

        if self.buffer.is_drained() {
            self.buffer.reset();
        } else if self.buffer.discard_count() > self.config.discard_high_water {
            debug!(
                retired = self.buffer.discard_count(),
                kept = self.buffer.unread().len(),
                "compacting accumulation buffer"
            );
            self.buffer.compact();
            self.stats.compactions += 1;
        }
    }

    /// Run one state-machine step. Returns `false` when more input is
    /// needed.
    fn step(&mut self, timestamp: SystemTime) -> bool {
        match self.state {
            ParseState::Scanning => self.scan(),
            ParseState::Buffering(kind) => self.buffer_payload(kind, timestamp),
        }
    }

    fn scan(&mut self) -> bool {
        let unread = self.buffer.unread();
        if unread.len() < HEADER_SIZE {
            return false;
        }

        if let Some(kind) = SentenceKind::from_header(&unread[..HEADER_SIZE]) {
            trace!(%kind, offset = self.buffer.read_cursor(), "sentence header");
            self.buffer.consume(HEADER_SIZE);
            self.payload.clear();
            self.state = ParseState::Buffering(kind);
        } else {
            self.buffer.consume(1);
            self.stats.noise_bytes += 1;
        }
        true
    }

    fn buffer_payload(&mut self, kind: SentenceKind, timestamp: SystemTime) -> bool {
        let unread = self.buffer.unread();
        if unread.is_empty() {
            return false;
        }

        // Never copy past max_sentence_len + 1, so an oversize payload is
        // dropped at the same byte however the input was chunked.
        let room = self.config.max_sentence_len.saturating_add(1) - self.payload.len();
        let limit = self.config.chunk_size.max(1).min(room);
        let window = &unread[..unread.len().min(limit)];
        let (consumed, terminated) = match window.iter().position(|&b| b == CR) {
            Some(end) => {
                self.payload.extend_from_slice(&window[..end]);
                // LF may still be in flight; a late one is skipped as noise.
                let tail = if unread.get(end + 1) == Some(&LF) { 2 } else { 1 };
                (end + tail, true)
            }
            None => {
                self.payload.extend_from_slice(window);
                (window.len(), false)
            }
        };
        self.buffer.consume(consumed);

        if self.payload.len() > self.config.max_sentence_len {
            debug!(%kind, len = self.payload.len(), "discarding oversize sentence");
            self.stats.sentences_discarded += 1;
            self.reset_sentence();
        } else if terminated {
            self.finish_sentence(kind, timestamp);
        }
        true
    }

    fn finish_sentence(&mut self, kind: SentenceKind, timestamp: SystemTime) {
        match decode_payload(kind, &self.payload) {
            Ok(Decoded::Fix(fix)) => {
                self.stats.sentences_decoded += 1;
                self.sink.on_fix(DecodedFix {
                    latitude: fix.latitude,
                    longitude: fix.longitude,
                    timestamp,
                });
            }
            Ok(Decoded::RecommendedMinimum(rmc)) => {
                self.stats.sentences_decoded += 1;
                self.sink.on_fix(DecodedFix {
                    latitude: rmc.latitude,
                    longitude: rmc.longitude,
                    timestamp,
                });
                self.sink.on_heading(DecodedHeading {
                    heading: rmc.heading_radians(),
                    timestamp,
                });
            }
            Err(error) => {
                debug!(%kind, %error, "discarding sentence");
                self.stats.sentences_discarded += 1;
            }
        }
        self.reset_sentence();
    }

    fn reset_sentence(&mut self) {
        self.state = ParseState::Scanning;
        self.payload.clear();
    }

    /// Current position in the scan/buffer state machine.
    #[must_use]
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Totals accumulated since construction.
    #[must_use]
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Tuning the decoder was built with.
    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Bytes currently held by the accumulation buffer, retired and
    /// unread together.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffer.write_cursor()
    }

    /// Examined bytes waiting for the next compaction.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.buffer.discard_count()
    }

    /// Payload bytes of the sentence being buffered.
    #[must_use]
    pub fn pending_payload(&self) -> &[u8] {
        &self.payload
    }

    /// The event sink, e.g. to inspect collected events.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the event sink, e.g. to drain a `Vec` between
    /// appends.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the decoder and return its sink. A sentence still being
    /// buffered is dropped.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<F, H> StreamDecoder<Callbacks<F, H>>
where
    F: FnMut(f64, f64, SystemTime),
    H: FnMut(f32, SystemTime),
{
    /// Build a decoder from a position delegate and a heading delegate.
    pub fn from_callbacks(on_fix: F, on_heading: H) -> Self {
        Self::new(Callbacks::new(on_fix, on_heading))
    }
}

enum Decoded {
    Fix(GgaFix),
    RecommendedMinimum(RmcData),
}

fn decode_payload(kind: SentenceKind, payload: &[u8]) -> Result<Decoded, SentenceError> {
    let fields = Fields::from_bytes(payload)?;
    match kind {
        SentenceKind::Fix => GgaFix::parse(&fields).map(Decoded::Fix),
        SentenceKind::RecommendedMinimum => {
            RmcData::parse(&fields).map(Decoded::RecommendedMinimum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DecoderEvent;

    const GGA: &[u8] =
        b"$GPGGA,172814.0,3723.46587704,N,12202.26957864,W,2,6,1.2,18.893,M,-25.669,M,2.0,0031*4F\r\n";
    const RMC: &[u8] = b"$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68\r\n";

    fn ts() -> SystemTime {
        SystemTime::UNIX_EPOCH
    }

    fn decoder() -> StreamDecoder<Vec<DecoderEvent>> {
        StreamDecoder::new(Vec::new())
    }

    #[test]
    fn starts_scanning_with_empty_buffer() {
        let d = decoder();
        assert_eq!(d.state(), ParseState::Scanning);
        assert_eq!(d.buffered_len(), 0);
    }

    #[test]
    fn header_switches_to_buffering() {
        let mut d = decoder();
        d.append(b"$GPGGA,1", ts());
        assert_eq!(d.state(), ParseState::Buffering(SentenceKind::Fix));
        assert_eq!(d.pending_payload(), b",1");
    }

    #[test]
    fn partial_header_waits_for_more() {
        let mut d = decoder();
        d.append(b"$GPRM", ts());
        assert!(d.state().is_scanning());
        d.append(b"C", ts());
        assert_eq!(d.state().kind(), Some(SentenceKind::RecommendedMinimum));
    }

    #[test]
    fn complete_sentence_drains_buffer() {
        let mut d = decoder();
        d.append(GGA, ts());
        assert_eq!(d.sink().len(), 1);
        assert_eq!(d.buffered_len(), 0);
        assert!(d.state().is_scanning());
        assert_eq!(d.stats().sentences_decoded, 1);
    }

    #[test]
    fn pending_sentence_survives_drained_buffer() {
        let mut d = decoder();
        d.append(&GGA[..40], ts());
        assert_eq!(d.buffered_len(), 0);
        d.append(&GGA[40..], ts());
        assert_eq!(d.sink().len(), 1);
    }

    #[test]
    fn rmc_emits_fix_then_heading() {
        let mut d = decoder();
        d.append(RMC, ts());
        let events = d.into_sink();
        assert!(matches!(events[0], DecoderEvent::Fix(_)));
        assert!(matches!(events[1], DecoderEvent::Heading(_)));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn cr_without_lf_still_decodes() {
        let mut d = decoder();
        d.append(&GGA[..GGA.len() - 1], ts());
        assert_eq!(d.sink().len(), 1);
        d.append(b"\n", ts());
        d.append(GGA, ts());
        assert_eq!(d.sink().len(), 2);
    }

    #[test]
    fn noise_is_counted() {
        let mut d = decoder();
        d.append(b"Hello World", ts());
        assert!(d.sink().is_empty());
        assert_eq!(d.stats().noise_bytes, 6);
        assert_eq!(d.discarded(), 6);
    }

    #[test]
    fn malformed_latitude_is_discarded() {
        let mut d = decoder();
        d.append(b"$GPGGA,172814.0,37x3.4,N,12202.2,W,2,6*00\r\n", ts());
        assert!(d.sink().is_empty());
        assert_eq!(d.stats().sentences_discarded, 1);
        d.append(GGA, ts());
        assert_eq!(d.sink().len(), 1);
    }

    #[test]
    fn rmc_with_bad_course_emits_nothing() {
        let mut d = decoder();
        d.append(b"$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,,191194,020.3,E*68\r\n", ts());
        assert!(d.sink().is_empty());
    }

    #[test]
    fn oversize_payload_is_dropped() {
        let config = DecoderConfig {
            max_sentence_len: 100,
            ..DecoderConfig::default()
        };
        let mut d = StreamDecoder::with_config(Vec::new(), config);
        d.append(b"$GPGGA,", ts());
        d.append(&[b'9'; 150], ts());
        assert!(d.state().is_scanning());
        assert_eq!(d.stats().sentences_discarded, 1);
        d.append(b"\r\n", ts());
        d.append(GGA, ts());
        assert_eq!(d.sink().len(), 1);
    }

    #[test]
    fn huge_limits_do_not_preallocate() {
        let config = DecoderConfig {
            max_sentence_len: usize::MAX,
            initial_capacity: usize::MAX,
            ..DecoderConfig::default()
        };
        let mut d = StreamDecoder::with_config(Vec::new(), config);
        d.append(GGA, ts());
        d.append(RMC, ts());
        assert_eq!(d.sink().len(), 3);
    }

    #[test]
    fn tiny_chunk_size_still_terminates() {
        let config = DecoderConfig {
            chunk_size: 0,
            ..DecoderConfig::default()
        };
        let mut d = StreamDecoder::with_config(Vec::new(), config);
        d.append(GGA, ts());
        assert_eq!(d.sink().len(), 1);
    }

    #[test]
    fn noise_triggers_compaction() {
        let config = DecoderConfig {
            discard_high_water: 64,
            ..DecoderConfig::default()
        };
        let mut d = StreamDecoder::with_config(Vec::new(), config);
        for _ in 0..10 {
            d.append(&[b'x'; 50], ts());
            assert!(d.buffered_len() <= 64 + 50);
        }
        assert!(d.stats().compactions > 0);
    }

    #[test]
    fn events_carry_append_timestamp() {
        let later = ts() + std::time::Duration::from_secs(5);
        let mut d = decoder();
        d.append(&RMC[..10], ts());
        d.append(&RMC[10..], later);
        assert!(d.sink().iter().all(|e| e.timestamp() == later));
    }
}
