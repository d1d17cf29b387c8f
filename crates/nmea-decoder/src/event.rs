use std::time::SystemTime;

use tokio::sync::mpsc::UnboundedSender;

/// A decoded position in decimal degrees (WGS84, negative = south/west).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Receipt time of the chunk that completed the sentence.
    pub timestamp: SystemTime,
}

/// A decoded course over ground in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedHeading {
    pub heading: f32,
    /// Receipt time of the chunk that completed the sentence.
    pub timestamp: SystemTime,
}

/// Either event, for sinks that want a single stream.
///
/// An `RMC` sentence produces `Fix` followed by `Heading`; a `GGA`
/// sentence produces `Fix` only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecoderEvent {
    Fix(DecodedFix),
    Heading(DecodedHeading),
}

impl DecoderEvent {
    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        match self {
            Self::Fix(fix) => fix.timestamp,
            Self::Heading(heading) => heading.timestamp,
        }
    }
}

/// Receiver of decoded events.
///
/// Both methods run synchronously inside
/// [`StreamDecoder::append`](crate::StreamDecoder::append), on the
/// caller's thread, at most once per sentence. A slow sink stalls the
/// transport feeding the decoder, so heavy work belongs on another task
/// (see the `UnboundedSender` impl).
pub trait EventSink {
    fn on_fix(&mut self, _fix: DecodedFix) {}

    fn on_heading(&mut self, _heading: DecodedHeading) {}
}

/// Discards every event.
impl EventSink for () {}

/// Collects events in arrival order.
impl EventSink for Vec<DecoderEvent> {
    fn on_fix(&mut self, fix: DecodedFix) {
        self.push(DecoderEvent::Fix(fix));
    }

    fn on_heading(&mut self, heading: DecodedHeading) {
        self.push(DecoderEvent::Heading(heading));
    }
}

/// Hands events to another task. Events sent after the receiver is
/// dropped are lost.
impl EventSink for UnboundedSender<DecoderEvent> {
    fn on_fix(&mut self, fix: DecodedFix) {
        let _ = self.send(DecoderEvent::Fix(fix));
    }

    fn on_heading(&mut self, heading: DecodedHeading) {
        let _ = self.send(DecoderEvent::Heading(heading));
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_fix(&mut self, fix: DecodedFix) {
        (**self).on_fix(fix);
    }

    fn on_heading(&mut self, heading: DecodedHeading) {
        (**self).on_heading(heading);
    }
}

/// A pair of delegates bound at construction time.
///
/// ```rust
/// use nmea_decoder::StreamDecoder;
///
/// let mut fixes = 0;
/// let mut decoder = StreamDecoder::from_callbacks(
///     |_lat, _lon, _ts| fixes += 1,
///     |_heading, _ts| {},
/// );
/// decoder.append(b"Hello World", std::time::SystemTime::UNIX_EPOCH);
/// drop(decoder);
/// assert_eq!(fixes, 0);
/// ```
pub struct Callbacks<F, H> {
    on_fix: F,
    on_heading: H,
}

impl<F, H> Callbacks<F, H>
where
    F: FnMut(f64, f64, SystemTime),
    H: FnMut(f32, SystemTime),
{
    pub fn new(on_fix: F, on_heading: H) -> Self {
        Self { on_fix, on_heading }
    }
}

impl<F, H> EventSink for Callbacks<F, H>
where
    F: FnMut(f64, f64, SystemTime),
    H: FnMut(f32, SystemTime),
{
    fn on_fix(&mut self, fix: DecodedFix) {
        (self.on_fix)(fix.latitude, fix.longitude, fix.timestamp);
    }

    fn on_heading(&mut self, heading: DecodedHeading) {
        (self.on_heading)(heading.heading, heading.timestamp);
    }
}
