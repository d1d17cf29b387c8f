/// Errors surfaced by the async reader pump.
///
/// [`StreamDecoder::append`](crate::StreamDecoder::append) itself never
/// fails: malformed sentences are dropped inside the decoder. The only
/// failure left for a caller to handle is the transport going away.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Reading from the underlying transport failed.
    #[error("transport read failed after {bytes_read} bytes: {source}")]
    Io {
        bytes_read: u64,
        #[source]
        source: std::io::Error,
    },
}
