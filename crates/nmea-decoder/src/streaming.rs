use std::time::SystemTime;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::decoder::StreamDecoder;
use crate::error::StreamError;
use crate::event::EventSink;

/// Size of each read issued against the transport.
pub const DEFAULT_READ_SIZE: usize = 4096;

/// Feed everything `reader` yields into `decoder`.
///
/// Each successful read becomes one [`StreamDecoder::append`] call,
/// stamped with the wall-clock time at which the read completed. The
/// chunk boundaries are whatever the transport delivers; the decoder
/// does not care.
///
/// Returns the total number of bytes read once the reader reports EOF.
/// A sentence still pending at EOF is never emitted.
///
/// # Example
///
/// ```rust,no_run
/// use nmea_decoder::{DecoderEvent, StreamDecoder, streaming};
/// use tokio::net::TcpStream;
///
/// async fn run() -> Result<(), Box<dyn std::error::Error>> {
///     let mut socket = TcpStream::connect("10.42.42.112:9999").await?;
///     let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<DecoderEvent>();
///     let mut decoder = StreamDecoder::new(tx);
///     tokio::spawn(async move {
///         while let Some(event) = rx.recv().await {
///             println!("{event:?}");
///         }
///     });
///     streaming::pump(&mut socket, &mut decoder, streaming::DEFAULT_READ_SIZE).await?;
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// Returns [`StreamError::Io`] if a read fails.
pub async fn pump<R, S>(
    reader: &mut R,
    decoder: &mut StreamDecoder<S>,
    read_size: usize,
) -> Result<u64, StreamError>
where
    R: AsyncRead + Unpin,
    S: EventSink,
{
    let mut chunk = vec![0u8; read_size.max(1)];
    let mut bytes_read = 0u64;

    loop {
        let n = reader
            .read(&mut chunk)
            .await
            .map_err(|source| StreamError::Io { bytes_read, source })?;

        if n == 0 {
            debug!(bytes_read, "reader reached end of stream");
            return Ok(bytes_read);
        }

        bytes_read += n as u64;
        decoder.append(&chunk[..n], SystemTime::now());
    }
}
