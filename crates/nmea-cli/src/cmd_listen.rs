/// Implementation of `nmea-gps listen`.
///
/// Connects to the GPS unit, feeds every TCP read into a
/// [`StreamDecoder`], and publishes each decoded reading through a
/// [`Publisher`]. The command runs until the peer closes the
/// connection, the read fails, or Ctrl-C is pressed.
///
/// ```text
///   TcpStream ──read──▶ StreamDecoder ──on_fix/on_heading──▶ Publisher ──▶ stdout
/// ```
///
/// Losing the connection is fatal: the command returns an error and the
/// process exits with code 1, leaving restarts to a supervisor.
use std::net::SocketAddr;

use anyhow::{Context, Result, anyhow};
use nmea_decoder::StreamDecoder;
use nmea_decoder::streaming::{self, DEFAULT_READ_SIZE};
use tokio::net::TcpStream;
use tracing::info;

use crate::ListenArgs;
use crate::publish::Publisher;

/// Run the `nmea-gps listen` command.
///
/// # Errors
///
/// Returns an error if the runtime cannot start, the connection cannot
/// be established, or the connection is lost.
pub fn run(args: &ListenArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(listen(args))
}

async fn listen(args: &ListenArgs) -> Result<()> {
    let addr = SocketAddr::from((args.nmea_ip, args.nmea_port));
    let mut socket = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;
    info!(%addr, session = args.cid, sender_stamp = args.id, "connected to NMEA source");

    let mut decoder = StreamDecoder::with_config(
        Publisher::stdout(args.cid, args.id),
        args.decoder.config(),
    );

    let outcome = tokio::select! {
        result = streaming::pump(&mut socket, &mut decoder, DEFAULT_READ_SIZE) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    let stats = decoder.stats();
    info!(
        decoded = stats.sentences_decoded,
        discarded = stats.sentences_discarded,
        noise_bytes = stats.noise_bytes,
        "decoder stopped"
    );
    decoder.into_sink().finish()?;

    match outcome {
        None => {
            info!("interrupted");
            Ok(())
        }
        Some(Ok(bytes_read)) => Err(anyhow!("connection to {addr} lost after {bytes_read} bytes")),
        Some(Err(e)) => Err(e).with_context(|| format!("connection to {addr} lost")),
    }
}
