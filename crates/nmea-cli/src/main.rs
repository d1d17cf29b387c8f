/// `nmea-gps`: decode position and heading from an NMEA 0183 GPS feed.
///
/// # Command overview
///
/// ```text
/// nmea-gps <COMMAND> [OPTIONS]
///
/// Commands:
///   listen   Connect to a GPS unit over TCP and publish decoded readings
///   replay   Decode a captured byte stream from a file
///   sample   Print synthetic GGA/RMC sentences
///   help     Print help information
///
/// Global options:
///   -v, --verbose    Log every decoded reading and every dropped sentence
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Readings are written to stdout as JSON lines; logs go to stderr so
/// stdout can be piped cleanly. `RUST_LOG` overrides the log level.
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success (or interrupted with Ctrl-C)           |
/// | 1    | Error, including loss of the TCP connection    |
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use nmea_decoder::DecoderConfig;
use nmea_decoder::config::{
    DEFAULT_CHUNK_SIZE, DEFAULT_DISCARD_HIGH_WATER, DEFAULT_MAX_SENTENCE_LEN,
};
use tracing_subscriber::EnvFilter;

mod cmd_listen;
mod cmd_replay;
mod cmd_sample;
mod publish;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode latitude/longitude/heading from a GPS unit speaking NMEA 0183.
#[derive(Parser)]
#[command(name = "nmea-gps", version, about = "NMEA 0183 GPS decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log each decoded reading and each discarded sentence.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Connect to a GPS unit over TCP and publish decoded readings.
    Listen(ListenArgs),
    /// Decode a captured byte stream from a file.
    Replay(ReplayArgs),
    /// Print synthetic GGA/RMC sentences.
    Sample(SampleArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `nmea-gps listen`.
///
/// ```text
/// nmea-gps listen --nmea-ip 10.42.42.112 --nmea-port 9999 --cid 111
/// ```
#[derive(clap::Args)]
pub struct ListenArgs {
    /// IPv4 address of the NMEA source.
    #[arg(long)]
    pub nmea_ip: Ipv4Addr,

    /// TCP port of the NMEA source.
    #[arg(long)]
    pub nmea_port: u16,

    /// Session identifier stamped on every published reading.
    #[arg(long)]
    pub cid: u16,

    /// Sender stamp, to tell several GPS units apart.
    #[arg(long, default_value_t = 0)]
    pub id: u32,

    #[command(flatten)]
    pub decoder: DecoderArgs,
}

/// Arguments for `nmea-gps replay`.
///
/// The file is fed to the decoder in `--chunk-size` byte pieces to
/// mimic arbitrary transport fragmentation.
#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Captured NMEA byte stream.
    pub file: PathBuf,

    /// Bytes per simulated read.
    #[arg(long, default_value_t = 64)]
    pub chunk_size: usize,

    /// Session identifier stamped on every published reading.
    #[arg(long, default_value_t = 0)]
    pub cid: u16,

    /// Sender stamp.
    #[arg(long, default_value_t = 0)]
    pub id: u32,

    #[command(flatten)]
    pub decoder: DecoderArgs,
}

/// Decoder tuning shared by `listen` and `replay`.
#[derive(clap::Args)]
pub struct DecoderArgs {
    /// Payload bytes examined per decode step.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = bounded(1, 1 << 16))]
    pub payload_step: usize,

    /// Skipped bytes tolerated before the input buffer is compacted.
    #[arg(long, default_value_t = DEFAULT_DISCARD_HIGH_WATER, value_parser = bounded(0, 1 << 30))]
    pub discard_high_water: usize,

    /// Longest sentence payload accepted before it is dropped.
    #[arg(long, default_value_t = DEFAULT_MAX_SENTENCE_LEN, value_parser = bounded(1, 1 << 16))]
    pub max_sentence_len: usize,
}

/// `usize` flag parser accepting `min..=max`.
fn bounded(min: u64, max: u64) -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(min..=max)
}

impl DecoderArgs {
    pub fn config(&self) -> DecoderConfig {
        DecoderConfig {
            chunk_size: self.payload_step,
            discard_high_water: self.discard_high_water,
            max_sentence_len: self.max_sentence_len,
            ..DecoderConfig::default()
        }
    }
}

/// Arguments for `nmea-gps sample`.
#[derive(clap::Args)]
pub struct SampleArgs {
    /// Number of GGA/RMC sentence pairs to print.
    #[arg(long, default_value_t = 10)]
    pub count: u32,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Listen(args) => cmd_listen::run(&args),
        Commands::Replay(args) => cmd_replay::run(&args),
        Commands::Sample(args) => cmd_sample::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
