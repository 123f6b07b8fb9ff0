//! framkv CLI
//!
//! Command-line interface for working with a FRAM image file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use framkv::{Config, Engine, FileStore, PayloadCheck};
use tracing_subscriber::{fmt, EnvFilter};

/// Text written by the `demo` command
const DEMO_TEXT: &str = "Lorem ipsum dolor sit amet, quo oporteat nominati id, no meis \
disputationi eos, stet utroque vis at. Mel ferri adversarium no, illum consetetur pro ad, \
iusto commune mea ad. Errem voluptua vis at, eam malis aliquip imperdiet id.\n\n\
Usu cu modo malorum, eum no liber insolens temporibus. Ius no illud zril recteque, et ius \
mundi latine aperiri, at melius aperiam recusabo vix.";

/// framkv CLI
#[derive(Parser, Debug)]
#[command(name = "framkv-cli")]
#[command(about = "Store and scan delimited records on a FRAM image")]
#[command(version)]
struct Args {
    /// Image file standing in for the chip
    #[arg(short, long, default_value = "./fram.img")]
    image: PathBuf,

    /// Region capacity in bytes
    #[arg(short, long, default_value = "8192")]
    capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Erase a range back to the empty marker
    Erase {
        /// First address to erase
        start: usize,

        /// Number of bytes to erase
        length: usize,
    },

    /// Erase the whole region
    Reset,

    /// Write a record
    Write {
        /// Address of the first record byte
        start: usize,

        /// Record payload
        payload: String,

        /// Bytes written before the payload
        #[arg(long, default_value = "")]
        start_sep: String,

        /// Bytes written after the payload
        #[arg(long, default_value = "")]
        end_sep: String,

        /// Allow 0xFF bytes in the record body
        #[arg(long)]
        unchecked: bool,
    },

    /// Read the record starting at an address
    Read {
        /// Address of the first record byte
        start: usize,
    },

    /// Print every non-empty byte of the region
    Dump,

    /// Show capacity and usage
    Info,

    /// Reset, write a sample record at address 0, and read it back
    Demo,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,framkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> framkv::Result<()> {
    let payload_check = match &args.command {
        Commands::Write { unchecked: true, .. } => PayloadCheck::Unchecked,
        _ => PayloadCheck::Reject,
    };

    let config = Config::builder()
        .image_path(&args.image)
        .capacity(args.capacity)
        .payload_check(payload_check)
        .build();

    let engine = open_engine(config)?;

    match args.command {
        Commands::Erase { start, length } => {
            let elapsed = engine.erase(start, length)?;
            tracing::info!("{} bytes erased from address {} in {:?}", length, start, elapsed);
        }
        Commands::Reset => {
            let elapsed = engine.reset()?;
            tracing::info!("{} bytes erased in {:?}", engine.capacity(), elapsed);
        }
        Commands::Write {
            start,
            payload,
            start_sep,
            end_sep,
            ..
        } => {
            let elapsed = engine.write(
                payload.as_bytes(),
                start,
                start_sep.as_bytes(),
                end_sep.as_bytes(),
            )?;
            tracing::info!("{} bytes written at address {} in {:?}", payload.len(), start, elapsed);
        }
        Commands::Read { start } => {
            let record = engine.read(start)?;
            print_block(&record);
        }
        Commands::Dump => {
            let bytes = engine.dump()?;
            print_block(&bytes);
        }
        Commands::Info => {
            println!("image:    {}", engine.config().image_path.display());
            println!("capacity: {} bytes ({} KiB)", engine.capacity(), engine.capacity() as f64 / 1024.0);
            println!("used:     {} bytes", engine.used_bytes()?);
        }
        Commands::Demo => {
            engine.reset()?;
            engine.write(DEMO_TEXT.as_bytes(), 0, b"", b"")?;
            let record = engine.read(0)?;
            print_block(&record);
        }
    }

    engine.close()
}

fn open_engine(config: Config) -> framkv::Result<Engine<FileStore>> {
    tracing::debug!("framkv CLI v{}", framkv::VERSION);
    Engine::open(config)
}

fn print_block(bytes: &[u8]) {
    println!("{{START}}");
    if !bytes.is_empty() {
        println!("{}", String::from_utf8_lossy(bytes));
    }
    println!("{{END}}");
}
