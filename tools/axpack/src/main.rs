//! Axpack - Axlink Wire Inspection Tool
//!
//! Encodes and inspects the byte-level formats of the robot TCP link:
//! float reinterpretation, CRC-16, twist commands and wrapper frames.
//! Run without a subcommand to print the reinterpretation demo.

mod commands;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use ax_common::{logging, AppConfig};
use ax_wire::ByteOrder;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "axpack")]
#[command(about = "Axlink wire inspection tool")]
#[command(long_about = "Axlink wire inspection tool

Without a subcommand, prints the little-endian bytes of 0xC016147B and
their IEEE-754 binary32 reading.

Examples:
  axpack                                   # Reinterpretation demo
  axpack reinterpret 0x41C80000 --order ABCD
  axpack decode-float \"7b 14 16 c0\"
  axpack crc 313233343536373839
  axpack twist -1 2 -3
  axpack decode \"ab d0 03 00 00 00 ...\"")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: ./axlink.yaml if present)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reinterpret an integer's bytes as an IEEE-754 binary32
    Reinterpret {
        /// Decimal or 0x-prefixed hex value
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Byte order: ABCD, DCBA, CDAB or BADC
        #[arg(short, long, default_value = "DCBA")]
        order: ByteOrder,
    },

    /// Reinterpret exactly 4 hex bytes as an IEEE-754 binary32
    DecodeFloat {
        /// Hex bytes, e.g. "7b 14 16 c0" or "0x7b, 0x14, 0x16, 0xc0"
        bytes: String,

        /// Byte order: ABCD, DCBA, CDAB or BADC
        #[arg(short, long, default_value = "DCBA")]
        order: ByteOrder,
    },

    /// Compute the CRC-16/Modbus of hex bytes
    Crc {
        bytes: String,
    },

    /// Build a wheel control twist frame
    #[command(allow_negative_numbers = true)]
    Twist {
        /// Linear x velocity (scaled by 1000 on the wire)
        vx: i16,
        /// Linear y velocity (scaled by 1000 on the wire)
        vy: i16,
        /// Angular velocity (scaled by 100 on the wire)
        w: i16,
    },

    /// Split a hex dump into frames and decode known messages
    Decode {
        bytes: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;

    out.flush()?;
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let Cli {
        command,
        verbose,
        no_color,
        config,
    } = cli;

    // The demo reads no configuration file and no environment
    let Some(command) = command else {
        return commands::demo(out);
    };

    let mut config =
        AppConfig::load(config.as_deref()).context("failed to load configuration")?;
    if verbose {
        config.logging.level = "debug".to_string();
    }
    if no_color || !config.output.color {
        colored::control::set_override(false);
        config.logging.ansi = false;
    }

    logging::init(&config.logging);
    tracing::debug!(
        "Configuration: {:?}, log filter: {}",
        config,
        logging::active_filter().unwrap_or("none")
    );

    match command {
        Commands::Reinterpret { value, order } => commands::reinterpret(out, &value, order),
        Commands::DecodeFloat { bytes, order } => commands::decode_float(out, &bytes, order),
        Commands::Crc { bytes } => commands::crc(out, &bytes),
        Commands::Twist { vx, vy, w } => commands::twist(out, vx, vy, w),
        Commands::Decode { bytes } => commands::decode(out, &bytes, config.framing.max_payload),
    }
}
