//! respline Decode Binary
//!
//! Decodes captured RESP reply streams and prints them redis-cli style.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use respline::{DecoderConfig, ReplyDecoder, ReplyError};
use tracing_subscriber::{fmt, EnvFilter};

/// respline decoder
#[derive(Parser, Debug)]
#[command(name = "respline-decode")]
#[command(about = "Decode captured RESP replies and print them")]
#[command(version)]
struct Args {
    /// Capture files to decode (stdin when none are given)
    files: Vec<PathBuf>,

    /// Longest accepted line in bytes
    #[arg(long, default_value = "4096")]
    max_line_len: usize,

    /// Largest accepted bulk string in bytes
    #[arg(long, default_value = "536870912")]
    max_bulk_len: usize,

    /// Reject bulk payloads not followed by CRLF
    #[arg(long)]
    strict: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,respline=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = DecoderConfig::builder()
        .max_line_len(args.max_line_len)
        .max_bulk_len(args.max_bulk_len)
        .strict_terminator(args.strict)
        .build();

    let result = if args.files.is_empty() {
        decode_stream("<stdin>", io::stdin().lock(), config)
    } else {
        args.files.iter().try_for_each(|path| {
            let file = File::open(path).map_err(ReplyError::Io)?;
            decode_stream(&path.display().to_string(), file, config.clone())
        })
    };

    if let Err(e) = result {
        tracing::error!("Decode failed: {}", e);
        process::exit(1);
    }
}

/// Print every reply in one stream
fn decode_stream<R: Read>(name: &str, source: R, config: DecoderConfig) -> respline::Result<()> {
    tracing::debug!("Decoding {}", name);

    let mut decoder = ReplyDecoder::with_config(source, config);
    let mut count = 0usize;

    for reply in decoder.replies() {
        match reply {
            Ok(value) => println!("{value}"),
            Err(ReplyError::Nil) => println!("(nil)"),
            Err(e) => {
                tracing::warn!("{}: reply #{} is unreadable", name, count + 1);
                return Err(e);
            }
        }
        count += 1;
    }

    tracing::info!("{}: decoded {} replies", name, count);
    Ok(())
}
