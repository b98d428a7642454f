//! G.722 bitstream inspector
//!
//! Dumps the low-band and high-band codewords of a raw G.722 stream and
//! optionally decodes it to raw 16-bit little-endian PCM.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use g722_core::Result;
use g722_core::codecs::g722::config::{OPTION_DEFAULT, OPTION_ITU_ALIGNED};
use g722_core::codecs::g722::{BitLayout, G722Config, G722Decoder};

/// Bytes shown in the per-sample dump
const DUMP_LIMIT: usize = 32;

/// Inspect a raw G.722 bitstream
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw G.722 stream, one byte per sample pair
    input: PathBuf,

    /// Bitrate the stream was encoded at (64000, 56000 or 48000)
    #[arg(short, long, default_value_t = 64000)]
    bitrate: i64,

    /// Stream uses ITU-aligned bit packing
    #[arg(long)]
    itu: bool,

    /// Write the decoded audio as raw 16-bit little-endian PCM
    #[arg(long, value_name = "PATH")]
    pcm: Option<PathBuf>,
}

impl Args {
    fn options(&self) -> u32 {
        if self.itu { OPTION_ITU_ALIGNED } else { OPTION_DEFAULT }
    }
}

fn run(args: Args) -> Result<()> {
    let config = G722Config::from_raw(args.bitrate, args.options())?;
    let layout = BitLayout::for_config(&config);
    let data = fs::read(&args.input)?;

    println!("G.722 Bitstream Inspector");
    println!("=========================");
    println!("File: {}", args.input.display());
    println!(
        "Size: {} bytes ({} samples, {:.1} ms)",
        data.len(),
        data.len() * 2,
        data.len() as f64 / 8.0
    );
    println!("Mode: {} ({:?})", config.mode, config.packing);
    println!("Used bits: {:08b}", layout.used_bits_mask());
    println!();

    for (index, &byte) in data.iter().take(DUMP_LIMIT).enumerate() {
        let (low, high) = layout.unpack(byte);
        println!("  [{:4}] 0x{:02X} {:08b}  low={:2} high={}", index, byte, byte, low, high);
    }
    if data.len() > DUMP_LIMIT {
        println!("  ... {} more bytes", data.len() - DUMP_LIMIT);
    }

    let stray = data.iter().filter(|&&b| b & !layout.used_bits_mask() != 0).count();
    if stray > 0 {
        println!();
        println!("Warning: {} bytes carry data in unused bit positions", stray);
    }

    let mut decoder = G722Decoder::new(config);
    let pcm = decoder.decode(&data);
    let peak = pcm.iter().map(|&s| i32::from(s).abs()).max().unwrap_or(0);
    println!();
    println!("Decoded {} samples, peak |x| = {}", pcm.len(), peak);

    if let Some(path) = args.pcm {
        let bytes: Vec<u8> = pcm.iter().flat_map(|s| s.to_le_bytes()).collect();
        fs::write(&path, bytes)?;
        println!("PCM written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let _ = g722_core::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
