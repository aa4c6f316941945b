use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::error;

use bech32_codec::{decode, encode, encode_legacy, strip_unknown_chars};

#[derive(Parser, Debug)]
#[command(name = "bech32", about = "Encode and decode bech32/bech32m strings, one per line")]
struct Args {
    /// Input file; reads stdin when absent
    #[arg()]
    input: Option<String>,

    /// Decode bech32 strings (default mode)
    #[arg(short, long, conflicts_with = "encode")]
    decode: bool,

    /// Encode hex payloads, one byte per 5-bit value
    #[arg(short, long, requires = "hrp")]
    encode: bool,

    /// Human-readable part to encode under
    #[arg(long)]
    hrp: Option<String>,

    /// Use the original bech32 checksum constant instead of bech32m
    #[arg(long)]
    legacy: bool,

    /// Strip grouping punctuation before decoding
    #[arg(long)]
    clean: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("bech32: no such file: {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut writer = BufWriter::new(io::stdout());

    let mut failures = 0usize;
    for line in reader.lines() {
        let line = line.context("bech32: read error")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if args.encode {
            let hrp = args.hrp.as_deref().unwrap_or_default();
            let dp = match hex::decode(line) {
                Ok(dp) => dp,
                Err(e) => {
                    error!("{line}: payload is not hex: {e}");
                    failures += 1;
                    continue;
                }
            };
            let encoded = if args.legacy {
                encode_legacy(hrp, &dp)
            } else {
                encode(hrp, &dp)
            };
            match encoded {
                Ok(s) => writeln!(writer, "{s}")?,
                Err(e) => {
                    error!("{line}: {e}");
                    failures += 1;
                }
            }
        } else {
            let cleaned;
            let input = if args.clean {
                cleaned = strip_unknown_chars(Some(line)).unwrap_or_default();
                cleaned.as_str()
            } else {
                line
            };
            match decode(input) {
                Ok(r) => writeln!(writer, "{} {} {}", r.hrp, r.variant, hex::encode(&r.dp))?,
                Err(e) => {
                    error!("{input}: {e}");
                    failures += 1;
                }
            }
        }
    }
    writer.flush()?;

    if failures > 0 {
        bail!("{failures} line(s) failed");
    }
    Ok(())
}
