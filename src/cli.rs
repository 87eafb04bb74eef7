// CLI for Oxilzw: a stdin-to-stdout filter in the classic compress(1)
// tradition. One flag selects decode mode; everything else is the codec's
// defaults.

use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process;

use clap::Parser;

use crate::lzw;

const BUF_SIZE: usize = 64 * 1024;

/// Adaptive LZW compressor/decompressor.
#[derive(Parser, Debug)]
#[command(name = "oxilzw", version, about = "Adaptive LZW compressor/decompressor")]
struct Cli {
    /// Decompress standard input instead of compressing it.
    #[arg(short = 'd', long)]
    decompress: bool,
}

fn run_filter(decode: bool, input: &mut dyn Read, output: &mut dyn Write) -> i32 {
    let result = if decode {
        lzw::decompress(input, output)
    } else {
        lzw::compress(input, output)
    };

    match result {
        Ok(total) => {
            if let Err(e) = output.flush() {
                eprintln!("oxilzw: write flush error: {e}");
                return 1;
            }
            log::debug!(
                "{}: {total} bytes",
                if decode { "decompress" } else { "compress" }
            );
            0
        }
        Err(e) => {
            eprintln!(
                "oxilzw: {} error: {e}",
                if decode { "decompress" } else { "compress" }
            );
            1
        }
    }
}

/// Main CLI entry point. Parses arguments via clap, runs the filter.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = BufReader::with_capacity(BUF_SIZE, stdin.lock());
    let mut output = BufWriter::with_capacity(BUF_SIZE, stdout.lock());

    let exit_code = run_filter(cli.decompress, &mut input, &mut output);
    process::exit(exit_code);
}

/// Argument-parsing entry point for the fuzz harness.
#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("oxilzw".to_string())
        .chain(args.iter().cloned())
        .collect();
    let _ = Cli::try_parse_from(argv);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
