use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use env_logger::Env;
use log::debug;

use sgr_sentinel::{pump, ExtendedColorFilter, FilterError, DEFAULT_CHUNK_SIZE};

/// Copies input to standard output, flagging text colored with truecolor or
/// 256-color escape sequences with reverse video + strikethrough.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Files to filter, in order. Standard input is read when none are given
    /// or for `-`.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Bytes read and decorated per chunk. Sequences split across chunks are
    /// not flagged.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    match run(&cli) {
        Ok(total) => {
            debug!("Filtered {} bytes", total);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<u64, FilterError> {
    let mut filter = ExtendedColorFilter::new(io::stdout().lock());

    if cli.files.is_empty() {
        return pump(&mut io::stdin().lock(), &mut filter, cli.chunk_size);
    }

    let mut total = 0;
    for path in &cli.files {
        let mut reader = open_input(path)?;
        debug!("Reading {}", path.display());
        total += pump(&mut reader, &mut filter, cli.chunk_size)?;
    }
    Ok(total)
}

fn open_input(path: &Path) -> Result<Box<dyn Read>, FilterError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(file))
}
