use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use naval::{init_logging, Flow, Session, DEFAULT_SEED};

#[derive(Parser)]
#[command(author, version, about = "Two-player naval combat protocol interpreter", long_about = None)]
struct Cli {
    /// Read the command stream from a file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = DEFAULT_SEED,
        help = "Seed for the automated player when the stream has no SRAND (e.g., --seed 12345)"
    )]
    seed: u64,
    /// Print a JSON summary of the final game to stderr.
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = Session::new();
    let mut exhausted = true;
    for line in reader.lines() {
        let line = line?;
        let flow = session.feed(&line);
        for printed in session.take_output() {
            writeln!(out, "{}", printed)?;
        }
        if flow == Flow::Stop {
            exhausted = false;
            break;
        }
    }
    if exhausted {
        for printed in session.finish(cli.seed) {
            writeln!(out, "{}", printed)?;
        }
    }
    out.flush()?;

    if cli.summary {
        eprintln!("{}", serde_json::to_string(&session.game().summary())?);
    }
    Ok(())
}
