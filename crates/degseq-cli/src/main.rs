use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    realize::{self, RealizeArgs},
    sample::{self, SampleArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "degseq", about = "Enumerate the simple graphs realizing a degree sequence")]
struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one graph per isomorphism class realizing the sequence.
    Realize(RealizeArgs),
    /// Report whether the sequence is graphical.
    Check(CheckArgs),
    /// Draw random labelled realizations by switching.
    Sample(SampleArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Realize(args) => realize::run(&args),
        Command::Check(args) => check::run(&args),
        Command::Sample(args) => sample::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
