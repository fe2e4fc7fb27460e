use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use degseq_core::Configuration;
use degseq_enum::serde_io::{report_to_json, write_json};
use degseq_enum::{
    enumerate_with_options, run_provenance, DedupMode, EnumerateOptions, RealizationReport,
    Strategy,
};
use tracing::info;

use super::parse_sequence;

/// Layout of the saved JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SaveFormat {
    /// Full report with provenance, stats and per-representative statistics.
    Report,
    /// Bare list of edge lists.
    Edges,
}

/// Isomorphism oracle used for pairwise deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OracleName {
    /// Colour refinement plus backtracking search.
    Backtrack,
    /// Every permutation; small graphs only.
    Permutation,
}

impl OracleName {
    fn as_str(self) -> &'static str {
        match self {
            OracleName::Backtrack => "backtrack",
            OracleName::Permutation => "permutation",
        }
    }
}

#[derive(Args, Debug)]
pub struct RealizeArgs {
    /// Degree of each node, in node order.
    #[arg(value_name = "D", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub degrees: Vec<i64>,
    /// Save the configurations to a JSON file.
    #[arg(long)]
    pub save: bool,
    /// File written when `--save` is set.
    #[arg(long = "json-filename", alias = "json_filename", default_value = "network_configurations.json")]
    pub json_filename: PathBuf,
    /// Layout of the saved file.
    #[arg(long, value_enum, default_value_t = SaveFormat::Report)]
    pub format: SaveFormat,
    /// YAML file with enumeration options; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Candidate strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,
    /// Duplicate detection.
    #[arg(long, value_enum)]
    pub dedup: Option<DedupMode>,
    /// Isomorphism oracle.
    #[arg(long, value_enum)]
    pub oracle: Option<OracleName>,
    /// Worker threads for the degree filter; 0 picks a default.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Give up after this many milliseconds.
    #[arg(long = "deadline-ms")]
    pub deadline_ms: Option<u64>,
}

pub fn run(args: &RealizeArgs) -> Result<(), Box<dyn Error>> {
    let sequence = parse_sequence(&args.degrees)?;
    let options = resolve_options(args)?;
    let enumeration = enumerate_with_options(&sequence, &options, None)?;

    println!("Unique configurations for degree sequence {sequence}:");
    for (idx, config) in enumeration.representatives.iter().enumerate() {
        println!();
        println!("Configuration {}:", idx + 1);
        for edge in config.edges() {
            println!("  edge {edge}");
        }
    }
    println!();
    println!(
        "Total unique configurations: {}",
        enumeration.representatives.len()
    );

    if args.save {
        let json = match args.format {
            SaveFormat::Report => {
                let provenance = run_provenance(&sequence, &options, None);
                let report = RealizationReport::build(&sequence, &enumeration, provenance)?;
                report_to_json(&report)?
            }
            SaveFormat::Edges => {
                let lists: Vec<&Configuration> = enumeration.representatives.iter().collect();
                serde_json::to_string_pretty(&lists)?
            }
        };
        write_json(&args.json_filename, &json)?;
        info!(path = %args.json_filename.display(), "configurations saved");
        println!(
            "Configurations saved to '{}'.",
            args.json_filename.display()
        );
    }
    Ok(())
}

fn resolve_options(args: &RealizeArgs) -> Result<EnumerateOptions, Box<dyn Error>> {
    let mut options = match &args.config {
        Some(path) => EnumerateOptions::load(path)?,
        None => EnumerateOptions::default(),
    };
    if let Some(strategy) = args.strategy {
        options.strategy = strategy;
    }
    if let Some(dedup) = args.dedup {
        options.dedup = dedup;
    }
    if let Some(oracle) = args.oracle {
        options.oracle = oracle.as_str().to_string();
    }
    if let Some(threads) = args.threads {
        options.threads = threads;
    }
    if args.deadline_ms.is_some() {
        options.deadline_ms = args.deadline_ms;
    }
    Ok(options)
}
