use std::error::Error;

use clap::Args;
use degseq_core::RngHandle;
use degseq_graph::{random_realization, structural_hash};

use super::parse_sequence;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Degree of each node, in node order.
    #[arg(value_name = "D", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub degrees: Vec<i64>,
    /// Master seed; sample `i` uses substream `i`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Number of realizations to draw.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
    /// Random switch attempts applied after the Havel–Hakimi construction.
    #[arg(long, default_value_t = 100)]
    pub switches: usize,
}

pub fn run(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    let sequence = parse_sequence(&args.degrees)?;
    for idx in 0..args.count {
        let mut rng = RngHandle::for_substream(args.seed, idx as u64);
        let graph = random_realization(&sequence, args.switches, &mut rng)?;
        println!("Sample {} ({}):", idx + 1, structural_hash(&graph));
        for edge in graph.edge_list() {
            println!("  edge {edge}");
        }
    }
    Ok(())
}
