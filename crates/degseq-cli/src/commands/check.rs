use std::error::Error;

use clap::Args;
use degseq_enum::check_graphical;

use super::parse_sequence;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Degree of each node, in node order.
    #[arg(value_name = "D", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub degrees: Vec<i64>,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let sequence = parse_sequence(&args.degrees)?;
    match check_graphical(&args.degrees) {
        Ok(()) => println!("{sequence} is graphical"),
        Err(reason) => println!("{sequence} is not graphical: {reason}"),
    }
    Ok(())
}
