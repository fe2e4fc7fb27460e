pub mod check;
pub mod realize;
pub mod sample;
pub mod version;

use std::error::Error;

use degseq_core::DegreeSequence;

/// Validates raw command-line degrees, rejecting negative entries.
pub fn parse_sequence(degrees: &[i64]) -> Result<DegreeSequence, Box<dyn Error>> {
    DegreeSequence::from_signed(degrees).map_err(|err| Box::new(err) as Box<dyn Error>)
}
