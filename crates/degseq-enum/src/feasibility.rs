use std::fmt::{self, Display};

use degseq_core::DegreeSequence;
use serde::{Deserialize, Serialize};

/// Why a sequence has no simple realization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Infeasibility {
    /// An entry is below zero.
    NegativeDegree {
        /// Position of the first negative entry.
        node: usize,
        /// The offending value.
        value: i64,
    },
    /// The degree sum is odd.
    OddSum {
        /// Sum of all entries.
        sum: i128,
    },
    /// The Erdős–Gallai inequality fails for prefix length `k` of the sorted sequence.
    ErdosGallai {
        /// Prefix length.
        k: usize,
        /// Sum of the `k` largest degrees.
        lhs: i128,
        /// `k(k-1)` plus the capped tail sum.
        rhs: i128,
    },
}

impl Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infeasibility::NegativeDegree { node, value } => {
                write!(f, "degree {value} at node {node} is negative")
            }
            Infeasibility::OddSum { sum } => write!(f, "degree sum {sum} is odd"),
            Infeasibility::ErdosGallai { k, lhs, rhs } => {
                write!(f, "Erdős–Gallai inequality fails at k={k} ({lhs} > {rhs})")
            }
        }
    }
}

/// Erdős–Gallai test with the parity precondition.
///
/// Entries may come in any order. Negative entries are never graphical and the
/// empty sequence is.
pub fn is_graphical(sequence: &[i64]) -> bool {
    check_graphical(sequence).is_ok()
}

/// [`is_graphical`] over a validated sequence.
pub fn is_graphical_sequence(sequence: &DegreeSequence) -> bool {
    is_graphical(&sequence.to_signed())
}

/// Like [`is_graphical`], reporting the first failed condition.
pub fn check_graphical(sequence: &[i64]) -> Result<(), Infeasibility> {
    if let Some((node, &value)) = sequence.iter().enumerate().find(|(_, &value)| value < 0) {
        return Err(Infeasibility::NegativeDegree { node, value });
    }
    let sum: i128 = sequence.iter().map(|&value| i128::from(value)).sum();
    if sum % 2 != 0 {
        return Err(Infeasibility::OddSum { sum });
    }

    let mut sorted: Vec<i128> = sequence.iter().map(|&value| i128::from(value)).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut lhs = 0i128;
    for k in 1..=sorted.len() {
        lhs += sorted[k - 1];
        let bound = k as i128;
        let tail: i128 = sorted[k..].iter().map(|&degree| degree.min(bound)).sum();
        let rhs = bound * (bound - 1) + tail;
        if lhs > rhs {
            return Err(Infeasibility::ErdosGallai { k, lhs, rhs });
        }
    }
    Ok(())
}
