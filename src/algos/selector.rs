use crate::model::ScoredAssignment;
use eyre::{Result, eyre};
use rand::prelude::*;

pub const DEFAULT_SEED: u64 = 91123;

/// Pick one of the best assignments at random. The same set and seed always
/// give the same pick.
pub fn pick(best: &[ScoredAssignment], seed: u64) -> Result<&ScoredAssignment> {
    let mut rng = StdRng::seed_from_u64(seed);
    best.choose(&mut rng).ok_or_else(|| eyre!("no valid configuration found"))
}
