use crate::model::{RankMap, StudentId};
use serde::Deserialize;

/// Cost of placing a student on a project, given their rank for it. The
/// penalty used for students who did not rank the project goes through the
/// same function, so its weight relative to real ranks depends on the cost.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Linear,
    #[default]
    Squared,
}

impl Cost {
    pub fn of(self, rank: f64) -> f64 {
        match self {
            Cost::Linear => rank,
            Cost::Squared => rank * rank,
        }
    }
}

/// Score of a team for the project whose ranks are given (less is better).
pub fn score(team: &[StudentId], ranks: &RankMap, cost: Cost) -> f64 {
    team.iter().map(|&s| cost.of(ranks.rank(s))).sum()
}
