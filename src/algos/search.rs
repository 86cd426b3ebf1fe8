use super::scoring::{Cost, score};
use crate::model::{Project, RankTable, ScoredAssignment, StudentId, Team};
use itertools::Itertools;
use tracing::{debug, info, instrument, trace};

/// Best complete assignments found so far. All of them share the same total
/// score, which is the lowest one seen.
#[derive(Clone, Debug, Default)]
pub struct Best {
    score: Option<f64>,
    assignments: Vec<ScoredAssignment>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Improved,
    Tied,
    Rejected,
}

impl Best {
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn assignments(&self) -> &[ScoredAssignment] {
        &self.assignments
    }

    /// Check whether an assignment whose (partial) score is `partial` can no
    /// longer be among the best ones. Scores never decrease when teams are
    /// added, so such a branch can be abandoned.
    pub fn excludes(&self, partial: f64) -> bool {
        self.score.is_some_and(|best| partial > best)
    }

    /// Offer a complete assignment. A strictly better one replaces all the
    /// retained assignments, an equal one joins them.
    pub fn offer(&mut self, teams: &[Team], scores: &[f64], total: f64) -> Verdict {
        let verdict = match self.score {
            Some(best) if total > best => return Verdict::Rejected,
            Some(best) if total == best => Verdict::Tied,
            _ => {
                self.score = Some(total);
                self.assignments.clear();
                Verdict::Improved
            }
        };
        self.assignments.push(ScoredAssignment {
            teams: teams.to_vec(),
            scores: scores.to_vec(),
            total,
        });
        verdict
    }
}

/// Counters gathered while searching.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Candidate teams generated for every project, before any pruning.
    pub candidates: Vec<u64>,
    /// Complete assignments covered by the search, including those lying in
    /// abandoned branches.
    pub enumerated: u64,
    /// Complete assignments that reached the final comparison.
    pub complete: u64,
    /// Branches abandoned because their partial score exceeded the best one.
    pub pruned: u64,
    /// Number of times a strictly better assignment has been found.
    pub improvements: u64,
}

impl SearchStats {
    pub fn total_candidates(&self) -> u64 {
        self.candidates.iter().sum()
    }
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub best: Best,
    pub stats: SearchStats,
}

/// Exhaustive search of the teams, project after project, in the order in
/// which projects are given.
pub struct Search<'a> {
    projects: &'a [Project],
    ranks: &'a RankTable,
    cost: Cost,
    prune: bool,
}

/// Path being explored along with what the search has gathered so far.
struct State {
    teams: Vec<Team>,
    scores: Vec<f64>,
    best: Best,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(projects: &'a [Project], ranks: &'a RankTable, cost: Cost) -> Search<'a> {
        Search {
            projects,
            ranks,
            cost,
            prune: true,
        }
    }

    pub fn with_pruning(self, prune: bool) -> Search<'a> {
        Search { prune, ..self }
    }

    /// Explore every assignment of students from `pool` to the projects and
    /// keep those with the lowest total score.
    #[instrument(skip_all, fields(projects = self.projects.len(), students = pool.len()))]
    pub fn run(&self, pool: &[StudentId]) -> Outcome {
        let mut state = State {
            teams: Vec::with_capacity(self.projects.len()),
            scores: Vec::with_capacity(self.projects.len()),
            best: Best::default(),
            stats: SearchStats {
                candidates: vec![0; self.projects.len()],
                ..SearchStats::default()
            },
        };
        self.descend(0, pool, 0.0, &mut state);
        info!(
            best = ?state.best.score(),
            ties = state.best.assignments().len(),
            candidates = state.stats.total_candidates(),
            enumerated = state.stats.enumerated,
            complete = state.stats.complete,
            pruned = state.stats.pruned,
            "search complete"
        );
        Outcome {
            best: state.best,
            stats: state.stats,
        }
    }

    /// Number of complete assignments reachable from `level` with `students`
    /// students left in the pool.
    fn completions(&self, level: usize, students: usize) -> u64 {
        let mut left = students;
        let mut total = 1u64;
        for project in &self.projects[level..] {
            if project.size > left {
                return 0;
            }
            total = total.saturating_mul(binomial(left, project.size));
            left -= project.size;
        }
        total
    }

    fn descend(&self, level: usize, pool: &[StudentId], partial: f64, state: &mut State) {
        let Some(project) = self.projects.get(level) else {
            state.stats.enumerated += 1;
            state.stats.complete += 1;
            match state.best.offer(&state.teams, &state.scores, partial) {
                Verdict::Improved => {
                    state.stats.improvements += 1;
                    info!(score = partial, "new best");
                }
                Verdict::Tied => trace!(score = partial, "tied with best"),
                Verdict::Rejected => (),
            }
            return;
        };
        let ranks = self.ranks.rank_map(project.id);
        for team in pool.iter().copied().combinations(project.size) {
            state.stats.candidates[level] += 1;
            let team_score = score(&team, &ranks, self.cost);
            let partial = partial + team_score;
            if self.prune && state.best.excludes(partial) {
                state.stats.pruned += 1;
                state.stats.enumerated = state
                    .stats
                    .enumerated
                    .saturating_add(self.completions(level + 1, pool.len() - project.size));
                continue;
            }
            let remaining = pool
                .iter()
                .copied()
                .filter(|s| !team.contains(s))
                .collect::<Vec<_>>();
            state.teams.push(team);
            state.scores.push(team_score);
            self.descend(level + 1, &remaining, partial, state);
            state.teams.pop();
            state.scores.pop();
        }
        if level == 0 {
            debug!(
                project = %project.name,
                candidates = state.stats.candidates[0],
                "first level exhausted"
            );
        }
    }
}

/// Number of subsets of `k` elements among `n`.
fn binomial(n: usize, k: usize) -> u64 {
    let k = k.min(n - k);
    (0..k as u64).fold(1, |acc, i| acc.saturating_mul(n as u64 - i) / (i + 1))
}
