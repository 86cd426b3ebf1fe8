use crate::model::{Project, RankTable, ScoredAssignment};

#[derive(Debug, Default, Eq, PartialEq)]
pub struct RankStats {
    /// Number of students placed on the project at each rank, starting at rank 1.
    pub ranks: Vec<usize>,
    /// Number of students placed on a project they did not rank.
    pub unranked: usize,
}

pub fn statistics(a: &ScoredAssignment, projects: &[Project], table: &RankTable) -> RankStats {
    let mut stats = RankStats::default();
    for project in projects {
        for &student in a.team(project.id) {
            match table.position(student, project.id) {
                Some(rank) => {
                    if stats.ranks.len() < rank {
                        stats.ranks.resize(rank, 0);
                    }
                    stats.ranks[rank - 1] += 1;
                }
                None => stats.unranked += 1,
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNRANKED;
    use crate::model::fixtures::{ids, projects, roster};

    #[test]
    fn histogram() {
        let projects = projects(&[("a", 2), ("b", 2)]);
        let students = roster(&[
            ("s0", &["a"]),
            ("s1", &["b", "c", "a"]),
            ("s2", &["b"]),
            ("s3", &[]),
            ("s4", &["a"]),
        ]);
        let table = RankTable::new(&projects, &students, UNRANKED);
        let a = ScoredAssignment {
            teams: vec![ids(&[0, 1]), ids(&[2, 3])],
            scores: vec![10.0, 7.25],
            total: 17.25,
        };
        assert_eq!(
            statistics(&a, &projects, &table),
            RankStats {
                ranks: vec![2, 0, 1],
                unranked: 1,
            }
        );
    }
}
