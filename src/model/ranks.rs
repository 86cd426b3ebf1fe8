use super::{Project, ProjectId, Student, StudentId};
use pathfinding::matrix::Matrix;

/// Rank given to a student for a project they did not rank. It is a moderate
/// penalty calibrated for the squared cost: it costs 6.25 there, between a
/// second (4) and a third (9) choice.
pub const UNRANKED: f64 = 2.5;

/// Ranks of every student for a set of projects, computed once before the
/// search starts and read-only afterwards.
#[derive(Clone, Debug)]
pub struct RankTable {
    /// 1-based positions indexed by project then by student.
    positions: Matrix<Option<usize>>,
    unranked: f64,
}

impl RankTable {
    /// Build the table. Projects are expected to be numbered after their
    /// position in `projects`, and students after their position in `roster`.
    pub fn new(projects: &[Project], roster: &[Student], unranked: f64) -> RankTable {
        let mut positions = Matrix::new(projects.len(), roster.len(), None);
        for project in projects {
            debug_assert_eq!(projects[project.id.0].id, project.id);
            for student in roster {
                debug_assert_eq!(roster[student.id.0].id, student.id);
                positions[(project.id.0, student.id.0)] =
                    student.rank_of(&project.name).map(|r| r + 1);
            }
        }
        RankTable {
            positions,
            unranked,
        }
    }

    pub fn rank_map(&self, project: ProjectId) -> RankMap<'_> {
        RankMap {
            table: self,
            project,
        }
    }

    /// 1-based position of `project` in the rankings of `student`, if any.
    pub fn position(
        &self,
        StudentId(student): StudentId,
        ProjectId(project): ProjectId,
    ) -> Option<usize> {
        self.positions[(project, student)]
    }

    pub fn rank(&self, student: StudentId, project: ProjectId) -> f64 {
        self.position(student, project).map_or(self.unranked, |r| r as f64)
    }

    pub fn unranked(&self) -> f64 {
        self.unranked
    }

    pub fn students(&self) -> usize {
        self.positions.columns
    }
}

/// Ranks of every student for a single project.
#[derive(Clone, Copy, Debug)]
pub struct RankMap<'a> {
    table: &'a RankTable,
    project: ProjectId,
}

impl RankMap<'_> {
    pub fn rank(&self, student: StudentId) -> f64 {
        self.table.rank(student, self.project)
    }

    pub fn is_ranked(&self, student: StudentId) -> bool {
        self.table.position(student, self.project).is_some()
    }

    /// `(student, rank)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, f64)> + '_ {
        (0..self.table.students()).map(move |s| (StudentId(s), self.rank(StudentId(s))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{projects, roster};

    #[test]
    fn ranks_are_one_based() {
        let projects = projects(&[("a", 1), ("b", 1), ("c", 1)]);
        let students = roster(&[("s1", &["b", "a"])]);
        let table = RankTable::new(&projects, &students, UNRANKED);
        assert_eq!(table.rank(StudentId(0), ProjectId(0)), 2.0);
        assert_eq!(table.rank(StudentId(0), ProjectId(1)), 1.0);
        assert_eq!(table.rank(StudentId(0), ProjectId(2)), UNRANKED);
        assert_eq!(table.position(StudentId(0), ProjectId(2)), None);
    }

    #[test]
    fn student_without_rankings_gets_sentinel_everywhere() {
        let projects = projects(&[("a", 1), ("b", 1)]);
        let students = roster(&[("lazy", &[]), ("s2", &["a"])]);
        let table = RankTable::new(&projects, &students, UNRANKED);
        for p in &projects {
            let map = table.rank_map(p.id);
            assert_eq!(map.rank(StudentId(0)), 2.5);
            assert!(!map.is_ranked(StudentId(0)));
        }
        assert!(table.rank_map(ProjectId(0)).is_ranked(StudentId(1)));
    }

    #[test]
    fn first_occurrence_wins() {
        let projects = projects(&[("a", 1)]);
        let students = roster(&[("s1", &["x", "a", "a"])]);
        let table = RankTable::new(&projects, &students, UNRANKED);
        assert_eq!(table.rank(StudentId(0), ProjectId(0)), 2.0);
    }

    #[test]
    fn sentinel_is_configurable() {
        let projects = projects(&[("a", 1)]);
        let students = roster(&[("s1", &["b"])]);
        let table = RankTable::new(&projects, &students, 4.0);
        assert_eq!(table.unranked(), 4.0);
        assert_eq!(
            table.rank_map(ProjectId(0)).iter().collect::<Vec<_>>(),
            vec![(StudentId(0), 4.0)]
        );
    }
}
