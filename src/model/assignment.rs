use super::{ProjectId, StudentId};

/// Members of the team of a project, in roster order.
pub type Team = Vec<StudentId>;

/// A complete assignment: one team per project, in project order, along with
/// the score of every team and their sum.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredAssignment {
    pub teams: Vec<Team>,
    pub scores: Vec<f64>,
    pub total: f64,
}

impl ScoredAssignment {
    pub fn team(&self, ProjectId(project): ProjectId) -> &Team {
        &self.teams[project]
    }

    pub fn score(&self, ProjectId(project): ProjectId) -> f64 {
        self.scores[project]
    }

    pub fn project_for(&self, student: StudentId) -> Option<ProjectId> {
        self.teams
            .iter()
            .position(|team| team.contains(&student))
            .map(ProjectId)
    }

    /// Students of a roster of `students` members who belong to no team.
    pub fn unassigned_students(&self, students: usize) -> Vec<StudentId> {
        (0..students)
            .map(StudentId)
            .filter(|&s| self.project_for(s).is_none())
            .collect()
    }
}
