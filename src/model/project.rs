#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub usize);

#[derive(Clone, Debug)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Exact number of students the team for this project must have.
    pub size: usize,
}

impl Project {
    pub fn new(id: ProjectId, name: String, size: usize) -> Project {
        Project { id, name, size }
    }
}

/// Total number of seats offered by `projects`.
pub fn capacity(projects: &[Project]) -> usize {
    projects.iter().map(|p| p.size).sum()
}

#[test]
fn test_capacity() {
    let projects = vec![
        Project::new(ProjectId(0), "a".into(), 4),
        Project::new(ProjectId(1), "b".into(), 3),
    ];
    assert_eq!(capacity(&projects), 7);
    assert_eq!(capacity(&[]), 0);
}
