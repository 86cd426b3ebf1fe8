use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Project names, most wanted first.
    pub rankings: Vec<String>,
}

impl Student {
    pub fn new(id: StudentId, name: String, rankings: Vec<String>) -> Student {
        Student { id, name, rankings }
    }

    /// 0-based position of the first occurrence of `project` in the rankings.
    pub fn rank_of(&self, project: &str) -> Option<usize> {
        self.rankings.iter().position(|p| p == project)
    }

    pub fn is_lazy(&self) -> bool {
        self.rankings.is_empty()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[test]
fn test_rank_of() {
    let s = Student::new(
        StudentId(0),
        "s1".into(),
        vec!["a".into(), "b".into(), "a".into()],
    );
    assert_eq!(s.rank_of("a"), Some(0));
    assert_eq!(s.rank_of("b"), Some(1));
    assert_eq!(s.rank_of("c"), None);
    assert!(!s.is_lazy());
    assert!(Student::new(StudentId(1), "s2".into(), vec![]).is_lazy());
}
