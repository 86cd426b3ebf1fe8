use crate::model::{Project, Student, capacity};
use eyre::{Result, bail, ensure};
use std::collections::HashSet;
use tracing::{info, warn};

pub fn check_projects(projects: &[Project]) -> Result<()> {
    ensure!(!projects.is_empty(), "no project has been configured");
    let mut names = HashSet::new();
    for p in projects {
        ensure!(!p.name.is_empty(), "project #{} has an empty name", p.id.0 + 1);
        ensure!(p.size > 0, "project {} must have a positive size", p.name);
        ensure!(names.insert(&p.name), "project {} is configured twice", p.name);
    }
    Ok(())
}

/// Scores are summed as `f64` and ties are detected by equality, which is only
/// exact if every rank is a multiple of 0.5.
pub fn check_unranked(unranked: f64) -> Result<()> {
    ensure!(
        unranked.is_finite() && unranked >= 0.0,
        "rank for unranked projects must be a non-negative number, not {}",
        unranked
    );
    ensure!(
        (unranked * 2.0).fract() == 0.0,
        "rank for unranked projects must be a multiple of 0.5, not {}",
        unranked
    );
    Ok(())
}

pub fn check_roster(students: &[Student]) -> Result<()> {
    let mut names = HashSet::new();
    for s in students {
        ensure!(!s.name.is_empty(), "student #{} has an empty identifier", s.id.0 + 1);
        ensure!(names.insert(&s.name), "student {} appears twice in the roster", s);
    }
    let lazy = students.iter().filter(|s| s.is_lazy()).count();
    if lazy > 0 {
        info!(lazy, "some students did not rank any project");
    }
    Ok(())
}

/// Check that the projects can take the whole roster. Leftover students are
/// only accepted if `allow_unassigned` is set.
pub fn check_capacity(
    projects: &[Project],
    students: &[Student],
    allow_unassigned: bool,
) -> Result<()> {
    let seats = capacity(projects);
    if seats > students.len() {
        warn!(
            seats,
            students = students.len(),
            "not enough students to fill all projects"
        );
    } else if seats < students.len() {
        if !allow_unassigned {
            bail!(
                "insufficient number of seats, can host {} students out of {}",
                seats,
                students.len()
            );
        }
        warn!(
            unassigned = students.len() - seats,
            "some students will not be assigned to any project"
        );
    }
    Ok(())
}

/// Warn about projects nobody ranked.
pub fn check_popularity(projects: &[Project], students: &[Student]) {
    for p in projects {
        if students.iter().all(|s| s.rank_of(&p.name).is_none()) {
            warn!(project = %p.name, "project has not been ranked by any student");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{projects, roster};

    #[test]
    fn project_checks() {
        assert!(check_projects(&projects(&[("a", 1), ("b", 2)])).is_ok());
        assert!(check_projects(&[]).is_err());
        assert!(check_projects(&projects(&[("a", 0)])).is_err());
        assert!(check_projects(&projects(&[("", 1)])).is_err());
        let err = check_projects(&projects(&[("a", 1), ("a", 2)])).unwrap_err();
        assert_eq!(err.to_string(), "project a is configured twice");
    }

    #[test]
    fn roster_checks() {
        assert!(check_roster(&roster(&[("s1", &["a"]), ("s2", &[])])).is_ok());
        let err = check_roster(&roster(&[("s1", &["a"]), ("s1", &[])])).unwrap_err();
        assert_eq!(err.to_string(), "student s1 appears twice in the roster");
        assert!(check_roster(&roster(&[("", &["a"])])).is_err());
    }

    #[test]
    fn unranked_checks() {
        assert!(check_unranked(2.5).is_ok());
        assert!(check_unranked(0.0).is_ok());
        assert!(check_unranked(-1.0).is_err());
        assert!(check_unranked(f64::NAN).is_err());
        assert!(check_unranked(f64::INFINITY).is_err());
        assert!(check_unranked(1.5).is_ok());
        assert!(check_unranked(3.0).is_ok());
        let err = check_unranked(2.2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rank for unranked projects must be a multiple of 0.5, not 2.2"
        );
        assert!(check_unranked(2.25).is_err());
    }

    #[test]
    fn capacity_checks() {
        let projects = projects(&[("a", 2), ("b", 1)]);
        let three = roster(&[("s1", &[]), ("s2", &[]), ("s3", &[])]);
        let four = roster(&[("s1", &[]), ("s2", &[]), ("s3", &[]), ("s4", &[])]);
        let two = roster(&[("s1", &[]), ("s2", &[])]);
        assert!(check_capacity(&projects, &three, false).is_ok());
        assert!(check_capacity(&projects, &four, false).is_err());
        assert!(check_capacity(&projects, &four, true).is_ok());
        assert!(check_capacity(&projects, &two, false).is_ok());
    }
}
