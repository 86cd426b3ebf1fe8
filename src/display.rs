use crate::algos::{Outcome, SearchStats};
use crate::model::{Project, RankTable, ScoredAssignment, Student, StudentId};
use crate::stats;

fn names(team: &[StudentId], students: &[Student]) -> String {
    team.iter()
        .map(|&s| students[s.0].name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_roster(students: &[Student]) {
    println!("Students ({}):", students.len());
    for s in students {
        if s.is_lazy() {
            println!("  - {} (no ranking)", s);
        } else {
            println!("  - {}", s);
        }
    }
    println!();
}

pub fn display_rank_maps(projects: &[Project], students: &[Student], table: &RankTable) {
    println!("Ranks per project:");
    for p in projects {
        println!("  {}:", p.name);
        let ranks = table.rank_map(p.id);
        for (s, rank) in ranks.iter() {
            if ranks.is_ranked(s) {
                println!("    - {}: {}", students[s.0], rank);
            } else {
                println!("    - {}: {} (unranked)", students[s.0], rank);
            }
        }
    }
    println!();
}

pub fn display_search(projects: &[Project], stats: &SearchStats) {
    println!("Candidate teams generated:");
    for (p, n) in projects.iter().zip(&stats.candidates) {
        println!("  - {} ({} students): {}", p.name, p.size, n);
    }
    println!("Complete assignments enumerated: {}", stats.enumerated);
    println!("Complete assignments compared: {}", stats.complete);
    println!("Pruned branches: {}", stats.pruned);
    println!("Improvements: {}", stats.improvements);
    println!();
}

pub fn display_best(
    outcome: &Outcome,
    projects: &[Project],
    students: &[Student],
    max_listed: Option<usize>,
) {
    let best = outcome.best.assignments();
    match outcome.best.score() {
        Some(score) => println!("Best score: {}", score),
        None => println!("Best score: none"),
    }
    println!("Number of best configurations: {}", best.len());
    let listed = max_listed.unwrap_or(best.len()).min(best.len());
    if listed > 0 {
        println!("Best team configurations:");
        for (i, a) in best.iter().take(listed).enumerate() {
            println!("  #{}", i + 1);
            for p in projects {
                println!(
                    "    {}: {} (score {})",
                    p.name,
                    names(a.team(p.id), students),
                    a.score(p.id)
                );
            }
        }
        if listed < best.len() {
            println!("  ... and {} more", best.len() - listed);
        }
    }
    println!();
}

pub fn display_details(
    a: &ScoredAssignment,
    projects: &[Project],
    students: &[Student],
    table: &RankTable,
) {
    for p in projects {
        println!("{} (score {}):", p.name, a.score(p.id));
        for &s in a.team(p.id) {
            print!("  - {}", students[s.0]);
            match table.position(s, p.id) {
                Some(rank) => print!(" (rank {})", rank),
                None => print!(" (unranked)"),
            }
            println!();
        }
        println!();
    }
    println!("Scores: {:?}", a.scores);
    println!("Total score: {}", a.total);
    println!();
}

pub fn display_stats(a: &ScoredAssignment, projects: &[Project], table: &RankTable) {
    let stats = stats::statistics(a, projects, table);
    let cumul = stats.ranks.iter().scan(0, |s, &r| {
        *s += r;
        Some(*s)
    });
    let total = stats.ranks.iter().sum::<usize>() + stats.unranked;
    println!("Final ranking:");
    for (rank, (n, c)) in stats.ranks.iter().zip(cumul).enumerate() {
        if *n != 0 {
            println!(
                "  - rank {}: {} (cumulative {} - {:.2}%)",
                rank + 1,
                n,
                c,
                100.0 * c as f32 / total as f32
            );
        }
    }
    if stats.unranked != 0 {
        println!("  - unranked: {}", stats.unranked);
    }
}

pub fn display_unassigned(a: &ScoredAssignment, students: &[Student]) {
    let unassigned = a.unassigned_students(students.len());
    if !unassigned.is_empty() {
        println!("Students without a project:");
        for s in unassigned {
            println!("  - {}", students[s.0]);
        }
    }
}

#[test]
fn test_names() {
    let students = crate::model::fixtures::roster(&[("ann", &[]), ("bob", &[]), ("cid", &[])]);
    assert_eq!(names(&[StudentId(2), StudentId(0)], &students), "cid, ann");
    assert_eq!(names(&[], &students), "");
}
