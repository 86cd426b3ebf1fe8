use crate::config::InputConfig;
use crate::model::{Project, RankTable, ScoredAssignment, Student, StudentId};
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use eyre::{Result, WrapErr, eyre};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Clean a name exported from a spreadsheet: drop control characters and byte
/// order marks, turn non-breaking spaces into regular ones and trim.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|&c| !c.is_control() && c != '\u{feff}')
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_owned()
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    let name = normalize(name);
    headers
        .iter()
        .position(|h| normalize(h) == name)
        .ok_or_else(|| eyre!("cannot find column {:?} in input", name))
}

/// Read students from CSV data. Students are numbered in input order.
pub fn read_students<R: Read>(reader: R, input: &InputConfig) -> Result<Vec<Student>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().wrap_err("cannot read input headers")?.clone();
    let id_column = column(&headers, &input.id_column)?;
    let preferences_column = column(&headers, &input.preferences_column)?;
    let mut students = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.wrap_err_with(|| format!("cannot read input record {}", line + 1))?;
        let name = normalize(record.get(id_column).unwrap_or_default());
        let rankings = record
            .get(preferences_column)
            .unwrap_or_default()
            .split(input.separator)
            .map(normalize)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>();
        trace!(student = %name, ?rankings, "student loaded");
        students.push(Student::new(StudentId(students.len()), name, rankings));
    }
    Ok(students)
}

pub fn load_students(file_name: &Path, input: &InputConfig) -> Result<Vec<Student>> {
    let file = File::open(file_name)
        .wrap_err_with(|| format!("cannot open input file {}", file_name.display()))?;
    let students = read_students(file, input)
        .wrap_err_with(|| format!("cannot load students from {}", file_name.display()))?;
    debug!(
        students = students.len(),
        lazy = students.iter().filter(|s| s.is_lazy()).count(),
        "roster loaded"
    );
    Ok(students)
}

/// Write the assignment as `project,student,rank` records. The rank is left
/// empty for students who did not rank their project.
pub fn write_assignment<W: Write>(
    writer: W,
    assignment: &ScoredAssignment,
    projects: &[Project],
    students: &[Student],
    ranks: &RankTable,
) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(["project", "student", "rank"])?;
    for project in projects {
        for &s in assignment.team(project.id) {
            let rank = ranks
                .position(s, project.id)
                .map(|r| r.to_string())
                .unwrap_or_default();
            writer.write_record([&project.name, &students[s.0].name, &rank])?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn save_assignment(
    file_name: &Path,
    assignment: &ScoredAssignment,
    projects: &[Project],
    students: &[Student],
    ranks: &RankTable,
) -> Result<()> {
    let file = File::create(file_name)
        .wrap_err_with(|| format!("cannot create output file {}", file_name.display()))?;
    write_assignment(file, assignment, projects, students, ranks)
        .wrap_err("cannot save assignment")
}
