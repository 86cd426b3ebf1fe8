use crate::algos::{Cost, DEFAULT_SEED};
use crate::loader::normalize;
use crate::model::{Project, ProjectId, UNRANKED};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub input: InputConfig,
    /// Projects, in search order.
    #[serde(default, rename = "project")]
    pub projects: Vec<ProjectConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub seed: u64,
    pub unranked_rank: f64,
    pub cost: Cost,
    pub prune: bool,
    pub allow_unassigned: bool,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            seed: DEFAULT_SEED,
            unranked_rank: UNRANKED,
            cost: Cost::default(),
            prune: true,
            allow_unassigned: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub file: Option<PathBuf>,
    pub id_column: String,
    pub preferences_column: String,
    pub separator: char,
}

impl Default for InputConfig {
    fn default() -> InputConfig {
        InputConfig {
            file: None,
            id_column: "ID".to_owned(),
            preferences_column: "list of projects".to_owned(),
            separator: ';',
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,
    pub size: usize,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        Config::from_toml_str(&content).wrap_err("cannot load configuration file")
    }

    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Projects numbered in configuration order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| Project::new(ProjectId(i), normalize(&p.name), p.size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_configuration() {
        let config = Config::from_toml_str(
            r#"
            [solver]
            seed = 7
            unranked_rank = 3.0
            cost = "linear"
            prune = false
            allow_unassigned = true

            [input]
            file = "prefs.csv"
            id_column = "Student"
            preferences_column = "Choices"
            separator = ","

            [[project]]
            name = "The Guardian"
            size = 3

            [[project]]
            name = " Peak AI "
            size = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.seed, 7);
        assert_eq!(config.solver.unranked_rank, 3.0);
        assert_eq!(config.solver.cost, Cost::Linear);
        assert!(!config.solver.prune);
        assert!(config.solver.allow_unassigned);
        assert_eq!(config.input.file, Some(PathBuf::from("prefs.csv")));
        assert_eq!(config.input.separator, ',');
        let projects = config.projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].id, ProjectId(1));
        assert_eq!(projects[1].name, "Peak AI");
        assert_eq!(projects[1].size, 4);
    }

    #[test]
    fn defaults() {
        let config = Config::from_toml_str(
            r#"
            [[project]]
            name = "a"
            size = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.seed, DEFAULT_SEED);
        assert_eq!(config.solver.unranked_rank, 2.5);
        assert_eq!(config.solver.cost, Cost::Squared);
        assert!(config.solver.prune);
        assert!(!config.solver.allow_unassigned);
        assert_eq!(config.input.id_column, "ID");
        assert_eq!(config.input.preferences_column, "list of projects");
        assert_eq!(config.input.separator, ';');
        assert!(config.input.file.is_none());
    }

    #[test]
    fn project_order_is_kept() {
        let config = Config::from_toml_str(
            r#"
            [[project]]
            name = "z"
            size = 1
            [[project]]
            name = "a"
            size = 1
            [[project]]
            name = "m"
            size = 1
            "#,
        )
        .unwrap();
        let names = config
            .projects()
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_toml_str("[[project]]\nname = \"a\"\nsize = -1\n").is_err());
        assert!(Config::from_toml_str("[solver]\ncost = \"cubic\"\n").is_err());
        assert!(Config::from_toml_str("[solver]\nunknown = 1\n").is_err());
    }
}
