//! Configuration loading.
//!
//! The tool is driven by a single JSON document naming the tracker, the
//! work-hours window, and the projects to process. A configuration that
//! fails to load is fatal; nothing runs without one.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::timesheet::WorkHours;

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the YouTrack instance, without trailing slash.
    pub youtrack_url: String,
    /// Permanent API token used as a bearer token.
    pub api_token: String,
    /// Daily business-hours window, "HH:MM" strings.
    pub work_hours: WorkHoursConfig,
    /// Calendar-backed projects (enumerated only, not yet implemented).
    #[serde(default)]
    pub calendar_projects: Vec<CalendarProject>,
    /// Git repositories to reconstruct work time from.
    #[serde(default)]
    pub git_projects: Vec<GitProject>,
}

/// Raw work-hours pair as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkHoursConfig {
    /// Start of the working day, e.g. "09:00".
    pub start: String,
    /// End of the working day, e.g. "18:00".
    pub end: String,
}

/// A project whose work time comes from calendar data.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarProject {
    /// Display name used in log output.
    pub name: String,
    /// Tracker issue the time would be logged against.
    pub issue_id: String,
}

/// A project whose work time is reconstructed from a git repository.
#[derive(Debug, Clone, Deserialize)]
pub struct GitProject {
    /// Display name used in log output.
    pub name: String,
    /// Path to the local repository (work tree or .git directory).
    pub repo_path: String,
    /// Tracker issue the time is logged against.
    pub issue_id: String,
}

impl Config {
    /// Loads and parses the configuration from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str::<Config>(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses the configured work-hours strings into a validated window.
    pub fn work_hours(&self) -> Result<WorkHours> {
        WorkHours::parse(&self.work_hours.start, &self.work_hours.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn config_load_parses_all_sections() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "youtrack_url": "https://yt.example.com",
                "api_token": "perm:abc",
                "work_hours": { "start": "09:00", "end": "18:00" },
                "calendar_projects": [
                    { "name": "Meetings", "issue_id": "OPS-1" }
                ],
                "git_projects": [
                    { "name": "Backend", "repo_path": "/src/backend", "issue_id": "BE-42" }
                ]
            }"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.youtrack_url, "https://yt.example.com");
        assert_eq!(config.calendar_projects.len(), 1);
        assert_eq!(config.git_projects[0].issue_id, "BE-42");

        let hours = config.work_hours().unwrap();
        assert_eq!(hours.start.format("%H:%M").to_string(), "09:00");
    }

    #[test]
    fn config_load_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn config_load_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn config_project_lists_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "youtrack_url": "https://yt.example.com",
                "api_token": "perm:abc",
                "work_hours": { "start": "08:30", "end": "17:00" }
            }"#,
        );

        let config = Config::load(&path).unwrap();
        assert!(config.calendar_projects.is_empty());
        assert!(config.git_projects.is_empty());
    }
}
