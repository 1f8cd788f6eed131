//! Project - configuration and content of a Bosun project directory

use anyhow::Context;
use console::style;
use jobs::{ContentLoader, JobRegistry, LoadReport, MapTextLookup};
use shared::BosunConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "bosun.json";
pub const TEXTS_FILE: &str = "texts.yaml";

/// A loaded project
pub struct Project {
    pub root: PathBuf,
    pub config: BosunConfig,
    pub jobs: JobRegistry,
    pub texts: MapTextLookup,
    pub report: LoadReport,
}

impl Project {
    /// Load `bosun.json` (defaults when absent), the content it points at and
    /// the optional text file.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            BosunConfig::from_file(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?
        } else {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
            let mut config = BosunConfig::default();
            config.content_dirs = config.content_dirs.iter().map(|d| root.join(d)).collect();
            config
        };

        let mut jobs = JobRegistry::new();
        let report = ContentLoader::from_config(&config)
            .load_directories(&config.content_dirs, &mut jobs)
            .context("Failed to load job content")?;
        tracing::info!(
            "Loaded {} job(s) from {} file(s)",
            jobs.len(),
            report.files.len()
        );

        let texts_path = root.join(TEXTS_FILE);
        let texts = if texts_path.exists() {
            let content = std::fs::read_to_string(&texts_path)?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", texts_path.display()))?
        } else {
            MapTextLookup::new()
        };

        Ok(Self {
            root: root.to_path_buf(),
            config,
            jobs,
            texts,
            report,
        })
    }

    /// Resolve a path given on the command line against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.root.join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Print a one-line summary of content problems, if any
    pub fn print_diagnostics(&self) {
        let diagnostics = &self.report.diagnostics;
        if diagnostics.is_empty() {
            return;
        }
        println!(
            "{} {} content problem(s), run with --verbose for details",
            style("!").yellow().bold(),
            diagnostics.len()
        );
        for entry in diagnostics.entries() {
            tracing::debug!("{}", entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_without_config() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("content")).unwrap();
        std::fs::write(
            dir.path().join("content/jobs.yaml"),
            "name: Job\nattributes: { identifier: assistant }\n",
        )
        .unwrap();
        std::fs::write(dir.path().join(TEXTS_FILE), "JobName.assistant: Assistant\n").unwrap();

        let project = Project::load(dir.path()).unwrap();
        assert_eq!(project.jobs.len(), 1);
        let job = project.jobs.iter().next().unwrap();
        assert_eq!(job.display_name(&project.texts), "Assistant");
    }

    #[test]
    fn test_load_with_config() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("defs")).unwrap();
        std::fs::write(
            dir.path().join("defs/crew.json"),
            r#"{ "name": "Job", "attributes": { "identifier": "captain" } }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "contentDirs": ["defs"], "contentPatterns": ["*.json"] }"#,
        )
        .unwrap();

        let project = Project::load(dir.path()).unwrap();
        assert_eq!(project.report.files.len(), 1);
        assert!(project.jobs.contains(&shared::Identifier::new("captain")));
        assert_eq!(project.resolve(Path::new("crew.yaml")), dir.path().join("crew.yaml"));
    }
}
