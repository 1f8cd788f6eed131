//! ContentLoader - Load job content files into a JobRegistry

use crate::job::JobDefinition;
use crate::registry::JobRegistry;
use crate::repair_priority::ItemRepairPriority;
use shared::{AttributeSource, BosunConfig, ContentElement, ContentError, Diagnostics};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Everything one content file declares
#[derive(Debug, Default)]
pub struct JobsFile {
    pub jobs: Vec<JobDefinition>,
    pub repair_priorities: Vec<ItemRepairPriority>,
}

impl JobsFile {
    /// Read a `Jobs` root (jobs and `ItemRepairPriorities` blocks) or a bare
    /// `Job` root. Other roots declare nothing.
    pub fn from_element<E: AttributeSource>(root: &E, diagnostics: &mut Diagnostics) -> Self {
        let mut file = Self::default();
        if root.name_is("job") {
            file.jobs.extend(JobDefinition::from_element(root, diagnostics));
            return file;
        }
        if !root.name_is("jobs") {
            tracing::debug!("Skipping content root '{}'", root.name());
            return file;
        }

        for element in root.elements() {
            if element.name_is("itemrepairpriorities") {
                file.repair_priorities.extend(
                    element
                        .elements()
                        .iter()
                        .filter_map(|e| ItemRepairPriority::from_element(e, diagnostics)),
                );
            } else if element.name_is("job") {
                file.jobs
                    .extend(JobDefinition::from_element(element, diagnostics));
            }
        }
        file
    }

    /// Parse a content file, JSON by `.json` extension and YAML otherwise
    pub fn from_path(path: &Path, diagnostics: &mut Diagnostics) -> shared::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let root = if is_json {
            ContentElement::from_json_str(&content)?
        } else {
            ContentElement::from_yaml_str(&content)?
        };
        Ok(Self::from_element(&root, diagnostics))
    }

    /// Move everything into a registry
    pub fn register_into(self, registry: &mut JobRegistry) {
        for priority in self.repair_priorities {
            registry.register_repair_priority(priority);
        }
        for job in self.jobs {
            registry.register(job);
        }
    }
}

/// Outcome of loading a content directory
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files parsed successfully, in load order
    pub files: Vec<PathBuf>,
    pub jobs_registered: usize,
    pub repair_priorities_registered: usize,
    /// Problems recovered from, including files that failed to parse
    pub diagnostics: Diagnostics,
}

impl LoadReport {
    /// Fold another report into this one
    pub fn absorb(&mut self, other: LoadReport) {
        self.files.extend(other.files);
        self.jobs_registered += other.jobs_registered;
        self.repair_priorities_registered += other.repair_priorities_registered;
        self.diagnostics.absorb(other.diagnostics);
    }
}

/// Content loader
#[derive(Debug, Clone)]
pub struct ContentLoader {
    patterns: Vec<String>,
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::from_config(&BosunConfig::default())
    }
}

impl ContentLoader {
    /// Create a loader matching file names against `patterns`
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn from_config(config: &BosunConfig) -> Self {
        Self::new(config.content_patterns.clone())
    }

    /// Content files of a directory, sorted by path
    pub fn discover(&self, dir: &Path, diagnostics: &mut Diagnostics) -> shared::Result<Vec<PathBuf>> {
        let base = glob::Pattern::escape(&dir.to_string_lossy());
        let mut paths = BTreeSet::new();

        for pattern in &self.patterns {
            let full = format!("{}/{}", base.trim_end_matches('/'), pattern);
            for entry in glob::glob(&full)? {
                match entry {
                    Ok(path) if path.is_file() => {
                        paths.insert(path);
                    }
                    Ok(_) => {}
                    Err(e) => diagnostics.report(ContentError::Io(e.into_error())),
                }
            }
        }

        Ok(paths.into_iter().collect())
    }

    /// Load every content file of a directory into `registry`.
    ///
    /// A missing directory loads nothing. A file that can't be read or parsed
    /// is reported and skipped; later files override jobs of earlier ones.
    pub fn load_directory(&self, dir: &Path, registry: &mut JobRegistry) -> shared::Result<LoadReport> {
        let mut report = LoadReport::default();
        if !dir.exists() {
            tracing::debug!("Content directory {} does not exist", dir.display());
            return Ok(report);
        }

        for path in self.discover(dir, &mut report.diagnostics)? {
            match JobsFile::from_path(&path, &mut report.diagnostics) {
                Ok(file) => {
                    tracing::debug!(
                        "Loaded {} job(s) from {}",
                        file.jobs.len(),
                        path.display()
                    );
                    report.jobs_registered += file.jobs.len();
                    report.repair_priorities_registered += file.repair_priorities.len();
                    report.files.push(path);
                    file.register_into(registry);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}", path.display());
                    report.diagnostics.report(e);
                }
            }
        }

        Ok(report)
    }

    /// Load several directories in order
    pub fn load_directories<'a>(
        &self,
        dirs: impl IntoIterator<Item = &'a PathBuf>,
        registry: &mut JobRegistry,
    ) -> shared::Result<LoadReport> {
        let mut report = LoadReport::default();
        for dir in dirs {
            report.absorb(self.load_directory(dir, registry)?);
        }
        Ok(report)
    }
}
