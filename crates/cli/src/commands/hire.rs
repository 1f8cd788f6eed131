//! bosun hire command

use crate::project::Project;
use anyhow::Context;
use clap::{Args, Subcommand};
use console::style;
use hiring::{
    CandidateFactory, HireCandidatePool, HireSources, InMemoryCrew, InMemoryNpcSets,
    OutpostLocation, SalaryCalculator,
};
use serde::Deserialize;
use shared::UnsyncedRng;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct HireCommand {
    #[command(subcommand)]
    pub command: HireSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum HireSubcommand {
    /// Generate the candidates a location would offer
    Preview {
        /// Location file
        #[arg(long, default_value = "location.yaml")]
        location: PathBuf,
        /// Candidates drawn from the location type (defaults to the configured pool size)
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<i32>,
        /// Crew file used for missing jobs and salary modifiers
        #[arg(long)]
        crew: Option<PathBuf>,
        /// Fixed seed for a reproducible preview
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Location file: the location plus the NPC sets its factions refer to
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFile {
    #[serde(flatten)]
    pub location: OutpostLocation,
    #[serde(default)]
    pub npc_sets: InMemoryNpcSets,
}

impl LocationFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read location file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse location file {}", path.display()))
    }
}

fn load_crew(path: &Path) -> anyhow::Result<InMemoryCrew> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read crew file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse crew file {}", path.display()))
}

impl HireCommand {
    pub fn run(&self, root: &Path) -> anyhow::Result<()> {
        match &self.command {
            HireSubcommand::Preview {
                location,
                amount,
                crew,
                seed,
            } => {
                let project = Project::load(root)?;
                project.print_diagnostics();

                let mut location_file = LocationFile::load(&project.resolve(location))?;
                let crew = match crew {
                    Some(path) => load_crew(&project.resolve(path))?,
                    None => {
                        let default = project.resolve(Path::new("crew.yaml"));
                        if default.exists() {
                            load_crew(&default)?
                        } else {
                            InMemoryCrew::new()
                        }
                    }
                };
                location_file.location.location_type.observe_crew(&crew);

                let amount = amount.unwrap_or(project.config.hire_pool_size as i32);
                let mut rng = match seed {
                    Some(seed) => UnsyncedRng::seeded(*seed),
                    None => UnsyncedRng::from_entropy(),
                };

                let factory = CandidateFactory::new(project.config.names.clone());
                let sources = HireSources {
                    jobs: &project.jobs,
                    npc_sets: &location_file.npc_sets,
                    factory: &factory,
                };
                let mut pool = HireCandidatePool::new();
                let diagnostics =
                    pool.generate_characters(&sources, &location_file.location, amount, &mut rng);
                if !diagnostics.is_empty() {
                    println!(
                        "{} {} candidate(s) could not be generated",
                        style("!").yellow().bold(),
                        diagnostics.len()
                    );
                }

                print_pool(&project, &location_file.location, &pool, &crew);
                Ok(())
            }
        }
    }
}

fn print_pool(
    project: &Project,
    location: &OutpostLocation,
    pool: &HireCandidatePool,
    crew: &InMemoryCrew,
) {
    let calculator = SalaryCalculator::new(crew);
    let candidates = pool.available_characters();

    println!(
        "{} at {}",
        style(format!("{} candidate(s)", candidates.len())).bold(),
        style(&location.name).cyan()
    );
    for info in candidates {
        let job = info
            .job_identifier()
            .and_then(|id| project.jobs.find(id))
            .map(|job| job.display_name(&project.texts))
            .unwrap_or_default();
        let salary = calculator.salary_for(info);
        let mut line = format!(
            "  {:<22} {:<18} v{}  {:>6}",
            info.name(),
            job,
            info.variant(),
            salary
        );
        if salary != info.salary() {
            line.push_str(&format!(" (base {})", info.salary()));
        }
        println!("{}", line);

        if let Some(gate) = info.min_reputation_to_hire() {
            println!(
                "  {}",
                style(format!("requires {} reputation with {}", gate.reputation, gate.faction)).dim()
            );
        }
    }
    println!("  {:<45} {:>6}", "total", calculator.salary_for_all(candidates));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::InitCommand;
    use tempfile::tempdir;

    #[test]
    fn test_sample_location_file() {
        let dir = tempdir().unwrap();
        InitCommand {
            directory: dir.path().to_path_buf(),
            minimal: false,
        }
        .run()
        .unwrap();

        let file = LocationFile::load(&dir.path().join("location.yaml")).unwrap();
        assert_eq!(file.location.name, "Hadal Station");
        assert_eq!(file.npc_sets.len(), 1);
        assert!(file.location.faction.is_some());
    }

    #[test]
    fn test_preview_runs_on_sample_project() {
        let dir = tempdir().unwrap();
        InitCommand {
            directory: dir.path().to_path_buf(),
            minimal: false,
        }
        .run()
        .unwrap();

        HireCommand {
            command: HireSubcommand::Preview {
                location: PathBuf::from("location.yaml"),
                amount: Some(3),
                crew: None,
                seed: Some(5),
            },
        }
        .run(dir.path())
        .unwrap();
    }
}
