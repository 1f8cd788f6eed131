//! bosun jobs command

use crate::project::Project;
use anyhow::bail;
use clap::{Args, Subcommand, ValueEnum};
use console::style;
use jobs::{CharacterTeamType, ItemRequirement, JobDefinition};
use shared::Identifier;
use std::path::Path;

#[derive(Debug, Args)]
pub struct JobsCommand {
    #[command(subcommand)]
    pub command: JobsSubcommand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Team {
    Team1,
    Team2,
}

impl From<Team> for CharacterTeamType {
    fn from(team: Team) -> Self {
        match team {
            Team::Team1 => CharacterTeamType::Team1,
            Team::Team2 => CharacterTeamType::Team2,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum JobsSubcommand {
    /// List all jobs
    List,
    /// Show one job with the items of a variant
    Show {
        /// Job identifier
        id: String,
        /// Item set variant
        #[arg(long, default_value_t = 0)]
        variant: usize,
        /// Team the items are resolved for
        #[arg(long, value_enum, default_value_t = Team::Team1)]
        team: Team,
        /// Resolve items for a PvP game mode
        #[arg(long)]
        pvp: bool,
    },
    /// Show item repair priorities
    Priorities,
}

impl JobsCommand {
    pub fn run(&self, root: &Path) -> anyhow::Result<()> {
        let project = Project::load(root)?;
        project.print_diagnostics();

        match &self.command {
            JobsSubcommand::List => list(&project),
            JobsSubcommand::Show {
                id,
                variant,
                team,
                pvp,
            } => {
                let Some(job) = project.jobs.get(&Identifier::new(id)) else {
                    bail!("Job '{}' not found", id);
                };
                show(&project, job, *variant, (*team).into(), *pvp)
            }
            JobsSubcommand::Priorities => {
                let mut priorities: Vec<_> = project.jobs.item_repair_priorities().iter().collect();
                priorities.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));
                for (tag, priority) in priorities {
                    println!("  {:<20} {}", tag.as_str(), priority);
                }
                Ok(())
            }
        }
    }
}

fn list(project: &Project) -> anyhow::Result<()> {
    if project.jobs.is_empty() {
        println!("No jobs found");
        return Ok(());
    }

    println!(
        "{}",
        style(format!(
            "  {:<20} {:<22} {:>8} {:>6} {:>6}",
            "IDENTIFIER", "NAME", "VARIANTS", "SKILLS", "PRICE"
        ))
        .bold()
    );
    for job in project.jobs.iter() {
        let line = format!(
            "  {:<20} {:<22} {:>8} {:>6} {:>6}",
            job.identifier().as_str(),
            job.display_name(&project.texts),
            job.variants(),
            job.skills().len(),
            job.price_multiplier()
        );
        if job.hidden_job() {
            println!("{} {}", style(line).dim(), style("(hidden)").dim());
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn show(
    project: &Project,
    job: &JobDefinition,
    variant: usize,
    team: CharacterTeamType,
    is_pvp: bool,
) -> anyhow::Result<()> {
    let props = job.properties();
    println!(
        "{} ({})",
        style(job.display_name(&project.texts)).bold().cyan(),
        job.identifier()
    );
    let description = job.description(&project.texts);
    if !description.is_empty() {
        println!("{}", description);
    }
    println!();
    println!("  Idle behavior:   {:?}", props.idle_behavior);
    println!("  Crew limits:     {}..={}", props.min_number, props.max_number);
    println!("  Initial count:   {}", props.initial_count);
    println!("  Price:           x{}", props.price_multiplier);
    println!("  Vitality:        {:+}", props.vitality_modifier);
    println!("  Min karma:       {}", props.min_karma);

    println!();
    println!("{}", style("Skills").bold());
    for skill in job.skills() {
        let marker = if skill.is_primary_skill() { "*" } else { " " };
        println!(
            " {} {:<16} {}  (pvp {})",
            marker,
            skill.identifier().as_str(),
            skill.level_range(false),
            skill.level_range(true)
        );
    }

    if !job.autonomous_objectives().is_empty() {
        println!();
        println!("{}", style("Autonomous objectives").bold());
        for objective in job.autonomous_objectives() {
            println!(
                "  {:<20} x{}",
                objective.identifier.as_str(),
                objective.priority_modifier
            );
        }
    }

    println!();
    println!(
        "{}",
        style(format!(
            "Items (variant {} of {}, {:?}, {})",
            variant,
            job.variants(),
            team,
            if is_pvp { "PvP" } else { "PvE" }
        ))
        .bold()
    );
    let items = job.variant_items(variant);
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        let depth = depth_of(job, variant, item);
        let indent = "  ".repeat(depth + 1);
        match item.resolve_identifier(team, is_pvp) {
            Some(identifier) => {
                let mut flags = Vec::new();
                if item.equip() {
                    flags.push("equip");
                }
                if item.outfit() {
                    flags.push("outfit");
                }
                if item.infinite() {
                    flags.push("infinite");
                }
                let amount = if item.infinite() {
                    String::new()
                } else {
                    format!(" x{}", item.amount())
                };
                println!("{}{}{} {}", indent, identifier, amount, style(flags.join(",")).dim());
            }
            None => println!(
                "{}{}",
                indent,
                style(format!("{} (not in this mode)", item.item_identifier())).dim()
            ),
        }
    }
    Ok(())
}

fn depth_of(job: &JobDefinition, variant: usize, item: &ItemRequirement) -> usize {
    let mut depth = 0;
    let mut current = item;
    while let Some(parent) = job.parent_of(variant, current) {
        depth += 1;
        current = parent;
    }
    depth
}
