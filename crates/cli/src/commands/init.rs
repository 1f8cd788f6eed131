//! bosun init command

use crate::project::{CONFIG_FILE, TEXTS_FILE};
use clap::Args;
use console::style;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Create minimal project without sample content
    #[arg(long)]
    pub minimal: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing Bosun project in {}", self.directory.display());

        let content_dir = self.directory.join("content");
        std::fs::create_dir_all(&content_dir)?;

        let config = serde_json::json!({
            "contentDirs": ["content"],
            "contentPatterns": ["*.yaml", "*.yml", "*.json"],
            "hirePoolSize": shared::DEFAULT_HIRE_POOL_SIZE,
        });
        std::fs::write(
            self.directory.join(CONFIG_FILE),
            serde_json::to_string_pretty(&config)?,
        )?;

        if !self.minimal {
            self.create_samples(&content_dir)?;
        }

        println!("{} Bosun project initialized", style("✓").green());
        Ok(())
    }

    fn create_samples(&self, content_dir: &Path) -> anyhow::Result<()> {
        std::fs::write(content_dir.join("jobs.yaml"), SAMPLE_JOBS)?;
        std::fs::write(self.directory.join("location.yaml"), SAMPLE_LOCATION)?;
        std::fs::write(self.directory.join("crew.yaml"), SAMPLE_CREW)?;
        std::fs::write(self.directory.join(TEXTS_FILE), SAMPLE_TEXTS)?;
        Ok(())
    }
}

const SAMPLE_JOBS: &str = r#"name: Jobs
children:
  - name: Job
    attributes:
      identifier: captain
      uicolor: "0.2,0.3,0.8,1"
      idlebehavior: StayInRoom
      maxnumber: 1
      pricemultiplier: 1.5
    children:
      - name: Skills
        children:
          - name: Skill
            attributes: { identifier: helm, level: "50,60", primary: true }
          - name: Skill
            attributes: { identifier: weapons, level: "20,30" }
      - name: ItemSet
        children:
          - name: Item
            attributes: { identifier: captainscap, equip: true, outfit: true }
          - name: Item
            attributes: { identifier: headset, identifierteam2: headset_renegade, equip: true }
            children:
              - name: Item
                attributes: { identifier: batterycell }
          - name: Item
            attributes: { identifier: revolver, gamemode: pvp }
      - name: AppropriateOrders
        children:
          - name: Order
            attributes: { identifier: steer }
  - name: Job
    attributes: { identifier: mechanic, initialcount: 1 }
    children:
      - name: Skills
        children:
          - name: Skill
            attributes: { identifier: mechanical, level: "40,50", primary: true }
      - name: ItemSet
        children:
          - name: Item
            attributes: { identifier: wrench, equip: true }
      - name: ItemSet
        children:
          - name: Item
            attributes: { identifier: crowbar, equip: true }
      - name: AutonomousObjectives
        children:
          - name: Objective
            attributes: { identifier: repairsystems, prioritymodifier: 1.5 }
  - name: Job
    attributes: { identifier: securityofficer }
    children:
      - name: Skills
        children:
          - name: Skill
            attributes: { identifier: weapons, level: "40,50", primary: true }
      - name: ItemSet
        children:
          - name: Item
            attributes: { identifier: stunbaton, equip: true }
  - name: Job
    attributes: { identifier: outpostguard, hiddenjob: true }
  - name: ItemRepairPriorities
    children:
      - name: Priority
        attributes: { tag: reactor, priority: 5 }
      - name: Priority
        attributes: { tag: pump, priority: 2 }
"#;

const SAMPLE_LOCATION: &str = r#"name: Hadal Station
locationType:
  identifier: outpost
  hireableJobs:
    - job: captain
      commonness: 1
      alwaysAvailableIfMissingFromCrew: true
    - job: mechanic
      commonness: 3
    - job: securityofficer
      commonness: 2
faction:
  identifier: coalition
  hireableCharacters:
    - npcSet: outpostnpcs
      npc: guard
      minReputation: 20
npcSets:
  outpostnpcs:
    - identifier: guard
      jobs: [securityofficer]
"#;

const SAMPLE_CREW: &str = r#"members:
  - name: Ada Dorn
    job: mechanic
    stats:
      - stat: hireCostMultiplier
        job: mechanic
        value: -0.1
"#;

const SAMPLE_TEXTS: &str = r#"JobName.captain: Captain
JobName.mechanic: Mechanic
JobName.securityofficer: Security Officer
JobDescription.captain: Keeps the crew alive and the submarine on course.
"#;
