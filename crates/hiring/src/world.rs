//! Locations, factions and NPC templates consulted when generating a pool

use crate::crew::{CharacterType, CrewRoster};
use serde::{Deserialize, Serialize};
use shared::{select_weighted, Identifier, UnsyncedRng};
use std::collections::{BTreeMap, BTreeSet};

/// Hiring rules of a kind of location
pub trait LocationType {
    /// Jobs always offered while nobody in the crew has them
    fn hireables_missing_from_crew(&self) -> Vec<Identifier>;

    /// A job drawn by the location's hireable weights
    fn random_hireable(&self, rng: &mut UnsyncedRng) -> Option<Identifier>;
}

/// A visited location
pub trait Location {
    fn location_type(&self) -> &dyn LocationType;

    /// Faction controlling the location
    fn faction(&self) -> Option<&FactionPrefab>;

    fn secondary_faction(&self) -> Option<&FactionPrefab>;
}

/// Lookup of NPC templates by set and template identifier
pub trait NpcSetRegistry {
    fn get(&self, set: &Identifier, npc: &Identifier) -> Option<&HumanTemplate>;
}

/// A character a faction offers for hire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HireableCharacter {
    pub npc_set: Identifier,
    pub npc: Identifier,
    #[serde(default)]
    pub min_reputation: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionPrefab {
    pub identifier: Identifier,
    #[serde(default)]
    pub hireable_characters: Vec<HireableCharacter>,
}

/// Template for a predefined NPC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanTemplate {
    pub identifier: Identifier,
    /// Jobs the NPC may take; empty means any non-hidden job
    #[serde(default)]
    pub jobs: Vec<Identifier>,
    /// Fixed name instead of one from the name pools
    #[serde(default)]
    pub name: Option<String>,
}

impl HumanTemplate {
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = Identifier>) -> Self {
        self.jobs.extend(jobs);
        self
    }
}

/// NPC sets held in memory: set identifier -> templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryNpcSets {
    sets: BTreeMap<Identifier, Vec<HumanTemplate>>,
}

impl InMemoryNpcSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, set: impl Into<Identifier>, template: HumanTemplate) {
        self.sets.entry(set.into()).or_default().push(template);
    }

    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NpcSetRegistry for InMemoryNpcSets {
    fn get(&self, set: &Identifier, npc: &Identifier) -> Option<&HumanTemplate> {
        self.sets.get(set)?.iter().find(|t| &t.identifier == npc)
    }
}

/// A job a location type offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HireableJob {
    pub job: Identifier,
    #[serde(default = "default_commonness")]
    pub commonness: f32,
    #[serde(default)]
    pub always_available_if_missing_from_crew: bool,
}

fn default_commonness() -> f32 {
    1.0
}

/// Location type with commonness-weighted hireable jobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedLocationType {
    pub identifier: Identifier,
    #[serde(default)]
    pub hireable_jobs: Vec<HireableJob>,
    /// Jobs present in the current crew
    #[serde(skip)]
    crew_jobs: BTreeSet<Identifier>,
}

impl WeightedLocationType {
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Builder: offer a job
    pub fn with_job(mut self, job: impl Into<Identifier>, commonness: f32) -> Self {
        self.hireable_jobs.push(HireableJob {
            job: job.into(),
            commonness,
            always_available_if_missing_from_crew: false,
        });
        self
    }

    /// Builder: offer a job that is always available while the crew lacks it
    pub fn with_required_job(mut self, job: impl Into<Identifier>, commonness: f32) -> Self {
        self.hireable_jobs.push(HireableJob {
            job: job.into(),
            commonness,
            always_available_if_missing_from_crew: true,
        });
        self
    }

    /// Record the jobs of the live and reserve crew
    pub fn observe_crew(&mut self, crew: &dyn CrewRoster) {
        self.crew_jobs = crew
            .session_crew_characters(CharacterType::Both)
            .into_iter()
            .filter_map(|member| member.job_identifier().cloned())
            .collect();
    }
}

impl LocationType for WeightedLocationType {
    fn hireables_missing_from_crew(&self) -> Vec<Identifier> {
        self.hireable_jobs
            .iter()
            .filter(|h| h.always_available_if_missing_from_crew && !self.crew_jobs.contains(&h.job))
            .map(|h| h.job.clone())
            .collect()
    }

    fn random_hireable(&self, rng: &mut UnsyncedRng) -> Option<Identifier> {
        select_weighted(&self.hireable_jobs, |h| h.commonness, rng).map(|h| h.job.clone())
    }
}

/// Outpost with a weighted location type and up to two factions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpostLocation {
    #[serde(default)]
    pub name: String,
    pub location_type: WeightedLocationType,
    #[serde(default)]
    pub faction: Option<FactionPrefab>,
    #[serde(default)]
    pub secondary_faction: Option<FactionPrefab>,
}

impl Location for OutpostLocation {
    fn location_type(&self) -> &dyn LocationType {
        &self.location_type
    }

    fn faction(&self) -> Option<&FactionPrefab> {
        self.faction.as_ref()
    }

    fn secondary_faction(&self) -> Option<&FactionPrefab> {
        self.secondary_faction.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::{CrewMemberRecord, InMemoryCrew};

    #[test]
    fn test_missing_from_crew() {
        let mut location_type = WeightedLocationType::new("outpost")
            .with_required_job("captain", 0.0)
            .with_required_job("medicaldoctor", 1.0)
            .with_job("assistant", 5.0);

        let ids: Vec<_> = location_type.hireables_missing_from_crew();
        assert_eq!(ids, vec![Identifier::new("captain"), Identifier::new("medicaldoctor")]);

        let mut crew = InMemoryCrew::new();
        crew.add(CrewMemberRecord::new("Dagny").with_job("captain"));
        crew.add(CrewMemberRecord::new("Elif").with_job("medicaldoctor").reserve());
        location_type.observe_crew(&crew);
        assert!(location_type.hireables_missing_from_crew().is_empty());
    }

    #[test]
    fn test_random_hireable_respects_weights() {
        let location_type = WeightedLocationType::new("city")
            .with_job("captain", 0.0)
            .with_job("engineer", 1.0);
        let mut rng = UnsyncedRng::seeded(9);
        for _ in 0..100 {
            assert_eq!(
                location_type.random_hireable(&mut rng),
                Some(Identifier::new("engineer"))
            );
        }
        assert_eq!(WeightedLocationType::new("empty").random_hireable(&mut rng), None);
    }

    #[test]
    fn test_random_hireable_skips_infinite_commonness() {
        let yaml = r#"
identifier: outpost
hireableJobs:
  - job: captain
    commonness: .inf
  - job: engineer
    commonness: 2
"#;
        let location_type: WeightedLocationType = serde_yaml::from_str(yaml).unwrap();
        assert!(location_type.hireable_jobs[0].commonness.is_infinite());
        let mut rng = UnsyncedRng::seeded(9);
        for _ in 0..20 {
            assert_eq!(
                location_type.random_hireable(&mut rng),
                Some(Identifier::new("engineer"))
            );
        }
    }

    #[test]
    fn test_npc_sets() {
        let mut sets = InMemoryNpcSets::new();
        sets.insert("outpostnpcs", HumanTemplate::new("guard").with_jobs([Identifier::new("securityofficer")]));
        assert_eq!(sets.len(), 1);
        assert!(sets.get(&Identifier::new("OutpostNPCs"), &Identifier::new("guard")).is_some());
        assert!(sets.get(&Identifier::new("outpostnpcs"), &Identifier::new("merchant")).is_none());
        assert!(sets.get(&Identifier::new("other"), &Identifier::new("guard")).is_none());
    }

    #[test]
    fn test_location_from_yaml() {
        let yaml = r#"
name: Hadal Station
locationType:
  identifier: outpost
  hireableJobs:
    - job: assistant
      commonness: 3
    - job: mechanic
      alwaysAvailableIfMissingFromCrew: true
faction:
  identifier: coalition
  hireableCharacters:
    - npcSet: outpostnpcs
      npc: guard
      minReputation: 25
"#;
        let location: OutpostLocation = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(location.location_type.hireable_jobs.len(), 2);
        assert_eq!(location.location_type.hireable_jobs[1].commonness, 1.0);
        assert_eq!(
            location.location_type().hireables_missing_from_crew(),
            vec![Identifier::new("mechanic")]
        );
        let faction = location.faction().unwrap();
        assert_eq!(faction.hireable_characters[0].min_reputation, 25.0);
        assert!(location.secondary_faction().is_none());
    }
}
