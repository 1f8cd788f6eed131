//! CharacterInfo - a hire candidate

use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{Identifier, RandomDomain};
use std::fmt;
use uuid::Uuid;

/// Identity of a candidate, stable across renames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(Uuid);

impl CandidateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Random v4 id drawn from a random domain, reproducible for seeded sources
    pub fn from_rng<R: RandomDomain>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl Default for CandidateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job and item set variant a candidate would be hired with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAssignment {
    pub job: Identifier,
    pub variant: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub identifier: Identifier,
    pub level: f32,
}

/// Reputation a faction must hold toward the player before the candidate
/// can be hired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationRequirement {
    pub faction: Identifier,
    pub reputation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInfo {
    id: CandidateId,
    name: String,
    job: Option<JobAssignment>,
    skills: Vec<SkillLevel>,
    /// Base salary before crew modifiers
    salary: u32,
    min_reputation_to_hire: Option<ReputationRequirement>,
    /// NPC template the candidate was created from
    npc_template: Option<Identifier>,
}

impl CharacterInfo {
    pub fn new(id: CandidateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            job: None,
            skills: Vec::new(),
            salary: 0,
            min_reputation_to_hire: None,
            npc_template: None,
        }
    }

    /// Builder: assign a job
    pub fn with_job(mut self, job: Identifier, variant: usize) -> Self {
        self.job = Some(JobAssignment { job, variant });
        self
    }

    /// Builder: set rolled skills and the base salary they cost
    pub fn with_skills(mut self, skills: Vec<SkillLevel>, salary: u32) -> Self {
        self.skills = skills;
        self.salary = salary;
        self
    }

    pub fn with_npc_template(mut self, template: Identifier) -> Self {
        self.npc_template = Some(template);
        self
    }

    pub fn id(&self) -> CandidateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn job(&self) -> Option<&JobAssignment> {
        self.job.as_ref()
    }

    pub fn job_identifier(&self) -> Option<&Identifier> {
        self.job.as_ref().map(|j| &j.job)
    }

    pub fn variant(&self) -> usize {
        self.job.as_ref().map_or(0, |j| j.variant)
    }

    pub fn skills(&self) -> &[SkillLevel] {
        &self.skills
    }

    pub fn skill_level(&self, skill: &Identifier) -> Option<f32> {
        self.skills
            .iter()
            .find(|s| &s.identifier == skill)
            .map(|s| s.level)
    }

    pub fn salary(&self) -> u32 {
        self.salary
    }

    pub fn min_reputation_to_hire(&self) -> Option<&ReputationRequirement> {
        self.min_reputation_to_hire.as_ref()
    }

    pub fn set_min_reputation_to_hire(&mut self, faction: Identifier, reputation: f32) {
        self.min_reputation_to_hire = Some(ReputationRequirement {
            faction,
            reputation,
        });
    }

    pub fn npc_template(&self) -> Option<&Identifier> {
        self.npc_template.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UnsyncedRng;

    #[test]
    fn test_seeded_ids_repeat() {
        let a = CandidateId::from_rng(&mut UnsyncedRng::seeded(42));
        let b = CandidateId::from_rng(&mut UnsyncedRng::seeded(42));
        assert_eq!(a, b);
        assert_ne!(CandidateId::new(), CandidateId::new());
    }

    #[test]
    fn test_character_info() {
        let mut info = CharacterInfo::new(CandidateId::new(), "Ada Dorn")
            .with_job(Identifier::new("mechanic"), 1)
            .with_skills(
                vec![SkillLevel {
                    identifier: Identifier::new("mechanical"),
                    level: 42.0,
                }],
                420,
            );
        info.set_min_reputation_to_hire(Identifier::new("coalition"), 20.0);
        info.rename("Ada Brandt");

        assert_eq!(info.name(), "Ada Brandt");
        assert_eq!(info.job_identifier(), Some(&Identifier::new("mechanic")));
        assert_eq!(info.variant(), 1);
        assert_eq!(info.skill_level(&Identifier::new("Mechanical")), Some(42.0));
        assert_eq!(info.skill_level(&Identifier::new("helm")), None);
        assert_eq!(info.salary(), 420);
        assert_eq!(
            info.min_reputation_to_hire().map(|r| r.faction.as_str()),
            Some("coalition")
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let info = CharacterInfo::new(CandidateId::new(), "Finn").with_job(Identifier::new("assistant"), 0);
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("minReputationToHire").is_some());
        let back: CharacterInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
    }
}
