//! Crew enumeration and per-character stats

use serde::{Deserialize, Serialize};
use shared::Identifier;

/// Which part of the crew to enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterType {
    /// Characters currently in the session
    Live,
    /// Characters waiting in reserve
    Reserve,
    Both,
}

impl CharacterType {
    pub fn includes(self, reserve: bool) -> bool {
        match self {
            CharacterType::Live => !reserve,
            CharacterType::Reserve => reserve,
            CharacterType::Both => true,
        }
    }
}

/// Saved character stats relevant to hiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatType {
    /// Added to the hire cost multiplier of a job
    HireCostMultiplier,
}

pub trait CrewMember {
    fn job_identifier(&self) -> Option<&Identifier>;

    /// Saved value of `stat` for `job`, including values that apply to all jobs
    fn saved_stat_value_with_all(&self, stat: StatType, job: &Identifier) -> Option<f32>;
}

pub trait CrewRoster {
    fn session_crew_characters(&self, kind: CharacterType) -> Vec<&dyn CrewMember>;
}

/// A saved stat value, scoped to one job or to all of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedStat {
    pub stat: StatType,
    /// `None` applies to every job
    #[serde(default)]
    pub job: Option<Identifier>,
    pub value: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewMemberRecord {
    pub name: String,
    #[serde(default)]
    pub job: Option<Identifier>,
    #[serde(default)]
    pub reserve: bool,
    #[serde(default)]
    pub stats: Vec<SavedStat>,
}

impl CrewMemberRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_job(mut self, job: impl Into<Identifier>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Builder: put the member in reserve
    pub fn reserve(mut self) -> Self {
        self.reserve = true;
        self
    }

    /// Builder: add a stat value; `job: None` applies to all jobs
    pub fn with_stat(mut self, stat: StatType, job: Option<Identifier>, value: f32) -> Self {
        self.stats.push(SavedStat { stat, job, value });
        self
    }
}

impl CrewMember for CrewMemberRecord {
    fn job_identifier(&self) -> Option<&Identifier> {
        self.job.as_ref()
    }

    fn saved_stat_value_with_all(&self, stat: StatType, job: &Identifier) -> Option<f32> {
        self.stats
            .iter()
            .filter(|s| s.stat == stat && s.job.as_ref().map_or(true, |j| j == job))
            .map(|s| s.value)
            .reduce(|a, b| a + b)
    }
}

/// Crew held in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryCrew {
    #[serde(default)]
    pub members: Vec<CrewMemberRecord>,
}

impl InMemoryCrew {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, member: CrewMemberRecord) {
        self.members.push(member);
    }
}

impl CrewRoster for InMemoryCrew {
    fn session_crew_characters(&self, kind: CharacterType) -> Vec<&dyn CrewMember> {
        self.members
            .iter()
            .filter(|m| kind.includes(m.reserve))
            .map(|m| m as &dyn CrewMember)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_with_all() {
        let member = CrewMemberRecord::new("Greta")
            .with_stat(StatType::HireCostMultiplier, Some(Identifier::new("mechanic")), -0.1)
            .with_stat(StatType::HireCostMultiplier, None, -0.05);

        let mechanic = member.saved_stat_value_with_all(StatType::HireCostMultiplier, &Identifier::new("mechanic"));
        assert!((mechanic.unwrap() + 0.15).abs() < 1e-6);
        assert_eq!(
            member.saved_stat_value_with_all(StatType::HireCostMultiplier, &Identifier::new("captain")),
            Some(-0.05)
        );
        assert_eq!(
            CrewMemberRecord::new("Hiro")
                .saved_stat_value_with_all(StatType::HireCostMultiplier, &Identifier::new("captain")),
            None
        );
    }

    #[test]
    fn test_roster_kinds() {
        let mut crew = InMemoryCrew::new();
        crew.add(CrewMemberRecord::new("Ines"));
        crew.add(CrewMemberRecord::new("Jonas").reserve());

        assert_eq!(crew.session_crew_characters(CharacterType::Live).len(), 1);
        assert_eq!(crew.session_crew_characters(CharacterType::Reserve).len(), 1);
        assert_eq!(crew.session_crew_characters(CharacterType::Both).len(), 2);
    }

    #[test]
    fn test_crew_from_yaml() {
        let yaml = r#"
members:
  - name: Bram
    job: captain
    stats:
      - stat: hireCostMultiplier
        value: 0.1
  - name: Cato
    reserve: true
"#;
        let crew: InMemoryCrew = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(crew.members.len(), 2);
        assert_eq!(crew.members[0].stats[0].stat, StatType::HireCostMultiplier);
        assert!(crew.members[1].reserve);
    }
}
