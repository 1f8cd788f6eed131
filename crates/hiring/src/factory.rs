//! CandidateFactory - synthesizes hire candidates for a job

use crate::character::{CandidateId, CharacterInfo, SkillLevel};
use crate::world::HumanTemplate;
use jobs::{JobDefinition, JobRegistry, SkillPrefab};
use rand::Rng;
use shared::{ContentError, Diagnostics, NamePools, RandomDomain, UnsyncedRng};

/// Name used when both name pools are empty
const FALLBACK_NAME: &str = "Crewmate";

#[derive(Debug, Clone, Default)]
pub struct CandidateFactory {
    names: NamePools,
}

impl CandidateFactory {
    pub fn new(names: NamePools) -> Self {
        Self { names }
    }

    /// Candidate for `job` with a random item set variant
    pub fn create(&self, job: &JobDefinition, rng: &mut UnsyncedRng) -> CharacterInfo {
        let variant = rng.range(0, job.variants());
        self.create_with_variant(job, variant, rng)
    }

    /// Candidate for `job` with a given item set variant
    pub fn create_with_variant(
        &self,
        job: &JobDefinition,
        variant: usize,
        rng: &mut UnsyncedRng,
    ) -> CharacterInfo {
        let id = CandidateId::from_rng(rng);
        let name = self.roll_name(rng);
        let skills: Vec<SkillLevel> = job
            .skills()
            .iter()
            .map(|skill| SkillLevel {
                identifier: skill.identifier().clone(),
                level: roll_level(skill, rng),
            })
            .collect();
        let salary = base_salary(job, &skills);

        CharacterInfo::new(id, name)
            .with_job(job.identifier().clone(), variant)
            .with_skills(skills, salary)
    }

    /// Candidate from an NPC template.
    ///
    /// The job is picked among the template's jobs, or among all non-hidden
    /// jobs when it names none. Yields `None` when no job can be resolved.
    pub fn create_from_template(
        &self,
        template: &HumanTemplate,
        jobs: &JobRegistry,
        rng: &mut UnsyncedRng,
        diagnostics: &mut Diagnostics,
    ) -> Option<CharacterInfo> {
        let job = if template.jobs.is_empty() {
            jobs.random(rng)
        } else {
            let identifier = rng.pick(&template.jobs)?;
            match jobs.try_get(identifier) {
                Ok(job) => Some(job),
                Err(e) => {
                    diagnostics.report(ContentError::from(e));
                    None
                }
            }
        }?;

        let mut info = self
            .create(job, rng)
            .with_npc_template(template.identifier.clone());
        if let Some(name) = template.name.as_deref().filter(|n| !n.is_empty()) {
            info.rename(name);
        }
        Some(info)
    }

    fn roll_name(&self, rng: &mut UnsyncedRng) -> String {
        let first = rng.pick(&self.names.first_names);
        let last = rng.pick(&self.names.last_names);
        match (first, last) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => FALLBACK_NAME.to_string(),
        }
    }
}

fn roll_level(skill: &SkillPrefab, rng: &mut UnsyncedRng) -> f32 {
    let range = skill.level_range(false);
    if !range.start.is_finite() {
        return 0.0;
    }
    if range.end.is_finite() && range.end > range.start {
        rng.gen_range(range.start..=range.end)
    } else {
        range.start
    }
}

/// Sum of each skill's level times its price multiplier, times the job's
/// price multiplier. Each step truncates.
pub fn base_salary(job: &JobDefinition, skills: &[SkillLevel]) -> u32 {
    let total: i64 = skills
        .iter()
        .map(|level| {
            let multiplier = job
                .skills()
                .iter()
                .find(|s| s.identifier() == &level.identifier)
                .map_or(0.0, |s| s.price_multiplier());
            (level.level * multiplier).floor() as i64
        })
        .sum();
    (total as f32 * job.price_multiplier()).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ContentElement, Identifier, ValueRange};

    const MECHANIC: &str = r#"
name: Job
attributes: { identifier: mechanic, pricemultiplier: 1.5 }
children:
  - name: Skills
    children:
      - name: Skill
        attributes: { identifier: mechanical, level: "40,40", primary: true }
      - name: Skill
        attributes: { identifier: weapons, level: "10,20", pricemultiplier: 5 }
  - name: ItemSet
  - name: ItemSet
"#;

    fn mechanic() -> JobDefinition {
        let element = ContentElement::from_yaml_str(MECHANIC).unwrap();
        JobDefinition::from_element(&element, &mut Diagnostics::new()).unwrap()
    }

    #[test]
    fn test_create_rolls_skills_in_range() {
        let job = mechanic();
        let factory = CandidateFactory::default();
        let mut rng = UnsyncedRng::seeded(1);

        for _ in 0..50 {
            let info = factory.create(&job, &mut rng);
            assert_eq!(info.job_identifier(), Some(job.identifier()));
            assert!(info.variant() < 2);
            assert_eq!(info.skill_level(&Identifier::new("mechanical")), Some(40.0));
            let weapons = info.skill_level(&Identifier::new("weapons")).unwrap();
            assert!((10.0..=20.0).contains(&weapons));
            assert!(!info.name().is_empty());
        }
    }

    #[test]
    fn test_base_salary() {
        let job = mechanic();
        let skills = vec![
            SkillLevel { identifier: Identifier::new("mechanical"), level: 40.0 },
            SkillLevel { identifier: Identifier::new("weapons"), level: 12.5 },
        ];
        // floor((400 + 62) * 1.5)
        assert_eq!(base_salary(&job, &skills), 693);
    }

    #[test]
    fn test_create_with_infinite_level() {
        let yaml = r#"
name: Job
attributes: { identifier: engineer }
children:
  - name: Skills
    children:
      - name: Skill
        attributes: { identifier: electrical, level: "0,inf", primary: true }
"#;
        let element = ContentElement::from_yaml_str(yaml).unwrap();
        let mut diagnostics = Diagnostics::new();
        let job = JobDefinition::from_element(&element, &mut diagnostics).unwrap();
        assert_eq!(diagnostics.len(), 1);

        let info = CandidateFactory::default().create(&job, &mut UnsyncedRng::seeded(2));
        assert_eq!(info.skill_level(&Identifier::new("electrical")), Some(0.0));

        let unbounded = SkillPrefab::new("helm", ValueRange::new(5.0, f32::INFINITY));
        assert_eq!(roll_level(&unbounded, &mut UnsyncedRng::seeded(2)), 5.0);
    }

    #[test]
    fn test_zero_variants_use_variant_zero() {
        let element = ContentElement::new("Job").with_attribute("identifier", "assistant");
        let job = JobDefinition::from_element(&element, &mut Diagnostics::new()).unwrap();
        let info = CandidateFactory::default().create(&job, &mut UnsyncedRng::seeded(4));
        assert_eq!(info.variant(), 0);
        assert_eq!(info.salary(), 0);
    }

    #[test]
    fn test_empty_name_pools() {
        let factory = CandidateFactory::new(NamePools {
            first_names: vec![],
            last_names: vec![],
        });
        let info = factory.create(&mechanic(), &mut UnsyncedRng::seeded(2));
        assert_eq!(info.name(), FALLBACK_NAME);
    }

    #[test]
    fn test_create_from_template() {
        let mut jobs = JobRegistry::new();
        jobs.register(mechanic());
        let factory = CandidateFactory::default();
        let mut rng = UnsyncedRng::seeded(8);
        let mut diagnostics = Diagnostics::new();

        let mut template = HumanTemplate::new("engineer_npc").with_jobs([Identifier::new("mechanic")]);
        template.name = Some("Captain Nemo".to_string());
        let info = factory
            .create_from_template(&template, &jobs, &mut rng, &mut diagnostics)
            .unwrap();
        assert_eq!(info.name(), "Captain Nemo");
        assert_eq!(info.npc_template(), Some(&Identifier::new("engineer_npc")));

        // no jobs listed: any non-hidden job
        let info = factory
            .create_from_template(&HumanTemplate::new("drifter"), &jobs, &mut rng, &mut diagnostics)
            .unwrap();
        assert_eq!(info.job_identifier(), Some(&Identifier::new("mechanic")));
        assert!(diagnostics.is_empty());

        let unknown = HumanTemplate::new("cook").with_jobs([Identifier::new("chef")]);
        assert!(factory
            .create_from_template(&unknown, &jobs, &mut rng, &mut diagnostics)
            .is_none());
        assert!(diagnostics.entries()[0].is_unresolved_reference());
    }
}
