use hiring::{
    CandidateFactory, CrewMemberRecord, HireCandidatePool, HireSources, HumanTemplate,
    InMemoryCrew, InMemoryNpcSets, OutpostLocation, SalaryCalculator, StatType,
    MAX_AVAILABLE_CHARACTERS,
};
use jobs::{ContentLoader, JobRegistry};
use shared::{Identifier, SyncedRng, UnsyncedRng};
use std::fs;
use tempfile::tempdir;

const JOBS: &str = r#"
name: Jobs
children:
  - name: Job
    attributes: { identifier: captain, pricemultiplier: 2 }
    children:
      - name: Skills
        children:
          - name: Skill
            attributes: { identifier: helm, level: "50,50", primary: true }
      - name: ItemSet
        children:
          - name: Item
            attributes: { identifier: captainscap, equip: true }
  - name: Job
    attributes: { identifier: engineer }
    children:
      - name: Skills
        children:
          - name: Skill
            attributes: { identifier: electrical, level: "30,30" }
      - name: ItemSet
      - name: ItemSet
  - name: Job
    attributes: { identifier: securityofficer }
    children:
      - name: ItemSet
  - name: Job
    attributes: { identifier: outpostguard, hiddenjob: true }
  - name: ItemRepairPriorities
    children:
      - name: Priority
        attributes: { tag: reactor, priority: 5 }
"#;

const LOCATION: &str = r#"
name: Hadal Station
locationType:
  identifier: outpost
  hireableJobs:
    - job: captain
      commonness: 0
      alwaysAvailableIfMissingFromCrew: true
    - job: engineer
      commonness: 1
faction:
  identifier: coalition
  hireableCharacters:
    - { npcSet: outpostnpcs, npc: guard, minReputation: 10 }
    - { npcSet: outpostnpcs, npc: drifter, minReputation: 20 }
secondaryFaction:
  identifier: separatists
  hireableCharacters:
    - { npcSet: outpostnpcs, npc: guard, minReputation: 40 }
"#;

fn load_jobs() -> JobRegistry {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("jobs.yaml"), JOBS).unwrap();
    let mut registry = JobRegistry::new();
    let report = ContentLoader::default()
        .load_directory(dir.path(), &mut registry)
        .unwrap();
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    registry
}

fn npc_sets() -> InMemoryNpcSets {
    let mut sets = InMemoryNpcSets::new();
    sets.insert(
        "outpostnpcs",
        HumanTemplate::new("guard").with_jobs([Identifier::new("securityofficer")]),
    );
    sets.insert("outpostnpcs", HumanTemplate::new("drifter"));
    sets
}

#[test]
fn test_generate_pool_from_content() {
    let jobs = load_jobs();
    let sets = npc_sets();
    let factory = CandidateFactory::default();
    let sources = HireSources {
        jobs: &jobs,
        npc_sets: &sets,
        factory: &factory,
    };
    let location: OutpostLocation = serde_yaml::from_str(LOCATION).unwrap();

    let mut pool = HireCandidatePool::new();
    let diagnostics = pool.generate_characters(&sources, &location, 3, &mut UnsyncedRng::seeded(21));
    assert!(diagnostics.is_empty());

    let candidates = pool.available_characters();
    assert_eq!(candidates.len(), MAX_AVAILABLE_CHARACTERS);

    let jobs_of: Vec<_> = candidates
        .iter()
        .map(|c| c.job_identifier().unwrap().as_str())
        .collect();
    assert_eq!(&jobs_of[..4], &["captain", "engineer", "engineer", "securityofficer"]);
    // drifter takes any non-hidden job
    assert_ne!(jobs_of[4], "outpostguard");
    assert_eq!(jobs_of[5], "securityofficer");

    assert!(candidates[..3].iter().all(|c| c.min_reputation_to_hire().is_none()));
    let separatist = candidates[5].min_reputation_to_hire().unwrap();
    assert_eq!(separatist.faction, "separatists");
    assert_eq!(separatist.reputation, 40.0);

    // 50 * 10 * 2
    assert_eq!(candidates[0].salary(), 1000);
    assert!(candidates.iter().all(|c| {
        let variants = jobs.find(c.job_identifier().unwrap()).unwrap().variants();
        c.variant() < variants.max(1)
    }));
}

#[test]
fn test_crew_changes_offers_and_prices() {
    let jobs = load_jobs();
    let sets = npc_sets();
    let factory = CandidateFactory::default();
    let sources = HireSources {
        jobs: &jobs,
        npc_sets: &sets,
        factory: &factory,
    };

    let mut crew = InMemoryCrew::new();
    crew.add(
        CrewMemberRecord::new("Ada")
            .with_job("captain")
            .with_stat(StatType::HireCostMultiplier, Some(Identifier::new("engineer")), -0.5),
    );
    let mut location: OutpostLocation = serde_yaml::from_str(LOCATION).unwrap();
    location.location_type.observe_crew(&crew);
    location.faction = None;
    location.secondary_faction = None;

    let mut pool = HireCandidatePool::new();
    pool.generate_characters(&sources, &location, 2, &mut UnsyncedRng::seeded(3));

    let candidates = pool.available_characters();
    assert_eq!(candidates.len(), 2);
    assert!(candidates
        .iter()
        .all(|c| c.job_identifier().unwrap().as_str() == "engineer"));

    // 30 * 10 at half price
    let calculator = SalaryCalculator::new(&crew);
    assert_eq!(candidates[0].salary(), 300);
    assert_eq!(calculator.salary_for(&candidates[0]), 150);
    assert_eq!(calculator.salary_for_all(candidates), 300);
}

#[test]
fn test_synced_random_job_sequence() {
    let jobs = load_jobs();
    let draw = |seed| {
        let mut rng = SyncedRng::from_seed(seed);
        (0..16)
            .map(|_| jobs.random(&mut rng).unwrap().identifier().clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(draw(77), draw(77));
    assert!(draw(77).iter().all(|id| id != "outpostguard"));
    assert_eq!(jobs.repair_priority(&Identifier::new("reactor")), Some(5.0));
}
