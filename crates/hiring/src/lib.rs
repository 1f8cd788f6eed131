//! # Bosun Hiring
//!
//! Hire candidates offered at a location and what they cost.
//!
//! ## Components
//!
//! - `HireCandidatePool` - Available candidates and pending hires
//! - `CandidateFactory` - Synthesizes candidates for a job or NPC template
//! - `SalaryCalculator` - Salary after crew hire cost modifiers
//! - `world` / `crew` - Location, faction and crew collaborators with in-memory adapters

pub mod character;
pub mod crew;
pub mod factory;
pub mod pool;
pub mod salary;
pub mod world;

pub use character::{CandidateId, CharacterInfo, JobAssignment, ReputationRequirement, SkillLevel};
pub use crew::{CharacterType, CrewMember, CrewMemberRecord, CrewRoster, InMemoryCrew, SavedStat, StatType};
pub use factory::{base_salary, CandidateFactory};
pub use pool::{HireCandidatePool, HireSources, MAX_AVAILABLE_CHARACTERS};
pub use salary::SalaryCalculator;
pub use world::{
    FactionPrefab, HireableCharacter, HireableJob, HumanTemplate, InMemoryNpcSets, Location,
    LocationType, NpcSetRegistry, OutpostLocation, WeightedLocationType,
};
