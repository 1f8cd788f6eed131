//! # Bosun Jobs
//!
//! Job definitions for crew characters.
//!
//! ## Components
//!
//! - `JobDefinition` - Skills, per-variant starting items and tunables of a job
//! - `ItemRequirement` - A starting item, possibly nested inside another
//! - `JobRegistry` - Loaded jobs and item repair priorities
//! - `ContentLoader` - Reads content files into a registry

pub mod job;
pub mod job_item;
pub mod loader;
pub mod objective;
pub mod properties;
pub mod registry;
pub mod repair_priority;
pub mod skill;

pub use job::{JobDefinition, MapTextLookup, SpriteRef, TextLookup};
pub use job_item::{CharacterTeamType, GameModeScope, ItemRequirement};
pub use loader::{ContentLoader, JobsFile, LoadReport};
pub use objective::AutonomousObjective;
pub use properties::{IdleBehavior, JobProperties};
pub use registry::JobRegistry;
pub use repair_priority::ItemRepairPriority;
pub use skill::{SkillPrefab, DEFAULT_SKILL_PRICE_MULTIPLIER};
