//! JobRegistry - loaded job definitions and repair priorities

use crate::job::JobDefinition;
use crate::repair_priority::ItemRepairPriority;
use shared::{Identifier, JobNotFoundError, RandomDomain};
use std::collections::HashMap;

/// JobRegistry holds every job loaded for a session.
///
/// Populated at content load, read-only afterwards. Jobs iterate in
/// registration order so draws from a synced random domain agree between
/// participants that loaded the same content.
#[derive(Debug, Default)]
pub struct JobRegistry {
    /// All registered jobs, in registration order
    jobs: Vec<JobDefinition>,
    /// Identifier -> index into `jobs`
    index: HashMap<Identifier, usize>,
    /// Tag -> repair priority
    item_repair_priorities: HashMap<Identifier, f32>,
}

impl JobRegistry {
    /// Create an empty JobRegistry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job. A job with the same identifier is replaced in place
    /// and returned.
    pub fn register(&mut self, job: JobDefinition) -> Option<JobDefinition> {
        match self.index.get(job.identifier()) {
            Some(&i) => {
                tracing::debug!("Job '{}' overridden", job.identifier());
                Some(std::mem::replace(&mut self.jobs[i], job))
            }
            None => {
                self.index.insert(job.identifier().clone(), self.jobs.len());
                self.jobs.push(job);
                None
            }
        }
    }

    /// Register a repair priority; later entries for a tag win
    pub fn register_repair_priority(&mut self, priority: ItemRepairPriority) {
        self.item_repair_priorities
            .insert(priority.tag, priority.priority);
    }

    /// Look up a job, or explain why it isn't there
    pub fn try_get(&self, identifier: &Identifier) -> Result<&JobDefinition, JobNotFoundError> {
        self.find(identifier).ok_or_else(|| JobNotFoundError {
            job_id: identifier.to_string(),
            available_jobs: self.identifiers().map(|id| id.to_string()).collect(),
        })
    }

    /// Look up a job. A miss is logged and yields `None`.
    pub fn get(&self, identifier: &Identifier) -> Option<&JobDefinition> {
        match self.try_get(identifier) {
            Ok(job) => Some(job),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Look up a job without logging a miss
    pub fn find(&self, identifier: &Identifier) -> Option<&JobDefinition> {
        self.index.get(identifier).map(|&i| &self.jobs[i])
    }

    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.index.contains_key(identifier)
    }

    /// Jobs in registration order
    pub fn iter(&self) -> impl Iterator<Item = &JobDefinition> {
        self.jobs.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.jobs.iter().map(|j| j.identifier())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Uniformly random job that isn't hidden
    pub fn random<R: RandomDomain>(&self, rng: &mut R) -> Option<&JobDefinition> {
        self.random_matching(rng, |_| true)
    }

    /// Uniformly random job that isn't hidden and matches `predicate`
    pub fn random_matching<R: RandomDomain>(
        &self,
        rng: &mut R,
        predicate: impl Fn(&JobDefinition) -> bool,
    ) -> Option<&JobDefinition> {
        let candidates: Vec<&JobDefinition> = self
            .jobs
            .iter()
            .filter(|job| !job.hidden_job() && predicate(job))
            .collect();
        rng.pick(&candidates).copied()
    }

    /// Tag -> priority for every registered repair priority
    pub fn item_repair_priorities(&self) -> &HashMap<Identifier, f32> {
        &self.item_repair_priorities
    }

    pub fn repair_priority(&self, tag: &Identifier) -> Option<f32> {
        self.item_repair_priorities.get(tag).copied()
    }
}
