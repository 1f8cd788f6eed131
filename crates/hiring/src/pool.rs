//! HireCandidatePool - candidates offered for hire at a location

use crate::character::{CandidateId, CharacterInfo};
use crate::factory::CandidateFactory;
use crate::world::{FactionPrefab, Location, NpcSetRegistry};
use jobs::JobRegistry;
use serde::{Deserialize, Serialize};
use shared::{ContentError, Diagnostics, Identifier, TemplateNotFoundError, UnsyncedRng};

/// Candidates generated per visit with the default amount
pub const MAX_AVAILABLE_CHARACTERS: usize = 6;

/// Content a pool draws from
#[derive(Clone, Copy)]
pub struct HireSources<'a> {
    pub jobs: &'a JobRegistry,
    pub npc_sets: &'a dyn NpcSetRegistry,
    pub factory: &'a CandidateFactory,
}

/// Candidates available at the current location, plus the ones picked but
/// not yet confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HireCandidatePool {
    available_characters: Vec<CharacterInfo>,
    pending_hires: Vec<CharacterInfo>,
}

impl HireCandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available_characters(&self) -> &[CharacterInfo] {
        &self.available_characters
    }

    pub fn pending_hires(&self) -> &[CharacterInfo] {
        &self.pending_hires
    }

    /// Replace the available candidates with a fresh batch for `location`.
    ///
    /// Jobs the crew is missing come first and count against `amount`, even
    /// past zero. The rest of `amount` is drawn from the location type. Each
    /// faction of the location then adds one candidate per hireable
    /// character, so the batch may exceed `amount`. Unresolvable jobs and
    /// templates are reported and skipped.
    pub fn generate_characters(
        &mut self,
        sources: &HireSources<'_>,
        location: &dyn Location,
        amount: i32,
        rng: &mut UnsyncedRng,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.remove();

        let location_type = location.location_type();
        let mut amount = amount;
        for job in location_type.hireables_missing_from_crew() {
            self.add_job_candidate(sources, &job, rng, &mut diagnostics);
            amount -= 1;
        }
        for _ in 0..amount.max(0) {
            if let Some(job) = location_type.random_hireable(rng) {
                self.add_job_candidate(sources, &job, rng, &mut diagnostics);
            }
        }

        for faction in [location.faction(), location.secondary_faction()]
            .into_iter()
            .flatten()
        {
            self.generate_faction_characters(sources, faction, rng, &mut diagnostics);
        }

        tracing::debug!(
            "Generated {} hire candidate(s), {} problem(s)",
            self.available_characters.len(),
            diagnostics.len()
        );
        diagnostics
    }

    fn add_job_candidate(
        &mut self,
        sources: &HireSources<'_>,
        job: &Identifier,
        rng: &mut UnsyncedRng,
        diagnostics: &mut Diagnostics,
    ) {
        match sources.jobs.try_get(job) {
            Ok(job) => self.available_characters.push(sources.factory.create(job, rng)),
            Err(e) => diagnostics.report(ContentError::from(e)),
        }
    }

    fn generate_faction_characters(
        &mut self,
        sources: &HireSources<'_>,
        faction: &FactionPrefab,
        rng: &mut UnsyncedRng,
        diagnostics: &mut Diagnostics,
    ) {
        for hireable in &faction.hireable_characters {
            let Some(template) = sources.npc_sets.get(&hireable.npc_set, &hireable.npc) else {
                diagnostics.report(ContentError::from(TemplateNotFoundError {
                    set_id: hireable.npc_set.to_string(),
                    npc_id: hireable.npc.to_string(),
                }));
                continue;
            };

            if let Some(mut info) =
                sources
                    .factory
                    .create_from_template(template, sources.jobs, rng, diagnostics)
            {
                info.set_min_reputation_to_hire(faction.identifier.clone(), hireable.min_reputation);
                self.available_characters.push(info);
            }
        }
    }

    /// Remove one available candidate
    pub fn remove_character(&mut self, id: CandidateId) -> Option<CharacterInfo> {
        let index = self.available_characters.iter().position(|c| c.id() == id)?;
        Some(self.available_characters.remove(index))
    }

    /// Clear all available candidates
    pub fn remove(&mut self) {
        self.available_characters.clear();
    }

    /// Rename a candidate in either list. Unknown ids and empty names are
    /// ignored.
    pub fn rename_character(&mut self, id: CandidateId, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut renamed = false;
        for info in self
            .available_characters
            .iter_mut()
            .chain(self.pending_hires.iter_mut())
            .filter(|c| c.id() == id)
        {
            info.rename(name);
            renamed = true;
        }
        renamed
    }

    // ========== Pending hires ==========

    /// Move an available candidate to the pending hires
    pub fn add_pending_hire(&mut self, id: CandidateId) -> bool {
        match self.remove_character(id) {
            Some(info) => {
                self.pending_hires.push(info);
                true
            }
            None => false,
        }
    }

    /// Move a pending hire back to the available candidates
    pub fn remove_pending_hire(&mut self, id: CandidateId) -> bool {
        match self.pending_hires.iter().position(|c| c.id() == id) {
            Some(index) => {
                let info = self.pending_hires.remove(index);
                self.available_characters.push(info);
                true
            }
            None => false,
        }
    }

    /// Return every pending hire to the available candidates
    pub fn clear_pending_hires(&mut self) {
        self.available_characters.append(&mut self.pending_hires);
    }

    /// Confirm the pending hires, handing them to the caller
    pub fn take_pending_hires(&mut self) -> Vec<CharacterInfo> {
        std::mem::take(&mut self.pending_hires)
    }
}
