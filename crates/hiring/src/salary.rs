//! SalaryCalculator - what a candidate costs given the current crew

use crate::character::CharacterInfo;
use crate::crew::{CharacterType, CrewRoster, StatType};
use shared::Identifier;

pub struct SalaryCalculator<'a> {
    crew: &'a dyn CrewRoster,
}

impl<'a> SalaryCalculator<'a> {
    pub fn new(crew: &'a dyn CrewRoster) -> Self {
        Self { crew }
    }

    /// Sum of the live and reserve crew's hire cost multipliers for `job`
    pub fn hire_cost_multiplier(&self, job: &Identifier) -> f32 {
        self.crew
            .session_crew_characters(CharacterType::Both)
            .into_iter()
            .map(|member| {
                member
                    .saved_stat_value_with_all(StatType::HireCostMultiplier, job)
                    .unwrap_or(0.0)
            })
            .sum()
    }

    /// Salary of one candidate. Discounts never go below free.
    pub fn salary_for(&self, hire: &CharacterInfo) -> u32 {
        let no_job = Identifier::EMPTY;
        let job = hire.job_identifier().unwrap_or(&no_job);
        let multiplier = 1.0 + self.hire_cost_multiplier(job).max(-1.0);
        (hire.salary() as f32 * multiplier).floor() as u32
    }

    /// Combined salary of several candidates
    pub fn salary_for_all<'h>(&self, hires: impl IntoIterator<Item = &'h CharacterInfo>) -> u32 {
        hires.into_iter().map(|hire| self.salary_for(hire)).sum()
    }
}
