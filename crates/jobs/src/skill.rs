//! Skill entries of a job

use shared::{AttributeSource, ContentError, Diagnostics, Identifier, ValueRange};

/// Salary contribution per skill level when a skill doesn't set its own
pub const DEFAULT_SKILL_PRICE_MULTIPLIER: f32 = 10.0;

/// A skill a job starts with, and the level range new characters roll in
#[derive(Debug, Clone, PartialEq)]
pub struct SkillPrefab {
    identifier: Identifier,
    level_range: ValueRange,
    level_range_pvp: ValueRange,
    is_primary_skill: bool,
    price_multiplier: f32,
}

impl SkillPrefab {
    /// Parse a skill node. Returns `None` (after reporting) when the node has
    /// no identifier.
    pub fn from_element<E: AttributeSource>(
        element: &E,
        diagnostics: &mut Diagnostics,
    ) -> Option<Self> {
        let identifier = element.attribute_identifier("identifier");
        if identifier.is_empty() {
            diagnostics.report(ContentError::MissingIdentifier {
                context: format!("{} (skill)", element.describe()),
            });
            return None;
        }

        let level_range = read_range(element, "level", ValueRange::default(), diagnostics);
        let level_range_pvp = read_range(element, "pvplevel", level_range, diagnostics);

        Some(Self {
            identifier,
            level_range,
            level_range_pvp,
            is_primary_skill: element.attribute_bool("primary", false, diagnostics),
            price_multiplier: element
                .attribute_float(
                    "pricemultiplier",
                    DEFAULT_SKILL_PRICE_MULTIPLIER,
                    diagnostics,
                )
                .max(0.0),
        })
    }

    pub fn new(identifier: impl Into<Identifier>, level_range: ValueRange) -> Self {
        let level_range = level_range.normalized();
        Self {
            identifier: identifier.into(),
            level_range,
            level_range_pvp: level_range,
            is_primary_skill: false,
            price_multiplier: DEFAULT_SKILL_PRICE_MULTIPLIER,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary_skill = true;
        self
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Level range new characters roll in
    pub fn level_range(&self, is_pvp: bool) -> ValueRange {
        if is_pvp {
            self.level_range_pvp
        } else {
            self.level_range
        }
    }

    pub fn is_primary_skill(&self) -> bool {
        self.is_primary_skill
    }

    pub fn price_multiplier(&self) -> f32 {
        self.price_multiplier
    }
}

fn read_range<E: AttributeSource>(
    element: &E,
    key: &str,
    default: ValueRange,
    diagnostics: &mut Diagnostics,
) -> ValueRange {
    let range = element.attribute_range(key, default, diagnostics);
    if range.is_inverted() {
        diagnostics.report(ContentError::invalid_attribute(
            element.describe(),
            key,
            range.to_string(),
            "minimum is above maximum, swapping",
        ));
    }
    range.normalized()
}

/// Sort skills descending by the start of their non-PvP level range.
///
/// Stable, so skills with equal starts keep their content order.
pub fn sort_skills(skills: &mut [SkillPrefab]) {
    skills.sort_by(|x, y| {
        y.level_range(false)
            .start
            .total_cmp(&x.level_range(false).start)
    });
}
