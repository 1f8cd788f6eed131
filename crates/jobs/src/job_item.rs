//! ItemRequirement - items a character spawns with for a job variant
//!
//! Item sets are trees in content (an `Item` can contain `Item`s that go into
//! it), but they are stored flat: every entry of a variant lives in one `Vec`
//! in document order and a nested entry keeps the index of its parent.

use serde::{Deserialize, Serialize};
use shared::{AttributeSource, ContentError, Diagnostics, Identifier};
use std::fmt;
use std::str::FromStr;

/// Which game modes an item is given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameModeScope {
    #[default]
    Any,
    PvP,
    PvE,
}

impl GameModeScope {
    /// Whether the scope allows the item in the given mode
    pub fn allows(&self, is_pvp_mode: bool) -> bool {
        match self {
            GameModeScope::Any => true,
            GameModeScope::PvP => is_pvp_mode,
            GameModeScope::PvE => !is_pvp_mode,
        }
    }
}

impl FromStr for GameModeScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(GameModeScope::Any),
            "pvp" => Ok(GameModeScope::PvP),
            "pve" => Ok(GameModeScope::PvE),
            other => Err(format!("unknown game mode '{}' (expected Any, PvP or PvE)", other)),
        }
    }
}

impl fmt::Display for GameModeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameModeScope::Any => "Any",
            GameModeScope::PvP => "PvP",
            GameModeScope::PvE => "PvE",
        };
        write!(f, "{}", s)
    }
}

/// Team a character spawns in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterTeamType {
    #[default]
    None,
    Team1,
    Team2,
    FriendlyNpc,
}

impl FromStr for CharacterTeamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(CharacterTeamType::None),
            "team1" => Ok(CharacterTeamType::Team1),
            "team2" => Ok(CharacterTeamType::Team2),
            "friendlynpc" => Ok(CharacterTeamType::FriendlyNpc),
            other => Err(format!("unknown team '{}'", other)),
        }
    }
}

/// A single spawn/equip entry of a job variant
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequirement {
    item_identifier: Identifier,
    item_identifier_team2: Identifier,
    amount: u32,
    infinite: bool,
    equip: bool,
    outfit: bool,
    show_preview: bool,
    game_mode: GameModeScope,
    /// Index of the containing entry in the same variant list
    parent: Option<usize>,
}

impl ItemRequirement {
    /// Parse an `Item` node. `parent` is the containing entry and its index.
    pub fn from_element<E: AttributeSource>(
        element: &E,
        parent: Option<(usize, &ItemRequirement)>,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let inherited_mode = parent.map(|(_, p)| p.game_mode).unwrap_or_default();

        let amount = element.attribute_int("amount", 1, diagnostics);
        let amount = if amount < 0 {
            diagnostics.report(ContentError::invalid_attribute(
                element.describe(),
                "amount",
                amount.to_string(),
                "amount can't be negative, using 0",
            ));
            0
        } else {
            amount as u32
        };

        Self {
            item_identifier: element.attribute_identifier("identifier"),
            item_identifier_team2: element.attribute_identifier("identifierteam2"),
            amount,
            infinite: element.attribute_bool("infinite", false, diagnostics),
            equip: element.attribute_bool("equip", false, diagnostics),
            outfit: element.attribute_bool("outfit", false, diagnostics),
            show_preview: element.attribute_bool("showpreview", true, diagnostics),
            game_mode: element.attribute_parse("gamemode", inherited_mode, diagnostics),
            parent: parent.map(|(index, _)| index),
        }
    }

    /// Builder-style constructor for content assembled in code
    pub fn new(item_identifier: impl Into<Identifier>) -> Self {
        Self {
            item_identifier: item_identifier.into(),
            item_identifier_team2: Identifier::EMPTY,
            amount: 1,
            infinite: false,
            equip: false,
            outfit: false,
            show_preview: true,
            game_mode: GameModeScope::Any,
            parent: None,
        }
    }

    pub fn with_team2_identifier(mut self, identifier: impl Into<Identifier>) -> Self {
        self.item_identifier_team2 = identifier.into();
        self
    }

    pub fn with_game_mode(mut self, game_mode: GameModeScope) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Identifier to spawn for a character of `team` in the given mode.
    ///
    /// `None` when the item's game mode scope excludes the mode. Team 2 gets
    /// the alternate identifier when one is set.
    pub fn resolve_identifier(
        &self,
        team: CharacterTeamType,
        is_pvp_mode: bool,
    ) -> Option<&Identifier> {
        if !self.game_mode.allows(is_pvp_mode) {
            return None;
        }
        if team == CharacterTeamType::Team2 && !self.item_identifier_team2.is_empty() {
            Some(&self.item_identifier_team2)
        } else {
            Some(&self.item_identifier)
        }
    }

    // ========== Getters ==========

    pub fn item_identifier(&self) -> &Identifier {
        &self.item_identifier
    }

    pub fn item_identifier_team2(&self) -> &Identifier {
        &self.item_identifier_team2
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn infinite(&self) -> bool {
        self.infinite
    }

    pub fn equip(&self) -> bool {
        self.equip
    }

    pub fn outfit(&self) -> bool {
        self.outfit
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn game_mode(&self) -> GameModeScope {
        self.game_mode
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// Parse the `Item` children of `parent_element` into `items`, recursing into
/// nested items.
///
/// Rejected entries are reported and skipped; their children are still
/// visited, with no parent.
pub(crate) fn load_job_items<E: AttributeSource>(
    parent_element: &E,
    parent: Option<usize>,
    items: &mut Vec<ItemRequirement>,
    job_context: &str,
    diagnostics: &mut Diagnostics,
) {
    for item_element in parent_element.child_elements("Item") {
        let mut index = None;

        if let Some(name) = item_element.attribute("name") {
            diagnostics.report(ContentError::LegacyFieldUsed {
                context: format!("job config {}", job_context),
                field: "name".to_string(),
                value: name.to_string(),
            });
        } else if item_element.attribute_identifier("identifier").is_empty() {
            diagnostics.report(ContentError::MissingIdentifier {
                context: format!("job config {} (item)", job_context),
            });
        } else {
            let parent_item = parent.and_then(|i| items.get(i).map(|p| (i, p)));
            let item = ItemRequirement::from_element(item_element, parent_item, diagnostics);
            items.push(item);
            index = Some(items.len() - 1);
        }

        load_job_items(item_element, index, items, job_context, diagnostics);
    }
}
