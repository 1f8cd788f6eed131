//! JobDefinition - a job parsed from content

use crate::job_item::{load_job_items, ItemRequirement};
use crate::objective::AutonomousObjective;
use crate::properties::{IdleBehavior, JobProperties};
use crate::skill::{sort_skills, SkillPrefab};
use serde::{Deserialize, Serialize};
use shared::{AttributeSource, Color, ContentError, Diagnostics, Identifier};
use std::collections::{BTreeMap, HashMap};

/// Text lookup by key, provided by the localization layer
pub trait TextLookup {
    fn get(&self, key: &str) -> Option<String>;
}

/// Texts held in a plain map, e.g. `{ "JobName.captain": "Captain" }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapTextLookup(HashMap<String, String>);

impl MapTextLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.0.insert(key.into(), text.into());
    }
}

impl FromIterator<(String, String)> for MapTextLookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TextLookup for MapTextLookup {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Sprite description handed to the sprite loader as-is
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRef {
    pub texture: String,
    pub source_rect: Option<[i32; 4]>,
}

impl SpriteRef {
    fn from_element<E: AttributeSource>(element: &E, diagnostics: &mut Diagnostics) -> Self {
        let source_rect = element.attribute("sourcerect").and_then(|raw| {
            let parts: Vec<i32> = raw
                .split(',')
                .filter_map(|p| p.trim().parse().ok())
                .collect();
            match parts.as_slice() {
                [x, y, w, h] => Some([*x, *y, *w, *h]),
                _ => {
                    diagnostics.report(ContentError::invalid_attribute(
                        element.describe(),
                        "sourcerect",
                        raw,
                        "expected x,y,width,height",
                    ));
                    None
                }
            }
        });
        Self {
            texture: element.attribute_str("texture", ""),
            source_rect,
        }
    }
}

/// A job: skills, per-variant starting items and tunables.
///
/// Built once at content load and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct JobDefinition {
    identifier: Identifier,
    properties: JobProperties,
    skills: Vec<SkillPrefab>,
    autonomous_objectives: Vec<AutonomousObjective>,
    appropriate_orders: Vec<Identifier>,
    /// Variant index -> requirements, parents before their children
    job_items: BTreeMap<usize, Box<[ItemRequirement]>>,
    variants: usize,
    icon: Option<SpriteRef>,
    icon_small: Option<SpriteRef>,
}

impl JobDefinition {
    /// Build a job from its content node.
    ///
    /// Problems inside the node are reported and skipped; only a job without
    /// an identifier yields `None`.
    pub fn from_element<E: AttributeSource>(
        element: &E,
        diagnostics: &mut Diagnostics,
    ) -> Option<Self> {
        let identifier = element.attribute_identifier("identifier");
        if identifier.is_empty() {
            diagnostics.report(ContentError::MissingIdentifier {
                context: element.describe(),
            });
            return None;
        }

        let properties = JobProperties::from_element(element, diagnostics);
        let job_context = format!("\"{}\"", identifier);

        let mut job_items: BTreeMap<usize, Vec<ItemRequirement>> = BTreeMap::new();
        let mut skills = Vec::new();
        let mut autonomous_objectives = Vec::new();
        let mut appropriate_orders = Vec::new();
        let mut icon = None;
        let mut icon_small = None;

        let mut variant = 0;
        for sub_element in element.elements() {
            match sub_element.name().to_ascii_lowercase().as_str() {
                "itemset" => {
                    let items = job_items.entry(variant).or_default();
                    load_job_items(sub_element, None, items, &job_context, diagnostics);
                    variant += 1;
                }
                "skills" => {
                    skills.extend(
                        sub_element
                            .elements()
                            .iter()
                            .filter_map(|e| SkillPrefab::from_element(e, diagnostics)),
                    );
                }
                "autonomousobjectives" => {
                    autonomous_objectives.extend(
                        sub_element
                            .elements()
                            .iter()
                            .map(|e| AutonomousObjective::from_element(e, diagnostics)),
                    );
                }
                "appropriateobjectives" | "appropriateorders" => {
                    appropriate_orders.extend(
                        sub_element
                            .elements()
                            .iter()
                            .map(|e| e.attribute_identifier("identifier")),
                    );
                }
                "jobicon" => {
                    icon = sub_element
                        .first_element()
                        .map(|e| SpriteRef::from_element(e, diagnostics));
                }
                "jobiconsmall" => {
                    icon_small = sub_element
                        .first_element()
                        .map(|e| SpriteRef::from_element(e, diagnostics));
                }
                _ => {}
            }
        }

        sort_skills(&mut skills);

        Some(Self {
            identifier,
            properties,
            skills,
            autonomous_objectives,
            appropriate_orders,
            job_items: job_items
                .into_iter()
                .map(|(k, v)| (k, v.into_boxed_slice()))
                .collect(),
            variants: variant,
            icon,
            icon_small,
        })
    }

    // ========== Items ==========

    /// Items of a variant matching `predicate`; empty for an unknown variant.
    ///
    /// Does not filter by team or game mode, see
    /// [`ItemRequirement::resolve_identifier`].
    pub fn job_items<'a, P>(
        &'a self,
        variant: usize,
        predicate: P,
    ) -> impl Iterator<Item = &'a ItemRequirement> + 'a
    where
        P: Fn(&ItemRequirement) -> bool + 'a,
    {
        self.job_items
            .get(&variant)
            .map(|items| items.iter())
            .unwrap_or_default()
            .filter(move |item| predicate(item))
    }

    /// Whether a variant has an item matching `predicate`.
    ///
    /// Does not filter by team or game mode, see
    /// [`ItemRequirement::resolve_identifier`].
    pub fn has_job_item(&self, variant: usize, predicate: impl Fn(&ItemRequirement) -> bool) -> bool {
        self.job_items
            .get(&variant)
            .is_some_and(|items| items.iter().any(predicate))
    }

    /// All requirements of a variant in document order
    pub fn variant_items(&self, variant: usize) -> &[ItemRequirement] {
        self.job_items.get(&variant).map(|i| &i[..]).unwrap_or(&[])
    }

    /// The containing entry of a nested requirement
    pub fn parent_of(&self, variant: usize, item: &ItemRequirement) -> Option<&ItemRequirement> {
        item.parent()
            .and_then(|index| self.variant_items(variant).get(index))
    }

    /// Variant indices that have an item set
    pub fn variant_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.job_items.keys().copied()
    }

    /// Number of item sets (variants) of the job
    pub fn variants(&self) -> usize {
        self.variants
    }

    // ========== Getters ==========

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Localization key of the job name
    pub fn name_key(&self) -> String {
        format!("JobName.{}", self.identifier)
    }

    /// Localization key of the job description
    pub fn description_key(&self) -> String {
        format!("JobDescription.{}", self.identifier)
    }

    /// Display name, falling back to the identifier
    pub fn display_name(&self, text: &dyn TextLookup) -> String {
        text.get(&self.name_key())
            .unwrap_or_else(|| self.identifier.to_string())
    }

    pub fn description(&self, text: &dyn TextLookup) -> String {
        text.get(&self.description_key()).unwrap_or_default()
    }

    pub fn properties(&self) -> &JobProperties {
        &self.properties
    }

    pub fn ui_color(&self) -> Color {
        self.properties.ui_color
    }

    pub fn idle_behavior(&self) -> IdleBehavior {
        self.properties.idle_behavior
    }

    pub fn price_multiplier(&self) -> f32 {
        self.properties.price_multiplier
    }

    pub fn hidden_job(&self) -> bool {
        self.properties.hidden_job
    }

    /// Skills sorted descending by the start of their level range
    pub fn skills(&self) -> &[SkillPrefab] {
        &self.skills
    }

    pub fn primary_skill(&self) -> Option<&SkillPrefab> {
        self.skills.iter().find(|s| s.is_primary_skill())
    }

    pub fn autonomous_objectives(&self) -> &[AutonomousObjective] {
        &self.autonomous_objectives
    }

    pub fn appropriate_orders(&self) -> &[Identifier] {
        &self.appropriate_orders
    }

    pub fn icon(&self) -> Option<&SpriteRef> {
        self.icon.as_ref()
    }

    pub fn icon_small(&self) -> Option<&SpriteRef> {
        self.icon_small.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_item::GameModeScope;
    use shared::{ContentElement, ValueRange};

    const CAPTAIN: &str = r#"
name: Job
attributes:
  identifier: Captain
  uicolor: "0.2,0.3,0.8,1"
  idlebehavior: StayInRoom
  maxnumber: 1
  pricemultiplier: 1.5
children:
  - name: Skills
    children:
      - name: Skill
        attributes: { identifier: medical, level: "10,20" }
      - name: Skill
        attributes: { identifier: helm, level: "50,60", primary: true }
      - name: Skill
        attributes: { identifier: weapons, level: "30,40" }
  - name: ItemSet
    children:
      - name: Item
        attributes: { identifier: captainscap, equip: true, outfit: true }
      - name: Item
        attributes: { identifier: headset, equip: true }
        children:
          - name: Item
            attributes: { identifier: batterycell }
  - name: AutonomousObjectives
    children:
      - name: Order
        attributes: { identifier: operateweapons, ignoreatoutpost: true }
  - name: Unknown
    attributes: { note: ignored }
  - name: ItemSet
    children:
      - name: Item
        attributes: { identifier: captainscap2, gamemode: pve }
  - name: AppropriateOrders
    children:
      - name: Order
        attributes: { identifier: steer }
      - name: Order
        attributes: { identifier: follow }
  - name: JobIcon
    children:
      - name: Sprite
        attributes: { texture: "Content/UI/JobIcons.png", sourcerect: "0,0,128,128" }
"#;

    fn captain() -> (JobDefinition, Diagnostics) {
        let element = ContentElement::from_yaml_str(CAPTAIN).unwrap();
        let mut diagnostics = Diagnostics::new();
        let job = JobDefinition::from_element(&element, &mut diagnostics).unwrap();
        (job, diagnostics)
    }

    #[test]
    fn test_parse_job() {
        let (job, diagnostics) = captain();

        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert_eq!(job.identifier(), &Identifier::new("captain"));
        assert_eq!(job.idle_behavior(), IdleBehavior::StayInRoom);
        assert_eq!(job.properties().max_number, 1);
        assert_eq!(job.price_multiplier(), 1.5);
        assert_eq!(job.autonomous_objectives().len(), 1);
        assert_eq!(job.appropriate_orders(), &[Identifier::new("steer"), Identifier::new("follow")]);
        assert_eq!(
            job.icon(),
            Some(&SpriteRef {
                texture: "Content/UI/JobIcons.png".to_string(),
                source_rect: Some([0, 0, 128, 128]),
            })
        );
        assert!(job.icon_small().is_none());
    }

    #[test]
    fn test_variants_follow_item_sets() {
        let (job, _) = captain();

        assert_eq!(job.variants(), 2);
        assert!(job.variant_indices().all(|v| v < job.variants()));
        assert_eq!(job.variant_items(0).len(), 3);
        assert_eq!(job.variant_items(1).len(), 1);
        assert!(job.variant_items(2).is_empty());
    }

    #[test]
    fn test_skills_sorted_by_level() {
        let (job, _) = captain();

        let order: Vec<&str> = job.skills().iter().map(|s| s.identifier().as_str()).collect();
        assert_eq!(order, vec!["helm", "weapons", "medical"]);
        assert_eq!(
            job.primary_skill().map(|s| s.level_range(false)),
            Some(ValueRange::new(50.0, 60.0))
        );
    }

    #[test]
    fn test_job_items_queries() {
        let (job, _) = captain();

        let equipped: Vec<&str> = job
            .job_items(0, |i| i.equip())
            .map(|i| i.item_identifier().as_str())
            .collect();
        assert_eq!(equipped, vec!["captainscap", "headset"]);

        let battery = job
            .job_items(0, |i| i.item_identifier() == "batterycell")
            .next()
            .unwrap();
        assert_eq!(
            job.parent_of(0, battery).map(|p| p.item_identifier().as_str()),
            Some("headset")
        );

        assert!(job.has_job_item(1, |i| i.game_mode() == GameModeScope::PvE));
        assert!(!job.has_job_item(0, |i| i.game_mode() == GameModeScope::PvE));
        assert_eq!(job.job_items(7, |_| true).count(), 0);
        assert!(!job.has_job_item(7, |_| true));
    }

    #[test]
    fn test_text_lookup() {
        let (job, _) = captain();
        let mut texts = MapTextLookup::new();
        texts.insert("JobName.captain", "Captain");

        assert_eq!(job.name_key(), "JobName.captain");
        assert_eq!(job.display_name(&texts), "Captain");
        assert_eq!(job.description(&texts), "");
    }

    #[test]
    fn test_job_without_identifier() {
        let element = ContentElement::new("Job").with_child(ContentElement::new("ItemSet"));
        let mut diagnostics = Diagnostics::new();
        assert!(JobDefinition::from_element(&element, &mut diagnostics).is_none());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_item_set_still_counts_as_variant() {
        let element = ContentElement::new("Job")
            .with_attribute("identifier", "assistant")
            .with_child(ContentElement::new("ItemSet"))
            .with_child(
                ContentElement::new("itemset").with_child(
                    ContentElement::new("Item").with_attribute("identifier", "crowbar"),
                ),
            );
        let mut diagnostics = Diagnostics::new();
        let job = JobDefinition::from_element(&element, &mut diagnostics).unwrap();

        assert_eq!(job.variants(), 2);
        assert!(job.variant_items(0).is_empty());
        assert_eq!(job.variant_items(1).len(), 1);
    }
}
