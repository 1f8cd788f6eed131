//! AutonomousObjective - tasks a character of the job does on its own

use shared::{AttributeSource, Diagnostics, Identifier};

#[derive(Debug, Clone, PartialEq)]
pub struct AutonomousObjective {
    pub identifier: Identifier,
    pub option: Identifier,
    pub priority_modifier: f32,
    /// Ignored in outpost levels. Doesn't apply to outpost NPCs.
    pub ignore_at_outpost: bool,
    /// Ignored in regular (non-outpost) levels
    pub ignore_at_non_outpost: bool,
}

impl AutonomousObjective {
    pub fn from_element<E: AttributeSource>(element: &E, diagnostics: &mut Diagnostics) -> Self {
        let mut identifier = element.attribute_identifier("identifier");
        if identifier.is_empty() {
            // older content names the objective with "aitag"
            identifier = element.attribute_identifier("aitag");
        }

        Self {
            identifier,
            option: element.attribute_identifier("option"),
            priority_modifier: element
                .attribute_float("prioritymodifier", 1.0, diagnostics)
                .max(0.0),
            ignore_at_outpost: element.attribute_bool("ignoreatoutpost", false, diagnostics),
            ignore_at_non_outpost: element.attribute_bool("ignoreatnonoutpost", false, diagnostics),
        }
    }

    /// Whether the objective applies in the current level type
    pub fn applies(&self, at_outpost: bool) -> bool {
        if at_outpost {
            !self.ignore_at_outpost
        } else {
            !self.ignore_at_non_outpost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ContentElement;

    #[test]
    fn test_parse_objective() {
        let element = ContentElement::new("Order")
            .with_attribute("identifier", "fixleaks")
            .with_attribute("option", "nearest")
            .with_attribute("prioritymodifier", 2.5)
            .with_attribute("ignoreatoutpost", true);
        let mut diagnostics = Diagnostics::new();
        let objective = AutonomousObjective::from_element(&element, &mut diagnostics);

        assert_eq!(objective.identifier, "fixleaks");
        assert_eq!(objective.option, "nearest");
        assert_eq!(objective.priority_modifier, 2.5);
        assert!(!objective.applies(true));
        assert!(objective.applies(false));
    }

    #[test]
    fn test_aitag_fallback_and_clamp() {
        let element = ContentElement::new("Order")
            .with_attribute("aitag", "operatereactor")
            .with_attribute("prioritymodifier", -4);
        let mut diagnostics = Diagnostics::new();
        let objective = AutonomousObjective::from_element(&element, &mut diagnostics);

        assert_eq!(objective.identifier, "operatereactor");
        assert_eq!(objective.priority_modifier, 0.0);
        assert!(objective.option.is_empty());
    }

    #[test]
    fn test_default_priority() {
        let element = ContentElement::new("Order").with_attribute("identifier", "cleanupitems");
        let mut diagnostics = Diagnostics::new();
        let objective = AutonomousObjective::from_element(&element, &mut diagnostics);
        assert_eq!(objective.priority_modifier, 1.0);
        assert!(objective.applies(true) && objective.applies(false));
    }
}
