//! Item repair priorities - how urgently bots fix items carrying a tag

use shared::{AttributeSource, ContentError, Diagnostics, Identifier};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRepairPriority {
    pub tag: Identifier,
    pub priority: f32,
}

impl ItemRepairPriority {
    /// Parse an entry of an `ItemRepairPriorities` block.
    ///
    /// A missing or negative priority is reported but the entry is kept with
    /// its value (`-1` when missing). An entry without a tag is dropped.
    pub fn from_element<E: AttributeSource>(
        element: &E,
        diagnostics: &mut Diagnostics,
    ) -> Option<Self> {
        let tag = element.attribute_identifier("tag");
        if tag.is_empty() {
            diagnostics.report(ContentError::MissingIdentifier {
                context: format!("{} (item repair priority)", element.name()),
            });
            return None;
        }

        let priority = element.attribute_float("priority", -1.0, diagnostics);
        if priority < 0.0 {
            let reason = if element.has_attribute("priority") {
                format!("negative ({})", priority)
            } else {
                "missing".to_string()
            };
            diagnostics.report(ContentError::InvalidPriority {
                tag: tag.to_string(),
                reason,
            });
        }

        Some(Self { tag, priority })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ContentElement;

    #[test]
    fn test_parse_priority() {
        let element = ContentElement::new("Item")
            .with_attribute("tag", "reactor")
            .with_attribute("priority", 3);
        let mut diagnostics = Diagnostics::new();
        let priority = ItemRepairPriority::from_element(&element, &mut diagnostics).unwrap();

        assert_eq!(priority.tag, "reactor");
        assert_eq!(priority.priority, 3.0);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_priority_is_reported_but_kept() {
        let element = ContentElement::new("Item").with_attribute("tag", "pump");
        let mut diagnostics = Diagnostics::new();
        let priority = ItemRepairPriority::from_element(&element, &mut diagnostics).unwrap();

        assert_eq!(priority.priority, -1.0);
        assert_eq!(
            diagnostics.count(|e| matches!(e, ContentError::InvalidPriority { .. })),
            1
        );
    }

    #[test]
    fn test_missing_tag_is_dropped() {
        let element = ContentElement::new("Item").with_attribute("priority", 1);
        let mut diagnostics = Diagnostics::new();
        assert!(ItemRepairPriority::from_element(&element, &mut diagnostics).is_none());
    }
}
