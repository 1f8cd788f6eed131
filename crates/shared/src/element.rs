//! Attribute-bearing content trees
//!
//! Job content is handed to the parsers as a generic tree of named nodes with
//! string attributes. [`AttributeSource`] is the reader interface the parsers
//! depend on; [`ContentElement`] is the concrete tree deserialized from YAML or
//! JSON content files.

use crate::error::{ContentError, Diagnostics};
use crate::identifier::Identifier;
use crate::values::{Color, ValueRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Reader over one node of a content tree.
///
/// Typed readers never fail: a missing attribute yields the supplied default,
/// an unparsable one is reported into the diagnostics and also yields the
/// default.
pub trait AttributeSource: Sized {
    /// Tag name of this node
    fn name(&self) -> &str;

    /// Raw attribute value, keys match case-insensitively
    fn attribute(&self, key: &str) -> Option<&str>;

    /// Child nodes in document order
    fn elements(&self) -> &[Self];

    fn has_attribute(&self, key: &str) -> bool {
        self.attribute(key).is_some()
    }

    fn name_is(&self, tag: &str) -> bool {
        self.name().eq_ignore_ascii_case(tag)
    }

    /// Children with the given tag (case-insensitive)
    fn child_elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.elements().iter().filter(move |e| e.name_is(tag))
    }

    fn first_element(&self) -> Option<&Self> {
        self.elements().first()
    }

    /// Human-readable location used in diagnostics, e.g. `Job 'captain'`
    fn describe(&self) -> String {
        match self.attribute("identifier").filter(|id| !id.trim().is_empty()) {
            Some(id) => format!("{} '{}'", self.name(), id.trim()),
            None => self.name().to_string(),
        }
    }

    fn attribute_str(&self, key: &str, default: &str) -> String {
        self.attribute(key).unwrap_or(default).to_string()
    }

    fn attribute_identifier(&self, key: &str) -> Identifier {
        self.attribute(key).map(Identifier::new).unwrap_or_default()
    }

    /// Parse an attribute with `FromStr`, reporting failures
    fn attribute_parse<T>(&self, key: &str, default: T, diagnostics: &mut Diagnostics) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.attribute(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(value) => value,
                Err(e) => {
                    diagnostics.report(ContentError::invalid_attribute(
                        self.describe(),
                        key,
                        raw,
                        e.to_string(),
                    ));
                    default
                }
            },
        }
    }

    fn attribute_bool(&self, key: &str, default: bool, diagnostics: &mut Diagnostics) -> bool {
        match self.attribute(key).map(|v| v.trim().to_ascii_lowercase()) {
            None => default,
            Some(v) if v == "true" => true,
            Some(v) if v == "false" => false,
            Some(v) => {
                diagnostics.report(ContentError::invalid_attribute(
                    self.describe(),
                    key,
                    v,
                    "expected true or false",
                ));
                default
            }
        }
    }

    /// Integers written as whole floats (`"2.0"`) are accepted
    fn attribute_int(&self, key: &str, default: i32, diagnostics: &mut Diagnostics) -> i32 {
        let Some(raw) = self.attribute(key) else {
            return default;
        };
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<i32>() {
            return value;
        }
        match raw.parse::<f32>() {
            Ok(value) if value.fract() == 0.0 => value as i32,
            _ => {
                diagnostics.report(ContentError::invalid_attribute(
                    self.describe(),
                    key,
                    raw,
                    "expected an integer",
                ));
                default
            }
        }
    }

    fn attribute_float(&self, key: &str, default: f32, diagnostics: &mut Diagnostics) -> f32 {
        let value = self.attribute_parse(key, default, diagnostics);
        if value.is_finite() {
            return value;
        }
        diagnostics.report(ContentError::invalid_attribute(
            self.describe(),
            key,
            self.attribute(key).unwrap_or_default(),
            "expected a finite number",
        ));
        default
    }

    fn attribute_range(
        &self,
        key: &str,
        default: ValueRange,
        diagnostics: &mut Diagnostics,
    ) -> ValueRange {
        self.attribute_parse(key, default, diagnostics)
    }

    fn attribute_color(&self, key: &str, default: Color, diagnostics: &mut Diagnostics) -> Color {
        self.attribute_parse(key, default, diagnostics)
    }
}

/// Concrete content tree node.
///
/// Serialized as `{ name, attributes, children }`. Attribute keys are
/// lower-cased on load and scalar values of any type are stored as strings;
/// lists are joined with commas so `level: [30, 50]` reads as `"30,50"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement")]
pub struct ContentElement {
    name: String,
    attributes: BTreeMap<String, String>,
    children: Vec<ContentElement>,
}

#[derive(Deserialize)]
struct RawElement {
    name: String,
    #[serde(default)]
    attributes: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    children: Vec<ContentElement>,
}

impl From<RawElement> for ContentElement {
    fn from(raw: RawElement) -> Self {
        let attributes = raw
            .attributes
            .into_iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.to_lowercase(), v)))
            .collect();
        Self {
            name: raw.name,
            attributes,
            children: raw.children,
        }
    }
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

impl ContentElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: set an attribute
    pub fn with_attribute(mut self, key: impl AsRef<str>, value: impl ToString) -> Self {
        self.attributes
            .insert(key.as_ref().to_lowercase(), value.to_string());
        self
    }

    /// Builder: append a child node
    pub fn with_child(mut self, child: ContentElement) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append several child nodes
    pub fn with_children(mut self, children: impl IntoIterator<Item = ContentElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn from_yaml_str(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl AttributeSource for ContentElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        match self.attributes.get(key) {
            Some(value) => Some(value.as_str()),
            None => self
                .attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str()),
        }
    }

    fn elements(&self) -> &[Self] {
        &self.children
    }
}
