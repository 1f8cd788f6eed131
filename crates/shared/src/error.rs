//! Error types for Bosun content

use thiserror::Error;

/// Error raised when a job identifier cannot be resolved
#[derive(Debug, Error)]
#[error("Job '{job_id}' not found. Available jobs: {}", available_jobs.join(", "))]
pub struct JobNotFoundError {
    pub job_id: String,
    pub available_jobs: Vec<String>,
}

/// Error raised when an NPC template cannot be resolved from its set
#[derive(Debug, Error)]
#[error("Character template '{npc_id}' not found in the NPC set '{set_id}'")]
pub struct TemplateNotFoundError {
    pub set_id: String,
    pub npc_id: String,
}

/// Everything that can go wrong while reading job content or building a hire pool.
///
/// Parse-time variants are recoverable: they are reported through
/// [`Diagnostics`] and the offending entry is skipped. Only the load-level
/// variants (`Io`, `Yaml`, `Json`, `Pattern`) are ever returned as `Err`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Error in {context}: entry with no identifier")]
    MissingIdentifier { context: String },

    #[error("Error in {context}: use identifiers instead of names to configure the items (found {field} = '{value}')")]
    LegacyFieldUsed {
        context: String,
        field: String,
        value: String,
    },

    #[error(transparent)]
    JobNotFound(#[from] JobNotFoundError),

    #[error(transparent)]
    TemplateNotFound(#[from] TemplateNotFoundError),

    #[error("The 'priority' attribute of the item repair priority '{tag}' is {reason}")]
    InvalidPriority { tag: String, reason: String },

    #[error("Invalid value '{value}' for attribute '{attribute}' in {context}: {reason}")]
    InvalidAttribute {
        context: String,
        attribute: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl ContentError {
    /// Shorthand for an attribute that failed to parse
    pub fn invalid_attribute(
        context: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            context: context.into(),
            attribute: attribute.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that describe a dangling reference rather than bad content
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self, Self::JobNotFound(_) | Self::TemplateNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// Collector for recovered content problems.
///
/// Every reported error is also emitted as a `tracing` warning, so callers that
/// only care about logs can drop the collector.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<ContentError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and record a recovered error
    pub fn report(&mut self, error: ContentError) {
        tracing::warn!("{}", error);
        self.entries.push(error);
    }

    pub fn entries(&self) -> &[ContentError] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded errors matching a predicate
    pub fn count(&self, predicate: impl Fn(&ContentError) -> bool) -> usize {
        self.entries.iter().filter(|&e| predicate(e)).count()
    }

    /// Move all entries of another collector into this one
    pub fn absorb(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn into_entries(self) -> Vec<ContentError> {
        self.entries
    }
}
