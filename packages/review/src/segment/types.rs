//! Options for clause segmentation.

use crate::config::{BODY_CONTAINER_ID, MIN_CLAUSE_CHARS};

/// How marker values are checked against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequencePolicy {
    /// Markers split the text by position only; values are never compared.
    #[default]
    Positional,

    /// Same clauses as `Positional`, plus a diagnostic for every marker whose
    /// value does not follow its predecessor.
    Reported,
}

/// Segmentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// `id` of the `div` holding the regulation body.
    pub container_id: String,

    /// Spans with fewer characters than this are discarded.
    pub min_chars: usize,

    pub policy: SequencePolicy,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            container_id: BODY_CONTAINER_ID.to_string(),
            min_chars: MIN_CLAUSE_CHARS,
            policy: SequencePolicy::default(),
        }
    }
}

impl SegmentOptions {
    /// Use a different body container id.
    #[must_use]
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    /// Use a different minimum clause length.
    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Use a different sequence policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SequencePolicy) -> Self {
        self.policy = policy;
        self
    }
}
