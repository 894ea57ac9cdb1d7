//! Error types for the review pipeline.
//!
//! Uses the dual-error pattern: `ReviewError` for fatal failures that halt
//! an invocation, and `Diagnostic` for absences the pipeline degrades around.

use thiserror::Error;

use crate::review::{ReviewAction, ReviewState};

/// Failure to obtain a markup payload from an archive container.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The container is not a parseable multi-part message.
    #[error("Archive container could not be parsed: {0}")]
    MimeParse(#[source] mailparse::MailParseError),

    /// The container holds no `text/html` part.
    #[error("Archive container has no text/html part")]
    NoMarkupPart,

    /// A markup part was found but its body could not be decoded.
    #[error("Failed to decode text/html part: {0}")]
    Body(#[source] mailparse::MailParseError),
}

/// Main error type for the review library.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// No decodable markup in the input. Fatal: no artifact is produced.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invalid input path or argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export requested before the reviewer confirmed.
    #[error("Export rejected while {state}: confirm the review first")]
    ExportRejected { state: ReviewState },

    /// Reviewer action not allowed from the current state.
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: ReviewAction,
        state: ReviewState,
    },

    /// Annotation edit attempted while controls are locked.
    #[error("Annotations cannot be edited while {state}")]
    NotEditable { state: ReviewState },

    /// Row index beyond the clause table.
    #[error("Row {index} does not exist (artifact has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// A re-opened artifact does not have the expected structure.
    #[error("Invalid review artifact: {0}")]
    InvalidArtifact(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for review operations.
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Non-fatal condition recorded while extracting a regulation.
///
/// The pipeline substitutes defaults and carries on; diagnostics are
/// surfaced to the caller alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// No table found; all metadata fields are empty.
    #[error("No metadata table found, metadata left empty")]
    MissingMetadataTable,

    /// The body container element is absent.
    #[error("No body container with id '{container_id}' found")]
    MissingBodyContainer { container_id: String },

    /// Segmentation produced no clauses; the artifact carries metadata only.
    #[error("No clauses found, rendering metadata only")]
    EmptyClauseSet,

    /// Marker value does not follow its predecessor (reported, not rejected).
    #[error("Marker '{marker}' at position {position} is out of sequence (expected {expected})")]
    MarkerOutOfSequence {
        marker: String,
        position: usize,
        expected: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = ReviewError::from(DecodeError::NoMarkupPart);
        assert_eq!(err.to_string(), "Archive container has no text/html part");
    }

    #[test]
    fn test_export_rejected_mentions_state() {
        let err = ReviewError::ExportRejected {
            state: ReviewState::Locked,
        };
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = ReviewError::InvalidTransition {
            action: ReviewAction::Confirm,
            state: ReviewState::Confirmed,
        };
        assert_eq!(err.to_string(), "Cannot confirm while confirmed");
    }

    #[test]
    fn test_marker_out_of_sequence_display() {
        let diag = Diagnostic::MarkerOutOfSequence {
            marker: "三".to_string(),
            position: 1,
            expected: 2,
        };
        assert_eq!(
            diag.to_string(),
            "Marker '三' at position 1 is out of sequence (expected 2)"
        );
    }
}
