//! The review artifact: a self-contained HTML document with one annotatable
//! row per clause.
//!
//! The artifact is its own state container. Reviewer annotations persist in
//! plain element attributes (`data-selected` on selectors, `data-content` on
//! the note), so an exported artifact can be reopened and read back with
//! [`read_artifact`].

mod assets;
mod reader;
mod render;

use serde::Serialize;

use crate::config::artifact_file_name;
use crate::types::{Annotation, Clause, Regulation, RegulationMetadata};

pub use reader::read_artifact;
pub use render::render_artifact;

/// One clause row of the artifact with its persisted annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRow {
    pub clause: Clause,
    pub annotation: Annotation,
}

/// Content of a review artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactDocument {
    pub metadata: RegulationMetadata,
    pub rows: Vec<ArtifactRow>,
}

impl ArtifactDocument {
    /// Fresh document for a regulation: every row carries default annotations.
    #[must_use]
    pub fn from_regulation(regulation: &Regulation) -> Self {
        Self {
            metadata: regulation.metadata.clone(),
            rows: regulation
                .clauses
                .iter()
                .map(|clause| ArtifactRow {
                    clause: clause.clone(),
                    annotation: Annotation::default(),
                })
                .collect(),
        }
    }

    /// Suggested download name, derived from the title.
    #[must_use]
    pub fn file_name(&self) -> String {
        artifact_file_name(&self.metadata.title)
    }
}

/// A rendered artifact ready to be saved or offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub html: String,
}

impl Artifact {
    /// Render a document.
    #[must_use]
    pub fn render(document: &ArtifactDocument) -> Self {
        Self {
            file_name: document.file_name(),
            html: render_artifact(document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Definitional;

    #[test]
    fn test_from_regulation_uses_default_annotations() {
        let regulation = Regulation {
            metadata: RegulationMetadata {
                title: "測試法".to_string(),
                ..RegulationMetadata::default()
            },
            clauses: vec![Clause::new("一、第一條內容一二三四五六七八九十。")],
            diagnostics: Vec::new(),
        };

        let document = ArtifactDocument::from_regulation(&regulation);
        assert_eq!(document.rows.len(), 1);
        assert_eq!(document.rows[0].annotation.definitional, Definitional::No);
        assert_eq!(document.file_name(), "測試法.html");
    }
}
