//! Review session state machine.
//!
//! Models the viewer-side behaviour of an artifact so it can be driven and
//! tested outside a browser. The embedded script implements the same
//! transitions.
//!
//! ```text
//!            update               confirm
//! Locked ──────────▶ Editing ──────────────▶ Confirmed ──▶ export
//!   │                  ▲  │ (edits)               │
//!   │                  │  └──┘                    │
//!   │                  └──────── update ──────────┘
//!   └──────────────────── confirm ──────────────────▶ Confirmed
//! ```
//!
//! Any other transition is rejected. Controls are editable only in
//! `Editing`. Confirm copies every live value into its persisted attribute;
//! export is accepted only in `Confirmed`.

use serde::Serialize;

use crate::artifact::{read_artifact, Artifact, ArtifactDocument, ArtifactRow};
use crate::error::{ReviewError, Result};
use crate::types::{Annotation, Clause, RegulationMetadata};

/// State of a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReviewState {
    /// Controls disabled, nothing confirmed since opening.
    Locked,
    /// Controls enabled.
    Editing,
    /// Controls disabled, live values persisted. Export is allowed.
    Confirmed,
}

impl ReviewState {
    /// Whether annotation controls accept edits.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Editing)
    }

    /// Whether the artifact may be exported.
    pub fn can_export(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Locked => "locked",
            Self::Editing => "editing",
            Self::Confirmed => "confirmed",
        };
        f.write_str(s)
    }
}

/// Reviewer action that moves a session between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReviewAction {
    /// Unlock the controls.
    Update,
    /// Persist live values and lock the controls.
    Confirm,
}

impl ReviewAction {
    /// States the action may be taken from.
    #[must_use]
    pub fn sources(&self) -> &'static [ReviewState] {
        match self {
            Self::Update => &[ReviewState::Locked, ReviewState::Confirmed],
            Self::Confirm => &[ReviewState::Locked, ReviewState::Editing],
        }
    }

    /// State the action leads to.
    #[must_use]
    pub fn target(&self) -> ReviewState {
        match self {
            Self::Update => ReviewState::Editing,
            Self::Confirm => ReviewState::Confirmed,
        }
    }
}

impl std::fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Update => "update",
            Self::Confirm => "confirm",
        };
        f.write_str(s)
    }
}

/// A clause row with its live (control) and persisted (attribute) values.
#[derive(Debug, Clone)]
struct SessionRow {
    clause: Clause,
    live: Annotation,
    persisted: Annotation,
}

/// An opened artifact being reviewed.
///
/// State is held per session; two sessions never share it.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    metadata: RegulationMetadata,
    rows: Vec<SessionRow>,
    state: ReviewState,
}

impl ReviewSession {
    /// Open a document. Persisted values are copied into the live controls.
    #[must_use]
    pub fn open(document: ArtifactDocument) -> Self {
        let rows = document
            .rows
            .into_iter()
            .map(|row| SessionRow {
                clause: row.clause,
                live: row.annotation.clone(),
                persisted: row.annotation,
            })
            .collect();

        Self {
            metadata: document.metadata,
            rows,
            state: ReviewState::Locked,
        }
    }

    /// Open a saved artifact.
    pub fn from_html(markup: &str) -> Result<Self> {
        Ok(Self::open(read_artifact(markup)?))
    }

    #[must_use]
    pub fn state(&self) -> ReviewState {
        self.state
    }

    #[must_use]
    pub fn metadata(&self) -> &RegulationMetadata {
        &self.metadata
    }

    /// Number of clause rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Live annotation of a row.
    #[must_use]
    pub fn annotation(&self, index: usize) -> Option<&Annotation> {
        self.rows.get(index).map(|row| &row.live)
    }

    /// Persisted annotation of a row.
    #[must_use]
    pub fn persisted(&self, index: usize) -> Option<&Annotation> {
        self.rows.get(index).map(|row| &row.persisted)
    }

    /// Unlock the controls.
    ///
    /// # Errors
    /// `InvalidTransition` when already `Editing`.
    pub fn update(&mut self) -> Result<()> {
        self.transition(ReviewAction::Update)
    }

    /// Mutable access to a row's live annotation.
    ///
    /// # Errors
    /// `NotEditable` outside `Editing`, `RowOutOfRange` for a bad index.
    pub fn annotation_mut(&mut self, index: usize) -> Result<&mut Annotation> {
        if !self.state.is_editable() {
            return Err(ReviewError::NotEditable { state: self.state });
        }
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .map(|row| &mut row.live)
            .ok_or(ReviewError::RowOutOfRange { index, len })
    }

    /// Replace a row's live annotation.
    pub fn edit(&mut self, index: usize, annotation: Annotation) -> Result<()> {
        *self.annotation_mut(index)? = annotation;
        Ok(())
    }

    /// Persist every live value and lock the controls.
    ///
    /// # Errors
    /// `InvalidTransition` when already `Confirmed`.
    pub fn confirm(&mut self) -> Result<()> {
        self.transition(ReviewAction::Confirm)?;
        for row in &mut self.rows {
            row.persisted = row.live.clone();
        }
        Ok(())
    }

    /// Serialize the persisted state as a new artifact.
    ///
    /// # Errors
    /// `ExportRejected` unless the session is `Confirmed`.
    pub fn export(&self) -> Result<Artifact> {
        if !self.state.can_export() {
            tracing::warn!(state = %self.state, "Export rejected, review not confirmed");
            return Err(ReviewError::ExportRejected { state: self.state });
        }
        Ok(Artifact::render(&self.document()))
    }

    /// The document as it would be persisted now.
    #[must_use]
    pub fn document(&self) -> ArtifactDocument {
        ArtifactDocument {
            metadata: self.metadata.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| ArtifactRow {
                    clause: row.clause.clone(),
                    annotation: row.persisted.clone(),
                })
                .collect(),
        }
    }

    fn transition(&mut self, action: ReviewAction) -> Result<()> {
        if !action.sources().contains(&self.state) {
            return Err(ReviewError::InvalidTransition {
                action,
                state: self.state,
            });
        }
        let to = action.target();
        tracing::debug!(from = %self.state, %to, %action, "Review state transition");
        self.state = to;
        Ok(())
    }
}
