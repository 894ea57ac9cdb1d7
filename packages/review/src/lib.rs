//! RegelRecht Review - Turn archived regulation pages into clause review documents.
//!
//! This crate reads a regulation page saved as MHTML from law.moea.gov.tw,
//! extracts its metadata table and enumerated clauses, and renders a
//! self-contained HTML artifact in which a reviewer records per clause
//! whether it is a definitions clause, whether it applies, whether it is
//! complied with, and a free-text note.
//!
//! # Example
//!
//! ```
//! use regelrecht_review::segment::{segment_clauses, SegmentOptions};
//!
//! let (clauses, _) = segment_clauses(
//!     "一、本要點依電業法第一條規定訂定。二、本要點自發布日施行。",
//!     &SegmentOptions::default(),
//! );
//! assert_eq!(clauses.len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`mhtml`]: archive container decoding
//! - [`html`]: markup utilities
//! - [`metadata`]: metadata table extraction
//! - [`segment`]: clause segmentation
//! - [`artifact`]: artifact rendering and re-reading
//! - [`review`]: reviewer session state machine
//! - [`output`]: saving and YAML summaries
//! - [`pipeline`]: decode, extract, segment, render
//! - [`config`]: constants and validation
//! - [`types`]: core data types
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod artifact;
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod metadata;
pub mod mhtml;
pub mod output;
pub mod pipeline;
pub mod review;
pub mod segment;
pub mod types;

// Re-export main functions
pub use pipeline::{convert, parse_regulation, Conversion};

// Re-export commonly used items
pub use artifact::{Artifact, ArtifactDocument};
pub use error::{DecodeError, Diagnostic, Result, ReviewError};
pub use review::{ReviewAction, ReviewSession, ReviewState};
pub use types::{Annotation, Clause, Regulation, RegulationMetadata};
