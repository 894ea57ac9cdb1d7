//! Clause segmentation for regulation bodies.
//!
//! The body text is scanned for enumerator markers (numeral words followed by
//! `、`, e.g. "十一、"). Each marker opens a clause that runs until the next
//! marker or the end of the text.

mod engine;
mod marker;
mod types;

pub use engine::{segment_clauses, segment_document};
pub use marker::{numeral_value, scan_markers, MarkerToken};
pub use types::{SegmentOptions, SequencePolicy};
