//! Segmentation of body text into clauses.

use scraper::Html;

use super::marker::{scan_markers, MarkerToken};
use super::types::{SegmentOptions, SequencePolicy};
use crate::error::Diagnostic;
use crate::html::{find_by_id, stripped_text};
use crate::types::Clause;

/// Segment the body container of a regulation page into clauses.
///
/// The container's visible text is joined with newlines so paragraph
/// boundaries survive. A missing container yields no clauses, reported
/// through diagnostics rather than an error.
pub fn segment_document(doc: &Html, options: &SegmentOptions) -> (Vec<Clause>, Vec<Diagnostic>) {
    let Some(container) = find_by_id(doc, "div", &options.container_id) else {
        tracing::warn!(container_id = %options.container_id, "Body container not found");
        return (
            Vec::new(),
            vec![
                Diagnostic::MissingBodyContainer {
                    container_id: options.container_id.clone(),
                },
                Diagnostic::EmptyClauseSet,
            ],
        );
    };

    let text = stripped_text(container, "\n");
    segment_clauses(&text, options)
}

/// Split text into clauses at enumerator markers.
///
/// A clause spans from its marker to the next marker (or the end of the
/// text), trimmed. Text before the first marker is not part of any clause.
/// Spans shorter than `options.min_chars` characters are dropped. Marker
/// values never influence the split; see [`SequencePolicy`].
///
/// # Examples
/// ```
/// use regelrecht_review::segment::{segment_clauses, SegmentOptions};
///
/// let (clauses, _) = segment_clauses(
///     "一、第一條內容一二三四五六七八九十。二、第二條內容一二三四五六七八九十。",
///     &SegmentOptions::default(),
/// );
/// assert_eq!(clauses.len(), 2);
/// assert_eq!(clauses[1].text, "二、第二條內容一二三四五六七八九十。");
/// ```
pub fn segment_clauses(text: &str, options: &SegmentOptions) -> (Vec<Clause>, Vec<Diagnostic>) {
    let markers = scan_markers(text);
    tracing::debug!(markers = markers.len(), "Scanned body text");

    let mut diagnostics = match options.policy {
        SequencePolicy::Positional => Vec::new(),
        SequencePolicy::Reported => check_sequence(&markers),
    };

    let mut clauses = Vec::new();
    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        let span = text[marker.start..end].trim();

        if span.chars().count() < options.min_chars {
            tracing::debug!(marker = %marker.numeral, span, "Discarding short span");
            continue;
        }
        clauses.push(Clause::new(span));
    }

    if clauses.is_empty() {
        tracing::warn!("No clauses found in body text");
        diagnostics.push(Diagnostic::EmptyClauseSet);
    } else {
        tracing::info!(clauses = clauses.len(), "Segmented body text");
    }

    (clauses, diagnostics)
}

/// Report markers whose value is not one more than the previous marker's.
fn check_sequence(markers: &[MarkerToken]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut previous: Option<u32> = None;

    for (position, marker) in markers.iter().enumerate() {
        let Some(value) = marker.value else {
            continue;
        };
        let expected = previous.map_or(1, |p| p.saturating_add(1));
        if value != expected {
            diagnostics.push(Diagnostic::MarkerOutOfSequence {
                marker: marker.numeral.clone(),
                position,
                expected,
            });
        }
        previous = Some(value);
    }

    diagnostics
}
