//! Regulation metadata extraction from the page header table.

use scraper::Html;

use crate::error::Diagnostic;
use crate::html::{selector, stripped_text};
use crate::types::{MetadataField, RegulationMetadata};

/// Extract metadata from the first table of a regulation page.
///
/// Each row with both a header (`th`) and a data (`td`) cell is matched
/// against the recognized field labels by substring containment, so a label
/// carrying extra punctuation or annotations still matches. Later rows
/// overwrite earlier ones for the same field; unrecognized rows are ignored.
///
/// Returns `(metadata, diagnostics)`. A missing table is not an error: all
/// fields stay empty and `Diagnostic::MissingMetadataTable` is reported.
pub fn extract_metadata(doc: &Html) -> (RegulationMetadata, Vec<Diagnostic>) {
    let mut metadata = RegulationMetadata::default();

    let Some(table) = doc.select(&selector("table")).next() else {
        tracing::warn!("No metadata table found");
        return (metadata, vec![Diagnostic::MissingMetadataTable]);
    };

    let th = selector("th");
    let td = selector("td");

    for row in table.select(&selector("tr")) {
        let (Some(label_cell), Some(value_cell)) = (row.select(&th).next(), row.select(&td).next())
        else {
            continue;
        };

        let label = stripped_text(label_cell, "");
        let value = stripped_text(value_cell, "");

        for field in MetadataField::ALL {
            if label.contains(field.label()) {
                tracing::debug!(field = field.key(), %value, "Matched metadata row");
                metadata.set(field, value.clone());
            }
        }
    }

    (metadata, Vec::new())
}
