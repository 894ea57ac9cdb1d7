//! Main pipeline that ties all components together.

use crate::artifact::{Artifact, ArtifactDocument};
use crate::error::Result;
use crate::html::parse_document;
use crate::metadata::extract_metadata;
use crate::mhtml::decode_markup;
use crate::segment::{segment_document, SegmentOptions};
use crate::types::Regulation;

/// Result of a conversion: the extracted regulation and its artifact.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub regulation: Regulation,
    pub artifact: Artifact,
}

/// Decode an archived regulation page and extract metadata and clauses.
///
/// # Arguments
/// * `raw` - Bytes of the MHTML container
/// * `options` - Segmentation settings
///
/// # Returns
/// A `Regulation` with any non-fatal diagnostics met during extraction.
/// Fails only when the container holds no decodable markup.
pub fn parse_regulation(raw: &[u8], options: &SegmentOptions) -> Result<Regulation> {
    let markup = decode_markup(raw)?;
    let doc = parse_document(&markup);

    let (metadata, mut diagnostics) = extract_metadata(&doc);
    let (clauses, clause_diagnostics) = segment_document(&doc, options);
    diagnostics.extend(clause_diagnostics);

    tracing::info!(
        title = %metadata.title,
        clauses = clauses.len(),
        diagnostics = diagnostics.len(),
        "Parsed regulation"
    );

    Ok(Regulation {
        metadata,
        clauses,
        diagnostics,
    })
}

/// Convert an archived regulation page into a review artifact.
pub fn convert(raw: &[u8], options: &SegmentOptions) -> Result<Conversion> {
    let regulation = parse_regulation(raw, options)?;
    let artifact = Artifact::render(&ArtifactDocument::from_regulation(&regulation));
    Ok(Conversion {
        regulation,
        artifact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, Diagnostic, ReviewError};

    fn single_part(html: &str) -> Vec<u8> {
        format!("Content-Type: text/html; charset=utf-8\r\n\r\n{html}").into_bytes()
    }

    #[test]
    fn test_parse_regulation() {
        let raw = single_part(
            "<table><tr><th>法規名稱</th><td>測試法</td></tr></table>\
             <div id=\"ctl00_cp_content_divContent\">\
             一、第一條內容一二三四五六七八九十。二、第二條內容一二三四五六七八九十。\
             </div>",
        );
        let regulation = parse_regulation(&raw, &SegmentOptions::default()).unwrap();

        assert_eq!(regulation.metadata.title, "測試法");
        assert_eq!(regulation.clauses.len(), 2);
        assert!(regulation.diagnostics.is_empty());
    }

    #[test]
    fn test_degrades_without_table_or_body() {
        let raw = single_part("<p>空白頁</p>");
        let regulation = parse_regulation(&raw, &SegmentOptions::default()).unwrap();

        assert!(regulation.clauses.is_empty());
        assert!(regulation.diagnostics.contains(&Diagnostic::MissingMetadataTable));
        assert!(regulation.diagnostics.contains(&Diagnostic::EmptyClauseSet));
    }

    #[test]
    fn test_no_markup_is_fatal() {
        let raw = b"Content-Type: text/plain\r\n\r\nplain".to_vec();
        let err = convert(&raw, &SegmentOptions::default()).unwrap_err();
        assert!(matches!(err, ReviewError::Decode(DecodeError::NoMarkupPart)));
    }

    #[test]
    fn test_convert_names_artifact_after_title() {
        let raw = single_part("<table><tr><th>法規名稱</th><td>測試法</td></tr></table>");
        let conversion = convert(&raw, &SegmentOptions::default()).unwrap();
        assert_eq!(conversion.artifact.file_name, "測試法.html");
    }
}
