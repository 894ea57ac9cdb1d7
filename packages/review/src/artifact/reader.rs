//! Reading a saved artifact back into a document.

use scraper::ElementRef;

use super::{ArtifactDocument, ArtifactRow};
use crate::error::{ReviewError, Result};
use crate::html::{parse_document, selector, text_with_line_breaks};
use crate::types::{
    Annotation, Applicability, Clause, Compliance, Definitional, MetadataField, SelectOption,
};

/// Cells per clause row: chapter, section, text, three selectors, note.
const ROW_CELLS: usize = 7;

/// Read a review artifact, restoring each row's persisted annotation.
///
/// This is the load step of the viewer: persisted attribute values are the
/// source of truth, whatever the live control state was when saved.
///
/// # Errors
/// `ReviewError::InvalidArtifact` when the markup is not a review artifact.
pub fn read_artifact(markup: &str) -> Result<ArtifactDocument> {
    let doc = parse_document(markup);

    if doc.select(&selector("table")).next().is_none() {
        return Err(ReviewError::InvalidArtifact(
            "no clause table found".to_string(),
        ));
    }

    let mut document = ArtifactDocument::default();

    for element in doc.select(&selector("[data-field]")) {
        let Some(field) = element.value().attr("data-field").and_then(MetadataField::from_key)
        else {
            continue;
        };
        document
            .metadata
            .set(field, element.text().collect::<String>());
    }

    for row in doc.select(&selector("tr[data-row]")) {
        document.rows.push(read_row(row)?);
    }
    tracing::debug!(rows = document.rows.len(), "Read artifact rows");

    Ok(document)
}

fn read_row(row: ElementRef<'_>) -> Result<ArtifactRow> {
    let number = row.value().attr("data-row").unwrap_or_default();
    let cells: Vec<ElementRef<'_>> = row.select(&selector("td")).collect();
    if cells.len() != ROW_CELLS {
        return Err(ReviewError::InvalidArtifact(format!(
            "row {number} has {} cells, expected {ROW_CELLS}",
            cells.len()
        )));
    }

    let clause = Clause {
        chapter: optional_text(cells[0]),
        section: optional_text(cells[1]),
        text: text_with_line_breaks(cells[2]),
    };

    let annotation = Annotation {
        definitional: read_select::<Definitional>(row, "definitional", number)?,
        applicability: read_select::<Applicability>(row, "applicability", number)?,
        compliance: read_select::<Compliance>(row, "compliance", number)?,
        note: row
            .select(&selector("textarea[data-role=\"note\"]"))
            .next()
            .and_then(|note| note.value().attr("data-content"))
            .unwrap_or_default()
            .to_string(),
    };

    Ok(ArtifactRow { clause, annotation })
}

fn optional_text(cell: ElementRef<'_>) -> Option<String> {
    let text = text_with_line_breaks(cell);
    (!text.is_empty()).then_some(text)
}

fn read_select<T: SelectOption>(row: ElementRef<'_>, role: &str, number: &str) -> Result<T> {
    let css = format!("select[data-role=\"{role}\"]");
    let Some(select) = row.select(&selector(&css)).next() else {
        return Err(ReviewError::InvalidArtifact(format!(
            "row {number} has no {role} selector"
        )));
    };

    let persisted = select.value().attr("data-selected").unwrap_or_default();
    T::from_label(persisted).ok_or_else(|| {
        ReviewError::InvalidArtifact(format!(
            "row {number} has unknown {role} value '{persisted}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::render_artifact;
    use crate::types::RegulationMetadata;
    use pretty_assertions::assert_eq;

    fn document() -> ArtifactDocument {
        ArtifactDocument {
            metadata: RegulationMetadata {
                title: "測試 & 法".to_string(),
                promulgation_date: "民國 100 年".to_string(),
                revision_date: String::new(),
                document_number: "經法字第1號".to_string(),
                classification: "經濟部／能源目".to_string(),
            },
            rows: vec![
                ArtifactRow {
                    clause: Clause::new("一、<本法>依電業法訂定之。\n附表一"),
                    annotation: Annotation::default(),
                },
                ArtifactRow {
                    clause: Clause::new("二、本法所稱主管機關為經濟部。"),
                    annotation: Annotation {
                        definitional: Definitional::Yes,
                        applicability: Applicability::Applicable,
                        compliance: Compliance::NonCompliant,
                        note: "待補\n\"文件\"".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_read_rendered_artifact() {
        let original = document();
        let restored = read_artifact(&render_artifact(&original)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_read_metadata_only_artifact() {
        let mut original = document();
        original.rows.clear();
        let restored = read_artifact(&render_artifact(&original)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_persisted_value_wins_over_selected_option() {
        let markup = r#"<table><tbody><tr data-row="1">
            <td></td><td></td><td>一、本法依電業法訂定之。</td>
            <td><select data-role="definitional" data-selected="是"><option value="否" selected>否</option></select></td>
            <td><select data-role="applicability" data-selected=" "></select></td>
            <td><select data-role="compliance" data-selected="符合"></select></td>
            <td><textarea data-role="note" data-content="已檢視">舊內容</textarea></td>
            </tr></tbody></table>"#;

        let document = read_artifact(markup).unwrap();
        let annotation = &document.rows[0].annotation;
        assert_eq!(annotation.definitional, Definitional::Yes);
        assert_eq!(annotation.applicability, Applicability::Unset);
        assert_eq!(annotation.compliance, Compliance::Compliant);
        assert_eq!(annotation.note, "已檢視");
    }

    #[test]
    fn test_not_an_artifact() {
        let err = read_artifact("<p>hello</p>").unwrap_err();
        assert!(matches!(err, ReviewError::InvalidArtifact(_)));
    }

    #[test]
    fn test_unknown_selector_value() {
        let markup = r#"<table><tr data-row="3">
            <td></td><td></td><td>x</td>
            <td><select data-role="definitional" data-selected="也許"></select></td>
            <td><select data-role="applicability" data-selected=""></select></td>
            <td><select data-role="compliance" data-selected=""></select></td>
            <td><textarea data-role="note" data-content=""></textarea></td>
            </tr></table>"#;

        let err = read_artifact(markup).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid review artifact: row 3 has unknown definitional value '也許'"
        );
    }

    #[test]
    fn test_missing_cells() {
        let markup = r#"<table><tr data-row="1"><td>only one</td></tr></table>"#;
        let err = read_artifact(markup).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 cells"));
    }
}
