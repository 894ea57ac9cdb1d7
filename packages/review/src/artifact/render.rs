//! Artifact rendering.

use super::assets::{SCRIPT, STYLE};
use super::{ArtifactDocument, ArtifactRow};
use crate::html::{escape_attribute, escape_text};
use crate::types::{MetadataField, SelectOption};

/// Metadata header line: display prefix and field, in display order.
const META_LINE: [(&str, MetadataField); 4] = [
    ("公布：", MetadataField::PromulgationDate),
    ("修正：", MetadataField::RevisionDate),
    ("發文字號：", MetadataField::DocumentNumber),
    ("體系：", MetadataField::Classification),
];

/// Separator between metadata header entries.
const META_SEPARATOR: &str = " ／ ";

/// Column headings, with an optional class for sizing.
const COLUMNS: [(&str, Option<&str>); 7] = [
    ("章", None),
    ("章節", None),
    ("條文內容", Some("clause")),
    ("定義條文", None),
    ("是否適用", None),
    ("是否符合", None),
    ("說明", Some("note")),
];

/// Action buttons: `data-action` and label.
const ACTIONS: [(&str, &str); 3] = [
    ("update", "更新"),
    ("confirm", "完成更新"),
    ("download", "下載更新版本"),
];

/// Render a document as a self-contained HTML artifact.
///
/// Output depends only on the document, so rendering the same document twice
/// gives byte-identical artifacts. All controls start disabled; their
/// persisted values are written to `data-selected` / `data-content`.
pub fn render_artifact(document: &ArtifactDocument) -> String {
    let title = escape_text(&document.metadata.title);
    let export_name = escape_attribute(&document.file_name());

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<style>\n{STYLE}</style>\n"));
    html.push_str(&format!("<script>\n{SCRIPT}</script>\n"));
    html.push_str("</head>\n");
    html.push_str(&format!("<body data-export-name=\"{export_name}\">\n"));
    html.push_str(&format!(
        "<h2 data-field=\"{}\">{title}</h2>\n",
        MetadataField::Title.key()
    ));
    html.push_str(&render_meta_line(document));

    html.push_str("<table>\n<thead><tr>");
    for (heading, class) in COLUMNS {
        match class {
            Some(class) => html.push_str(&format!("<th class=\"{class}\">{heading}</th>")),
            None => html.push_str(&format!("<th>{heading}</th>")),
        }
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (index, row) in document.rows.iter().enumerate() {
        html.push_str(&render_row(index + 1, row));
    }
    tracing::debug!(rows = document.rows.len(), "Rendered clause rows");

    html.push_str("</tbody>\n</table>\n<div class=\"actions\">\n");
    for (action, label) in ACTIONS {
        html.push_str(&format!(
            "<button class=\"button\" type=\"button\" data-action=\"{action}\">{label}</button>\n"
        ));
    }
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn render_meta_line(document: &ArtifactDocument) -> String {
    let entries: Vec<String> = META_LINE
        .iter()
        .map(|(prefix, field)| {
            format!(
                "{prefix}<span data-field=\"{}\">{}</span>",
                field.key(),
                escape_text(document.metadata.get(*field))
            )
        })
        .collect();

    format!(
        "<p class=\"meta\"><strong>{}</strong></p>\n",
        entries.join(META_SEPARATOR)
    )
}

fn render_row(number: usize, row: &ArtifactRow) -> String {
    let clause = &row.clause;
    let annotation = &row.annotation;

    let chapter = escape_text(clause.chapter.as_deref().unwrap_or_default());
    let section = escape_text(clause.section.as_deref().unwrap_or_default());
    let content = escape_text(&clause.text).replace('\n', "<br>");

    format!(
        "<tr data-row=\"{number}\">\n\
         <td>{chapter}</td><td>{section}</td><td class=\"clause\">{content}</td>\n\
         <td>{}</td><td>{}</td><td>{}</td>\n\
         <td><textarea data-role=\"note\" data-content=\"{}\" disabled></textarea></td>\n\
         </tr>\n",
        render_select("definitional", annotation.definitional),
        render_select("applicability", annotation.applicability),
        render_select("compliance", annotation.compliance),
        escape_attribute(&annotation.note),
    )
}

fn render_select<T: SelectOption>(role: &str, current: T) -> String {
    let mut html = format!(
        "<select data-role=\"{role}\" data-selected=\"{}\" disabled>",
        escape_attribute(current.label())
    );
    for option in T::OPTIONS {
        let value = escape_attribute(option.label());
        let display = match option.label() {
            "" => " ".to_string(),
            label => escape_text(label),
        };
        let selected = if *option == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{value}\"{selected}>{display}</option>"
        ));
    }
    html.push_str("</select>");
    html
}
