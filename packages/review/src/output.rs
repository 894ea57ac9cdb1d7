//! Artifact saving and YAML summaries.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::artifact::{Artifact, ArtifactDocument};
use crate::error::Result;
use crate::types::{Regulation, RegulationMetadata, SelectOption};

/// YAML view of an extracted regulation.
#[derive(Debug, Serialize)]
struct YamlRegulation<'a> {
    metadata: &'a RegulationMetadata,
    clauses: Vec<YamlClause<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
struct YamlClause<'a> {
    number: usize,
    text: &'a str,
}

/// YAML view of the annotations stored in an artifact.
#[derive(Debug, Serialize)]
struct YamlAnnotations<'a> {
    metadata: &'a RegulationMetadata,
    rows: Vec<YamlAnnotatedRow<'a>>,
}

#[derive(Debug, Serialize)]
struct YamlAnnotatedRow<'a> {
    number: usize,
    text: &'a str,
    definitional: &'static str,
    applicability: &'static str,
    compliance: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    note: &'a str,
}

/// Add a document start marker and strip trailing whitespace.
fn finish_yaml(yaml: &str) -> String {
    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    format!("---\n{}\n", lines.join("\n"))
}

/// Generate a YAML summary of an extracted regulation.
pub fn regulation_yaml(regulation: &Regulation) -> Result<String> {
    let yaml = YamlRegulation {
        metadata: &regulation.metadata,
        clauses: regulation
            .clauses
            .iter()
            .enumerate()
            .map(|(i, clause)| YamlClause {
                number: i + 1,
                text: &clause.text,
            })
            .collect(),
        diagnostics: regulation
            .diagnostics
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    Ok(finish_yaml(&serde_yaml_ng::to_string(&yaml)?))
}

/// Generate a YAML listing of the persisted annotations of an artifact.
pub fn annotations_yaml(document: &ArtifactDocument) -> Result<String> {
    let yaml = YamlAnnotations {
        metadata: &document.metadata,
        rows: document
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| YamlAnnotatedRow {
                number: i + 1,
                text: &row.clause.text,
                definitional: row.annotation.definitional.label(),
                applicability: row.annotation.applicability.label(),
                compliance: row.annotation.compliance.label(),
                note: &row.annotation.note,
            })
            .collect(),
    };

    Ok(finish_yaml(&serde_yaml_ng::to_string(&yaml)?))
}

/// Save an artifact under its suggested file name.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt an existing artifact on crash.
///
/// # Arguments
/// * `artifact` - The rendered artifact
/// * `output_dir` - Target directory (default: current directory)
///
/// # Returns
/// Path to the saved file
pub fn save_artifact(artifact: &Artifact, output_dir: Option<&Path>) -> Result<PathBuf> {
    let output_dir = output_dir.unwrap_or(Path::new("."));
    fs::create_dir_all(output_dir)?;

    let output_file = output_dir.join(&artifact.file_name);
    let temp_file = output_dir.join(format!(".{}.tmp", artifact.file_name));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(artifact.html.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;
    tracing::info!(path = %output_file.display(), "Saved review artifact");

    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactRow;
    use crate::error::Diagnostic;
    use crate::types::{Annotation, Clause, Compliance};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn regulation() -> Regulation {
        Regulation {
            metadata: RegulationMetadata {
                title: "測試法".to_string(),
                ..RegulationMetadata::default()
            },
            clauses: vec![
                Clause::new("一、第一條內容一二三四五六七八九十。"),
                Clause::new("二、第二條內容一二三四五六七八九十。"),
            ],
            diagnostics: vec![Diagnostic::MissingMetadataTable],
        }
    }

    #[test]
    fn test_regulation_yaml() {
        let yaml = regulation_yaml(&regulation()).unwrap();
        assert!(yaml.starts_with("---\n"));

        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(value["metadata"]["title"].as_str(), Some("測試法"));
        assert_eq!(value["metadata"]["revision_date"].as_str(), Some(""));
        assert_eq!(value["clauses"][1]["number"].as_u64(), Some(2));
        assert_eq!(
            value["clauses"][1]["text"].as_str(),
            Some("二、第二條內容一二三四五六七八九十。")
        );
        assert_eq!(
            value["diagnostics"][0].as_str(),
            Some("No metadata table found, metadata left empty")
        );
    }

    #[test]
    fn test_regulation_yaml_without_diagnostics() {
        let mut regulation = regulation();
        regulation.diagnostics.clear();
        let yaml = regulation_yaml(&regulation).unwrap();
        assert!(!yaml.contains("diagnostics:"));
    }

    #[test]
    fn test_annotations_yaml() {
        let mut document = ArtifactDocument::from_regulation(&regulation());
        document.rows[0] = ArtifactRow {
            clause: document.rows[0].clause.clone(),
            annotation: Annotation {
                compliance: Compliance::NonCompliant,
                note: "缺少紀錄".to_string(),
                ..Annotation::default()
            },
        };

        let yaml = annotations_yaml(&document).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(value["rows"][0]["definitional"].as_str(), Some("否"));
        assert_eq!(value["rows"][0]["compliance"].as_str(), Some("不符合"));
        assert_eq!(value["rows"][0]["note"].as_str(), Some("缺少紀錄"));
        assert!(value["rows"][1].get("note").is_none());
    }

    #[test]
    fn test_save_artifact() {
        let temp_dir = tempdir().unwrap();
        let artifact = Artifact::render(&ArtifactDocument::from_regulation(&regulation()));

        let path = save_artifact(&artifact, Some(temp_dir.path())).unwrap();

        assert!(path.ends_with("測試法.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), artifact.html);
        assert!(!temp_dir.path().join(".測試法.html.tmp").exists());
    }

    #[test]
    fn test_save_artifact_overwrites() {
        let temp_dir = tempdir().unwrap();
        let mut artifact = Artifact::render(&ArtifactDocument::from_regulation(&regulation()));
        save_artifact(&artifact, Some(temp_dir.path())).unwrap();

        artifact.html = "<!DOCTYPE html>\n".to_string();
        let path = save_artifact(&artifact, Some(temp_dir.path())).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<!DOCTYPE html>\n");
    }
}
