//! Core data types for the review pipeline.
//!
//! These types represent a regulation page (metadata and body clauses)
//! and the reviewer annotations attached to each clause.

use serde::Serialize;

use crate::error::Diagnostic;

/// Labelled fields of the regulation metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    /// 法規名稱
    Title,
    /// 公發布日
    PromulgationDate,
    /// 修正日期
    RevisionDate,
    /// 發文字號
    DocumentNumber,
    /// 法規體系
    Classification,
}

impl MetadataField {
    /// All recognized fields, in table order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::PromulgationDate,
        Self::RevisionDate,
        Self::DocumentNumber,
        Self::Classification,
    ];

    /// The row label used on the source page.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "法規名稱",
            Self::PromulgationDate => "公發布日",
            Self::RevisionDate => "修正日期",
            Self::DocumentNumber => "發文字號",
            Self::Classification => "法規體系",
        }
    }

    /// Stable key used for `data-field` attributes in the artifact.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::PromulgationDate => "promulgation_date",
            Self::RevisionDate => "revision_date",
            Self::DocumentNumber => "document_number",
            Self::Classification => "classification",
        }
    }

    /// Look up a field by its `data-field` key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Metadata extracted from the regulation page header table.
///
/// Fields default to empty strings when the page does not carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegulationMetadata {
    pub title: String,
    pub promulgation_date: String,
    pub revision_date: String,
    pub document_number: String,
    pub classification: String,
}

impl RegulationMetadata {
    /// Get a field value.
    #[must_use]
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Title => &self.title,
            MetadataField::PromulgationDate => &self.promulgation_date,
            MetadataField::RevisionDate => &self.revision_date,
            MetadataField::DocumentNumber => &self.document_number,
            MetadataField::Classification => &self.classification,
        }
    }

    /// Set a field value.
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        let slot = match field {
            MetadataField::Title => &mut self.title,
            MetadataField::PromulgationDate => &mut self.promulgation_date,
            MetadataField::RevisionDate => &mut self.revision_date,
            MetadataField::DocumentNumber => &mut self.document_number,
            MetadataField::Classification => &mut self.classification,
        };
        *slot = value.into();
    }
}

/// One numbered provision of the regulation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    /// Chapter label. Not populated by the segmenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,

    /// Section label. Not populated by the segmenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Clause text including its leading enumerator marker.
    pub text: String,
}

impl Clause {
    /// Create a clause without chapter or section labels.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            chapter: None,
            section: None,
            text: text.into(),
        }
    }
}

/// A decoded regulation page: metadata, ordered clauses and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Regulation {
    pub metadata: RegulationMetadata,

    /// Clauses in source order.
    pub clauses: Vec<Clause>,

    /// Non-fatal conditions met while extracting.
    pub diagnostics: Vec<Diagnostic>,
}

/// Whether a clause is a definitions clause (定義條文).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Definitional {
    #[default]
    No,
    Yes,
}

/// Whether a clause applies to the reviewed organisation (是否適用).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Applicability {
    #[default]
    Unset,
    Applicable,
    NotApplicable,
}

/// Whether the organisation complies with a clause (是否符合).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Compliance {
    #[default]
    Unset,
    Compliant,
    NonCompliant,
}

/// Selector vocabulary shared by the three annotation selectors.
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    /// Every option in display order.
    const OPTIONS: &'static [Self];

    /// Value stored in the `data-selected` attribute and shown to the reviewer.
    fn label(&self) -> &'static str;

    /// Parse a persisted value. Surrounding whitespace is ignored, so a
    /// blank written as `" "` maps to the unset option.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::OPTIONS.iter().copied().find(|o| o.label() == label)
    }
}

impl SelectOption for Definitional {
    const OPTIONS: &'static [Self] = &[Self::No, Self::Yes];

    fn label(&self) -> &'static str {
        match self {
            Self::No => "否",
            Self::Yes => "是",
        }
    }
}

impl SelectOption for Applicability {
    const OPTIONS: &'static [Self] = &[Self::Unset, Self::Applicable, Self::NotApplicable];

    fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Applicable => "適用",
            Self::NotApplicable => "不適用",
        }
    }
}

impl SelectOption for Compliance {
    const OPTIONS: &'static [Self] = &[Self::Unset, Self::Compliant, Self::NonCompliant];

    fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Compliant => "符合",
            Self::NonCompliant => "不符合",
        }
    }
}

/// Reviewer annotation for one clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub definitional: Definitional,
    pub applicability: Applicability,
    pub compliance: Compliance,
    pub note: String,
}
