//! Shared data types for the reading guide.
//!
//! Data source: `content/guide.json` (bundled) or an external file with the
//! same shape. Every type here is immutable once the store is built.

use serde::{Deserialize, Serialize};

/// One typed unit of a section body.
///
/// The `type` tag selects the variant. Tags outside the known set land in
/// `Unknown` so a single unfamiliar block never fails the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        /// Display text, possibly prefixed with `#` markers
        text: String,
        /// Explicit level (1-3); overrides the marker count when present
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },
    Paragraph {
        text: String,
    },
    List {
        #[serde(default)]
        items: Vec<String>,
    },
    Callout {
        text: String,
    },
    Table {
        headers: Vec<String>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Tag name as it appears in the content file.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
            ContentBlock::Callout { .. } => "callout",
            ContentBlock::Table { .. } => "table",
            ContentBlock::Unknown => "unknown",
        }
    }
}

/// One numbered topic of the guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub title: String,
    /// Shown on the contents index only
    pub description: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    pub fn summary(&self) -> SectionSummary<'_> {
        SectionSummary {
            id: self.id,
            title: &self.title,
            description: &self.description,
        }
    }
}

/// Contents index entry, borrowed from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSummary<'a> {
    pub id: u32,
    pub title: &'a str,
    pub description: &'a str,
}

/// Feature card shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub text: String,
}

/// Guide-level metadata used by the home page and page titles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuideMetadata {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub footer: String,
}

/// On-disk shape of a guide document.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GuideDocument {
    #[serde(flatten)]
    pub metadata: GuideMetadata,
    pub sections: Vec<Section>,
}
