//! Document Store
//!
//! Ordered catalogue of sections, built once at startup and read-only after.
//!
//! Public API (consumed by api_server.rs and the page handlers):
//! - DocumentStore::bundled() -> Result<Self>
//! - DocumentStore::from_path(path) -> Result<Self>
//! - DocumentStore::get_section(id) -> &Section (never fails)

use std::path::Path;

use crate::error::{GuideError, Result};
use crate::guide::types::{GuideDocument, GuideMetadata, Section, SectionSummary};

/// Section served when a requested id is outside `1..=N`.
pub const DEFAULT_SECTION_ID: u32 = 1;

const BUNDLED_GUIDE: &str = include_str!("../../content/guide.json");

/// Immutable section catalogue. Safe to share across any number of readers.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    metadata: GuideMetadata,
    /// Invariant: `sections[i].id == i + 1` and the vector is non-empty
    sections: Vec<Section>,
}

impl DocumentStore {
    /// Build the store from the content compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_GUIDE)
    }

    /// Build the store from an external content file with the bundled schema.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loading guide content from {}", path.display());
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: GuideDocument = serde_json::from_str(json)?;
        Self::new(document.metadata, document.sections)
    }

    /// Validate the id invariant and take ownership of the sections.
    pub fn new(metadata: GuideMetadata, sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(GuideError::Empty);
        }

        for (position, section) in sections.iter().enumerate() {
            let expected = position as u32 + 1;
            if section.id != expected {
                return Err(GuideError::NonContiguousId {
                    position,
                    found: section.id,
                    expected,
                });
            }
        }

        let block_count: usize = sections.iter().map(|s| s.blocks.len()).sum();
        tracing::info!(
            "Guide '{}' loaded: {} sections, {} content blocks",
            metadata.title,
            sections.len(),
            block_count
        );

        Ok(Self { metadata, sections })
    }

    pub fn metadata(&self) -> &GuideMetadata {
        &self.metadata
    }

    /// Contents index in ascending id order.
    pub fn list_sections(&self) -> Vec<SectionSummary<'_>> {
        self.sections.iter().map(Section::summary).collect()
    }

    /// Total section count (N). Always at least 1.
    pub fn section_count(&self) -> u32 {
        self.sections.len() as u32
    }

    /// Look up a section by id, clamping anything outside `1..=N` to the
    /// default section.
    pub fn get_section(&self, id: u32) -> &Section {
        match self.try_section(id) {
            Some(section) => section,
            None => {
                tracing::debug!(
                    "Section id {} outside 1..={}, using section {}",
                    id,
                    self.section_count(),
                    DEFAULT_SECTION_ID
                );
                &self.sections[(DEFAULT_SECTION_ID - 1) as usize]
            }
        }
    }

    /// Exact lookup without fallback.
    pub fn try_section(&self, id: u32) -> Option<&Section> {
        id.checked_sub(1)
            .and_then(|index| self.sections.get(index as usize))
    }
}
