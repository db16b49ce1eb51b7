//! Reading Guide Content Module
//!
//! Static catalogue of guide sections and their typed content blocks.
//!
//! ## Block kinds
//! - heading: `#` markers in the text select the display level
//! - paragraph: plain prose
//! - list: bulleted items, order preserved
//! - callout: emphasized aside
//! - table: header row plus body rows

pub mod types;
pub mod store;

pub use types::{ContentBlock, GuideMetadata, Highlight, Section, SectionSummary};
pub use store::{DocumentStore, DEFAULT_SECTION_ID};
