//! Reading Guide
//!
//! Paginated reading guide served as HTML. A fixed table of contents, one
//! page per section, previous/next navigation and a progress bar.
//!
//! - `guide/`: immutable Document Store (sections and typed content blocks)
//! - `render/`: block renderer (content block -> presentation unit)
//! - `pagination`: section id parsing, navigation state, progress
//! - `api_server` + `web/`: axum router and askama page handlers (feature `web`)

pub mod config;
pub mod error;
pub mod guide;
pub mod pagination;
pub mod render;

#[cfg(feature = "web")]
pub mod api_server;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::GuideError;
pub use guide::{ContentBlock, DocumentStore, Section, SectionSummary, DEFAULT_SECTION_ID};
pub use pagination::{parse_section_id, ForwardTarget, Navigation, Position};
pub use render::{render_block, render_blocks, RenderedBlock};

#[cfg(feature = "web")]
pub use api_server::{create_router, AppState};
