// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Html,
};
use axum_htmx::HxRequest;

use crate::api_server::{AppError, AppState};
use crate::guide::{GuideMetadata, SectionSummary};
use crate::pagination::{parse_section_id, ForwardTarget, Navigation};
use crate::render::{render_blocks, RenderedBlock};

fn render_html(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub page_title: &'a str,
    pub metadata: &'a GuideMetadata,
    pub section_count: u32,
}

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let metadata = state.store.metadata();
    render_html(&HomeTemplate {
        page_title: &metadata.title,
        metadata,
        section_count: state.store.section_count(),
    })
}

// ============================================================================
// Contents Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/contents.html")]
pub struct ContentsTemplate<'a> {
    pub page_title: String,
    pub sections: Vec<SectionSummary<'a>>,
}

pub async fn contents_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_html(&ContentsTemplate {
        page_title: format!("Contents - {}", state.store.metadata().title),
        sections: state.store.list_sections(),
    })
}

// ============================================================================
// Section Reader
// ============================================================================

/// Everything the reader fragment needs for one section.
pub struct ReaderView<'a> {
    pub section_id: u32,
    pub title: &'a str,
    pub blocks: Vec<RenderedBlock<'a>>,
    pub nav: Navigation,
}

/// Full page: shell plus reader
#[derive(Template)]
#[template(path = "pages/section.html")]
pub struct SectionTemplate<'a> {
    pub page_title: String,
    pub site_title: &'a str,
    pub reader: ReaderView<'a>,
}

/// Reader fragment alone, swapped in by htmx navigation. Carries a
/// `<title>` so htmx updates the document title on swap.
#[derive(Template)]
#[template(path = "partials/reader_swap.html")]
pub struct ReaderTemplate<'a> {
    pub page_title: String,
    pub reader: ReaderView<'a>,
}

pub async fn section_page(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Html<String>, AppError> {
    // Undecodable segments (e.g. invalid UTF-8) fall back like any other bad id
    let raw_id = match raw_id {
        Ok(Path(raw_id)) => raw_id,
        Err(e) => {
            tracing::debug!("Unreadable section id ({}), falling back", e);
            String::new()
        }
    };

    let store = &state.store;
    let total = store.section_count();
    let section = store.get_section(parse_section_id(&raw_id, total));

    tracing::debug!(
        "Rendering section {} ({} blocks, htmx: {})",
        section.id,
        section.blocks.len(),
        is_htmx
    );

    let reader = ReaderView {
        section_id: section.id,
        title: &section.title,
        blocks: render_blocks(&section.blocks),
        nav: Navigation::new(section.id, total),
    };

    let page_title = format!("{}. {} - {}", section.id, section.title, store.metadata().title);

    if is_htmx {
        render_html(&ReaderTemplate { page_title, reader })
    } else {
        render_html(&SectionTemplate {
            page_title,
            site_title: &store.metadata().title,
            reader,
        })
    }
}
