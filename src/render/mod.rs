//! Block Renderer
//!
//! Maps content blocks to presentation units. Pure: the same blocks always
//! render to the same units, in the same order. Unknown block kinds render
//! to nothing and the rest of the section is unaffected.

pub mod heading;
pub mod view_models;

pub use heading::{parse_heading, HeadingLevel};
pub use view_models::{HeadingUnit, ListUnit, RenderedBlock, TableRow, TableUnit, TextUnit};

use crate::guide::ContentBlock;

/// Render one block. `None` for kinds the renderer does not know.
pub fn render_block(block: &ContentBlock) -> Option<RenderedBlock<'_>> {
    let rendered = match block {
        ContentBlock::Heading { text, level } => {
            let (marker_level, cleaned) = parse_heading(text);
            let level = level.map(HeadingLevel::from_number).unwrap_or(marker_level);
            RenderedBlock::Heading(HeadingUnit { level, text: cleaned })
        }
        ContentBlock::Paragraph { text } => RenderedBlock::Paragraph(TextUnit { text }),
        ContentBlock::List { items } => RenderedBlock::List(ListUnit { items }),
        ContentBlock::Callout { text } => RenderedBlock::Callout(TextUnit { text }),
        ContentBlock::Table { headers, rows } => RenderedBlock::Table(TableUnit {
            headers,
            rows: rows
                .iter()
                .enumerate()
                .map(|(index, cells)| TableRow { cells, striped: index % 2 == 1 })
                .collect(),
        }),
        ContentBlock::Unknown => {
            tracing::debug!("Skipping content block of unrecognized kind");
            return None;
        }
    };
    Some(rendered)
}

/// Render a block sequence, preserving order and dropping unknown kinds.
pub fn render_blocks(blocks: &[ContentBlock]) -> Vec<RenderedBlock<'_>> {
    blocks.iter().filter_map(render_block).collect()
}
