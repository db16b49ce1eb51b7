//! View Models for rendered content
//!
//! Presentation units produced by the block renderer. They borrow their text
//! from the document store and are consumed by the page templates.

use serde::Serialize;

use super::heading::HeadingLevel;

/// One rendered unit. Exactly one per recognized content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedBlock<'a> {
    Heading(HeadingUnit<'a>),
    Paragraph(TextUnit<'a>),
    List(ListUnit<'a>),
    Callout(TextUnit<'a>),
    Table(TableUnit<'a>),
}

impl RenderedBlock<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderedBlock::Heading(_) => "heading",
            RenderedBlock::Paragraph(_) => "paragraph",
            RenderedBlock::List(_) => "list",
            RenderedBlock::Callout(_) => "callout",
            RenderedBlock::Table(_) => "table",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingUnit<'a> {
    pub level: HeadingLevel,
    /// Text with level markers removed
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextUnit<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListUnit<'a> {
    pub items: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableUnit<'a> {
    pub headers: &'a [String],
    pub rows: Vec<TableRow<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow<'a> {
    pub cells: &'a [String],
    /// Alternating background, odd rows only
    pub striped: bool,
}

impl TableRow<'_> {
    pub fn css_class(&self) -> &'static str {
        if self.striped {
            "row-striped"
        } else {
            "row-plain"
        }
    }
}
