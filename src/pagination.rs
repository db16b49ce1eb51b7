//! Pagination and progress for the section reader.
//!
//! Pure functions from a raw path segment and the section count to a
//! validated id and its navigation state. No routing types leak in here.

use serde::Serialize;

use crate::guide::DEFAULT_SECTION_ID;

/// Parse a section id from a URL path segment.
///
/// Reads the leading decimal digits after optional whitespace and `+`, so
/// `"5abc"` is 5 and `"2.5"` is 2. Anything without leading digits, or
/// outside `1..=total`, resolves to [`DEFAULT_SECTION_ID`].
pub fn parse_section_id(raw: &str, total: u32) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(id) if (1..=total).contains(&id) => id,
        Ok(id) => {
            tracing::debug!("Section id {} outside 1..={}, falling back", id, total);
            DEFAULT_SECTION_ID
        }
        Err(e) => {
            tracing::debug!("Unparsable section id '{}' ({}), falling back", raw, e);
            DEFAULT_SECTION_ID
        }
    }
}

/// Where the reader sits in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Position {
    /// First section, no previous link
    Start,
    Middle,
    /// Last section, forward link returns to contents
    End,
}

/// Target of the forward affordance. Never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForwardTarget {
    Section(u32),
    Contents,
}

/// Navigation state for one section page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub current: u32,
    pub total: u32,
    pub previous: Option<u32>,
    pub next: ForwardTarget,
}

impl Navigation {
    /// `current` is clamped into `1..=total` the same way ids are parsed.
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        let current = if (1..=total).contains(&current) {
            current
        } else {
            DEFAULT_SECTION_ID
        };

        let previous = (current > 1).then(|| current - 1);
        let next = if current < total {
            ForwardTarget::Section(current + 1)
        } else {
            ForwardTarget::Contents
        };

        Self { current, total, previous, next }
    }

    pub fn position(&self) -> Position {
        if self.current == 1 {
            Position::Start
        } else if self.current == self.total {
            Position::End
        } else {
            Position::Middle
        }
    }

    /// `current / total`, within `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.current as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }

    /// Percentage formatted for a CSS width (e.g. "6.25")
    pub fn progress_width(&self) -> String {
        format!("{:.2}", self.progress_percent())
    }

    pub fn previous_href(&self) -> Option<String> {
        self.previous.map(section_href)
    }

    pub fn next_href(&self) -> String {
        match self.next {
            ForwardTarget::Section(id) => section_href(id),
            ForwardTarget::Contents => CONTENTS_HREF.to_string(),
        }
    }

    pub fn next_label(&self) -> &'static str {
        match self.next {
            ForwardTarget::Section(_) => "Next",
            ForwardTarget::Contents => "Back to Contents",
        }
    }
}

pub const CONTENTS_HREF: &str = "/contents";

pub fn section_href(id: u32) -> String {
    format!("/section/{}", id)
}
