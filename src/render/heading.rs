//! Heading marker parsing.
//!
//! Heading text may carry leading `#` markers that encode its level:
//! none is the top level, one `#` the second, two or more the third.
//! Nothing renders deeper than level 3.

use serde::Serialize;

/// Display tier of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HeadingLevel {
    Top,
    Second,
    Third,
}

impl HeadingLevel {
    /// Level from a `#` marker count. Counts past 2 cap at `Third`.
    pub fn from_markers(count: usize) -> Self {
        match count {
            0 => HeadingLevel::Top,
            1 => HeadingLevel::Second,
            _ => HeadingLevel::Third,
        }
    }

    /// Level from an explicit 1-based number. 0 reads as top, >3 caps.
    pub fn from_number(level: u8) -> Self {
        Self::from_markers(level.saturating_sub(1) as usize)
    }

    /// HTML heading rank (`h1`..`h3`)
    pub fn as_u8(&self) -> u8 {
        match self {
            HeadingLevel::Top => 1,
            HeadingLevel::Second => 2,
            HeadingLevel::Third => 3,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HeadingLevel::Top => "heading heading-top",
            HeadingLevel::Second => "heading heading-second",
            HeadingLevel::Third => "heading heading-third",
        }
    }
}

/// Split heading text into its level and the display text.
///
/// Strips the marker run and the whitespace directly after it. Text without
/// markers is returned untouched.
pub fn parse_heading(text: &str) -> (HeadingLevel, &str) {
    let markers = text.bytes().take_while(|b| *b == b'#').count();
    if markers == 0 {
        return (HeadingLevel::Top, text);
    }

    let cleaned = text[markers..].trim_start();
    (HeadingLevel::from_markers(markers), cleaned)
}
