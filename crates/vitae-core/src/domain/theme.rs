//! Theme and sidebar palette value objects.
//!
//! The record stores `theme` and `sidebar_color` as free text so that files
//! round-trip untouched. [`Theme::resolve`] is the single point where that
//! text becomes a closed variant: an unknown theme is an error, an unknown
//! sidebar colour quietly becomes [`SidebarColor::Teal`].

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── SidebarColor ─────────────────────────────────────────────────────────────

/// Background colour of the sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SidebarColor {
    Green,
    #[default]
    Teal,
    Mono,
}

impl SidebarColor {
    pub const ALL: [SidebarColor; 3] = [Self::Green, Self::Teal, Self::Mono];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Mono => "mono",
        }
    }

    /// CSS colour literal substituted into the sidebar template.
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#2e7d32",
            Self::Teal => "#004d4d",
            Self::Mono => "#222",
        }
    }

    /// Exact, case-sensitive lookup; any other name resolves to teal.
    pub fn from_name(name: &str) -> Self {
        match name {
            "green" => Self::Green,
            "mono" => Self::Mono,
            _ => Self::Teal,
        }
    }
}

impl fmt::Display for SidebarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Theme ────────────────────────────────────────────────────────────────────

/// One of the four fixed layouts. Only the sidebar layout carries auxiliary
/// data, the colour it was resolved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Premium,
    Minimal,
    Creative,
    Sidebar(SidebarColor),
}

impl Theme {
    pub const NAMES: [&'static str; 4] = ["premium", "minimal", "creative", "sidebar"];

    /// Resolve the record's theme text and sidebar colour text.
    pub fn resolve(theme: &str, sidebar_color: &str) -> Result<Self, DomainError> {
        let theme = Theme::from_str(theme)?;
        Ok(match theme {
            Self::Sidebar(_) => Self::Sidebar(SidebarColor::from_name(sidebar_color)),
            other => other,
        })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Minimal => "minimal",
            Self::Creative => "creative",
            Self::Sidebar(_) => "sidebar",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sidebar(color) => write!(f, "sidebar ({color})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    /// Exact match on the lowercase name; the sidebar colour defaults to teal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premium" => Ok(Self::Premium),
            "minimal" => Ok(Self::Minimal),
            "creative" => Ok(Self::Creative),
            "sidebar" => Ok(Self::Sidebar(SidebarColor::default())),
            other => Err(DomainError::UnknownTheme {
                theme: other.to_string(),
            }),
        }
    }
}
