//! Resource catalog data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ground-truth classification of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Renewable,
    NonRenewable,
}

impl ResourceKind {
    /// Lowercase label used in feedback messages ("renewable" / "nonrenewable").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Renewable => "renewable",
            Self::NonRenewable => "nonrenewable",
        }
    }

    /// Button-style label for the answer controls.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Renewable => "Renewable",
            Self::NonRenewable => "Non-renewable",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal colour hint for a resource card. Mapped to a ratatui colour by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Yellow,
    LightBlue,
    Blue,
    Gray,
    Orange,
    Green,
    LightGreen,
    Black,
    Red,
    Purple,
}

/// A classifiable resource. Immutable; the catalog never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub id: u32,
    pub name: &'static str,
    pub kind: ResourceKind,
    /// Single-cell glyph shown on the question card.
    pub glyph: &'static str,
    pub color: CardColor,
}

impl Resource {
    /// Whether `answer` matches this resource's classification.
    pub fn is_classified_as(&self, answer: ResourceKind) -> bool {
        self.kind == answer
    }
}
