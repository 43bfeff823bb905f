//! Focus areas recognised by schedule derivation and agent configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of work a workflow concentrates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    /// Engineering work: architecture, implementation, testing, deployment.
    #[default]
    Technical,
    /// Product discovery and validation.
    Product,
    /// Investigation and analysis.
    Research,
}

impl FocusArea {
    /// All focus areas, in declaration order.
    pub const ALL: [FocusArea; 3] = [FocusArea::Technical, FocusArea::Product, FocusArea::Research];

    /// Parse a focus area from its snake_case name.
    ///
    /// Matching is case-sensitive, mirroring how the name appears in
    /// workflow metadata.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "technical" => Some(Self::Technical),
            "product" => Some(Self::Product),
            "research" => Some(Self::Research),
            _ => None,
        }
    }

    /// The snake_case name used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Technical => "technical",
            FocusArea::Product => "product",
            FocusArea::Research => "research",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
