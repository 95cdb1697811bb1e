//! The fixed catalog of block templates.
//!
//! Templates are process-wide reference data. Placed blocks hold a
//! `&'static BlockTemplate` into [`library()`] and never copy it.

mod library;

pub use library::{library, template};

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of block kinds a canvas can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Program entry (`START-OF-SELECTION`).
    Entry,
    /// Table read (`SELECT`).
    Read,
    /// Loop over an internal table (`LOOP AT`).
    Iterate,
    /// Output statement (`WRITE`).
    Emit,
    /// Conditional (`IF / ELSE`).
    Branch,
}

impl BlockKind {
    /// All kinds, in catalog order.
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Entry,
        BlockKind::Read,
        BlockKind::Iterate,
        BlockKind::Emit,
        BlockKind::Branch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Entry => "entry",
            BlockKind::Read => "read",
            BlockKind::Iterate => "iterate",
            BlockKind::Emit => "emit",
            BlockKind::Branch => "branch",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TemplateError::UnknownKind(s.to_string()))
    }
}

/// Whether a port receives links (input) or starts them (output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    #[serde(alias = "in")]
    Input,
    #[serde(alias = "out")]
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::Input => f.write_str("in"),
            PortDirection::Output => f.write_str("out"),
        }
    }
}

/// A named connection point on a template.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PortSpec {
    /// Unique within the owning template.
    pub label: &'static str,
    pub direction: PortDirection,
}

impl PortSpec {
    pub const fn input(label: &'static str) -> Self {
        Self {
            label,
            direction: PortDirection::Input,
        }
    }

    pub const fn output(label: &'static str) -> Self {
        Self {
            label,
            direction: PortDirection::Output,
        }
    }
}

/// Describes what a placed block of a given kind looks like and which ports it has.
///
/// Port order is significant: it is the vertical stacking order used when
/// resolving link anchors.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BlockTemplate {
    pub kind: BlockKind,
    pub title: &'static str,
    pub description: &'static str,
    pub ports: &'static [PortSpec],
}

impl BlockTemplate {
    /// Looks up a port by label, returning its ordinal within `ports` alongside it.
    pub fn port(&self, label: &str) -> Option<(usize, &'static PortSpec)> {
        self.ports
            .iter()
            .enumerate()
            .find(|(_, port)| port.label == label)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &'static PortSpec> {
        self.ports
            .iter()
            .filter(|port| port.direction == PortDirection::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &'static PortSpec> {
        self.ports
            .iter()
            .filter(|port| port.direction == PortDirection::Output)
    }
}
