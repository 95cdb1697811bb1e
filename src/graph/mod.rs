//! Graph data model: placed blocks, port references and connections.

mod starter;
mod store;

pub use starter::{starter_connections, starter_nodes};
pub use store::GraphStore;

use crate::template::{BlockKind, BlockTemplate, template};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Identity of a placed block.
///
/// Fresh ids are `{kind}-{seq}` with a process-wide sequence, so no two
/// stores ever hand out the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Addresses one port on one placed block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    pub block: BlockId,
    pub port: String,
}

impl PortRef {
    pub fn new(block: impl Into<BlockId>, port: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.block, self.port)
    }
}

/// A directed link from an output port to an input port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub source: PortRef,
    pub target: PortRef,
}

impl Connection {
    pub fn new(source: PortRef, target: PortRef) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A template placed on the canvas at a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockInstance {
    id: BlockId,
    #[serde(rename = "kind", serialize_with = "serialize_template_kind")]
    template: &'static BlockTemplate,
    x: f64,
    y: f64,
}

impl BlockInstance {
    /// Builds an instance at the given position without clamping.
    ///
    /// Blocks living in a [`GraphStore`] are always created through the store,
    /// which keeps them inside the canvas bounds.
    pub fn new(id: impl Into<BlockId>, kind: BlockKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            template: template(kind),
            x,
            y,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn template(&self) -> &'static BlockTemplate {
        self.template
    }

    pub fn kind(&self) -> BlockKind {
        self.template.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

fn serialize_template_kind<S: Serializer>(
    template: &&'static BlockTemplate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    template.kind.serialize(serializer)
}

/// A read-only copy of the graph handed to rendering layers and tooling.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<BlockInstance>,
    pub connections: Vec<Connection>,
}
