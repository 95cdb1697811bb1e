use crate::graph::{BlockId, Connection, PortRef};
use crate::template::{BlockKind, PortDirection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the interaction layer can ask of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    PortClicked {
        block: BlockId,
        port: String,
        direction: PortDirection,
    },
    DragDelta {
        block: BlockId,
        dx: f64,
        dy: f64,
    },
    AddNode {
        kind: BlockKind,
    },
    ClearConnections,
    Reset,
}

/// What a dispatched event did to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NodeAdded(BlockId),
    Moved(BlockId),
    /// An output port is now waiting for an input.
    Armed(PortRef),
    Connected(Connection),
    /// The link was already present; the selection is still consumed.
    DuplicateConnection(Connection),
    /// An input on the armed block was clicked.
    Cancelled,
    ConnectionsCleared,
    Reset,
    /// The event referred to something that does not exist, or had no effect.
    Ignored,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NodeAdded(id) => write!(f, "added block '{}'", id),
            Outcome::Moved(id) => write!(f, "moved block '{}'", id),
            Outcome::Armed(source) => write!(f, "armed {}", source),
            Outcome::Connected(connection) => write!(f, "connected {}", connection),
            Outcome::DuplicateConnection(connection) => {
                write!(f, "{} already connected", connection)
            }
            Outcome::Cancelled => f.write_str("cancelled pending link"),
            Outcome::ConnectionsCleared => f.write_str("cleared all links"),
            Outcome::Reset => f.write_str("reset canvas"),
            Outcome::Ignored => f.write_str("ignored"),
        }
    }
}
