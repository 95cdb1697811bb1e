//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need to drive a canvas and read its views.
//!
//! # Example
//!
//! ```rust
//! use stitch::prelude::*;
//!
//! let mut store = GraphStore::empty(CanvasConfig::default());
//! let entry = store.add_node(template(BlockKind::Entry)).id().clone();
//! let write = store.add_node(template(BlockKind::Emit)).id().clone();
//! store.add_connection(Connection::new(
//!     PortRef::new(entry, "Output"),
//!     PortRef::new(write, "Value"),
//! ));
//!
//! let outline = synthesize(store.nodes(), store.connections());
//! assert_eq!(outline, "START-OF-SELECTION.\n        WRITE / ls_row.");
//! ```

// Canvas facade
pub use crate::canvas::{Canvas, CanvasEvent, Outcome};

// Graph model
pub use crate::graph::{BlockId, BlockInstance, Connection, GraphSnapshot, GraphStore, PortRef};

// Templates
pub use crate::template::{BlockKind, BlockTemplate, PortDirection, PortSpec, library, template};

// Interaction, geometry and synthesis
pub use crate::geometry::{LinkSegment, Point, anchor, link_segments};
pub use crate::interaction::{InteractionState, PortInteraction};
pub use crate::synthesis::{PLACEHOLDER, Synthesizer, synthesize};

// Configuration and errors
pub use crate::config::CanvasConfig;
pub use crate::error::{ConfigError, ScriptError, TemplateError};
