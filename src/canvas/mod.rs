//! The canvas facade: one graph store, one port state machine and the derived views.
//!
//! Events are handled to completion one at a time. Derived views (outline,
//! link segments, status) are never cached and always reflect the latest graph.

mod event;
pub mod script;

pub use event::{CanvasEvent, Outcome};

use crate::config::CanvasConfig;
use crate::geometry::{LinkSegment, link_segments};
use crate::graph::{BlockId, GraphSnapshot, GraphStore};
use crate::interaction::PortInteraction;
use crate::synthesis::Synthesizer;
use crate::template::{BlockKind, PortDirection, template};
use log::{debug, trace};

const IDLE_STATUS: &str =
    "Click an output port, then an input port, to form a link. Drag a node to reposition it.";

pub struct Canvas {
    store: GraphStore,
    interaction: PortInteraction,
    synthesizer: Synthesizer,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Canvas {
    /// Creates a canvas showing the starter graph.
    pub fn new(config: CanvasConfig) -> Self {
        Self::from_store(GraphStore::new(config))
    }

    pub fn from_store(store: GraphStore) -> Self {
        Self {
            store,
            interaction: PortInteraction::new(),
            synthesizer: Synthesizer::default(),
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: Synthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn interaction(&self) -> &PortInteraction {
        &self.interaction
    }

    pub fn config(&self) -> &CanvasConfig {
        self.store.config()
    }

    pub fn dispatch(&mut self, event: CanvasEvent) -> Outcome {
        trace!("Dispatching {:?}", event);
        match event {
            CanvasEvent::PortClicked {
                block,
                port,
                direction,
            } => self.port_clicked(&block, &port, direction),
            CanvasEvent::DragDelta { block, dx, dy } => self.drag(&block, dx, dy),
            CanvasEvent::AddNode { kind } => Outcome::NodeAdded(self.add_node(kind)),
            CanvasEvent::ClearConnections => {
                self.clear_connections();
                Outcome::ConnectionsCleared
            }
            CanvasEvent::Reset => {
                self.reset();
                Outcome::Reset
            }
        }
    }

    pub fn add_node(&mut self, kind: BlockKind) -> BlockId {
        self.store.add_node(template(kind)).id().clone()
    }

    /// Handles a click on a port whose direction the caller already knows.
    ///
    /// Clicks on unknown blocks or ports, or whose direction disagrees with the
    /// template, leave the canvas untouched.
    pub fn port_clicked(&mut self, block: &BlockId, port: &str, direction: PortDirection) -> Outcome {
        let Some(node) = self.store.node(block.as_str()) else {
            debug!("Ignoring click on unknown block '{}'", block);
            return Outcome::Ignored;
        };
        match node.template().port(port) {
            Some((_, spec)) if spec.direction == direction => {}
            Some(_) => {
                debug!("Ignoring click on {}.{}: direction is not {}", block, port, direction);
                return Outcome::Ignored;
            }
            None => {
                debug!("Ignoring click on unknown port {}.{}", block, port);
                return Outcome::Ignored;
            }
        }

        let was_armed = !self.interaction.is_idle();
        match self.interaction.on_port_clicked(block, port, direction) {
            Some(connection) => {
                if self.store.add_connection(connection.clone()) {
                    Outcome::Connected(connection)
                } else {
                    Outcome::DuplicateConnection(connection)
                }
            }
            None => match (direction, self.interaction.pending()) {
                (PortDirection::Output, Some(source)) => Outcome::Armed(source.clone()),
                (PortDirection::Input, _) if was_armed => Outcome::Cancelled,
                _ => Outcome::Ignored,
            },
        }
    }

    /// Handles a click on a port, taking its direction from the block's template.
    pub fn click(&mut self, block: &BlockId, port: &str) -> Outcome {
        let Some(node) = self.store.node(block.as_str()) else {
            debug!("Ignoring click on unknown block '{}'", block);
            return Outcome::Ignored;
        };
        match node.template().port(port) {
            Some((_, spec)) => self.port_clicked(block, port, spec.direction),
            None => {
                debug!("Ignoring click on unknown port {}.{}", block, port);
                Outcome::Ignored
            }
        }
    }

    pub fn drag(&mut self, block: &BlockId, dx: f64, dy: f64) -> Outcome {
        if !self.store.contains(block.as_str()) || !dx.is_finite() || !dy.is_finite() {
            debug!("Ignoring drag ({}, {}) for block '{}'", dx, dy, block);
            return Outcome::Ignored;
        }
        self.store.move_node(block.as_str(), dx, dy);
        Outcome::Moved(block.clone())
    }

    pub fn clear_connections(&mut self) {
        self.store.clear_connections();
        self.interaction.cancel();
    }

    pub fn reset(&mut self) {
        self.store.reset();
        self.interaction.cancel();
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.store.snapshot()
    }

    /// The synthesized outline for the current graph.
    pub fn outline(&self) -> String {
        self.synthesizer
            .synthesize(self.store.nodes(), self.store.connections())
    }

    pub fn links(&self) -> Vec<LinkSegment> {
        link_segments(
            self.store.config(),
            self.store.nodes(),
            self.store.connections(),
        )
    }

    /// One-line hint describing what the next port click will do.
    pub fn status(&self) -> String {
        match self.interaction.pending() {
            Some(source) => format!("Select an input port to connect from {}", source.port),
            None => IDLE_STATUS.to_string(),
        }
    }
}
