use super::{BlockId, BlockInstance, Connection, GraphSnapshot, starter_connections, starter_nodes};
use crate::config::CanvasConfig;
use crate::template::BlockTemplate;
use log::{debug, info, trace};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence behind fresh block ids, shared by every store in the process.
static NEXT_BLOCK_SEQ: AtomicU64 = AtomicU64::new(1);

/// Owns the placed blocks and the connections between their ports.
///
/// Every mutation completes before it returns, so observers never see a
/// half-applied action. Invalid or redundant requests are absorbed as no-ops.
#[derive(Debug, Clone)]
pub struct GraphStore {
    config: CanvasConfig,
    nodes: Vec<BlockInstance>,
    connections: Vec<Connection>,
}

impl GraphStore {
    /// Creates a store holding the canonical starter graph.
    pub fn new(config: CanvasConfig) -> Self {
        let mut store = Self::empty(config);
        store.reset();
        store
    }

    /// Creates a store with no blocks and no connections.
    pub fn empty(config: CanvasConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Places a new instance of `template`, cascading from the current node count.
    pub fn add_node(&mut self, template: &'static BlockTemplate) -> &BlockInstance {
        let index = self.nodes.len();
        let seq = NEXT_BLOCK_SEQ.fetch_add(1, Ordering::Relaxed);
        let id = BlockId::new(format!("{}-{}", template.kind, seq));

        let step = self.config.cascade_step;
        let x = self.config.padding + index as f64 * step;
        let y = self.config.padding + (index % self.config.cascade_rows.max(1)) as f64 * step;
        let (x, y) = self.config.clamp(x, y);

        debug!("Adding block '{}' ({}) at ({:.1}, {:.1})", id, template.title, x, y);
        self.nodes.push(BlockInstance { id, template, x, y });
        &self.nodes[index]
    }

    /// Moves a block by a delta, clamping it into the canvas bounds.
    /// Unknown ids and non-finite deltas are ignored.
    pub fn move_node(&mut self, id: &str, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            trace!("Ignoring non-finite move ({}, {}) for block '{}'", dx, dy, id);
            return;
        }
        let config = &self.config;
        match self.nodes.iter_mut().find(|node| node.id.as_str() == id) {
            Some(node) => {
                let (x, y) = config.clamp(node.x + dx, node.y + dy);
                node.set_position(x, y);
                trace!("Moved block '{}' to ({:.1}, {:.1})", id, x, y);
            }
            None => trace!("Ignoring move for unknown block '{}'", id),
        }
    }

    /// Appends a connection unless an identical one already exists.
    ///
    /// Port directions are not checked here; callers only offer output-to-input pairs.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        if self.connections.contains(&connection) {
            debug!("Connection {} already exists", connection);
            return false;
        }
        debug!("Adding connection {}", connection);
        self.connections.push(connection);
        true
    }

    pub fn clear_connections(&mut self) {
        debug!("Clearing {} connections", self.connections.len());
        self.connections.clear();
    }

    /// Restores the canonical starter graph. The id sequence keeps counting.
    pub fn reset(&mut self) {
        self.nodes = starter_nodes(&self.config);
        self.connections = starter_connections();
        info!(
            "Canvas reset to starter graph ({} blocks, {} connections)",
            self.nodes.len(),
            self.connections.len()
        );
    }

    pub fn nodes(&self) -> &[BlockInstance] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, id: &str) -> Option<&BlockInstance> {
        self.nodes.iter().find(|node| node.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Connections whose endpoint blocks both exist.
    pub fn live_connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(|connection| {
            self.contains(connection.source.block.as_str())
                && self.contains(connection.target.block.as_str())
        })
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            connections: self.connections.clone(),
        }
    }
}
