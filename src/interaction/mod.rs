//! Port-click state machine that turns click sequences into connection requests.

use crate::graph::{BlockId, Connection, PortRef};
use crate::template::PortDirection;
use log::trace;

/// Whether an output port is waiting for its input counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Armed(PortRef),
}

/// Drives [`InteractionState`] from port clicks.
///
/// Clicking an output port arms it (re-arming replaces any earlier selection).
/// Clicking an input port while armed yields a connection from the armed port,
/// unless the input sits on the armed port's own block, which cancels instead.
/// Input clicks while idle are ignored.
#[derive(Debug, Clone, Default)]
pub struct PortInteraction {
    state: InteractionState,
}

impl PortInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The armed output port, if any.
    pub fn pending(&self) -> Option<&PortRef> {
        match &self.state {
            InteractionState::Idle => None,
            InteractionState::Armed(source) => Some(source),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    /// Feeds one port click. Returns the connection the caller should offer to
    /// the graph store; the machine is back in `Idle` whenever one is returned.
    pub fn on_port_clicked(
        &mut self,
        block: &BlockId,
        port: &str,
        direction: PortDirection,
    ) -> Option<Connection> {
        if direction == PortDirection::Output {
            let source = PortRef::new(block.clone(), port);
            trace!("Armed output port {}", source);
            self.state = InteractionState::Armed(source);
            return None;
        }

        match std::mem::take(&mut self.state) {
            InteractionState::Idle => {
                trace!("Ignoring input click on {}.{} while idle", block, port);
                None
            }
            InteractionState::Armed(source) if &source.block == block => {
                trace!("Cancelled pending link from {} (same block)", source);
                None
            }
            InteractionState::Armed(source) => {
                Some(Connection::new(source, PortRef::new(block.clone(), port)))
            }
        }
    }

    /// Drops any pending selection.
    pub fn cancel(&mut self) {
        self.state = InteractionState::Idle;
    }
}
