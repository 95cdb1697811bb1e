use super::{BlockInstance, Connection, PortRef};
use crate::config::CanvasConfig;
use crate::template::BlockKind;

/// The canonical starter graph: `entry -> select -> loop -> write`.
pub fn starter_nodes(config: &CanvasConfig) -> Vec<BlockInstance> {
    [
        ("entry", BlockKind::Entry, config.padding, config.padding),
        ("select", BlockKind::Read, 280.0, 140.0),
        ("loop", BlockKind::Iterate, 560.0, 82.0),
        ("write", BlockKind::Emit, 860.0, 120.0),
    ]
    .into_iter()
    .map(|(id, kind, x, y)| {
        let (x, y) = config.clamp(x, y);
        BlockInstance::new(id, kind, x, y)
    })
    .collect()
}

pub fn starter_connections() -> Vec<Connection> {
    vec![
        Connection::new(PortRef::new("entry", "Output"), PortRef::new("select", "Rows")),
        Connection::new(PortRef::new("select", "Result"), PortRef::new("loop", "Table")),
        Connection::new(PortRef::new("loop", "Row"), PortRef::new("write", "Value")),
    ]
}
