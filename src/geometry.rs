//! Resolves port anchor points for the link-drawing layer.
//!
//! Purely derived from a graph snapshot and recomputed on every call; the
//! outline synthesizer never looks at positions.

use crate::config::CanvasConfig;
use crate::graph::{BlockInstance, Connection};
use crate::template::PortDirection;
use ahash::AHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A straight link between an output anchor and an input anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkSegment {
    pub from: Point,
    pub to: Point,
}

/// Returns the anchor of `port_label` on `instance`, or `None` if the template has no such port.
///
/// Output anchors sit on the block's right edge, input anchors on its left edge.
/// Rows stack downwards in template port order.
pub fn anchor(
    config: &CanvasConfig,
    instance: &BlockInstance,
    port_label: &str,
    side: PortDirection,
) -> Option<Point> {
    let (ordinal, _) = instance.template().port(port_label)?;
    let x = match side {
        PortDirection::Output => instance.x() + config.node_width,
        PortDirection::Input => instance.x(),
    };
    let y = instance.y() + config.port_base_offset + ordinal as f64 * config.port_row_spacing;
    Some(Point { x, y })
}

/// Resolves every connection into a drawable segment, in connection order.
///
/// Connections whose blocks or ports cannot be found are skipped.
pub fn link_segments(
    config: &CanvasConfig,
    nodes: &[BlockInstance],
    connections: &[Connection],
) -> Vec<LinkSegment> {
    let by_id: AHashMap<&str, &BlockInstance> =
        nodes.iter().map(|node| (node.id().as_str(), node)).collect();

    connections
        .iter()
        .filter_map(|connection| {
            let source = by_id.get(connection.source.block.as_str())?;
            let target = by_id.get(connection.target.block.as_str())?;
            Some(LinkSegment {
                from: anchor(config, source, &connection.source.port, PortDirection::Output)?,
                to: anchor(config, target, &connection.target.port, PortDirection::Input)?,
            })
        })
        .collect()
}
