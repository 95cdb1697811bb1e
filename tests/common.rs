//! Common test utilities for building graphs and canvases.
use stitch::prelude::*;

/// Shorthand for an output-to-input connection.
#[allow(dead_code)]
pub fn link(from: &str, from_port: &str, to: &str, to_port: &str) -> Connection {
    Connection::new(PortRef::new(from, from_port), PortRef::new(to, to_port))
}

/// Nodes `A` (entry), `B` (emit) and `C` (read), for fan-out tests.
///
/// Wiring: `A.Output -> B.Value`, `A.Output -> C.Rows`.
#[allow(dead_code)]
pub fn create_fan_out_graph() -> (Vec<BlockInstance>, Vec<Connection>) {
    let nodes = vec![
        BlockInstance::new("A", BlockKind::Entry, 18.0, 18.0),
        BlockInstance::new("B", BlockKind::Emit, 300.0, 18.0),
        BlockInstance::new("C", BlockKind::Read, 300.0, 200.0),
    ];
    let connections = vec![
        link("A", "Output", "B", "Value"),
        link("A", "Output", "C", "Rows"),
    ];
    (nodes, connections)
}

/// Three blocks wired in a ring `A -> B -> C -> A`, so none of them is a root.
#[allow(dead_code)]
pub fn create_cycle_graph() -> (Vec<BlockInstance>, Vec<Connection>) {
    let nodes = vec![
        BlockInstance::new("A", BlockKind::Iterate, 18.0, 18.0),
        BlockInstance::new("B", BlockKind::Branch, 300.0, 18.0),
        BlockInstance::new("C", BlockKind::Read, 600.0, 18.0),
    ];
    let connections = vec![
        link("A", "Row", "B", "Condition"),
        link("B", "Then", "C", "Rows"),
        link("C", "Result", "A", "Table"),
    ];
    (nodes, connections)
}

/// An empty canvas using the default config.
#[allow(dead_code)]
pub fn empty_canvas() -> Canvas {
    Canvas::from_store(GraphStore::empty(CanvasConfig::default()))
}

/// Clicks `from.from_port` then `to.to_port` on the canvas.
#[allow(dead_code)]
pub fn wire(canvas: &mut Canvas, from: &BlockId, from_port: &str, to: &BlockId, to_port: &str) -> Outcome {
    canvas.click(from, from_port);
    canvas.click(to, to_port)
}

/// The outline the starter graph produces.
#[allow(dead_code)]
pub const STARTER_OUTLINE: &str = "\
START-OF-SELECTION.
    SELECT * FROM mara INTO TABLE @DATA(lt_rows).
      LOOP AT lt_rows INTO DATA(ls_row).
            WRITE / ls_row.
    ENDLOOP.";
