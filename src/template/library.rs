use super::{BlockKind, BlockTemplate, PortSpec};

static LIBRARY: [BlockTemplate; 5] = [
    BlockTemplate {
        kind: BlockKind::Entry,
        title: "START-OF-SELECTION",
        description: "Entry point",
        ports: &[PortSpec::output("Event"), PortSpec::output("Output")],
    },
    BlockTemplate {
        kind: BlockKind::Read,
        title: "SELECT",
        description: "Read table",
        ports: &[
            PortSpec::input("Rows"),
            PortSpec::input("Fields"),
            PortSpec::output("Result"),
        ],
    },
    BlockTemplate {
        kind: BlockKind::Iterate,
        title: "LOOP AT",
        description: "Iterate internal table",
        ports: &[
            PortSpec::input("Table"),
            PortSpec::output("Row"),
            PortSpec::output("End"),
        ],
    },
    BlockTemplate {
        kind: BlockKind::Emit,
        title: "WRITE",
        description: "Display output",
        ports: &[PortSpec::input("Value")],
    },
    BlockTemplate {
        kind: BlockKind::Branch,
        title: "IF / ELSE",
        description: "Branch on condition",
        ports: &[
            PortSpec::input("Condition"),
            PortSpec::output("Then"),
            PortSpec::output("Else"),
        ],
    },
];

/// The whole catalog, in toolbar order.
pub fn library() -> &'static [BlockTemplate] {
    &LIBRARY
}

/// Returns the shared template for `kind`.
pub fn template(kind: BlockKind) -> &'static BlockTemplate {
    // LIBRARY is laid out in `BlockKind::ALL` order.
    match kind {
        BlockKind::Entry => &LIBRARY[0],
        BlockKind::Read => &LIBRARY[1],
        BlockKind::Iterate => &LIBRARY[2],
        BlockKind::Emit => &LIBRARY[3],
        BlockKind::Branch => &LIBRARY[4],
    }
}
