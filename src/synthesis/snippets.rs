use crate::template::BlockKind;
use ahash::AHashMap;

/// Shown when a graph produces no outline lines.
pub const PLACEHOLDER: &str = "Connect ports to generate a stitched ABAP outline.";

/// Master macro tying each block kind to its opening snippet and the closing
/// lines emitted after its children.
macro_rules! define_snippets {
    ( $( ($kind:path, $snippet:expr, [ $( $closer:expr ),* ]) ),* $(,)? ) => {
        /// Registers the built-in ABAP snippet for every kind.
        pub(super) fn register_default_snippets(registry: &mut AHashMap<BlockKind, String>) {
            $( registry.insert($kind, $snippet.to_string()); )*
        }

        /// Lines emitted at the opening line's indentation once all children are done.
        pub(super) fn closing_lines(kind: BlockKind) -> &'static [&'static str] {
            match kind {
                $( $kind => &[ $( $closer ),* ], )*
            }
        }
    };
}

define_snippets! {
    (BlockKind::Entry, "START-OF-SELECTION.", []),
    (BlockKind::Read, "  SELECT * FROM mara INTO TABLE @DATA(lt_rows).", []),
    (BlockKind::Iterate, "  LOOP AT lt_rows INTO DATA(ls_row).", ["ENDLOOP."]),
    (BlockKind::Branch, "    IF ls_row IS NOT INITIAL.", ["ELSE.", "ENDIF."]),
    (BlockKind::Emit, "      WRITE / ls_row.", []),
}
