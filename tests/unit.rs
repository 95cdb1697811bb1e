//! Unit tests for templates, configuration, geometry, command parsing and errors.
use stitch::canvas::script::{Command, parse_command};
use stitch::prelude::*;

#[test]
fn test_library_order_and_ports() {
    let kinds: Vec<BlockKind> = library().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, BlockKind::ALL.to_vec());

    for kind in BlockKind::ALL {
        let template = template(kind);
        assert_eq!(template.kind, kind);
        let mut labels: Vec<&str> = template.ports.iter().map(|p| p.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), template.ports.len(), "duplicate port on {}", kind);
    }

    let read = template(BlockKind::Read);
    assert_eq!(read.port("Result").map(|(i, _)| i), Some(2));
    assert_eq!(read.inputs().count(), 2);
    assert_eq!(read.outputs().map(|p| p.label).collect::<Vec<_>>(), vec!["Result"]);
    assert!(read.port("Missing").is_none());
}

#[test]
fn test_block_kind_parsing() {
    assert_eq!("branch".parse::<BlockKind>().ok(), Some(BlockKind::Branch));
    assert_eq!(" Emit ".parse::<BlockKind>().ok(), Some(BlockKind::Emit));
    assert_eq!(BlockKind::Iterate.to_string(), "iterate");

    let err = "goto".parse::<BlockKind>().unwrap_err();
    assert_eq!(err, TemplateError::UnknownKind("goto".to_string()));
    assert!(err.to_string().contains("goto"));
}

#[test]
fn test_config_defaults_and_partial_json() {
    let config = CanvasConfig::from_json(r#"{"max_x": 800.0}"#).expect("valid config");
    assert_eq!(config.max_x, 800.0);
    assert_eq!(config.node_width, 240.0);
    assert_eq!(config.clamp(-5.0, 9_999.0), (18.0, 720.0));
}

#[test]
fn test_config_rejects_invalid_bounds() {
    let err = CanvasConfig::from_json(r#"{"padding": 50.0, "max_y": 10.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "max_y", .. }));

    let err = CanvasConfig::from_json(r#"{"cascade_rows": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "cascade_rows", .. }));

    let err = CanvasConfig::from_json(r#"{"node_width": -1.0}"#).unwrap_err();
    assert!(err.to_string().contains("node_width"));

    let err = CanvasConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, ConfigError::JsonParseError(_)));
}

#[test]
fn test_config_rejects_non_positive_cascade_step() {
    let err = CanvasConfig::from_json(r#"{"cascade_step": 0.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "cascade_step", .. }));
}

#[test]
fn test_unvalidated_config_does_not_panic() {
    let inverted = CanvasConfig {
        padding: 100.0,
        max_x: 50.0,
        ..CanvasConfig::default()
    };
    assert_eq!(inverted.clamp(75.0, 400.0), (50.0, 400.0));

    let canvas = Canvas::new(inverted.clone());
    assert!(canvas.store().nodes().iter().all(|n| n.x() == 50.0));

    let mut store = GraphStore::empty(inverted);
    store.add_node(template(BlockKind::Emit));
    store.move_node("missing", 1.0, 1.0);
    assert_eq!(store.nodes().len(), 1);

    let nan_padding = CanvasConfig {
        padding: f64::NAN,
        ..CanvasConfig::default()
    };
    assert_eq!(nan_padding.clamp(-5.0, 9_999.0), (-5.0, 720.0));
    let mut canvas = Canvas::new(nan_padding);
    let id = canvas.add_node(BlockKind::Read);
    assert_eq!(canvas.drag(&id, 5_000.0, 0.0), Outcome::Moved(id.clone()));
    assert_eq!(canvas.store().node(id.as_str()).map(|n| n.x()), Some(1200.0));
}

#[test]
fn test_config_missing_file() {
    let err = CanvasConfig::from_file("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_anchor_sides_and_rows() {
    let config = CanvasConfig::default();
    let node = BlockInstance::new("if", BlockKind::Branch, 100.0, 50.0);

    assert_eq!(
        anchor(&config, &node, "Condition", PortDirection::Input),
        Some(Point { x: 100.0, y: 124.0 })
    );
    assert_eq!(
        anchor(&config, &node, "Else", PortDirection::Output),
        Some(Point { x: 340.0, y: 188.0 })
    );
    assert_eq!(anchor(&config, &node, "Nope", PortDirection::Output), None);
}

#[test]
fn test_link_segments_skip_missing_endpoints() {
    let config = CanvasConfig::default();
    let nodes = vec![
        BlockInstance::new("a", BlockKind::Entry, 18.0, 18.0),
        BlockInstance::new("b", BlockKind::Emit, 400.0, 18.0),
    ];
    let connections = vec![
        Connection::new(PortRef::new("a", "Event"), PortRef::new("b", "Value")),
        Connection::new(PortRef::new("a", "Event"), PortRef::new("gone", "Value")),
        Connection::new(PortRef::new("a", "Bogus"), PortRef::new("b", "Value")),
    ];

    let segments = link_segments(&config, &nodes, &connections);
    assert_eq!(
        segments,
        vec![LinkSegment {
            from: Point { x: 258.0, y: 92.0 },
            to: Point { x: 400.0, y: 92.0 },
        }]
    );
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        parse_command("add read").ok(),
        Some(Command::Dispatch(CanvasEvent::AddNode {
            kind: BlockKind::Read
        }))
    );
    assert_eq!(
        parse_command("  click loop Row ").ok(),
        Some(Command::Click {
            block: BlockId::from("loop"),
            port: "Row".to_string(),
        })
    );
    assert_eq!(
        parse_command("move write -10 2.5").ok(),
        Some(Command::Dispatch(CanvasEvent::DragDelta {
            block: BlockId::from("write"),
            dx: -10.0,
            dy: 2.5,
        }))
    );
    assert_eq!(parse_command("RESET").ok(), Some(Command::Dispatch(CanvasEvent::Reset)));
    assert_eq!(parse_command("quit").ok(), Some(Command::Quit));
}

#[test]
fn test_parse_command_errors() {
    assert!(matches!(parse_command("   "), Err(ScriptError::EmptyCommand)));
    assert!(matches!(parse_command("jump"), Err(ScriptError::UnknownCommand(_))));
    assert!(matches!(
        parse_command("click loop"),
        Err(ScriptError::MissingArgument { command: "click", .. })
    ));
    assert!(matches!(
        parse_command("move loop x 1"),
        Err(ScriptError::InvalidNumber { argument: "dx", .. })
    ));
    assert!(matches!(
        parse_command("add goto"),
        Err(ScriptError::Template(TemplateError::UnknownKind(_)))
    ));
}

#[test]
fn test_outcome_display() {
    let connection = Connection::new(PortRef::new("a", "Row"), PortRef::new("b", "Value"));
    assert_eq!(
        Outcome::Connected(connection).to_string(),
        "connected a.Row -> b.Value"
    );
    assert_eq!(Outcome::Ignored.to_string(), "ignored");
}
