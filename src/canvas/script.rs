//! Event scripts and the line-oriented command language used by `stitch-cli`.

use super::CanvasEvent;
use crate::error::ScriptError;
use crate::graph::BlockId;
use crate::template::BlockKind;
use std::fs;

/// Parses a JSON array of events, e.g. `[{"event": "add_node", "kind": "read"}]`.
pub fn parse_script(json: &str) -> Result<Vec<CanvasEvent>, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads an event script from a JSON file.
pub fn load_script(path: &str) -> Result<Vec<CanvasEvent>, ScriptError> {
    let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_script(&content)
}

/// One line of an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(CanvasEvent),
    /// A port click whose direction is looked up from the block's template.
    Click { block: BlockId, port: String },
    Show,
    Links,
    Snapshot,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <kind>              place a block (entry, read, iterate, emit, branch)
  click <block> <port>    click a port on a block
  move <block> <dx> <dy>  drag a block by a delta
  clear                   remove all links
  reset                   restore the starter graph
  show                    print blocks, links and the outline
  links                   print link geometry
  snapshot                print the graph as JSON
  help                    show this help
  quit                    leave the session";

/// Parses a single interactive command.
pub fn parse_command(line: &str) -> Result<Command, ScriptError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Err(ScriptError::EmptyCommand);
    };

    let command = match command.to_ascii_lowercase().as_str() {
        "add" => {
            let kind = parts.next().ok_or(ScriptError::MissingArgument {
                command: "add",
                expected: "<kind>",
            })?;
            Command::Dispatch(CanvasEvent::AddNode {
                kind: kind.parse::<BlockKind>()?,
            })
        }
        "click" => {
            let missing = ScriptError::MissingArgument {
                command: "click",
                expected: "<block> <port>",
            };
            match (parts.next(), parts.next()) {
                (Some(block), Some(port)) => Command::Click {
                    block: BlockId::from(block),
                    port: port.to_string(),
                },
                _ => return Err(missing),
            }
        }
        "move" => match (parts.next(), parts.next(), parts.next()) {
            (Some(block), Some(dx), Some(dy)) => Command::Dispatch(CanvasEvent::DragDelta {
                block: BlockId::from(block),
                dx: parse_number("dx", dx)?,
                dy: parse_number("dy", dy)?,
            }),
            _ => {
                return Err(ScriptError::MissingArgument {
                    command: "move",
                    expected: "<block> <dx> <dy>",
                });
            }
        },
        "clear" => Command::Dispatch(CanvasEvent::ClearConnections),
        "reset" => Command::Dispatch(CanvasEvent::Reset),
        "show" => Command::Show,
        "links" => Command::Links,
        "snapshot" => Command::Snapshot,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn parse_number(argument: &'static str, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .map_err(|_| ScriptError::InvalidNumber {
            argument,
            value: value.to_string(),
        })
}
