use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use stitch::prelude::*;
use std::fs;

/// A CLI tool to generate random canvas event scripts for stitch-cli
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON script to
    #[arg(short, long, default_value = "generated_session.json")]
    output: String,

    /// The number of events to generate
    #[arg(short, long, default_value_t = 40)]
    events: usize,

    /// Largest drag delta on either axis
    #[arg(long, default_value_t = 400.0)]
    max_delta: f64,

    /// Percent chance that any event is a clear or reset
    #[arg(long, default_value_t = 5)]
    chaos: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.chaos > 100 {
        eprintln!("Error: --chaos ({}) must be between 0 and 100", cli.chaos);
        std::process::exit(1);
    }
    if !cli.max_delta.is_finite() || cli.max_delta <= 0.0 {
        eprintln!("Error: --max-delta must be a positive number");
        std::process::exit(1);
    }

    println!("Generating a session of {} events...", cli.events);

    // A shadow canvas keeps generated ids and ports valid.
    let mut canvas = Canvas::default();
    let mut script = Vec::with_capacity(cli.events);
    while script.len() < cli.events {
        for event in next_events(&mut rng, &canvas, &cli) {
            if script.len() == cli.events {
                break;
            }
            canvas.dispatch(event.clone());
            script.push(event);
        }
    }

    fs::write(&cli.output, serde_json::to_string_pretty(&script)?)?;
    println!(
        "Successfully generated and saved session to '{}' ({} blocks, {} links at the end)",
        cli.output,
        canvas.store().nodes().len(),
        canvas.store().connections().len()
    );
    Ok(())
}

/// Picks the next action: usually a link attempt, sometimes a new block or a drag.
fn next_events(rng: &mut ThreadRng, canvas: &Canvas, cli: &Cli) -> Vec<CanvasEvent> {
    if rng.random_range(0..100) < cli.chaos {
        return vec![if rng.random_bool(0.5) {
            CanvasEvent::ClearConnections
        } else {
            CanvasEvent::Reset
        }];
    }

    let nodes = canvas.store().nodes();
    match rng.random_range(0..10) {
        0..=2 => {
            let kind = *BlockKind::ALL.choose(rng).unwrap_or(&BlockKind::Emit);
            vec![CanvasEvent::AddNode { kind }]
        }
        3..=4 => match nodes.choose(rng) {
            Some(node) => vec![CanvasEvent::DragDelta {
                block: node.id().clone(),
                dx: rng.random_range(-cli.max_delta..=cli.max_delta),
                dy: rng.random_range(-cli.max_delta..=cli.max_delta),
            }],
            None => Vec::new(),
        },
        _ => link_attempt(rng, nodes),
    }
}

/// A click on a random output port followed by a click on a random input port.
fn link_attempt(rng: &mut ThreadRng, nodes: &[BlockInstance]) -> Vec<CanvasEvent> {
    let outputs: Vec<(&BlockInstance, &PortSpec)> = nodes
        .iter()
        .flat_map(|node| node.template().outputs().map(move |port| (node, port)))
        .collect();
    let inputs: Vec<(&BlockInstance, &PortSpec)> = nodes
        .iter()
        .flat_map(|node| node.template().inputs().map(move |port| (node, port)))
        .collect();

    match (outputs.choose(rng), inputs.choose(rng)) {
        (Some((source, out_port)), Some((target, in_port))) => vec![
            CanvasEvent::PortClicked {
                block: source.id().clone(),
                port: out_port.label.to_string(),
                direction: PortDirection::Output,
            },
            CanvasEvent::PortClicked {
                block: target.id().clone(),
                port: in_port.label.to_string(),
                direction: PortDirection::Input,
            },
        ],
        _ => Vec::new(),
    }
}
