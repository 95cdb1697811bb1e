use clap::Parser;
use stitch::canvas::script::{Command, HELP, load_script, parse_command};
use stitch::prelude::*;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Replay or interactively drive a block canvas and print its ABAP outline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON event script to replay
    script_path: Option<String>,

    /// Path to a canvas config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Start from an empty canvas instead of the starter graph
    #[arg(long)]
    empty: bool,

    /// Print link geometry after the outline
    #[arg(long)]
    links: bool,

    /// Print the final graph as JSON
    #[arg(long)]
    snapshot: bool,

    /// Run in interactive mode, reading commands from stdin
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CanvasConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => CanvasConfig::default(),
    };
    let mut canvas = if cli.empty {
        Canvas::from_store(GraphStore::empty(config))
    } else {
        Canvas::new(config)
    };

    if let Some(path) = &cli.script_path {
        run_script(&mut canvas, path);
    }

    if cli.human {
        run_interactive(&mut canvas);
    } else if cli.script_path.is_none() {
        println!("No script provided. Showing the starting canvas.");
    }

    print_canvas(&canvas);
    if cli.links {
        print_links(&canvas);
    }
    if cli.snapshot {
        print_snapshot(&canvas);
    }
}

fn run_script(canvas: &mut Canvas, path: &str) {
    let events = load_script(path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("Replaying {} events from '{}'...", events.len(), path);

    let start = Instant::now();
    for (index, event) in events.into_iter().enumerate() {
        let outcome = canvas.dispatch(event);
        println!("  {:>4}: {}", index + 1, outcome);
    }
    println!("Replay finished in {:?}", start.elapsed());
}

/// Runs a line-oriented session until `quit` or end of input.
fn run_interactive(canvas: &mut Canvas) {
    println!("--- Stitch Interactive Mode ---");
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", canvas.status());
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Dispatch(event)) => println!("-> {}", canvas.dispatch(event)),
            Ok(Command::Click { block, port }) => println!("-> {}", canvas.click(&block, &port)),
            Ok(Command::Show) => print_canvas(canvas),
            Ok(Command::Links) => print_links(canvas),
            Ok(Command::Snapshot) => print_snapshot(canvas),
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn print_canvas(canvas: &Canvas) {
    let store = canvas.store();
    println!("\n--- Blocks ({}) ---", store.nodes().len());
    for node in store.nodes() {
        let template = node.template();
        let ports = template
            .ports
            .iter()
            .map(|port| format!("{}({})", port.label, port.direction))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {:<14} {:<20} ({:>6.1}, {:>6.1})  [{}]",
            node.id().as_str(),
            template.title,
            node.x(),
            node.y(),
            ports
        );
    }

    println!("\n--- Links ({}) ---", store.connections().len());
    for connection in store.connections() {
        println!("  {}", connection);
    }

    println!("\n--- ABAP Outline ---");
    println!("{}", canvas.outline());
}

fn print_links(canvas: &Canvas) {
    println!("\n--- Link Geometry ---");
    for segment in canvas.links() {
        println!(
            "  ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            segment.from.x, segment.from.y, segment.to.x, segment.to.y
        );
    }
}

fn print_snapshot(canvas: &Canvas) {
    match serde_json::to_string_pretty(&canvas.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize snapshot: {}", e),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
