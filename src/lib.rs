//! # Stitch - Block Graphs to ABAP Outlines
//!
//! **Stitch** is the model behind a visual programming canvas: users place typed
//! blocks, wire output ports to input ports, and read a live ABAP outline
//! synthesized from the resulting graph.
//!
//! ## Core Workflow
//!
//! 1.  **Pick Templates**: The [`template`] catalog defines the five block kinds and their ports.
//! 2.  **Edit the Graph**: A [`GraphStore`](graph::GraphStore) owns the placed blocks and their connections.
//! 3.  **Wire Ports**: The [`PortInteraction`](interaction::PortInteraction) state machine turns
//!     output-then-input click sequences into connections.
//! 4.  **Synthesize**: The [`Synthesizer`](synthesis::Synthesizer) walks the graph from every
//!     block without incoming links and renders an indented outline.
//!
//! The [`Canvas`](canvas::Canvas) ties these together behind a single event type and
//! exposes the derived views (outline, link geometry, status hint).
//!
//! ## Quick Start
//!
//! ```rust
//! use stitch::prelude::*;
//!
//! let mut canvas = Canvas::default();
//!
//! // Hang a branch off the loop's row output.
//! let branch = canvas.add_node(BlockKind::Branch);
//! canvas.click(&BlockId::from("loop"), "Row");
//! canvas.click(&branch, "Condition");
//!
//! let outline = canvas.outline();
//! assert!(outline.starts_with("START-OF-SELECTION."));
//! assert!(outline.contains("ENDIF."));
//! println!("{}", outline);
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod interaction;
pub mod prelude;
pub mod synthesis;
pub mod template;
