//! Turns a block graph into an indented ABAP outline.
//!
//! The outline is a pure function of the node list and the connection list:
//!
//! 1. Connections whose endpoint blocks are missing are dropped.
//! 2. Every block with no incoming connection is a root, taken in node order.
//! 3. Each root is walked depth first along outgoing connections (in the order
//!    they were added). A block is emitted the first time it is reached and
//!    never again, so fan-in prints once and cycles terminate.
//! 4. Scope-opening kinds emit their closing lines after all of their children,
//!    at their own indentation.
//!
//! Blocks reachable only through a cycle have no root and are never emitted.

mod snippets;

pub use snippets::PLACEHOLDER;

use crate::graph::{BlockInstance, Connection, GraphSnapshot};
use crate::template::BlockKind;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use log::trace;
use snippets::{closing_lines, register_default_snippets};

/// Spaces per depth level.
const INDENT_WIDTH: usize = 2;

pub struct Synthesizer {
    snippets: AHashMap<BlockKind, String>,
    placeholder: String,
}

pub struct SynthesizerBuilder {
    snippets: AHashMap<BlockKind, String>,
    placeholder: String,
}

impl SynthesizerBuilder {
    pub fn new() -> Self {
        let mut snippets = AHashMap::new();
        register_default_snippets(&mut snippets);
        Self {
            snippets,
            placeholder: PLACEHOLDER.to_string(),
        }
    }

    /// Replaces the opening snippet for `kind`.
    pub fn with_snippet(mut self, kind: BlockKind, snippet: impl Into<String>) -> Self {
        self.snippets.insert(kind, snippet.into());
        self
    }

    /// Removes the snippet for `kind`; such blocks then print their template title.
    pub fn without_snippet(mut self, kind: BlockKind) -> Self {
        self.snippets.remove(&kind);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn build(self) -> Synthesizer {
        Synthesizer {
            snippets: self.snippets,
            placeholder: self.placeholder,
        }
    }
}

impl Default for SynthesizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        SynthesizerBuilder::new().build()
    }
}

/// Pending work for the depth-first walk.
enum Frame<'a> {
    Enter(&'a str, usize),
    Close(BlockKind, usize),
}

impl Synthesizer {
    pub fn builder() -> SynthesizerBuilder {
        SynthesizerBuilder::new()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Renders the outline, or the placeholder when no line is produced.
    pub fn synthesize(&self, nodes: &[BlockInstance], connections: &[Connection]) -> String {
        let lines = self.lines(nodes, connections);
        if lines.is_empty() {
            self.placeholder.clone()
        } else {
            lines.into_iter().join("\n")
        }
    }

    pub fn synthesize_snapshot(&self, snapshot: &GraphSnapshot) -> String {
        self.synthesize(&snapshot.nodes, &snapshot.connections)
    }

    /// Produces the outline lines in emission order, indentation included.
    pub fn lines(&self, nodes: &[BlockInstance], connections: &[Connection]) -> Vec<String> {
        let mut by_id: AHashMap<&str, &BlockInstance> = AHashMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.entry(node.id().as_str()).or_insert(node);
        }

        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut in_degree: AHashMap<&str, usize> = AHashMap::new();
        for connection in connections {
            let source = connection.source.block.as_str();
            let target = connection.target.block.as_str();
            if !by_id.contains_key(source) || !by_id.contains_key(target) {
                trace!("Skipping dangling connection {}", connection);
                continue;
            }
            adjacency.entry(source).or_default().push(target);
            *in_degree.entry(target).or_default() += 1;
        }

        let roots = nodes
            .iter()
            .map(|node| node.id().as_str())
            .filter(|id| in_degree.get(id).copied().unwrap_or(0) == 0);

        let mut visited: AHashSet<&str> = AHashSet::with_capacity(nodes.len());
        let mut lines = Vec::new();
        let mut stack = Vec::new();

        for root in roots {
            stack.push(Frame::Enter(root, 0));
            while let Some(frame) = stack.pop() {
                match frame {
                    Frame::Enter(id, depth) => {
                        if !visited.insert(id) {
                            continue;
                        }
                        let Some(node) = by_id.get(id) else {
                            continue;
                        };
                        lines.push(format!("{}{}", indent(depth), self.snippet_for(node)));
                        stack.push(Frame::Close(node.kind(), depth));
                        if let Some(neighbors) = adjacency.get(id) {
                            // Reversed so the first-added connection is walked first.
                            stack.extend(
                                neighbors
                                    .iter()
                                    .rev()
                                    .map(|&neighbor| Frame::Enter(neighbor, depth + 1)),
                            );
                        }
                    }
                    Frame::Close(kind, depth) => {
                        let prefix = indent(depth);
                        lines.extend(
                            closing_lines(kind)
                                .iter()
                                .map(|closer| format!("{}{}", prefix, closer)),
                        );
                    }
                }
            }
        }
        lines
    }

    fn snippet_for<'a>(&'a self, node: &BlockInstance) -> &'a str {
        self.snippets
            .get(&node.kind())
            .map(String::as_str)
            .unwrap_or(node.template().title)
    }
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}

/// Renders the outline with the built-in ABAP snippets.
pub fn synthesize(nodes: &[BlockInstance], connections: &[Connection]) -> String {
    Synthesizer::default().synthesize(nodes, connections)
}
