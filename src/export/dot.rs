//! DOT format export for Graphviz visualization.
//!
//! Generates Graphviz DOT for rendering graphs as images. When nodes carry
//! positions they can be pinned with `pos="x,y!"` for the `neato` and `fdp`
//! layout engines.

use crate::graph::{DirectedGraph, NodeId, Weight};
use crate::Result;
use std::collections::HashMap;

const DEFAULT_PALETTE: [&str; 8] = [
    "#90CAF9", "#FFE082", "#CE93D8", "#A5D6A7", "#FFAB91", "#BCAAA4", "#80DEEA", "#F48FB1",
];

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph name written after `digraph`
    pub name: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Label edges with their weights
    pub show_weights: bool,
    /// Decimal places for weight labels
    pub weight_precision: usize,
    /// Emit pinned `pos` attributes for nodes that have a position
    pub use_positions: bool,
    /// Node groups to colour, typically the output of
    /// [`DirectedGraph::all_components`]
    pub components: Option<Vec<Vec<NodeId>>>,
    /// Fill colours cycled across `components` (hex color codes)
    pub palette: Vec<String>,
    /// Fill colour for nodes outside any group
    pub default_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            name: "G".to_string(),
            rankdir: "LR".to_string(),
            show_weights: true,
            weight_precision: 2,
            use_positions: false,
            components: None,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            default_color: "#E0E0E0".to_string(),
        }
    }
}

impl DotOptions {
    /// Set the layout direction.
    pub fn with_rankdir(mut self, rankdir: impl Into<String>) -> Self {
        self.rankdir = rankdir.into();
        self
    }

    /// Turn weight labels on or off.
    pub fn with_weights(mut self, show: bool) -> Self {
        self.show_weights = show;
        self
    }

    /// Set decimal places for weight labels.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.weight_precision = precision;
        self
    }

    /// Turn pinned node positions on or off.
    pub fn with_positions(mut self, use_positions: bool) -> Self {
        self.use_positions = use_positions;
        self
    }

    /// Colour nodes by group.
    pub fn with_components(mut self, components: Vec<Vec<NodeId>>) -> Self {
        self.components = Some(components);
        self
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &DirectedGraph) -> Result<String> {
    export_dot_styled(graph, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &DirectedGraph, options: DotOptions) -> Result<String> {
    let colors = component_colors(&options);
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "digraph \"{}\" {{\n",
        escape_dot_label(&options.name)
    ));
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    for node in graph.nodes() {
        let id = node.id();
        let color = colors
            .get(&id)
            .map(String::as_str)
            .unwrap_or(options.default_color.as_str());

        let pos = match node.position() {
            Some(p) if options.use_positions => format!(", pos=\"{},{}!\"", p.x, p.y),
            _ => String::new(),
        };

        output.push_str(&format!(
            "    n{id} [label=\"{id}\", fillcolor=\"{color}\"{pos}];\n"
        ));
    }

    output.push('\n');

    for node in graph.nodes() {
        let mut targets: Vec<_> = node.out_edges().iter().collect();
        targets.sort_by_key(|(id, _)| **id);

        for (target, weight) in targets {
            let label = if options.show_weights {
                format!(" [label=\"{}\"]", format_weight(*weight, options.weight_precision))
            } else {
                String::new()
            };
            output.push_str(&format!("    n{} -> n{target}{label};\n", node.id()));
        }
    }

    output.push_str("}\n");

    Ok(output)
}

/// Map each grouped node to its palette colour
fn component_colors(options: &DotOptions) -> HashMap<NodeId, String> {
    let mut colors = HashMap::new();
    let Some(components) = &options.components else {
        return colors;
    };
    if options.palette.is_empty() {
        return colors;
    }

    for (index, component) in components.iter().enumerate() {
        let color = &options.palette[index % options.palette.len()];
        for id in component {
            colors.insert(*id, color.clone());
        }
    }
    colors
}

/// Format a weight label with fixed precision
fn format_weight(weight: Weight, precision: usize) -> String {
    format!("{weight:.precision$}")
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
