//! Graphviz DOT export.
//!
//! For eyeballing the traffic pattern, not for interchange: one node per
//! rank seen as a sender or a destination, one edge per message labeled with
//! its byte size. Lines are joined with LF regardless of host platform.

use crate::domain::error::GraphResult;
use crate::domain::graph::CommGraph;
use crate::ports::GraphExporter;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub struct DotExporter;

impl DotExporter {
    pub fn to_dot(graph: &CommGraph) -> String {
        let mut lines = Vec::new();

        lines.push("digraph CommGraph {".to_string());
        lines.push("    rankdir=LR;".to_string());
        lines.push("    node [shape=circle, fontname=\"Helvetica\", fontsize=12];".to_string());
        lines.push("    edge [fontname=\"Helvetica\", fontsize=10];".to_string());
        lines.push(String::new());

        // Destinations are not guaranteed to appear as senders, so collect
        // the full vertex set before emitting nodes.
        let mut ranks: BTreeSet<i32> = graph.processes.keys().copied().collect();
        for edges in graph.processes.values() {
            ranks.extend(edges.iter().map(|e| e.dest));
        }
        for rank in &ranks {
            lines.push(format!("    {} [label=\"rank {}\"];", rank, rank));
        }

        lines.push(String::new());

        for (pid, edges) in &graph.processes {
            for edge in edges {
                lines.push(format!(
                    "    {} -> {} [label=\"{} B\"];",
                    pid, edge.dest, edge.size
                ));
            }
        }

        lines.push("}".to_string());

        lines.join("\n")
    }
}

impl GraphExporter for DotExporter {
    fn export(&self, graph: &CommGraph, path: &Path) -> GraphResult<()> {
        fs::write(path, Self::to_dot(graph))?;
        Ok(())
    }
}
