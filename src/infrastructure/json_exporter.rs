//! JSON interchange export.
//!
//! The dump is one compact JSON object keyed by process id (stringified, as
//! JSON objects require), each value an array of `[dest, size]` pairs. Sizes
//! are exact integers since decoding already truncated them. The file is
//! written as a single line, so newline convention is LF-only by
//! construction on every platform.

use crate::domain::error::GraphResult;
use crate::domain::graph::CommGraph;
use crate::ports::GraphExporter;
use std::fs;
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    pub fn to_json(graph: &CommGraph) -> GraphResult<String> {
        let json = serde_json::to_string(graph).map_err(std::io::Error::from)?;
        Ok(json)
    }
}

impl GraphExporter for JsonExporter {
    fn export(&self, graph: &CommGraph, path: &Path) -> GraphResult<()> {
        let json = Self::to_json(graph)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::MessageEdge;

    #[test]
    fn test_json_shape() {
        let mut graph = CommGraph::new();
        graph.insert(0, vec![MessageEdge::new(1, 128), MessageEdge::new(2, 64)]);
        graph.insert(5, vec![]);

        let json = JsonExporter::to_json(&graph).unwrap();
        assert_eq!(json, r#"{"0":[[1,128],[2,64]],"5":[]}"#);
    }

    #[test]
    fn test_json_reparses_to_equal_graph() {
        let mut graph = CommGraph::new();
        graph.insert(3, vec![MessageEdge::new(7, 4096)]);

        let json = JsonExporter::to_json(&graph).unwrap();
        let back: CommGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }
}
