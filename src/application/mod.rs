// Application wiring: load -> decode -> summarize -> optionally export.

use crate::domain::error::GraphResult;
use crate::domain::summary::GraphSummary;
use crate::infrastructure::GraphLoader;
use crate::ports::GraphExporter;
use std::path::Path;

pub struct AnalyzeUsecase<'a> {
    pub exporter: &'a dyn GraphExporter,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Decode the dump at `graph_path`, returning its summary. When
    /// `dump_to` is given the decoded graph is also written there.
    pub fn run(&self, graph_path: &Path, dump_to: Option<&Path>) -> GraphResult<GraphSummary> {
        let graph = GraphLoader::load(graph_path)?;
        let summary = GraphSummary::of(&graph);
        if let Some(out_path) = dump_to {
            self.exporter.export(&graph, out_path)?;
        }
        Ok(summary)
    }
}
