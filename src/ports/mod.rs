use crate::domain::error::GraphResult;
use crate::domain::graph::CommGraph;
use std::path::Path;

/// Seam for writing a decoded graph out in some text interchange format.
pub trait GraphExporter {
    fn export(&self, graph: &CommGraph, path: &Path) -> GraphResult<()>;
}
