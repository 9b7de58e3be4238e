//! Scalar summary of a communication graph.

use crate::domain::graph::CommGraph;
use std::fmt;

/// The two counts reported for a decoded graph. Both fields are public so
/// tests and callers can read them without scraping console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    pub process_count: usize,
    pub message_count: usize,
}

impl GraphSummary {
    pub fn of(graph: &CommGraph) -> Self {
        Self {
            process_count: graph.process_count(),
            message_count: graph.message_count(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Communication graph summary:")?;
        writeln!(f, "  {} processes", self.process_count)?;
        write!(f, "  {} messages", self.message_count)
    }
}
