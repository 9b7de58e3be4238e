//! Communication graph structures.
//!
//! A `CommGraph` maps each MPI rank to the ordered list of messages it sent.
//! Destination ids are not required to appear as keys themselves: the graph
//! is not closed over its vertex set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One outgoing message: destination rank and payload size in bytes.
///
/// Serialized as a `[dest, size]` pair so the JSON dump matches the
/// interchange format emitted by the original analyser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i64)", into = "(i32, i64)")]
pub struct MessageEdge {
    pub dest: i32,
    pub size: i64,
}

impl MessageEdge {
    pub fn new(dest: i32, size: i64) -> Self {
        Self { dest, size }
    }
}

impl From<(i32, i64)> for MessageEdge {
    fn from((dest, size): (i32, i64)) -> Self {
        Self { dest, size }
    }
}

impl From<MessageEdge> for (i32, i64) {
    fn from(edge: MessageEdge) -> Self {
        (edge.dest, edge.size)
    }
}

/// The decoded communication graph: process id -> ordered outgoing edges.
///
/// Edge order within a list is parse order. Key order carries no meaning, so
/// a `BTreeMap` keeps iteration (and the JSON dump) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommGraph {
    pub processes: BTreeMap<i32, Vec<MessageEdge>>,
}

impl CommGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a process record. A process re-declared in a later record
    /// replaces the earlier entry (last write wins).
    pub fn insert(&mut self, pid: i32, edges: Vec<MessageEdge>) {
        self.processes.insert(pid, edges);
    }

    /// Number of distinct process-id keys.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Total number of edges across all processes.
    pub fn message_count(&self) -> usize {
        self.processes.values().map(|edges| edges.len()).sum()
    }
}
