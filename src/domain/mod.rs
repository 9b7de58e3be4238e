// Domain model: the communication graph, its binary decoder, and the summary.

pub mod decode;
pub mod error;
pub mod graph;
pub mod summary;
