// Main library entry point for commgraph.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
