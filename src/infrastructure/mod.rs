// Infrastructure implementations for commgraph.

pub mod dot_exporter;
pub mod graph_loader;
pub mod json_exporter;

pub use dot_exporter::DotExporter;
pub use graph_loader::GraphLoader;
pub use json_exporter::JsonExporter;
