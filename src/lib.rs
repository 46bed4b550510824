pub mod coloring;
pub mod config;
pub mod error;
pub mod graph;

pub use coloring::{
    dsatur::{color_graph_dsatur, ColoringStep, Dsatur, DsaturSolution, DsaturStatistics},
    ordering::VertexOrdering,
    Coloring,
};
pub use config::{AdjacencyPolicy, DsaturConfig, GraphConfig};
pub use error::{ColoringError, DsaturError, GraphError};
pub use graph::{Graph, GraphBuilder, VertexId};
