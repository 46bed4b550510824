use thiserror::Error;

/// Custom error type for dsatur
///
/// This error type is used to wrap all possible errors that can occur when building
/// or coloring a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsaturError {
    #[error("Graph error: {0}")]
    GraphError(#[from] GraphError),
    #[error("Coloring error: {0}")]
    ColoringError(#[from] ColoringError),
    #[error("Error: {0}")]
    Other(String),
}

/// Possible errors caused by a malformed graph description
///
/// Vertex identifiers are stored in their `Display` form so that the error type does not
/// depend on the vertex type of the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Cannot color a graph with no vertices")]
    EmptyGraph,
    #[error("Vertex {vertex} lists neighbor {neighbor}, which is not a vertex of the graph")]
    UnknownNeighbor { vertex: String, neighbor: String },
    #[error("Vertex {vertex} lists itself as a neighbor")]
    SelfLoop { vertex: String },
    #[error("Vertex {vertex} lists neighbor {neighbor}, but {neighbor} does not list {vertex}")]
    AsymmetricEdge { vertex: String, neighbor: String },
    #[error("Vertex {vertex} is declared more than once")]
    DuplicateVertex { vertex: String },
    #[error("Graph has {count} vertices, more than the maximum of {max}")]
    TooManyVertices { count: usize, max: usize },
}

/// Possible errors found when checking a color assignment against a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    #[error("Adjacent vertices {u} and {v} share color {color}")]
    ImproperColoring { u: String, v: String, color: usize },
    #[error("Vertex {vertex} has no color")]
    MissingVertex { vertex: String },
    #[error("Vertex {vertex} has color 0, colors start at 1")]
    ZeroColor { vertex: String },
}

#[macro_export]
macro_rules! graph_error {
    ($variant:ident) => {
        DsaturError::from(GraphError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        DsaturError::from(GraphError::$variant { $($arg)* })
    };
}

#[macro_export]
macro_rules! coloring_error {
    ($variant:ident) => {
        DsaturError::from(ColoringError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        DsaturError::from(ColoringError::$variant { $($arg)* })
    };
}

#[macro_export]
macro_rules! other_error {
    ($msg:expr) => {
        DsaturError::Other($msg.to_string())
    };
}
