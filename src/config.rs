use serde::{Deserialize, Serialize};

use crate::VertexOrdering;

/// How a neighbor listed in only one direction is treated when a graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdjacencyPolicy {
    /// Take the union of both directions, so `u` listing `v` is enough to create the edge.
    #[default]
    Symmetrize,
    /// Reject the graph unless every listed neighbor lists the vertex back.
    RequireSymmetric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    pub adjacency: AdjacencyPolicy,
    /// Upper bound on the number of declared vertices, `None` for unbounded.
    pub max_vertices: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsaturConfig {
    pub ordering: VertexOrdering,
    pub record_steps: bool,
}

impl Default for DsaturConfig {
    fn default() -> Self {
        Self {
            ordering: VertexOrdering::default(),
            record_steps: true,
        }
    }
}
