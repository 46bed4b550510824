use serde::{Deserialize, Serialize};

use crate::{Graph, VertexId};

/// Tie-break rule applied when several uncolored vertices share the same
/// saturation degree and degree.
///
/// Every variant is a total order on the vertices of a graph, so the vertex picked at each step
/// never depends on the iteration order of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VertexOrdering {
    /// Prefer the smallest vertex identifier.
    #[default]
    LowestId,
    /// Prefer the largest vertex identifier.
    HighestId,
    /// Prefer the vertex that was declared first when the graph was built.
    DeclarationOrder,
}

impl VertexOrdering {
    /// Rank of every vertex, indexed by node index. Lower ranks win ties.
    pub(crate) fn ranks<V: VertexId>(&self, graph: &Graph<V>) -> Vec<usize> {
        let n = graph.vertex_count();
        let mut by_id = (0..n).collect::<Vec<_>>();
        let weights = graph.vertices().collect::<Vec<_>>();
        by_id.sort_unstable_by_key(|&i| weights[i]);

        let mut ranks = vec![0; n];
        match self {
            VertexOrdering::LowestId => {
                for (rank, &i) in by_id.iter().enumerate() {
                    ranks[i] = rank;
                }
            }
            VertexOrdering::HighestId => {
                for (rank, &i) in by_id.iter().rev().enumerate() {
                    ranks[i] = rank;
                }
            }
            VertexOrdering::DeclarationOrder => {
                for (i, rank) in ranks.iter_mut().enumerate() {
                    *rank = i;
                }
            }
        }
        ranks
    }
}
