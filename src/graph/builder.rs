use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::UnGraph;

use crate::{
    error::{DsaturError, GraphError},
    graph_error, AdjacencyPolicy, Graph, GraphConfig, VertexId,
};

/// Builder for graphs. Declare each vertex with the neighbors selected for it and then call
/// [`GraphBuilder::build`], which validates the description.
///
/// The description is treated as untrusted input: a neighbor that is not declared as a vertex,
/// a vertex listing itself, or a vertex declared twice is rejected. Whether a neighbor listed in
/// only one direction is accepted depends on the [`AdjacencyPolicy`].
///
/// # Example
///
/// ```rust
/// use dsatur::{AdjacencyPolicy, GraphBuilder};
///
/// let graph = GraphBuilder::new()
///     .vertex(1, [2])
///     .vertex(2, [3])
///     .vertex(3, [])
///     .build()
///     .unwrap();
/// assert_eq!(graph.neighbors(2), Some(vec![1, 3]));
///
/// let err = GraphBuilder::new()
///     .adjacency_policy(AdjacencyPolicy::RequireSymmetric)
///     .vertex(1, [2])
///     .vertex(2, [])
///     .build();
/// assert!(err.is_err());
/// ```
pub struct GraphBuilder<V: VertexId> {
    config: GraphConfig,
    adjacency: Vec<(V, Vec<V>)>,
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new builder with the default [`GraphConfig`]:
    /// - adjacency = [`AdjacencyPolicy::Symmetrize`]
    /// - max_vertices = None
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            adjacency: Vec::new(),
        }
    }

    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    pub fn adjacency_policy(mut self, adjacency: AdjacencyPolicy) -> Self {
        self.config.adjacency = adjacency;
        self
    }

    pub fn max_vertices(mut self, max_vertices: usize) -> Self {
        self.config.max_vertices = Some(max_vertices);
        self
    }

    /// Declare `vertex` with its selected neighbors.
    pub fn vertex<N>(mut self, vertex: V, neighbors: N) -> Self
    where
        N: IntoIterator<Item = V>,
    {
        self.adjacency
            .push((vertex, neighbors.into_iter().collect()));
        self
    }

    /// Declare several vertices at once, in iteration order.
    pub fn vertices<I, N>(mut self, adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        for (vertex, neighbors) in adjacency {
            self = self.vertex(vertex, neighbors);
        }
        self
    }

    pub fn build(self) -> Result<Graph<V>, DsaturError> {
        let count = self.adjacency.len();
        if let Some(max) = self.config.max_vertices {
            if count > max {
                return Err(graph_error!(TooManyVertices, count, max));
            }
        }

        let mut inner = UnGraph::<V, ()>::with_capacity(count, count);
        let mut index = BTreeMap::new();
        for (vertex, _) in self.adjacency.iter() {
            if index.contains_key(vertex) {
                return Err(graph_error!(DuplicateVertex, vertex: vertex.to_string()));
            }
            index.insert(*vertex, inner.add_node(*vertex));
        }

        for (vertex, neighbors) in self.adjacency.iter() {
            for neighbor in neighbors.iter() {
                if neighbor == vertex {
                    return Err(graph_error!(SelfLoop, vertex: vertex.to_string()));
                }
                if !index.contains_key(neighbor) {
                    return Err(graph_error!(
                        UnknownNeighbor,
                        vertex: vertex.to_string(),
                        neighbor: neighbor.to_string()
                    ));
                }
            }
        }

        if self.config.adjacency == AdjacencyPolicy::RequireSymmetric {
            let listed = self
                .adjacency
                .iter()
                .map(|(v, ns)| (*v, ns.iter().copied().collect::<BTreeSet<_>>()))
                .collect::<BTreeMap<_, _>>();
            for (vertex, neighbors) in self.adjacency.iter() {
                for neighbor in neighbors.iter() {
                    let lists_back = listed
                        .get(neighbor)
                        .is_some_and(|back| back.contains(vertex));
                    if !lists_back {
                        return Err(graph_error!(
                            AsymmetricEdge,
                            vertex: vertex.to_string(),
                            neighbor: neighbor.to_string()
                        ));
                    }
                }
            }
        }

        // repeated or mirrored entries collapse onto a single undirected edge
        for (vertex, neighbors) in self.adjacency.iter() {
            for neighbor in neighbors.iter() {
                inner.update_edge(index[vertex], index[neighbor], ());
            }
        }

        log::debug!(
            "built graph with {} vertices and {} edges",
            inner.node_count(),
            inner.edge_count()
        );
        Ok(Graph::from_parts(inner, index))
    }
}
