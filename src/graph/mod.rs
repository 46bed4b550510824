use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Serialize, Serializer};

use crate::{DsaturError, GraphConfig};

pub mod builder;

pub use builder::GraphBuilder;

/// Identifier of a vertex. The total order of the identifiers is what the
/// [`crate::VertexOrdering::LowestId`] and [`crate::VertexOrdering::HighestId`] tie-breaks use.
pub trait VertexId: Copy + Ord + Hash + Debug + Display {}

impl<T: Copy + Ord + Hash + Debug + Display> VertexId for T {}

/// A simple undirected graph with validated, symmetric adjacency.
///
/// Vertices keep the order in which they were declared, see [`Graph::vertices`].
/// A `Graph` is immutable once built; use a [`GraphBuilder`] or [`Graph::from_adjacency`]
/// to create one.
#[derive(Debug, Clone)]
pub struct Graph<V: VertexId> {
    inner: UnGraph<V, ()>,
    index: BTreeMap<V, NodeIndex>,
}

impl<V: VertexId> Graph<V> {
    pub(crate) fn from_parts(inner: UnGraph<V, ()>, index: BTreeMap<V, NodeIndex>) -> Self {
        Self { inner, index }
    }

    /// Build a graph from `(vertex, neighbors)` pairs, validating them according to `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dsatur::{Graph, GraphConfig};
    ///
    /// let graph = Graph::from_adjacency([(1, vec![2]), (2, vec![3]), (3, vec![])], GraphConfig::default()).unwrap();
    /// assert_eq!(graph.edges(), vec![(1, 2), (2, 3)]);
    /// ```
    pub fn from_adjacency<I, N>(adjacency: I, config: GraphConfig) -> Result<Self, DsaturError>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        GraphBuilder::new()
            .config(config)
            .vertices(adjacency)
            .build()
    }

    pub(crate) fn inner(&self) -> &UnGraph<V, ()> {
        &self.inner
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    pub fn contains(&self, vertex: V) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Vertices in declaration order.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.inner.node_weights().copied()
    }

    /// Number of neighbors of `vertex`, or `None` if it is not in the graph.
    pub fn degree(&self, vertex: V) -> Option<usize> {
        self.index
            .get(&vertex)
            .map(|&i| self.inner.neighbors(i).count())
    }

    /// Neighbors of `vertex` in ascending order, or `None` if it is not in the graph.
    pub fn neighbors(&self, vertex: V) -> Option<Vec<V>> {
        let i = *self.index.get(&vertex)?;
        let mut neighbors = self
            .inner
            .neighbors(i)
            .map(|j| self.inner[j])
            .collect::<Vec<_>>();
        neighbors.sort_unstable();
        Some(neighbors)
    }

    /// Each edge once as `(lo, hi)`, sorted.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut edges = self
            .inner
            .edge_references()
            .map(|e| {
                let (a, b) = (self.inner[e.source()], self.inner[e.target()]);
                if a < b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect::<Vec<_>>();
        edges.sort_unstable();
        edges
    }

    /// The symmetric adjacency as a map from each vertex to its sorted neighbors.
    pub fn to_adjacency(&self) -> BTreeMap<V, Vec<V>> {
        self.index
            .iter()
            .map(|(&v, &i)| {
                let mut neighbors = self
                    .inner
                    .neighbors(i)
                    .map(|j| self.inner[j])
                    .collect::<Vec<_>>();
                neighbors.sort_unstable();
                (v, neighbors)
            })
            .collect()
    }
}

impl<V: VertexId> TryFrom<BTreeMap<V, Vec<V>>> for Graph<V> {
    type Error = DsaturError;

    fn try_from(adjacency: BTreeMap<V, Vec<V>>) -> Result<Self, Self::Error> {
        Self::from_adjacency(adjacency, GraphConfig::default())
    }
}

impl<V: VertexId + Serialize> Serialize for Graph<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_adjacency().serialize(serializer)
    }
}
