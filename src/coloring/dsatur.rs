use std::cmp::Reverse;
use std::collections::HashSet;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use crate::{
    error::{DsaturError, GraphError},
    graph_error, Coloring, DsaturConfig, Graph, VertexId, VertexOrdering,
};

#[derive(Clone, Debug, Serialize, Default, PartialEq, Eq)]
pub struct DsaturStatistics {
    pub number_of_steps: usize,
    pub number_of_colors: usize,
    pub number_of_saturation_updates: usize,
    pub number_of_tie_breaks: usize,
}

/// One assignment made by the engine, in the order it was made.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ColoringStep<V> {
    pub vertex: V,
    pub color: usize,
    /// Saturation degree of `vertex` when it was selected.
    pub saturation: usize,
    pub degree: usize,
}

#[derive(Clone, Debug)]
pub struct DsaturSolution<V> {
    pub coloring: Coloring<V>,
    /// Empty unless [`DsaturConfig::record_steps`] is set.
    pub steps: Vec<ColoringStep<V>>,
    pub statistics: DsaturStatistics,
}

/// DSATUR graph coloring.
///
/// Vertices are colored one at a time. The next vertex is the uncolored vertex with the largest
/// saturation degree (number of distinct colors among its colored neighbors), then the largest
/// degree, then the vertex preferred by the configured [`VertexOrdering`]. It receives the
/// smallest positive color not used by any of its colored neighbors.
///
/// Until one of its neighbors is colored, the saturation degree of a vertex is taken to be its
/// degree, so the first vertex colored is the one with maximum degree. The number of colors used
/// may be equal or greater than the chromatic number `χ(G)` of the graph.
///
/// # Example
///
/// ```rust
/// use dsatur::{Dsatur, GraphBuilder};
///
/// let graph = GraphBuilder::new()
///     .vertex(1, [2])
///     .vertex(2, [1, 3])
///     .vertex(3, [2, 4])
///     .vertex(4, [3])
///     .build()
///     .unwrap();
/// let solution = Dsatur::default().solve(&graph).unwrap();
/// assert_eq!(solution.coloring.get(2), Some(1));
/// assert_eq!(solution.coloring.get(3), Some(2));
/// assert_eq!(solution.statistics.number_of_colors, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dsatur {
    config: DsaturConfig,
}

impl Dsatur {
    pub fn new(config: DsaturConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DsaturConfig {
        &self.config
    }

    pub fn solve<V: VertexId>(&self, graph: &Graph<V>) -> Result<DsaturSolution<V>, DsaturError> {
        if graph.is_empty() {
            return Err(graph_error!(EmptyGraph));
        }
        log::debug!(
            "dsatur: coloring {} vertices and {} edges, ordering {:?}",
            graph.vertex_count(),
            graph.edge_count(),
            self.config.ordering
        );

        let mut state = DsaturState::new(graph, self.config.ordering);
        let mut steps = Vec::new();
        let mut statistics = DsaturStatistics::default();

        while let Some((i, tie)) = state.select() {
            let saturation = state.saturation[i.index()];
            let degree = state.degree[i.index()];
            let color = state.smallest_available_color(i);
            state.color[i.index()] = color;
            statistics.number_of_saturation_updates += state.update_neighbors(i);
            statistics.number_of_steps += 1;
            statistics.number_of_colors = statistics.number_of_colors.max(color);
            if tie {
                statistics.number_of_tie_breaks += 1;
            }

            let vertex = state.graph[i];
            log::trace!(
                "dsatur: vertex {} (saturation {}, degree {}) -> color {}",
                vertex,
                saturation,
                degree,
                color
            );
            if self.config.record_steps {
                steps.push(ColoringStep {
                    vertex,
                    color,
                    saturation,
                    degree,
                });
            }
        }

        let coloring = state.into_coloring();
        log::debug!(
            "dsatur: colored {} vertices with {} colors",
            coloring.len(),
            statistics.number_of_colors
        );
        Ok(DsaturSolution {
            coloring,
            steps,
            statistics,
        })
    }
}

/// Color `graph` with DSATUR, breaking ties with `ordering`.
///
/// Fails with [`GraphError::EmptyGraph`] if the graph has no vertices.
pub fn color_graph_dsatur<V: VertexId>(
    graph: &Graph<V>,
    ordering: VertexOrdering,
) -> Result<Coloring<V>, DsaturError> {
    let config = DsaturConfig {
        ordering,
        record_steps: false,
    };
    Dsatur::new(config)
        .solve(graph)
        .map(|solution| solution.coloring)
}

/// Working state of one run, indexed by node index.
struct DsaturState<'a, V: VertexId> {
    graph: &'a UnGraph<V, ()>,
    degree: Vec<usize>,
    saturation: Vec<usize>,
    rank: Vec<usize>,
    /// 0 while uncolored
    color: Vec<usize>,
    used: Vec<bool>,
}

impl<'a, V: VertexId> DsaturState<'a, V> {
    fn new(graph: &'a Graph<V>, ordering: VertexOrdering) -> Self {
        let inner = graph.inner();
        let n = inner.node_count();
        let degree = inner
            .node_indices()
            .map(|i| inner.neighbors(i).count())
            .collect::<Vec<_>>();
        Self {
            graph: inner,
            saturation: degree.clone(),
            degree,
            rank: ordering.ranks(graph),
            color: vec![0; n],
            used: vec![false; n + 2],
        }
    }

    /// The uncolored vertex maximising (saturation, degree), ties going to the lowest rank.
    /// Also reports whether another uncolored vertex had the same (saturation, degree).
    fn select(&self) -> Option<(NodeIndex, bool)> {
        let key = |i: usize| (self.saturation[i], self.degree[i]);
        let best = (0..self.color.len())
            .filter(|&i| self.color[i] == 0)
            .max_by_key(|&i| (key(i), Reverse(self.rank[i])))?;
        let tie = (0..self.color.len())
            .any(|i| i != best && self.color[i] == 0 && key(i) == key(best));
        Some((NodeIndex::new(best), tie))
    }

    fn smallest_available_color(&mut self, i: NodeIndex) -> usize {
        for j in self.graph.neighbors(i) {
            let c = self.color[j.index()];
            if c != 0 {
                self.used[c] = true;
            }
        }
        let color = (1..self.used.len())
            .find(|&c| !self.used[c])
            .unwrap_or(self.used.len());
        self.used.iter_mut().for_each(|x| *x = false);
        color
    }

    /// Recompute the saturation of every uncolored neighbor of `i`, returning how many were
    /// recomputed.
    fn update_neighbors(&mut self, i: NodeIndex) -> usize {
        let mut updates = 0;
        for j in self.graph.neighbors(i) {
            if self.color[j.index()] != 0 {
                continue;
            }
            let colored = self
                .graph
                .neighbors(j)
                .map(|k| self.color[k.index()])
                .filter(|&c| c != 0)
                .collect::<HashSet<_>>();
            self.saturation[j.index()] = if colored.is_empty() {
                self.degree[j.index()]
            } else {
                colored.len()
            };
            updates += 1;
        }
        updates
    }

    fn into_coloring(self) -> Coloring<V> {
        self.graph
            .node_indices()
            .map(|i| (self.graph[i], self.color[i.index()]))
            .collect()
    }
}
