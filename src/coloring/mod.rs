use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::{
    coloring_error,
    error::{ColoringError, DsaturError},
    Graph, VertexId,
};

pub mod dsatur;
pub mod ordering;

/// An assignment of positive integer colors to vertices. Colors start at 1.
///
/// The assignment together with the [`Graph`] it was computed for is everything a renderer
/// needs: [`Coloring::palette_index`] maps colors onto a fixed palette and [`Graph::edges`]
/// lists the pairs to connect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Coloring<V> {
    colors: BTreeMap<V, usize>,
}

impl<V: VertexId> Coloring<V> {
    pub fn get(&self, vertex: V) -> Option<usize> {
        self.colors.get(&vertex).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(vertex, color)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (V, usize)> + '_ {
        self.colors.iter().map(|(&v, &c)| (v, c))
    }

    /// The largest color used, which is also the number of colors since the greedy rule never
    /// skips a color.
    pub fn num_colors(&self) -> usize {
        self.colors.values().max().copied().unwrap_or(0)
    }

    /// Vertices grouped by color: entry `c - 1` holds the vertices with color `c`, ascending.
    pub fn color_classes(&self) -> Vec<Vec<V>> {
        let mut classes = vec![Vec::new(); self.num_colors()];
        for (&v, &c) in self.colors.iter() {
            if c > 0 {
                classes[c - 1].push(v);
            }
        }
        classes
    }

    /// Edges of `graph` whose endpoints are both colored with the same color.
    pub fn conflicts(&self, graph: &Graph<V>) -> Vec<(V, V)> {
        graph
            .edges()
            .into_iter()
            .filter(|&(u, v)| match (self.get(u), self.get(v)) {
                (Some(cu), Some(cv)) => cu == cv,
                _ => false,
            })
            .collect()
    }

    /// True if no edge of `graph` joins two vertices of the same color.
    pub fn is_proper(&self, graph: &Graph<V>) -> bool {
        self.conflicts(graph).is_empty()
    }

    /// Check that every vertex of `graph` has a positive color and that the coloring is proper.
    pub fn verify(&self, graph: &Graph<V>) -> Result<(), DsaturError> {
        for vertex in graph.vertices() {
            match self.get(vertex) {
                None => {
                    return Err(coloring_error!(MissingVertex, vertex: vertex.to_string()));
                }
                Some(0) => {
                    return Err(coloring_error!(ZeroColor, vertex: vertex.to_string()));
                }
                Some(_) => {}
            }
        }
        if let Some(&(u, v)) = self.conflicts(graph).first() {
            let color = self.get(u).unwrap_or_default();
            return Err(coloring_error!(
                ImproperColoring,
                u: u.to_string(),
                v: v.to_string(),
                color
            ));
        }
        Ok(())
    }

    /// Index into a palette of `palette_len` entries, cycling once the colors run past the
    /// end of the palette.
    pub fn palette_index(&self, vertex: V, palette_len: usize) -> Option<usize> {
        if palette_len == 0 {
            return None;
        }
        let color = self.get(vertex)?;
        Some((color.max(1) - 1) % palette_len)
    }
}

impl<V: VertexId> From<BTreeMap<V, usize>> for Coloring<V> {
    fn from(colors: BTreeMap<V, usize>) -> Self {
        Self { colors }
    }
}

impl<V: VertexId> FromIterator<(V, usize)> for Coloring<V> {
    fn from_iter<I: IntoIterator<Item = (V, usize)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<V: VertexId> fmt::Display for Coloring<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, c) in self.iter() {
            writeln!(f, "vertex {:02} -> color {}", v, c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{
        error::{ColoringError, DsaturError},
        Coloring, Graph,
    };

    fn triangle() -> Graph<u32> {
        Graph::try_from(BTreeMap::from([
            (1, vec![2, 3]),
            (2, vec![3]),
            (3, vec![]),
        ]))
        .unwrap()
    }

    #[test]
    fn classes_and_palette() {
        let coloring = Coloring::from_iter([(1, 1), (2, 2), (3, 1), (4, 3)]);
        assert_eq!(coloring.num_colors(), 3);
        assert_eq!(coloring.color_classes(), vec![vec![1, 3], vec![2], vec![4]]);
        assert_eq!(coloring.palette_index(4, 20), Some(2));
        assert_eq!(coloring.palette_index(4, 2), Some(0));
        assert_eq!(coloring.palette_index(4, 0), None);
        assert_eq!(coloring.palette_index(9, 20), None);
    }

    #[test]
    fn verify_assignments() {
        let graph = triangle();
        let good = Coloring::from_iter([(1, 1), (2, 2), (3, 3)]);
        assert!(good.is_proper(&graph));
        assert!(good.verify(&graph).is_ok());

        let clash = Coloring::from_iter([(1, 1), (2, 2), (3, 1)]);
        assert_eq!(clash.conflicts(&graph), vec![(1, 3)]);
        assert!(!clash.is_proper(&graph));
        assert_eq!(
            clash.verify(&graph),
            Err(DsaturError::ColoringError(ColoringError::ImproperColoring {
                u: "1".to_string(),
                v: "3".to_string(),
                color: 1
            }))
        );

        let missing = Coloring::from_iter([(1, 1), (2, 2)]);
        assert!(missing.is_proper(&graph));
        assert_eq!(
            missing.verify(&graph),
            Err(DsaturError::ColoringError(ColoringError::MissingVertex {
                vertex: "3".to_string()
            }))
        );

        let zero = Coloring::from_iter([(1, 0), (2, 2), (3, 3)]);
        assert_eq!(
            zero.verify(&graph),
            Err(DsaturError::ColoringError(ColoringError::ZeroColor {
                vertex: "1".to_string()
            }))
        );
    }

    #[test]
    fn display() {
        let coloring = Coloring::from_iter([(10, 1), (2, 2)]);
        assert_eq!(
            coloring.to_string(),
            "vertex 02 -> color 2\nvertex 10 -> color 1\n"
        );
    }
}
