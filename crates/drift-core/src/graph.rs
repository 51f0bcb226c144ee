//! Undirected graph model for layout.
//!
//! A [`Graph`] is a set of positioned [`Vertex`] values plus a set of
//! undirected [`Edge`] values. Vertex ids are always the contiguous range
//! `0..vertex_count`. Once a graph is built its vertex and edge sets never
//! change; only vertex positions can be updated, through
//! [`Graph::set_position`].
//!
//! Edges are stored in canonical form (smaller id first) in an
//! insertion-ordered set. That gives O(1) duplicate detection and a fixed
//! iteration order, which keeps floating-point summation in the layout engine
//! reproducible.

use std::fmt;

use indexmap::IndexSet;

use crate::{
    error::GraphError,
    geometry::{Bounds, Point},
};

/// Identifier of a vertex within a single [`Graph`].
///
/// Ids are assigned contiguously from zero and double as indices into the
/// graph's vertex list and into any per-vertex scratch storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates an id from a raw index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positioned vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    id: VertexId,
    position: Point,
}

impl Vertex {
    /// Returns the vertex id
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the current position
    pub fn position(&self) -> Point {
        self.position
    }
}

/// An undirected edge between two distinct vertices.
///
/// The endpoints are stored in canonical order, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    /// Creates a canonical edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if `a == b`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drift_core::graph::{Edge, VertexId};
    /// let e = Edge::new(VertexId::new(4), VertexId::new(1)).unwrap();
    /// assert_eq!(e.source().index(), 1);
    /// assert_eq!(e.target().index(), 4);
    /// assert!(Edge::new(VertexId::new(2), VertexId::new(2)).is_err());
    /// ```
    pub fn new(a: VertexId, b: VertexId) -> Result<Self, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { vertex: a.index() });
        }
        Ok(Self {
            source: a.min(b),
            target: a.max(b),
        })
    }

    /// Returns the smaller endpoint
    pub fn source(self) -> VertexId {
        self.source
    }

    /// Returns the larger endpoint
    pub fn target(self) -> VertexId {
        self.target
    }

    /// Returns the endpoint opposite to `id`, or `None` if `id` is not on this edge
    pub fn opposite(self, id: VertexId) -> Option<VertexId> {
        if id == self.source {
            Some(self.target)
        } else if id == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Returns the number of distinct unordered, non-self-loop vertex pairs for
/// `vertex_count` vertices, i.e. `n·(n−1)/2`.
///
/// Saturates at `usize::MAX` instead of overflowing.
///
/// # Examples
///
/// ```
/// # use drift_core::graph::max_edge_count;
/// assert_eq!(max_edge_count(0), 0);
/// assert_eq!(max_edge_count(1), 0);
/// assert_eq!(max_edge_count(5), 10);
/// ```
pub fn max_edge_count(vertex_count: usize) -> usize {
    let n = vertex_count;
    let m = n.saturating_sub(1);
    if n % 2 == 0 {
        (n / 2).saturating_mul(m)
    } else {
        n.saturating_mul(m / 2)
    }
}

/// A graph with positioned vertices and undirected edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: IndexSet<Edge>,
}

impl Graph {
    /// Builds a graph from vertex positions and an edge list.
    ///
    /// Vertex `i` receives id `i` and position `positions[i]`. Edges are
    /// canonicalized and kept in the order given.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if a position is not finite, or an edge is a
    /// self-loop, references an id outside `0..positions.len()`, or repeats
    /// an unordered pair already present.
    pub fn new<I>(positions: Vec<Point>, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let vertex_count = positions.len();
        let vertices = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| {
                if position.is_finite() {
                    Ok(Vertex {
                        id: VertexId::new(index),
                        position,
                    })
                } else {
                    Err(GraphError::InvalidPosition { vertex: index })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut edge_set = IndexSet::new();
        for (u, v) in edges {
            if u >= vertex_count || v >= vertex_count {
                return Err(GraphError::MissingEndpoint { u, v, vertex_count });
            }
            let edge = Edge::new(VertexId::new(u), VertexId::new(v))?;
            if !edge_set.insert(edge) {
                return Err(GraphError::DuplicateEdge { u, v });
            }
        }

        Ok(Self {
            vertices,
            edges: edge_set,
        })
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all vertices ordered by id
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex with the given id, if present
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Iterates edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Checks whether an edge joins `a` and `b`, in either direction
    pub fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
        Edge::new(a, b).is_ok_and(|edge| self.edges.contains(&edge))
    }

    /// Iterates vertex positions ordered by id
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().map(Vertex::position)
    }

    /// Moves a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a vertex of this graph.
    pub fn set_position(&mut self, id: VertexId, position: Point) {
        self.vertices[id.index()].position = position;
    }

    /// Iterates the vertices adjacent to `id`, in edge insertion order
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().filter_map(move |edge| edge.opposite(id))
    }

    /// Returns the number of edges incident to `id`
    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).count()
    }

    /// Returns the bounding box of all vertex positions, or `None` for an empty graph
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold(Bounds::from_point(first), Bounds::include))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64, i as f64)).collect()
    }

    #[test]
    fn test_new_assigns_contiguous_ids() {
        let graph = Graph::new(positions(4), [(0, 1), (2, 3)]).unwrap();
        let ids: Vec<usize> = graph.vertices().iter().map(|v| v.id().index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edges_are_canonical_and_ordered() {
        let graph = Graph::new(positions(4), [(3, 0), (1, 2), (2, 0)]).unwrap();
        let edges: Vec<(usize, usize)> = graph
            .edges()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        assert_eq!(edges, vec![(0, 3), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_rejects_self_loop() {
        let err = Graph::new(positions(2), [(1, 1)]).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { vertex: 1 });
    }

    #[test]
    fn test_rejects_missing_endpoint() {
        let err = Graph::new(positions(2), [(0, 2)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MissingEndpoint {
                u: 0,
                v: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_rejects_reversed_duplicate() {
        let err = Graph::new(positions(3), [(0, 1), (1, 0)]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge { u: 1, v: 0 });
    }

    #[test]
    fn test_rejects_non_finite_position() {
        let err = Graph::new(vec![Point::new(0.0, f64::NAN)], []).unwrap_err();
        assert_eq!(err, GraphError::InvalidPosition { vertex: 0 });
    }

    #[test]
    fn test_neighbors_and_degree() {
        let graph = Graph::new(positions(4), [(0, 1), (2, 0), (2, 3)]).unwrap();
        let n: Vec<usize> = graph.neighbors(VertexId::new(0)).map(VertexId::index).collect();
        assert_eq!(n, vec![1, 2]);
        assert_eq!(graph.degree(VertexId::new(2)), 2);
        assert_eq!(graph.degree(VertexId::new(3)), 1);
        assert!(graph.contains_edge(VertexId::new(1), VertexId::new(0)));
        assert!(!graph.contains_edge(VertexId::new(1), VertexId::new(3)));
        assert!(!graph.contains_edge(VertexId::new(1), VertexId::new(1)));
    }

    #[test]
    fn test_set_position_only_moves_one_vertex() {
        let mut graph = Graph::new(positions(3), [(0, 1)]).unwrap();
        graph.set_position(VertexId::new(1), Point::new(9.0, 8.0));
        assert_eq!(graph.vertices()[1].position(), Point::new(9.0, 8.0));
        assert_eq!(graph.vertices()[0].position(), Point::new(0.0, 0.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_bounds() {
        assert!(Graph::default().bounds().is_none());
        let graph = Graph::new(positions(3), []).unwrap();
        let bounds = graph.bounds().unwrap();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_y(), 2.0);
    }

    #[test]
    fn test_max_edge_count() {
        assert_eq!(max_edge_count(2), 1);
        assert_eq!(max_edge_count(10), 45);
        assert_eq!(max_edge_count(11), 55);
        assert_eq!(max_edge_count(usize::MAX), usize::MAX);
    }
}
