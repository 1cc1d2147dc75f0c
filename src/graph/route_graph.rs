use std::fmt::Debug;

use num_traits::Float;

use crate::data_structures::LinkedList;
use crate::graph::{Route, Vertex};
use crate::{Error, Result};

/// A fixed-capacity directed graph using adjacency lists.
///
/// Vertex IDs are dense integers in `[0, capacity)` and index directly into
/// the vertex slots and adjacency lists. Every slot has an adjacency list,
/// present even while the vertex itself is absent. A graph is populated once
/// (vertices, then edges) and treated as read-only during searches.
#[derive(Debug, Clone)]
pub struct RouteGraph<W>
where
    W: Float + Debug + Copy,
{
    capacity: usize,
    vertices: Vec<Option<Vertex>>,
    adjacency: Vec<LinkedList<Route<W>>>,
}

impl<W> RouteGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a graph that can hold up to `capacity` vertices
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(RouteGraph {
            capacity,
            vertices: vec![None; capacity],
            adjacency: (0..capacity).map(|_| LinkedList::new()).collect(),
        })
    }

    /// Returns the maximum number of vertices the graph can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds a vertex with the given ID and name.
    ///
    /// Fails when the graph is full, the ID is out of range, or the slot is
    /// already occupied.
    pub fn add_vertex(&mut self, id: usize, name: impl Into<String>) -> Result<()> {
        if self.vertex_count() == self.capacity {
            return Err(Error::GraphFull(self.capacity));
        }
        self.check_id_range(id)?;
        if self.vertices[id].is_some() {
            return Err(Error::DuplicateVertex(id));
        }
        self.vertices[id] = Some(Vertex::new(id, name));
        Ok(())
    }

    /// Adds one directed route from `source` to `destination`.
    ///
    /// Both endpoints must already exist. No reverse route is inferred;
    /// bidirectional travel needs two explicit calls.
    pub fn add_edge(
        &mut self,
        source: usize,
        destination: usize,
        distance: W,
        time: W,
        cost: W,
    ) -> Result<()> {
        self.check_vertex_exists(source)?;
        self.check_vertex_exists(destination)?;
        self.adjacency[source].push_back(Route::new(destination, distance, time, cost));
        Ok(())
    }

    /// Returns the live adjacency list of outgoing routes for a vertex.
    ///
    /// Fails when the ID is out of range or the vertex does not exist.
    pub fn neighbors(&self, id: usize) -> Result<&LinkedList<Route<W>>> {
        self.check_vertex_exists(id)?;
        Ok(&self.adjacency[id])
    }

    /// Returns the vertex with the given ID, if present.
    ///
    /// An out-of-range ID is treated the same as an unoccupied slot.
    pub fn vertex_by_id(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id).and_then(|slot| slot.as_ref())
    }

    /// Returns the number of vertices currently in the graph.
    ///
    /// Recomputed by scanning the slots, so partially failed construction
    /// calls can never leave the count out of sync.
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().flatten().count()
    }

    /// Returns the total number of routes in the graph
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|list| list.len()).sum()
    }

    /// Returns a snapshot of all vertices in ascending ID order
    pub fn all_vertices(&self) -> LinkedList<Vertex> {
        self.vertices.iter().flatten().cloned().collect()
    }

    fn check_id_range(&self, id: usize) -> Result<()> {
        if id >= self.capacity {
            return Err(Error::VertexOutOfRange {
                id,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn check_vertex_exists(&self, id: usize) -> Result<()> {
        self.check_id_range(id)?;
        if self.vertices[id].is_none() {
            return Err(Error::VertexNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> RouteGraph<f64> {
        let mut graph = RouteGraph::new(4).unwrap();
        graph.add_vertex(0, "A").unwrap();
        graph.add_vertex(2, "C").unwrap();
        graph
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(RouteGraph::<f64>::new(0).unwrap_err(), Error::InvalidCapacity);
    }

    #[test]
    fn vertex_validation() {
        let mut graph = small_graph();
        assert_eq!(
            graph.add_vertex(4, "E").unwrap_err(),
            Error::VertexOutOfRange { id: 4, capacity: 4 }
        );
        assert_eq!(graph.add_vertex(0, "A2").unwrap_err(), Error::DuplicateVertex(0));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn full_graph_rejects_further_vertices() {
        let mut graph = RouteGraph::<f64>::new(2).unwrap();
        graph.add_vertex(0, "A").unwrap();
        graph.add_vertex(1, "B").unwrap();
        assert_eq!(graph.add_vertex(0, "again").unwrap_err(), Error::GraphFull(2));
    }

    #[test]
    fn edges_require_existing_endpoints() {
        let mut graph = small_graph();
        assert_eq!(
            graph.add_edge(0, 1, 1.0, 1.0, 1.0).unwrap_err(),
            Error::VertexNotFound(1)
        );
        assert_eq!(
            graph.add_edge(9, 0, 1.0, 1.0, 1.0).unwrap_err(),
            Error::VertexOutOfRange { id: 9, capacity: 4 }
        );
        assert!(graph.add_edge(0, 2, 5.0, 1.0, 2.0).is_ok());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = small_graph();
        graph.add_edge(0, 2, 5.0, 1.0, 2.0).unwrap();
        assert_eq!(graph.neighbors(0).unwrap().len(), 1);
        assert_eq!(graph.neighbors(2).unwrap().len(), 0);
    }

    #[test]
    fn vertex_lookup_never_fails() {
        let graph = small_graph();
        assert_eq!(graph.vertex_by_id(0).unwrap().name, "A");
        assert!(graph.vertex_by_id(1).is_none());
        assert!(graph.vertex_by_id(100).is_none());
    }

    #[test]
    fn all_vertices_ascending_by_id() {
        let mut graph = RouteGraph::<f64>::new(5).unwrap();
        graph.add_vertex(3, "D").unwrap();
        graph.add_vertex(0, "A").unwrap();
        graph.add_vertex(1, "B").unwrap();

        let ids: Vec<usize> = graph.all_vertices().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![0, 1, 3]);
    }

    #[test]
    fn neighbors_of_absent_vertex_fails() {
        let graph = small_graph();
        assert_eq!(graph.neighbors(1).unwrap_err(), Error::VertexNotFound(1));
    }
}
