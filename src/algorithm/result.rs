use std::fmt::Debug;

use num_traits::Float;

use crate::data_structures::LinkedList;
use crate::graph::Vertex;

/// The immutable outcome of a shortest-path search.
///
/// Exactly one of two shapes: a found path ordered source to destination
/// with a finite non-negative total, or the not-found sentinel with an empty
/// path and an infinite total. Partial or best-effort paths are never
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<W>
where
    W: Float + Debug + Copy,
{
    found: bool,
    path: LinkedList<Vertex>,
    total: W,
}

impl<W> PathResult<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) fn found(path: LinkedList<Vertex>, total: W) -> Self {
        PathResult {
            found: true,
            path,
            total,
        }
    }

    pub(crate) fn not_found() -> Self {
        PathResult {
            found: false,
            path: LinkedList::new(),
            total: W::infinity(),
        }
    }

    /// Returns true when a path was found
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// The vertices along the path, ordered source to destination.
    /// Empty when no path was found.
    pub fn path(&self) -> &LinkedList<Vertex> {
        &self.path
    }

    /// The summed weight of the selected criterion along the path,
    /// or infinity when no path was found
    pub fn total(&self) -> W {
        self.total
    }
}
