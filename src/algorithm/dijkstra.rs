use std::fmt::Debug;

use log::{debug, warn};
use num_traits::Float;

use crate::algorithm::PathResult;
use crate::data_structures::{HeapEntry, LinkedList, PriorityQueue};
use crate::graph::{Criterion, RouteGraph, Vertex};

/// Finds a least-cost path from `source` to `destination` under the given
/// weight criterion.
///
/// Classic single-source Dijkstra in the lazy-deletion variant: relaxing an
/// edge pushes a fresh queue entry instead of decreasing a key, and entries
/// superseded by a better distance are discarded when popped. Settling the
/// destination ends the search early; under non-negative weights the first
/// pop of a vertex carries its final shortest distance.
///
/// Never fails: a missing endpoint or an unreachable destination yields the
/// not-found result. Negative weights are not rejected, they silently void
/// the optimality guarantee.
pub fn find_shortest_path<W>(
    graph: &RouteGraph<W>,
    source: usize,
    destination: usize,
    criterion: Criterion,
) -> PathResult<W>
where
    W: Float + Debug + Copy + Ord,
{
    // Resolve both endpoints before allocating any scratch state
    if graph.vertex_by_id(source).is_none() {
        debug!("source vertex {} does not exist", source);
        return PathResult::not_found();
    }
    if graph.vertex_by_id(destination).is_none() {
        debug!("destination vertex {} does not exist", destination);
        return PathResult::not_found();
    }

    let n = graph.capacity();
    let mut distance = vec![W::infinity(); n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    distance[source] = W::zero();
    let mut queue = PriorityQueue::with_capacity(graph.vertex_count());
    queue.add(HeapEntry::new(W::zero(), source));

    while !queue.is_empty() {
        let Ok(entry) = queue.poll() else { break };
        let u = entry.vertex;

        // Stale entry: the vertex was settled earlier, or a cheaper entry
        // for it was pushed after this one
        if visited[u] || entry.priority > distance[u] {
            continue;
        }
        visited[u] = true;

        if u == destination {
            break;
        }

        let Ok(routes) = graph.neighbors(u) else {
            continue;
        };
        for route in routes {
            let v = route.destination;
            if visited[v] {
                continue;
            }
            let candidate = distance[u] + route.weight(criterion);
            if candidate < distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
                // Any older entry for v stays queued and is skipped as
                // stale once polled
                queue.add(HeapEntry::new(candidate, v));
            }
        }
    }

    if distance[destination] == W::infinity() {
        return PathResult::not_found();
    }

    match trace_path(graph, &predecessor, source, destination) {
        Some(path) => PathResult::found(path, distance[destination]),
        None => PathResult::not_found(),
    }
}

/// Finds a least-cost path with a textual criterion from an external
/// collaborator.
///
/// The name is matched case-insensitively against "distance", "time" and
/// "cost"; an unrecognized name yields the not-found result instead of a
/// fault.
pub fn find_shortest_path_by_name<W>(
    graph: &RouteGraph<W>,
    source: usize,
    destination: usize,
    criterion: &str,
) -> PathResult<W>
where
    W: Float + Debug + Copy + Ord,
{
    match criterion.parse::<Criterion>() {
        Ok(criterion) => find_shortest_path(graph, source, destination, criterion),
        Err(err) => {
            debug!("rejecting search: {}", err);
            PathResult::not_found()
        }
    }
}

/// Walks the predecessor chain backward from the destination, prepending
/// each vertex so the result reads source to destination.
///
/// The chain is never trusted blindly: an absent vertex, a walk longer than
/// the graph capacity, or a walk that ends anywhere but the source all
/// degrade to `None` rather than a panic.
fn trace_path<W>(
    graph: &RouteGraph<W>,
    predecessor: &[Option<usize>],
    source: usize,
    destination: usize,
) -> Option<LinkedList<Vertex>>
where
    W: Float + Debug + Copy,
{
    let mut path = LinkedList::new();
    let mut current = destination;

    loop {
        let Some(vertex) = graph.vertex_by_id(current) else {
            warn!("vertex {} missing during path reconstruction", current);
            return None;
        };
        path.push_front(vertex.clone());

        if current == source {
            break;
        }
        match predecessor[current] {
            Some(prev) => current = prev,
            None => {
                warn!("predecessor chain broken at vertex {}", current);
                return None;
            }
        }
        if path.len() > graph.capacity() {
            warn!("predecessor chain exceeds graph capacity, aborting");
            return None;
        }
    }

    match path.front() {
        Ok(first) if first.id == source => Some(path),
        _ => None,
    }
}
