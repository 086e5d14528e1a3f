//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers that want to swap the search (A*, a precomputed hierarchy, …)
//! implement [`Router`]; [`find_shortest_path`] uses the default
//! [`DijkstraRouter`].
//!
//! # Outcomes
//!
//! | Result        | Meaning                                                |
//! |---------------|--------------------------------------------------------|
//! | `Ok(Some(it))`| shortest itinerary, origin first, destination last     |
//! | `Ok(None)`    | no finite-cost path exists for this vehicle            |
//! | `Err(_)`      | a city is not owned by the queried world               |
//!
//! # Determinism
//!
//! Heap entries are keyed `(hours, NodeId)` and a node's predecessor is only
//! replaced by a strictly cheaper one, so equal-cost alternatives always
//! resolve the same way for the same world.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use nav_core::{EdgeId, NodeId};
use nav_world::{City, World};

use crate::graph::{CityGraph, build_graph, check_member};
use crate::{Itinerary, RouteResult, Vehicle};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so one router can serve queries
/// from several threads against the same read-only `World`.
pub trait Router: Send + Sync {
    /// Shortest itinerary from `from` to `to` for `vehicle`, or `None` if
    /// the destination is unreachable.
    fn route<'w>(
        &self,
        world:   &'w World,
        vehicle: &Vehicle,
        from:    &'w City,
        to:      &'w City,
    ) -> RouteResult<Option<Itinerary<'w>>>;
}

/// Shortest itinerary from `from` to `to` using [`DijkstraRouter`].
///
/// # Errors
///
/// [`crate::RouteError::Unattached`] / [`crate::RouteError::ForeignCity`] if
/// either city is not owned by `world`.
pub fn find_shortest_path<'w>(
    world:   &'w World,
    vehicle: &Vehicle,
    from:    &'w City,
    to:      &'w City,
) -> RouteResult<Option<Itinerary<'w>>> {
    DijkstraRouter.route(world, vehicle, from, to)
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Vehicle shortcut first, then Dijkstra over the vehicle's minimal graph.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route<'w>(
        &self,
        world:   &'w World,
        vehicle: &Vehicle,
        from:    &'w City,
        to:      &'w City,
    ) -> RouteResult<Option<Itinerary<'w>>> {
        check_member(world, from)?;
        check_member(world, to)?;

        if let Some(direct) = vehicle.direct_shortcut(from, to) {
            debug!(%vehicle, from = %from.name, to = %to.name, "direct shortcut");
            return Ok(Some(direct));
        }

        DijkstraRouter::search(world, vehicle, from, to)
    }
}

impl DijkstraRouter {
    /// Graph search without the vehicle's shortcut.
    ///
    /// Always builds and searches the vehicle's graph, even where
    /// [`Vehicle::direct_shortcut`] would answer immediately.  Membership of
    /// both cities in `world` is checked by [`build_graph`].
    pub fn search<'w>(
        world:   &'w World,
        vehicle: &Vehicle,
        from:    &'w City,
        to:      &'w City,
    ) -> RouteResult<Option<Itinerary<'w>>> {
        let graph = build_graph(world, vehicle, from, to)?;
        debug!(
            %vehicle,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "routing graph built"
        );

        let (Some(source), Some(target)) = (graph.node_of(from.id), graph.node_of(to.id)) else {
            return Ok(None);
        };

        Ok(dijkstra(&graph, source, target).map(|nodes| {
            nodes.into_iter().map(|n| graph.city(n)).collect()
        }))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Non-negative finite hours with a total order, for use as a heap key.
#[derive(Copy, Clone, Debug)]
struct Hours(f64);

impl PartialEq for Hours {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hours {}

impl PartialOrd for Hours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hours {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Node sequence of a cheapest path `from → to`, or `None` if `to` is not
/// reachable.
fn dijkstra(graph: &CityGraph<'_>, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    if from == to {
        return Some(vec![from]);
    }

    let n = graph.node_count();
    // dist[v] = best known cost (hours) to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(Hours, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Hours(0.0), from)));

    while let Some(Reverse((Hours(cost), node))) = heap.pop() {
        if node == to {
            return Some(reconstruct(graph, &prev_edge, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost + graph.edge_hours[edge.index()];

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((Hours(new_cost), neighbor)));
            }
        }
    }

    None
}

fn reconstruct(graph: &CityGraph<'_>, prev_edge: &[EdgeId], to: NodeId) -> Vec<NodeId> {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    nodes
}
