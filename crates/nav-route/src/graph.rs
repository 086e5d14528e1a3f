//! Per-query routing graph and the policy-specific edge-set builders.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! Edge arrays (`edge_from`, `edge_to`, `edge_hours`) are sorted by source
//! node.  Unreachable city pairs are simply absent: every stored weight is a
//! finite, non-negative number of hours.
//!
//! # Edge sets
//!
//! [`build_graph`] materialises only what a vehicle can use for one query:
//!
//! | Vehicle      | Vertices                        | Edges                                   |
//! |--------------|---------------------------------|-----------------------------------------|
//! | `FlatRate`   | origin, destination             | the direct hop                          |
//! | `Diplomatic` | origin + destination countries, every primary city | complete within each country, complete among primaries |
//! | `Teleport`   | every city                      | pairs closer than `max_distance_km`     |
//!
//! The teleport set is found with an R-tree (via `rstar`) over unit-sphere
//! positions rather than an all-pairs scan.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::{FxHashMap, FxHashSet};

use nav_core::{CityId, EdgeId, GeoPoint, NodeId};
use nav_world::{City, World};

use crate::{RouteError, RouteResult, Vehicle};

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Undirected city graph (stored as directed edge pairs) in CSR format.
///
/// Do not construct directly; use [`CityGraphBuilder`] or [`build_graph`].
pub struct CityGraph<'w> {
    /// City at each node.  Indexed by `NodeId`.
    pub node_city: Vec<&'w City>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge, used to walk predecessor edges back to the
    /// origin.
    pub edge_from: Vec<NodeId>,

    pub edge_to: Vec<NodeId>,

    /// Travel hours of each edge.  Used as the Dijkstra cost.
    pub edge_hours: Vec<f64>,

    node_of: FxHashMap<CityId, NodeId>,
}

impl<'w> CityGraph<'w> {
    pub fn node_count(&self) -> usize {
        self.node_city.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// The node for `city`, if the city is a vertex of this graph.
    pub fn node_of(&self, city: CityId) -> Option<NodeId> {
        self.node_of.get(&city).copied()
    }

    #[inline]
    pub fn city(&self, node: NodeId) -> &'w City {
        self.node_city[node.index()]
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()];
        let end   = self.node_out_start[node.index() + 1];
        (start..end).map(EdgeId)
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        (self.node_out_start[node.index() + 1] - self.node_out_start[node.index()]) as usize
    }
}

// ── CityGraphBuilder ──────────────────────────────────────────────────────────

/// Incremental builder for [`CityGraph`].
///
/// Cities are deduplicated by id and edges by endpoint pair, so overlapping
/// subsets (a country's capital is also in the primary set) can be connected
/// independently without producing parallel edges.
#[derive(Default)]
pub struct CityGraphBuilder<'w> {
    nodes:     Vec<&'w City>,
    node_of:   FxHashMap<CityId, NodeId>,
    raw_edges: Vec<RawEdge>,
    seen:      FxHashSet<(NodeId, NodeId)>,
}

struct RawEdge {
    from:  NodeId,
    to:    NodeId,
    hours: f64,
}

impl<'w> CityGraphBuilder<'w> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `city` as a vertex (or return its existing node).
    pub fn add_city(&mut self, city: &'w City) -> NodeId {
        if let Some(&node) = self.node_of.get(&city.id) {
            return node;
        }
        let node = NodeId(self.nodes.len() as u32);
        self.nodes.push(city);
        self.node_of.insert(city.id, node);
        node
    }

    /// Add an undirected edge `a ↔ b` weighted `hours`.
    ///
    /// Self-loops and already-present pairs are ignored; returns whether an
    /// edge was added.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, hours: f64) -> bool {
        debug_assert!(hours.is_finite() && hours >= 0.0, "edge weight {hours}");
        if a == b {
            return false;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.seen.insert(key) {
            return false;
        }
        self.raw_edges.push(RawEdge { from: a, to: b, hours });
        self.raw_edges.push(RawEdge { from: b, to: a, hours });
        true
    }

    /// Connect every pair of `cities` the vehicle can hop between directly.
    pub fn connect_all(&mut self, cities: &[&'w City], vehicle: &Vehicle) {
        let nodes: Vec<NodeId> = cities.iter().map(|&c| self.add_city(c)).collect();
        for i in 0..cities.len() {
            for j in (i + 1)..cities.len() {
                if let Some(hours) = vehicle.travel_hours(cities[i], cities[j]) {
                    self.add_edge(nodes[i], nodes[j], hours);
                }
            }
        }
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Directed edge count (two per undirected edge).
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`CityGraph`].
    pub fn build(self) -> CityGraph<'w> {
        let node_count = self.nodes.len();

        // Stable sort keeps insertion order within each source node.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:  Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:    Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_hours: Vec<f64>    = raw.iter().map(|e| e.hours).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        CityGraph {
            node_city: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_hours,
            node_of: self.node_of,
        }
    }
}

// ── Policy-specific edge sets ─────────────────────────────────────────────────

/// Build the minimal graph `vehicle` needs to route `from → to` in `world`.
///
/// # Errors
///
/// [`RouteError::Unattached`] / [`RouteError::ForeignCity`] if either
/// endpoint is not owned by `world`.
pub fn build_graph<'w>(
    world:   &'w World,
    vehicle: &Vehicle,
    from:    &'w City,
    to:      &'w City,
) -> RouteResult<CityGraph<'w>> {
    check_member(world, from)?;
    check_member(world, to)?;

    let mut b = CityGraphBuilder::new();

    match vehicle {
        Vehicle::FlatRate { .. } => {
            b.connect_all(&[from, to], vehicle);
        }

        Vehicle::Diplomatic { .. } => {
            let origin = world.country_of(from).ok_or(RouteError::ForeignCity(from.id))?;
            let destination = world.country_of(to).ok_or(RouteError::ForeignCity(to.id))?;

            let origin_cities: Vec<&City> = origin.cities().iter().collect();
            b.connect_all(&origin_cities, vehicle);
            if destination.id != origin.id {
                let destination_cities: Vec<&City> = destination.cities().iter().collect();
                b.connect_all(&destination_cities, vehicle);
            }

            // Multi-hop routes may pass through unrelated countries' capitals.
            let primaries: Vec<&City> = world.primary_cities().collect();
            b.connect_all(&primaries, vehicle);
        }

        Vehicle::Teleport { max_distance_km, .. } => {
            connect_within(&mut b, world, vehicle, *max_distance_km);
        }
    }

    Ok(b.build())
}

/// `city` must be the very value `world` owns under its id.
///
/// A matching id or country index alone is not enough: a city from another
/// `World` can carry both.
pub(crate) fn check_member(world: &World, city: &City) -> RouteResult<()> {
    if !city.is_attached() {
        return Err(RouteError::Unattached(city.id));
    }
    match world.city(city.id) {
        Some(owned) if std::ptr::eq(owned, city) => Ok(()),
        _ => Err(RouteError::ForeignCity(city.id)),
    }
}

// ── Teleport: R-tree neighbour enumeration ────────────────────────────────────

/// Entry stored in the R-tree: a unit-sphere `[x, y, z]` point with its node.
struct CityEntry {
    point: [f64; 3],
    node:  NodeId,
}

impl RTreeObject for CityEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CityEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

/// Add every city of `world`, then every pair the vehicle accepts among
/// those whose great-circle distance is below `max_km`.
fn connect_within<'w>(b: &mut CityGraphBuilder<'w>, world: &'w World, vehicle: &Vehicle, max_km: f64) {
    let entries: Vec<CityEntry> = world
        .cities()
        .map(|c| CityEntry { point: c.position.unit_vector(), node: b.add_city(c) })
        .collect();

    // Slightly widened radius; the policy check below is exact.
    let radius = GeoPoint::chord_for_km(max_km) * (1.0 + 1e-9);
    let radius_2 = radius * radius;
    let tree = RTree::bulk_load(entries);

    let nodes = b.nodes.clone();
    for (i, &city) in nodes.iter().enumerate() {
        let here = NodeId(i as u32);
        let mut near: Vec<NodeId> = tree
            .locate_within_distance(city.position.unit_vector(), radius_2)
            .map(|e| e.node)
            .filter(|&n| n > here)
            .collect();
        // R-tree traversal order is unspecified.
        near.sort_unstable();

        for other in near {
            if let Some(hours) = vehicle.travel_hours(city, nodes[other.index()]) {
                b.add_edge(here, other, hours);
            }
        }
    }
}
