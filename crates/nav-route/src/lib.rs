//! `nav-route` — vehicle policies and shortest-path routing between cities.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`itinerary`] | `Itinerary` (ordered city visits, minimum-detour insertion) |
//! | [`vehicle`]   | `Vehicle` policy enum: travel cost + direct shortcut       |
//! | [`graph`]     | `CityGraph` (CSR), `CityGraphBuilder`, per-policy `build_graph` |
//! | [`router`]    | `Router` trait, `DijkstraRouter`, `find_shortest_path`     |
//! | [`compare`]   | `compare_vehicles`, `VehicleComparison`                    |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                             |
//!
//! # Query pipeline
//!
//! ```text
//! Vehicle::direct_shortcut ──hit──▶ two-city Itinerary
//!          │ miss
//!          ▼
//! graph::build_graph (policy-specific minimal edge set)
//!          ▼
//! Dijkstra from origin ──▶ Some(Itinerary) | None (unreachable)
//! ```
//!
//! Every query rebuilds its graph from the read-only [`nav_world::World`];
//! nothing is cached between queries, so concurrent queries need no locking.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | `compare_vehicles` routes each vehicle on Rayon's pool.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Vehicle`.            |

pub mod compare;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod router;
pub mod vehicle;


pub use compare::{VehicleComparison, compare_vehicles};
pub use error::{RouteError, RouteResult};
pub use graph::{CityGraph, CityGraphBuilder, build_graph};
pub use itinerary::Itinerary;
pub use router::{DijkstraRouter, Router, find_shortest_path};
pub use vehicle::Vehicle;
