//! Route planning on road-network graphs.
//!
//! This crate finds shortest road routes with **A\*** search. Two geographic
//! positions (percentage coordinates over the map) are resolved to their
//! nearest road nodes, then the search expands outward from the start node
//! until the goal node is reached, and the winning parent chain is folded
//! back into an ordered node path with a real-world distance.
//!
//! All queries run through [`RoutePlanner`], which owns and reuses its
//! internal search state so that repeated queries incur zero allocations
//! after warm-up. The road graph itself is supplied by the caller through
//! the [`RouteModel`] trait; a ready-made implementation exists for
//! [`roam_core::RoadNetwork`].
//!
//! ```
//! use roam_core::{MapPoint, RoadNetwork};
//! use roam_paths::RoutePlanner;
//!
//! let mut net = RoadNetwork::new(1.0);
//! let a = net.add_node(MapPoint::new(0.0, 0.0));
//! let b = net.add_node(MapPoint::new(1.0, 0.0));
//! net.add_road(a, b);
//!
//! let mut planner = RoutePlanner::new();
//! let route = planner.plan_route(&net, MapPoint::new(0.0, 0.0), MapPoint::new(100.0, 0.0));
//! assert_eq!(route.unwrap().nodes.len(), 2);
//! ```

mod astar;
mod planner;
mod traits;

pub use planner::{Route, RoutePlanner};
pub use traits::{NodeId, RouteModel};
