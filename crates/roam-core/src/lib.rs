//! **roam-core** — Road-network route planning (core types).
//!
//! This crate provides the foundational types used across the *roam*
//! workspace: the float geometry primitive [`MapPoint`] and the concrete
//! in-memory road graph [`RoadNetwork`] with node positions, undirected
//! adjacency and nearest-node lookup.

pub mod geom;
pub mod network;

pub use geom::MapPoint;
pub use network::RoadNetwork;
