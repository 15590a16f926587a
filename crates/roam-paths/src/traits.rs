use std::fmt;

use roam_core::{MapPoint, RoadNetwork};

/// Stable index of a node in a road graph.
///
/// Ids are assigned by the [`RouteModel`] implementation and index into the
/// planner's search state, so they must stay below
/// [`node_count`](RouteModel::node_count).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Road-graph interface consumed by the route planner.
///
/// The planner only reads through this trait during a search; all mutable
/// search state lives inside [`RoutePlanner`](crate::RoutePlanner), so one
/// model may serve several planners at once.
pub trait RouteModel {
    /// Total number of nodes. Every id handed out by the other methods must
    /// be smaller than this.
    fn node_count(&self) -> usize;

    /// The node nearest to `pos` (unit coordinates over the map).
    /// Returns `None` only when the model holds no nodes.
    fn closest_node(&self, pos: MapPoint) -> Option<NodeId>;

    /// Position of `node` in map units.
    fn position(&self, node: NodeId) -> MapPoint;

    /// Append the neighbors of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>);

    /// Straight-line distance between two nodes, in map units. Must be
    /// non-negative and symmetric.
    fn distance(&self, a: NodeId, b: NodeId) -> f32;

    /// Conversion factor from map units to real-world distance units.
    fn metric_scale(&self) -> f32 {
        1.0
    }

    /// Heuristic estimate of the remaining route cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible). The default,
    /// straight-line distance, is admissible whenever edge costs respect
    /// the triangle inequality.
    fn estimate(&self, from: NodeId, to: NodeId) -> f32 {
        self.distance(from, to)
    }
}

impl RouteModel for RoadNetwork {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn closest_node(&self, pos: MapPoint) -> Option<NodeId> {
        self.closest(pos).map(NodeId)
    }

    fn position(&self, node: NodeId) -> MapPoint {
        self.position(node.0)
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend(self.neighbors(node.0).iter().copied().map(NodeId));
    }

    fn distance(&self, a: NodeId, b: NodeId) -> f32 {
        self.distance(a.0, b.0)
    }

    fn metric_scale(&self) -> f32 {
        self.scale()
    }
}
