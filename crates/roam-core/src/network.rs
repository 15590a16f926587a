//! The [`RoadNetwork`] type — an in-memory road graph.
//!
//! Nodes are positions in map units, identified by insertion index. Roads
//! are undirected edges between node indices. The network also carries the
//! metric scale converting map units into real-world distance units.

use crate::geom::MapPoint;

/// An in-memory road graph: node positions plus undirected adjacency.
///
/// Node indices are assigned by [`add_node`](RoadNetwork::add_node) in
/// insertion order and remain stable for the lifetime of the network.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadNetwork {
    positions: Vec<MapPoint>,
    adjacency: Vec<Vec<usize>>,
    scale: f32,
}

impl RoadNetwork {
    /// Create an empty network with the given map-unit-to-real-world scale.
    pub fn new(scale: f32) -> Self {
        Self {
            positions: Vec::new(),
            adjacency: Vec::new(),
            scale,
        }
    }

    /// Add a node at `pos` and return its index.
    pub fn add_node(&mut self, pos: MapPoint) -> usize {
        self.positions.push(pos);
        self.adjacency.push(Vec::new());
        self.positions.len() - 1
    }

    /// Connect nodes `a` and `b` with an undirected road.
    ///
    /// Both indices must refer to existing nodes. A duplicate road between
    /// the same pair is ignored.
    pub fn add_road(&mut self, a: usize, b: usize) {
        assert!(
            a < self.positions.len() && b < self.positions.len(),
            "road endpoints must be existing nodes"
        );
        if a == b || self.adjacency[a].contains(&b) {
            return;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the network has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of node `idx`.
    #[inline]
    pub fn position(&self, idx: usize) -> MapPoint {
        self.positions[idx]
    }

    /// Indices of the nodes connected to `idx` by a road.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    /// Straight-line distance between two nodes, in map units.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.positions[a].distance(self.positions[b])
    }

    /// Conversion factor from map units to real-world distance units.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Index of the node closest to `p`, or `None` if the network is empty.
    ///
    /// Linear scan over all nodes. Ties resolve to the lowest index.
    pub fn closest(&self, p: MapPoint) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &pos) in self.positions.iter().enumerate() {
            let d = pos.distance(p);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_road_is_undirected() {
        let mut net = RoadNetwork::new(1.0);
        let a = net.add_node(MapPoint::new(0.0, 0.0));
        let b = net.add_node(MapPoint::new(1.0, 0.0));
        net.add_road(a, b);
        assert_eq!(net.neighbors(a), &[b]);
        assert_eq!(net.neighbors(b), &[a]);
    }

    #[test]
    fn duplicate_and_self_roads_ignored() {
        let mut net = RoadNetwork::new(1.0);
        let a = net.add_node(MapPoint::ZERO);
        let b = net.add_node(MapPoint::new(1.0, 1.0));
        net.add_road(a, b);
        net.add_road(b, a);
        net.add_road(a, a);
        assert_eq!(net.neighbors(a), &[b]);
        assert_eq!(net.neighbors(b), &[a]);
    }

    #[test]
    fn closest_picks_nearest_node() {
        let mut net = RoadNetwork::new(1.0);
        net.add_node(MapPoint::new(0.0, 0.0));
        let b = net.add_node(MapPoint::new(5.0, 5.0));
        net.add_node(MapPoint::new(10.0, 0.0));
        assert_eq!(net.closest(MapPoint::new(4.0, 4.5)), Some(b));
        assert_eq!(net.closest(MapPoint::new(0.1, 0.0)), Some(0));
    }

    #[test]
    fn closest_on_empty_network() {
        let net = RoadNetwork::new(1.0);
        assert_eq!(net.closest(MapPoint::ZERO), None);
    }

    #[test]
    fn distance_between_nodes() {
        let mut net = RoadNetwork::new(1.0);
        let a = net.add_node(MapPoint::new(0.0, 0.0));
        let b = net.add_node(MapPoint::new(3.0, 4.0));
        assert_eq!(net.distance(a, b), 5.0);
    }
}
