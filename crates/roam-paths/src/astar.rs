use std::collections::BinaryHeap;

use roam_core::MapPoint;

use crate::planner::{HeapEntry, Route, RoutePlanner};
use crate::traits::{NodeId, RouteModel};

impl RoutePlanner {
    /// Plan a route between two geographic positions.
    ///
    /// `start` and `end` are percentage coordinates over the map extent
    /// (0–100 on each axis); each is scaled into unit coordinates and
    /// snapped to the nearest road node before searching. Returns `None`
    /// when the model is empty or no route connects the two nodes.
    pub fn plan_route<M: RouteModel>(
        &mut self,
        model: &M,
        start: MapPoint,
        end: MapPoint,
    ) -> Option<Route> {
        let from = model.closest_node(start * 0.01)?;
        let to = model.closest_node(end * 0.01)?;
        self.astar_path(model, from, to)
    }

    /// Compute the shortest route from `from` to `to` using A*.
    ///
    /// Returns the full route (including both endpoints) with its distance
    /// already converted to real-world units, or `None` if the goal is
    /// unreachable from the start.
    pub fn astar_path<M: RouteModel>(
        &mut self,
        model: &M,
        from: NodeId,
        to: NodeId,
    ) -> Option<Route> {
        self.ensure_len(model.node_count());

        let start_idx = from.0;
        let goal_idx = to.0;
        if start_idx >= self.nodes.len() || goal_idx >= self.nodes.len() {
            return None;
        }

        if start_idx == goal_idx {
            return Some(Route {
                nodes: vec![from],
                distance: 0.0,
            });
        }

        // Bump generation to lazily invalidate all arena entries.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.f = model.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_id = NodeId(ci);

            nbuf.clear();
            model.neighbors(current_id, &mut nbuf);

            for &np in nbuf.iter() {
                let ni = np.0;
                if ni >= self.nodes.len() {
                    continue;
                }
                let tentative_g = current_g + model.distance(current_id, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered; relax only if strictly cheaper.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + model.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(HeapEntry { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("no route from {from} to {to}: frontier exhausted");
            return None;
        }

        // Walk the parent chain back to the start, summing pairwise map
        // distances, then flip into start -> goal order.
        let mut nodes = Vec::new();
        let mut distance = 0.0_f32;
        let mut ci = goal_idx;
        loop {
            nodes.push(NodeId(ci));
            let pi = self.nodes[ci].parent;
            if pi == usize::MAX {
                break;
            }
            distance += model.distance(NodeId(ci), NodeId(pi));
            ci = pi;
        }
        nodes.reverse();
        distance *= model.metric_scale();

        log::debug!("route {from} -> {to}: {} nodes, {distance} units", nodes.len());
        Some(Route { nodes, distance })
    }
}
