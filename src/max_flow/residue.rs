//! Residue graph related definitions
//! - ResidueEdge
//! - ResidueGraph
//! - ResidueDirection
//!
use super::flow::{Capacity, Flow, FlowGraph};
use itertools::Itertools; // for join
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::prelude::*;
use petgraph::visit::{depth_first_search, Control, DfsEvent, VisitMap};

// basic definitions

/// Edge attributes used in ResidueGraph
#[derive(Debug, Default, Copy, Clone)]
pub struct ResidueEdge {
    /// The movable amount of the flow
    pub count: Capacity,
    /// Original edge index of the source graph
    pub target: EdgeIndex,
    /// +1 or -1
    pub direction: ResidueDirection,
}

impl ResidueEdge {
    pub fn new(count: Capacity, target: EdgeIndex, direction: ResidueDirection) -> ResidueEdge {
        ResidueEdge {
            count,
            target,
            direction,
        }
    }
}

/// Residue direction enum
/// residue edge has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ResidueDirection {
    /// Up edge: it can increase(+1) flow
    #[default]
    Up,
    /// Down edge: it can decrease(-1) flow
    Down,
}

impl std::fmt::Display for ResidueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResidueDirection::Up => write!(f, "+"),
            ResidueDirection::Down => write!(f, "-"),
        }
    }
}

#[cfg(test)]
impl std::str::FromStr for ResidueDirection {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(ResidueDirection::Up),
            "-" => Ok(ResidueDirection::Down),
            _ => Err(()),
        }
    }
}

/// ResidueGraph definition
pub type ResidueGraph = DiGraph<(), ResidueEdge>;

//
// conversion functions
//

/// Convert FlowGraph with Flow into ResidueGraph.
///
/// FlowGraph and Flow
/// v -> w
///  e = [0,u], f
///
/// into
///
/// ResidueGraph
/// v -> w
///  e1 = (u-f, +) if u-f>0
/// w -> v
///  e2 = (f, -) if f>0
///
/// Node indices are shared with the FlowGraph, including isolated nodes.
pub fn flow_to_residue<N>(graph: &FlowGraph<N>, flow: &Flow) -> ResidueGraph {
    assert_eq!(
        flow.len(),
        graph.edge_count(),
        "flow (len={}) does not match network (E={})",
        flow.len(),
        graph.edge_count()
    );

    let mut rg: ResidueGraph =
        ResidueGraph::with_capacity(graph.node_count(), 2 * graph.edge_count());
    for _ in graph.node_indices() {
        rg.add_node(());
    }

    // create two edges (Up and Down) for each edge
    for er in graph.edge_references() {
        let e = er.id();
        let f = flow[e];
        let (v, w) = (er.source(), er.target());
        let capacity = er.weight().capacity;

        if f < capacity {
            // up movable
            rg.add_edge(v, w, ResidueEdge::new(capacity - f, e, ResidueDirection::Up));
        }
        if f > 0 {
            // down movable
            rg.add_edge(w, v, ResidueEdge::new(f, e, ResidueDirection::Down));
        }
    }
    rg
}

//
// augmenting path search
//

///
/// Convert a path as nodes into a path as edges
///
/// Among parallel edges, the one with the largest movable amount is chosen.
/// Returns None if some consecutive nodes are not connected.
///
pub fn node_path_to_edge_path(rg: &ResidueGraph, node_path: &[NodeIndex]) -> Option<Vec<EdgeIndex>> {
    node_path
        .windows(2)
        .map(|vw| {
            rg.edges_connecting(vw[0], vw[1])
                .max_by_key(|e| e.weight().count)
                .map(|e| e.id())
        })
        .collect()
}

///
/// Find a source-sink path with the fewest edges in the residue graph.
///
/// A* with unit edge weight and zero heuristic visits nodes in breadth-first order,
/// which makes the Ford-Fulkerson iteration into Edmonds-Karp.
///
pub fn find_shortest_augmenting_path(
    rg: &ResidueGraph,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<Vec<EdgeIndex>> {
    astar(rg, source, |finish| finish == sink, |_| 1usize, |_| 0usize)
        .and_then(|(_, nodes)| node_path_to_edge_path(rg, &nodes))
}

///
/// Find any source-sink path in the residue graph by depth first search.
///
pub fn find_any_augmenting_path(
    rg: &ResidueGraph,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<Vec<EdgeIndex>> {
    if source == sink {
        return None;
    }

    // parent[v] is the node from which v was discovered
    let mut parent: Vec<Option<NodeIndex>> = vec![None; rg.node_count()];
    let found = depth_first_search(rg, Some(source), |event| {
        if let DfsEvent::TreeEdge(u, v) = event {
            parent[v.index()] = Some(u);
            if v == sink {
                return Control::Break(v);
            }
        }
        Control::Continue
    });
    found.break_value()?;

    // trace back from sink to source
    let mut nodes = vec![sink];
    let mut v = sink;
    while let Some(u) = parent[v.index()] {
        nodes.push(u);
        v = u;
    }
    nodes.reverse();
    node_path_to_edge_path(rg, &nodes)
}

///
/// Set of nodes reachable from `source` in the residue graph.
///
/// `result[v.index()]` is true iff v is reachable.
///
pub fn reachable_from(rg: &ResidueGraph, source: NodeIndex) -> Vec<bool> {
    let mut dfs = Dfs::new(rg, source);
    while let Some(_nx) = dfs.next(rg) {}
    rg.node_indices()
        .map(|v| dfs.discovered.is_visited(&v))
        .collect()
}

//
// flow update
//

///
/// Change Flow by `amount` along the edges of a path in residue graph
///
pub fn change_flow_along_edges(
    flow: &Flow,
    rg: &ResidueGraph,
    edges: &[EdgeIndex],
    amount: Capacity,
) -> Flow {
    let mut new_flow = flow.clone();
    for &edge in edges {
        let ew = &rg[edge];
        // convert back to the original edgeindex
        let original_edge = ew.target;
        match ew.direction {
            ResidueDirection::Up => new_flow[original_edge] += amount,
            ResidueDirection::Down => new_flow[original_edge] -= amount,
        };
    }
    new_flow
}

///
/// The largest amount which can be pushed along the path,
/// that is the minimum of ResidueEdge.count
///
pub fn bottleneck(rg: &ResidueGraph, edges: &[EdgeIndex]) -> Option<Capacity> {
    edges.iter().map(|&e| rg[e].count).min()
}

///
/// Update the flow by pushing the bottleneck amount along an augmenting path.
/// Returns the new flow and the pushed amount.
///
pub fn augment_along_path(flow: &Flow, rg: &ResidueGraph, path: &[EdgeIndex]) -> (Flow, Capacity) {
    let amount = bottleneck(rg, path).unwrap_or(0);
    (change_flow_along_edges(flow, rg, path, amount), amount)
}

pub fn format_path(rg: &ResidueGraph, path: &[EdgeIndex]) -> String {
    path.iter()
        .map(|&edge| {
            let (v, w) = rg.edge_endpoints(edge).unwrap_or_default();
            let weight = &rg[edge];
            format!(
                "{}->{}(e{}{})c{}",
                v.index(),
                w.index(),
                weight.target.index(),
                weight.direction,
                weight.count
            )
        })
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::super::flow::FlowEdge;
    use super::super::mocks::{mock_flow_network1, mock_flow_network_parallel_edge};
    use super::*;

    fn ei(i: usize) -> EdgeIndex {
        EdgeIndex::new(i)
    }
    fn ni(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn residue_direction_basic() {
        let up = ResidueDirection::Up;
        assert_eq!(up.to_string(), "+");
        assert_eq!("+".parse::<ResidueDirection>().unwrap(), up);

        let down = ResidueDirection::Down;
        assert_eq!(down.to_string(), "-");
        assert_eq!("-".parse::<ResidueDirection>().unwrap(), down);

        assert!("x".parse::<ResidueDirection>().is_err());
        assert_eq!(ResidueDirection::default(), up);
    }

    #[test]
    fn residue_of_zero_and_full_flow() {
        let (g, _, _) = mock_flow_network1();

        // only up edges when nothing flows
        let rg = flow_to_residue(&g, &Flow::zero(&g));
        assert_eq!(rg.node_count(), g.node_count());
        assert_eq!(rg.edge_count(), 3);
        assert!(rg
            .edge_weights()
            .all(|ew| ew.direction == ResidueDirection::Up && ew.count == 10));

        // only down edges when saturated
        let rg = flow_to_residue(&g, &Flow::from_vec(vec![10, 10, 10]));
        assert_eq!(rg.edge_count(), 3);
        assert!(rg
            .edge_weights()
            .all(|ew| ew.direction == ResidueDirection::Down && ew.count == 10));

        // both when half
        let rg = flow_to_residue(&g, &Flow::from_vec(vec![4, 4, 4]));
        assert_eq!(rg.edge_count(), 6);
        let e = rg.find_edge(ni(1), ni(0)).unwrap();
        assert_eq!(rg[e].count, 4);
        assert_eq!(rg[e].target, ei(0));
        assert_eq!(rg[e].direction, ResidueDirection::Down);
    }

    #[test]
    fn residue_keeps_isolated_nodes() {
        let mut g: FlowGraph<()> = FlowGraph::new();
        let s = g.add_node(());
        let a = g.add_node(());
        let _t = g.add_node(());
        g.add_edge(s, a, FlowEdge::new(1));
        let rg = flow_to_residue(&g, &Flow::zero(&g));
        assert_eq!(rg.node_count(), 3);
        assert!(find_shortest_augmenting_path(&rg, s, ni(2)).is_none());
        assert!(find_any_augmenting_path(&rg, s, ni(2)).is_none());
        assert_eq!(reachable_from(&rg, s), vec![true, true, false]);
    }

    #[test]
    fn augmenting_path_search() {
        let (g, s, t) = mock_flow_network1();
        let rg = flow_to_residue(&g, &Flow::zero(&g));

        let path = find_shortest_augmenting_path(&rg, s, t).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(bottleneck(&rg, &path), Some(10));
        let path2 = find_any_augmenting_path(&rg, s, t).unwrap();
        assert_eq!(path, path2);

        let (flow, amount) = augment_along_path(&Flow::zero(&g), &rg, &path);
        assert_eq!(amount, 10);
        assert_eq!(flow, Flow::from_vec(vec![10, 10, 10]));

        // saturated; no more path
        let rg = flow_to_residue(&g, &flow);
        assert!(find_shortest_augmenting_path(&rg, s, t).is_none());
        assert!(find_any_augmenting_path(&rg, s, t).is_none());
        assert_eq!(reachable_from(&rg, s), vec![true, false, false, false]);
    }

    #[test]
    fn parallel_edges_pick_largest() {
        let (g, s, t) = mock_flow_network_parallel_edge();
        let rg = flow_to_residue(&g, &Flow::zero(&g));
        let path = find_shortest_augmenting_path(&rg, s, t).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(bottleneck(&rg, &path), Some(3));
        assert_eq!(rg[path[1]].target, ei(2));
    }

    #[test]
    fn cancel_flow_by_down_edge() {
        let (g, _, _) = mock_flow_network1();
        let flow = Flow::from_vec(vec![6, 6, 6]);
        let rg = flow_to_residue(&g, &flow);
        let down: Vec<EdgeIndex> = rg
            .edge_references()
            .filter(|e| e.weight().direction == ResidueDirection::Down)
            .map(|e| e.id())
            .collect();
        let new_flow = change_flow_along_edges(&flow, &rg, &down, 2);
        assert_eq!(new_flow, Flow::from_vec(vec![4, 4, 4]));
        assert!(!format_path(&rg, &down).is_empty());
    }
}
