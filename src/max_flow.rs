pub mod flow;
#[cfg(test)]
pub mod mocks;
pub mod residue;
pub mod utils;

use flow::{is_valid_flow, Capacity, Flow, FlowGraph};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use residue::{
    augment_along_path, find_any_augmenting_path, find_shortest_augmenting_path,
    flow_to_residue, format_path, reachable_from, ResidueGraph,
};
use utils::{draw, draw_with_flow};

/// How an augmenting path is searched in the residue graph
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum AugmentingPathMethod {
    /// Path with the fewest edges (Edmonds-Karp)
    #[default]
    EdmondsKarp,
    /// Any path found by depth first search (generic Ford-Fulkerson)
    DepthFirst,
}

impl AugmentingPathMethod {
    fn find_path(
        &self,
        rg: &ResidueGraph,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Option<Vec<EdgeIndex>> {
        match self {
            AugmentingPathMethod::EdmondsKarp => find_shortest_augmenting_path(rg, source, sink),
            AugmentingPathMethod::DepthFirst => find_any_augmenting_path(rg, source, sink),
        }
    }
}

impl std::fmt::Display for AugmentingPathMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AugmentingPathMethod::EdmondsKarp => write!(f, "edmonds-karp"),
            AugmentingPathMethod::DepthFirst => write!(f, "depth-first"),
        }
    }
}

impl std::str::FromStr for AugmentingPathMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edmonds-karp" => Ok(AugmentingPathMethod::EdmondsKarp),
            "depth-first" => Ok(AugmentingPathMethod::DepthFirst),
            _ => Err(format!(
                "unknown method `{}` (expected `edmonds-karp` or `depth-first`)",
                s
            )),
        }
    }
}

///
/// Maximum flow and the minimum cut found from it
///
#[derive(Debug, Clone)]
pub struct MaxFlow {
    value: Capacity,
    flow: Flow,
    /// `source_side[v]` is true iff v is reachable from source in the final residue graph
    source_side: Vec<bool>,
}

impl MaxFlow {
    /// Total amount of flow leaving the source
    pub fn value(&self) -> Capacity {
        self.value
    }
    /// Flow on each edge
    pub fn flow(&self) -> &Flow {
        &self.flow
    }
    /// Is `v` on the source side of the minimum cut?
    pub fn in_cut(&self, v: NodeIndex) -> bool {
        self.source_side.get(v.index()).copied().unwrap_or(false)
    }
    ///
    /// Edges going from the source side to the sink side of the minimum cut
    ///
    pub fn cut_edges<N>(&self, graph: &FlowGraph<N>) -> Vec<EdgeIndex> {
        graph
            .edge_references()
            .filter(|er| self.in_cut(er.source()) && !self.in_cut(er.target()))
            .map(|er| er.id())
            .collect()
    }
    ///
    /// Sum of capacities of the cut edges.
    /// Equals to `value()` by max-flow min-cut theorem.
    ///
    pub fn cut_capacity<N>(&self, graph: &FlowGraph<N>) -> Capacity {
        self.cut_edges(graph)
            .into_iter()
            .map(|e| graph[e].capacity)
            .sum()
    }
}

///
/// Find the maximum flow from `source` to `sink` by repeatedly augmenting
/// along source-sink paths in the residue graph.
///
/// Terminates because each augmentation increases the flow by at least one unit
/// and the flow is bounded by the total capacity of edges leaving the source.
///
pub fn max_flow<N: std::fmt::Debug>(
    graph: &FlowGraph<N>,
    source: NodeIndex,
    sink: NodeIndex,
    method: AugmentingPathMethod,
) -> MaxFlow {
    assert!(
        source.index() < graph.node_count() && sink.index() < graph.node_count(),
        "source {:?} or sink {:?} is not in the network (V={})",
        source,
        sink,
        graph.node_count()
    );
    assert_ne!(source, sink, "source and sink must differ");
    draw(graph);

    let mut flow = Flow::zero(graph);
    let mut value = 0;
    let mut n_augment = 0;

    let rg = loop {
        debug_assert!(is_valid_flow(&flow, graph, source, sink));
        let rg = flow_to_residue(graph, &flow);
        match method.find_path(&rg, source, sink) {
            Some(path) => {
                let (new_flow, amount) = augment_along_path(&flow, &rg, &path);
                assert!(amount > 0, "augmenting path without capacity");
                log::trace!("augment {} along {}", amount, format_path(&rg, &path));
                flow = new_flow;
                value += amount;
                n_augment += 1;
            }
            None => break rg,
        }
    };

    log::debug!(
        "max flow {} after {} augmentations ({}, V={} E={})",
        value,
        n_augment,
        method,
        graph.node_count(),
        graph.edge_count()
    );
    draw_with_flow(graph, &flow);

    MaxFlow {
        value,
        source_side: reachable_from(&rg, source),
        flow,
    }
}

//
// tests
//
