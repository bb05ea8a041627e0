//! Flow graph definitions
//! - Capacity
//! - FlowEdge
//! - FlowGraph<N>
//! - Flow
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()
use petgraph::Direction;
use std::ops::{Index, IndexMut};

/// Amount of flow, and upper limit of flow on an edge
pub type Capacity = usize;

/// Edge attributes used in FlowGraph
///
/// Lower limit of the flow is always zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: Capacity,
}

impl FlowEdge {
    pub fn new(capacity: Capacity) -> FlowEdge {
        FlowEdge { capacity }
    }
}

impl std::fmt::Display for FlowEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[0,{}]", self.capacity)
    }
}

/// FlowGraph definition
///
/// Node weight `N` is a label of the vertex, it is not used by the solver.
pub type FlowGraph<N> = DiGraph<N, FlowEdge>;

/// Flow definitions
///
/// Flow f is a mapping of `Capacity` f(e) to each edge e,
/// stored densely by edge index.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Flow(Vec<Capacity>);

impl Flow {
    pub fn zero<N, E>(graph: &DiGraph<N, E>) -> Flow {
        Flow(vec![0; graph.edge_count()])
    }
    #[cfg(test)]
    pub fn from_vec(vec: Vec<Capacity>) -> Flow {
        Flow(vec)
    }
    pub fn get(&self, e: EdgeIndex) -> Option<Capacity> {
        self.0.get(e.index()).copied()
    }
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
    ///
    /// Net amount of flow leaving the node `v`
    ///
    pub fn outflow<N>(&self, graph: &FlowGraph<N>, v: NodeIndex) -> Capacity {
        graph
            .edges_directed(v, Direction::Outgoing)
            .map(|er| self[er.id()])
            .sum()
    }
    ///
    /// Net amount of flow entering the node `v`
    ///
    pub fn inflow<N>(&self, graph: &FlowGraph<N>, v: NodeIndex) -> Capacity {
        graph
            .edges_directed(v, Direction::Incoming)
            .map(|er| self[er.id()])
            .sum()
    }
}

impl Index<EdgeIndex> for Flow {
    type Output = Capacity;
    fn index(&self, e: EdgeIndex) -> &Capacity {
        &self.0[e.index()]
    }
}

impl IndexMut<EdgeIndex> for Flow {
    fn index_mut(&mut self, e: EdgeIndex) -> &mut Capacity {
        &mut self.0[e.index()]
    }
}

///
/// Check if the flow is a valid source-sink flow, i.e. it satisfies
/// - flows of all edges are defined
/// - capacity constraint
/// - flow constraint on every node other than source and sink
///
pub fn is_valid_flow<N>(
    flow: &Flow,
    graph: &FlowGraph<N>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool {
    is_defined_for_all_edges(flow, graph)
        && is_in_capacity(flow, graph)
        && is_satisfying_flow_constraint(flow, graph, source, sink)
}

///
/// Check if the flow contains all edges
///
pub fn is_defined_for_all_edges<N>(flow: &Flow, graph: &FlowGraph<N>) -> bool {
    flow.len() == graph.edge_count()
}

///
/// For each edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_in_capacity<N>(flow: &Flow, graph: &FlowGraph<N>) -> bool {
    graph.edge_references().all(|er| match flow.get(er.id()) {
        Some(f) => f <= er.weight().capacity,
        None => false,
    })
}

///
/// For each node except source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<N>(
    flow: &Flow,
    graph: &FlowGraph<N>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool {
    graph
        .node_indices()
        .filter(|&v| v != source && v != sink)
        .all(|v| flow.inflow(graph, v) == flow.outflow(graph, v))
}
