use super::flow::{FlowEdge, FlowGraph};
use petgraph::graph::{Graph, NodeIndex};

/// mock graph generation functions
///
/// s -> a -> b -> t, all capacity 10
pub fn mock_flow_network1() -> (FlowGraph<()>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<()> = Graph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    graph.add_edge(s, a, FlowEdge::new(10));
    graph.add_edge(a, b, FlowEdge::new(10));
    graph.add_edge(b, t, FlowEdge::new(10));
    (graph, s, t)
}

/// mock network cited from Introduction to Algorithms (CLRS) Figure 26.1
///
/// max flow is 23, min cut is {s, v1, v2, v4}
pub fn mock_flow_network2() -> (FlowGraph<&'static str>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<&'static str> = Graph::new();
    let s = graph.add_node("s");
    let v1 = graph.add_node("v1");
    let v2 = graph.add_node("v2");
    let v3 = graph.add_node("v3");
    let v4 = graph.add_node("v4");
    let t = graph.add_node("t");
    graph.add_edge(s, v1, FlowEdge::new(16));
    graph.add_edge(s, v2, FlowEdge::new(13));
    graph.add_edge(v1, v3, FlowEdge::new(12));
    graph.add_edge(v2, v1, FlowEdge::new(4));
    graph.add_edge(v2, v4, FlowEdge::new(14));
    graph.add_edge(v3, v2, FlowEdge::new(9));
    graph.add_edge(v3, t, FlowEdge::new(20));
    graph.add_edge(v4, v3, FlowEdge::new(7));
    graph.add_edge(v4, t, FlowEdge::new(4));
    (graph, s, t)
}

/// network in which the depth first search can pick a long path first
///
/// ```text
///      a
///   /  |  \
/// s    |    t
///   \  v  /
///      b
/// ```
/// max flow is 2000
pub fn mock_flow_network3() -> (FlowGraph<()>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<()> = Graph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    graph.add_edge(s, a, FlowEdge::new(1000));
    graph.add_edge(s, b, FlowEdge::new(1000));
    graph.add_edge(a, b, FlowEdge::new(1));
    graph.add_edge(a, t, FlowEdge::new(1000));
    graph.add_edge(b, t, FlowEdge::new(1000));
    (graph, s, t)
}

/// s -> a with capacity 5, then two parallel edges a -> t with capacity 1 and 3
pub fn mock_flow_network_parallel_edge() -> (FlowGraph<()>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<()> = Graph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let t = graph.add_node(());
    graph.add_edge(s, a, FlowEdge::new(5));
    graph.add_edge(a, t, FlowEdge::new(1));
    graph.add_edge(a, t, FlowEdge::new(3));
    (graph, s, t)
}
