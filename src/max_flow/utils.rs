//!
//! utils
//!
use super::flow::{Flow, FlowGraph};
use petgraph::dot::{Config, Dot};
use petgraph::graph::Graph;
use petgraph::EdgeType;

///
/// Graphviz representation of the graph
///
pub fn to_dot<'a, N: 'a, E: 'a, Ty, Ix>(graph: &'a Graph<N, E, Ty, Ix>) -> String
where
    E: std::fmt::Debug,
    N: std::fmt::Debug,
    Ty: EdgeType,
    Ix: petgraph::graph::IndexType,
{
    format!("{:?}", Dot::with_config(graph, &[Config::EdgeNoLabel]))
}

///
/// Dump the graph to the trace log, if enabled
///
pub fn draw<'a, N: 'a, E: 'a, Ty, Ix>(graph: &'a Graph<N, E, Ty, Ix>)
where
    E: std::fmt::Debug,
    N: std::fmt::Debug,
    Ty: EdgeType,
    Ix: petgraph::graph::IndexType,
{
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("{}", to_dot(graph));
    }
}

///
/// Dump the graph with `flow/capacity` edge labels to the trace log, if enabled
///
pub fn draw_with_flow<N: std::fmt::Debug>(graph: &FlowGraph<N>, flow: &Flow) {
    if log::log_enabled!(log::Level::Trace) {
        let labeled = graph.map(
            |_, nw| format!("{:?}", nw),
            |e, ew| format!("{}/{}", flow.get(e).unwrap_or(0), ew.capacity),
        );
        log::trace!("{}", Dot::with_config(&labeled, &[]));
    }
}
