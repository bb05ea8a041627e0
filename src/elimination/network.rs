//!
//! Flow network of the remaining games, built for a single target team.
//!
//! ```text
//!             game vertices     team vertices
//!                        inf
//!           games[i][j] +---> i ---+ max_wins - wins[i]
//! source ---> (i,j) ----+          +---> sink
//!                       +---> j ---+ max_wins - wins[j]
//!                        inf
//! ```
//!
//! Vertex numbering is fixed: source = 0, game vertices in lexicographic pair
//! order, team vertices in roster order, sink last. The target team appears
//! in neither game nor team vertices.
//!
use crate::division::Division;
use crate::max_flow::flow::{Capacity, FlowEdge, FlowGraph};
use itertools::Itertools; // for tuple_combinations
use petgraph::graph::NodeIndex;

/// Label of a vertex in the elimination network
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Vertex {
    Source,
    /// remaining games between team i and team j (i < j)
    Game(usize, usize),
    /// team of the roster index
    Team(usize),
    Sink,
}

pub type NetworkGraph = FlowGraph<Vertex>;

#[derive(Debug, Clone)]
pub struct EliminationNetwork {
    pub graph: NetworkGraph,
    pub source: NodeIndex,
    pub sink: NodeIndex,
    /// sum of capacities of the edges leaving the source
    pub total_games: Capacity,
    /// capacity used for game -> team edges, larger than `total_games`
    unbounded: Capacity,
    /// `team_vertices[i]` is the vertex of the team i, None for the target
    team_vertices: Vec<Option<NodeIndex>>,
}

impl EliminationNetwork {
    ///
    /// Build the network asking whether the teams other than `target` can
    /// share all their remaining games without any of them passing `max_wins`.
    ///
    /// Panics if `target` is not a roster index.
    ///
    pub fn build(division: &Division, target: usize, max_wins: usize) -> EliminationNetwork {
        let n = division.number_of_teams();
        assert!(target < n, "target {} is not in the division (N={})", target, n);

        let others: Vec<usize> = (0..n).filter(|&i| i != target).collect();
        let pairs: Vec<(usize, usize)> = others.iter().copied().tuple_combinations().collect();
        let total_games: Capacity = pairs.iter().map(|&(i, j)| division.games(i, j)).sum();
        let unbounded = total_games + 1;

        let mut graph: NetworkGraph = FlowGraph::with_capacity(
            pairs.len() + others.len() + 2,
            3 * pairs.len() + others.len(),
        );

        // add vertices in order
        let source = graph.add_node(Vertex::Source);
        let game_vertices: Vec<NodeIndex> = pairs
            .iter()
            .map(|&(i, j)| graph.add_node(Vertex::Game(i, j)))
            .collect();
        let mut team_vertices = vec![None; n];
        for &i in others.iter() {
            team_vertices[i] = Some(graph.add_node(Vertex::Team(i)));
        }
        let sink = graph.add_node(Vertex::Sink);

        // source -> game -> teams
        for (&(i, j), &g) in pairs.iter().zip(game_vertices.iter()) {
            graph.add_edge(source, g, FlowEdge::new(division.games(i, j)));
            for v in [team_vertices[i], team_vertices[j]].iter().flatten() {
                graph.add_edge(g, *v, FlowEdge::new(unbounded));
            }
        }

        // team -> sink
        for &i in others.iter() {
            if let Some(v) = team_vertices[i] {
                let slack = max_wins.saturating_sub(division.team(i).wins);
                graph.add_edge(v, sink, FlowEdge::new(slack));
            }
        }

        log::debug!(
            "network for `{}` (max wins {}): V={} E={} total games {}",
            division.team(target).name,
            max_wins,
            graph.node_count(),
            graph.edge_count(),
            total_games
        );

        EliminationNetwork {
            graph,
            source,
            sink,
            total_games,
            unbounded,
            team_vertices,
        }
    }

    /// Capacity of the game -> team edges
    pub fn unbounded(&self) -> Capacity {
        self.unbounded
    }

    /// Vertex of the team, None for the target team
    pub fn team_vertex(&self, team: usize) -> Option<NodeIndex> {
        self.team_vertices.get(team).copied().flatten()
    }

    /// Teams (roster indices) which have a vertex, in roster order
    pub fn teams(&self) -> impl Iterator<Item = (usize, NodeIndex)> + '_ {
        self.team_vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }
}
