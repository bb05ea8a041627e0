//!
//! Elimination queries on a `Division`
//!
//! A team is eliminated when it cannot finish with at least as many wins as every
//! other team. The check has two stages:
//!
//! 1. trivial: some team already has more wins than the target can reach
//! 2. non-trivial: the remaining games among the other teams cannot be shared out
//!    without one of them passing the target. Decided by the max flow on
//!    `network::EliminationNetwork`, whose min cut also gives the certificate.
//!
pub mod network;

use crate::division::Division;
use crate::error::Result;
use crate::max_flow::{max_flow, AugmentingPathMethod};
use network::EliminationNetwork;

/// Outcome of an elimination query, with the certificate as roster indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    NotEliminated,
    /// Teams whose current wins already exceed the target's maximum
    Trivial(Vec<usize>),
    /// Teams on the source side of the minimum cut
    NonTrivial(Vec<usize>),
}

impl Verdict {
    pub fn is_eliminated(&self) -> bool {
        !matches!(self, Verdict::NotEliminated)
    }
    /// Certificate of elimination, None if not eliminated
    pub fn certificate(&self) -> Option<&[usize]> {
        match self {
            Verdict::NotEliminated => None,
            Verdict::Trivial(teams) | Verdict::NonTrivial(teams) => Some(teams.as_slice()),
        }
    }
}

///
/// Elimination query engine.
///
/// Holds no state between queries; every query builds and discards its own network.
///
#[derive(Debug, Clone, Copy)]
pub struct Elimination<'a> {
    division: &'a Division,
    method: AugmentingPathMethod,
}

impl<'a> Elimination<'a> {
    pub fn new(division: &'a Division) -> Elimination<'a> {
        Elimination::with_method(division, AugmentingPathMethod::default())
    }
    pub fn with_method(division: &'a Division, method: AugmentingPathMethod) -> Elimination<'a> {
        Elimination { division, method }
    }

    pub fn verdict(&self, name: &str) -> Result<Verdict> {
        let x = self.division.index_of(name)?;
        let verdict = self.verdict_of(x);
        log::debug!("`{}`: {:?}", name, verdict);
        Ok(verdict)
    }

    pub fn is_eliminated(&self, name: &str) -> Result<bool> {
        Ok(self.verdict(name)?.is_eliminated())
    }

    ///
    /// Subset of teams whose wins and games among themselves force one of them
    /// past the maximum wins of `name`, in roster order. None if not eliminated.
    ///
    pub fn certificate_of_elimination(&self, name: &str) -> Result<Option<Vec<String>>> {
        let verdict = self.verdict(name)?;
        Ok(verdict.certificate().map(|teams| {
            teams
                .iter()
                .map(|&i| self.division.team(i).name.clone())
                .collect()
        }))
    }

    //
    // index based
    //

    pub fn verdict_of(&self, x: usize) -> Verdict {
        let leaders = self.trivial_certificate(x);
        if !leaders.is_empty() {
            return Verdict::Trivial(leaders);
        }
        match self.flow_certificate(x) {
            Some(teams) => Verdict::NonTrivial(teams),
            None => Verdict::NotEliminated,
        }
    }

    /// Teams which already won more than `x` can reach
    fn trivial_certificate(&self, x: usize) -> Vec<usize> {
        let max_wins = self.division.max_wins(x);
        (0..self.division.number_of_teams())
            .filter(|&i| i != x && self.division.team(i).wins > max_wins)
            .collect()
    }

    ///
    /// Run the max flow on the network of `x`.
    /// If some game cannot be absorbed (the flow does not saturate the source edges),
    /// return the teams on the source side of the min cut.
    ///
    fn flow_certificate(&self, x: usize) -> Option<Vec<usize>> {
        let net = EliminationNetwork::build(self.division, x, self.division.max_wins(x));
        let mf = max_flow(&net.graph, net.source, net.sink, self.method);
        if mf.value() == net.total_games {
            return None;
        }
        let teams: Vec<usize> = net
            .teams()
            .filter(|&(_, v)| mf.in_cut(v))
            .map(|(i, _)| i)
            .collect();
        assert!(
            !teams.is_empty(),
            "min cut of unsaturated network for team {} has no team vertex",
            x
        );
        Some(teams)
    }
}

impl Division {
    /// Shortcut of `Elimination::new(self).is_eliminated(name)`
    pub fn is_eliminated(&self, name: &str) -> Result<bool> {
        Elimination::new(self).is_eliminated(name)
    }
    /// Shortcut of `Elimination::new(self).certificate_of_elimination(name)`
    pub fn certificate_of_elimination(&self, name: &str) -> Result<Option<Vec<String>>> {
        Elimination::new(self).certificate_of_elimination(name)
    }
}
