//! # `Division`
//!
//! Standings of a division: per-team record and the matrix of remaining games.
//!
//! Text format read by `Division::from_str`:
//!
//! ```text
//! 4
//! Atlanta       83 71  8  0 1 6 1
//! Philadelphia  80 79  3  1 0 0 2
//! New_York      78 78  6  6 0 0 0
//! Montreal      77 82  3  1 2 0 0
//! ```
//!
//! * number of teams `N`
//! * `N` records of `name wins losses remaining` followed by `N` games against each team
//!
//! Tokens are separated by any whitespace; line breaks carry no meaning.
//!
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Record of a single team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub wins: usize,
    pub losses: usize,
    /// games left to play, including games against teams outside the division
    pub remaining: usize,
}

impl Team {
    pub fn new(name: &str, wins: usize, losses: usize, remaining: usize) -> Team {
        Team {
            name: name.to_string(),
            wins,
            losses,
            remaining,
        }
    }
    /// The most wins this team can finish with
    pub fn max_wins(&self) -> usize {
        self.wins + self.remaining
    }
}

/// Immutable standings of a division.
///
/// Teams are identified by name in the public API and by their roster position
/// (a dense index in `[0, N)`) internally.
#[derive(Debug, Clone)]
pub struct Division {
    teams: Vec<Team>,
    /// `games[i][j]`: remaining games between team i and team j
    games: Vec<Vec<usize>>,
    index: HashMap<String, usize>,
}

impl Division {
    ///
    /// Create a division from team records and the schedule matrix.
    ///
    /// The matrix must be `N x N`, symmetric and zero on the diagonal.
    /// Team names must be unique, non-empty and free of whitespace.
    /// Each team's wins plus remaining games, and the sum of all games plus one,
    /// must fit in `usize`.
    ///
    pub fn new(teams: Vec<Team>, games: Vec<Vec<usize>>) -> Result<Division> {
        let n = teams.len();
        if games.len() != n {
            return Err(Error::MalformedInput(format!(
                "schedule has {} rows for {} teams",
                games.len(),
                n
            )));
        }

        let mut index = HashMap::with_capacity(n);
        for (i, team) in teams.iter().enumerate() {
            if team.name.is_empty() || team.name.contains(char::is_whitespace) {
                return Err(Error::MalformedInput(format!(
                    "invalid team name {:?}",
                    team.name
                )));
            }
            if index.insert(team.name.clone(), i).is_some() {
                return Err(Error::MalformedInput(format!(
                    "duplicate team `{}`",
                    team.name
                )));
            }
        }

        for (i, row) in games.iter().enumerate() {
            if row.len() != n {
                return Err(Error::MalformedInput(format!(
                    "schedule row of `{}` has {} entries for {} teams",
                    teams[i].name,
                    row.len(),
                    n
                )));
            }
            if row[i] != 0 {
                return Err(Error::MalformedInput(format!(
                    "`{}` has {} games left against itself",
                    teams[i].name, row[i]
                )));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if games[i][j] != games[j][i] {
                    return Err(Error::MalformedInput(format!(
                        "schedule is not symmetric: `{}` vs `{}` is {} but `{}` vs `{}` is {}",
                        teams[i].name,
                        teams[j].name,
                        games[i][j],
                        teams[j].name,
                        teams[i].name,
                        games[j][i]
                    )));
                }
            }
        }

        for team in teams.iter() {
            if team.wins.checked_add(team.remaining).is_none() {
                return Err(Error::MalformedInput(format!(
                    "wins plus remaining games of `{}` overflow",
                    team.name
                )));
            }
        }
        // the elimination network needs a capacity above the sum of all games
        let total = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .try_fold(1usize, |total, (i, j)| total.checked_add(games[i][j]));
        if total.is_none() {
            return Err(Error::MalformedInput(
                "total number of remaining games overflows".to_string(),
            ));
        }

        Ok(Division {
            teams,
            games,
            index,
        })
    }

    /// Read a division from a standings file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Division> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    //
    // name based accessors
    //

    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }
    /// Team names in roster order
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|team| team.name.as_str())
    }
    pub fn wins(&self, name: &str) -> Result<usize> {
        Ok(self.team(self.index_of(name)?).wins)
    }
    pub fn losses(&self, name: &str) -> Result<usize> {
        Ok(self.team(self.index_of(name)?).losses)
    }
    pub fn remaining(&self, name: &str) -> Result<usize> {
        Ok(self.team(self.index_of(name)?).remaining)
    }
    /// Remaining games between two teams
    pub fn against(&self, name1: &str, name2: &str) -> Result<usize> {
        let i = self.index_of(name1)?;
        let j = self.index_of(name2)?;
        Ok(self.games(i, j))
    }

    //
    // index based accessors
    //

    /// Roster position of the team
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownTeam(name.to_string()))
    }
    pub fn team(&self, i: usize) -> &Team {
        &self.teams[i]
    }
    pub fn games(&self, i: usize, j: usize) -> usize {
        self.games[i][j]
    }
    pub fn max_wins(&self, i: usize) -> usize {
        self.teams[i].max_wins()
    }
}

///
/// Pulls whitespace separated tokens, reporting what was expected when the input ends.
///
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_token(&mut self, what: &dyn Fn() -> String) -> Result<&'a str> {
        self.inner.next().ok_or_else(|| {
            Error::MalformedInput(format!("unexpected end of input, expected {}", what()))
        })
    }
    fn next_count(&mut self, what: &dyn Fn() -> String) -> Result<usize> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            Error::MalformedInput(format!(
                "expected {} to be a non-negative integer, found `{}`",
                what(),
                token
            ))
        })
    }
}

impl FromStr for Division {
    type Err = Error;
    fn from_str(s: &str) -> Result<Division> {
        let mut tokens = Tokens {
            inner: s.split_whitespace(),
        };
        let n = tokens.next_count(&|| "the number of teams".to_string())?;

        let mut teams = Vec::new();
        let mut games = Vec::new();
        for i in 0..n {
            let name = tokens.next_token(&|| format!("the name of team {}", i + 1))?;
            let wins = tokens.next_count(&|| format!("wins of `{}`", name))?;
            let losses = tokens.next_count(&|| format!("losses of `{}`", name))?;
            let remaining = tokens.next_count(&|| format!("remaining games of `{}`", name))?;
            let row = (0..n)
                .map(|j| {
                    tokens.next_count(&|| format!("games of `{}` against team {}", name, j + 1))
                })
                .collect::<Result<Vec<usize>>>()?;
            teams.push(Team::new(name, wins, losses, remaining));
            games.push(row);
        }

        if let Some(token) = tokens.inner.next() {
            return Err(Error::MalformedInput(format!(
                "unexpected token `{}` after {} team records",
                token, n
            )));
        }

        Division::new(teams, games)
    }
}
