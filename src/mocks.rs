//!
//! mock divisions used in tests
//!
use crate::division::Division;

/// 4-team textbook division
pub const TEAMS4: &str = "4
Atlanta       83 71  8  0 1 6 1
Philadelphia  80 79  3  1 0 0 2
New_York      78 78  6  6 0 0 0
Montreal      77 82  3  1 2 0 0
";

/// 5-team textbook division, Detroit is eliminated only by the flow check
pub const TEAMS5: &str = "5
New_York    75 59 28   0   3   8   7   3
Baltimore   71 63 28   3   0   2   7   7
Boston      69 66 27   8   2   0   0   3
Toronto     63 72 27   7   7   0   0   3
Detroit     49 86 27   3   7   3   3   0
";

/// Alpha has finished its season tied with Beta on the most wins
pub const TEAMS_TIED: &str = "3
Alpha  90 60  0   0 0 0
Beta   90 50 10   0 0 5
Gamma  80 60  9   0 5 0
";

/// Ash, Birch and Cedar must play 12 games among themselves,
/// so one of them reaches 84 wins while Dawn can reach only 81
pub const TEAMS_HIDDEN: &str = "4
Ash    80 70 10   0 4 4 2
Birch  80 70 10   4 0 4 2
Cedar  80 70 10   4 4 0 2
Dawn   75 75  6   2 2 2 0
";

pub fn mock_division4() -> Division {
    TEAMS4.parse().unwrap()
}

pub fn mock_division5() -> Division {
    TEAMS5.parse().unwrap()
}

pub fn mock_division_tied() -> Division {
    TEAMS_TIED.parse().unwrap()
}

pub fn mock_division_hidden() -> Division {
    TEAMS_HIDDEN.parse().unwrap()
}
