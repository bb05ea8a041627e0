//!
//! elimflow decides which teams of a division can no longer finish first,
//! by reducing the question to a [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! on the remaining games.
//!
//! ```
//! use elimflow::Division;
//!
//! let division: Division = "3
//!     A 10 0 2  0 1 1
//!     B  9 1 2  1 0 1
//!     C  5 5 2  1 1 0"
//!     .parse()
//!     .unwrap();
//! assert_eq!(division.is_eliminated("A").unwrap(), false);
//! assert_eq!(
//!     division.certificate_of_elimination("C").unwrap(),
//!     Some(vec!["A".to_string(), "B".to_string()])
//! );
//! ```
//!
pub mod division;
pub mod elimination;
pub mod error;
pub mod max_flow;
#[cfg(test)]
mod mocks;

pub use division::{Division, Team};
pub use elimination::{Elimination, Verdict};
pub use error::{Error, Result};
pub use max_flow::AugmentingPathMethod;
