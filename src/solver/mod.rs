//! Constraint-solving components: domains, constraint graph, AC-3 and DFS

pub mod ac3;
pub mod backtracking;
pub mod constraints;
pub mod domains;
pub mod outcome;

pub use ac3::Ac3Propagator;
pub use backtracking::BacktrackingSolver;
pub use constraints::{ConstraintGraph, PEERS_PER_CELL};
pub use domains::{CandidateSet, Domains};
pub use outcome::{SolveOutcome, SolveReport};
