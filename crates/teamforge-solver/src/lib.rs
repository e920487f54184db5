//! TeamForge Solver - Branch-and-bound team assignment
//!
//! This crate provides:
//! - Node and mission teams with unit uniqueness and capacity bookkeeping
//! - Assignment phases used to order and bound the search
//! - The depth-first branch-and-bound search and its statistics
//! - Lineup materialization of the best mission team

pub mod phase;
pub mod search;
pub mod stats;
pub mod team;

pub use phase::NodePhase;
pub use search::{BranchAndBound, MissionBounder, SearchOutcome};
pub use stats::SearchStats;
pub use team::{lineup, Lineup, MissionTeam, NodeTeam};
