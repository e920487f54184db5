//! TeamForge Scoring - Hierarchical scoring of node teams
//!
//! This crate provides:
//! - [`TeamScore`], the five-tier score shared by node and mission teams
//! - [`score_node`], the score model applied to one node team
//! - [`weights`], the fixed tier weights

#[macro_use]
mod macros;

pub mod model;
pub mod score;


pub use model::{score_node, weights, ScoredUnit};
pub use score::TeamScore;
