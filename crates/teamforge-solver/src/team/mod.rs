//! Node and mission teams.
//!
//! A [`MissionTeam`] owns one [`NodeTeam`] per node and is mutated in place
//! by the search: modules are added before descending and removed again on
//! the way back up.

mod lineup;
mod mission;
mod node;


pub use lineup::{lineup, Lineup};
pub use mission::MissionTeam;
pub use node::NodeTeam;
