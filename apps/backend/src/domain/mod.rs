//! Domain layer: voting types and pure helpers. No HTTP or database imports.

pub mod participant;
pub mod phase;
pub mod tally;
pub mod vote;

pub use participant::Participant;
pub use phase::Phase;
pub use tally::{tally, winner, TallyEntry};
pub use vote::Vote;
