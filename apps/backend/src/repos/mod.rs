//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod participants;
pub mod phase;
pub mod votes;
