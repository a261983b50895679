pub mod participants;
pub mod votes;
pub mod voting_state;

pub use participants::Entity as Participants;
pub use participants::Model as Participant;
pub use votes::Entity as Votes;
pub use votes::Model as Vote;
pub use voting_state::Entity as VotingState;
