//! Vote counting. Pure functions over already-loaded rows.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::participant::Participant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub participant: Participant,
    pub votes: u64,
}

/// Ranking order: most votes first, ties broken by registration order.
fn rank(a: &TallyEntry, b: &TallyEntry) -> Ordering {
    b.votes
        .cmp(&a.votes)
        .then_with(|| a.participant.created_at.cmp(&b.participant.created_at))
        .then_with(|| a.participant.id.cmp(&b.participant.id))
}

/// One entry per participant, zero-vote participants included.
///
/// `counts` maps target id to votes received; ids without a matching
/// participant are ignored.
pub fn tally(participants: Vec<Participant>, counts: &HashMap<String, u64>) -> Vec<TallyEntry> {
    let mut entries: Vec<TallyEntry> = participants
        .into_iter()
        .map(|participant| {
            let votes = counts.get(&participant.id).copied().unwrap_or(0);
            TallyEntry { participant, votes }
        })
        .collect();

    entries.sort_by(rank);
    entries
}

/// First entry of the ranked tally, or `None` when nobody is registered.
pub fn winner(participants: Vec<Participant>, counts: &HashMap<String, u64>) -> Option<TallyEntry> {
    tally(participants, counts).into_iter().next()
}
