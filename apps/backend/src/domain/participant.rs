use time::OffsetDateTime;

/// A registered nominee. Every participant is also an eligible voter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub photo_url: String,
    pub created_at: OffsetDateTime,
}
