//! DTOs for participants_sea adapter.

/// Validated input for a new participant row.
#[derive(Debug, Clone)]
pub struct ParticipantCreate {
    pub name: String,
    pub bio: String,
    pub photo_url: String,
}

impl ParticipantCreate {
    pub fn new(name: impl Into<String>, photo_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: String::new(),
            photo_url: photo_url.into(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }
}
