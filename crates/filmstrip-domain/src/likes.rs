use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single liked image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeEntry {
    pub url: String,
    pub liked_at: DateTime<Utc>,
}

/// The set of liked images, kept in like order.
///
/// Likes only ever apply to real cards; carousel clones are visual echoes
/// and must never reach this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikeList {
    entries: Vec<LikeEntry>,
}

impl LikeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LikeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LikeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_liked(&self, url: &str) -> bool {
        self.entries.iter().any(|e| e.url == url)
    }

    /// Flip the like state for a url. Returns true when the url is now liked.
    pub fn toggle(&mut self, url: &str) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.url == url) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(LikeEntry {
                url: url.to_string(),
                liked_at: Utc::now(),
            });
            true
        }
    }
}
