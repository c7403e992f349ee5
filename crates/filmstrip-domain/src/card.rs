use serde::{Deserialize, Serialize};
use std::path::Path;

/// One gallery card: an image with a display label.
///
/// The url doubles as the card's identity; two cards with the same url are
/// the same image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCard {
    pub url: String,
    pub label: String,
}

impl ImageCard {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }

    /// Build a card from a bare file name, e.g. `the-big-heist.jpg` becomes
    /// url `/images/the-big-heist.jpg` with label `the big heist`.
    pub fn from_file_name(name: &str) -> Self {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        let label = stem
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>();
        Self {
            url: format!("/images/{name}"),
            label,
        }
    }
}
