//! Image directory listing.
//!
//! Produces the ordered card list the carousel is built from: every file in
//! the directory with a recognized image extension, sorted by name.

use filmstrip_core::FilmstripResult;
use filmstrip_domain::ImageCard;
use std::path::Path;

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// List the image files under `dir` as gallery cards, sorted by file name.
pub async fn scan_images(dir: &Path) -> FilmstripResult<Vec<ImageCard>> {
    let mut names = Vec::new();

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_image_name(name) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();

    let cards = names
        .iter()
        .map(|name| ImageCard::from_file_name(name))
        .collect::<Vec<_>>();

    tracing::info!("Scanned {}: {} images", dir.display(), cards.len());
    Ok(cards)
}
