use async_trait::async_trait;
use chrono::{DateTime, Utc};
use filmstrip_core::FilmstripResult;
use filmstrip_domain::LikeList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Metadata recorded alongside every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    /// Version of the on-disk format.
    pub format_version: u32,
    /// ID of the instance that performed the save.
    pub instance_id: Uuid,
    /// When this data was saved.
    pub saved_at: DateTime<Utc>,
}

impl SaveMetadata {
    pub fn new(format_version: u32, instance_id: Uuid) -> Self {
        Self {
            format_version,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Abstract storage for the likes list.
#[async_trait]
pub trait LikesStore: Send + Sync {
    /// Persist the full likes list.
    async fn save(&self, likes: &LikeList) -> FilmstripResult<SaveMetadata>;

    /// Load the likes list. A missing file yields an empty list.
    async fn load(&self) -> FilmstripResult<LikeList>;

    /// Check if the store file exists.
    async fn exists(&self) -> bool;

    /// Get the path to the store file.
    fn path(&self) -> &Path;
}

/// Detects changes to a watched path (the image directory).
#[async_trait]
pub trait ChangeDetector: Send + Sync {
    /// Start watching the path for changes.
    async fn start_watching(&self, path: PathBuf) -> FilmstripResult<()>;

    /// Stop watching.
    async fn stop_watching(&self) -> FilmstripResult<()>;

    /// Subscribe to change events.
    fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ChangeEvent>;
}

/// Event indicating a change under the watched path.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub detected_at: DateTime<Utc>,
}
