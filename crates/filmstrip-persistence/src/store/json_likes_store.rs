use crate::traits::{LikesStore, SaveMetadata};
use filmstrip_core::{FilmstripError, FilmstripResult};
use filmstrip_domain::LikeList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// JSON file-backed likes store.
#[derive(Debug, Clone)]
pub struct JsonLikesStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk wrapper around the likes array.
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: SaveMetadata,
    likes: LikeList,
}

const FORMAT_VERSION: u32 = 1;

impl JsonLikesStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Stage the serialized envelope beside the target, then rename it into
    /// place. The likes file either keeps its old contents or holds the full
    /// new envelope, never a partial write.
    async fn swap_in(&self, bytes: &[u8]) -> FilmstripResult<()> {
        // Same directory as the target so the rename stays on one
        // filesystem.
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let staged = tempfile::NamedTempFile::new_in(parent)?;
        let staged_path = staged.path().to_path_buf();

        fs::write(&staged_path, bytes).await?;
        fs::rename(&staged_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl LikesStore for JsonLikesStore {
    async fn save(&self, likes: &LikeList) -> FilmstripResult<SaveMetadata> {
        let metadata = SaveMetadata::new(FORMAT_VERSION, self.instance_id);
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: metadata.clone(),
            likes: likes.clone(),
        };

        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| FilmstripError::Serialization(e.to_string()))?;

        self.swap_in(&json_bytes).await?;

        tracing::info!(
            "Saved {} likes ({} bytes) to {}",
            likes.len(),
            json_bytes.len(),
            self.path.display()
        );

        Ok(metadata)
    }

    async fn load(&self) -> FilmstripResult<LikeList> {
        // The file may not exist yet; that simply means nothing is liked.
        if !self.path.exists() {
            return Ok(LikeList::new());
        }

        let file_bytes = fs::read(&self.path).await?;

        let envelope: JsonEnvelope = serde_json::from_slice(&file_bytes)
            .map_err(|e| FilmstripError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(FilmstripError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "Loaded {} likes from {}",
            envelope.likes.len(),
            self.path.display()
        );

        Ok(envelope.likes)
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("likes.json");
        let store = JsonLikesStore::new(&file_path);

        let mut likes = LikeList::new();
        likes.toggle("/images/a.jpg");
        likes.toggle("/images/b.jpg");

        let metadata = store.save(&likes).await.unwrap();
        assert_eq!(metadata.format_version, FORMAT_VERSION);
        assert!(file_path.exists());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, likes);
    }

    #[tokio::test]
    async fn test_second_save_replaces_whole_file() {
        let dir = tempdir().unwrap();
        let store = JsonLikesStore::new(dir.path().join("likes.json"));

        let mut first = LikeList::new();
        first.toggle("/images/a.jpg");
        store.save(&first).await.unwrap();

        let mut second = LikeList::new();
        second.toggle("/images/b.jpg");
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, second);
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonLikesStore::new(dir.path().join("nonexistent.json"));

        assert!(!store.exists().await);
        let loaded = store.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_version_is_rejected() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("likes.json");
        let store = JsonLikesStore::new(&file_path);

        store.save(&LikeList::new()).await.unwrap();

        // Bump the version field on disk.
        let text = tokio::fs::read_to_string(&file_path).await.unwrap();
        let bumped = text.replacen("\"version\": 1", "\"version\": 99", 1);
        tokio::fs::write(&file_path, bumped).await.unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(FilmstripError::Serialization(_))));
    }
}
