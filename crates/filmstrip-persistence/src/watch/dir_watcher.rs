use crate::traits::{ChangeDetector, ChangeEvent};
use chrono::Utc;
use filmstrip_core::FilmstripResult;
use notify::{RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::Mutex;

/// Watches the image directory so the gallery can rebuild its card list
/// when files appear or disappear. Uses the `notify` crate; the watcher
/// lives in a tokio task to satisfy its Send requirement.
pub struct DirWatcher {
    tx: broadcast::Sender<ChangeEvent>,
    task_handle: Arc<Mutex<Option<tokio::task::JoinHandle<()>>>>,
}

impl DirWatcher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(10);
        Self {
            tx,
            task_handle: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DirWatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChangeDetector for DirWatcher {
    async fn start_watching(&self, path: PathBuf) -> FilmstripResult<()> {
        let tx = self.tx.clone();
        let task_handle = self.task_handle.clone();

        // Canonicalize so the path matches what OS events report.
        let canonical_path = tokio::fs::canonicalize(&path).await?;

        let handle = tokio::spawn(async move {
            let watch_path = canonical_path.clone();

            match notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                match res {
                    Ok(event) => {
                        // Creations, deletions, and content rewrites all
                        // change the card list; metadata-only events do not.
                        let relevant = matches!(
                            event.kind,
                            notify::EventKind::Create(_)
                                | notify::EventKind::Remove(_)
                                | notify::EventKind::Modify(notify::event::ModifyKind::Data(_))
                                | notify::EventKind::Modify(notify::event::ModifyKind::Name(_))
                        );
                        if relevant {
                            let change = ChangeEvent {
                                path: watch_path.clone(),
                                detected_at: Utc::now(),
                            };
                            let _ = tx.send(change);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Directory watcher error: {}", e);
                    }
                }
            }) {
                Ok(mut watcher) => {
                    if let Err(e) = watcher.watch(&canonical_path, RecursiveMode::NonRecursive) {
                        tracing::error!("Failed to watch directory: {}", e);
                    } else {
                        tracing::info!("Started watching directory: {}", canonical_path.display());
                        // Keep watcher alive
                        std::future::pending::<()>().await;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to create watcher: {}", e);
                }
            }
        });

        let mut guard = task_handle.lock().await;
        *guard = Some(handle);

        Ok(())
    }

    async fn stop_watching(&self) -> FilmstripResult<()> {
        let mut guard = self.task_handle.lock().await;
        if let Some(handle) = guard.take() {
            handle.abort();
            tracing::info!("Stopped directory watching");
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}
