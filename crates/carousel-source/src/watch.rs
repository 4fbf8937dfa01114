use crate::traits::ChangeEvent;
use carousel_core::{CarouselError, CarouselResult};
use chrono::Utc;
use notify::{RecursiveMode, Watcher};
use std::path::PathBuf;
use tokio::sync::broadcast;
use tokio::sync::Mutex;

/// Watches a card file and broadcasts a [`ChangeEvent`] whenever it is
/// written or replaced.
///
/// The watcher lives in a tokio task so the non-`Send` backend stays on one
/// thread. The task is aborted by [`FileWatcher::stop_watching`] or when the
/// watcher is dropped.
pub struct FileWatcher {
    tx: broadcast::Sender<ChangeEvent>,
    task_handle: Mutex<Option<tokio::task::JoinHandle<()>>>,
}

impl FileWatcher {
    /// The broadcast channel has a buffer size of 10
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(10);
        Self {
            tx,
            task_handle: Mutex::new(None),
        }
    }

    pub async fn start_watching(&self, path: PathBuf) -> CarouselResult<()> {
        let tx = self.tx.clone();

        // Canonicalize to absolute path so it matches OS event paths
        let canonical_path = tokio::fs::canonicalize(&path).await?;
        let parent = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| CarouselError::Internal(format!("{} has no parent", path.display())))?;

        let handle = tokio::spawn(async move {
            let watch_path = canonical_path;

            match notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
                Ok(event) => {
                    let relevant = matches!(
                        event.kind,
                        notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                    );
                    if relevant && event.paths.iter().any(|p| p == &watch_path) {
                        let change = ChangeEvent {
                            path: watch_path.clone(),
                            detected_at: Utc::now(),
                        };
                        let _ = tx.send(change);
                    }
                }
                Err(e) => {
                    tracing::warn!("File watcher error: {}", e);
                }
            }) {
                Ok(mut watcher) => {
                    if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
                        tracing::error!("Failed to watch directory: {}", e);
                    } else {
                        tracing::info!("Started watching directory: {}", parent.display());
                        // Keep watcher alive
                        std::future::pending::<()>().await;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to create watcher: {}", e);
                }
            }
        });

        let mut guard = self.task_handle.lock().await;
        if let Some(previous) = guard.replace(handle) {
            previous.abort();
        }

        Ok(())
    }

    pub async fn stop_watching(&self) -> CarouselResult<()> {
        let mut guard = self.task_handle.lock().await;
        if let Some(handle) = guard.take() {
            handle.abort();
            tracing::info!("Stopped file watching");
        }
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    pub async fn is_watching(&self) -> bool {
        self.task_handle
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for FileWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.get_mut().take() {
            handle.abort();
        }
    }
}
