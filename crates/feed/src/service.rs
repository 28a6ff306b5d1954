use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{broadcast, RwLock};
use tokio::task::{AbortHandle, JoinHandle};

use giphy::Gif;

use crate::repository::{FeedRepository, TrendingFetcher};

/// Broadcast channel capacity for feed updates.
const BROADCAST_CAPACITY: usize = 16;

/// Holds the latest trending feed and notifies subscribers when it is
/// replaced.
///
/// The feed starts out absent; the first successful [`refresh`] publishes
/// the initial list. Every later success replaces the whole list, there
/// is no merging. Failed refreshes are logged and leave the feed as it
/// was; subscribers never observe them.
///
/// [`refresh`]: FeedService::refresh
pub struct FeedService<F: TrendingFetcher + 'static> {
    repository: FeedRepository<F>,
    feed: Arc<RwLock<Option<Vec<Gif>>>>,
    broadcaster: broadcast::Sender<Vec<Gif>>,
    tasks: Mutex<Vec<AbortHandle>>,
}

impl<F: TrendingFetcher + 'static> FeedService<F> {
    pub fn new(repository: FeedRepository<F>) -> Self {
        let (broadcaster, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            repository,
            feed: Arc::new(RwLock::new(None)),
            broadcaster,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Latest published feed, or `None` before the first successful
    /// refresh.
    pub async fn current(&self) -> Option<Vec<Gif>> {
        self.feed.read().await.clone()
    }

    /// Subscribe to feed updates.
    ///
    /// Each update carries the full replacement list, never a diff.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Gif>> {
        self.broadcaster.subscribe()
    }

    /// Trigger an asynchronous refresh of the feed.
    ///
    /// Spawns one fetch task and returns its handle so callers can await
    /// completion. Concurrent refreshes are not serialized; when two are
    /// in flight, the one that completes last wins the publish.
    ///
    /// All outstanding refresh tasks are aborted when the service is
    /// dropped, so nothing is published after teardown.
    pub fn refresh(&self) -> JoinHandle<()> {
        let repository = self.repository.clone();
        let feed = Arc::clone(&self.feed);
        let broadcaster = self.broadcaster.clone();

        let handle = tokio::spawn(async move {
            match repository.get_trending().await {
                Ok(items) => {
                    tracing::debug!("Trending refresh fetched {} items", items.len());
                    *feed.write().await = Some(items.clone());
                    // Broadcast to subscribers (ignore if no subscribers)
                    let _ = broadcaster.send(items);
                }
                Err(e) => {
                    tracing::warn!("Trending refresh failed: {}", e);
                }
            }
        });

        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle.abort_handle());

        handle
    }
}

impl<F: TrendingFetcher + 'static> Drop for FeedService<F> {
    fn drop(&mut self) {
        for task in self.tasks.lock().drain(..) {
            task.abort();
        }
    }
}
