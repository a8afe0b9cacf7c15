//! The post store - single owner of the local post list.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::config::StoreConfig;
use crate::domain::{NewPost, PostId};
use crate::error::{RemoteRequestError, StoreError};
use crate::ports::{ConfirmationGate, Notifier, PostRemote};

use super::admission::admit;
use super::state::{Effect, StoreEvent, StoreState, reduce};

/// Prompt shown before a post is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// Outcome of [`PostStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user did not confirm; nothing was sent.
    Declined,
}

/// Keeps the local post list equal to the most recent successful fetch.
///
/// Writes are never applied to the local list directly. Every successful
/// create or delete ends with a full [`refresh`](Self::refresh), so only
/// state confirmed by the remote store is ever shown.
///
/// Operations run one at a time: a call made while another is in flight
/// waits until the first has settled, terminal refresh included.
pub struct PostStore {
    remote: Arc<dyn PostRemote>,
    notifier: Arc<dyn Notifier>,
    config: StoreConfig,
    state: watch::Sender<StoreState>,
    flight: Mutex<()>,
}

impl PostStore {
    pub fn new(
        remote: Arc<dyn PostRemote>,
        notifier: Arc<dyn Notifier>,
        config: StoreConfig,
    ) -> Self {
        let (state, _) = watch::channel(StoreState::Idle);
        Self {
            remote,
            notifier,
            config,
            state,
            flight: Mutex::new(()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receive a new snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Replace the local list with the remote store's current list.
    ///
    /// On failure the previously loaded list stays visible.
    pub async fn refresh(&self) -> Result<(), RemoteRequestError> {
        let _flight = self.flight.lock().await;
        self.refresh_locked().await
    }

    /// Submit a new post, then refetch the list.
    pub async fn create(&self, candidate: NewPost) -> Result<(), StoreError> {
        let _flight = self.flight.lock().await;

        if let Err(reason) = admit(&candidate, self.config.max_content_len) {
            tracing::debug!(error = %reason, "Post rejected by admission check");
            self.dispatch(StoreEvent::Rejected(reason.clone()));
            return Err(reason.into());
        }

        self.dispatch(StoreEvent::MutationStarted);
        match self.remote.create(&candidate).await {
            Ok(()) => {
                tracing::info!(title = %candidate.title, "Post created");
                self.settle(StoreEvent::CreateSucceeded).await?;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create post");
                self.dispatch(StoreEvent::CreateFailed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Delete a post after the user confirms, then refetch the list.
    pub async fn remove(
        &self,
        id: &PostId,
        gate: &dyn ConfirmationGate,
    ) -> Result<RemoveOutcome, StoreError> {
        if !gate.confirm(DELETE_PROMPT).await {
            tracing::debug!(post_id = %id, "Delete not confirmed");
            return Ok(RemoveOutcome::Declined);
        }

        let _flight = self.flight.lock().await;

        self.dispatch(StoreEvent::MutationStarted);
        match self.remote.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                self.settle(StoreEvent::RemoveSucceeded).await?;
                Ok(RemoveOutcome::Removed)
            }
            Err(e) => {
                tracing::error!(post_id = %id, error = %e, "Failed to delete post");
                self.dispatch(StoreEvent::RemoveFailed(e.to_string()));
                Err(e.into())
            }
        }
    }

    async fn refresh_locked(&self) -> Result<(), RemoteRequestError> {
        self.dispatch(StoreEvent::RefreshStarted);
        match self.remote.list().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Posts fetched");
                self.dispatch(StoreEvent::RefreshSucceeded(posts));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch posts");
                self.dispatch(StoreEvent::RefreshFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Apply a successful mutation and run the refresh it requests.
    async fn settle(&self, event: StoreEvent) -> Result<(), RemoteRequestError> {
        if self.dispatch(event) {
            self.refresh_locked().await?;
        }
        Ok(())
    }

    /// Apply `event`, deliver its notifications and report whether a refresh
    /// was requested.
    fn dispatch(&self, event: StoreEvent) -> bool {
        let mut effects = Vec::new();
        self.state.send_modify(|state| {
            let transition = reduce(state, event);
            *state = transition.state;
            effects = transition.effects;
        });

        let mut refresh = false;
        for effect in effects {
            match effect {
                Effect::Notify(notification) => self
                    .notifier
                    .notify(notification.with_ttl(self.config.notification_ttl)),
                Effect::Refresh => refresh = true,
            }
        }
        refresh
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::codec;
    use crate::domain::{Block, Document, Post, PostContent};
    use crate::ports::{Notification, Severity};

    /// Remote fake backed by a vector, with call counters and failure switches.
    #[derive(Default)]
    struct FakeRemote {
        posts: StdMutex<Vec<Post>>,
        next_id: AtomicUsize,
        calls: AtomicUsize,
        fail_list: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl FakeRemote {
        fn with_posts(posts: Vec<Post>) -> Self {
            let next_id = posts.len() + 1;
            Self {
                posts: StdMutex::new(posts),
                next_id: AtomicUsize::new(next_id),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PostRemote for FakeRemote {
        async fn list(&self) -> Result<Vec<Post>, RemoteRequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(RemoteRequestError::Transport("connection reset".to_string()));
            }
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn create(&self, post: &NewPost) -> Result<(), RemoteRequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(RemoteRequestError::Status {
                    operation: "create",
                    status: 500,
                });
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let created = Post {
                id: PostId::new(id.to_string()),
                title: post.title.clone(),
                content: PostContent::Raw(post.content.clone()),
                created_at: Some(post.created_at.clone()),
            };
            self.posts.lock().unwrap().push(created);
            Ok(())
        }

        async fn delete(&self, id: &PostId) -> Result<(), RemoteRequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(RemoteRequestError::Status {
                    operation: "delete",
                    status: 500,
                });
            }
            self.posts.lock().unwrap().retain(|p| &p.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: StdMutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<(Severity, String)> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .map(|n| (n.severity, n.message.clone()))
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    struct Answer(bool);

    #[async_trait]
    impl ConfirmationGate for Answer {
        async fn confirm(&self, prompt: &str) -> bool {
            assert_eq!(prompt, DELETE_PROMPT);
            self.0
        }
    }

    /// Fixed block keys keep two builds of the same post equal.
    fn post(id: &str, title: &str) -> Post {
        let document = Document::new(vec![Block::new(format!("b{id}"), title)], BTreeMap::new());
        Post {
            id: PostId::new(id),
            title: title.to_string(),
            content: PostContent::Raw(codec::encode(&document)),
            created_at: Some("09:30".to_string()),
        }
    }

    fn store_with(remote: Arc<FakeRemote>) -> (PostStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let store = PostStore::new(remote, notifier.clone(), StoreConfig::default());
        (store, notifier)
    }

    #[tokio::test]
    async fn test_refresh_loads_remote_order() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("2", "B"), post("1", "A")]));
        let (store, _) = store_with(remote);
        assert_eq!(store.state(), StoreState::Idle);

        store.refresh().await.unwrap();
        assert_eq!(
            store.state(),
            StoreState::Loaded(vec![post("2", "B"), post("1", "A")])
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A")]));
        let (store, notifier) = store_with(remote.clone());
        store.refresh().await.unwrap();

        remote.fail_list.store(true, Ordering::SeqCst);
        assert!(store.refresh().await.is_err());

        let state = store.state();
        assert!(state.error_message().is_some());
        assert_eq!(state.visible_posts(), &[post("1", "A")]);
        assert_eq!(
            notifier.messages(),
            vec![(Severity::Error, "Failed to fetch posts".to_string())]
        );
    }

    #[tokio::test]
    async fn test_create_rejects_without_remote_call() {
        let remote = Arc::new(FakeRemote::default());
        let (store, notifier) = store_with(remote.clone());

        let untitled = NewPost::new("", codec::encode(&Document::from_text("body")), "10:00");
        assert!(matches!(
            store.create(untitled).await,
            Err(StoreError::Validation(_))
        ));

        let oversized = NewPost::new("T", "x".repeat(5001), "10:00");
        assert!(matches!(
            store.create(oversized).await,
            Err(StoreError::Validation(_))
        ));

        assert_eq!(remote.calls(), 0);
        assert_eq!(store.state(), StoreState::Idle);
        assert_eq!(
            notifier.messages(),
            vec![
                (Severity::Error, "Title and content are required.".to_string()),
                (
                    Severity::Error,
                    "Content exceeds maximum allowed length.".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_short_content_reaches_remote() {
        let remote = Arc::new(FakeRemote::default());
        let (store, _) = store_with(remote.clone());

        store
            .create(NewPost::new("T", "0123456789", "10:00"))
            .await
            .unwrap();
        // create + terminal refresh
        assert_eq!(remote.calls(), 2);
    }

    #[tokio::test]
    async fn test_create_refreshes_instead_of_splicing() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A")]));
        let (store, notifier) = store_with(remote.clone());
        store.refresh().await.unwrap();

        let candidate = NewPost::from_document("Fresh", &Document::from_text("hello"));
        store.create(candidate).await.unwrap();

        let after_create = store.state();
        store.refresh().await.unwrap();
        assert_eq!(after_create, store.state());
        assert_eq!(after_create.visible_posts().len(), 2);
        assert_eq!(
            notifier.messages(),
            vec![(Severity::Success, "Post created!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_failed_create_does_not_refresh() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A")]));
        let (store, notifier) = store_with(remote.clone());
        store.refresh().await.unwrap();
        remote.fail_writes.store(true, Ordering::SeqCst);

        let result = store
            .create(NewPost::from_document("T", &Document::from_text("body")))
            .await;
        assert!(matches!(result, Err(StoreError::Remote(_))));
        // initial refresh + failed create
        assert_eq!(remote.calls(), 2);
        assert_eq!(store.state().visible_posts(), &[post("1", "A")]);
        assert_eq!(
            notifier.messages(),
            vec![(Severity::Error, "Failed to create post".to_string())]
        );
    }

    #[tokio::test]
    async fn test_remove_scenario() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A"), post("2", "B")]));
        let (store, notifier) = store_with(remote.clone());
        store.refresh().await.unwrap();
        assert_eq!(
            store.state(),
            StoreState::Loaded(vec![post("1", "A"), post("2", "B")])
        );

        let declined = store.remove(&PostId::new("1"), &Answer(false)).await.unwrap();
        assert_eq!(declined, RemoveOutcome::Declined);
        assert_eq!(remote.calls(), 1);
        assert_eq!(
            store.state(),
            StoreState::Loaded(vec![post("1", "A"), post("2", "B")])
        );

        let removed = store.remove(&PostId::new("1"), &Answer(true)).await.unwrap();
        assert_eq!(removed, RemoveOutcome::Removed);
        // delete + refresh
        assert_eq!(remote.calls(), 3);
        assert_eq!(store.state(), StoreState::Loaded(vec![post("2", "B")]));
        assert_eq!(
            notifier.messages(),
            vec![(Severity::Success, "Post deleted!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_failed_remove_leaves_list() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A")]));
        let (store, notifier) = store_with(remote.clone());
        store.refresh().await.unwrap();
        remote.fail_writes.store(true, Ordering::SeqCst);

        let result = store.remove(&PostId::new("1"), &Answer(true)).await;
        assert!(matches!(result, Err(StoreError::Remote(_))));
        assert_eq!(store.state().visible_posts(), &[post("1", "A")]);
        assert_eq!(
            notifier.messages(),
            vec![(Severity::Error, "Failed to delete post".to_string())]
        );
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A")]));
        let (store, _) = store_with(remote);
        let mut rx = store.subscribe();

        store.refresh().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().visible_posts(), &[post("1", "A")]);
    }

    #[tokio::test]
    async fn test_notifications_use_configured_ttl() {
        let remote = Arc::new(FakeRemote::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let config = StoreConfig {
            notification_ttl: std::time::Duration::from_millis(50),
            ..StoreConfig::default()
        };
        let store = PostStore::new(remote, notifier.clone(), config);

        let _ = store.create(NewPost::new("", "", "")).await;
        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen[0].ttl, std::time::Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_overlapping_operations_are_serialized() {
        let remote = Arc::new(FakeRemote::with_posts(vec![post("1", "A"), post("2", "B")]));
        let (store, _) = store_with(remote.clone());
        let store = Arc::new(store);

        let create = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(NewPost::from_document("C", &Document::from_text("c")))
                    .await
            })
        };
        let remove = {
            let store = store.clone();
            tokio::spawn(async move { store.remove(&PostId::new("1"), &Answer(true)).await })
        };

        create.await.unwrap().unwrap();
        remove.await.unwrap().unwrap();

        let state = store.state();
        assert!(!state.is_loading());
        let titles: Vec<_> = state.visible_posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }
}
