//! Post store state machine.
//!
//! Every transition is a pure function of the current state and an event,
//! producing the next state plus the side effects the store must run.

use crate::domain::Post;
use crate::error::ValidationError;
use crate::ports::Notification;

pub const MSG_CREATED: &str = "Post created!";
pub const MSG_CREATE_FAILED: &str = "Failed to create post";
pub const MSG_DELETED: &str = "Post deleted!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete post";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch posts";

/// What the UI renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StoreState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A remote call is in flight; `previous` stays on screen.
    Loading { previous: Vec<Post> },
    /// The most recent successful fetch.
    Loaded(Vec<Post>),
    /// The last remote call failed; `last_loaded` stays on screen.
    Error {
        message: String,
        last_loaded: Vec<Post>,
    },
}

impl StoreState {
    /// Posts to display: the last successful fetch, whatever the current phase.
    pub fn visible_posts(&self) -> &[Post] {
        match self {
            StoreState::Idle => &[],
            StoreState::Loading { previous } => previous,
            StoreState::Loaded(posts) => posts,
            StoreState::Error { last_loaded, .. } => last_loaded,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StoreState::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            StoreState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    fn loading(&self) -> Self {
        StoreState::Loading {
            previous: self.visible_posts().to_vec(),
        }
    }

    fn failed(&self, message: String) -> Self {
        StoreState::Error {
            message,
            last_loaded: self.visible_posts().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum StoreEvent {
    RefreshStarted,
    RefreshSucceeded(Vec<Post>),
    RefreshFailed(String),
    MutationStarted,
    CreateSucceeded,
    CreateFailed(String),
    RemoveSucceeded,
    RemoveFailed(String),
    Rejected(ValidationError),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    /// Re-read the authoritative list from the remote store.
    Refresh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: StoreState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: StoreState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Compute the next state and the effects to run for `event`.
pub fn reduce(state: &StoreState, event: StoreEvent) -> Transition {
    match event {
        StoreEvent::RefreshStarted | StoreEvent::MutationStarted => Transition::to(state.loading()),
        StoreEvent::RefreshSucceeded(posts) => Transition::to(StoreState::Loaded(posts)),
        StoreEvent::RefreshFailed(message) => Transition::to(state.failed(message))
            .with(Effect::Notify(Notification::error(MSG_FETCH_FAILED))),
        // The new post is never spliced in; only a refetch changes the list.
        StoreEvent::CreateSucceeded => Transition::to(state.clone())
            .with(Effect::Notify(Notification::success(MSG_CREATED)))
            .with(Effect::Refresh),
        StoreEvent::CreateFailed(message) => Transition::to(state.failed(message))
            .with(Effect::Notify(Notification::error(MSG_CREATE_FAILED))),
        StoreEvent::RemoveSucceeded => Transition::to(state.clone())
            .with(Effect::Notify(Notification::success(MSG_DELETED)))
            .with(Effect::Refresh),
        StoreEvent::RemoveFailed(message) => Transition::to(state.failed(message))
            .with(Effect::Notify(Notification::error(MSG_DELETE_FAILED))),
        StoreEvent::Rejected(reason) => Transition::to(state.clone())
            .with(Effect::Notify(Notification::error(reason.notice()))),
    }
}
