//! Client-side post store: admission checks, the state machine and the
//! orchestrator that drives it against a remote store.

mod admission;
mod post_store;
mod state;

pub use admission::admit;
pub use post_store::{DELETE_PROMPT, PostStore, RemoveOutcome};
pub use state::{
    Effect, MSG_CREATE_FAILED, MSG_CREATED, MSG_DELETE_FAILED, MSG_DELETED, MSG_FETCH_FAILED,
    StoreEvent, StoreState, Transition, reduce,
};
