//! # Postboard Shared
//!
//! Wire types exchanged with the remote post store.
//! Kept free of domain logic so any client of the endpoint can reuse them.

pub mod dto;

pub use dto::{CreatePostRequest, PostRecord, WireId};
