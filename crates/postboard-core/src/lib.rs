//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate holds the rich-text document model, its codec and plain-text
//! renderer, and the client-side post store. Every external collaborator
//! (remote store, notifications, share targets) is reached through a port.

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod ports;
pub mod render;
pub mod store;
pub mod view;

pub use config::StoreConfig;
pub use error::{
    ExportError, MalformedContentError, RemoteRequestError, StoreError, ValidationError,
};
