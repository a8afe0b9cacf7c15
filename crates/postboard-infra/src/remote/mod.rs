//! Remote post store implementations - HTTP and in-memory.

mod memory;
mod record;

pub use memory::InMemoryRemote;
pub use record::{create_request, post_from_record};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use self::http::{HttpPostRemote, HttpRemoteConfig};
