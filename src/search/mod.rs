//! Fuzzy file search served from a background worker thread.
//!
//! The worker owns an immutable snapshot of the file index and answers query
//! commands over mpsc channels. A shared generation counter supersedes older
//! queries; the worker checks it between scoring chunks and the consumer
//! discards any batch whose query id is no longer current.

mod commands;
mod data;
mod error;
mod matcher;
mod provider;
mod session;
mod worker;

pub use data::SearchData;
pub use error::SearchError;
pub use provider::{FileSearch, WorkerSearch};
pub use session::{QueryToken, SessionCounter};
pub use worker::spawn;

pub(crate) use matcher::fuzzy_matches;

/// Default cap on search results consumed per query.
pub const DEFAULT_SEARCH_LIMIT: usize = 200;

pub(crate) const MATCH_CHUNK_SIZE: usize = 512;
pub(crate) const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;
