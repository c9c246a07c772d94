//! Core crate exports for the `quickopen` picker.
//!
//! The root module re-exports the ranking types and collaborator interfaces
//! so that embedders can drive the picker without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod history;
pub mod indexing;
pub mod logging;
mod picker;
pub mod rank;
pub mod search;
mod types;

pub use history::{HistorySource, NavigationHistory};
pub use indexing::{FilesystemOptions, scan};
pub use picker::FilePicker;
pub use rank::{RankOptions, RankedItem, ResultGroup};
pub use search::{
    DEFAULT_SEARCH_LIMIT, FileSearch, QueryToken, SearchData, SearchError, SessionCounter,
    WorkerSearch,
};
pub use types::FileRow;
