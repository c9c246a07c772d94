use thiserror::Error;

/// Failures surfaced by a search provider.
///
/// Superseded queries are not errors; they yield discarded output instead.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The background worker hung up before answering a query.
    #[error("search worker disconnected before answering the query")]
    WorkerDisconnected,
}
