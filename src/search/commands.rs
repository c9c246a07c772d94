/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
    /// Run a fuzzy search for the provided query.
    Query {
        /// Identifier that correlates the response with the originating
        /// session.
        id: u64,
        /// User supplied query string.
        query: String,
        /// Maximum number of rows to return.
        limit: usize,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Single answer emitted per query.
///
/// Unlike an incremental stream there is exactly one batch per query id;
/// `complete` is `false` when the pass was abandoned because a newer session
/// superseded it, in which case `indices` must be ignored.
#[derive(Debug)]
pub(crate) struct SearchBatch {
    /// Identifier matching the [`SearchCommand::Query`] that produced the
    /// batch.
    pub(crate) id: u64,
    /// Offsets into the worker's `SearchData` file list.
    pub(crate) indices: Vec<usize>,
    /// Whether the full dataset was scanned for this query.
    pub(crate) complete: bool,
}
