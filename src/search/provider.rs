use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use log::trace;

use super::commands::{SearchBatch, SearchCommand};
use super::{QueryToken, SearchData, SearchError, SessionCounter};
use crate::types::FileRow;

/// Fuzzy file search collaborator, treated as opaque and unordered by the
/// ranker.
pub trait FileSearch {
    /// Return up to `limit` rows matching `query`.
    ///
    /// Implementations may answer a superseded token with any (possibly
    /// empty) result set; the caller gates publication on the token.
    fn find(
        &self,
        query: &str,
        limit: usize,
        token: &QueryToken,
    ) -> Result<Vec<FileRow>, SearchError>;
}

/// Client half of the background search worker.
pub struct WorkerSearch {
    command_tx: Sender<SearchCommand>,
    batch_rx: Receiver<SearchBatch>,
    sessions: SessionCounter,
    data: Arc<SearchData>,
}

impl WorkerSearch {
    pub(crate) fn new(
        command_tx: Sender<SearchCommand>,
        batch_rx: Receiver<SearchBatch>,
        sessions: SessionCounter,
        data: Arc<SearchData>,
    ) -> Self {
        Self {
            command_tx,
            batch_rx,
            sessions,
            data,
        }
    }

    /// Counter shared with the worker; pickers begin their sessions here so
    /// a new query supersedes the worker's in-flight pass.
    #[must_use]
    pub fn sessions(&self) -> SessionCounter {
        self.sessions.clone()
    }

    /// Queue a query without waiting for its answer.
    pub(crate) fn enqueue(
        &self,
        query: &str,
        limit: usize,
        token: &QueryToken,
    ) -> Result<(), SearchError> {
        self.command_tx
            .send(SearchCommand::Query {
                id: token.id(),
                query: query.to_string(),
                limit,
            })
            .map_err(|_| SearchError::WorkerDisconnected)
    }

    fn resolve(&self, indices: &[usize]) -> Vec<FileRow> {
        indices
            .iter()
            .filter_map(|&index| self.data.files.get(index))
            .cloned()
            .collect()
    }
}

impl FileSearch for WorkerSearch {
    fn find(
        &self,
        query: &str,
        limit: usize,
        token: &QueryToken,
    ) -> Result<Vec<FileRow>, SearchError> {
        self.enqueue(query, limit, token)?;

        loop {
            let batch = self
                .batch_rx
                .recv()
                .map_err(|_| SearchError::WorkerDisconnected)?;
            if batch.id != token.id() {
                // Late answer from a superseded query; it must never become
                // observable output.
                trace!("dropping stale batch for query {}", batch.id);
                continue;
            }
            if !batch.complete {
                return Ok(Vec::new());
            }
            return Ok(self.resolve(&batch.indices));
        }
    }
}

impl Drop for WorkerSearch {
    fn drop(&mut self) {
        let _ = self.command_tx.send(SearchCommand::Shutdown);
    }
}
