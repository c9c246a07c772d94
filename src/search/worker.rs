use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, trace};

use super::commands::{SearchBatch, SearchCommand};
use super::matcher::collect_matches;
use super::provider::WorkerSearch;
use super::{SearchData, SessionCounter};

/// Launch the background search worker for the given file snapshot.
///
/// The snapshot is shared between the worker (which scans it) and the
/// returned handle (which resolves matched indices back to rows).
pub fn spawn(data: SearchData) -> WorkerSearch {
    let (command_tx, command_rx) = mpsc::channel();
    let (batch_tx, batch_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    debug!("spawning search worker over {} files", data.len());
    let data = Arc::new(data);
    let thread_data = Arc::clone(&data);
    thread::spawn(move || worker_loop(&thread_data, &command_rx, &batch_tx, &thread_latest));

    WorkerSearch::new(
        command_tx,
        batch_rx,
        SessionCounter::from_cell(latest_query_id),
        data,
    )
}

fn worker_loop(
    data: &SearchData,
    command_rx: &Receiver<SearchCommand>,
    batch_tx: &Sender<SearchBatch>,
    latest_query_id: &Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(data, batch_tx, latest_query_id, command) {
            break;
        }
    }
    trace!("search worker stopped");
}

fn handle_command(
    data: &SearchData,
    batch_tx: &Sender<SearchBatch>,
    latest_query_id: &Arc<AtomicU64>,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::Query { id, query, limit } => {
            let batch = match collect_matches(data, &query, limit, id, latest_query_id) {
                Some(indices) => {
                    trace!("query {id} matched {} of {} files", indices.len(), data.len());
                    SearchBatch {
                        id,
                        indices,
                        complete: true,
                    }
                }
                None => {
                    trace!("query {id} superseded mid-pass");
                    SearchBatch {
                        id,
                        indices: Vec::new(),
                        complete: false,
                    }
                }
            };
            batch_tx.send(batch).is_ok()
        }
        SearchCommand::Shutdown => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FileSearch;

    #[test]
    fn worker_answers_matching_query() {
        let data = SearchData::from_paths(["src/foo.rs", "src/bar.rs"]);
        let worker = spawn(data);
        let token = worker.sessions().begin();

        let rows = worker.find("bar", 10, &token).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "src/bar.rs");
    }

    #[test]
    fn worker_answers_with_empty_set_when_nothing_matches() {
        let data = SearchData::from_paths(["src/foo.rs"]);
        let worker = spawn(data);
        let token = worker.sessions().begin();

        let rows = worker.find("zzzzzz", 10, &token).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn stale_batches_are_skipped() {
        let data = SearchData::from_paths(["src/foo.rs", "src/other.rs"]);
        let worker = spawn(data);
        let sessions = worker.sessions();

        // The first session is superseded before its answer is consumed; the
        // second query must still receive its own results.
        let stale = sessions.begin();
        worker.enqueue("foo", 10, &stale).unwrap();

        let token = sessions.begin();
        let rows = worker.find("other", 10, &token).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "src/other.rs");
    }
}
