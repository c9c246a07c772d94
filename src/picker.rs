//! Session-level orchestration of the quick-open ranking.

use std::collections::HashSet;

use log::debug;

use crate::history::HistorySource;
use crate::rank::{self, RankOptions, RankedItem};
use crate::search::{FileSearch, SearchError, SessionCounter};

/// Coordinates one history source and one search provider into ranked,
/// grouped result lists.
///
/// Each call to [`rank`](FilePicker::rank) supersedes the previous one. The
/// picker keeps no state between calls beyond the session counter.
pub struct FilePicker<H, S> {
    history: H,
    search: S,
    sessions: SessionCounter,
    options: RankOptions,
}

impl<H, S> FilePicker<H, S>
where
    H: HistorySource,
    S: FileSearch,
{
    /// Build a picker over injected collaborators.
    ///
    /// `sessions` must be the counter the search provider observes, so that
    /// beginning a new session cancels the provider's in-flight work.
    pub fn new(history: H, search: S, sessions: SessionCounter, options: RankOptions) -> Self {
        Self {
            history,
            search,
            sessions,
            options,
        }
    }

    /// Produce the ranked list for `query`.
    ///
    /// Returns `Ok(None)` when a newer call superseded this one before its
    /// output could be delivered; such output is discarded entirely. Search
    /// provider failures propagate untouched.
    pub fn rank(&self, query: &str) -> Result<Option<Vec<RankedItem>>, SearchError> {
        let token = self.sessions.begin();
        let query = query.trim();
        let snapshot = self.history.snapshot();

        let mut seen = HashSet::new();
        let mut items = rank::history_prefix(query, &snapshot, &mut seen);

        if query.is_empty() {
            if token.is_superseded() {
                return Ok(None);
            }
            return Ok(Some(items));
        }

        let hits = self.search.find(query, self.options.limit, &token)?;
        if token.is_superseded() {
            debug!("discarding superseded results for query '{query}'");
            return Ok(None);
        }

        items.extend(rank::search_segment(query, hits, &mut seen, self.options.limit));
        Ok(Some(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::ResultGroup;
    use crate::search::QueryToken;
    use crate::types::FileRow;

    struct FixedHistory(Vec<String>);

    impl HistorySource for FixedHistory {
        fn snapshot(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    struct StubSearch {
        hits: Vec<&'static str>,
        /// When set, a competing session begins while the search is in
        /// flight, superseding the caller.
        supersede_during_find: Option<SessionCounter>,
    }

    impl FileSearch for StubSearch {
        fn find(
            &self,
            _query: &str,
            limit: usize,
            _token: &QueryToken,
        ) -> Result<Vec<FileRow>, SearchError> {
            if let Some(sessions) = &self.supersede_during_find {
                sessions.begin();
            }
            Ok(self
                .hits
                .iter()
                .copied()
                .take(limit)
                .map(FileRow::new)
                .collect())
        }
    }

    struct FailingSearch;

    impl FileSearch for FailingSearch {
        fn find(
            &self,
            _query: &str,
            _limit: usize,
            _token: &QueryToken,
        ) -> Result<Vec<FileRow>, SearchError> {
            Err(SearchError::WorkerDisconnected)
        }
    }

    fn picker_with(
        history: Vec<&str>,
        search: StubSearch,
    ) -> FilePicker<FixedHistory, StubSearch> {
        let history = FixedHistory(history.into_iter().map(String::from).collect());
        FilePicker::new(
            history,
            search,
            SessionCounter::default(),
            RankOptions::default(),
        )
    }

    #[test]
    fn merges_history_and_search_results() {
        let picker = picker_with(
            vec!["a/foo.ts", "b/bar.ts"],
            StubSearch {
                hits: vec!["b/bar.ts", "c/barstool.ts"],
                supersede_during_find: None,
            },
        );

        let items = picker.rank("bar").unwrap().unwrap();
        let paths: Vec<_> = items.iter().map(|item| item.path.as_str()).collect();
        assert_eq!(paths, vec!["b/bar.ts", "c/barstool.ts"]);
        assert_eq!(items[0].group, Some(ResultGroup::RecentlyOpened));
        assert_eq!(items[1].group, Some(ResultGroup::FileResults));
    }

    #[test]
    fn empty_query_never_consults_search() {
        struct PanicSearch;
        impl FileSearch for PanicSearch {
            fn find(
                &self,
                _query: &str,
                _limit: usize,
                _token: &QueryToken,
            ) -> Result<Vec<FileRow>, SearchError> {
                panic!("search must not run for an empty query");
            }
        }

        let history = FixedHistory(vec!["a/foo.rs".to_string()]);
        let picker = FilePicker::new(
            history,
            PanicSearch,
            SessionCounter::default(),
            RankOptions::default(),
        );

        let items = picker.rank("   ").unwrap().unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn superseded_session_produces_no_output() {
        let sessions = SessionCounter::default();
        let history = FixedHistory(vec!["a/alpha.rs".to_string()]);
        let search = StubSearch {
            hits: vec!["b/alpha_two.rs"],
            supersede_during_find: Some(sessions.clone()),
        };
        let picker = FilePicker::new(history, search, sessions, RankOptions::default());

        assert!(picker.rank("alpha").unwrap().is_none());
    }

    #[test]
    fn upstream_failure_propagates() {
        let history = FixedHistory(Vec::new());
        let picker = FilePicker::new(
            history,
            FailingSearch,
            SessionCounter::default(),
            RankOptions::default(),
        );

        assert!(matches!(
            picker.rank("anything"),
            Err(SearchError::WorkerDisconnected)
        ));
    }

    #[test]
    fn repeated_calls_with_same_inputs_agree() {
        let make = || {
            picker_with(
                vec!["a/one.rs", "b/two.rs"],
                StubSearch {
                    hits: vec!["c/tone.rs", "d/stone.rs"],
                    supersede_during_find: None,
                },
            )
        };
        let first = make().rank("one").unwrap().unwrap();
        let second = make().rank("one").unwrap().unwrap();
        assert_eq!(first, second);
    }
}
