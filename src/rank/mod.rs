//! Ordering and grouping of picker results.
//!
//! A ranked list is the concatenation of two segments: previously opened
//! files in reverse-chronological order, then fuzzy search hits sorted by the
//! relevance comparator. Identifiers never repeat across segments and the
//! first item of each non-empty segment carries that segment's group tag.

mod compare;
mod item;

use std::collections::HashSet;

use crate::search::fuzzy_matches;
use crate::types::FileRow;

pub use item::{RankedItem, ResultGroup};

pub(crate) use compare::compare_candidates;
pub(crate) use compare::normalized_key;

/// Tunables for a single ranking run.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Maximum number of search results consumed per query.
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: crate::search::DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Merge a history snapshot and a set of search hits into one ranked list.
///
/// `history` is ordered newest-last; `hits` are treated as unordered. The
/// history prefix keeps its recency order and is never re-sorted.
#[must_use]
pub fn merge(
    query: &str,
    history: &[String],
    hits: Vec<FileRow>,
    options: &RankOptions,
) -> Vec<RankedItem> {
    let query = query.trim();
    let mut seen = HashSet::new();
    let mut items = history_prefix(query, history, &mut seen);

    if query.is_empty() {
        return items;
    }

    items.extend(search_segment(query, hits, &mut seen, options.limit));
    items
}

/// Build the fixed-order prefix of previously opened files.
///
/// Entries are visited most-recent-first and kept when they fuzzy-match the
/// query (all entries match the empty query). The first kept entry is tagged
/// as the start of the "recently opened" segment.
pub(crate) fn history_prefix(
    query: &str,
    history: &[String],
    seen: &mut HashSet<String>,
) -> Vec<RankedItem> {
    let mut items = Vec::new();
    for path in history.iter().rev() {
        if seen.contains(path) {
            continue;
        }
        if !query.is_empty() && !fuzzy_matches(query, path) {
            continue;
        }
        seen.insert(path.clone());

        let mut item = RankedItem::new(path.clone());
        if items.is_empty() {
            item.group = Some(ResultGroup::RecentlyOpened);
        }
        items.push(item);
    }
    items
}

/// Sort novel search hits by relevance and tag the segment start.
pub(crate) fn search_segment(
    query: &str,
    hits: Vec<FileRow>,
    seen: &mut HashSet<String>,
    limit: usize,
) -> Vec<RankedItem> {
    let query_key = normalized_key(query);

    let mut items: Vec<RankedItem> = hits
        .into_iter()
        .take(limit)
        .filter(|row| seen.insert(row.path.clone()))
        .map(|row| RankedItem::from_row(&row))
        .collect();

    // Stable sort: candidates the comparator cannot separate keep the order
    // the provider delivered them in.
    items.sort_by(|a, b| compare_candidates(&query_key, a, b));

    if let Some(first) = items.first_mut() {
        first.group = Some(ResultGroup::FileResults);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[RankedItem]) -> Vec<&str> {
        items.iter().map(|item| item.path.as_str()).collect()
    }

    fn rows(paths: &[&str]) -> Vec<FileRow> {
        paths.iter().copied().map(FileRow::new).collect()
    }

    #[test]
    fn empty_inputs_produce_empty_output() {
        let items = merge("foo", &[], Vec::new(), &RankOptions::default());
        assert!(items.is_empty());
    }

    #[test]
    fn history_prefix_preserves_reverse_chronological_order() {
        let history = vec![
            "a/old.rs".to_string(),
            "b/mid.rs".to_string(),
            "c/new.rs".to_string(),
        ];
        let items = merge("", &history, Vec::new(), &RankOptions::default());
        assert_eq!(paths(&items), vec!["c/new.rs", "b/mid.rs", "a/old.rs"]);
    }

    #[test]
    fn empty_query_returns_history_only() {
        let history = vec!["a/foo.rs".to_string()];
        let hits = rows(&["b/bar.rs"]);
        let items = merge("", &history, hits, &RankOptions::default());
        assert_eq!(paths(&items), vec!["a/foo.rs"]);
    }

    #[test]
    fn history_entries_are_filtered_by_query() {
        let history = vec!["x/notes.md".to_string(), "b/bar.rs".to_string()];
        let items = merge("bar", &history, Vec::new(), &RankOptions::default());
        assert_eq!(paths(&items), vec!["b/bar.rs"]);
    }

    #[test]
    fn identifiers_in_history_are_not_repeated_in_search_segment() {
        let history = vec!["a/foo.ts".to_string(), "b/bar.ts".to_string()];
        let hits = rows(&["b/bar.ts", "c/barstool.ts"]);
        let items = merge("bar", &history, hits, &RankOptions::default());

        assert_eq!(paths(&items), vec!["b/bar.ts", "c/barstool.ts"]);
        assert_eq!(items[0].group, Some(ResultGroup::RecentlyOpened));
        assert_eq!(items[1].group, Some(ResultGroup::FileResults));
    }

    #[test]
    fn duplicate_history_entries_keep_first_seen() {
        let history = vec![
            "a/foo.rs".to_string(),
            "b/bar.rs".to_string(),
            "a/foo.rs".to_string(),
        ];
        let items = merge("", &history, Vec::new(), &RankOptions::default());
        assert_eq!(paths(&items), vec!["a/foo.rs", "b/bar.rs"]);
    }

    #[test]
    fn exactly_one_group_tag_per_non_empty_segment() {
        let history = vec!["a/main.rs".to_string(), "b/main_test.rs".to_string()];
        let hits = rows(&["c/main_window.rs", "d/domain.rs"]);
        let items = merge("main", &history, hits, &RankOptions::default());

        let recents: Vec<_> = items
            .iter()
            .filter(|item| item.group == Some(ResultGroup::RecentlyOpened))
            .collect();
        let files: Vec<_> = items
            .iter()
            .filter(|item| item.group == Some(ResultGroup::FileResults))
            .collect();
        assert_eq!(recents.len(), 1);
        assert_eq!(files.len(), 1);
        assert_eq!(recents[0].path, items[0].path);
    }

    #[test]
    fn empty_search_segment_emits_no_group_tag() {
        let history = vec!["a/bar.rs".to_string()];
        // The only hit duplicates history, so the search segment is empty.
        let hits = rows(&["a/bar.rs"]);
        let items = merge("bar", &history, hits, &RankOptions::default());

        assert_eq!(paths(&items), vec!["a/bar.rs"]);
        assert_eq!(items[0].group, Some(ResultGroup::RecentlyOpened));
    }

    #[test]
    fn search_limit_caps_consumed_hits() {
        let hits = rows(&["a/foo1.rs", "b/foo2.rs", "c/foo3.rs"]);
        let options = RankOptions { limit: 2 };
        let items = merge("foo", &[], hits, &options);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn merge_is_idempotent_for_identical_inputs() {
        let history = vec!["a/alpha.rs".to_string(), "b/beta.rs".to_string()];
        let hits = rows(&["c/alphabet.rs", "d/altar.rs"]);
        let options = RankOptions::default();

        let first = merge("al", &history, hits.clone(), &options);
        let second = merge("al", &history, hits, &options);
        assert_eq!(first, second);
    }
}
