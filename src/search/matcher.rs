use std::cmp::{Ordering as CmpOrdering, Reverse};
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use frizbee::{Options, match_list};

use super::{MATCH_CHUNK_SIZE, PREFILTER_ENABLE_THRESHOLD, SearchData};

/// Builds fuzzy matching options for the provided query and dataset size.
pub(crate) fn config_for_query(query: &str, dataset_len: usize) -> Options {
    let mut config = Options {
        prefilter: false,
        ..Options::default()
    };

    let length = query.chars().count();
    let mut allowed_typos: u16 = match length {
        0 => 0,
        1 => 0,
        2..=4 => 1,
        5..=7 => 2,
        8..=12 => 3,
        _ => 4,
    };
    if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
        allowed_typos = allowed_typos.min(max_reasonable);
    }

    // Typos stay bounded even for small datasets: the ranker uses matching
    // as a filter, so an unbounded budget would admit every candidate.
    config.max_typos = Some(allowed_typos);
    config.prefilter = dataset_len >= PREFILTER_ENABLE_THRESHOLD;
    config.sort = false;

    config
}

/// Single-candidate fuzzy test used for filtering history entries.
#[must_use]
pub(crate) fn fuzzy_matches(query: &str, haystack: &str) -> bool {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return true;
    }
    let config = config_for_query(trimmed, 1);
    match_list(trimmed, &[haystack], &config)
        .iter()
        .any(|entry| entry.score > 0)
}

/// Check if this query has been superseded by a newer one.
pub(crate) fn should_abort(id: u64, latest_query_id: &AtomicU64) -> bool {
    latest_query_id.load(AtomicOrdering::Acquire) != id
}

#[derive(Clone, Eq, PartialEq)]
struct RankedMatch {
    index: usize,
    score: u16,
}

impl Ord for RankedMatch {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for RankedMatch {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

/// Keeps the `limit` best scoring rows observed so far.
struct MatchCollector {
    limit: usize,
    heap: BinaryHeap<Reverse<RankedMatch>>,
}

impl MatchCollector {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            heap: BinaryHeap::new(),
        }
    }

    fn push(&mut self, index: usize, score: u16) {
        if self.limit == 0 {
            return;
        }
        let entry = RankedMatch { index, score };
        if self.heap.len() < self.limit {
            self.heap.push(Reverse(entry));
        } else if let Some(mut current_min) = self.heap.peek_mut()
            && entry > current_min.0
        {
            *current_min = Reverse(entry);
        }
    }

    fn into_indices(self) -> Vec<usize> {
        let mut entries: Vec<RankedMatch> =
            self.heap.into_iter().map(|entry| entry.0).collect();
        entries.sort_unstable_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index))
        });
        entries.into_iter().map(|entry| entry.index).collect()
    }
}

/// Scan the dataset in chunks, collecting up to `limit` matching rows.
///
/// Returns `None` when a newer query superseded this one mid-pass.
pub(crate) fn collect_matches(
    data: &SearchData,
    query: &str,
    limit: usize,
    id: u64,
    latest_query_id: &AtomicU64,
) -> Option<Vec<usize>> {
    let trimmed = query.trim();
    let total = data.len();
    if trimmed.is_empty() {
        return Some((0..total.min(limit)).collect());
    }

    let config = config_for_query(trimmed, total);
    let mut collector = MatchCollector::new(limit);
    let mut haystacks = Vec::with_capacity(MATCH_CHUNK_SIZE);
    let mut offset = 0;
    while offset < total {
        if should_abort(id, latest_query_id) {
            return None;
        }

        let end = (offset + MATCH_CHUNK_SIZE).min(total);
        haystacks.clear();
        for index in offset..end {
            haystacks.push(data.files[index].path.as_str());
        }
        let matches = match_list(trimmed, &haystacks, &config);
        for entry in matches {
            if entry.score == 0 {
                continue;
            }
            let index = offset + entry.index as usize;
            collector.push(index, entry.score);
        }

        offset = end;
    }

    if should_abort(id, latest_query_id) {
        return None;
    }

    Some(collector.into_indices())
}
