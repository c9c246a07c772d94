use std::cmp::Ordering;

use super::item::RankedItem;

/// Reduce a string to its comparison form: trimmed, ASCII lower-case, with
/// every character that is not an ASCII letter or a space removed.
#[must_use]
pub(crate) fn normalized_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Outcome of comparing two candidates through a single key.
enum KeyOrdering {
    Decided(Ordering),
    /// Both keys match at the same offset and are identical after
    /// normalization; the caller may try a fallback key.
    Tied,
}

/// Order two candidates by closeness of match against the normalized query.
///
/// The primary key is the display label; a full tie falls back to the path.
/// The fallback runs the same rules once and never recurses further.
pub(crate) fn compare_candidates(query_key: &str, a: &RankedItem, b: &RankedItem) -> Ordering {
    match compare_keys(query_key, &normalized_key(&a.label), &normalized_key(&b.label)) {
        KeyOrdering::Decided(ordering) => ordering,
        KeyOrdering::Tied => {
            match compare_keys(query_key, &normalized_key(&a.path), &normalized_key(&b.path)) {
                KeyOrdering::Decided(ordering) => ordering,
                KeyOrdering::Tied => Ordering::Equal,
            }
        }
    }
}

/// Rules, in order: a match beats no match, an earlier offset beats a later
/// one, equal offsets prefer the shorter key, then lexicographic order.
/// Candidates where neither key matches compare equal so that a stable sort
/// leaves them in input order.
fn compare_keys(needle: &str, a: &str, b: &str) -> KeyOrdering {
    match (a.find(needle), b.find(needle)) {
        (None, None) => KeyOrdering::Decided(Ordering::Equal),
        (Some(_), None) => KeyOrdering::Decided(Ordering::Less),
        (None, Some(_)) => KeyOrdering::Decided(Ordering::Greater),
        (Some(offset_a), Some(offset_b)) if offset_a == offset_b => {
            match a.len().cmp(&b.len()).then_with(|| a.cmp(b)) {
                Ordering::Equal => KeyOrdering::Tied,
                decided => KeyOrdering::Decided(decided),
            }
        }
        (Some(offset_a), Some(offset_b)) => KeyOrdering::Decided(offset_a.cmp(&offset_b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str) -> RankedItem {
        RankedItem::new(path.to_string())
    }

    fn compare(query: &str, a: &str, b: &str) -> Ordering {
        compare_candidates(&normalized_key(query), &item(a), &item(b))
    }

    #[test]
    fn normalization_strips_everything_but_letters_and_spaces() {
        assert_eq!(normalized_key("  Test.ts "), "testts");
        assert_eq!(normalized_key("foo_bar-2 baz"), "foobar baz");
        assert_eq!(normalized_key("1234"), "");
    }

    #[test]
    fn earlier_offset_sorts_first() {
        // "Test.ts" normalizes to "testts" (offset 0 for "te"),
        // "Latest.ts" to "latestts" (offset 2).
        assert_eq!(compare("te", "Test.ts", "Latest.ts"), Ordering::Less);
        assert_eq!(compare("te", "Latest.ts", "Test.ts"), Ordering::Greater);
    }

    #[test]
    fn offsets_induce_a_total_order() {
        let query = normalized_key("ab");
        let mut items = vec![item("xxxxxab.rs"), item("ab.rs"), item("xxab.rs")];
        items.sort_by(|a, b| compare_candidates(&query, a, b));
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["ab.rs", "xxab.rs", "xxxxxab.rs"]);
    }

    #[test]
    fn match_beats_no_match() {
        assert_eq!(compare("foo", "foo.rs", "bar.rs"), Ordering::Less);
        assert_eq!(compare("foo", "bar.rs", "foo.rs"), Ordering::Greater);
    }

    #[test]
    fn neither_matching_compares_equal() {
        assert_eq!(compare("zzz", "foo.rs", "bar.rs"), Ordering::Equal);
    }

    #[test]
    fn same_offset_prefers_shorter_key() {
        assert_eq!(compare("ma", "main.rs", "manifest.rs"), Ordering::Less);
    }

    #[test]
    fn same_offset_and_length_fall_back_to_lexicographic() {
        // "mast.rs" and "mask.rs" both normalize to six letters at offset 0.
        assert_eq!(compare("ma", "mask.rs", "mast.rs"), Ordering::Less);
    }

    #[test]
    fn identical_labels_are_ordered_by_path() {
        let a = item("src/aaa/mod.rs");
        let b = item("src/bbb/mod.rs");
        let query = normalized_key("mod");
        assert_eq!(compare_candidates(&query, &a, &b), Ordering::Less);
        assert_eq!(compare_candidates(&query, &b, &a), Ordering::Greater);
    }

    #[test]
    fn fallback_stops_after_one_level() {
        // Identical label and path: the path pass ties again and the
        // comparator reports equality instead of recursing.
        let a = item("src/mod.rs");
        let b = item("src/mod.rs");
        let query = normalized_key("mod");
        assert_eq!(compare_candidates(&query, &a, &b), Ordering::Equal);
    }

    #[test]
    fn query_normalizing_to_empty_matches_everything_at_offset_zero() {
        // "42" strips to the empty needle, which every key contains at
        // offset 0, so brevity decides.
        assert_eq!(compare("42", "ab.rs", "abcd.rs"), Ordering::Less);
    }
}
