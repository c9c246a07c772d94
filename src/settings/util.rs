use std::collections::HashSet;

/// Normalize and deduplicate file extensions provided by the user.
pub(super) fn sanitize_extensions(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for value in values {
        let normalized = value.trim().trim_start_matches('.').to_ascii_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            cleaned.push(normalized);
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_cleaned_and_deduplicated() {
        let cleaned =
            sanitize_extensions(vec![" .RS ".into(), "rs".into(), String::new(), ".Txt".into()]);
        assert_eq!(cleaned, vec!["rs", "txt"]);
    }
}
