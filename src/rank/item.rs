use crate::types::FileRow;

/// Display section a ranked item opens, if any.
///
/// Exactly one item per run starts each segment; all other items carry no
/// group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultGroup {
    RecentlyOpened,
    FileResults,
}

impl ResultGroup {
    /// Header text shown above the segment.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ResultGroup::RecentlyOpened => "recently opened",
            ResultGroup::FileResults => "file results",
        }
    }
}

/// One entry of a ranked result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    /// Workspace-relative identifier, also used as the display path.
    pub path: String,
    /// Display label, the file name.
    pub label: String,
    /// Set on the first item of a segment only.
    pub group: Option<ResultGroup>,
}

impl RankedItem {
    pub(crate) fn new(path: String) -> Self {
        let label = FileRow::new(path.as_str()).name().to_string();
        Self {
            path,
            label,
            group: None,
        }
    }

    pub(crate) fn from_row(row: &FileRow) -> Self {
        Self {
            path: row.path.clone(),
            label: row.name().to_string(),
            group: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_derived_from_path() {
        let item = RankedItem::new("src/cli/output.rs".to_string());
        assert_eq!(item.label, "output.rs");
        assert_eq!(item.group, None);
    }

    #[test]
    fn group_labels_match_display_headers() {
        assert_eq!(ResultGroup::RecentlyOpened.label(), "recently opened");
        assert_eq!(ResultGroup::FileResults.label(), "file results");
    }
}
