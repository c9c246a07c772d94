/// A single file known to the picker, identified by its workspace-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub path: String,
    name: String,
}

impl FileRow {
    /// Build a row from a relative path, deriving the display name from the
    /// final path component.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = file_name_of(&path).to_string();
        Self { path, name }
    }

    /// Display name shown in result lists, usually the file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Final component of a `/`-separated relative path.
fn file_name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
