use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;

use ignore::{DirEntry, Error as IgnoreError, WalkBuilder, WalkState};
use log::{debug, warn};

use super::FilesystemOptions;
use crate::search::SearchData;
use crate::types::FileRow;

/// Walk `root` and collect every file that survives the configured filters.
///
/// Paths are stored relative to `root` with `/` separators. Errors on
/// individual entries are logged and skipped.
pub fn scan(root: &Path, options: &FilesystemOptions) -> SearchData {
    let walker_root = Arc::new(root.to_path_buf());
    let extension_filter = options.extension_filter().map(Arc::new);
    let (tx, rx) = mpsc::channel::<FileRow>();

    build_walk(root, options).build_parallel().run(|| {
        let sender = tx.clone();
        let root = Arc::clone(&walker_root);
        let extension_filter = extension_filter.clone();
        Box::new(move |entry: Result<DirEntry, IgnoreError>| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    return WalkState::Continue;
                }
            };
            let Some(file_type) = entry.file_type() else {
                return WalkState::Continue;
            };
            if !file_type.is_file() {
                return WalkState::Continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root.as_path()).unwrap_or(path);
            if let Some(filter) = extension_filter.as_ref() {
                let extension = relative
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_ascii_lowercase());
                if extension.as_ref().is_none_or(|ext| !filter.contains(ext)) {
                    return WalkState::Continue;
                }
            }

            let relative_display = relative.to_string_lossy().replace('\\', "/");
            if sender.send(FileRow::new(relative_display)).is_err() {
                return WalkState::Quit;
            }

            WalkState::Continue
        })
    });
    drop(tx);

    let files: Vec<FileRow> = rx.into_iter().collect();
    debug!("indexed {} files under {}", files.len(), root.display());
    SearchData { files }
}

fn build_walk(root: &Path, options: &FilesystemOptions) -> WalkBuilder {
    let ignores = options.global_ignore_set();
    let mut walker = WalkBuilder::new(root);

    walker
        .hidden(!options.include_hidden)
        .follow_links(options.follow_symlinks)
        .git_ignore(options.git_ignore)
        .git_global(options.git_global)
        .git_exclude(options.git_exclude)
        .ignore(options.respect_ignore_files)
        .parents(true)
        .threads(options.thread_count())
        .max_depth(options.max_depth);

    if !ignores.is_empty() {
        let ignores = Arc::new(ignores);
        walker.filter_entry(move |entry| !ignores.contains(entry.file_name()));
    }

    walker
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn sorted_paths(data: &SearchData) -> Vec<String> {
        let mut paths: Vec<String> = data.files.iter().map(|row| row.path.clone()).collect();
        paths.sort();
        paths
    }

    #[test]
    fn collects_files_relative_to_root() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.rs"));
        touch(&dir.path().join("nested/b.rs"));

        let data = scan(dir.path(), &FilesystemOptions::default());
        assert_eq!(sorted_paths(&data), vec!["a.rs", "nested/b.rs"]);
    }

    #[test]
    fn globally_ignored_directories_are_skipped() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("keep.rs"));
        touch(&dir.path().join("node_modules/skip.js"));

        let data = scan(dir.path(), &FilesystemOptions::default());
        assert_eq!(sorted_paths(&data), vec!["keep.rs"]);
    }

    #[test]
    fn extension_filter_limits_results() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("keep.rs"));
        touch(&dir.path().join("skip.txt"));

        let options = FilesystemOptions {
            allowed_extensions: Some(vec!["rs".into()]),
            ..FilesystemOptions::default()
        };
        let data = scan(dir.path(), &options);
        assert_eq!(sorted_paths(&data), vec!["keep.rs"]);
    }

    #[test]
    fn max_depth_bounds_the_walk() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("top.rs"));
        touch(&dir.path().join("deep/nested/file.rs"));

        let options = FilesystemOptions {
            max_depth: Some(1),
            ..FilesystemOptions::default()
        };
        let data = scan(dir.path(), &options);
        assert_eq!(sorted_paths(&data), vec!["top.rs"]);
    }
}
