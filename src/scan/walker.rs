use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lazily enumerate all files under `root` that satisfy `predicate`.
///
/// Traversal is depth-first with entries in each directory visited in
/// lexicographic file-name order, so the sequence is stable across runs
/// on an unchanged tree. The predicate only ever sees file entries;
/// directories are never yielded. Symbolic links are not followed, which
/// also rules out traversal cycles.
pub fn walk<P>(root: &Path, predicate: P) -> impl Iterator<Item = PathBuf>
where
    P: Fn(&Path) -> bool,
{
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(move |path| predicate(path))
}

/// Predicate selecting files whose basename equals `name`.
pub fn basename_is(name: &str) -> impl Fn(&Path) -> bool {
    let name = name.to_string();
    move |path: &Path| path.file_name() == Some(OsStr::new(&name))
}
