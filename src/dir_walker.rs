use super::commands::UserInput;
use super::common::{GrepError, GrepResult};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const SKIPPED_NAME: &str = ".git";

/// Resolves which files to scan for `user_input`, relative to `root`.
pub fn get_candidate_file_paths(user_input: &UserInput, root: &Path) -> GrepResult<Vec<PathBuf>> {
    if user_input.flags.recursive {
        if !user_input.files.is_empty() {
            debug!(ignored = user_input.files.len(), "recursive mode ignores explicit files");
        }
        return get_file_paths_recursively(root);
    }

    if user_input.files.is_empty() {
        return get_file_paths_in_dir(root);
    }

    Ok(user_input.files.clone())
}

/// Immediate non-directory entries of `dir`, sorted by name.
pub fn get_file_paths_in_dir(dir: &Path) -> GrepResult<Vec<PathBuf>> {
    let file_paths = read_sorted_entries(dir)?
        .into_iter()
        .filter(|(_, is_dir)| !is_dir)
        .map(|(name, _)| join_clean(dir, name))
        .collect();

    Ok(file_paths)
}

/// Every non-directory entry below `root` in depth-first pre-order, never
/// entering or returning anything named `.git`.
pub fn get_file_paths_recursively(root: &Path) -> GrepResult<Vec<PathBuf>> {
    debug!(root = %root.display(), "walking directory tree");

    let mut file_paths = vec![];
    let mut pending: Vec<(PathBuf, bool)> = vec![];
    push_children(root, &mut pending)?;

    while let Some((path, is_dir)) = pending.pop() {
        if is_dir {
            push_children(&path, &mut pending)?;
        } else {
            file_paths.push(path);
        }
    }

    Ok(file_paths)
}

// children go on in reverse so they pop off in name order
fn push_children(dir: &Path, pending: &mut Vec<(PathBuf, bool)>) -> GrepResult<()> {
    let children = read_sorted_entries(dir)?
        .into_iter()
        .filter(|(name, _)| {
            let skip = name == SKIPPED_NAME;
            if skip {
                debug!(dir = %dir.display(), "skipping {}", SKIPPED_NAME);
            }
            !skip
        })
        .map(|(name, is_dir)| (join_clean(dir, name), is_dir))
        .rev();
    pending.extend(children);
    Ok(())
}

fn read_sorted_entries(dir: &Path) -> GrepResult<Vec<(OsString, bool)>> {
    debug!(dir = %dir.display(), "reading directory");
    let to_err = |source: io::Error| GrepError::Enumeration {
        dir: dir.to_path_buf(),
        source,
    };

    let mut entries = vec![];
    for entry in fs::read_dir(dir).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        // file_type() does not follow symlinks
        let is_dir = entry.file_type().map_err(to_err)?.is_dir();
        entries.push((entry.file_name(), is_dir));
    }
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    Ok(entries)
}

// "." + "a.txt" is "a.txt", not "./a.txt"
fn join_clean(dir: &Path, name: OsString) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}
