#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use subgrep::common::GrepResult;

pub fn unwrap_and_check_ok<T>(result: GrepResult<T>, assert_msg: &str) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}: {}", assert_msg, error),
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `paths` relative to `root`, with `/` separators.
pub fn relative_names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap_or(p)
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// The tree most tests share: two files at the root, one nested, and a
/// `.git` directory holding a line that would otherwise match.
pub fn sample_tree(root: &Path) {
    write_file(&root.join("a.txt"), "foo\nbar foo baz\n");
    write_file(&root.join("b.txt"), "nope\n");
    write_file(&root.join("sub/c.txt"), "no\nfoo again\n");
    write_file(&root.join(".git/config"), "foo = true\n");
}
