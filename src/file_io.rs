use super::common::{GrepError, GrepResult, ScanOp};
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub file_name: PathBuf,
    pub line_number: usize,
    pub line_text: Vec<u8>,
}

/// Scans `file_paths` in order and returns every line containing `word`.
///
/// Directories are skipped. Any stat, open or read failure aborts the whole
/// scan, so a caller never sees matches from files before the failing one.
pub fn find_matching_lines(word: &str, file_paths: &[PathBuf]) -> GrepResult<Vec<MatchRecord>> {
    let mut records = vec![];

    for file_path in file_paths.iter() {
        let metadata =
            fs::metadata(file_path).map_err(|e| GrepError::scan(ScanOp::Stat, file_path, e))?;
        if metadata.is_dir() {
            debug!(path = %file_path.display(), "skipping directory");
            continue;
        }

        let file =
            File::open(file_path).map_err(|e| GrepError::scan(ScanOp::Open, file_path, e))?;
        let found = read_matching_lines(io::BufReader::new(file), word, file_path)
            .map_err(|e| GrepError::scan(ScanOp::Read, file_path, e))?;

        debug!(path = %file_path.display(), matches = found.len(), "scanned file");
        records.extend(found);
    }

    Ok(records)
}

pub fn read_matching_lines<R: BufRead>(
    mut reader: R,
    word: &str,
    file_path: &Path,
) -> io::Result<Vec<MatchRecord>> {
    let mut records = vec![];
    let mut buf = vec![];
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = trim_line_ending(&buf);
        if contains_bytes(line, word.as_bytes()) {
            records.push(MatchRecord {
                file_name: file_path.to_path_buf(),
                line_number,
                line_text: line.to_vec(),
            });
        }
    }

    Ok(records)
}

// lines are compared as bytes, so text in any encoding is printed as stored
fn contains_bytes(line: &[u8], word: &[u8]) -> bool {
    word.is_empty() || line.windows(word.len()).any(|window| window == word)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
