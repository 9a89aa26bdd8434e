//! subgrep prints every line that contains a literal search term, prefixed
//! with the file it came from and optionally its line number.

pub mod commands;
pub mod common;
pub mod console_printer;
pub mod dir_walker;
pub mod file_io;

use commands::UserInput;
use common::GrepResult;
use console_printer::MatchFormatter;
use std::io::Write;
use std::path::Path;

/// Runs one search rooted at `root` and writes the formatted matches to `out`.
///
/// Nothing is written unless enumeration and scanning both succeed.
pub fn execute<W: Write>(
    user_input: &UserInput,
    root: &Path,
    formatter: &dyn MatchFormatter,
    out: &mut W,
) -> GrepResult<()> {
    let file_paths = dir_walker::get_candidate_file_paths(user_input, root)?;
    let records = file_io::find_matching_lines(&user_input.word, &file_paths)?;
    console_printer::print_matches(out, &records, formatter)?;
    Ok(())
}
