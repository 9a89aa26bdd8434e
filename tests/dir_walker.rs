mod commons;

use commons::{relative_names, sample_tree, unwrap_and_check_ok};
use std::path::PathBuf;
use subgrep::commands::{Flags, UserInput};
use subgrep::common::GrepError;
use subgrep::console_printer::PlainFormatter;
use subgrep::dir_walker::get_candidate_file_paths;
use subgrep::file_io::find_matching_lines;
use tempfile::tempdir;

fn user_input(files: Vec<PathBuf>, recursive: bool, show_line_numbers: bool) -> UserInput {
    UserInput {
        word: "foo".to_string(),
        files,
        flags: Flags {
            recursive,
            show_line_numbers,
            verbose: false,
        },
    }
}

fn run_to_string(input: &UserInput, root: &std::path::Path) -> Result<String, GrepError> {
    let formatter = PlainFormatter {
        show_line_numbers: input.flags.show_line_numbers,
    };
    let mut out = vec![];
    subgrep::execute(input, root, &formatter, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn recursive_walk_should_exclude_git_files() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());

    let files = unwrap_and_check_ok(
        get_candidate_file_paths(&user_input(vec![], true, false), temp.path()),
        "recursive enumeration should not be err",
    );

    assert_eq!(
        relative_names(temp.path(), &files),
        vec!["a.txt", "b.txt", "sub/c.txt"]
    );
}

#[test]
fn default_dir_mode_should_not_descend() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());

    let files = unwrap_and_check_ok(
        get_candidate_file_paths(&user_input(vec![], false, false), temp.path()),
        "directory listing should not be err",
    );

    assert_eq!(relative_names(temp.path(), &files), vec!["a.txt", "b.txt"]);
}

#[test]
fn recursive_matches_should_come_in_walk_order() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let files = unwrap_and_check_ok(
        get_candidate_file_paths(&user_input(vec![], true, false), temp.path()),
        "recursive enumeration should not be err",
    );

    let records = unwrap_and_check_ok(
        find_matching_lines("foo", &files),
        "scanning enumerated files should not be err",
    );

    let found: Vec<(String, usize)> = records
        .iter()
        .map(|r| {
            let name = relative_names(temp.path(), &[r.file_name.clone()]).remove(0);
            (name, r.line_number)
        })
        .collect();
    assert_eq!(
        found,
        vec![
            ("a.txt".to_string(), 1),
            ("a.txt".to_string(), 2),
            ("sub/c.txt".to_string(), 2),
        ]
    );
}

#[test]
fn execute_should_print_explicit_files_in_argument_order() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let c = temp.path().join("sub/c.txt");
    let a = temp.path().join("a.txt");

    let output = unwrap_and_check_ok(
        run_to_string(&user_input(vec![c.clone(), a.clone()], false, true), temp.path()),
        "execute should not be err",
    );

    let expected = format!(
        "{c}:2:foo again\n{a}:1:foo\n{a}:2:bar foo baz\n",
        c = c.display(),
        a = a.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn execute_should_be_idempotent() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let input = user_input(vec![], true, true);

    let first = unwrap_and_check_ok(run_to_string(&input, temp.path()), "first run");
    let second = unwrap_and_check_ok(run_to_string(&input, temp.path()), "second run");

    assert_eq!(first, second);
}

#[test]
fn execute_should_print_nothing_when_a_later_file_is_missing() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let files = vec![temp.path().join("a.txt"), temp.path().join("missing.txt")];
    let formatter = PlainFormatter {
        show_line_numbers: false,
    };
    let mut out = vec![];

    let result = subgrep::execute(
        &user_input(files, false, false),
        temp.path(),
        &formatter,
        &mut out,
    );

    assert!(matches!(result, Err(GrepError::Scan { .. })));
    assert!(out.is_empty());
}
