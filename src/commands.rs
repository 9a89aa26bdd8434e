use super::common::{GrepError, GrepResult};
use clap::{crate_version, App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub recursive: bool,
    pub show_line_numbers: bool,
    pub verbose: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub word: String,
    pub files: Vec<PathBuf>,
    pub flags: Flags,
}

pub trait ClapArg<'a, const I: usize> {
    const ARG_NAMES: [&'a str; I];
    fn get_args<'b>() -> Vec<Arg<'a, 'b>>;
    fn from_matches(matches: &ArgMatches) -> GrepResult<Self>
    where
        Self: Sized;
}

impl<'a> ClapArg<'a, 5> for UserInput {
    const ARG_NAMES: [&'a str; 5] = ["word", "files", "recursive", "line-numbers", "verbose"];

    fn get_args<'b>() -> Vec<Arg<'a, 'b>> {
        let [word, files, recursive, line_numbers, verbose] = Self::ARG_NAMES;
        vec![
            // not marked required: a missing word is reported as our own usage error
            Arg::with_name(word)
                .help("the literal, case-sensitive term to search for")
                .takes_value(true)
                .index(1),
            Arg::with_name(files)
                .help("files to search; defaults to the files in the current directory")
                .takes_value(true)
                .multiple(true)
                .index(2),
            Arg::with_name(recursive)
                .help("search every file below the current directory, skipping .git")
                .short("R"),
            Arg::with_name(line_numbers)
                .help("prefix each matching line with its line number")
                .short("l"),
            Arg::with_name(verbose)
                .help("log enumeration and scanning progress to stderr")
                .short("v")
                .long("verbose"),
        ]
    }

    fn from_matches(matches: &ArgMatches) -> GrepResult<Self> {
        let [word, files, recursive, line_numbers, verbose] = Self::ARG_NAMES;

        let word = matches
            .value_of_os(word)
            .filter(|w| !w.is_empty())
            .ok_or(GrepError::Usage)?
            .to_str()
            .ok_or(GrepError::NonUtf8Word)?
            .to_string();

        let files: Vec<PathBuf> = matches
            .values_of_os(files)
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        Ok(Self {
            word,
            files,
            flags: Flags {
                recursive: matches.is_present(recursive),
                show_line_numbers: matches.is_present(line_numbers),
                verbose: matches.is_present(verbose),
            },
        })
    }
}

/// Reorders command-line arguments (without the binary name) so option
/// parsing ends at the search word: everything after the word is a file, even
/// when it starts with `-`.
pub fn stop_options_at_word<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut ordered = vec![];

    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if is_option(&arg) {
            ordered.push(arg);
        } else {
            ordered.push(OsString::from("--"));
            ordered.push(arg);
            ordered.extend(args.by_ref());
            return ordered;
        }
    }

    // an explicit `--` was seen, or no positional at all
    let rest: Vec<OsString> = args.collect();
    if !rest.is_empty() {
        ordered.push(OsString::from("--"));
        ordered.extend(rest);
    }
    ordered
}

// "-" alone is a positional
fn is_option(arg: &OsString) -> bool {
    arg.to_str()
        .map_or(false, |arg| arg.len() > 1 && arg.starts_with('-'))
}

pub fn build_app<'a, 'b>() -> App<'a, 'b> {
    UserInput::get_args().into_iter().fold(
        App::new("subgrep")
            .version(crate_version!())
            .about("Prints every line that contains a literal search term"),
        |acc, arg| acc.arg(arg),
    )
}
