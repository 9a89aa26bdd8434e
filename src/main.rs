use std::env;
use std::io;
use std::iter;
use std::path::Path;
use subgrep::commands::{self, ClapArg, UserInput};
use subgrep::common;
use subgrep::console_printer::ColorFormatter;
use tracing::Level;

fn main() {
    let mut args = env::args_os();
    let binary_name = args.next().unwrap_or_else(|| "subgrep".into());
    let matches = commands::build_app()
        .get_matches_from(iter::once(binary_name).chain(commands::stop_options_at_word(args)));
    let user_input = match UserInput::from_matches(&matches) {
        Ok(user_input) => user_input,
        Err(error) => common::exit_with_error(&error),
    };

    let max_level = match user_input.flags.verbose {
        true => Level::DEBUG,
        false => Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let formatter = ColorFormatter {
        show_line_numbers: user_input.flags.show_line_numbers,
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(error) = subgrep::execute(&user_input, Path::new("."), &formatter, &mut out) {
        common::exit_with_error(&error);
    }
}
