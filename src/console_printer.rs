use super::file_io::MatchRecord;
use ansi_term::Color;
use std::io::{self, Write};

pub trait MatchFormatter {
    /// Everything before the line text, including the trailing `:`.
    fn prefix(&self, record: &MatchRecord) -> String;

    fn format(&self, record: &MatchRecord) -> Vec<u8> {
        let mut line = self.prefix(record).into_bytes();
        line.extend_from_slice(&record.line_text);
        line
    }
}

/// Terminal output: cyan file name, purple line number.
#[derive(Debug, Clone, Copy)]
pub struct ColorFormatter {
    pub show_line_numbers: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PlainFormatter {
    pub show_line_numbers: bool,
}

impl MatchFormatter for ColorFormatter {
    fn prefix(&self, record: &MatchRecord) -> String {
        let file_name = Color::Cyan
            .paint(record.file_name.display().to_string())
            .to_string();
        let line_number = self
            .show_line_numbers
            .then(|| Color::Purple.paint(record.line_number.to_string()).to_string());
        join_fields(&file_name, line_number.as_deref())
    }
}

impl MatchFormatter for PlainFormatter {
    fn prefix(&self, record: &MatchRecord) -> String {
        let file_name = record.file_name.display().to_string();
        let line_number = self
            .show_line_numbers
            .then(|| record.line_number.to_string());
        join_fields(&file_name, line_number.as_deref())
    }
}

fn join_fields(file_name: &str, line_number: Option<&str>) -> String {
    match line_number {
        Some(num) => format!("{}:{}:", file_name, num),
        None => format!("{}:", file_name),
    }
}

pub fn print_matches<W: Write>(
    out: &mut W,
    records: &[MatchRecord],
    formatter: &dyn MatchFormatter,
) -> io::Result<()> {
    for record in records {
        out.write_all(formatter.prefix(record).as_bytes())?;
        out.write_all(&record.line_text)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
