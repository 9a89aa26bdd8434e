use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type GrepResult<T> = Result<T, GrepError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOp {
    Stat,
    Open,
    Read,
}

impl fmt::Display for ScanOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ScanOp::Stat => "stat",
            ScanOp::Open => "open",
            ScanOp::Read => "read",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum GrepError {
    #[error("require args")]
    Usage,

    #[error("search word is not valid UTF-8")]
    NonUtf8Word,

    #[error("read dir {}: {source}", .dir.display())]
    Enumeration {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{op} {}: {source}", .path.display())]
    Scan {
        op: ScanOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write output: {0}")]
    Output(#[from] io::Error),
}

impl GrepError {
    pub fn scan(op: ScanOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        GrepError::Scan {
            op,
            path: path.into(),
            source,
        }
    }

    fn clap_kind(&self) -> clap::ErrorKind {
        match self {
            GrepError::Usage => clap::ErrorKind::MissingRequiredArgument,
            GrepError::NonUtf8Word => clap::ErrorKind::InvalidUtf8,
            _ => clap::ErrorKind::Io,
        }
    }
}

/// Prints `err` to stderr and exits with status 1.
pub fn exit_with_error(err: &GrepError) -> ! {
    clap::Error::with_description(&err.to_string(), err.clap_kind()).exit()
}
