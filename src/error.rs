use snafu::Snafu;
use std::{
    fmt::{Debug, Display, Formatter},
    path::PathBuf,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display(
        "Usage: {} /path/to/corpus.txt /path/to/queries.txt [/path/to/matches.csv]",
        bin_name
    ))]
    CliArgs { bin_name: String },
    #[snafu(display("Error while reading corpus file {}: {}", path.display(), source))]
    CorpusRead {
        path: PathBuf,
        source: prefix_rank_core::Error,
    },
    #[snafu(display("Error while reading queries file {}: {}", path.display(), source))]
    QueriesRead {
        path: PathBuf,
        source: prefix_rank_core::Error,
    },
    #[snafu(display("Error while writing result lines to file {}: {}", path.display(), source))]
    OutputWrite {
        path: PathBuf,
        source: prefix_rank_core::Error,
    },
}

// Link Error to Display to print the message when an error is returned from main.
// (taken from snafu issues, may be implemented in snafu in the future)
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
