use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display("Cannot insert an empty key in the trie"))]
    EmptyKey,
    #[snafu(display("Unsupported character '{}' in key '{}'", character, key))]
    KeyCharacter { key: String, character: char },
    #[snafu(display("Could not open file {}: {}", path.display(), source))]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not read in file {}: {}", path.display(), source))]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not write in file {}: {}", path.display(), source))]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
