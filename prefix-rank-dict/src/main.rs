//! The dictionary builder binary of the prefix-rank project.
//!
//! Count the occurrences of every distinct word of a delimited corpus
//! file and persist the result as alphabetically sorted
//! `word,frequency` lines, ready to be inspected or reused as a
//! standalone dictionary.
//!
//! See the [prefix-rank](../prefix_rank/index.html) crate for
//! documentation about the completion ranking binary.

use error::*;
use prefix_rank_core::{read_words, write_lines, FrequencyTable};
use snafu::*;
use std::path::PathBuf;

mod error;

/// Represents the expected parsed program arguments.
#[derive(Debug)]
struct Args {
    corpus_path: PathBuf,
    output_path: PathBuf,
}

/// Parse the arguments and return an error if the wrong number is given or a parsing error happens.
fn parse_args() -> Result<Args> {
    const BIN_NAME_DEFAULT: &str = "prefix-rank-dict";
    let mut args = std::env::args();

    let bin_name = args.next().unwrap_or_else(|| BIN_NAME_DEFAULT.to_string());
    let cliargs_ctx = CliArgs {
        bin_name: &bin_name,
    };

    let corpus_path = args.next().context(cliargs_ctx)?.into();
    let output_path = args.next().context(cliargs_ctx)?.into();

    // Make sure no more argument has been given
    if args.next().is_some() {
        return None.context(cliargs_ctx);
    }

    Ok(Args {
        corpus_path,
        output_path,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let words = read_words(&args.corpus_path).context(CorpusRead {
        path: &args.corpus_path,
    })?;
    let table = FrequencyTable::from_words(&words);

    // Alphabetical order is only for the persisted dictionary,
    // the ranking binary never depends on it
    let lines: Vec<String> = table
        .sorted_entries()
        .iter()
        .map(ToString::to_string)
        .collect();

    write_lines(&args.output_path, &lines).context(DictionaryWrite {
        path: &args.output_path,
    })?;

    Ok(())
}
