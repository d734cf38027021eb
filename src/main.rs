//! The application binary of the prefix-rank project.
//!
//! Read a corpus of words and a list of query prefixes from delimited
//! text files, rank up to five completions per query by their historical
//! frequency and write one result line per query to an output file, or
//! to the standard output stream when no output path is given.
//!
//! See the [prefix-rank-dict](../prefix_rank_dict/index.html) crate for
//! documentation about the dictionary builder binary.
//!
//! See the [prefix-rank-core](../prefix_rank_core/index.html) crate for
//! documentation about types and functions shared by the binaries.

use error::*;
use prefix_rank_core::{read_words, write_lines};
use snafu::*;
use std::path::PathBuf;

mod error;
mod query;
mod rank;

/// Represents the expected parsed program arguments.
#[derive(Debug)]
struct Args {
    corpus_path: PathBuf,
    queries_path: PathBuf,
    output_path: Option<PathBuf>,
}

/// Parse the arguments and return an error if the wrong number is given or a parsing error happens.
fn parse_args() -> Result<Args> {
    const BIN_NAME_DEFAULT: &str = "prefix-rank";
    let mut args = std::env::args();

    let bin_name = args.next().unwrap_or_else(|| BIN_NAME_DEFAULT.to_string());
    let cliargs_ctx = CliArgs {
        bin_name: &bin_name,
    };

    let corpus_path = args.next().context(cliargs_ctx)?.into();
    let queries_path = args.next().context(cliargs_ctx)?.into();
    let output_path = args.next().map(PathBuf::from);

    // Make sure no more argument has been given
    if args.next().is_some() {
        return None.context(cliargs_ctx);
    }

    Ok(Args {
        corpus_path,
        queries_path,
        output_path,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let words = read_words(&args.corpus_path).context(CorpusRead {
        path: &args.corpus_path,
    })?;
    let queries = read_words(&args.queries_path).context(QueriesRead {
        path: &args.queries_path,
    })?;

    let results = query::complete(&words, &queries);

    match &args.output_path {
        Some(path) => write_lines(path, &results).context(OutputWrite { path })?,
        None => {
            for line in &results {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
