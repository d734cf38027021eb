//! Plain-text collaborators around the core structures: read word tokens
//! from delimited corpus or query files, write result and dictionary lines.

use crate::error::*;
use snafu::ResultExt;
use std::{fs, io::Write, path::Path};

/// Split raw file contents into normalized word tokens.
///
/// Tokens are separated by whitespace or commas, trimmed and lowercased;
/// empty tokens are skipped. The trie itself only accepts `'a'-'z'` keys,
/// tokens carrying other characters are rejected later, at insertion.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .split(|character: char| character.is_whitespace() || character == ',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Read all word tokens of a delimited text file, in file order.
/// Used for both corpus and query files.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).context(FileRead { path })?;
    Ok(parse_words(&contents))
}

/// Write one line per entry to a file, truncating any previous contents.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let mut file = fs::File::create(path).context(FileOpen { path })?;
    for line in lines {
        writeln!(file, "{}", line.as_ref()).context(FileWrite { path })?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokens_are_split_on_whitespace_and_commas() {
        let tokens = parse_words("the cat,sat\non\tthe mat");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn tokens_are_lowercased() {
        let tokens = parse_words("The CAT Sat");
        assert_eq!(tokens, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let tokens = parse_words("a,,b,  ,c\n\n");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn windows_line_endings_are_handled() {
        let tokens = parse_words("cat\r\ndog\r\n");
        assert_eq!(tokens, vec!["cat", "dog"]);
    }

    #[test]
    fn empty_contents_yield_no_tokens() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("  \n ,, \t").is_empty());
    }
}
