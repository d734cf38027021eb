//! Batch query processing: build the ranking trie from a corpus and
//! format the ranked completions of every query into result lines.

use crate::rank::{rank_prefix, QueryMatch};
use prefix_rank_core::{FrequencyTable, Trie};
use std::fmt::Write;

/// Build a fresh ranking trie from the raw corpus tokens.
///
/// Each distinct word is inserted once with its occurrence count. A word
/// the trie rejects (unsupported characters) is reported on stderr and
/// skipped, it never aborts the rest of the corpus.
pub fn build_trie(words: &[String]) -> Trie {
    let table = FrequencyTable::from_words(words);

    let mut trie = Trie::new();
    for entry in table.entries() {
        // Duplicate insertion cannot happen, the table entries are distinct
        if let Err(e) = trie.insert(&entry.word, entry.frequency) {
            eprintln!("> {}", e);
        }
    }

    trie
}

/// Format the ranked matches of one query and append them to the buffer.
///
/// When the literal prefix is not itself a complete word, the line starts
/// with a `<prefix>,` marker; each match then appends `<word>,<probability>,`.
fn format_result_line(prefix: &str, is_word: bool, matches: &[QueryMatch], line: &mut String) {
    line.clear();

    if !is_word {
        line.push_str(prefix);
        line.push(',');
    }

    for query_match in matches {
        // Writing to a String cannot fail
        let _ = write!(line, "{},", query_match);
    }
}

/// Answer every query against the corpus and return one formatted result
/// line per query, in query order.
pub fn complete(words: &[String], queries: &[String]) -> Vec<String> {
    const LINE_CAP: usize = 120;

    let trie = build_trie(words);

    let mut results = Vec::with_capacity(queries.len());
    let mut line = String::with_capacity(LINE_CAP);
    for prefix in queries {
        let matches = rank_prefix(&trie, prefix);
        let is_word = trie.frequency_of(prefix) > 0;
        format_result_line(prefix, is_word, &matches, &mut line);
        results.push(line.clone());
    }

    results
}
