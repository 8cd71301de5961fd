//! Word list decoding
//!
//! Lists are plain text with one word per line; blank lines are skipped and
//! every other line must be a valid `Word`.

use crate::core::Word;
use crate::error::LexiconError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Decode a gzip-compressed word list
///
/// # Errors
/// Returns `LexiconError` if the data is not valid gzip, a line is not a
/// valid word, or the list has no words.
pub fn decode_word_list(list: &str, compressed: &[u8]) -> Result<Vec<Word>, LexiconError> {
    parse_word_list(list, GzDecoder::new(compressed))
}

/// Parse an uncompressed word list from any reader
///
/// # Errors
/// Same as [`decode_word_list`].
///
/// # Examples
/// ```
/// use kilordle_planner::lexicon::loader::parse_word_list;
///
/// let words = parse_word_list("demo", "crane\n\nslate\n".as_bytes()).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(parse_word_list("demo", "crane\nCRANE\n".as_bytes()).is_err());
/// ```
pub fn parse_word_list<R: Read>(list: &str, reader: R) -> Result<Vec<Word>, LexiconError> {
    let mut words = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| LexiconError::InvalidEntry {
            list: list.to_string(),
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LexiconError::Empty {
            list: list.to_string(),
        });
    }
    Ok(words)
}

/// Load a word list from disk, gunzipping it if the name ends in `.gz`
///
/// # Errors
/// Returns `LexiconError::Io` if the file cannot be opened or read, otherwise
/// the same errors as [`parse_word_list`].
///
/// # Examples
/// ```no_run
/// use kilordle_planner::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LexiconError> {
    let path = path.as_ref();
    let list = path.display().to_string();
    let file = File::open(path)?;

    if path.extension().is_some_and(|ext| ext == "gz") {
        parse_word_list(&list, GzDecoder::new(file))
    } else {
        parse_word_list(&list, file)
    }
}
