//! Word lists packaged at build time
//!
//! `build.rs` gzips `data/answers.txt` and `data/other_words.txt` into
//! `OUT_DIR`. `other_words.txt` holds the words starting with `a` from the
//! accepted-guess list, not the whole list.

use super::loader::decode_word_list;
use crate::core::Word;
use crate::error::LexiconError;

static ANSWERS_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/answers.txt.gz"));
static OTHER_WORDS_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/other_words.txt.gz"));

pub fn answers() -> Result<Vec<Word>, LexiconError> {
    decode_word_list("answers", ANSWERS_GZ)
}

pub fn other_words() -> Result<Vec<Word>, LexiconError> {
    decode_word_list("other_words", OTHER_WORDS_GZ)
}
