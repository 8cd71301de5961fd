//! Build script to package the word lists
//!
//! Compresses the plain-text word lists into gzip resources that the library
//! embeds with `include_bytes!`. Validation happens when the lists are decoded.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Answer pool: words that can be hidden on a board
    compress_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.txt.gz"),
    );

    // Extended vocabulary: accepted guesses that are never answers
    compress_word_list(
        "data/other_words.txt",
        &Path::new(&out_dir).join("other_words.txt.gz"),
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/other_words.txt");
    println!("cargo:rerun-if-changed=build.rs");
}

fn compress_word_list(input_path: &str, output_path: &Path) {
    let content = fs::read(input_path).unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut encoder = GzEncoder::new(output, Compression::best());
    encoder
        .write_all(&content)
        .unwrap_or_else(|e| panic!("Failed to compress {input_path}: {e}"));
    encoder
        .finish()
        .unwrap_or_else(|e| panic!("Failed to finish {}: {e}", output_path.display()));
}
