//! Build script to generate embedded game assets
//!
//! Reads the default word list and gallows stage illustrations and generates
//! Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default dictionary of mystery-word candidates",
    );

    generate_stage_list(
        "data/gallows",
        &Path::new(&out_dir).join("stages.rs"),
        "STAGES",
        "Gallows illustrations, one per miss count, ground state first",
    );

    // Rebuild if game assets change
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/gallows");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.split_whitespace().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_stage_list(input_dir: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let mut stages = Vec::new();
    loop {
        let stage_path = format!("{input_dir}/state{}.txt", stages.len());
        let Ok(text) = fs::read_to_string(&stage_path) else {
            break;
        };
        stages.push(text);
        println!("cargo:rerun-if-changed={stage_path}");
    }
    assert!(
        stages.len() >= 2,
        "need at least state0.txt and state1.txt under {input_dir}"
    );
    let count = stages.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated stage illustrations").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for stage in &stages {
        // Debug formatting produces a valid escaped string literal
        writeln!(output, "    {stage:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of stages in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
