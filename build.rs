//! Build script to generate the embedded Latin dictionary
//!
//! Reads the source dictionary, keeps entries whose diacritic-folded
//! headword is exactly five letters, and generates Rust source code
//! with a const entry table.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

const SOURCE_PATH: &str = "data/dictionary.json";
const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_entries(SOURCE_PATH, &Path::new(&out_dir).join("entries.rs"));

    // Rebuild if the source dictionary changes
    println!("cargo:rerun-if-changed={SOURCE_PATH}");
}

/// Folds a headword the same way the runtime normalizer does: NFD
/// decomposition, strip combining diacritical marks, uppercase, trim.
fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_uppercase()
        .trim()
        .to_string()
}

fn generate_entries(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));
    let source: Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {input_path}: {e}"));
    let Value::Object(headwords) = source else {
        panic!("{input_path} must be a JSON object keyed by headword");
    };

    // Folded key -> (original, meaning, part, pronunciation). Source keys
    // iterate in sorted order and later entries overwrite earlier ones, so
    // headwords that collide after folding resolve deterministically.
    let mut entries: BTreeMap<String, (String, String, String, String)> = BTreeMap::new();
    for (headword, data) in &headwords {
        let word = fold(headword);
        if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            continue;
        }
        let meaning = field(data, "meaning").unwrap_or("No translation available");
        let part = field(data, "part").unwrap_or("Unknown");
        let pronunciation = field(data, "pronunciation")
            .or_else(|| field(data, "ipa"))
            .unwrap_or("");
        entries.insert(
            word,
            (
                headword.clone(),
                meaning.to_string(),
                part.to_string(),
                pronunciation.to_string(),
            ),
        );
    }

    assert!(
        !entries.is_empty(),
        "No five-letter words found in {input_path}"
    );

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary entries").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(
        output,
        "// (word, original spelling, meaning, part of speech, pronunciation)"
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Five-letter Latin words with their metadata").unwrap();
    writeln!(
        output,
        "pub const ENTRIES: &[(&str, &str, &str, &str, &str)] = &["
    )
    .unwrap();

    for (word, (original, meaning, part, pronunciation)) in &entries {
        writeln!(
            output,
            "    (\"{}\", \"{}\", \"{}\", \"{}\", \"{}\"),",
            escape(word),
            escape(original),
            escape(meaning),
            escape(part),
            escape(pronunciation)
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in ENTRIES").unwrap();
    writeln!(output, "pub const ENTRIES_COUNT: usize = {};", entries.len()).unwrap();
}

/// Returns a non-empty string field, treating missing and empty as absent.
fn field<'a>(data: &'a Value, name: &str) -> Option<&'a str> {
    data.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn escape(text: &str) -> String {
    text.escape_default().to_string()
}
