//! Batch generator: synthesizes the full paradigm for every lexicon entry
//! and writes one JSON object per form to a JSONL file. The output file is
//! written atomically (temp file in the target directory, then persist).

use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use tempfile::NamedTempFile;

use conjugator_core::ConjugationEngine;

const DEFAULT_LEXICON: &str = "data/verb_lexicon.json";
const DEFAULT_IRREGULARS: &str = "data/philologist_irregulars.json";
const DEFAULT_OUT: &str = "data/generated_conjugations.jsonl";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let lexicon_path = args.get(1).map_or(DEFAULT_LEXICON, String::as_str);
    let irregulars_path = args.get(2).map_or(DEFAULT_IRREGULARS, String::as_str);
    let out_path = PathBuf::from(args.get(3).map_or(DEFAULT_OUT, String::as_str));

    let irregulars = Path::new(irregulars_path);
    let engine = match ConjugationEngine::from_files(
        Path::new(lexicon_path),
        irregulars.exists().then_some(irregulars),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            exit(1);
        }
    };

    if let Err(e) = generate_all(&engine, &out_path) {
        eprintln!("[ERROR] {e}");
        exit(1);
    }
    println!("Wrote {}", out_path.display());
}

fn generate_all(
    engine: &ConjugationEngine,
    out_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let parent_dir = out_path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);

    let mut count = 0usize;
    for entry in engine.lexicon().values() {
        for form in engine.generate(&entry.lemma)? {
            serde_json::to_writer(&mut writer, &form)?;
            writer.write_all(b"\n")?;
            count += 1;
        }
    }
    writer.flush()?;
    drop(writer);

    temp_file.persist(out_path)?;
    println!("Generated {count} forms for {} entries", engine.lexicon().len());
    Ok(())
}
