use std::io::{stdin, stdout, Write};
use std::path::Path;

use conjugator_core::text::{
    compare_accent_insensitive, get_similarity_score, suggest_corrections,
};
use conjugator_core::ConjugationEngine;

const LEXICON_PATH: &str = "data/verb_lexicon.json";
const IRREGULARS_PATH: &str = "data/philologist_irregulars.json";

fn main() {
    env_logger::init();

    let irregulars = Path::new(IRREGULARS_PATH);
    let engine = match ConjugationEngine::from_files(
        Path::new(LEXICON_PATH),
        irregulars.exists().then_some(irregulars),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] Could not load lexicon: {e}");
            std::process::exit(1);
        }
    };

    println!("Greek Conjugator ({} verbs). Type 'exit' to quit.", engine.lexicon().len());
    println!("---------------------------------------------------------------");
    println!("Enter a lemma to print its indicative paradigm, or");
    println!(":check <answer> <target> to grade an answer.\n");

    loop {
        print!("> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with(":check ") => {
                let mut parts = s[":check ".len()..].split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(answer), Some(target)) => print_check(answer, target),
                    _ => println!("usage: :check <answer> <target>"),
                }
            }
            lemma => match engine.generate(lemma) {
                Ok(forms) => print_paradigm(lemma, &forms),
                Err(e) => println!("[ERROR] {e}"),
            },
        }
    }
}

fn print_check(answer: &str, target: &str) {
    let exact = compare_accent_insensitive(answer, target);
    let score = get_similarity_score(answer, target);
    println!("match: {exact}  similarity: {score:.2}");
    for hint in suggest_corrections(answer, target) {
        println!("  hint: {hint}");
    }
}

fn print_paradigm(lemma: &str, forms: &[conjugator_core::morph::GeneratedForm]) {
    println!("\nParadigm for '{lemma}':");
    let mut last_header = String::new();
    for form in forms {
        let header = format!("{:?} {:?}", form.tense, form.voice);
        if header != last_header {
            println!("\n  [{header}]");
            last_header = header;
        }
        let tag = if form.morphology.override_source.is_some() {
            " (irregular)"
        } else {
            ""
        };
        println!("    {:?} {:?}: {}{tag}", form.person, form.number, form.form);
    }
    println!();
}
