use enigma_core::error::CrackResult;
use enigma_core::key::{Key, ScoredKey};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct CrackReport<'a> {
    key: &'a Key,
    score: f64,
    plaintext: &'a str,
}

pub fn print_report(best: &ScoredKey, plaintext: &str, elapsed: Duration) {
    println!("\n=== 🏆 BEST KEY ===");
    println!("Key:   {}", best.key);
    println!("Score: {:.4}  ({:.1?} elapsed)", best.score, elapsed);
    println!("\n{plaintext}");
}

pub fn print_json(best: &ScoredKey, plaintext: &str) -> CrackResult<()> {
    let report = CrackReport {
        key: &best.key,
        score: best.score,
        plaintext,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
