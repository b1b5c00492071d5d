use crate::reports;
use clap::Args;
use enigma_core::config::SearchParams;
use enigma_core::cracking::{Decryptor, Phase, SearchObserver};
use enigma_core::error::CrackResult;
use enigma_core::key::ScoredKey;
use enigma_core::machine::Enigma;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// The ciphertext; anything outside A-Z is ignored
    #[arg(required_unless_present = "file")]
    pub ciphertext: Option<String>,

    /// Read the ciphertext from a file instead
    #[arg(long)]
    pub file: Option<String>,

    /// Directory holding bigrams.txt / trigrams.txt / quadgrams.txt
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    #[command(flatten)]
    pub params: SearchParams,

    /// Worker threads for the wheel-order scan (default: all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Emit the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Suppress per-candidate progress lines
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

struct ConsoleProgress;

impl SearchObserver for ConsoleProgress {
    fn on_candidate(&self, phase: Phase, key: &ScoredKey) -> bool {
        let label = match phase {
            Phase::Positions => "POS",
            Phase::Rings => "RINGS",
            Phase::Plugboard => "PLUGS",
        };
        println!("  [{label:<5}] {key}");
        true
    }
}

pub fn run(args: CrackArgs) -> CrackResult<()> {
    if let Some(threads) = args.threads {
        // Failing only means a global pool already exists; keep going.
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global();
    }

    let raw = super::read_input(&args.ciphertext, &args.file)?;
    let decryptor = Decryptor::from_data_dir(&raw, &args.data_dir, args.params)?;
    info!("🔍 cracking {} letters of ciphertext", decryptor.letter_count());

    let started = Instant::now();
    let best = if args.quiet {
        decryptor.decrypt()
    } else {
        decryptor.decrypt_observed(&ConsoleProgress)
    };
    let elapsed = started.elapsed();

    let mut machine = Enigma::from_key(&best.key);
    let plaintext = machine.encrypt(&raw);

    if args.json {
        reports::print_json(&best, &plaintext)?;
    } else {
        reports::print_report(&best, &plaintext, elapsed);
    }
    Ok(())
}
