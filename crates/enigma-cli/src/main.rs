use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(
    name = "enigma",
    version,
    about = "Enigma M3 simulator and ciphertext-only key recovery",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encipher (or, identically, decipher) text under an explicit key
    Encrypt(cmd::encrypt::EncryptArgs),
    /// Recover the key of an unknown ciphertext
    Crack(cmd::crack::CrackArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Crack(args) => cmd::crack::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {e}");
        process::exit(1);
    }
}
