use clap::Args;
use enigma_core::error::CrackResult;
use enigma_core::key::Key;
use enigma_core::machine::{Enigma, Reflector};

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Text to encipher; anything outside A-Z is dropped
    #[arg(required_unless_present = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long)]
    pub file: Option<String>,

    /// Wheel order, leftmost first
    #[arg(long, default_value = "I,II,III")]
    pub wheels: String,

    /// Ring settings, 0..26
    #[arg(long, default_value = "0,0,0")]
    pub rings: String,

    /// Starting positions, 0..26
    #[arg(long, default_value = "0,0,0")]
    pub positions: String,

    /// Reflector model, B or C
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Plugboard pairs, e.g. "AB,CD"
    #[arg(long, default_value = "")]
    pub pairs: String,
}

pub fn run(args: EncryptArgs) -> CrackResult<()> {
    let text = super::read_input(&args.text, &args.file)?;

    let key = Key::new(
        super::parse_wheels(&args.wheels)?,
        super::parse_triple(&args.rings, "rings")?,
        super::parse_triple(&args.positions, "positions")?,
        super::parse_pairs(&args.pairs)?,
    )?;
    let reflector: Reflector = args.reflector.parse()?;

    let mut machine = Enigma::from_key(&key);
    machine.set_reflector(reflector);
    println!("{}", machine.encrypt(&text));
    Ok(())
}
