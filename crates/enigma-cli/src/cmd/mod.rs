pub mod crack;
pub mod encrypt;

use enigma_core::error::{CrackResult, EnigmaError};
use enigma_core::key::PlugPair;
use enigma_core::machine::Wheel;
use std::fs;

/// "I,II,III" -> a wheel order, leftmost first.
pub(crate) fn parse_wheels(s: &str) -> CrackResult<[Wheel; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(EnigmaError::Config(format!(
            "--wheels needs three comma-separated values, got '{s}'"
        )));
    }
    Ok([parts[0].parse()?, parts[1].parse()?, parts[2].parse()?])
}

/// "0,0,0" -> three ring settings or positions.
pub(crate) fn parse_triple(s: &str, flag: &str) -> CrackResult<[u8; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(EnigmaError::Config(format!(
            "--{flag} needs three comma-separated values, got '{s}'"
        )));
    }
    let mut values = [0u8; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| {
            EnigmaError::Config(format!("--{flag}: '{part}' is not a number in 0..26"))
        })?;
    }
    Ok(values)
}

/// "AB,CD" -> plug pairs; an empty string means none.
pub(crate) fn parse_pairs(s: &str) -> CrackResult<Vec<PlugPair>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed.split(',').map(|pair| pair.trim().parse()).collect()
}

/// Positional text, or the contents of `--file`.
pub(crate) fn read_input(text: &Option<String>, file: &Option<String>) -> CrackResult<String> {
    match (text, file) {
        (Some(t), _) => Ok(t.clone()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(EnigmaError::Config(
            "provide text as an argument or via --file".to_string(),
        )),
    }
}
