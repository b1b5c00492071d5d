use crate::alphabet::{decode_wiring, ALPHABET_LEN};
use crate::error::EnigmaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two fixed reflectors of the M3. Both tables are involutions with
/// no fixed point: a letter never reflects to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reflector {
    B,
    C,
}

impl Reflector {
    pub(crate) fn wiring(self) -> &'static str {
        match self {
            Reflector::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Reflector::C => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }

    pub fn table(self) -> [u8; ALPHABET_LEN] {
        decode_wiring(self.wiring())
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Reflector::B => "B",
            Reflector::C => "C",
        })
    }
}

impl FromStr for Reflector {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "B" | "b" => Ok(Reflector::B),
            "C" | "c" => Ok(Reflector::C),
            other => Err(EnigmaError::UnknownReflector(other.to_string())),
        }
    }
}
