//! Immutable configuration snapshots exchanged between search phases.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CrackResult, EnigmaError};
use crate::machine::Wheel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One plugboard cable: an unordered pair of distinct letters,
/// normalised so the smaller letter index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PlugPair {
    a: u8,
    b: u8,
}

impl PlugPair {
    /// Letter indices in `0..26`, distinct; anything else is a caller
    /// bug and panics. Parse user input through `FromStr` instead.
    pub fn new(a: u8, b: u8) -> Self {
        assert!(
            (a as usize) < ALPHABET_LEN && (b as usize) < ALPHABET_LEN && a != b,
            "plug pair needs two distinct letters, got ({a}, {b})"
        );
        if a < b {
            PlugPair { a, b }
        } else {
            PlugPair { a: b, b: a }
        }
    }

    pub fn first(self) -> u8 {
        self.a
    }

    pub fn second(self) -> u8 {
        self.b
    }

    pub fn contains(self, letter: u8) -> bool {
        self.a == letter || self.b == letter
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.a) as char, (b'A' + self.b) as char)
    }
}

impl FromStr for PlugPair {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EnigmaError::MalformedPair(s.to_string());
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 {
            return Err(malformed());
        }
        let mut letters = [0u8; 2];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            *slot = match b {
                b'A'..=b'Z' => b - b'A',
                b'a'..=b'z' => b - b'a',
                _ => return Err(malformed()),
            };
        }
        if letters[0] == letters[1] {
            return Err(malformed());
        }
        Ok(PlugPair::new(letters[0], letters[1]))
    }
}

impl From<PlugPair> for String {
    fn from(pair: PlugPair) -> String {
        pair.to_string()
    }
}

impl TryFrom<String> for PlugPair {
    type Error = EnigmaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A complete machine configuration: wheel order (leftmost first), ring
/// settings, starting positions, and the plug pair list. The reflector
/// is implied B. Keys are value snapshots; once built they are never
/// mutated, and building one from a machine deep-copies everything.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key {
    pub wheels: [Wheel; 3],
    pub rings: [u8; 3],
    pub positions: [u8; 3],
    pub pairs: Vec<PlugPair>,
}

impl Key {
    pub fn new(
        wheels: [Wheel; 3],
        rings: [u8; 3],
        positions: [u8; 3],
        pairs: Vec<PlugPair>,
    ) -> CrackResult<Self> {
        for &ring in &rings {
            if ring as usize >= ALPHABET_LEN {
                return Err(EnigmaError::RingOutOfRange(ring));
            }
        }
        for &position in &positions {
            if position as usize >= ALPHABET_LEN {
                return Err(EnigmaError::PositionOutOfRange(position));
            }
        }
        let mut seen = [false; ALPHABET_LEN];
        for pair in &pairs {
            for letter in [pair.first(), pair.second()] {
                if seen[letter as usize] {
                    return Err(EnigmaError::ConflictingPair((b'A' + letter) as char));
                }
                seen[letter as usize] = true;
            }
        }
        Ok(Key {
            wheels,
            rings,
            positions,
            pairs,
        })
    }
}

impl Default for Key {
    fn default() -> Self {
        Key {
            wheels: [Wheel::I, Wheel::II, Wheel::III],
            rings: [0; 3],
            positions: [0; 3],
            pairs: Vec::new(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "wheels=[{}, {}, {}] rings={:?} positions={:?} pairs=[{pairs}]",
            self.wheels[0], self.wheels[1], self.wheels[2], self.rings, self.positions
        )
    }
}

/// A key plus the fitness of the decryption it produced.
///
/// Ordered by score (ascending), falling back to the canonical key
/// order so equal scores still sort identically on every run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredKey {
    pub key: Key,
    pub score: f64,
}

impl ScoredKey {
    pub fn new(key: Key, score: f64) -> Self {
        ScoredKey { key, score }
    }
}

impl PartialEq for ScoredKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredKey {}

impl PartialOrd for ScoredKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl fmt::Display for ScoredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} score={:.6}", self.key, self.score)
    }
}
