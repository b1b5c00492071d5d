use super::Fitness;
use crate::alphabet::ALPHABET_LEN;
use crate::error::{CrackResult, EnigmaError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Log-probability charged for any n-gram absent from the table.
/// Bounded on purpose: one unseen gram should hurt, not veto.
pub const MISS_PENALTY: f64 = -12.0;

/// English n-gram log-probabilities held in a dense `26^n` table.
/// Slots the table file never mentions keep the miss penalty.
pub struct NgramModel {
    n: usize,
    name: &'static str,
    table: Vec<f64>,
}

impl NgramModel {
    /// Reads a `GRAM,SCORE` table for gram size `n` (2, 3, or 4). Any
    /// malformed line is a hard error; a later duplicate of a gram
    /// overwrites the earlier value.
    pub fn from_reader<R: Read>(n: usize, reader: R) -> CrackResult<Self> {
        let name = Self::name_of(n)?;
        let mut table = vec![MISS_PENALTY; ALPHABET_LEN.pow(n as u32)];

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        let mut loaded = 0usize;
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            if record.len() < 2 {
                return Err(EnigmaError::Table(format!(
                    "line {}: expected GRAM,SCORE",
                    line + 1
                )));
            }
            let gram = record[0].trim();
            let slot = Self::index_of(n, gram).ok_or_else(|| {
                EnigmaError::Table(format!("line {}: bad {name} '{gram}'", line + 1))
            })?;
            let score: f64 = record[1].trim().parse().map_err(|_| {
                EnigmaError::Table(format!("line {}: bad score '{}'", line + 1, &record[1]))
            })?;
            table[slot] = score;
            loaded += 1;
        }

        info!("loaded {loaded} {name} entries");
        Ok(NgramModel { n, name, table })
    }

    pub fn from_file<P: AsRef<Path>>(n: usize, path: P) -> CrackResult<Self> {
        let file = File::open(path).map_err(EnigmaError::Io)?;
        Self::from_reader(n, file)
    }

    /// Resolves the conventional table file under `dir`:
    /// `bigrams.txt`, `trigrams.txt`, or `quadgrams.txt`.
    pub fn load<P: AsRef<Path>>(n: usize, dir: P) -> CrackResult<Self> {
        let file = match n {
            2 => "bigrams.txt",
            3 => "trigrams.txt",
            4 => "quadgrams.txt",
            other => return Err(EnigmaError::UnsupportedNgram(other)),
        };
        Self::from_file(n, dir.as_ref().join(file))
    }

    pub fn n(&self) -> usize {
        self.n
    }

    fn name_of(n: usize) -> CrackResult<&'static str> {
        match n {
            2 => Ok("bigram"),
            3 => Ok("trigram"),
            4 => Ok("quadgram"),
            other => Err(EnigmaError::UnsupportedNgram(other)),
        }
    }

    /// Base-26 table slot for an upper-case A-Z gram of length `n`.
    fn index_of(n: usize, gram: &str) -> Option<usize> {
        if gram.len() != n {
            return None;
        }
        let mut slot = 0usize;
        for b in gram.bytes() {
            if !b.is_ascii_uppercase() {
                return None;
            }
            slot = slot * ALPHABET_LEN + (b - b'A') as usize;
        }
        Some(slot)
    }
}

impl Fitness for NgramModel {
    fn name(&self) -> &'static str {
        self.name
    }

    /// Sum over all overlapping windows, accumulated in text order so
    /// every caller sees the identical floating-point total.
    fn score(&self, letters: &[u8]) -> f64 {
        if letters.len() < self.n {
            return 0.0;
        }
        let window_modulus = ALPHABET_LEN.pow(self.n as u32 - 1);
        let mut slot = 0usize;
        for &letter in &letters[..self.n - 1] {
            slot = slot * ALPHABET_LEN + letter as usize;
        }
        let mut total = 0.0;
        for &letter in &letters[self.n - 1..] {
            // keep the trailing n-1 letters, shift in the new one
            slot = (slot % window_modulus) * ALPHABET_LEN + letter as usize;
            total += self.table[slot];
        }
        total
    }
}
