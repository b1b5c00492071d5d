//! The three-phase key-recovery search: wheel order and starting
//! positions by Index of Coincidence, then ring settings, then a greedy
//! plugboard climb under an n-gram model.
//!
//! The scheme is Gillogly's ciphertext-only attack with Williams'
//! refinement of carrying the top-scoring phase-1 candidates forward
//! instead of a single winner.

mod plugboard;
mod positions;
mod rings;

pub use plugboard::crack_plugboard;
pub use positions::{crack_positions, wheel_combinations};
pub use rings::{crack_ring, crack_rings};

use crate::alphabet;
use crate::config::SearchParams;
use crate::error::CrackResult;
use crate::fitness::{Fitness, IndexOfCoincidence, NgramModel};
use crate::key::ScoredKey;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Which phase produced a reported candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Positions,
    Rings,
    Plugboard,
}

/// Receives each phase's accepted candidates as they appear. Returning
/// `false` stops the search between trials; the best key observed so
/// far is still returned.
pub trait SearchObserver: Send + Sync {
    fn on_candidate(&self, phase: Phase, key: &ScoredKey) -> bool;
}

struct Silent;

impl SearchObserver for Silent {
    fn on_candidate(&self, _phase: Phase, _key: &ScoredKey) -> bool {
        true
    }
}

/// Ciphertext-only key recovery. Owns the cleaned ciphertext and the
/// n-gram model scoring the plugboard phase.
pub struct Decryptor {
    ciphertext: Vec<u8>,
    ngram: NgramModel,
    params: SearchParams,
}

impl Decryptor {
    /// Cleans `ciphertext` (uppercase, A-Z only) immediately; everything
    /// else in the input is noise and is dropped without comment.
    pub fn new(ciphertext: &str, ngram: NgramModel) -> Self {
        Self::with_params(ciphertext, ngram, SearchParams::default())
    }

    pub fn with_params(ciphertext: &str, ngram: NgramModel, params: SearchParams) -> Self {
        Decryptor {
            ciphertext: alphabet::clean(ciphertext),
            ngram,
            params,
        }
    }

    /// Convenience constructor resolving the table file for
    /// `params.ngram` under `data_dir`. Missing or malformed tables are
    /// fatal here, before any searching starts.
    pub fn from_data_dir(
        ciphertext: &str,
        data_dir: &str,
        params: SearchParams,
    ) -> CrackResult<Self> {
        let ngram = NgramModel::load(params.ngram, data_dir)?;
        Ok(Self::with_params(ciphertext, ngram, params))
    }

    pub fn letter_count(&self) -> usize {
        self.ciphertext.len()
    }

    /// Runs the full search silently.
    pub fn decrypt(&self) -> ScoredKey {
        self.decrypt_observed(&Silent)
    }

    /// Runs the full search, reporting candidates through `observer`.
    ///
    /// Phase 1 fans out across the 60 wheel orders, each worker owning
    /// its machine and scratch buffer. The survivor list is fully
    /// sorted (score, then canonical key order) before the ring and
    /// plugboard phases so the result never depends on which worker
    /// finished first. Every returned score is on the n-gram scale.
    pub fn decrypt_observed(&self, observer: &dyn SearchObserver) -> ScoredKey {
        let ioc = IndexOfCoincidence;
        let stop = AtomicBool::new(false);

        info!(
            "phase 1: scanning 60 wheel orders x 17,576 positions over {} letters",
            self.ciphertext.len()
        );
        let mut survivors: Vec<ScoredKey> = wheel_combinations()
            .par_iter()
            .flat_map_iter(|&wheels| {
                if stop.load(Ordering::Relaxed) {
                    return Vec::new();
                }
                let found =
                    crack_positions(wheels, &self.ciphertext, &ioc, self.params.keep_top);
                if let Some(combo_best) = found.first() {
                    if !observer.on_candidate(Phase::Positions, combo_best) {
                        stop.store(true, Ordering::Relaxed);
                    }
                }
                found
            })
            .collect();

        survivors.sort_unstable_by(|a, b| b.cmp(a));
        survivors.truncate(self.params.keep_top.max(1));

        info!("phase 2+3: refining {} survivors", survivors.len());
        let ngram: &dyn Fitness = &self.ngram;
        let best = survivors
            .par_iter()
            .map(|candidate| {
                if stop.load(Ordering::Relaxed) {
                    return plugboard::rescore(candidate, &self.ciphertext, ngram);
                }

                let ringed = crack_rings(candidate, &self.ciphertext, &ioc);
                if !observer.on_candidate(Phase::Rings, &ringed) {
                    stop.store(true, Ordering::Relaxed);
                    return plugboard::rescore(&ringed, &self.ciphertext, ngram);
                }

                let plugged = crack_plugboard(
                    &ringed,
                    &self.ciphertext,
                    ngram,
                    self.params.max_plug_pairs,
                );
                if !observer.on_candidate(Phase::Plugboard, &plugged) {
                    stop.store(true, Ordering::Relaxed);
                }
                plugged
            })
            .max();

        best.expect("sixty wheel orders always yield at least one candidate")
    }
}
