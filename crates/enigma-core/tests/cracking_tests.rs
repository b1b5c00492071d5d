mod common;

use common::{key, ENGLISH_SAMPLE};
use enigma_core::alphabet;
use enigma_core::config::SearchParams;
use enigma_core::cracking::{
    crack_plugboard, crack_positions, crack_rings, wheel_combinations, Decryptor, Phase,
    SearchObserver,
};
use enigma_core::fitness::{Fitness, IndexOfCoincidence, NgramModel};
use enigma_core::key::ScoredKey;
use enigma_core::machine::Enigma;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

fn sample_letters() -> Vec<u8> {
    alphabet::clean(ENGLISH_SAMPLE)
}

/// Enciphers the sample under `k` and returns the raw letters.
fn cipher_sample(k: &enigma_core::key::Key) -> Vec<u8> {
    let mut machine = Enigma::from_key(k);
    let mut out = Vec::new();
    machine.cipher_letters(&sample_letters(), &mut out);
    out
}

#[test]
fn sixty_wheel_orders_all_distinct() {
    let combos = wheel_combinations();
    assert_eq!(combos.len(), 60);
    for combo in &combos {
        assert_ne!(combo[0], combo[1]);
        assert_ne!(combo[1], combo[2]);
        assert_ne!(combo[0], combo[2]);
    }
}

#[test]
fn position_scan_recovers_a_zero_ring_key_exactly() {
    let true_key = key(["II", "V", "III"], [0, 0, 0], [3, 17, 9], &[]);
    let ciphertext = cipher_sample(&true_key);

    let found = crack_positions(true_key.wheels, &ciphertext, &IndexOfCoincidence, 5);
    assert_eq!(found.len(), 5);
    // best-first ordering
    for pair in found.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    let best = &found[0];
    assert_eq!(best.key.positions, [3, 17, 9]);
    assert_eq!(best.key.rings, [0, 0, 0]);
    assert!(best.score > 0.07, "true key scored {}", best.score);
    // nothing else in the candidate list comes close
    assert!(found[1].score < 0.05, "runner-up scored {}", found[1].score);
}

#[test]
fn ring_search_over_top_survivors_recovers_a_ringed_key() {
    let true_key = key(["I", "IV", "II"], [0, 5, 12], [4, 20, 9], &[]);
    let ciphertext = cipher_sample(&true_key);
    let ioc = IndexOfCoincidence;

    // the per-position scan alone lands near the key but not on it; the
    // coupled ring search over a handful of survivors finishes the job
    let survivors = crack_positions(true_key.wheels, &ciphertext, &ioc, 10);
    let best = survivors
        .iter()
        .map(|candidate| crack_rings(candidate, &ciphertext, &ioc))
        .max()
        .unwrap();

    assert_eq!(best.key.wheels, true_key.wheels);
    assert_eq!(best.key.rings, [0, 5, 12]);
    assert_eq!(best.key.positions, [4, 20, 9]);

    let mut machine = Enigma::from_key(&best.key);
    let mut decrypted = Vec::new();
    machine.cipher_letters(&ciphertext, &mut decrypted);
    assert_eq!(decrypted, sample_letters());
}

/// Counts positions agreeing with a known plaintext. Only a test aid:
/// it makes the greedy plugboard climb fully deterministic.
struct MatchCount {
    target: Vec<u8>,
}

impl Fitness for MatchCount {
    fn name(&self) -> &'static str {
        "match-count"
    }

    fn score(&self, letters: &[u8]) -> f64 {
        letters
            .iter()
            .zip(&self.target)
            .filter(|(a, b)| a == b)
            .count() as f64
    }
}

#[test]
fn greedy_plugboard_recovers_the_missing_pairs() {
    let plugged_key = key(["I", "II", "III"], [0, 0, 0], [5, 11, 2], &["AB", "CD"]);
    let ciphertext = cipher_sample(&plugged_key);

    // same key with an empty board: what phase 2 would hand over
    let bare_key = key(["I", "II", "III"], [0, 0, 0], [5, 11, 2], &[]);
    let fitness = MatchCount {
        target: sample_letters(),
    };
    let start = ScoredKey::new(bare_key, f64::NEG_INFINITY);

    let best = crack_plugboard(&start, &ciphertext, &fitness, 10);

    let mut recovered: Vec<String> = best.key.pairs.iter().map(ToString::to_string).collect();
    recovered.sort();
    assert_eq!(recovered, ["AB", "CD"]);
    assert_eq!(best.score, sample_letters().len() as f64);
}

#[test]
fn plugboard_search_with_no_budget_rescores_in_place() {
    let start_key = key(["I", "II", "III"], [0, 0, 0], [0, 0, 0], &["AB"]);
    let ciphertext = cipher_sample(&start_key);
    let fitness = MatchCount {
        target: sample_letters(),
    };

    let best = crack_plugboard(
        &ScoredKey::new(start_key.clone(), f64::NEG_INFINITY),
        &ciphertext,
        &fitness,
        0,
    );
    assert_eq!(best.key, start_key);
    // the key already matches the ciphertext's source perfectly
    assert_eq!(best.score, sample_letters().len() as f64);
}

#[test]
fn ring_search_preserves_wheels_and_pairs() {
    let start = key(["III", "I", "V"], [0, 0, 0], [7, 3, 22], &["MN"]);
    let ciphertext = cipher_sample(&start);
    let refined = crack_rings(
        &ScoredKey::new(start.clone(), f64::NEG_INFINITY),
        &ciphertext,
        &IndexOfCoincidence,
    );
    assert_eq!(refined.key.wheels, start.wheels);
    assert_eq!(refined.key.pairs, start.pairs);
}

struct StopImmediately {
    calls: AtomicUsize,
}

impl SearchObserver for StopImmediately {
    fn on_candidate(&self, _phase: Phase, _key: &ScoredKey) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        false
    }
}

#[test]
fn observer_can_stop_the_search_early() {
    // a short ciphertext keeps the abbreviated scan cheap
    let true_key = key(["IV", "II", "I"], [0, 0, 0], [1, 2, 3], &[]);
    let mut machine = Enigma::from_key(&true_key);
    let short: Vec<u8> = sample_letters().into_iter().take(40).collect();
    let mut ciphertext = Vec::new();
    machine.cipher_letters(&short, &mut ciphertext);

    let model = NgramModel::from_reader(2, Cursor::new("TH,-1.0\nHE,-1.2\n")).unwrap();
    let params = SearchParams {
        keep_top: 1,
        max_plug_pairs: 2,
        ngram: 2,
    };
    let decryptor = Decryptor::with_params(&alphabet::to_string(&ciphertext), model, params);

    let observer = StopImmediately {
        calls: AtomicUsize::new(0),
    };
    let best = decryptor.decrypt_observed(&observer);

    assert!(observer.calls.load(Ordering::Relaxed) >= 1);
    // cancelled or not, the driver hands back a usable scored key
    assert!(best.score.is_finite());
    assert_eq!(best.key.rings, [0, 0, 0]);
}

#[test]
fn decryptor_cleans_its_ciphertext() {
    let model = NgramModel::from_reader(2, Cursor::new("TH,-1.0\n")).unwrap();
    let decryptor = Decryptor::new("ab, CD! 12 ef", model);
    assert_eq!(decryptor.letter_count(), 6);
}
