use crate::fitness::Fitness;
use crate::key::{Key, ScoredKey};
use crate::machine::{Enigma, Wheel};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// All ordered triples of distinct wheels: 5 x 4 x 3 = 60.
pub fn wheel_combinations() -> Vec<[Wheel; 3]> {
    let mut combinations = Vec::with_capacity(60);
    for &w0 in &Wheel::ALL {
        for &w1 in &Wheel::ALL {
            if w1 == w0 {
                continue;
            }
            for &w2 in &Wheel::ALL {
                if w2 == w0 || w2 == w1 {
                    continue;
                }
                combinations.push([w0, w1, w2]);
            }
        }
    }
    combinations
}

/// Phase 1 for one wheel order: every one of the 26^3 starting
/// positions with zero rings and an empty plugboard, each decryption
/// scored by `fitness`. Returns the best `keep` keys, best first.
pub fn crack_positions(
    wheels: [Wheel; 3],
    ciphertext: &[u8],
    fitness: &dyn Fitness,
    keep: usize,
) -> Vec<ScoredKey> {
    let keep = keep.max(1);
    let mut machine = Enigma::default();
    machine.set_wheels(wheels);

    // min-heap holding the best `keep` candidates seen so far
    let mut best: BinaryHeap<Reverse<ScoredKey>> = BinaryHeap::with_capacity(keep + 1);
    let mut attempt = Vec::with_capacity(ciphertext.len());

    for p0 in 0..26u8 {
        for p1 in 0..26u8 {
            for p2 in 0..26u8 {
                machine.set_positions([p0, p1, p2]);
                machine.cipher_letters(ciphertext, &mut attempt);
                let score = fitness.score(&attempt);

                if best.len() < keep {
                    best.push(Reverse(ScoredKey::new(
                        position_key(wheels, [p0, p1, p2]),
                        score,
                    )));
                } else if best.peek().map_or(false, |entry| score > entry.0.score) {
                    best.pop();
                    best.push(Reverse(ScoredKey::new(
                        position_key(wheels, [p0, p1, p2]),
                        score,
                    )));
                }
            }
        }
    }

    let mut found: Vec<ScoredKey> = best.into_iter().map(|entry| entry.0).collect();
    found.sort_unstable_by(|a, b| b.cmp(a));
    found
}

fn position_key(wheels: [Wheel; 3], positions: [u8; 3]) -> Key {
    Key {
        wheels,
        rings: [0; 3],
        positions,
        pairs: Vec::new(),
    }
}
