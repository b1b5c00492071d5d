use crate::fitness::Fitness;
use crate::key::{Key, ScoredKey};
use crate::machine::Enigma;

/// Phase 2: coupled ring searches on the rightmost rotor, then the
/// middle rotor — the two fast movers. The leftmost rotor is left
/// alone: only `position - ring` matters for it, and phase 1 already
/// fixed that difference.
pub fn crack_rings(key: &ScoredKey, ciphertext: &[u8], fitness: &dyn Fitness) -> ScoredKey {
    let fast = crack_ring(key, ciphertext, 2, fitness);
    crack_ring(&fast, ciphertext, 1, fitness)
}

/// Tries all 26 ring settings for one rotor slot. Ring and starting
/// position advance together: the rotor keeps its phase against the
/// message while its wiring offset slides, so each of the 26 trials is
/// a distinct cipher.
pub fn crack_ring(
    key: &ScoredKey,
    ciphertext: &[u8],
    rotor: usize,
    fitness: &dyn Fitness,
) -> ScoredKey {
    let mut machine = Enigma::from_key(&key.key);
    let mut rings = key.key.rings;
    let mut positions = key.key.positions;

    let mut best = key.clone();
    let mut bound = f64::NEG_INFINITY;
    let mut attempt = Vec::with_capacity(ciphertext.len());

    for _ in 0..26 {
        machine.set_rings(rings);
        machine.set_positions(positions);
        machine.cipher_letters(ciphertext, &mut attempt);
        let score = fitness.score(&attempt);

        if score > bound {
            bound = score;
            best = ScoredKey::new(
                Key {
                    wheels: key.key.wheels,
                    rings,
                    positions,
                    pairs: key.key.pairs.clone(),
                },
                score,
            );
        }

        rings[rotor] = (rings[rotor] + 1) % 26;
        positions[rotor] = (positions[rotor] + 1) % 26;
    }

    best
}
