use crate::alphabet::ALPHABET_LEN;
use crate::fitness::Fitness;
use crate::key::{Key, PlugPair, ScoredKey};
use crate::machine::Enigma;

/// Scores `key`'s decryption under `fitness` without changing the key.
/// Puts unrefined keys on the same scale as phase-3 results.
pub(crate) fn rescore(key: &ScoredKey, ciphertext: &[u8], fitness: &dyn Fitness) -> ScoredKey {
    let mut machine = Enigma::from_key(&key.key);
    let mut attempt = Vec::with_capacity(ciphertext.len());
    machine.cipher_letters(ciphertext, &mut attempt);
    ScoredKey::new(key.key.clone(), fitness.score(&attempt))
}

/// Phase 3: greedy plugboard growth. Each round tries every pair of
/// still-unplugged letters on top of the committed list and commits the
/// round's best pair only on strict improvement. The board is rebuilt
/// from the full list for every trial and the rotors rewound to the
/// key's starting positions, so no trial sees a neighbour's state.
pub fn crack_plugboard(
    key: &ScoredKey,
    ciphertext: &[u8],
    fitness: &dyn Fitness,
    max_pairs: usize,
) -> ScoredKey {
    let mut machine = Enigma::from_key(&key.key);
    let mut pairs = key.key.pairs.clone();
    let mut attempt = Vec::with_capacity(ciphertext.len());

    machine.cipher_letters(ciphertext, &mut attempt);
    let mut incumbent = fitness.score(&attempt);
    let mut best = ScoredKey::new(key.key.clone(), incumbent);

    for _ in 0..max_pairs {
        let mut plugged = [false; ALPHABET_LEN];
        for pair in &pairs {
            plugged[pair.first() as usize] = true;
            plugged[pair.second() as usize] = true;
        }

        let mut round_best: Option<(PlugPair, f64)> = None;

        for a in 0..ALPHABET_LEN as u8 {
            if plugged[a as usize] {
                continue;
            }
            for b in (a + 1)..ALPHABET_LEN as u8 {
                if plugged[b as usize] {
                    continue;
                }

                let candidate = PlugPair::new(a, b);
                pairs.push(candidate);
                machine.set_plugboard(&pairs);
                machine.set_positions(key.key.positions);
                machine.cipher_letters(ciphertext, &mut attempt);
                let score = fitness.score(&attempt);
                pairs.pop();

                let improves = match round_best {
                    Some((_, leader)) => score > leader,
                    None => score > incumbent,
                };
                if improves {
                    round_best = Some((candidate, score));
                }
            }
        }

        match round_best {
            Some((pair, score)) => {
                pairs.push(pair);
                incumbent = score;
                best = ScoredKey::new(
                    Key {
                        wheels: key.key.wheels,
                        rings: key.key.rings,
                        positions: key.key.positions,
                        pairs: pairs.clone(),
                    },
                    score,
                );
            }
            None => break,
        }
    }

    best
}
