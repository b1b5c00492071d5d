#![allow(dead_code)]

use enigma_core::key::{Key, PlugPair};
use enigma_core::machine::{Enigma, Wheel};

/// Ordinary English prose for synthetic recovery scenarios; 487 letters
/// once cleaned, IoC ~0.072.
pub const ENGLISH_SAMPLE: &str = concat!(
    "The wireless operators on the northern station copied every signal ",
    "that drifted across the grey water and passed the sheets to the duty ",
    "officer before dawn. Most of the traffic was routine weather reports ",
    "and harbour chatter, yet the analysts read each line twice, because a ",
    "single careless phrase could betray the movement of an entire fleet. ",
    "Patience, coffee, and a long memory for call signs mattered far more ",
    "in that room than any stroke of genius. When the bells rang at the ",
    "end of the watch the baskets were already full, and the morning shift ",
    "began the same slow work again without complaint."
);

pub fn wheels(names: [&str; 3]) -> [Wheel; 3] {
    [
        names[0].parse().unwrap(),
        names[1].parse().unwrap(),
        names[2].parse().unwrap(),
    ]
}

pub fn pairs(list: &[&str]) -> Vec<PlugPair> {
    list.iter().map(|p| p.parse().unwrap()).collect()
}

pub fn key(
    wheel_names: [&str; 3],
    rings: [u8; 3],
    positions: [u8; 3],
    plug_list: &[&str],
) -> Key {
    Key::new(wheels(wheel_names), rings, positions, pairs(plug_list)).unwrap()
}

/// Encrypts on a machine built fresh from `key`, so rotors start at the
/// key's positions.
pub fn encrypt_with(key: &Key, text: &str) -> String {
    Enigma::from_key(key).encrypt(text)
}
