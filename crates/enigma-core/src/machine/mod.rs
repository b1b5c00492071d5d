//! Bit-exact simulation of the three-rotor naval Enigma.

mod plugboard;
mod reflector;
mod rotor;

pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Rotor, Wheel};

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::CrackResult;
use crate::key::{Key, PlugPair};

/// Three rotors, a reflector, and a plugboard composed into a
/// reciprocal cipher. Rotor slot 0 is the leftmost (slowest), slot 2
/// the rightmost (fastest).
#[derive(Debug, Clone)]
pub struct Enigma {
    rotors: [Rotor; 3],
    reflector: Reflector,
    reflector_table: [u8; ALPHABET_LEN],
    plugboard: Plugboard,
}

impl Enigma {
    /// Validates the whole configuration; rings and positions must sit
    /// in `0..26` and no letter may appear in two plug pairs.
    pub fn new(
        wheels: [Wheel; 3],
        rings: [u8; 3],
        positions: [u8; 3],
        reflector: Reflector,
        pairs: Vec<PlugPair>,
    ) -> CrackResult<Self> {
        let key = Key::new(wheels, rings, positions, pairs)?;
        let mut machine = Enigma::from_key(&key);
        machine.set_reflector(reflector);
        Ok(machine)
    }

    /// Machine matching `key`, reflector B. Keys constructed through
    /// [`Key::new`] are always in range.
    pub fn from_key(key: &Key) -> Self {
        let rotors = [
            Rotor::new(key.wheels[0], key.rings[0], key.positions[0]),
            Rotor::new(key.wheels[1], key.rings[1], key.positions[1]),
            Rotor::new(key.wheels[2], key.rings[2], key.positions[2]),
        ];
        let mut machine = Enigma {
            rotors,
            reflector: Reflector::B,
            reflector_table: Reflector::B.table(),
            plugboard: Plugboard::empty(),
        };
        machine.plugboard.set_pairs(&key.pairs);
        machine
    }

    pub fn set_reflector(&mut self, reflector: Reflector) {
        self.reflector = reflector;
        self.reflector_table = reflector.table();
    }

    /// Swaps the wheel set without touching rings or positions.
    pub fn set_wheels(&mut self, wheels: [Wheel; 3]) {
        for (rotor, wheel) in self.rotors.iter_mut().zip(wheels) {
            rotor.set_wheel(wheel);
        }
    }

    /// Ring changes leave positions alone.
    pub fn set_rings(&mut self, rings: [u8; 3]) {
        for (rotor, ring) in self.rotors.iter_mut().zip(rings) {
            rotor.set_ring(ring);
        }
    }

    /// Sets the current positions and the ones `reset_positions`
    /// restores.
    pub fn set_positions(&mut self, positions: [u8; 3]) {
        for (rotor, position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
    }

    /// Rewinds every rotor to its most recently set position.
    pub fn reset_positions(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset_position();
        }
    }

    /// Clears the board and installs `pairs`. Rotor state is untouched.
    pub fn set_plugboard(&mut self, pairs: &[PlugPair]) {
        self.plugboard.set_pairs(pairs);
    }

    /// Installs one cable on top of whatever is already plugged.
    pub fn add_plug(&mut self, pair: PlugPair) {
        self.plugboard.add(pair);
    }

    /// Rotor advancement for one keystroke, decided entirely on the
    /// positions as they stand at entry. A middle rotor sitting on its
    /// own notch carries the left rotor and itself (the double-step);
    /// it advances at most once per keystroke either way.
    fn step(&mut self) {
        if self.rotors[1].at_turnover() {
            self.rotors[0].turn();
            self.rotors[1].turn();
        } else if self.rotors[2].at_turnover() {
            self.rotors[1].turn();
        }
        self.rotors[2].turn();
    }

    /// Enciphers one letter index, stepping the rotors first.
    #[inline]
    pub fn cipher_letter(&mut self, letter: u8) -> u8 {
        self.step();
        let mut c = self.plugboard.swap(letter);
        c = self.rotors[2].forward(c);
        c = self.rotors[1].forward(c);
        c = self.rotors[0].forward(c);
        c = self.reflector_table[c as usize];
        c = self.rotors[0].inverse(c);
        c = self.rotors[1].inverse(c);
        c = self.rotors[2].inverse(c);
        self.plugboard.swap(c)
    }

    /// Enciphers a letter slice into `out` (cleared first). The search
    /// phases drive this with a reused buffer.
    pub fn cipher_letters(&mut self, letters: &[u8], out: &mut Vec<u8>) {
        out.clear();
        out.reserve(letters.len());
        for &letter in letters {
            out.push(self.cipher_letter(letter));
        }
    }

    /// Boundary form: uppercases, drops everything outside A-Z, and
    /// enciphers the rest. The same configuration applied to its own
    /// output (positions reset in between) restores the input letters.
    pub fn encrypt(&mut self, text: &str) -> String {
        let letters = alphabet::clean(text);
        let mut out = Vec::with_capacity(letters.len());
        self.cipher_letters(&letters, &mut out);
        alphabet::to_string(&out)
    }

    /// Immutable snapshot of the current configuration. Keys imply
    /// reflector B; the reflector choice is not recorded.
    pub fn key(&self) -> Key {
        Key {
            wheels: self.wheels(),
            rings: self.rings(),
            positions: self.positions(),
            pairs: self.plugboard.pairs().to_vec(),
        }
    }

    pub fn wheels(&self) -> [Wheel; 3] {
        [
            self.rotors[0].wheel(),
            self.rotors[1].wheel(),
            self.rotors[2].wheel(),
        ]
    }

    pub fn rings(&self) -> [u8; 3] {
        [
            self.rotors[0].ring(),
            self.rotors[1].ring(),
            self.rotors[2].ring(),
        ]
    }

    pub fn positions(&self) -> [u8; 3] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }

    pub fn reflector(&self) -> Reflector {
        self.reflector
    }

    pub fn plug_pairs(&self) -> &[PlugPair] {
        self.plugboard.pairs()
    }
}

impl Default for Enigma {
    /// Wheels I, II, III, rings and positions all zero, reflector B,
    /// empty plugboard.
    fn default() -> Self {
        Enigma::from_key(&Key::default())
    }
}
