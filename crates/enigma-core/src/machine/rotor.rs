use crate::alphabet::{decode_wiring, ALPHABET_LEN};
use crate::error::EnigmaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five wheel types issued with the M3. Each carries a fixed wiring
/// permutation and a single turnover notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wheel {
    I,
    II,
    III,
    IV,
    V,
}

impl Wheel {
    pub const ALL: [Wheel; 5] = [Wheel::I, Wheel::II, Wheel::III, Wheel::IV, Wheel::V];

    pub(crate) fn wiring(self) -> &'static str {
        match self {
            Wheel::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Wheel::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Wheel::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Wheel::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Wheel::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Window position at which stepping past carries the next rotor along.
    pub fn turnover(self) -> u8 {
        match self {
            Wheel::I => 16,   // Q
            Wheel::II => 4,   // E
            Wheel::III => 21, // V
            Wheel::IV => 9,   // J
            Wheel::V => 25,   // Z
        }
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wheel::I => "I",
            Wheel::II => "II",
            Wheel::III => "III",
            Wheel::IV => "IV",
            Wheel::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for Wheel {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => Ok(Wheel::I),
            "II" => Ok(Wheel::II),
            "III" => Ok(Wheel::III),
            "IV" => Ok(Wheel::IV),
            "V" => Ok(Wheel::V),
            other => Err(EnigmaError::UnknownWheel(other.to_string())),
        }
    }
}

/// One rotor in a slot: a wheel plus its ring setting, current position,
/// and the position `reset_position` returns to.
#[derive(Debug, Clone)]
pub struct Rotor {
    wheel: Wheel,
    ring: u8,
    position: u8,
    initial: u8,
    turnover: u8,
    wiring: [u8; ALPHABET_LEN],
    inverse_wiring: [u8; ALPHABET_LEN],
}

impl Rotor {
    /// Ring and position are window indices in `0..26`; anything else is
    /// a caller bug and panics.
    pub fn new(wheel: Wheel, ring: u8, position: u8) -> Self {
        let mut rotor = Rotor {
            wheel,
            ring: 0,
            position: 0,
            initial: 0,
            turnover: 0,
            wiring: [0; ALPHABET_LEN],
            inverse_wiring: [0; ALPHABET_LEN],
        };
        rotor.set_wheel(wheel);
        rotor.set_ring(ring);
        rotor.set_position(position);
        rotor
    }

    /// Swaps in another wheel's wiring and notch; ring and position are
    /// left as they are.
    pub fn set_wheel(&mut self, wheel: Wheel) {
        self.wheel = wheel;
        self.turnover = wheel.turnover();
        self.wiring = decode_wiring(wheel.wiring());
        for (i, &out) in self.wiring.iter().enumerate() {
            self.inverse_wiring[out as usize] = i as u8;
        }
    }

    pub fn set_ring(&mut self, ring: u8) {
        assert!(
            (ring as usize) < ALPHABET_LEN,
            "ring setting {ring} out of range 0..26"
        );
        self.ring = ring;
    }

    /// Also records `position` as the one `reset_position` restores.
    pub fn set_position(&mut self, position: u8) {
        assert!(
            (position as usize) < ALPHABET_LEN,
            "rotor position {position} out of range 0..26"
        );
        self.position = position;
        self.initial = position;
    }

    /// Back to the most recently set position; wiring untouched.
    pub fn reset_position(&mut self) {
        self.position = self.initial;
    }

    /// Advances one step.
    pub fn turn(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN as u8;
    }

    /// The notch comparison is against the displayed position; the ring
    /// setting does not shift the notch.
    pub fn at_turnover(&self) -> bool {
        self.position == self.turnover
    }

    /// Right-to-left pass through the wiring.
    #[inline]
    pub fn forward(&self, letter: u8) -> u8 {
        self.lookup(&self.wiring, letter)
    }

    /// Left-to-right pass, inverse wiring.
    #[inline]
    pub fn inverse(&self, letter: u8) -> u8 {
        self.lookup(&self.inverse_wiring, letter)
    }

    #[inline]
    fn lookup(&self, table: &[u8; ALPHABET_LEN], letter: u8) -> u8 {
        // position - ring can go negative; rem_euclid keeps every
        // residue in 0..26 where a plain % would not.
        let offset = self.position as i16 - self.ring as i16;
        let contact = (letter as i16 + offset).rem_euclid(26) as usize;
        (table[contact] as i16 - offset).rem_euclid(26) as u8
    }

    pub fn wheel(&self) -> Wheel {
        self.wheel
    }

    pub fn ring(&self) -> u8 {
        self.ring
    }

    pub fn position(&self) -> u8 {
        self.position
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotor(wheel={}, ring={}, position={})",
            self.wheel, self.ring, self.position
        )
    }
}
