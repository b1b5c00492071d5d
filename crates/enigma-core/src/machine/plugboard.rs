use crate::alphabet::ALPHABET_LEN;
use crate::key::PlugPair;

/// The Steckerbrett: an involutive partial permutation over the 26
/// letters. Unplugged letters map to themselves.
#[derive(Debug, Clone)]
pub struct Plugboard {
    map: [u8; ALPHABET_LEN],
    pairs: Vec<PlugPair>,
}

impl Plugboard {
    pub fn empty() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard {
            map,
            pairs: Vec::new(),
        }
    }

    /// Clears the board, then installs each pair in order.
    pub fn set_pairs(&mut self, pairs: &[PlugPair]) {
        self.clear();
        for &pair in pairs {
            self.add(pair);
        }
    }

    /// Installs one cable. A letter can sit in at most one pair; wiring
    /// an already-plugged letter is a caller bug and panics.
    pub fn add(&mut self, pair: PlugPair) {
        let (a, b) = (pair.first() as usize, pair.second() as usize);
        assert!(
            self.map[a] == a as u8 && self.map[b] == b as u8,
            "plug pair {pair} conflicts with an installed pair"
        );
        self.map[a] = b as u8;
        self.map[b] = a as u8;
        self.pairs.push(pair);
    }

    pub fn clear(&mut self) {
        for (i, slot) in self.map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        self.pairs.clear();
    }

    #[inline]
    pub fn swap(&self, letter: u8) -> u8 {
        self.map[letter as usize]
    }

    /// Installed cables, in installation order.
    pub fn pairs(&self) -> &[PlugPair] {
        &self.pairs
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard::empty()
    }
}
