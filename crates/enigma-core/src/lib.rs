//! Ciphertext-only cryptanalysis of the three-rotor naval Enigma (M3).
//!
//! The [`machine`] module is a bit-exact simulator; [`cracking`] recovers a
//! key from nothing but the encrypted letters, following Gillogly's
//! hill-climbing scheme with Williams' top-N refinement.

pub mod alphabet;
pub mod config;
pub mod cracking;
pub mod error;
pub mod fitness;
pub mod key;
pub mod machine;
