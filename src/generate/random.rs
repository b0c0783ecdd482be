//! Random DNA sequence generation

use rand::Rng;

use crate::seq::{Alphabet, Seq, DNA_LETTERS};

/// Generate a uniformly random unambiguous DNA sequence of `length` bases,
/// drawing from the given random source.
///
/// Passing the source explicitly keeps generation reproducible: seed an rng
/// and every call is deterministic.
pub fn random_dna_seq_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Seq {
    let text: String = (0..length)
        .map(|_| DNA_LETTERS[rng.gen_range(0..DNA_LETTERS.len())] as char)
        .collect();
    Seq::new_unchecked(text, Alphabet::Dna)
}

/// Generate a uniformly random unambiguous DNA sequence of `length` bases
/// from the thread-local random source.
pub fn random_dna_seq(length: usize) -> Seq {
    random_dna_seq_with(&mut rand::thread_rng(), length)
}
