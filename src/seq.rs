//! Sequence and alphabet types shared by the generators and adapters

use std::fmt;
use std::ops::Deref;

use bio::alphabets;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unambiguous DNA bases, in their fixed enumeration order
pub const DNA_LETTERS: [u8; 4] = *b"ACGT";

/// DNA bases plus inosine
pub const DNA_INOSINE_LETTERS: [u8; 5] = *b"ACGTI";

/// The 20 standard amino acids, alphabetical by one-letter code
pub const PROTEIN_LETTERS: [u8; 20] = *b"ACDEFGHIKLMNPQRSTVWY";

/// Case-insensitive membership validators, one per alphabet
static DNA_VALIDATOR: Lazy<alphabets::Alphabet> = Lazy::new(|| both_cases(&DNA_LETTERS));
static DNA_INOSINE_VALIDATOR: Lazy<alphabets::Alphabet> =
    Lazy::new(|| both_cases(&DNA_INOSINE_LETTERS));
static PROTEIN_VALIDATOR: Lazy<alphabets::Alphabet> = Lazy::new(|| both_cases(&PROTEIN_LETTERS));

/// Build a validator accepting `letters` in either case.
fn both_cases(letters: &[u8]) -> alphabets::Alphabet {
    let mut symbols = letters.to_vec();
    symbols.extend(letters.iter().map(|b| b.to_ascii_lowercase()));
    alphabets::Alphabet::new(&symbols)
}

/// The set of letters a sequence is allowed to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alphabet {
    /// Unambiguous DNA: A, C, G, T
    Dna,
    /// DNA extended with inosine: A, C, G, T, I
    DnaInosine,
    /// The 20 standard amino acids
    Protein,
}

impl Alphabet {
    /// Uppercase letters of this alphabet, in their fixed enumeration order.
    /// Variant generators iterate letters in exactly this order.
    pub fn letters(&self) -> &'static [u8] {
        match self {
            Self::Dna => &DNA_LETTERS,
            Self::DnaInosine => &DNA_INOSINE_LETTERS,
            Self::Protein => &PROTEIN_LETTERS,
        }
    }

    fn validator(&self) -> &'static alphabets::Alphabet {
        match self {
            Self::Dna => &DNA_VALIDATOR,
            Self::DnaInosine => &DNA_INOSINE_VALIDATOR,
            Self::Protein => &PROTEIN_VALIDATOR,
        }
    }

    /// Check whether `c` (either case) belongs to this alphabet
    pub fn allows(&self, c: u8) -> bool {
        self.validator().is_word([c])
    }
}

/// An immutable biological sequence together with its allowed alphabet.
///
/// Construction validates every character against the alphabet, so the text
/// is guaranteed ASCII and in-alphabet afterwards. Case is preserved as
/// given. `Seq` derefs to `str`, so any API taking `impl AsRef<str>` accepts
/// a `Seq` or a plain string interchangeably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seq {
    text: String,
    alphabet: Alphabet,
}

impl Seq {
    /// Create a sequence, validating `text` against `alphabet`.
    pub fn new(text: impl Into<String>, alphabet: Alphabet) -> Result<Self> {
        let text = text.into();
        if let Some(bad) = text.bytes().find(|&b| !alphabet.allows(b)) {
            return Err(Error::InvalidInput(format!(
                "character '{}' not allowed in {:?} sequence",
                bad as char, alphabet
            )));
        }
        Ok(Self { text, alphabet })
    }

    /// Create an unambiguous DNA sequence
    pub fn dna(text: impl Into<String>) -> Result<Self> {
        Self::new(text, Alphabet::Dna)
    }

    /// Create a protein sequence
    pub fn protein(text: impl Into<String>) -> Result<Self> {
        Self::new(text, Alphabet::Protein)
    }

    /// Internal constructor for text already known to be in-alphabet.
    pub(crate) fn new_unchecked(text: String, alphabet: Alphabet) -> Self {
        Self { text, alphabet }
    }

    /// The alphabet this sequence was constructed with
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Sequence length in bases/residues
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The sequence text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Contiguous subsequence `[start, end)`
    pub fn subseq(&self, start: usize, end: usize) -> &str {
        &self.text[start..end]
    }

    /// Copy of this sequence with every letter uppercased
    pub fn to_uppercase(&self) -> Seq {
        Seq {
            text: self.text.to_ascii_uppercase(),
            alphabet: self.alphabet,
        }
    }
}

impl Deref for Seq {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Seq {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_order() {
        assert_eq!(Alphabet::Dna.letters(), b"ACGT");
        assert_eq!(Alphabet::DnaInosine.letters(), b"ACGTI");
        assert_eq!(Alphabet::Protein.letters(), b"ACDEFGHIKLMNPQRSTVWY");
    }

    #[test]
    fn test_allows_both_cases() {
        assert!(Alphabet::Dna.allows(b'A'));
        assert!(Alphabet::Dna.allows(b'a'));
        assert!(!Alphabet::Dna.allows(b'I'));
        assert!(Alphabet::DnaInosine.allows(b'I'));
        assert!(Alphabet::Protein.allows(b'w'));
        assert!(!Alphabet::Protein.allows(b'B'));
    }

    #[test]
    fn test_dna_construction() {
        let seq = Seq::dna("ACGTacgt").unwrap();
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.as_str(), "ACGTacgt");
        assert_eq!(seq.alphabet(), Alphabet::Dna);
    }

    #[test]
    fn test_dna_rejects_invalid() {
        assert!(Seq::dna("ACGN").is_err());
        assert!(Seq::dna("AC-T").is_err());
        assert!(Seq::new("ACGI", Alphabet::DnaInosine).is_ok());
    }

    #[test]
    fn test_protein_rejects_invalid() {
        assert!(Seq::protein("ACDEFGHIKLMNPQRSTVWY").is_ok());
        assert!(Seq::protein("ACDX").is_err());
    }

    #[test]
    fn test_subseq_and_deref() {
        let seq = Seq::dna("ACGTACGT").unwrap();
        assert_eq!(seq.subseq(2, 5), "GTA");
        assert!(seq.starts_with("ACG"));
        assert_eq!(format!("{}", seq), "ACGTACGT");
    }

    #[test]
    fn test_to_uppercase() {
        let seq = Seq::dna("acGT").unwrap();
        assert_eq!(seq.to_uppercase().as_str(), "ACGT");
        assert_eq!(seq.to_uppercase().alphabet(), Alphabet::Dna);
    }
}
