//! Single-position sequence variants: point mutations and inosine
//! substitutions

use crate::seq::Seq;

/// Iterator over all single-base substitutions of a sequence.
/// Created by [`point_mutations`].
#[derive(Debug, Clone)]
pub struct PointMutations<'a> {
    seq: &'a Seq,
    letters: &'static [u8],
    pos: usize,
    letter_idx: usize,
}

/// Generate every single-position substitution of `seq` drawn from its
/// alphabet.
///
/// Positions are enumerated left to right; for each position, one variant
/// is produced per alphabet letter that differs from the uppercased
/// original base, in [`Alphabet::letters`](crate::seq::Alphabet::letters)
/// order. The substituted letter is always uppercase; the case of every
/// other base is preserved. For a fully in-alphabet sequence this yields
/// `len * (k - 1)` variants.
pub fn point_mutations(seq: &Seq) -> PointMutations<'_> {
    PointMutations {
        seq,
        letters: seq.alphabet().letters(),
        pos: 0,
        letter_idx: 0,
    }
}

impl Iterator for PointMutations<'_> {
    type Item = Seq;

    fn next(&mut self) -> Option<Seq> {
        let bytes = self.seq.as_bytes();

        while self.pos < bytes.len() {
            if self.letter_idx >= self.letters.len() {
                self.pos += 1;
                self.letter_idx = 0;
                continue;
            }
            let letter = self.letters[self.letter_idx];
            self.letter_idx += 1;

            if letter != bytes[self.pos].to_ascii_uppercase() {
                return Some(substitute(self.seq, self.pos, letter));
            }
        }
        None
    }
}

/// Rebuild `seq` with the byte at `pos` replaced by `letter`.
fn substitute(seq: &Seq, pos: usize, letter: u8) -> Seq {
    let text = seq.as_str();
    let mut variant = String::with_capacity(text.len());
    variant.push_str(&text[..pos]);
    variant.push(letter as char);
    variant.push_str(&text[pos + 1..]);
    Seq::new_unchecked(variant, seq.alphabet())
}

/// Iterator over single inosine substitutions.
/// Created by [`inosine_variants`].
#[derive(Debug, Clone)]
pub struct InosineVariants<'a> {
    seq: &'a str,
    pos: usize,
}

/// Generate every single inosine substitution of `seq`.
///
/// Each position whose uppercased character is G, A, or T produces one
/// variant with a literal `I` at that position, left to right. C positions
/// produce no variant. No alphabet validation is performed.
pub fn inosine_variants(seq: &str) -> InosineVariants<'_> {
    InosineVariants { seq, pos: 0 }
}

impl Iterator for InosineVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let bytes = self.seq.as_bytes();

        while self.pos < bytes.len() {
            let pos = self.pos;
            self.pos += 1;

            if matches!(bytes[pos].to_ascii_uppercase(), b'G' | b'A' | b'T') {
                let mut variant = String::with_capacity(self.seq.len());
                variant.push_str(&self.seq[..pos]);
                variant.push('I');
                variant.push_str(&self.seq[pos + 1..]);
                return Some(variant);
            }
        }
        None
    }
}
