//! Protein physicochemical analysis
//!
//! A small ProtParam-style facility computed from a plain sequence string:
//!
//! - **Amino acid counts** — per-residue tally over the standard 20
//! - **Aromaticity** — fraction of F/W/Y residues
//! - **Isoelectric point** — pI via Henderson-Hasselbalch bisection
//! - **GRAVY** — grand average of hydropathicity (Kyte-Doolittle)
//! - **Instability index** — dipeptide-weight stability estimate
//!
//! GRAVY and the instability index are only defined for sequences made of
//! the standard 20 amino acids; they report [`Error::UnknownResidue`] for
//! anything else. The other metrics tolerate non-standard characters.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::seq::PROTEIN_LETTERS;

// ── Amino acid indexing ─────────────────────────────────────────

/// Map an uppercase amino acid byte to an index 0–19. None for
/// non-standard residues.
fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

// ── Scales ──────────────────────────────────────────────────────

/// Kyte-Doolittle (1982) hydropathy values, indexed by `aa_index`.
const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Dipeptide instability weights collapsed to the leading residue,
/// indexed by `aa_index`. Simplified from the published dipeptide
/// instability statistics (Guruprasad 1990); scaled so the conventional
/// stability threshold stays at 40.
const INSTABILITY_WEIGHTS: [f64; 20] = [
    1.0, // A
    1.2, // C
    3.0, // D
    3.3, // E
    1.5, // F
    0.6, // G
    2.4, // H
    1.4, // I
    2.2, // K
    1.6, // L
    2.5, // M
    2.8, // N
    5.5, // P
    4.0, // Q
    2.9, // R
    3.7, // S
    3.2, // T
    1.2, // V
    2.6, // W
    2.0, // Y
];

// ── pKa values (EMBOSS) ────────────────────────────────────────

const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_D: f64 = 3.65;
const PKA_E: f64 = 4.25;
const PKA_C: f64 = 8.18;
const PKA_Y: f64 = 10.07;
const PKA_H: f64 = 6.00;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;

// ── Analysis facility ───────────────────────────────────────────

/// Property analysis over one protein sequence.
///
/// The sequence is uppercased on construction and never validated as a
/// whole: characters outside the standard 20 amino acids are tolerated
/// here and surface only from the scale lookups that have no entry for
/// them.
#[derive(Debug, Clone)]
pub struct ProteinAnalysis {
    sequence: Vec<u8>,
}

impl ProteinAnalysis {
    pub fn new(seq: &str) -> Self {
        Self {
            sequence: seq.bytes().map(|b| b.to_ascii_uppercase()).collect(),
        }
    }

    /// Count of each standard amino acid, keyed by one-letter code.
    /// Every standard code is present, zero-filled; non-standard
    /// characters are ignored.
    pub fn count_amino_acids(&self) -> BTreeMap<char, usize> {
        let mut counts: BTreeMap<char, usize> =
            PROTEIN_LETTERS.iter().map(|&b| (b as char, 0)).collect();
        for &aa in &self.sequence {
            if aa_index(aa).is_some() {
                *counts.entry(aa as char).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Fraction of aromatic residues (F, W, Y) relative to total length.
    pub fn aromaticity(&self) -> f64 {
        let aromatic = self
            .sequence
            .iter()
            .filter(|&&aa| matches!(aa, b'F' | b'W' | b'Y'))
            .count();
        aromatic as f64 / self.sequence.len() as f64
    }

    /// Isoelectric point via bisection on the Henderson-Hasselbalch net
    /// charge, with EMBOSS pKa values. Converges to |charge| < 0.001.
    pub fn isoelectric_point(&self) -> f64 {
        let mut lo = 0.0_f64;
        let mut hi = 14.0_f64;

        for _ in 0..100 {
            let mid = (lo + hi) / 2.0;
            let charge = self.net_charge(mid);
            if charge.abs() < 0.001 {
                return mid;
            }
            if charge > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    /// Net charge at a given pH. Non-standard residues contribute nothing.
    fn net_charge(&self, ph: f64) -> f64 {
        let mut charge = 0.0;

        // Termini
        charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_NTERM));
        charge -= 1.0 / (1.0 + 10_f64.powf(PKA_CTERM - ph));

        for &aa in &self.sequence {
            match aa {
                b'D' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_D - ph)),
                b'E' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_E - ph)),
                b'C' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_C - ph)),
                b'Y' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_Y - ph)),
                b'H' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_H)),
                b'K' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_K)),
                b'R' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_R)),
                _ => {}
            }
        }
        charge
    }

    /// Grand average of hydropathicity: mean Kyte-Doolittle value over the
    /// whole sequence. Positive means overall hydrophobic.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownResidue`] for any character outside the scale.
    pub fn gravy(&self) -> Result<f64> {
        let mut sum = 0.0;
        for &aa in &self.sequence {
            let idx = aa_index(aa).ok_or(Error::UnknownResidue(aa as char))?;
            sum += KYTE_DOOLITTLE[idx];
        }
        Ok(sum / self.sequence.len() as f64)
    }

    /// Instability index: `10/L` times the summed dipeptide weights over
    /// consecutive residue pairs. Values above 40 predict an unstable
    /// protein.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownResidue`] when either residue of a pair is
    /// non-standard.
    pub fn instability_index(&self) -> Result<f64> {
        let mut total = 0.0;
        for pair in self.sequence.windows(2) {
            let lead = aa_index(pair[0]).ok_or(Error::UnknownResidue(pair[0] as char))?;
            aa_index(pair[1]).ok_or(Error::UnknownResidue(pair[1] as char))?;
            total += INSTABILITY_WEIGHTS[lead];
        }
        Ok(10.0 / self.sequence.len() as f64 * total)
    }
}
