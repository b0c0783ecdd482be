//! Result records for the property adapters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Thermodynamic and composition properties of one DNA sequence.
///
/// Field order and presence are fixed; records are created per call and
/// carry no identity beyond their contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaProp {
    /// The sequence the properties were computed for
    pub sequence: String,
    /// GC content as a percentage (0–100)
    pub gc: f64,
    /// Melting temperature in °C
    pub tm: f64,
    /// Minimum secondary-structure folding free energy, kcal/mol
    pub ss_dg: f64,
    /// Minimum self-hybridization free energy, kcal/mol
    pub self_hyb_dg: f64,
}

/// Physicochemical indices of one protein sequence.
///
/// `None` is distinct from zero: it means the underlying computation is
/// undefined for this composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtProp {
    /// The sequence the properties were computed for
    pub sequence: String,
    /// Grand average of hydropathy; `None` when the composition has
    /// residues outside the hydropathy scale
    pub gravy: Option<f64>,
    /// Fraction of aromatic residues (F, W, Y)
    pub aromaticity: f64,
    /// Isoelectric point
    pub isoelectric_point: f64,
    /// Instability index; `None` when undefined for this composition
    pub instability: Option<f64>,
    /// Count of each standard amino acid, keyed by one-letter code
    pub aa_counts: BTreeMap<char, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_prop_serde_round_trip() {
        let prop = DnaProp {
            sequence: "ACGT".to_string(),
            gc: 50.0,
            tm: 61.2,
            ss_dg: -0.4,
            self_hyb_dg: -6.1,
        };
        let json = serde_json::to_string(&prop).unwrap();
        let back: DnaProp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prop);
    }

    #[test]
    fn test_prot_prop_none_survives_serde() {
        let prop = ProtProp {
            sequence: "AXA".to_string(),
            gravy: None,
            aromaticity: 0.0,
            isoelectric_point: 6.0,
            instability: None,
            aa_counts: BTreeMap::new(),
        };
        let json = serde_json::to_string(&prop).unwrap();
        let back: ProtProp = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gravy, None);
        assert_eq!(back.instability, None);
    }
}
