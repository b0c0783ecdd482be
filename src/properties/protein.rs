//! Protein property adapter

use super::types::ProtProp;
use crate::error::{Error, Result};
use crate::protparam::ProteinAnalysis;

/// Keep the undefined-metric condition as `None`; propagate anything else.
fn undefined_as_none(value: Result<f64>) -> Result<Option<f64>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(Error::UnknownResidue(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Compute the [`ProtProp`] record for a protein sequence.
///
/// Amino acid counts, aromaticity, and isoelectric point always populate.
/// GRAVY and the instability index are undefined for compositions with
/// residues outside their scales; that exact condition becomes `None` in
/// the record instead of an error.
pub fn protein_properties<S: AsRef<str>>(seq: S) -> Result<ProtProp> {
    let text = seq.as_ref();
    let analysis = ProteinAnalysis::new(text);

    let aa_counts = analysis.count_amino_acids();
    let aromaticity = analysis.aromaticity();
    let isoelectric_point = analysis.isoelectric_point();
    let instability = undefined_as_none(analysis.instability_index())?;
    let gravy = undefined_as_none(analysis.gravy())?;

    Ok(ProtProp {
        sequence: text.to_string(),
        gravy,
        aromaticity,
        isoelectric_point,
        instability,
        aa_counts,
    })
}
