//! Thermodynamic property backends
//!
//! Melting temperature and hybridization energies come from external
//! command-line tools. [`ThermoBackend`] is the seam between the property
//! adapters and those tools: one batch call per property, order-preserving,
//! one result per input. Calls are synchronous and blocking, with no
//! retries and no timeouts.

mod unafold;

pub use unafold::{UnaFold, UnaFoldConfig};

use crate::error::Result;

/// Batch thermodynamics provider for DNA sequences.
pub trait ThermoBackend {
    /// Melting temperature in °C for each sequence, in input order.
    fn melting_temp(&self, seqs: &[String]) -> Result<Vec<f64>>;

    /// Minimum single-strand folding free energy (kcal/mol) for each
    /// sequence, in input order.
    fn hybrid_ss_min(&self, seqs: &[String]) -> Result<Vec<f64>>;

    /// Minimum hybridization energies for each `(seqs_a[i], seqs_b[i])`
    /// pair, in input order. Each row holds the energy columns the backend
    /// produced; the first column is the duplex free energy in kcal/mol.
    fn hybrid_min(&self, seqs_a: &[String], seqs_b: &[String]) -> Result<Vec<Vec<f64>>>;
}
