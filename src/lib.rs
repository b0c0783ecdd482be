//! Oligokit - Sequence Generators and Property Adapters
//!
//! Building blocks for oligo and probe design pipelines: exhaustive window
//! and variant generators over DNA sequences, and batch adapters that
//! collect thermodynamic and protein physicochemical properties into
//! fixed-shape records.

pub mod error;
pub mod generate;
pub mod properties;
pub mod protparam;
pub mod seq;
pub mod thermo;

pub use error::{Error, Result};
pub use generate::*;
pub use properties::*;
pub use protparam::ProteinAnalysis;
pub use seq::{Alphabet, Seq};
pub use thermo::{ThermoBackend, UnaFold, UnaFoldConfig};
