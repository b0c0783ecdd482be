//! Lazy, restartable sequence generators

mod mutations;
mod oligos;
mod random;

pub use mutations::{inosine_variants, point_mutations, InosineVariants, PointMutations};
pub use oligos::{oligo_windows, OligoWindows};
pub use random::{random_dna_seq, random_dna_seq_with};
