//! DNA property adapter: GC content computed locally, thermodynamics via
//! one backend call per batch

use bio::seq_analysis::gc::gc_content;

use super::types::DnaProp;
use crate::error::{Error, Result};
use crate::thermo::ThermoBackend;

/// Check one tool's batch output length against the input length.
fn check_batch(tool: &str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::BatchMismatch {
            tool: tool.to_string(),
            expected,
            got,
        });
    }
    Ok(())
}

/// Compute [`DnaProp`] records for a batch of DNA sequences.
///
/// GC percentage is computed locally; melting temperature, folding free
/// energy, and self-hybridization free energy each take exactly one
/// backend call for the whole batch. Self-hybridization runs every
/// sequence against itself and keeps only the leading energy of each
/// result row. Records come back in input order, one per sequence.
///
/// # Errors
///
/// Backend failures propagate unchanged. A backend returning a result
/// count different from the input count is [`Error::BatchMismatch`];
/// results are never silently truncated.
pub fn dna_properties_batch<B, S>(backend: &B, seqs: &[S]) -> Result<Vec<DnaProp>>
where
    B: ThermoBackend + ?Sized,
    S: AsRef<str>,
{
    let texts: Vec<String> = seqs.iter().map(|s| s.as_ref().to_string()).collect();

    let gcs: Vec<f64> = texts
        .iter()
        .map(|s| f64::from(gc_content(s.as_bytes())) * 100.0)
        .collect();

    let tms = backend.melting_temp(&texts)?;
    check_batch("melting_temp", texts.len(), tms.len())?;

    let ss_dgs = backend.hybrid_ss_min(&texts)?;
    check_batch("hybrid_ss_min", texts.len(), ss_dgs.len())?;

    // Every sequence against itself; only the diagonal result matters.
    let hyb_rows = backend.hybrid_min(&texts, &texts)?;
    check_batch("hybrid_min", texts.len(), hyb_rows.len())?;

    let mut props = Vec::with_capacity(texts.len());
    for (i, sequence) in texts.into_iter().enumerate() {
        let self_hyb_dg = hyb_rows[i]
            .first()
            .copied()
            .ok_or_else(|| Error::ToolOutput {
                tool: "hybrid_min".to_string(),
                line: "(empty result row)".to_string(),
            })?;
        props.push(DnaProp {
            sequence,
            gc: gcs[i],
            tm: tms[i],
            ss_dg: ss_dgs[i],
            self_hyb_dg,
        });
    }
    Ok(props)
}

/// Compute the [`DnaProp`] record for a single DNA sequence.
///
/// Thin wrapper over [`dna_properties_batch`] with a one-element batch;
/// there is no separate single-sequence code path.
pub fn dna_properties<B, S>(backend: &B, seq: S) -> Result<DnaProp>
where
    B: ThermoBackend + ?Sized,
    S: AsRef<str>,
{
    let mut props = dna_properties_batch(backend, std::slice::from_ref(&seq))?;
    Ok(props.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Seq;
    use std::cell::RefCell;

    /// Deterministic backend that records every call.
    struct MockThermo {
        calls: RefCell<Vec<String>>,
    }

    impl MockThermo {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ThermoBackend for MockThermo {
        fn melting_temp(&self, seqs: &[String]) -> Result<Vec<f64>> {
            self.calls.borrow_mut().push("melting_temp".to_string());
            Ok(seqs.iter().map(|s| 50.0 + s.len() as f64).collect())
        }

        fn hybrid_ss_min(&self, seqs: &[String]) -> Result<Vec<f64>> {
            self.calls.borrow_mut().push("hybrid_ss_min".to_string());
            Ok(seqs.iter().map(|_| -1.25).collect())
        }

        fn hybrid_min(&self, seqs_a: &[String], seqs_b: &[String]) -> Result<Vec<Vec<f64>>> {
            self.calls.borrow_mut().push("hybrid_min".to_string());
            assert_eq!(seqs_a.len(), seqs_b.len());
            Ok(seqs_a
                .iter()
                .map(|s| vec![-(s.len() as f64), -40.0, -0.1])
                .collect())
        }
    }

    /// Backend that drops the last melting temperature result.
    struct ShortThermo;

    impl ThermoBackend for ShortThermo {
        fn melting_temp(&self, seqs: &[String]) -> Result<Vec<f64>> {
            Ok(vec![60.0; seqs.len().saturating_sub(1)])
        }

        fn hybrid_ss_min(&self, seqs: &[String]) -> Result<Vec<f64>> {
            Ok(vec![-1.0; seqs.len()])
        }

        fn hybrid_min(&self, seqs_a: &[String], _seqs_b: &[String]) -> Result<Vec<Vec<f64>>> {
            Ok(vec![vec![-5.0]; seqs_a.len()])
        }
    }

    #[test]
    fn test_batch_order_and_fields() {
        let backend = MockThermo::new();
        let props = dna_properties_batch(&backend, &["ACGC", "AT"]).unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props[0].sequence, "ACGC");
        assert!((props[0].gc - 75.0).abs() < 1e-6);
        assert_eq!(props[0].tm, 54.0);
        assert_eq!(props[0].ss_dg, -1.25);
        assert_eq!(props[0].self_hyb_dg, -4.0); // first row column only

        assert_eq!(props[1].sequence, "AT");
        assert!((props[1].gc - 0.0).abs() < 1e-6);
        assert_eq!(props[1].tm, 52.0);
        assert_eq!(props[1].self_hyb_dg, -2.0);
    }

    #[test]
    fn test_one_backend_call_per_tool() {
        let backend = MockThermo::new();
        let seqs = vec!["ACGT", "GGCC", "TTAA", "CGCG"];
        dna_properties_batch(&backend, &seqs).unwrap();
        assert_eq!(
            *backend.calls.borrow(),
            vec!["melting_temp", "hybrid_ss_min", "hybrid_min"]
        );
    }

    #[test]
    fn test_single_matches_batch() {
        let backend = MockThermo::new();
        let single = dna_properties(&backend, "ACGT").unwrap();
        let batch = dna_properties_batch(&backend, &["ACGT"]).unwrap();
        assert_eq!(single, batch[0]);
    }

    #[test]
    fn test_accepts_seq_values() {
        let backend = MockThermo::new();
        let seqs = vec![Seq::dna("ACGT").unwrap(), Seq::dna("GGGG").unwrap()];
        let props = dna_properties_batch(&backend, &seqs).unwrap();
        assert_eq!(props[1].sequence, "GGGG");
        assert!((props[1].gc - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_short_tool_output_is_mismatch() {
        let err = dna_properties_batch(&ShortThermo, &["ACGT", "GGCC"]).unwrap_err();
        match err {
            Error::BatchMismatch {
                tool,
                expected,
                got,
            } => {
                assert_eq!(tool, "melting_temp");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
