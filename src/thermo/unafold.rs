//! UNAFold/OligoArrayAux command-line backend
//!
//! Drives `melt.pl`, `hybrid-ss-min`, and `hybrid-min` in stream mode: each
//! batch is one child process, sequences (tab-separated pairs for
//! `hybrid-min`) written one per line to stdin, one whitespace-separated
//! result line read back per input. `melt.pl` rows are `dG dH dS Tm`;
//! `hybrid-ss-min` and `hybrid-min` rows lead with the free energy.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ThermoBackend;
use crate::error::{Error, Result};

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnaFoldConfig {
    /// Melting-temperature executable
    pub melt_exe: String,
    /// Single-strand folding executable
    pub ss_exe: String,
    /// Duplex hybridization executable
    pub min_exe: String,
    /// Folding temperature in °C
    pub temperature: f64,
    /// Sodium concentration in mol/L
    pub sodium: f64,
    /// Magnesium concentration in mol/L
    pub magnesium: f64,
}

impl Default for UnaFoldConfig {
    fn default() -> Self {
        Self {
            melt_exe: "melt.pl".to_string(),
            ss_exe: "hybrid-ss-min".to_string(),
            min_exe: "hybrid-min".to_string(),
            temperature: 37.0,
            sodium: 1.0,
            magnesium: 0.0,
        }
    }
}

/// [`ThermoBackend`] backed by the UNAFold command-line tools.
#[derive(Debug, Clone, Default)]
pub struct UnaFold {
    config: UnaFoldConfig,
}

impl UnaFold {
    /// Backend with default tool names resolved from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UnaFoldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UnaFoldConfig {
        &self.config
    }

    fn common_args(&self) -> Vec<String> {
        vec![
            format!("--tmin={}", self.config.temperature),
            format!("--tmax={}", self.config.temperature),
            format!("--sodium={}", self.config.sodium),
            format!("--magnesium={}", self.config.magnesium),
            "--stream".to_string(),
        ]
    }

    /// Run one tool over a whole batch. Returns the non-empty output lines.
    fn run_stream(&self, exe: &str, input_lines: &[String]) -> Result<Vec<String>> {
        debug!(tool = exe, inputs = input_lines.len(), "invoking thermodynamics tool");

        let mut child = Command::new(exe)
            .args(self.common_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            for line in input_lines {
                writeln!(stdin, "{}", line)?;
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: exe.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}

impl ThermoBackend for UnaFold {
    fn melting_temp(&self, seqs: &[String]) -> Result<Vec<f64>> {
        let lines = self.run_stream(&self.config.melt_exe, seqs)?;
        lines
            .iter()
            .map(|line| parse_trailing(&self.config.melt_exe, line))
            .collect()
    }

    fn hybrid_ss_min(&self, seqs: &[String]) -> Result<Vec<f64>> {
        let lines = self.run_stream(&self.config.ss_exe, seqs)?;
        lines
            .iter()
            .map(|line| parse_leading(&self.config.ss_exe, line))
            .collect()
    }

    fn hybrid_min(&self, seqs_a: &[String], seqs_b: &[String]) -> Result<Vec<Vec<f64>>> {
        if seqs_a.len() != seqs_b.len() {
            return Err(Error::InvalidInput(format!(
                "hybrid-min needs equal-length sequence sets, got {} and {}",
                seqs_a.len(),
                seqs_b.len()
            )));
        }
        let pairs: Vec<String> = seqs_a
            .iter()
            .zip(seqs_b)
            .map(|(a, b)| format!("{}\t{}", a, b))
            .collect();
        let lines = self.run_stream(&self.config.min_exe, &pairs)?;
        lines
            .iter()
            .map(|line| parse_row(&self.config.min_exe, line))
            .collect()
    }
}

/// Parse every whitespace-separated field of `line` as f64.
fn parse_row(tool: &str, line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|field| {
            field.parse::<f64>().map_err(|_| Error::ToolOutput {
                tool: tool.to_string(),
                line: line.to_string(),
            })
        })
        .collect()
}

/// First field of `line` as f64.
fn parse_leading(tool: &str, line: &str) -> Result<f64> {
    parse_row(tool, line)?
        .first()
        .copied()
        .ok_or_else(|| Error::ToolOutput {
            tool: tool.to_string(),
            line: line.to_string(),
        })
}

/// Last field of `line` as f64 (`melt.pl` prints `dG dH dS Tm`).
fn parse_trailing(tool: &str, line: &str) -> Result<f64> {
    parse_row(tool, line)?
        .last()
        .copied()
        .ok_or_else(|| Error::ToolOutput {
            tool: tool.to_string(),
            line: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        let row = parse_row("hybrid-min", "-5.5\t-40.2  -0.113").unwrap();
        assert_eq!(row, vec![-5.5, -40.2, -0.113]);
    }

    #[test]
    fn test_parse_row_rejects_garbage() {
        let err = parse_row("hybrid-min", "-5.5 oops").unwrap_err();
        match err {
            Error::ToolOutput { tool, line } => {
                assert_eq!(tool, "hybrid-min");
                assert_eq!(line, "-5.5 oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_leading() {
        assert_eq!(parse_leading("hybrid-ss-min", "-1.25").unwrap(), -1.25);
        assert_eq!(parse_leading("hybrid-ss-min", "-1.25 extra 3.0").unwrap(), -1.25);
    }

    #[test]
    fn test_parse_trailing_takes_tm() {
        // melt.pl row: dG dH dS Tm
        assert_eq!(parse_trailing("melt.pl", "-9.8 -71.4 -198.6 62.4").unwrap(), 62.4);
    }

    #[test]
    fn test_default_config() {
        let config = UnaFoldConfig::default();
        assert_eq!(config.melt_exe, "melt.pl");
        assert_eq!(config.ss_exe, "hybrid-ss-min");
        assert_eq!(config.min_exe, "hybrid-min");
        assert_eq!(config.temperature, 37.0);
    }

    #[test]
    fn test_hybrid_min_rejects_uneven_sets() {
        let backend = UnaFold::new();
        let a = vec!["ACGT".to_string()];
        let err = backend.hybrid_min(&a, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_executable_is_io_error() {
        let backend = UnaFold::with_config(UnaFoldConfig {
            ss_exe: "definitely-not-installed-hybrid-ss-min".to_string(),
            ..UnaFoldConfig::default()
        });
        let err = backend.hybrid_ss_min(&["ACGT".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
