//! Experiment reports
//!
//! A report carries a unique run id, a SHA-256 fingerprint of the config
//! that produced it, and one entry per executed step. Two reports with the
//! same `config_hash` came from identical configs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::optimize::OptimizedAngles;
use super::{ExperimentConfig, ExperimentError};
use crate::models::result::format_rate;
use crate::models::GameResult;
use crate::strategy::{QuantumParams, StrategyConfig};

/// Win statistics at one noise level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub err: f64,
    pub result: GameResult,
}

/// Output of one experiment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReportEntry {
    Single {
        label: String,
        strategy: StrategyConfig,
        result: GameResult,
    },
    NoiseSweep {
        angles: QuantumParams,
        points: Vec<SweepPoint>,
    },
    Optimized {
        angles: OptimizedAngles,
        result: GameResult,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Unique id of this execution (UUID v4)
    pub run_id: String,

    /// SHA-256 of the canonical config JSON
    pub config_hash: String,

    pub entries: Vec<ReportEntry>,
}

impl ExperimentReport {
    /// Empty report for `config`
    pub fn new(config: &ExperimentConfig) -> Result<Self, ExperimentError> {
        Ok(Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            config_hash: compute_config_hash(config)?,
            entries: Vec::new(),
        })
    }

    /// Plain-text rendering, one block per result separated by blank lines
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                ReportEntry::Single { label, result, .. } => {
                    let _ = writeln!(out, "{}\n{}\n", label, result);
                }
                ReportEntry::NoiseSweep { points, .. } => {
                    for point in points {
                        let _ = writeln!(
                            out,
                            "Error Rate: {}\n{}\n",
                            format_rate(point.err),
                            point.result
                        );
                    }
                }
                ReportEntry::Optimized { angles, result } => {
                    let _ = writeln!(
                        out,
                        "Error rate: {}\nDiff_a: {} Diff_0: {} Diff_b: {}\n{}\n",
                        format_rate(angles.err),
                        format_rate(angles.diff_a.to_degrees()),
                        format_rate(angles.diff_0.to_degrees()),
                        format_rate(angles.diff_b.to_degrees()),
                        result
                    );
                }
            }
        }
        out
    }
}

/// SHA-256 of `config` serialized with recursively sorted object keys
pub fn compute_config_hash(config: &ExperimentConfig) -> Result<String, ExperimentError> {
    let value = serde_json::to_value(config)?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
