//! Jaro-Winkler similarity
//!
//! Jaro similarity plus a bonus for a shared prefix:
//! `jaro + l * prefix_scale * (1 - jaro)`, where `l` is the common prefix
//! length capped at `prefix_boundary`.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;

use super::jaro::jaro_similarity_raw;
use super::prefix::common_prefix_length;
use crate::config::JaroWinklerConfig;
use crate::error::Result;

/// Jaro-Winkler scorer over a validated [`JaroWinklerConfig`].
///
/// Holds no state besides its config, so one engine can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    config: JaroWinklerConfig,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            config: JaroWinklerConfig::default(),
        }
    }
}

impl JaroWinkler {
    pub fn new(config: JaroWinklerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &JaroWinklerConfig {
        &self.config
    }

    /// Similarity in [0, 1]; 1 for identical strings, 0 when nothing matches.
    pub fn similarity(&self, s1: &str, s2: &str) -> f64 {
        let jaro = jaro_similarity_raw(s1, s2);
        if jaro == 0.0 || jaro == 1.0 {
            return jaro;
        }

        if let Some(threshold) = self.config.boost_threshold {
            if jaro < threshold {
                return jaro;
            }
        }

        let prefix_len = common_prefix_length(s1, s2, self.config.prefix_boundary) as f64;
        jaro + prefix_len * self.config.prefix_scale * (1.0 - jaro)
    }

    pub fn distance(&self, s1: &str, s2: &str) -> f64 {
        1.0 - self.similarity(s1, s2)
    }

    /// Similarity, or 0.0 when it falls below `cutoff`.
    pub fn similarity_with_cutoff(&self, s1: &str, s2: &str, cutoff: f64) -> f64 {
        let sim = self.similarity(s1, s2);
        if sim < cutoff {
            0.0
        } else {
            sim
        }
    }

    /// Distance, or 1.0 when it exceeds `cutoff`.
    pub fn distance_with_cutoff(&self, s1: &str, s2: &str, cutoff: f64) -> f64 {
        let dist = self.distance(s1, s2);
        if dist > cutoff {
            1.0
        } else {
            dist
        }
    }

    /// Scores every pair in parallel. Results keep the order of `pairs`.
    pub fn similarity_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<f64>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        tracing::debug!(pairs = pairs.len(), "jaro-winkler similarity batch");
        pairs
            .par_iter()
            .map(|(s1, s2)| self.similarity(s1.as_ref(), s2.as_ref()))
            .collect()
    }

    pub fn distance_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<f64>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        tracing::debug!(pairs = pairs.len(), "jaro-winkler distance batch");
        pairs
            .par_iter()
            .map(|(s1, s2)| self.distance(s1.as_ref(), s2.as_ref()))
            .collect()
    }
}

/// One-shot Jaro-Winkler similarity. The tunables are validated before any
/// work is done.
pub fn similarity(s1: &str, s2: &str, prefix_scale: f64, prefix_boundary: usize) -> Result<f64> {
    let engine = JaroWinkler::new(JaroWinklerConfig::new(prefix_scale, prefix_boundary))?;
    Ok(engine.similarity(s1, s2))
}

// ============ Python Bindings ============

#[cfg(feature = "python")]
fn engine_for(prefix_weight: f64, prefix_boundary: i64) -> Result<JaroWinkler> {
    JaroWinkler::new(JaroWinklerConfig::from_raw(prefix_weight, prefix_boundary)?)
}

/// Calculate Jaro-Winkler similarity.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (s1, s2, *, prefix_weight=0.1, prefix_boundary=4, score_cutoff=None))]
pub fn jaro_winkler_similarity(
    s1: &str,
    s2: &str,
    prefix_weight: f64,
    prefix_boundary: i64,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    let engine = engine_for(prefix_weight, prefix_boundary)?;
    Ok(match score_cutoff {
        Some(cutoff) => engine.similarity_with_cutoff(s1, s2, cutoff),
        None => engine.similarity(s1, s2),
    })
}

/// Calculate Jaro-Winkler distance (1 - similarity).
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (s1, s2, *, prefix_weight=0.1, prefix_boundary=4, score_cutoff=None))]
pub fn jaro_winkler_distance(
    s1: &str,
    s2: &str,
    prefix_weight: f64,
    prefix_boundary: i64,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    let engine = engine_for(prefix_weight, prefix_boundary)?;
    Ok(match score_cutoff {
        Some(cutoff) => engine.distance_with_cutoff(s1, s2, cutoff),
        None => engine.distance(s1, s2),
    })
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (pairs, *, prefix_weight=0.1, prefix_boundary=4, score_cutoff=None))]
pub fn jaro_winkler_similarity_batch(
    pairs: Vec<(String, String)>,
    prefix_weight: f64,
    prefix_boundary: i64,
    score_cutoff: Option<f64>,
) -> PyResult<Vec<f64>> {
    let engine = engine_for(prefix_weight, prefix_boundary)?;
    let scores = engine.similarity_batch(&pairs);
    Ok(match score_cutoff {
        Some(cutoff) => scores
            .into_iter()
            .map(|s| if s < cutoff { 0.0 } else { s })
            .collect(),
        None => scores,
    })
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (pairs, *, prefix_weight=0.1, prefix_boundary=4, score_cutoff=None))]
pub fn jaro_winkler_distance_batch(
    pairs: Vec<(String, String)>,
    prefix_weight: f64,
    prefix_boundary: i64,
    score_cutoff: Option<f64>,
) -> PyResult<Vec<f64>> {
    let engine = engine_for(prefix_weight, prefix_boundary)?;
    let distances = engine.distance_batch(&pairs);
    Ok(match score_cutoff {
        Some(cutoff) => distances
            .into_iter()
            .map(|d| if d > cutoff { 1.0 } else { d })
            .collect(),
        None => distances,
    })
}
