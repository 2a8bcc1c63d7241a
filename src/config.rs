//! Jaro-Winkler tunables.
//!
//! A config is validated once, before any score is computed. Out-of-range
//! values are rejected rather than clamped.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

/// Default weight of each shared prefix character.
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;
/// Default cap on the shared prefix length that earns a boost.
pub const DEFAULT_PREFIX_BOUNDARY: usize = 4;
/// Largest prefix scale that keeps the classic 4-character boost within [0, 1].
pub const MAX_PREFIX_SCALE: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Boost weight per shared prefix character.
    pub prefix_scale: f64,
    /// Maximum shared prefix length considered.
    pub prefix_boundary: usize,
    /// Only boost when the Jaro score reaches this value. `None` always boosts.
    pub boost_threshold: Option<f64>,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_scale: DEFAULT_PREFIX_SCALE,
            prefix_boundary: DEFAULT_PREFIX_BOUNDARY,
            boost_threshold: None,
        }
    }
}

impl JaroWinklerConfig {
    pub fn new(prefix_scale: f64, prefix_boundary: usize) -> Self {
        Self {
            prefix_scale,
            prefix_boundary,
            boost_threshold: None,
        }
    }

    /// Build a config from a signed boundary, as handed over by Python callers.
    pub fn from_raw(prefix_scale: f64, prefix_boundary: i64) -> Result<Self> {
        let boundary = usize::try_from(prefix_boundary).map_err(|_| {
            tracing::warn!(prefix_boundary, "rejecting negative prefix boundary");
            SimilarityError::invalid(
                "prefix_boundary",
                format!("must be >= 0, got {prefix_boundary}"),
            )
        })?;
        let config = Self::new(prefix_scale, boundary);
        config.validate()?;
        Ok(config)
    }

    pub fn with_boost_threshold(mut self, threshold: f64) -> Self {
        self.boost_threshold = Some(threshold);
        self
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let scale = self.prefix_scale;
        if scale.is_nan() || scale < 0.0 {
            tracing::warn!(prefix_scale = scale, "rejecting prefix scale");
            return Err(SimilarityError::invalid(
                "prefix_scale",
                format!("must be >= 0, got {scale}"),
            ));
        }
        if scale > MAX_PREFIX_SCALE {
            tracing::warn!(prefix_scale = scale, "rejecting prefix scale");
            return Err(SimilarityError::invalid(
                "prefix_scale",
                format!("must be <= {MAX_PREFIX_SCALE}, got {scale}"),
            ));
        }
        // Full boost is boundary * scale * (1 - jaro); above 1 the score leaves [0, 1].
        if scale * self.prefix_boundary as f64 > 1.0 {
            tracing::warn!(
                prefix_scale = scale,
                prefix_boundary = self.prefix_boundary,
                "rejecting prefix boost above 1"
            );
            return Err(SimilarityError::invalid(
                "prefix_boundary",
                format!(
                    "{} with prefix_scale {scale} allows a boost above 1",
                    self.prefix_boundary
                ),
            ));
        }
        if let Some(threshold) = self.boost_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                tracing::warn!(boost_threshold = threshold, "rejecting boost threshold");
                return Err(SimilarityError::invalid(
                    "boost_threshold",
                    format!("must be within [0, 1], got {threshold}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = JaroWinklerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prefix_boundary, 4);
        assert!((config.prefix_scale - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(JaroWinklerConfig::new(-0.1, 4).validate().is_err());
        assert!(JaroWinklerConfig::new(0.3, 4).validate().is_err());
        assert!(JaroWinklerConfig::new(f64::NAN, 4).validate().is_err());
        assert!(JaroWinklerConfig::new(0.25, 4).validate().is_ok());
        assert!(JaroWinklerConfig::new(0.0, 0).validate().is_ok());
    }

    #[test]
    fn test_rejects_boost_above_one() {
        assert!(JaroWinklerConfig::new(0.2, 6).validate().is_err());
        assert!(JaroWinklerConfig::new(0.25, 4).validate().is_ok());
    }

    #[test]
    fn test_from_raw_negative_boundary() {
        let err = JaroWinklerConfig::from_raw(0.1, -1).unwrap_err();
        assert!(matches!(
            err,
            SimilarityError::InvalidConfiguration { parameter: "prefix_boundary", .. }
        ));
        assert_eq!(JaroWinklerConfig::from_raw(0.1, 3).unwrap().prefix_boundary, 3);
    }

    #[test]
    fn test_boost_threshold_range() {
        let config = JaroWinklerConfig::default().with_boost_threshold(1.5);
        assert!(config.validate().is_err());
        let config = JaroWinklerConfig::default().with_boost_threshold(0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = JaroWinklerConfig::from_json(r#"{"prefix_boundary": 2}"#).unwrap();
        assert_eq!(config.prefix_boundary, 2);
        assert!((config.prefix_scale - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.boost_threshold, None);

        let config = JaroWinklerConfig::from_json(r#"{"boost_threshold": 0.7}"#).unwrap();
        assert_eq!(config.boost_threshold, Some(0.7));

        assert!(matches!(
            JaroWinklerConfig::from_json("{not json"),
            Err(SimilarityError::Config(_))
        ));
        assert!(matches!(
            JaroWinklerConfig::from_json(r#"{"prefix_scale": 0.9}"#),
            Err(SimilarityError::InvalidConfiguration { .. })
        ));
    }
}
