//! Curve configuration and validation.
//!
//! A [`CurveConfig`] is an immutable description of a response curve: how the
//! input domain is partitioned into phases, the target multiplier at each
//! phase boundary, and the shaping parameters for the transitions between
//! them. Configurations are plain values. Construct one fresh for every
//! generation request, validate it, then hand it to
//! [`generate`](CurveConfig::generate).

#[cfg(feature = "export")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keys a complete configuration must carry in its textual form.
///
/// Used by the import path to report absent keys as
/// [`ConfigError::MissingField`] before deserialization.
#[cfg(feature = "export")]
pub(crate) const REQUIRED_FIELDS: &[&str] = &[
    "input_range",
    "phase_boundaries",
    "response_ratios",
    "dpi",
    "microscale_factor",
    "sensitivity_floor",
    "hysteresis_window",
];

/// Errors reported when a configuration is structurally unusable.
///
/// All variants are recoverable: the caller rejects the input and keeps its
/// last good configuration. The library itself never prints or logs;
/// user-facing reporting belongs to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key was absent from an imported configuration.
    #[error("missing required parameter: {0}")]
    MissingField(&'static str),

    /// Adjacent phase boundaries were equal or inverted.
    #[error("phase boundaries must be strictly increasing (violated at index {index})")]
    NonMonotonicBoundaries {
        /// Index of the first boundary that is not below its successor.
        index: usize,
    },

    /// The response ratio count does not match the phase count.
    #[error("expected {expected} response ratios, found {found}")]
    RatioCountMismatch {
        /// Required count: one ratio per boundary, plus one for the tail phase.
        expected: usize,
        /// Count actually supplied.
        found: usize,
    },

    /// A phase has collapsed to zero (or negative) width.
    #[error("phase {index} has no width")]
    DegenerateBoundaryPair {
        /// Index of the collapsed phase.
        index: usize,
    },

    /// The configuration text could not be parsed.
    #[cfg(feature = "export")]
    #[error("malformed configuration text: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "export")]
fn enabled() -> bool {
    true
}

/// Parameters describing a piecewise adaptive response curve.
///
/// The input domain `1..=input_range` is partitioned by `phase_boundaries`
/// into `phase_boundaries.len() + 1` phases, the last extending to infinity.
/// `response_ratios` gives the target output multiplier at/after each
/// boundary. The remaining fields shape how output moves between ratios:
/// `dpi` steepens the sigmoid transitions, `microscale_factor` and
/// `sensitivity_floor` shape the logarithmic first phase, and
/// `hysteresis_window` bounds overshoot around each boundary.
///
/// [`Default`] is the stock desktop profile: 257 samples, boundaries at
/// 18/55/130 counts per millisecond, ratios from 0.35 up to 1.45, 1600 dpi.
///
/// # Examples
///
/// ```
/// use flickcurve::CurveConfig;
///
/// let config = CurveConfig::default()
///     .with_phase_boundaries(vec![10.0, 30.0, 50.0])
///     .with_response_ratios(vec![0.3, 0.6, 1.0, 1.4])
///     .with_dpi(800);
///
/// config.validate().expect("well-formed profile");
/// let curve = config.generate();
/// assert_eq!(curve.len(), 257);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "export", derive(Serialize, Deserialize))]
pub struct CurveConfig {
    /// Number of discrete input samples, taken at unit steps starting at 1.
    pub input_range: u32,
    /// Strictly increasing positive boundaries partitioning the input domain.
    pub phase_boundaries: Vec<f64>,
    /// Target output multiplier at/after each boundary; one per phase.
    pub response_ratios: Vec<f64>,
    /// Device resolution; steeper transitions at higher values.
    pub dpi: u32,
    /// Gain of the logarithmic micro-response in the first phase.
    pub microscale_factor: f64,
    /// Minimum output of the first phase.
    pub sensitivity_floor: f64,
    /// Half-width of the clamped zone around each boundary.
    pub hysteresis_window: f64,
    /// Shape the first phase with the logarithmic micro-response. With this
    /// off, the first phase uses the same sigmoid transition as the interior
    /// phases, anchored at zero.
    #[cfg_attr(feature = "export", serde(default = "enabled"))]
    pub micro_phase: bool,
    /// Clamp samples near each boundary into the band of the flanking ratios.
    #[cfg_attr(feature = "export", serde(default = "enabled"))]
    pub hysteresis_clamp: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            input_range: 257,
            phase_boundaries: vec![18.0, 55.0, 130.0],
            response_ratios: vec![0.35, 0.65, 1.05, 1.45],
            dpi: 1600,
            microscale_factor: 0.38,
            sensitivity_floor: 0.08,
            hysteresis_window: 5.0,
            micro_phase: true,
            hysteresis_clamp: true,
        }
    }
}

impl CurveConfig {
    /// Sets the number of input samples.
    pub fn with_input_range(mut self, input_range: u32) -> Self {
        self.input_range = input_range;
        self
    }

    /// Sets the phase boundaries.
    ///
    /// Boundaries must be strictly increasing and positive; this is checked
    /// by [`validate`](Self::validate), not here.
    pub fn with_phase_boundaries(mut self, boundaries: Vec<f64>) -> Self {
        self.phase_boundaries = boundaries;
        self
    }

    /// Sets the response ratios, one per phase.
    pub fn with_response_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.response_ratios = ratios;
        self
    }

    /// Sets the device resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the micro-response gain for the first phase.
    pub fn with_microscale_factor(mut self, factor: f64) -> Self {
        self.microscale_factor = factor;
        self
    }

    /// Sets the minimum first-phase output.
    pub fn with_sensitivity_floor(mut self, floor: f64) -> Self {
        self.sensitivity_floor = floor;
        self
    }

    /// Sets the half-width of the boundary clamp zone.
    pub fn with_hysteresis_window(mut self, window: f64) -> Self {
        self.hysteresis_window = window;
        self
    }

    /// Enables or disables the logarithmic first phase.
    pub fn with_micro_phase(mut self, on: bool) -> Self {
        self.micro_phase = on;
        self
    }

    /// Enables or disables the boundary clamp pass.
    pub fn with_hysteresis_clamp(mut self, on: bool) -> Self {
        self.hysteresis_clamp = on;
        self
    }

    /// Checks that this configuration describes a well-formed curve.
    ///
    /// A configuration is rejected when its boundaries are not strictly
    /// increasing, when the ratio count does not equal the boundary count
    /// plus one, or when the first boundary collapses the implicit first
    /// phase `(0, boundaries[0]]`. Nothing is repaired; rejection is the
    /// caller's signal to request different input.
    ///
    /// An empty boundary list with a single ratio is valid: one phase
    /// spanning the whole domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use flickcurve::CurveConfig;
    ///
    /// let inverted = CurveConfig::default()
    ///     .with_phase_boundaries(vec![50.0, 30.0]);
    /// assert!(inverted.validate().is_err());
    ///
    /// let single_phase = CurveConfig::default()
    ///     .with_phase_boundaries(vec![])
    ///     .with_response_ratios(vec![1.0]);
    /// assert!(single_phase.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, pair) in self.phase_boundaries.windows(2).enumerate() {
            // NaN fails the comparison and is rejected along with inversions
            if !(pair[0] < pair[1]) {
                return Err(ConfigError::NonMonotonicBoundaries { index });
            }
        }
        let expected = self.phase_boundaries.len() + 1;
        let found = self.response_ratios.len();
        if found != expected {
            return Err(ConfigError::RatioCountMismatch { expected, found });
        }
        if let Some(&first) = self.phase_boundaries.first() {
            if !(first > 0.0) {
                return Err(ConfigError::DegenerateBoundaryPair { index: 0 });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(CurveConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_boundaries() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![50.0, 30.0])
            .with_response_ratios(vec![0.5, 1.0, 1.5]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonMonotonicBoundaries { index: 0 })
        ));
    }

    #[test]
    fn test_rejects_duplicate_boundaries() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![10.0, 10.0, 20.0])
            .with_response_ratios(vec![0.5, 0.8, 1.0, 1.2]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonMonotonicBoundaries { index: 0 })
        ));
    }

    #[test]
    fn test_accepts_increasing_boundaries() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![10.0, 30.0, 50.0])
            .with_response_ratios(vec![0.3, 0.6, 1.0, 1.4]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ratio_count_must_be_boundaries_plus_one() {
        let base = CurveConfig::default().with_phase_boundaries(vec![10.0, 30.0]);

        let too_few = base.clone().with_response_ratios(vec![0.5, 1.0]);
        assert!(matches!(
            too_few.validate(),
            Err(ConfigError::RatioCountMismatch {
                expected: 3,
                found: 2
            })
        ));

        let too_many = base.clone().with_response_ratios(vec![0.5, 1.0, 1.5, 2.0]);
        assert!(matches!(
            too_many.validate(),
            Err(ConfigError::RatioCountMismatch {
                expected: 3,
                found: 4
            })
        ));

        let exact = base.with_response_ratios(vec![0.5, 1.0, 1.5]);
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_empty_boundaries_single_phase_is_valid() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![])
            .with_response_ratios(vec![0.8]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_boundaries_still_checks_ratio_count() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![])
            .with_response_ratios(vec![0.8, 1.2]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RatioCountMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_rejects_nonpositive_first_boundary() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![0.0, 30.0, 50.0])
            .with_response_ratios(vec![0.3, 0.6, 1.0, 1.4]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateBoundaryPair { index: 0 })
        ));
    }

    #[test]
    fn test_rejects_nan_boundary() {
        let config = CurveConfig::default()
            .with_phase_boundaries(vec![10.0, f64::NAN, 50.0])
            .with_response_ratios(vec![0.3, 0.6, 1.0, 1.4]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = CurveConfig::default()
            .with_input_range(64)
            .with_dpi(800)
            .with_microscale_factor(0.5)
            .with_sensitivity_floor(0.1)
            .with_hysteresis_window(3.0)
            .with_micro_phase(false)
            .with_hysteresis_clamp(false);
        assert_eq!(config.input_range, 64);
        assert_eq!(config.dpi, 800);
        assert_eq!(config.microscale_factor, 0.5);
        assert_eq!(config.sensitivity_floor, 0.1);
        assert_eq!(config.hysteresis_window, 3.0);
        assert!(!config.micro_phase);
        assert!(!config.hysteresis_clamp);
    }
}
