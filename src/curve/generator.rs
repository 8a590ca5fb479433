//! Curve generation and DPI rescaling.
//!
//! [`CurveConfig::generate`] samples the response curve at unit steps and
//! returns a [`SampledCurve`] snapshot. Generation is a pure function of the
//! configuration, with no I/O and no shared state, so concurrent calls need
//! no coordination.

use std::f64::consts::LN_2;

use crate::config::CurveConfig;
use crate::curve::shaping::{clamp_to_band, settle, transition};

/// A sampled response curve.
///
/// Paired, equal-length sequences: `x[i] = (i + 1)` as a real, `y[i]` the
/// computed multiplier for that input value. A snapshot with no
/// back-reference to the configuration that produced it; regeneration means
/// discarding and recomputing.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
}

impl SampledCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The input values, `1, 2, ...` as reals.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The computed multipliers.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterates over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl CurveConfig {
    /// Samples the response curve described by this configuration.
    ///
    /// Defined only for a configuration that has passed
    /// [`validate`](Self::validate); generation does not re-validate.
    /// Validation and generation are separate, composable steps, and the
    /// caller decides when each runs.
    ///
    /// Always returns exactly `input_range` samples, all finite.
    ///
    /// The curve has up to three regimes:
    ///
    /// - at or below the first boundary, a logarithmic micro-response floored
    ///   at `sensitivity_floor` (when `micro_phase` is on; otherwise the
    ///   general transition, anchored at zero);
    /// - between boundaries, a sigmoid+sine blend from one ratio to the
    ///   next, with boundary membership left-open/right-closed (a sample
    ///   exactly on a boundary belongs to the phase ending there);
    /// - above the last boundary, an asymptotic settling toward the final
    ///   ratio, approaching from within −3%.
    ///
    /// When `hysteresis_clamp` is on, a final pass clamps every sample
    /// within `hysteresis_window` of a boundary into the band of the two
    /// ratios flanking it, suppressing transient overshoot from the blend.
    ///
    /// # Examples
    ///
    /// ```
    /// use flickcurve::CurveConfig;
    ///
    /// let config = CurveConfig::default();
    /// config.validate().expect("stock profile");
    ///
    /// let curve = config.generate();
    /// assert_eq!(curve.len(), 257);
    /// assert!(curve.y().iter().all(|y| y.is_finite()));
    /// ```
    pub fn generate(&self) -> SampledCurve {
        let count = self.input_range as usize;
        let mut x = Vec::with_capacity(count);
        let mut y = Vec::with_capacity(count);
        for i in 0..count {
            let input = (i + 1) as f64;
            x.push(input);
            y.push(self.response_at(input));
        }
        if self.hysteresis_clamp {
            self.apply_hysteresis(&x, &mut y);
        }
        SampledCurve { x, y }
    }

    fn response_at(&self, x: f64) -> f64 {
        let bounds = &self.phase_boundaries;
        let ratios = &self.response_ratios;

        let (&first, &last) = match (bounds.first(), bounds.last()) {
            (Some(first), Some(last)) => (first, last),
            // single phase spanning the whole domain: settle toward the one
            // ratio, anchored at zero
            _ => return settle(ratios[0], x, 0.0),
        };

        if self.micro_phase && x <= first {
            let micro = ratios[0] * (x.ln_1p() / LN_2) * self.microscale_factor;
            return micro.max(self.sensitivity_floor);
        }

        if x > last {
            return settle(ratios[bounds.len()], x, last);
        }

        // index of the phase this sample falls in; a sample exactly on a
        // boundary belongs to the phase ending there
        let i = bounds.partition_point(|&b| b < x);
        let lower = if i == 0 { 0.0 } else { bounds[i - 1] };
        let upper = bounds[i];
        let t = (x - lower) / (upper - lower);
        ratios[i] + (ratios[i + 1] - ratios[i]) * transition(t, self.dpi)
    }

    fn apply_hysteresis(&self, x: &[f64], y: &mut [f64]) {
        for (i, &boundary) in self.phase_boundaries.iter().enumerate() {
            let zone = (boundary - self.hysteresis_window)..=(boundary + self.hysteresis_window);
            let low = self.response_ratios[i];
            let high = self.response_ratios[i + 1];
            for (input, output) in x.iter().zip(y.iter_mut()) {
                if zone.contains(input) {
                    *output = clamp_to_band(*output, low, high);
                }
            }
        }
    }

    /// Rescales this configuration for a device resolution change.
    ///
    /// Phase boundaries scale by `new_dpi / old_dpi` and response ratios by
    /// the inverse, keeping the curve's effective shape constant across the
    /// change; the returned configuration carries `new_dpi`. This is an
    /// explicit caller-side step; [`generate`](Self::generate) never
    /// rescales implicitly.
    ///
    /// Rescaling there and back reproduces the original parameters to
    /// floating-point tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// use flickcurve::CurveConfig;
    ///
    /// let config = CurveConfig::default();
    /// let doubled = config.rescale_for_dpi(800, 1600);
    /// assert_eq!(doubled.dpi, 1600);
    /// assert_eq!(doubled.phase_boundaries[0], config.phase_boundaries[0] * 2.0);
    /// ```
    pub fn rescale_for_dpi(&self, old_dpi: u32, new_dpi: u32) -> CurveConfig {
        let boundary_scale = new_dpi as f64 / old_dpi as f64;
        let ratio_scale = old_dpi as f64 / new_dpi as f64;
        let mut rescaled = self.clone();
        rescaled.phase_boundaries = self
            .phase_boundaries
            .iter()
            .map(|b| b * boundary_scale)
            .collect();
        rescaled.response_ratios = self
            .response_ratios
            .iter()
            .map(|r| r * ratio_scale)
            .collect();
        rescaled.dpi = new_dpi;
        rescaled
    }
}
