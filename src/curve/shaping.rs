//! Shared numeric helpers for curve shaping.
//!
//! These are the building blocks of the generator: the logistic function,
//! the sigmoid+sine transition blend used inside each phase, the tanh
//! settling tail, and the order-normalizing band clamp used by the
//! hysteresis pass.

use std::f64::consts::TAU;

/// The logistic function `1 / (1 + e^-z)`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Transition blend for one phase.
///
/// Maps normalized progress `t` (0 at the phase's lower bound, 1 at its
/// upper bound) to a blend factor: a steep logistic ramp centered at
/// `t = 0.6`, whose steepness grows with `dpi`, plus a small sine
/// perturbation. The oscillation is intentional texture, not noise.
///
/// The output is not confined to [0, 1]; overshoot near boundaries is
/// handled by the hysteresis clamp.
///
/// # Examples
///
/// ```
/// use flickcurve::curve::shaping::transition;
///
/// // The ramp saturates by the end of the phase.
/// assert!((transition(1.0, 1600) - 1.0).abs() < 1e-6);
/// assert!(transition(0.0, 1600).abs() < 1e-6);
/// ```
pub fn transition(t: f64, dpi: u32) -> f64 {
    let k = 2.5 + dpi as f64 / 800.0;
    sigmoid(k * (t - 0.6) * 10.0) + 0.2 * (TAU * t).sin()
}

/// Asymptotic settling toward `ratio` beyond the last boundary.
///
/// Starts at 97% of `ratio` at the anchor and approaches `ratio` from
/// below as `x` grows; never exceeds it.
pub fn settle(ratio: f64, x: f64, anchor: f64) -> f64 {
    ratio * (0.97 + 0.03 * ((x - anchor) / 50.0).tanh())
}

/// Clamps `value` into the band spanned by `a` and `b`.
///
/// The bounds are normalized to `(min, max)` first, so a descending ratio
/// pair clamps the same as an ascending one.
pub fn clamp_to_band(value: f64, a: f64, b: f64) -> f64 {
    value.clamp(a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sigmoid_midpoint() {
        assert!(approx_eq(sigmoid(0.0), 0.5));
    }

    #[test]
    fn test_sigmoid_symmetry() {
        for z in [0.5, 1.0, 3.0, 10.0] {
            assert!(approx_eq(sigmoid(z) + sigmoid(-z), 1.0));
        }
    }

    #[test]
    fn test_sigmoid_saturates() {
        assert!(sigmoid(30.0) > 1.0 - 1e-12);
        assert!(sigmoid(-30.0) < 1e-12);
    }

    #[test]
    fn test_transition_endpoints() {
        // At t = 0 the ramp is far below its center and the sine term is
        // zero; at t = 1 the ramp has saturated and the sine wrapped around.
        assert!(transition(0.0, 1600).abs() < 1e-9);
        assert!((transition(1.0, 1600) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_transition_at_ramp_center() {
        // At t = 0.6 the logistic term is exactly 1/2 regardless of dpi.
        let expected = 0.5 + 0.2 * (TAU * 0.6).sin();
        assert!(approx_eq(transition(0.6, 400), expected));
        assert!(approx_eq(transition(0.6, 6400), expected));
    }

    #[test]
    fn test_transition_steepens_with_dpi() {
        // Past the ramp center, higher dpi is further along the ramp.
        assert!(transition(0.65, 6400) > transition(0.65, 400));
        // Before it, higher dpi is further down.
        assert!(transition(0.55, 6400) < transition(0.55, 400));
    }

    #[test]
    fn test_settle_starts_at_97_percent() {
        assert!(approx_eq(settle(1.45, 130.0, 130.0), 1.45 * 0.97));
    }

    #[test]
    fn test_settle_approaches_ratio_from_below() {
        let ratio = 1.45;
        let mut previous = settle(ratio, 130.0, 130.0);
        for offset in [10.0, 50.0, 150.0, 500.0] {
            let value = settle(ratio, 130.0 + offset, 130.0);
            assert!(value > previous);
            assert!(value < ratio);
            previous = value;
        }
        // tanh is near 1 by 500 counts out
        assert!(settle(ratio, 630.0, 130.0) > ratio * 0.9999);
    }

    #[test]
    fn test_clamp_to_band_ascending() {
        assert_eq!(clamp_to_band(0.2, 0.5, 1.0), 0.5);
        assert_eq!(clamp_to_band(1.2, 0.5, 1.0), 1.0);
        assert_eq!(clamp_to_band(0.7, 0.5, 1.0), 0.7);
    }

    #[test]
    fn test_clamp_to_band_descending() {
        // Bounds arrive in sequence order; a descending ratio pair must
        // clamp identically to its ascending mirror.
        assert_eq!(clamp_to_band(0.2, 1.0, 0.5), 0.5);
        assert_eq!(clamp_to_band(1.2, 1.0, 0.5), 1.0);
        assert_eq!(clamp_to_band(0.7, 1.0, 0.5), 0.7);
    }
}
