//! Textual export and import contracts.
//!
//! Two formats cross the library boundary: a configuration as field-named
//! JSON, and a sampled curve as a single line of semicolon-separated
//! `x,y` pairs, `x` as an integer and `y` with exactly six decimal digits.
//! The pair format is consumed by external tools and is bit-exact;
//! don't change it.

use std::fmt::Write;

use crate::config::{ConfigError, CurveConfig, REQUIRED_FIELDS};
use crate::curve::SampledCurve;

impl CurveConfig {
    /// Serializes this configuration as field-named JSON.
    ///
    /// Round-trips every field losslessly through
    /// [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a configuration from JSON text.
    ///
    /// An absent required key is reported as [`ConfigError::MissingField`]
    /// before deserialization, so the caller can tell a missing parameter
    /// apart from a malformed one. The variant toggles (`micro_phase`,
    /// `hysteresis_clamp`) default to on when absent, matching exports that
    /// predate them.
    ///
    /// # Examples
    ///
    /// ```
    /// use flickcurve::{ConfigError, CurveConfig};
    ///
    /// let config = CurveConfig::default();
    /// let text = config.to_json().expect("serializable");
    /// let restored = CurveConfig::from_json(&text).expect("round-trip");
    /// assert_eq!(restored, config);
    ///
    /// let err = CurveConfig::from_json("{\"input_range\": 257}").unwrap_err();
    /// assert!(matches!(err, ConfigError::MissingField("phase_boundaries")));
    /// ```
    pub fn from_json(text: &str) -> Result<CurveConfig, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if let Some(map) = value.as_object() {
            for &field in REQUIRED_FIELDS {
                if !map.contains_key(field) {
                    return Err(ConfigError::MissingField(field));
                }
            }
        }
        let config: CurveConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }
}

impl SampledCurve {
    /// Serializes the curve as `"x0,y0;x1,y1;...;xn,yn"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flickcurve::CurveConfig;
    ///
    /// let curve = CurveConfig::default().with_input_range(3).generate();
    /// let lut = curve.to_lut_string();
    /// assert_eq!(lut.split(';').count(), 3);
    /// assert!(lut.starts_with("1,"));
    /// ```
    pub fn to_lut_string(&self) -> String {
        let mut out = String::with_capacity(self.len() * 12);
        for (i, (x, y)) in self.points().enumerate() {
            if i > 0 {
                out.push(';');
            }
            let _ = write!(out, "{x:.0},{y:.6}");
        }
        out
    }

    /// Renders the human-readable response profile: a header naming the
    /// generating parameters, then one `x,y` pair per line.
    pub fn profile_report(&self, config: &CurveConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Adaptive Response Profile");
        let _ = writeln!(out, "DPI: {}", config.dpi);
        let _ = writeln!(out, "Phase Boundaries: {:?}", config.phase_boundaries);
        let _ = writeln!(out, "Response Ratios: {:?}", config.response_ratios);
        let _ = writeln!(out, "Microscale Factor: {}", config.microscale_factor);
        let _ = writeln!(out, "Sensitivity Floor: {}", config.sensitivity_floor);
        let _ = writeln!(out);
        let _ = writeln!(out, "Full Response Profile:");
        for (x, y) in self.points() {
            let _ = writeln!(out, "{x:.0},{y:.6}");
        }
        out
    }
}
