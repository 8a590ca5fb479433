//! Flickcurve - piecewise adaptive sensitivity response curves
//!
//! This library computes a parameterized, multi-phase response curve mapping
//! an input magnitude (device input velocity) to a sensitivity multiplier.
//! It is a pure computation core with no I/O; presentation and persistence
//! belong to the caller.
//!
//! # Quick start
//!
//! ```
//! use flickcurve::CurveConfig;
//!
//! let config = CurveConfig::default()
//!     .with_phase_boundaries(vec![18.0, 55.0, 130.0])
//!     .with_response_ratios(vec![0.35, 0.65, 1.05, 1.45])
//!     .with_dpi(1600);
//!
//! config.validate()?;
//! let curve = config.generate();
//!
//! assert_eq!(curve.len(), 257);
//! assert!(curve.y().iter().all(|y| y.is_finite()));
//! # Ok::<(), flickcurve::ConfigError>(())
//! ```

pub mod config;
pub mod curve;
#[cfg(feature = "export")]
pub mod export;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, CurveConfig};
pub use curve::SampledCurve;
