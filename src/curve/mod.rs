//! Curve generation: sampled output, shaping helpers, DPI rescaling.

pub mod shaping;

mod generator;

pub use generator::SampledCurve;
