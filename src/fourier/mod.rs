//! Truncated Fourier series: validated coefficients, evaluation, and the
//! text-form parser that feeds them.

/// Parsing raw form fields into a validated spec.
pub mod input;
/// Series coefficients, fundamentals, and evaluation.
pub mod series;

pub use input::{FourierForm, FundamentalKind};
pub use series::{evaluate, FourierSpec, Fundamental};
