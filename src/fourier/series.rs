//! Truncated trigonometric Fourier series.

/*
Fourier Series Reconstruction
=============================

A periodic signal with period T can be written as a constant plus a sum of
cosines and sines at whole multiples of the fundamental:

    x(t) = a0/2 + Σ_{k=1..K} [ a_k cos(k w0 t) + b_k sin(k w0 t) ]

Vocabulary
----------

  fundamental   The lowest frequency in the series. Given either as a period
                T (seconds) or as an angular frequency w0 (radians/second):

                    w0 = 2π / T        T = 2π / w0

  harmonic      The k-th term oscillates k times per period. k = 1 is the
                fundamental itself.

  a0            Twice the DC level. The series uses a0/2 so that a0 comes
                from the same integral formula as the other a_k.

  truncation    Real signals need infinitely many terms; keeping the first K
                gives an approximation. Sharp corners ring (Gibbs) no matter
                how large K gets.


Degenerate Fundamentals
-----------------------

A zero period or a zero w0 makes the other undefined (division by zero).
A subnormal one is no better: 2π / 1e-310 overflows to infinity and every
sample comes out NaN. Both are rejected when the spec is built, so
evaluation never sees them.
*/

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::mix,
    error::{EngineError, EngineResult},
    sampling::{SampleGrid, Waveform},
};

/// Fundamental of a series, given one way and derivable the other.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fundamental {
    /// w0, radians per second
    AngularFrequency(f64),
    /// T, seconds
    Period(f64),
}

impl Fundamental {
    /// Angular frequency, derived from the period when that was given.
    pub fn w0(self) -> f64 {
        match self {
            Fundamental::AngularFrequency(w0) => w0,
            Fundamental::Period(period) => TAU / period,
        }
    }

    /// Period, derived from the angular frequency when that was given.
    pub fn period(self) -> f64 {
        match self {
            Fundamental::AngularFrequency(w0) => TAU / w0,
            Fundamental::Period(period) => period,
        }
    }

    /// The value as supplied, before any derivation.
    pub fn raw(self) -> f64 {
        match self {
            Fundamental::AngularFrequency(v) | Fundamental::Period(v) => v,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Fundamental::AngularFrequency(_) => "w0",
            Fundamental::Period(_) => "T",
        }
    }

    fn validate(self) -> EngineResult<()> {
        let value = self.raw();
        if !value.is_finite() {
            return Err(EngineError::malformed(
                self.name(),
                format!("expected a finite number, found {value}"),
            ));
        }
        if value == 0.0 {
            let message = match self {
                Fundamental::AngularFrequency(_) => "angular frequency must be non-zero",
                Fundamental::Period(_) => "period must be non-zero",
            };
            return Err(EngineError::invalid(self.name(), message));
        }
        let derived = match self {
            Fundamental::AngularFrequency(w0) => ("T", TAU / w0),
            Fundamental::Period(period) => ("w0", TAU / period),
        };
        if !derived.1.is_finite() {
            return Err(EngineError::invalid(
                self.name(),
                format!("{value} is too small: {} = 2π / {value} overflows", derived.0),
            ));
        }
        Ok(())
    }
}

/// Validated coefficients of a truncated series.
///
/// Only [`FourierSpec::new`] builds one, so `a_k` and `b_k` always have the
/// same non-zero length and the fundamental is usable.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSpec {
    a0: f64,
    a_k: Vec<f64>,
    b_k: Vec<f64>,
    fundamental: Fundamental,
}

impl FourierSpec {
    pub fn new(
        a0: f64,
        a_k: Vec<f64>,
        b_k: Vec<f64>,
        fundamental: Fundamental,
    ) -> EngineResult<Self> {
        if !a0.is_finite() {
            return Err(EngineError::malformed(
                "a0",
                format!("expected a finite number, found {a0}"),
            ));
        }
        check_coefficients("a_k", &a_k)?;
        check_coefficients("b_k", &b_k)?;
        if a_k.len() != b_k.len() {
            return Err(EngineError::malformed(
                "a_k/b_k",
                format!(
                    "coefficient counts differ: {} cosine vs {} sine",
                    a_k.len(),
                    b_k.len()
                ),
            ));
        }
        fundamental.validate()?;

        Ok(Self {
            a0,
            a_k,
            b_k,
            fundamental,
        })
    }

    pub fn a0(&self) -> f64 {
        self.a0
    }

    pub fn a_k(&self) -> &[f64] {
        &self.a_k
    }

    pub fn b_k(&self) -> &[f64] {
        &self.b_k
    }

    pub fn fundamental(&self) -> Fundamental {
        self.fundamental
    }

    /// K, the number of harmonics in the series.
    pub fn harmonics(&self) -> usize {
        self.a_k.len()
    }

    /// Series value at a single time point.
    pub fn value_at(&self, t: f64) -> f64 {
        let w0 = self.fundamental.w0();
        self.a_k
            .iter()
            .zip(&self.b_k)
            .enumerate()
            .fold(self.a0 / 2.0, |acc, (i, (&a, &b))| {
                let angle = (i + 1) as f64 * w0 * t;
                acc + (a * angle.cos() + b * angle.sin())
            })
    }
}

fn check_coefficients(field: &str, values: &[f64]) -> EngineResult<()> {
    if values.is_empty() {
        return Err(EngineError::malformed(field, "at least one coefficient is required"));
    }
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(EngineError::malformed(
            field,
            format!("coefficient {} is not finite", pos + 1),
        ));
    }
    Ok(())
}

/// Sample the truncated series on `grid`.
///
/// Starts from the a0/2 baseline and adds harmonics 1..=K one at a time.
pub fn evaluate(spec: &FourierSpec, grid: &SampleGrid) -> Waveform {
    let w0 = spec.fundamental.w0();
    let mut out = Waveform::zeros(grid.len());
    mix::offset_in_place(out.samples_mut(), spec.a0 / 2.0);

    for (i, (&a, &b)) in spec.a_k.iter().zip(&spec.b_k).enumerate() {
        let k = (i + 1) as f64;
        for (sample, t) in out.samples_mut().iter_mut().zip(grid.times()) {
            let angle = k * w0 * t;
            *sample += a * angle.cos() + b * angle.sin();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn spec(a0: f64, a_k: &[f64], b_k: &[f64], fundamental: Fundamental) -> FourierSpec {
        FourierSpec::new(a0, a_k.to_vec(), b_k.to_vec(), fundamental).unwrap()
    }

    #[test]
    fn fundamental_derivations() {
        let from_period = Fundamental::Period(1.0);
        assert!((from_period.w0() - TAU).abs() < 1e-12);
        assert_eq!(from_period.period(), 1.0);

        let from_w0 = Fundamental::AngularFrequency(PI);
        assert!((from_w0.period() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn dc_only_is_half_a0() {
        let s = spec(2.0, &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0], Fundamental::Period(3.0));
        let w = evaluate(&s, &SampleGrid::FOURIER);
        assert!(w.samples().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn evaluate_matches_pointwise_value() {
        let s = spec(
            0.4,
            &[1.0, -0.5, 0.25, 0.1],
            &[0.0, 0.3, -0.2, 0.05],
            Fundamental::AngularFrequency(1.7),
        );
        let grid = SampleGrid::new(0.0, 5.0, 64);
        let w = evaluate(&s, &grid);
        for (t, &v) in grid.times().zip(w.samples()) {
            assert!((v - s.value_at(t)).abs() < 1e-12, "t = {t}");
        }
        assert_eq!(s.harmonics(), 4);
    }

    #[test]
    fn sine_terms_vanish_at_origin() {
        let s = spec(0.0, &[0.0], &[7.0], Fundamental::Period(1.0));
        assert_eq!(s.value_at(0.0), 0.0);
        assert!((s.value_at(0.25) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = FourierSpec::new(0.0, vec![1.0, 2.0], vec![1.0, 2.0, 3.0], Fundamental::Period(1.0))
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn rejects_empty_coefficients() {
        let err = FourierSpec::new(0.0, vec![], vec![], Fundamental::Period(1.0)).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn rejects_zero_fundamental() {
        for fundamental in [Fundamental::Period(0.0), Fundamental::AngularFrequency(0.0)] {
            let err = FourierSpec::new(0.0, vec![1.0], vec![1.0], fundamental).unwrap_err();
            assert!(err.is_invalid_parameter(), "{fundamental:?}");
        }
    }

    #[test]
    fn rejects_fundamental_whose_counterpart_overflows() {
        for fundamental in [
            Fundamental::Period(1e-310),
            Fundamental::AngularFrequency(-1e-310),
        ] {
            let err = FourierSpec::new(0.0, vec![1.0], vec![1.0], fundamental).unwrap_err();
            assert!(err.is_invalid_parameter(), "{fundamental:?}");
        }
        // Tiny but normal still derives a finite counterpart
        assert!(FourierSpec::new(0.0, vec![1.0], vec![1.0], Fundamental::Period(1e-300)).is_ok());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(FourierSpec::new(f64::NAN, vec![1.0], vec![1.0], Fundamental::Period(1.0))
            .unwrap_err()
            .is_malformed());
        assert!(FourierSpec::new(0.0, vec![f64::INFINITY], vec![1.0], Fundamental::Period(1.0))
            .unwrap_err()
            .is_malformed());
        assert!(FourierSpec::new(0.0, vec![1.0], vec![1.0], Fundamental::Period(f64::NAN))
            .unwrap_err()
            .is_malformed());
    }
}
