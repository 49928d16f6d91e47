//! Closed-form periodic waveforms evaluated at absolute time.

/*
Sinusoidal Oscillators
======================

Every signal this crate draws is a sinusoid: a single frequency with no
harmonics. The only choice is whether the wave starts at its peak (cosine)
or at its zero crossing (sine).

Vocabulary
----------

  amplitude   Peak value of the wave. The output swings between -A and +A.

  frequency   Cycles per second (Hz). One full cycle takes 1/f seconds.

  phase       Where in the cycle the wave starts at t = 0. Users think in
              degrees (0 to 360), the trig functions want radians.

  angle       The argument handed to sin/cos:

                  angle(t) = 2π × f × t + radians(phase)


Sine vs Cosine
--------------

Cosine is sine shifted a quarter cycle earlier:

    cos(x) = sin(x + π/2)

  Value
    A ┐╲              ╱  ← cosine starts at the peak
      │ ╲            ╱
    0 ┼──╲────────╱───   ← sine starts here, rising
      │   ╲      ╱
   -A ┘    ╲____╱
      t = 0

So a 90° phase offset on a sine reproduces a cosine. The two kinds stay
separate because that is how the controls present them.


Absolute Time, Not Phase Accumulation
-------------------------------------

Realtime oscillators step a phase accumulator sample by sample. Here the
time grid is known up front and possibly uneven in origin, so every sample
is evaluated directly from t. No state carries between samples, which keeps
each evaluation independent and the whole computation pure.
*/

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which trig function drives a signal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveKind {
    Sine,
    #[default]
    Cosine,
}

impl WaveKind {
    /// Evaluate the unit-amplitude wave at `angle` radians.
    #[inline]
    pub fn eval(self, angle: f64) -> f64 {
        match self {
            WaveKind::Sine => angle.sin(),
            WaveKind::Cosine => angle.cos(),
        }
    }

    /// The other kind. Used by the two-way selector.
    pub fn toggled(self) -> Self {
        match self {
            WaveKind::Sine => WaveKind::Cosine,
            WaveKind::Cosine => WaveKind::Sine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WaveKind::Sine => "Sinus",
            WaveKind::Cosine => "Cosinus",
        }
    }
}

/// Angle of a sinusoid at time `t`: 2π·f·t + radians(phase).
#[inline]
pub fn angle_at(frequency: f64, phase_degrees: f64, t: f64) -> f64 {
    TAU * frequency * t + phase_degrees.to_radians()
}

/// Fill `out` with `amplitude × kind(angle_at(frequency, phase, t))` for each `t`.
///
/// `out` and `times` are walked in lockstep; extra entries in either are
/// left alone.
pub fn render<I>(
    out: &mut [f64],
    times: I,
    amplitude: f64,
    frequency: f64,
    phase_degrees: f64,
    kind: WaveKind,
) where
    I: IntoIterator<Item = f64>,
{
    for (sample, t) in out.iter_mut().zip(times) {
        *sample = amplitude * kind.eval(angle_at(frequency, phase_degrees, t));
    }
}
