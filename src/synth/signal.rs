#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::WaveKind;

/// Integer control steps per unit of amplitude or frequency.
pub const CONTROL_SCALE: f64 = 10.0;

/// Upper bound of the amplitude and frequency controls.
pub const LEVEL_CONTROL_MAX: u16 = 100;

/// Upper bound of the phase control, in degrees.
pub const PHASE_CONTROL_MAX: u16 = 360;

/// One periodic signal: `amplitude × kind(2π·frequency·t + phase)`.
///
/// The engine accepts any real values here; the discrete control domain
/// only exists in [`SignalControls`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSpec {
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
    pub phase_degrees: f64,
    pub kind: WaveKind,
}

impl SignalSpec {
    pub fn new(amplitude: f64, frequency: f64, phase_degrees: f64, kind: WaveKind) -> Self {
        Self {
            amplitude,
            frequency,
            phase_degrees,
            kind,
        }
    }

    pub fn sine(amplitude: f64, frequency: f64) -> Self {
        Self::new(amplitude, frequency, 0.0, WaveKind::Sine)
    }

    pub fn cosine(amplitude: f64, frequency: f64) -> Self {
        Self::new(amplitude, frequency, 0.0, WaveKind::Cosine)
    }

    pub fn with_phase(mut self, phase_degrees: f64) -> Self {
        self.phase_degrees = phase_degrees;
        self
    }
}

/// Which slider of a signal panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalParam {
    Amplitude,
    Frequency,
    Phase,
}

impl SignalParam {
    pub const ALL: [SignalParam; 3] = [
        SignalParam::Amplitude,
        SignalParam::Frequency,
        SignalParam::Phase,
    ];

    /// Inclusive upper bound of the control.
    pub fn max(self) -> u16 {
        match self {
            SignalParam::Amplitude | SignalParam::Frequency => LEVEL_CONTROL_MAX,
            SignalParam::Phase => PHASE_CONTROL_MAX,
        }
    }

    /// Divisor turning the control value into the spec value.
    pub fn scale(self) -> f64 {
        match self {
            SignalParam::Amplitude | SignalParam::Frequency => CONTROL_SCALE,
            SignalParam::Phase => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalParam::Amplitude => "Amplitude",
            SignalParam::Frequency => "Frequency",
            SignalParam::Phase => "Phase",
        }
    }
}

/// Integer control state of one signal panel.
///
/// Amplitude and frequency live in `0..=100` and are divided by
/// [`CONTROL_SCALE`]; phase lives in `0..=360` degrees and is used as is.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalControls {
    pub amplitude: u16,
    pub frequency: u16,
    pub phase: u16,
    pub kind: WaveKind,
}

impl SignalControls {
    /// Build controls, clamping each value into its range.
    pub fn new(amplitude: u16, frequency: u16, phase: u16, kind: WaveKind) -> Self {
        Self {
            amplitude: amplitude.min(LEVEL_CONTROL_MAX),
            frequency: frequency.min(LEVEL_CONTROL_MAX),
            phase: phase.min(PHASE_CONTROL_MAX),
            kind,
        }
    }

    pub fn get(&self, param: SignalParam) -> u16 {
        match param {
            SignalParam::Amplitude => self.amplitude,
            SignalParam::Frequency => self.frequency,
            SignalParam::Phase => self.phase,
        }
    }

    /// Set a control, clamped to its range.
    pub fn set(&mut self, param: SignalParam, value: u16) {
        let value = value.min(param.max());
        match param {
            SignalParam::Amplitude => self.amplitude = value,
            SignalParam::Frequency => self.frequency = value,
            SignalParam::Phase => self.phase = value,
        }
    }

    /// Move a control by `delta` steps, saturating at both ends.
    pub fn nudge(&mut self, param: SignalParam, delta: i32) {
        let current = self.get(param) as i32;
        let next = (current + delta).clamp(0, param.max() as i32);
        self.set(param, next as u16);
    }

    /// The control value as the engine sees it.
    pub fn scaled(&self, param: SignalParam) -> f64 {
        self.get(param) as f64 / param.scale()
    }

    pub fn to_spec(&self) -> SignalSpec {
        SignalSpec {
            amplitude: self.scaled(SignalParam::Amplitude),
            frequency: self.scaled(SignalParam::Frequency),
            phase_degrees: self.scaled(SignalParam::Phase),
            kind: self.kind,
        }
    }
}

impl Default for SignalControls {
    fn default() -> Self {
        Self {
            amplitude: 50,
            frequency: 50,
            phase: 0,
            kind: WaveKind::Cosine,
        }
    }
}
