// Purpose: command layer between an interface and the pure evaluators
// Every failure is caught here and turned into a response

pub mod message;
#[cfg(feature = "rtrb")]
pub mod worker;

use log::{debug, warn};

use crate::{
    dsp::oscillator,
    error::{EngineError, EngineResult},
    fourier::{self, FourierSpec},
    sampling::SampleGrid,
    synth::{self, SignalSpec},
};

pub use message::{PlotRequest, PlotResponse, RequestKind, RequestReceiver};
#[cfg(feature = "rtrb")]
pub use worker::EngineWorker;

/// Run one request to completion on the calling thread.
///
/// Never panics on bad input: rejected requests come back as
/// [`PlotResponse::Failed`] and are logged at `warn`.
pub fn process(request: PlotRequest) -> PlotResponse {
    let kind = request.kind();
    let result = match request {
        PlotRequest::Signals { specs, grid } => check_signals(&specs, &grid).map(|()| {
            debug!("synthesizing {} signals on {} points", specs.len(), grid.len());
            PlotResponse::Signals {
                grid,
                synthesis: synth::synthesize(&specs, &grid),
            }
        }),
        PlotRequest::Fourier { form, grid } => form
            .parse()
            .and_then(|spec| check_series(&spec, &grid).map(|()| spec))
            .map(|spec| {
                debug!(
                    "evaluating {} harmonics, w0 = {}, on {} points",
                    spec.harmonics(),
                    spec.fundamental().w0(),
                    grid.len()
                );
                let waveform = fourier::evaluate(&spec, &grid);
                PlotResponse::Fourier {
                    grid,
                    spec,
                    waveform,
                }
            }),
    };

    result.unwrap_or_else(|error| {
        warn!("{} failed: {error}", kind.label());
        PlotResponse::Failed {
            request: kind,
            error,
        }
    })
}

fn check_grid(grid: &SampleGrid) -> EngineResult<f64> {
    if !grid.start.is_finite() || !grid.end.is_finite() {
        return Err(EngineError::invalid(
            "grid",
            format!("bounds must be finite, found {}..{}", grid.start, grid.end),
        ));
    }
    Ok(grid.start.abs().max(grid.end.abs()))
}

/// Signals built from controls are always finite; hand-built ones may not be,
/// and a finite frequency can still overflow the angle 2π·f·t on a long grid.
fn check_signals(specs: &[SignalSpec], grid: &SampleGrid) -> EngineResult<()> {
    let reach = check_grid(grid)?;
    let mut headroom = 0.0f64;
    for (i, spec) in specs.iter().enumerate() {
        let fields = [
            ("amplitude", spec.amplitude),
            ("frequency", spec.frequency),
            ("phase", spec.phase_degrees),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::invalid(
                format!("{name} {}", i + 1),
                format!("must be finite, found {value}"),
            ));
        }
        let angle = oscillator::angle_at(spec.frequency.abs(), spec.phase_degrees.abs(), reach);
        if !angle.is_finite() {
            return Err(EngineError::invalid(
                format!("frequency {}", i + 1),
                format!("{} Hz overflows the phase at t = {reach}", spec.frequency),
            ));
        }
        headroom += spec.amplitude.abs();
    }
    if !headroom.is_finite() {
        return Err(EngineError::invalid("amplitude", "sum of amplitudes overflows"));
    }
    Ok(())
}

/// The highest harmonic's angle K·w0·t and the coefficient total bound every sample.
fn check_series(spec: &FourierSpec, grid: &SampleGrid) -> EngineResult<()> {
    let reach = check_grid(grid)?;
    let fundamental = spec.fundamental();
    let angle = spec.harmonics() as f64 * fundamental.w0().abs() * reach;
    if !angle.is_finite() {
        return Err(EngineError::invalid(
            fundamental.name(),
            format!(
                "harmonic {} overflows the phase at t = {reach}",
                spec.harmonics()
            ),
        ));
    }
    let headroom = spec
        .a_k()
        .iter()
        .chain(spec.b_k())
        .fold(spec.a0().abs() / 2.0, |acc, c| acc + c.abs());
    if !headroom.is_finite() {
        return Err(EngineError::invalid("a_k/b_k", "sum of coefficients overflows"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fourier::{FourierForm, FundamentalKind},
        sampling::SampleGrid,
        synth::SignalControls,
    };

    fn signals_request() -> PlotRequest {
        PlotRequest::Signals {
            specs: vec![SignalControls::default().to_spec(); 3],
            grid: SampleGrid::SIGNALS,
        }
    }

    #[test]
    fn signals_request_yields_four_series() {
        match process(signals_request()) {
            PlotResponse::Signals { grid, synthesis } => {
                assert_eq!(grid, SampleGrid::SIGNALS);
                assert_eq!(synthesis.series_count(), 4);
                assert_eq!(synthesis.sum.samples()[0], 15.0);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn bad_form_fails_without_panicking() {
        let request = PlotRequest::Fourier {
            form: FourierForm::new("x", "1,2,3", "1,2,3", FundamentalKind::W0, "1"),
            grid: SampleGrid::FOURIER,
        };
        match process(request) {
            PlotResponse::Failed { request, error } => {
                assert_eq!(request, RequestKind::Fourier);
                assert!(error.is_malformed());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn non_finite_signal_is_rejected() {
        let request = PlotRequest::Signals {
            specs: vec![SignalSpec::cosine(1.0, f64::NAN)],
            grid: SampleGrid::SIGNALS,
        };
        match process(request) {
            PlotResponse::Failed { request, error } => {
                assert_eq!(request, RequestKind::Signals);
                assert!(error.is_invalid_parameter());
                assert!(error.to_string().contains("frequency 1"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn overflowing_frequency_is_rejected() {
        let request = PlotRequest::Signals {
            specs: vec![SignalSpec::cosine(1.0, 1.0), SignalSpec::sine(1.0, 1e308)],
            grid: SampleGrid::SIGNALS,
        };
        match process(request) {
            PlotResponse::Failed { error, .. } => {
                assert!(error.is_invalid_parameter());
                assert!(error.to_string().contains("frequency 2"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn overflowing_amplitude_sum_is_rejected() {
        let request = PlotRequest::Signals {
            specs: vec![SignalSpec::cosine(f64::MAX, 1.0); 2],
            grid: SampleGrid::SIGNALS,
        };
        assert!(matches!(process(request), PlotResponse::Failed { .. }));
    }

    #[test]
    fn overflowing_harmonic_angle_is_rejected() {
        // 3 · 1e307 · 20 does not fit in an f64
        let request = PlotRequest::Fourier {
            form: FourierForm::new("0", "1,0,0", "0,0,0", FundamentalKind::W0, "1e307"),
            grid: SampleGrid::FOURIER,
        };
        match process(request) {
            PlotResponse::Failed { request, error } => {
                assert_eq!(request, RequestKind::Fourier);
                assert!(error.is_invalid_parameter());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn non_finite_grid_is_rejected() {
        let request = PlotRequest::Signals {
            specs: vec![SignalSpec::cosine(1.0, 1.0)],
            grid: SampleGrid::new(0.0, f64::INFINITY, 10),
        };
        assert!(matches!(process(request), PlotResponse::Failed { .. }));
    }
}
