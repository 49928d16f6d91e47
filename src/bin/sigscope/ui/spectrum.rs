//! Spectrum widget
//!
//! FFT magnitude spectrum of the headline waveform, scaled so a sinusoid of
//! amplitude A peaks near A.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, FftPlanner};

/// Spectrum analyzer with a cached FFT planner
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f64>>,
}

impl SpectrumAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            scratch: Vec::new(),
        }
    }

    /// Single-sided amplitude spectrum: `(frequency_hz, amplitude)` per bin.
    ///
    /// Returns nothing for fewer than two samples or a non-positive rate.
    pub fn analyze(&mut self, samples: &[f64], sample_rate: f64) -> Vec<(f64, f64)> {
        let len = samples.len();
        if len < 2 || sample_rate <= 0.0 {
            return Vec::new();
        }

        // Hann window - reduces spectral leakage
        let denom = (len - 1) as f64;
        let window = |i: usize| 0.5 * (1.0 - (std::f64::consts::TAU * i as f64 / denom).cos());
        let window_sum: f64 = (0..len).map(window).sum();

        self.scratch.clear();
        self.scratch.extend(
            samples
                .iter()
                .enumerate()
                .map(|(i, &s)| Complex::new(s * window(i), 0.0)),
        );

        let fft = self.planner.plan_fft_forward(len);
        fft.process(&mut self.scratch);

        let bin_width = sample_rate / len as f64;
        let half = len / 2 + 1;
        self.scratch[..half]
            .iter()
            .enumerate()
            .map(|(i, bin)| {
                // DC has no mirrored negative-frequency partner
                let scale = if i == 0 { 1.0 } else { 2.0 };
                (i as f64 * bin_width, scale * bin.norm() / window_sum)
            })
            .collect()
    }
}

/// Render the spectrum widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Spectrum ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_freq = spectrum
        .iter()
        .map(|(f, _)| *f)
        .fold(0.0, f64::max)
        .max(1.0);
    let max_amp = spectrum
        .iter()
        .map(|(_, a)| *a)
        .fold(0.0, f64::max)
        .max(1e-9);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .labels(vec!["0 Hz".to_string(), format!("{max_freq:.0} Hz")])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max_amp * 1.1])
                .labels(vec!["0".to_string(), format!("{max_amp:.2}")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_peaks_at_its_frequency() {
        let rate = 500.0;
        let samples: Vec<f64> = (0..500)
            .map(|i| 5.0 * (std::f64::consts::TAU * 5.0 * i as f64 / rate).cos())
            .collect();

        let mut analyzer = SpectrumAnalyzer::new();
        let spectrum = analyzer.analyze(&samples, rate);
        let (freq, amp) = spectrum
            .iter()
            .copied()
            .fold((0.0, 0.0), |best, p| if p.1 > best.1 { p } else { best });

        assert!((freq - 5.0).abs() < 1.5, "peak at {freq} Hz");
        assert!((amp - 5.0).abs() < 0.5, "peak amplitude {amp}");
    }

    #[test]
    fn too_short_is_empty() {
        let mut analyzer = SpectrumAnalyzer::new();
        assert!(analyzer.analyze(&[1.0], 100.0).is_empty());
        assert!(analyzer.analyze(&[1.0, 2.0], 0.0).is_empty());
    }
}
