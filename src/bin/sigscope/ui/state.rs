//! Interface-owned state
//!
//! All mutable widget state lives here. The engine only ever sees values
//! copied out of it when a plot is requested.

use ratatui::style::Color;
use sigscope::{
    config::SIGNAL_COUNT,
    engine::PlotRequest,
    synth::{SignalControls, SignalParam},
    FourierForm, PlotterConfig, SampleGrid,
};

/// Line colors of the three signal plots.
pub const SIGNAL_COLORS: [Color; SIGNAL_COUNT] = [Color::Blue, Color::Green, Color::Red];
pub const SUM_COLOR: Color = Color::White;
pub const FOURIER_COLOR: Color = Color::Magenta;
/// Slider fill and button background.
pub const ACCENT: Color = Color::Rgb(255, 165, 0);

/// Which control has keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Slider { signal: usize, param: SignalParam },
    Kind { signal: usize },
    A0,
    Ak,
    Bk,
    FundamentalChoice,
    FundamentalValue,
    PlotSignals,
    PlotFourier,
}

impl Focus {
    /// Text fields swallow printable keys.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Focus::A0 | Focus::Ak | Focus::Bk | Focus::FundamentalValue
        )
    }
}

/// Tab order over every focusable control.
pub struct FocusRing {
    order: Vec<Focus>,
    index: usize,
}

impl FocusRing {
    pub fn new() -> Self {
        let mut order = Vec::new();
        for signal in 0..SIGNAL_COUNT {
            for param in SignalParam::ALL {
                order.push(Focus::Slider { signal, param });
            }
            order.push(Focus::Kind { signal });
        }
        order.extend([
            Focus::A0,
            Focus::Ak,
            Focus::Bk,
            Focus::FundamentalChoice,
            Focus::FundamentalValue,
            Focus::PlotSignals,
            Focus::PlotFourier,
        ]);
        Self { order, index: 0 }
    }

    pub fn current(&self) -> Focus {
        self.order[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.order.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.order.len() - 1) % self.order.len();
    }
}

/// One plotted line, ready for a chart.
pub struct Series {
    pub title: String,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
    pub y_bounds: [f64; 2],
}

/// What the plot area currently shows.
pub enum PlotView {
    Empty,
    Signals {
        x_bounds: [f64; 2],
        series: Vec<Series>,
    },
    Fourier {
        x_bounds: [f64; 2],
        series: Series,
    },
}

/// Peak and RMS of the headline waveform (sum or series).
#[derive(Clone, Copy, Debug, Default)]
pub struct PlotStats {
    pub peak: f64,
    pub rms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

pub struct StatusLine {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Complete interface state.
pub struct UiState {
    pub signals: [SignalControls; SIGNAL_COUNT],
    pub form: FourierForm,
    pub focus: FocusRing,
    pub signal_grid: SampleGrid,
    pub fourier_grid: SampleGrid,
    pub plot: PlotView,
    pub stats: Option<PlotStats>,
    /// (frequency Hz, amplitude) of the last plotted headline waveform
    pub spectrum: Vec<(f64, f64)>,
    pub status: StatusLine,
    /// Requests queued on the worker and not answered yet
    pub pending: usize,
}

impl UiState {
    pub fn new(config: PlotterConfig) -> Self {
        Self {
            signals: config.signals,
            form: config.fourier,
            focus: FocusRing::new(),
            signal_grid: config.signal_grid,
            fourier_grid: config.fourier_grid,
            plot: PlotView::Empty,
            stats: None,
            spectrum: Vec::new(),
            status: StatusLine::info("Ready"),
            pending: 0,
        }
    }

    /// Snapshot the signal panels into a request.
    pub fn signals_request(&self) -> PlotRequest {
        PlotRequest::Signals {
            specs: self.signals.iter().map(SignalControls::to_spec).collect(),
            grid: self.signal_grid,
        }
    }

    /// Snapshot the Fourier form into a request.
    pub fn fourier_request(&self) -> PlotRequest {
        PlotRequest::Fourier {
            form: self.form.clone(),
            grid: self.fourier_grid,
        }
    }

    /// Text buffer behind a text-field focus.
    pub fn text_field_mut(&mut self, focus: Focus) -> Option<&mut String> {
        match focus {
            Focus::A0 => Some(&mut self.form.a0),
            Focus::Ak => Some(&mut self.form.a_k),
            Focus::Bk => Some(&mut self.form.b_k),
            Focus::FundamentalValue => Some(&mut self.form.parameter_value),
            _ => None,
        }
    }
}
