//! SignalPlotter - main application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use ratatui::DefaultTerminal;
use std::time::Duration;

#[cfg(feature = "rtrb")]
use sigscope::engine::EngineWorker;
use sigscope::{
    config::SIGNAL_COUNT,
    engine::{self, PlotRequest, PlotResponse},
    FourierForm, PlotterConfig, SampleGrid, SignalControls, WaveKind,
};

use super::ui::{
    self,
    plots::{series, x_bounds},
    spectrum::SpectrumAnalyzer,
    state::{
        Focus, PlotStats, PlotView, StatusLine, FOURIER_COLOR, SIGNAL_COLORS, SUM_COLOR,
    },
    UiState,
};

/// Requests the worker may hold at once
#[cfg(feature = "rtrb")]
const ENGINE_QUEUE: usize = 4;

/// Main application builder
pub struct SignalPlotter {
    config: PlotterConfig,
    offload: bool,
}

impl SignalPlotter {
    /// Create a plotter with the stock grids and three default signals
    pub fn new() -> Self {
        Self {
            config: PlotterConfig::default(),
            offload: cfg!(feature = "rtrb"),
        }
    }

    /// Grid the signals and their sum are sampled on
    pub fn signal_grid(mut self, grid: SampleGrid) -> Self {
        self.config.signal_grid = grid;
        self
    }

    /// Grid the Fourier series is sampled on
    pub fn fourier_grid(mut self, grid: SampleGrid) -> Self {
        self.config.fourier_grid = grid;
        self
    }

    /// Initial controls of signal panel `index` (ignored when out of range)
    pub fn signal(mut self, index: usize, controls: SignalControls) -> Self {
        if let Some(slot) = self.config.signals.get_mut(index) {
            *slot = controls;
        }
        self
    }

    /// Initial contents of the Fourier form
    pub fn fourier_form(mut self, form: FourierForm) -> Self {
        self.config.fourier = form;
        self
    }

    /// Evaluate on a background worker instead of the UI thread
    ///
    /// Without the `rtrb` feature this is always inline.
    pub fn offload(mut self, offload: bool) -> Self {
        self.offload = offload && cfg!(feature = "rtrb");
        self
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let mut app = App::new(self.config, self.offload)?;
        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();
        result
    }
}

impl Default for SignalPlotter {
    fn default() -> Self {
        Self::new()
    }
}

/// Where requests are evaluated
enum Dispatch {
    Inline,
    #[cfg(feature = "rtrb")]
    Worker(EngineWorker),
}

/// What a key press asks for
#[derive(Debug, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    Plot(PlotKind),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum PlotKind {
    Signals,
    Fourier,
}

struct App {
    state: UiState,
    dispatch: Dispatch,
    analyzer: SpectrumAnalyzer,
    should_quit: bool,
}

impl App {
    fn new(config: PlotterConfig, offload: bool) -> EyreResult<Self> {
        let dispatch = if offload {
            spawn_worker()?
        } else {
            Dispatch::Inline
        };
        Ok(Self {
            state: UiState::new(config),
            dispatch,
            analyzer: SpectrumAnalyzer::new(),
            should_quit: false,
        })
    }

    /// Run the UI event loop
    fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_engine();

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .wrap_err("failed to draw frame")?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key) {
                            Action::None => {}
                            Action::Quit => self.should_quit = true,
                            Action::Plot(kind) => self.request_plot(kind),
                        }
                    }
                }
            }
        }

        info!("quit");
        Ok(())
    }

    /// Collect finished responses from the worker, in order
    fn poll_engine(&mut self) {
        #[cfg(feature = "rtrb")]
        {
            let mut responses = Vec::new();
            if let Dispatch::Worker(worker) = &mut self.dispatch {
                while let Some(response) = worker.try_recv() {
                    responses.push(response);
                }
                self.state.pending = worker.in_flight();
            }
            for response in responses {
                self.apply(response);
            }
        }
    }

    fn request_plot(&mut self, kind: PlotKind) {
        let request = match kind {
            PlotKind::Signals => self.state.signals_request(),
            PlotKind::Fourier => self.state.fourier_request(),
        };
        self.dispatch(request);
    }

    fn dispatch(&mut self, request: PlotRequest) {
        #[cfg(feature = "rtrb")]
        if let Dispatch::Worker(worker) = &mut self.dispatch {
            match worker.submit(request) {
                Ok(()) => self.state.pending = worker.in_flight(),
                Err(request) => {
                    self.state.status = StatusLine::error(format!(
                        "{} ignored: engine is still busy",
                        request.kind().label()
                    ));
                }
            }
            return;
        }

        let response = engine::process(request);
        self.apply(response);
    }

    /// Store a response; failures only touch the status line
    fn apply(&mut self, response: PlotResponse) {
        match response {
            PlotResponse::Signals { grid, synthesis } => {
                let mut lines: Vec<_> = synthesis
                    .signals
                    .iter()
                    .enumerate()
                    .map(|(i, w)| {
                        let color = SIGNAL_COLORS[i % SIGNAL_COLORS.len()];
                        series(format!("Signal {}", i + 1), color, w, &grid)
                    })
                    .collect();
                lines.push(series("Synthesized Signal", SUM_COLOR, &synthesis.sum, &grid));

                self.state.stats = Some(PlotStats {
                    peak: synthesis.sum.peak(),
                    rms: synthesis.sum.rms(),
                });
                self.state.spectrum = grid
                    .sample_rate()
                    .map(|rate| self.analyzer.analyze(synthesis.sum.samples(), rate))
                    .unwrap_or_default();
                self.state.plot = PlotView::Signals {
                    x_bounds: x_bounds(&grid),
                    series: lines,
                };
                self.state.status =
                    StatusLine::info(format!("Plotted {} signals", synthesis.signals.len()));
            }
            PlotResponse::Fourier {
                grid,
                spec,
                waveform,
            } => {
                self.state.stats = Some(PlotStats {
                    peak: waveform.peak(),
                    rms: waveform.rms(),
                });
                self.state.spectrum = grid
                    .sample_rate()
                    .map(|rate| self.analyzer.analyze(waveform.samples(), rate))
                    .unwrap_or_default();
                self.state.plot = PlotView::Fourier {
                    x_bounds: x_bounds(&grid),
                    series: series("Fourier Series", FOURIER_COLOR, &waveform, &grid),
                };
                let fundamental = spec.fundamental();
                self.state.status = StatusLine::info(format!(
                    "Fourier series: {} harmonics, w0 = {:.4}, T = {:.4}",
                    spec.harmonics(),
                    fundamental.w0(),
                    fundamental.period()
                ));
            }
            PlotResponse::Failed { request, error } => {
                self.state.status =
                    StatusLine::error(format!("{}: an error occurred: {error}", request.label()));
            }
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let focus = self.state.focus.current();
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            10
        } else {
            1
        };

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab | KeyCode::Down => self.state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus.prev(),
            KeyCode::F(5) => return Action::Plot(PlotKind::Signals),
            KeyCode::F(6) => return Action::Plot(PlotKind::Fourier),
            KeyCode::Left | KeyCode::Right => {
                let delta = if key.code == KeyCode::Left { -step } else { step };
                self.adjust(focus, delta);
            }
            KeyCode::Enter => {
                return match focus {
                    Focus::PlotSignals => Action::Plot(PlotKind::Signals),
                    Focus::PlotFourier => Action::Plot(PlotKind::Fourier),
                    f if f.is_text() => Action::Plot(PlotKind::Fourier),
                    _ => Action::None,
                };
            }
            KeyCode::Backspace => {
                if let Some(text) = self.state.text_field_mut(focus) {
                    text.pop();
                }
            }
            KeyCode::Char(c) if focus.is_text() => {
                if let Some(text) = self.state.text_field_mut(focus) {
                    text.push(c);
                }
            }
            KeyCode::Char(' ') => self.toggle(focus),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
            KeyCode::Char('p') => return Action::Plot(PlotKind::Signals),
            KeyCode::Char('f') => return Action::Plot(PlotKind::Fourier),
            KeyCode::Char('s') => self.set_kind(focus, WaveKind::Sine),
            KeyCode::Char('c') => self.set_kind(focus, WaveKind::Cosine),
            _ => {}
        }
        Action::None
    }

    fn adjust(&mut self, focus: Focus, delta: i32) {
        match focus {
            Focus::Slider { signal, param } => self.state.signals[signal].nudge(param, delta),
            Focus::Kind { .. } | Focus::FundamentalChoice => self.toggle(focus),
            _ => {}
        }
    }

    fn toggle(&mut self, focus: Focus) {
        match focus {
            Focus::Kind { signal } => {
                let controls = &mut self.state.signals[signal];
                controls.kind = controls.kind.toggled();
            }
            Focus::FundamentalChoice => {
                self.state.form.parameter = self.state.form.parameter.toggled();
            }
            _ => {}
        }
    }

    fn set_kind(&mut self, focus: Focus, kind: WaveKind) {
        if let Focus::Kind { signal } = focus {
            if signal < SIGNAL_COUNT {
                self.state.signals[signal].kind = kind;
            }
        }
    }
}

#[cfg(feature = "rtrb")]
fn spawn_worker() -> EyreResult<Dispatch> {
    let worker = EngineWorker::spawn(ENGINE_QUEUE).wrap_err("failed to start engine worker")?;
    Ok(Dispatch::Worker(worker))
}

#[cfg(not(feature = "rtrb"))]
fn spawn_worker() -> EyreResult<Dispatch> {
    Ok(Dispatch::Inline)
}
