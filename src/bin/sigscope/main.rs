//! sigscope - Terminal signal and Fourier series plotter
//!
//! Run with: cargo run
//!
//! Set `SIGSCOPE_LOG=<file>` to write logs (filtered by `RUST_LOG`), and
//! `SIGSCOPE_INLINE=1` to evaluate on the UI thread instead of a worker.

mod app;
mod ui;

use app::SignalPlotter;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use sigscope::{FourierForm, SampleGrid, SignalControls};

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    // Three cosines at amplitude 5, 5 Hz; empty Fourier form
    let mut plotter = SignalPlotter::new()
        .signal_grid(SampleGrid::SIGNALS)
        .fourier_grid(SampleGrid::FOURIER)
        .fourier_form(FourierForm::default())
        .offload(std::env::var_os("SIGSCOPE_INLINE").is_none());
    for index in 0..sigscope::config::SIGNAL_COUNT {
        plotter = plotter.signal(index, SignalControls::default());
    }

    plotter.run()
}

/// Route `log` output to a file; the terminal belongs to the UI.
fn init_logging() -> EyreResult<()> {
    let Some(path) = std::env::var_os("SIGSCOPE_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;

    log::info!("sigscope {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
