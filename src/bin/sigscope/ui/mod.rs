//! TUI module for sigscope
//!
//! Lays out the control panels on the left and the plots on the right.

mod controls;
pub mod plots;
pub mod spectrum;
pub mod state;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use sigscope::config::SIGNAL_COUNT;

pub use state::UiState;

use controls::{render_buttons, render_fourier_form, render_signal_panel};
use plots::render_plots;
use spectrum::render_spectrum;
use status::render_status;

/// Width of the control column
const CONTROLS_WIDTH: u16 = 46;

/// Render the whole interface
pub fn render(frame: &mut Frame, state: &UiState) {
    let area = frame.area();

    // Main layout: body, status, help
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Controls + plots
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    // Control column: one panel per signal, the form, the buttons
    let mut constraints = vec![Constraint::Length(6); SIGNAL_COUNT];
    constraints.extend([
        Constraint::Length(6), // Fourier form
        Constraint::Length(1), // Buttons
        Constraint::Min(0),
    ]);
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(columns[0]);

    for index in 0..SIGNAL_COUNT {
        render_signal_panel(frame, panels[index], state, index);
    }
    render_fourier_form(frame, panels[SIGNAL_COUNT], state);
    render_buttons(frame, panels[SIGNAL_COUNT + 1], state);

    // Plot column: charts over spectrum
    let plot_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(columns[1]);

    render_plots(frame, plot_rows[0], &state.plot);
    render_spectrum(frame, plot_rows[1], &state.spectrum);

    render_status(frame, rows[1], state);

    let help = Paragraph::new(
        " [Tab/↑↓] Focus  [←→] Adjust (Shift ×10)  [Space] Toggle  [F5] Signals  [F6] Fourier  [Esc] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[2]);
}
