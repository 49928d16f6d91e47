//! Status bar widget - shows the last diagnostic, plot stats, and grid info

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::state::{StatusLevel, UiState};

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default()
        .title(" sigscope ")
        .borders(Borders::ALL);

    let (symbol, color) = match state.status.level {
        StatusLevel::Info => ("●", Color::Green),
        StatusLevel::Error => ("✖", Color::Red),
    };

    let mut spans = vec![Span::styled(
        format!(" {symbol} {}  ", state.status.text),
        Style::default().fg(color),
    )];

    if state.pending > 0 {
        spans.push(Span::styled(
            format!("computing… ({} queued)  ", state.pending),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(stats) = state.stats {
        spans.push(Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}  ", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ));
    }

    spans.push(Span::styled(
        format!(
            "signals {}pts/{:.0}s  fourier {}pts/{:.0}s",
            state.signal_grid.len(),
            state.signal_grid.duration(),
            state.fourier_grid.len(),
            state.fourier_grid.duration(),
        ),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
