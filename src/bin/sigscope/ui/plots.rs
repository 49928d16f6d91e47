//! Plot widgets - stacked signal charts and the Fourier series chart

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use sigscope::{SampleGrid, Waveform};

use super::state::{PlotView, Series};

/// Vertical headroom so peaks don't touch the border
const Y_PADDING: f64 = 0.1;

/// Chart bounds for a waveform: padded, never collapsed to a point.
pub fn y_bounds(waveform: &Waveform) -> [f64; 2] {
    match waveform.bounds() {
        None => [-1.0, 1.0],
        Some((lo, hi)) if (hi - lo).abs() < 1e-9 => [lo - 1.0, hi + 1.0],
        Some((lo, hi)) => {
            let pad = (hi - lo) * Y_PADDING;
            [lo - pad, hi + pad]
        }
    }
}

pub fn x_bounds(grid: &SampleGrid) -> [f64; 2] {
    if grid.end > grid.start {
        [grid.start, grid.end]
    } else {
        [grid.start, grid.start + 1.0]
    }
}

/// Build a chart-ready series from a waveform.
pub fn series(title: impl Into<String>, color: Color, waveform: &Waveform, grid: &SampleGrid) -> Series {
    Series {
        title: title.into(),
        color,
        points: waveform.points(grid),
        y_bounds: y_bounds(waveform),
    }
}

fn series_chart<'a>(series: &'a Series, x_bounds: [f64; 2], x_title: Option<&'a str>) -> Chart<'a> {
    let dataset = Dataset::default()
        .name(series.title.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(series.color))
        .data(&series.points);

    let [lo, hi] = series.y_bounds;
    let mut x_axis = Axis::default()
        .bounds(x_bounds)
        .labels(vec![format!("{:.1}", x_bounds[0]), format!("{:.1}", x_bounds[1])])
        .style(Style::default().fg(Color::DarkGray));
    if let Some(title) = x_title {
        x_axis = x_axis.title(title);
    }

    Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", series.title),
                    Style::default().fg(series.color),
                ))
                .borders(Borders::ALL),
        )
        .x_axis(x_axis)
        .y_axis(
            Axis::default()
                .bounds([lo, hi])
                .labels(vec![format!("{lo:.1}"), format!("{hi:.1}")])
                .style(Style::default().fg(Color::DarkGray)),
        )
}

/// Render whatever the plot area currently holds
pub fn render_plots(frame: &mut Frame, area: Rect, plot: &PlotView) {
    match plot {
        PlotView::Empty => {
            let hint = Paragraph::new("Press F5 to plot the signals or F6 to plot the Fourier series")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(" Plot ").borders(Borders::ALL));
            frame.render_widget(hint, area);
        }
        PlotView::Signals { x_bounds, series } => {
            if series.is_empty() {
                return;
            }
            let constraints = vec![Constraint::Ratio(1, series.len() as u32); series.len()];
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(area);

            let last = series.len() - 1;
            for (i, (s, chunk)) in series.iter().zip(chunks.iter()).enumerate() {
                let x_title = (i == last).then_some("Time [s]");
                frame.render_widget(series_chart(s, *x_bounds, x_title), *chunk);
            }
        }
        PlotView::Fourier { x_bounds, series } => {
            frame.render_widget(series_chart(series, *x_bounds, Some("Time [s]")), area);
        }
    }
}
