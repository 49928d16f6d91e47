//! Control panel widgets - signal sliders, the Fourier form, and the plot buttons

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sigscope::{synth::SignalParam, SignalControls, WaveKind};

use super::state::{Focus, UiState, ACCENT, SIGNAL_COLORS};

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 20;

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Orange fill up to the handle, plain track after it.
fn slider_track(value: u16, max: u16) -> Vec<Span<'static>> {
    let fraction = if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    };
    let handle = ((fraction * (TRACK_WIDTH - 1) as f64).round() as usize).min(TRACK_WIDTH - 1);
    vec![
        Span::styled("━".repeat(handle), Style::default().fg(ACCENT)),
        Span::styled("●", Style::default().fg(Color::White)),
        Span::styled(
            "─".repeat(TRACK_WIDTH - 1 - handle),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn slider_line(index: usize, controls: &SignalControls, param: SignalParam, focused: bool) -> Line<'static> {
    let label = format!(
        "{:<18}",
        format!("{} {}: {}", param.label(), index + 1, controls.scaled(param))
    );
    let mut spans = vec![Span::styled(label, focus_style(focused)), Span::raw(" ")];
    spans.extend(slider_track(controls.get(param), param.max()));
    Line::from(spans)
}

fn kind_line(index: usize, kind: WaveKind, focused: bool) -> Line<'static> {
    let choice = |k: WaveKind| {
        let mark = if k == kind { "(•)" } else { "( )" };
        format!("{mark} {}  ", k.label())
    };
    Line::from(vec![
        Span::styled(format!("Signal Type {}: ", index + 1), focus_style(focused)),
        Span::raw(choice(WaveKind::Sine)),
        Span::raw(choice(WaveKind::Cosine)),
    ])
}

/// Render one signal panel (three sliders and the wave selector)
pub fn render_signal_panel(frame: &mut Frame, area: Rect, state: &UiState, index: usize) {
    let focus = state.focus.current();
    let controls = &state.signals[index];

    let block = Block::default()
        .title(Span::styled(
            format!(" Signal {} ", index + 1),
            Style::default().fg(SIGNAL_COLORS[index]),
        ))
        .borders(Borders::ALL);

    let mut lines: Vec<Line> = SignalParam::ALL
        .iter()
        .map(|&param| {
            let focused = focus == Focus::Slider { signal: index, param };
            slider_line(index, controls, param, focused)
        })
        .collect();
    lines.push(kind_line(
        index,
        controls.kind,
        focus == Focus::Kind { signal: index },
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn text_line<'a>(label: &'a str, value: &'a str, placeholder: Option<String>, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(label, focus_style(focused))];
    if value.is_empty() {
        if let Some(hint) = placeholder {
            spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        }
    } else {
        spans.push(Span::raw(value));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Render the Fourier coefficient form
pub fn render_fourier_form(frame: &mut Frame, area: Rect, state: &UiState) {
    let focus = state.focus.current();
    let form = &state.form;

    let block = Block::default()
        .title(" Fourier Series ")
        .borders(Borders::ALL);

    let chooser = Line::from(vec![
        Span::styled(
            format!("< {:^3} >", form.parameter.label()),
            focus_style(focus == Focus::FundamentalChoice),
        ),
        Span::raw(" "),
    ]);
    let mut value_line = text_line(
        "",
        &form.parameter_value,
        Some(form.parameter.placeholder()),
        focus == Focus::FundamentalValue,
    );
    let mut fundamental_spans = chooser.spans;
    fundamental_spans.append(&mut value_line.spans);

    let lines = vec![
        text_line("a0: ", &form.a0, None, focus == Focus::A0),
        text_line("a1, a2, a3 : ", &form.a_k, None, focus == Focus::Ak),
        text_line("b1, b2, b3 : ", &form.b_k, None, focus == Focus::Bk),
        Line::from(fundamental_spans),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!(" {label} "), style)
}

/// Render the two plot buttons
pub fn render_buttons(frame: &mut Frame, area: Rect, state: &UiState) {
    let focus = state.focus.current();
    let line = Line::from(vec![
        button("Plot Signals [F5]", focus == Focus::PlotSignals),
        Span::raw("  "),
        button("Plot Fourier Series [F6]", focus == Focus::PlotFourier),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
