use super::state::{FormState, StatusKind};
use crate::core::{Mode, Storage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const REVERSE_COLOR: Color = Color::Rgb(0x4c, 0xaf, 0x50);
const SAVE_COLOR: Color = Color::Rgb(0x21, 0x96, 0xf3);
const CLEAR_COLOR: Color = Color::Rgb(0xf4, 0x43, 0x36);

pub fn draw<S: Storage>(f: &mut Frame, state: &FormState<S>) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Input
            Constraint::Length(3), // Mode
            Constraint::Length(3), // Actions
            Constraint::Min(5),    // Output
            Constraint::Length(1), // Status
        ])
        .split(size);

    draw_input(f, chunks[0], state);
    draw_mode(f, chunks[1], state.mode());
    draw_actions(f, chunks[2]);
    draw_output(f, chunks[3], state.result());
    draw_status(f, chunks[4], state);

    if let Some(path) = state.save_prompt() {
        draw_save_prompt(f, size, path);
    }
}

fn draw_input<S: Storage>(f: &mut Frame, area: Rect, state: &FormState<S>) {
    let focused = state.save_prompt().is_none();
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut text = state.input().to_string();
    if focused {
        text.push('▏');
    }

    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Enter Text"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input, area);
}

fn draw_mode(f: &mut Frame, area: Rect, mode: Mode) {
    let radio = |option: Mode| {
        let (marker, style) = if option == mode {
            ("(•) ", Style::default().add_modifier(Modifier::BOLD))
        } else {
            ("( ) ", Style::default().fg(Color::Gray))
        };
        Span::styled(format!("{}{}", marker, option.label()), style)
    };

    let line = Line::from(vec![
        radio(Mode::Characters),
        Span::raw("    "),
        radio(Mode::Words),
        Span::styled("    [Tab] switch", Style::default().fg(Color::DarkGray)),
    ]);
    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Mode"));
    f.render_widget(widget, area);
}

fn draw_actions(f: &mut Frame, area: Rect) {
    let button = |label: &'static str, color: Color| {
        Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        button(" Ctrl+R Reverse Text ", REVERSE_COLOR),
        Span::raw("  "),
        button(" Ctrl+S Save to File ", SAVE_COLOR),
        Span::raw("  "),
        button(" Ctrl+L Clear ", CLEAR_COLOR),
        Span::styled("    Esc quit", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_output(f: &mut Frame, area: Rect, result: Option<&str>) {
    let output = Paragraph::new(result.unwrap_or_default().to_string())
        .block(Block::default().borders(Borders::ALL).title("Reversed Text"))
        .wrap(Wrap { trim: false });
    f.render_widget(output, area);
}

fn draw_status<S: Storage>(f: &mut Frame, area: Rect, state: &FormState<S>) {
    let line = match state.status() {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Warning => Color::Yellow,
                StatusKind::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    format!("{}: ", status.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(status.message.clone()),
            ])
        }
        None => Line::from(Span::styled(
            "Type text, pick a mode, then reverse it.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_save_prompt(f: &mut Frame, size: Rect, path: &str) {
    let area = centered_rect(60, 3, size);
    f.render_widget(Clear, area);

    let prompt = Paragraph::new(format!("{}▏", path)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SAVE_COLOR))
            .title("Save As (.txt by default) - Enter to save, Esc to cancel"),
    );
    f.render_widget(prompt, area);
}

/// 置中的彈出視窗區域
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x) / 100) as u16;
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + r.height.saturating_sub(height) / 2,
        width,
        height: height.min(r.height),
    }
}
