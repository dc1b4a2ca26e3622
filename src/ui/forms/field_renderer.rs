//! Field rendering utilities for forms
//!
//! Rendering here is a pure function of [`FieldProps`]: no state is kept and
//! no validation happens.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed by one field: bordered input plus an error line
pub const FIELD_HEIGHT: u16 = 4;

/// How a field's value is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind<'a> {
    Text,
    Email,
    Date,
    /// Dropdown over the given options; the first one is the placeholder
    Select(&'a [&'a str]),
}

/// Everything the renderer needs to draw one field
#[derive(Debug, Clone, Copy)]
pub struct FieldProps<'a> {
    pub label: &'a str,
    pub kind: InputKind<'a>,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a labelled input or dropdown with its inline error beneath
pub fn draw_field(frame: &mut Frame, area: Rect, props: &FieldProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let value_style = if props.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match props.kind {
        InputKind::Select(options) => select_line(props, options, value_style),
        InputKind::Text | InputKind::Email | InputKind::Date => input_line(props, value_style),
    };

    let block = Block::default()
        .title(format!(" {} ", props.label))
        .borders(Borders::ALL)
        .border_style(border_style(props.is_active, props.error.is_some()));

    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(error) = props.error {
        draw_error(frame, chunks[1], error);
    }
}

fn input_line<'a>(props: &FieldProps<'a>, style: Style) -> Line<'a> {
    let placeholder = match props.kind {
        InputKind::Date => "YYYY-MM-DD",
        _ => "(empty)",
    };

    if props.value.is_empty() && !props.is_active {
        return Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
    }

    let cursor = if props.is_active { "▌" } else { "" };
    Line::from(vec![
        Span::styled(props.value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn select_line<'a>(props: &FieldProps<'a>, options: &[&str], style: Style) -> Line<'a> {
    let is_placeholder = options.first().is_some_and(|first| *first == props.value);
    let value_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    let position = options
        .iter()
        .position(|option| *option == props.value)
        .map(|index| format!("  ({}/{})", index, options.len().saturating_sub(1)))
        .unwrap_or_default();

    let arrow_style = if props.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(props.value, value_style),
        Span::styled(" ▶", arrow_style),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ])
}

/// Draw a checkbox with its label and inline error
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    error: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(label.to_string(), style),
    ]);
    frame.render_widget(Paragraph::new(line), chunks[0]);

    if let Some(error) = error {
        draw_error(frame, chunks[1], error);
    }
}

fn draw_error(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
