//! Layout components (form area, status bar)

use crate::state::{AppState, Control, FieldName};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, endpoint: &str) {
    let mut spans = vec![];

    // In-flight indicator
    let indicator = if state.is_submitting() {
        Span::styled(" ◌ Submitting… ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_control_hints(state.active_control()),
        Style::default().fg(Color::Gray),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(endpoint, Style::default().fg(Color::Blue)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused control
fn get_control_hints(control: Control) -> &'static str {
    match control {
        Control::Field(FieldName::SelectedBatch) => "←/→:choose  Tab:next  ^S:submit",
        Control::Field(FieldName::AgreeTerms) => "Space:toggle  Tab:next  ^S:submit",
        Control::Field(FieldName::BirthDate) => "YYYY-MM-DD  Tab:next  ^S:submit",
        Control::Field(_) => "type to edit  Tab:next  ^S:submit",
        Control::SubmitButton => "Enter:submit  Tab:next",
    }
}
