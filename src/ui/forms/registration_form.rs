//! Registration form rendering

use super::field_renderer::{draw_checkbox, draw_field, FieldProps, InputKind, FIELD_HEIGHT};
use crate::state::{AppState, Control, FieldName, SubmissionStatus, BATCH_OPTIONS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Submit button caption. Display text only; nothing is charged.
pub const SUBMIT_LABEL: &str = "PAY ₹500/MONTH";

const SUCCESS_BANNER: &str = "Payment successful!";
const ERROR_BANNER: &str = "Form submission failed. Please try again.";

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Full name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Birth date
            Constraint::Length(FIELD_HEIGHT),  // Batch
            Constraint::Length(2),             // Terms checkbox
            Constraint::Length(1),             // Status banner
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let active = state.active_control();
    let fields = [
        (FieldName::FullName, InputKind::Text),
        (FieldName::Email, InputKind::Email),
        (FieldName::BirthDate, InputKind::Date),
        (FieldName::SelectedBatch, InputKind::Select(&BATCH_OPTIONS)),
    ];

    for (chunk, (field, kind)) in chunks.iter().zip(fields) {
        let props = FieldProps {
            label: field.label(),
            kind,
            value: state.form.text(field),
            error: state.form_errors.for_field(field),
            is_active: active == Control::Field(field),
        };
        draw_field(frame, *chunk, &props);
    }

    draw_checkbox(
        frame,
        chunks[4],
        FieldName::AgreeTerms.label(),
        state.form.agree_terms,
        state.form_errors.for_field(FieldName::AgreeTerms),
        active == Control::Field(FieldName::AgreeTerms),
    );

    draw_banner(frame, chunks[5], state.submission_status);

    let button_area = Rect {
        width: chunks[6].width.min(24),
        ..chunks[6]
    };
    render_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        active == Control::SubmitButton,
        state.can_submit(),
    );
}

fn draw_banner(frame: &mut Frame, area: Rect, status: SubmissionStatus) {
    let (text, color) = match status {
        SubmissionStatus::Unset => return,
        SubmissionStatus::Success => (SUCCESS_BANNER, Color::Green),
        SubmissionStatus::Error => (ERROR_BANNER, Color::Red),
    };
    let line = Line::from(Span::styled(
        format!(" {text} "),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
