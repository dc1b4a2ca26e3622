//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::state::AppState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, endpoint: &str) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, main_area, state);

    layout::draw_status_bar(frame, status_area, state, endpoint);
}
