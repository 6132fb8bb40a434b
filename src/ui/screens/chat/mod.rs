use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::App;
use crate::ui::notes::{panel_height, render_notes};

pub mod header;
pub mod input;
pub mod thread;

pub fn render_chat_screen(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                   // Header
            Constraint::Length(panel_height(app.state.notes_expanded)), // Notes
            Constraint::Min(3),                                      // Thread
            Constraint::Length(3),                                   // Input
            Constraint::Length(1),                                   // Help
        ])
        .split(area);

    header::render_header(app.client.base_url(), main_layout[0], buf);

    app.notes_max_scroll = render_notes(
        &app.notes,
        app.state.notes_expanded,
        app.state.notes_scroll,
        main_layout[1],
        buf,
    );

    app.thread_max_scroll = thread::render_thread(&app.state, main_layout[2], buf);

    input::render_input(&app.state, main_layout[3], buf);
    input::render_help(main_layout[4], buf);
}
