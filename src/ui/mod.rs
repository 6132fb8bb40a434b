pub mod card;
pub mod format;
pub mod json_table;
pub mod notes;
pub mod screens;
pub mod style;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::App;
use crate::ui::screens::chat::render_chat_screen;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_chat_screen(self, area, buf);
    }
}
