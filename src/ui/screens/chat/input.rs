use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::chat::ChatState;

pub fn render_input(state: &ChatState, area: Rect, buf: &mut Buffer) {
    let (title, border) = if state.loading {
        (" Sending... ", Style::default().fg(Color::DarkGray))
    } else {
        (" Type your query here (Enter to send) ", Style::default().fg(Color::Yellow))
    };

    // keep the caret in view on long queries
    let width = area.width.saturating_sub(5) as usize;
    let chars: Vec<char> = state.input.chars().collect();
    let visible: String = chars[chars.len().saturating_sub(width)..].iter().collect();

    Paragraph::new(format!("> {}▏", visible))
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
        .fg(Color::Yellow)
        .render(area, buf);
}

pub fn render_help(area: Rect, buf: &mut Buffer) {
    Paragraph::new(
        "Enter: send • Ctrl+A: all properties • Ctrl+L: clear chat • F1: notes • Tab: select card • Ctrl+O: slug • Esc: quit",
    )
    .fg(Color::DarkGray)
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_loading_title() {
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        let state = ChatState {
            loading: true,
            ..ChatState::default()
        };
        render_input(&state, area, &mut buf);
        assert!(row(&buf, 0).contains("Sending..."));
    }

    #[test]
    fn test_long_input_shows_tail() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let state = ChatState {
            input: "2BHK residential apartment in Mulund East".to_string(),
            ..ChatState::default()
        };
        render_input(&state, area, &mut buf);
        assert!(row(&buf, 1).contains("Mulund East"));
    }
}
