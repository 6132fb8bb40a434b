use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::style::ACCENT;

pub fn render_header(endpoint: &str, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(endpoint_width(endpoint))])
        .split(inner);

    Paragraph::new(Line::from(vec![
        Span::styled("🏡 Property Finder", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(
            "  Your smart partner for effortless property discovery.",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .render(columns[0], buf);

    Paragraph::new(endpoint.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .render(columns[1], buf);
}

fn endpoint_width(endpoint: &str) -> u16 {
    u16::try_from(endpoint.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}
