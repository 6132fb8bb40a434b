// src/ui/screens/chat/thread.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::chat::{CardRef, ChatState, Message, Role};
use crate::ui::card::card_lines;
use crate::ui::format::is_truthy;
use crate::ui::json_table::table_lines;
use crate::ui::style::{role_label, role_style, section_style};

pub const EMPTY_HINT: &str = "No messages yet. Ask something and press Enter.";
pub const NO_PROPERTIES: &str = "No properties returned.";

const BODY_INDENT: &str = "  ";
const SECTION_INDENT: &str = "    ";

/// Every line of the thread, oldest message first.
pub fn thread_lines(state: &ChatState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, message) in state.messages.iter().enumerate() {
        push_message(state, index, message, &mut lines);
        lines.push(Line::from(""));
    }
    lines
}

fn push_message(state: &ChatState, index: usize, message: &Message, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled(role_label(message.role), role_style(message.role)),
        Span::styled(
            format!("  {}", message.sent_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let content_style = match message.role {
        Role::User => Style::default().fg(Color::White),
        Role::Bot if message.content.starts_with("Error: ") => Style::default().fg(Color::Red),
        Role::Bot => Style::default().fg(Color::Gray),
    };
    for line in message.content.lines() {
        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(line.to_string(), content_style),
        ]));
    }

    let Some(raw) = (message.role == Role::Bot).then_some(message.raw.as_ref()).flatten() else {
        return;
    };

    if let Some(filters) = raw.extracted_filters.as_ref().filter(|v| is_truthy(v)) {
        lines.push(section("Extracted Filters"));
        lines.extend(table_lines(filters).into_iter().map(indented));
    }

    if let Some(summary) = raw.summary_text() {
        lines.push(section("Summary"));
        for line in summary.lines() {
            lines.push(Line::from(vec![Span::raw(SECTION_INDENT), Span::raw(line.to_string())]));
        }
    }

    if let Some(cards) = &raw.cards {
        lines.push(section(&format!("Cards ({})", cards.len())));
        if cards.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(SECTION_INDENT),
                Span::styled(NO_PROPERTIES, Style::default().fg(Color::DarkGray)),
            ]));
        }
        for (i, card) in cards.iter().enumerate() {
            let card_ref = CardRef::new(index, i);
            lines.extend(card_lines(
                card,
                i + 1,
                state.is_selected(card_ref),
                state.is_expanded(card_ref),
            ));
        }
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(BODY_INDENT),
        Span::styled(title.to_string(), section_style().add_modifier(Modifier::UNDERLINED)),
    ])
}

fn indented(line: Line<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(SECTION_INDENT)];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Renders the thread pinned to the newest output unless scrolled up.
/// Returns the largest useful `scroll_from_bottom` for this area.
pub fn render_thread(state: &ChatState, area: Rect, buf: &mut Buffer) -> usize {
    let block = Block::bordered().border_type(BorderType::Rounded);

    if state.messages.is_empty() {
        Paragraph::new(EMPTY_HINT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block.title(" Chat "))
            .render(area, buf);
        return 0;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2);
    let mut lines = thread_lines(state);
    let total = Paragraph::new(lines.clone())
        .wrap(Wrap { trim: false })
        .line_count(inner_width);
    let max_scroll = total.saturating_sub(inner_height);
    let offset = state.scroll_from_bottom.min(max_scroll);

    let (skip, top) = drop_leading_lines(&lines, max_scroll - offset, inner_width, u16::MAX as usize);
    lines.drain(..skip);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let top = top.min(u16::MAX as usize) as u16;

    let title = if offset == 0 {
        format!(" Chat ({} messages) ", state.messages.len())
    } else {
        format!(" Chat ({} messages) ↑{} • End: latest ", state.messages.len(), offset)
    };

    paragraph.block(block.title(title)).scroll((top, 0)).render(area, buf);
    max_scroll
}

/// `Paragraph::scroll` stops at `u16::MAX`. Whole leading lines are dropped
/// until the remaining offset fits under `limit`.
fn drop_leading_lines(lines: &[Line<'static>], mut top: usize, width: u16, limit: usize) -> (usize, usize) {
    let mut skip = 0;
    while top > limit && skip < lines.len() {
        let height = Paragraph::new(lines[skip].clone())
            .wrap(Wrap { trim: false })
            .line_count(width);
        if height > top {
            break;
        }
        top -= height;
        skip += 1;
    }
    (skip, top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Card, SearchResponse};
    use serde_json::{json, Value};

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_bot_message_sections() {
        let response = SearchResponse {
            extracted_filters: Some(json!({ "bhk": 2, "locality": "Ghatkopar East" })),
            summary: Some("One match".to_string()),
            cards: Some(vec![Card {
                project_name: Some(json!("Om Makarand Heights")),
                ..Card::default()
            }]),
        };
        let state = ChatState {
            messages: vec![
                Message::user("2BHK Ghatkopar"),
                Message::bot("One match", Some(response)),
            ],
            ..ChatState::default()
        };

        let rendered = text(&thread_lines(&state));
        assert!(rendered.contains("You"));
        assert!(rendered.contains("Assistant"));
        assert!(rendered.contains("Extracted Filters"));
        assert!(rendered.contains("locality │ Ghatkopar East"));
        assert!(rendered.contains("Summary"));
        assert!(rendered.contains("Cards (1)"));
        assert!(rendered.contains("1. Om Makarand Heights"));
    }

    #[test]
    fn test_empty_card_list_still_has_section() {
        let state = ChatState {
            messages: vec![Message::bot("Here are all available properties:", Some(SearchResponse::from_cards(vec![])))],
            ..ChatState::default()
        };
        let rendered = text(&thread_lines(&state));
        assert!(rendered.contains("Cards (0)"));
        assert!(rendered.contains(NO_PROPERTIES));
        assert!(!rendered.contains("Summary"));
    }

    #[test]
    fn test_falsy_filters_are_hidden() {
        for filters in [json!(false), json!(0), json!(""), Value::Null] {
            let response = SearchResponse {
                extracted_filters: Some(filters),
                summary: Some("Nothing parsed".to_string()),
                ..SearchResponse::default()
            };
            let state = ChatState {
                messages: vec![Message::bot("Nothing parsed", Some(response))],
                ..ChatState::default()
            };
            let rendered = text(&thread_lines(&state));
            assert!(!rendered.contains("Extracted Filters"));
            assert!(rendered.contains("Summary"));
        }
    }

    #[test]
    fn test_error_message_has_no_sections() {
        let state = ChatState {
            messages: vec![Message::error("Server returned 502")],
            ..ChatState::default()
        };
        let rendered = text(&thread_lines(&state));
        assert!(rendered.contains("Error: Server returned 502"));
        assert!(!rendered.contains("Cards"));
    }

    #[test]
    fn test_render_pins_to_bottom() {
        let state = ChatState {
            messages: (0..20).map(|i| Message::user(format!("query {}", i))).collect(),
            ..ChatState::default()
        };
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let max_scroll = render_thread(&state, area, &mut buf);
        // 20 messages x 3 lines, 6 visible
        assert_eq!(max_scroll, 54);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();
        assert!(rows.iter().any(|row| row.contains("query 19")));
        assert!(!rows.iter().any(|row| row.contains("query 0 ")));
    }

    #[test]
    fn test_drop_leading_lines_keeps_offset_in_range() {
        let lines: Vec<Line<'static>> = (0..50).map(|i| Line::from(format!("line {}", i))).collect();
        assert_eq!(drop_leading_lines(&lines, 30, 40, 100), (0, 30));
        assert_eq!(drop_leading_lines(&lines, 30, 40, 10), (20, 10));

        // a wrapped line counts for every row it takes
        let wide = vec![Line::from("x".repeat(100)), Line::from("tail")];
        assert_eq!(drop_leading_lines(&wide, 4, 20, 1), (0, 4));
        assert_eq!(drop_leading_lines(&wide, 6, 20, 1), (1, 1));
    }

    #[test]
    fn test_render_empty_hint() {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        assert_eq!(render_thread(&ChatState::default(), area, &mut buf), 0);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("No messages yet"));
    }
}
