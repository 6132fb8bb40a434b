// src/ui/card.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::format::CardView;
use super::style::{card_border_style, ACCENT};
use crate::api::Card;

pub const NO_SLUG: &str = "No slug available";

/// Lines for one property card inside the thread.
pub fn card_lines(card: &Card, number: usize, is_selected: bool, is_expanded: bool) -> Vec<Line<'static>> {
    let view = CardView::from_card(card);
    let border = card_border_style(is_selected);
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let bar = || Span::styled("  │ ", border);
    let field = |name: &str, text: &str| {
        vec![
            Span::styled(format!("{} ", name), label),
            Span::styled(text.to_string(), value),
        ]
    };
    let pair = |a: (&str, &str), b: (&str, &str)| {
        let mut spans = vec![bar()];
        spans.extend(field(a.0, a.1));
        spans.push(Span::styled("  ·  ", label));
        spans.extend(field(b.0, b.1));
        Line::from(spans)
    };

    let mut title = vec![
        Span::styled("  ┌ ", border),
        Span::styled(
            format!("{}. {}", number, view.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if is_selected {
        title.push(Span::styled("  [selected]", border));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(vec![bar(), Span::raw(view.location.clone())]),
        pair(("BHK", view.bhk.as_str()), ("Bathrooms", view.bathrooms.as_str())),
        pair(("Balcony", view.balcony.as_str()), ("Property Type", view.property_type.as_str())),
        pair(("Furnishing", view.furnishing.as_str()), ("Status", view.status.as_str())),
        Line::from({
            let mut spans = vec![bar()];
            spans.extend(field("Price", view.price.as_str()));
            spans
        }),
    ];

    let toggle = if is_expanded { "Hide Slug" } else { "Show Slug" };
    let hint = if is_selected { " (Ctrl+O)" } else { "" };
    lines.push(Line::from(vec![
        bar(),
        Span::styled(
            format!("▸ {}", toggle),
            Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(hint.to_string(), label),
    ]));

    if is_expanded {
        let slug = match &view.slug {
            Some(slug) => Span::styled(slug.clone(), Style::default().fg(Color::Yellow)),
            None => Span::styled(NO_SLUG, Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![bar(), Span::raw("  "), slug]));
    }

    lines.push(Line::from(Span::styled("  └", border)));
    lines
}
