// src/ui/json_table.rs
//! Renders an arbitrary JSON value as nested `key │ value` rows.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use serde_json::{Map, Value};

use super::format::display_scalar;

const INDENT: &str = "  ";
const MAX_KEY_WIDTH: usize = 24;

pub fn table_lines(value: &Value) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match value {
        Value::Object(map) => push_object(map, 0, &mut lines),
        Value::Array(items) => {
            let entries: Vec<(String, &Value)> = items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect();
            push_entries(&entries, 0, &mut lines);
        }
        scalar => lines.push(Line::from(display_scalar(scalar))),
    }
    lines
}

fn push_object(map: &Map<String, Value>, depth: usize, lines: &mut Vec<Line<'static>>) {
    let entries: Vec<(String, &Value)> = map.iter().map(|(k, v)| (k.clone(), v)).collect();
    push_entries(&entries, depth, lines);
}

fn push_entries(entries: &[(String, &Value)], depth: usize, lines: &mut Vec<Line<'static>>) {
    let width = entries
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_KEY_WIDTH);

    for (key, value) in entries {
        let key_cell = format!("{:<width$}", key, width = width);
        match value {
            Value::Object(map) if !map.is_empty() => {
                lines.push(key_line(depth, key));
                push_object(map, depth + 1, lines);
            }
            Value::Array(items) if !items.is_empty() => {
                lines.push(key_line(depth, key));
                push_items(items, depth + 1, lines);
            }
            Value::Object(_) | Value::Array(_) => lines.push(row(depth, key_cell, String::new())),
            scalar => lines.push(row(depth, key_cell, display_scalar(scalar))),
        }
    }
}

fn push_items(items: &[Value], depth: usize, lines: &mut Vec<Line<'static>>) {
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Object(map) => {
                lines.push(bullet(depth, format!("#{}", i + 1), bullet_label_style()));
                push_object(map, depth + 1, lines);
            }
            Value::Array(nested) => {
                lines.push(bullet(depth, format!("#{}", i + 1), bullet_label_style()));
                push_items(nested, depth + 1, lines);
            }
            scalar => lines.push(bullet(depth, display_scalar(scalar), Style::default())),
        }
    }
}

fn key_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn bullet_label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn key_line(depth: usize, key: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT.repeat(depth)),
        Span::styled(key.to_string(), key_style()),
    ])
}

fn row(depth: usize, key_cell: String, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT.repeat(depth)),
        Span::styled(key_cell, key_style()),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn bullet(depth: usize, text: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT.repeat(depth)),
        Span::styled("• ", Style::default().fg(Color::DarkGray)),
        Span::styled(text, style),
    ])
}
