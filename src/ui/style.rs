#[allow(unused_imports)] /// Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};
use ratatui::style::{Color, Modifier};

use crate::chat::Role;

pub const ACCENT: Color = Color::Indexed(105);

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Bot => "Assistant",
    }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Role::Bot => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

pub fn section_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn card_border_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
