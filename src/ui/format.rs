// src/ui/format.rs
//! Display rules for server values: fallbacks, scalars, prices.

use serde_json::Value;

use crate::api::Card;

pub const DASH: &str = "—";
pub const DEFAULT_PROPERTY_TYPE: &str = "RESIDENTIAL";

/// Terminal JSON value as plain text. Strings lose their quotes.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// `false`, `0`, `""` and `null` count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    value
        .filter(|v| is_truthy(v))
        .map_or_else(|| fallback.to_string(), display_scalar)
}

/// Numbers get grouped; anything else truthy is printed as sent.
fn price_text(value: Option<&Value>) -> String {
    match value.filter(|v| is_truthy(v)) {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(p) if !p.is_nan() => format!("₹{}", format_price(p)),
            _ => format!("₹{}", n),
        },
        Some(other) => format!("₹{}", display_scalar(other)),
        None => DASH.to_string(),
    }
}

/// Groups thousands with commas and keeps at most three fraction digits.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let fixed = format!("{:.3}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if price < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Card fields with their fallbacks applied, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub location: String,
    pub bhk: String,
    pub bathrooms: String,
    pub balcony: String,
    pub property_type: String,
    pub furnishing: String,
    pub status: String,
    pub price: String,
    pub slug: Option<String>,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        let mut location = text_or(card.full_address.as_ref(), DASH);
        if let Some(landmark) = card.landmark.as_ref().filter(|v| is_truthy(v)) {
            location.push_str(&format!(" — {}", display_scalar(landmark)));
        }

        Self {
            title: text_or(card.project_name.as_ref(), DASH),
            location,
            bhk: text_or(card.bhk.as_ref(), DASH),
            // zero is a real answer for these two
            bathrooms: card
                .bathrooms
                .as_ref()
                .map_or_else(|| DASH.to_string(), display_scalar),
            balcony: card
                .balcony
                .as_ref()
                .map_or_else(|| DASH.to_string(), display_scalar),
            property_type: text_or(card.property_type.as_ref(), DEFAULT_PROPERTY_TYPE),
            furnishing: text_or(card.furnished_type.as_ref(), DASH),
            status: text_or(card.status.as_ref(), DASH),
            price: price_text(card.price.as_ref()),
            slug: card
                .cta_slug
                .as_ref()
                .filter(|v| is_truthy(v))
                .map(display_scalar),
        }
    }
}
