// src/ui/notes.rs
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::ui::style::{dim_unless_focused, ACCENT};

/// Rows the notes panel takes when collapsed and expanded, borders included.
pub const COLLAPSED_HEIGHT: u16 = 6;
pub const EXPANDED_HEIGHT: u16 = 18;

pub const SEARCH_GUIDE: &str = "\
Purpose:
This AI helps you search properties and projects using simple natural language, but it is not a full GPT model.
It is a lightweight AI trained only on 83 property entries from a local dataset.
So, to get the best results, your query must be specific, well-structured, and spelled correctly.

________________________________________

How to Search Correctly
✓ Follow this format for best results:
BHK PROPERTY_TYPE apartment located in FULLADDRESS, near LANDMARK.
It is FURNISHED_TYPE and currently STATUS, featuring NU BATHROOMS and NU BALCONIES,
priced at around ₹NU Crore/Lakh/K etc.

________________________________________

Field Details
BHK → 1, 2, 3, 4
PROPERTY_TYPE → Residential, Commercial, Any
FULLADDRESS → Example: Sindhi Society, Near Swami Vivekanand Jr College, Chembur, Mumbai Harbour, Mumbai
LANDMARK → Example: JBCN International School Mulund
FURNISHED_TYPE → Unfurnished, Furnished, Semi-Furnished, None
STATUS → Ready to Move, Under Construction
BATHROOMS → 1, 2, 3, 4
BALCONIES → 1, 2, 3, 4
PRICE → ₹NU Crore / Lakh / K

________________________________________

Tip:
Use clear and complete details for address, landmark, and price.
Avoid vague terms like cheap flat or low price apartment.

Example of a perfect search:
1BHK residential apartment located in Mumbai Chembur, near Babys School.
It is unfurnished and currently under construction, featuring 1 bathroom and 1 balcony,
priced at around ₹1.1 Crore.

________________________________________

Important Guidelines
• ✓ Always mention BHK at the start.
• ✓ Add city and locality name (e.g., Mumbai Chembur).
• ✓ Include bathroom and balcony count.
• ✓ Write the price at the end in clear format (₹1.1 Crore / ₹85 Lakh / ₹90L).
• ✓ Use full sentences and correct spelling. The AI is regex-based, not semantic like ChatGPT.
• ✗ Avoid shorthand, typos, or vague inputs (e.g., \"cheap flat Mumbai\").
• ✗ Don't skip important words like \"ready to move\", \"under construction\", or \"unfurnished\".

________________________________________

Why Precision Matters
This AI runs on a custom model with limited parameters, not billions like normal GPTs.
It only matches patterns from a small dataset (83 property entries), so every keyword you type helps it understand:
• The location
• The price range
• The BHK type
• The furnishing and readiness status

Being precise ensures the AI can filter and summarize your query accurately.

________________________________________

Example Prompts

1. Om Makarand Heights
2BHK residential apartment located at 104, Yashvant Seth Jadhav Marg, Gauri Shankar Wadi No. 2, Savitribai Phule Nagar, Pant Nagar, Ghatkopar East, Mumbai, Maharashtra 400075, near Hind High School.
It is unfurnished and currently under construction, featuring 2 bathrooms and 2 balconies, priced at around ₹1.4 crore.

________________________________________

2. Sainath Vrindavan (1BHK)
1BHK residential apartment located at Prataprao Gujar Rd, Neelam Nagar, Mulund East, Mumbai, Maharashtra 400081, near JBCN International School Mulund.
It is unfurnished and currently under construction, featuring 1 bathroom and 1 balcony, priced at around ₹1.2 crore.

________________________________________

3. Sainath Vrindavan (2BHK)
2BHK residential apartment located at Prataprao Gujar Rd, Neelam Nagar, Mulund East, Mumbai, Maharashtra 400081, near JBCN International School Mulund.
It is unfurnished and currently under construction, featuring 2 bathrooms and 2 balconies, priced at around ₹1.7 crore.

________________________________________

4. Sainath Vrindavan (2BHK)
2BHK residential apartment located at Prataprao Gujar Rd, Neelam Nagar, Mulund East, Mumbai, Maharashtra 400081, near JBCN International School Mulund.
It is unfurnished and currently under construction, featuring 2 bathrooms and 2 balconies, priced at around ₹1.9 crore.

________________________________________

5. Ashwini Apartments
Ashwini is a 1BHK residential apartment located in Mumbai Chembur, near Babys School.
It is unfurnished and currently under construction, featuring 1 bathroom and 1 balcony, priced at around ₹1.1 crore.

________________________________________

6. Sai Krupa Residency
2BHK residential apartment located in Sr. No. 13, beside Godrej, near Sai Nagar.
It is unfurnished and ready to move in, featuring 12 bathrooms and 3 balconies, priced at around ₹12 crore.

________________________________________

Backend Info:
- Endpoint: POST http://localhost:8083/api/search
- Response includes: extractedFilters, summary, cards
- Use clear, short prompts for better results.
- Example prompt: \"Ashwini is a 1BHK residential apartment located in Mumbai Chembur, near Babys School...\"

________________________________________

Keys:
Enter send • Ctrl+A all properties • Ctrl+L clear chat • F1 notes
Tab/Shift+Tab select card • Ctrl+O show/hide slug • Esc quit";

pub fn panel_height(expanded: bool) -> u16 {
    if expanded {
        EXPANDED_HEIGHT
    } else {
        COLLAPSED_HEIGHT
    }
}

/// Renders the guide and returns how far it can scroll in `area`.
pub fn render_notes(notes: &str, expanded: bool, scroll: usize, area: Rect, buf: &mut Buffer) -> usize {
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2);

    let title = format!(
        " Read this before you ask! (F1: {}) ",
        if expanded { "Collapse" } else { "Expand" }
    );

    let paragraph = Paragraph::new(Text::from(notes.to_string()))
        .wrap(Wrap { trim: false });
    let max_scroll = paragraph
        .line_count(inner_width)
        .saturating_sub(inner_height);
    let scroll = if expanded { scroll.min(max_scroll) } else { 0 };

    let text_style = dim_unless_focused(expanded, Style::default().fg(Color::Gray));
    paragraph
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        )
        .style(text_style)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .render(area, buf);

    if expanded {
        max_scroll
    } else {
        0
    }
}
