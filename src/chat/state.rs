// src/chat/state.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::api::{Card, SearchResponse};

pub const ALL_PROPERTIES_INTRO: &str = "Here are all available properties:";
pub const RESPONSE_RECEIVED: &str = "Response received";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Server response a bot message was built from.
    pub raw: Option<SearchResponse>,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            raw: None,
            sent_at: Local::now(),
        }
    }

    pub fn bot(content: impl Into<String>, raw: Option<SearchResponse>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            raw,
            sent_at: Local::now(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self::bot(format!("Error: {}", message), None)
    }

    pub fn cards(&self) -> &[Card] {
        self.raw
            .as_ref()
            .and_then(|raw| raw.cards.as_deref())
            .unwrap_or(&[])
    }
}

/// One card inside one message of the thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    pub message: usize,
    pub card: usize,
}

impl CardRef {
    pub fn new(message: usize, card: usize) -> Self {
        Self { message, card }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub input: String,
    pub loading: bool,
    pub notes_expanded: bool,
    pub expanded_card: Option<CardRef>,
    pub selected_card: Option<CardRef>,
    /// Lines scrolled up from the newest output; 0 follows the thread.
    pub scroll_from_bottom: usize,
    pub notes_scroll: usize,
}

impl ChatState {
    pub fn card(&self, card_ref: CardRef) -> Option<&Card> {
        self.messages
            .get(card_ref.message)
            .and_then(|m| m.cards().get(card_ref.card))
    }

    /// Every card in the thread, oldest message first.
    pub fn card_refs(&self) -> Vec<CardRef> {
        self.messages
            .iter()
            .enumerate()
            .flat_map(|(message, m)| (0..m.cards().len()).map(move |card| CardRef::new(message, card)))
            .collect()
    }

    pub fn is_expanded(&self, card_ref: CardRef) -> bool {
        self.expanded_card == Some(card_ref)
    }

    pub fn is_selected(&self, card_ref: CardRef) -> bool {
        self.selected_card == Some(card_ref)
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what user wants to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum ChatIntent {
    InsertChar(char),
    /// Pasted text. Line breaks become spaces so the query stays one line.
    InsertText(String),
    Backspace,
    Submit,
    FetchAll,
    SearchCompleted(Result<SearchResponse, String>),
    AllPropertiesCompleted(Result<Vec<Card>, String>),
    ClearChat,
    ToggleNotes,
    ToggleCard(CardRef),
    ToggleSelectedCard,
    SelectNextCard,
    SelectPrevCard,
    ClearSelection,
    ScrollUp { lines: usize, limit: usize },
    ScrollDown(usize),
    ScrollToBottom,
    ScrollNotesUp,
    ScrollNotesDown { limit: usize },
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// Side effect: issue `POST /api/search`.
    SearchRequested { query: String },
    /// Side effect: issue `GET /api/allProperties`.
    AllPropertiesRequested,
    MessageAppended { index: usize, role: Role },
    ChatCleared { removed: usize },
    CardToggled { card: CardRef, expanded: bool },
    CardSelected(Option<CardRef>),
    NotesToggled(bool),
    InputChanged,
    Scrolled { from_bottom: usize },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct ChatStateMachine;

impl ChatStateMachine {
    pub fn transition(state: ChatState, intent: ChatIntent) -> (ChatState, Vec<ChatEvent>) {
        use ChatIntent::*;

        match intent {
            InsertChar(ch) => Self::handle_insert_char(state, ch),
            InsertText(text) => Self::handle_insert_text(state, &text),
            Backspace => Self::handle_backspace(state),
            Submit => Self::handle_submit(state),
            FetchAll => Self::handle_fetch_all(state),
            SearchCompleted(result) => Self::handle_search_completed(state, result),
            AllPropertiesCompleted(result) => Self::handle_all_properties_completed(state, result),
            ClearChat => Self::handle_clear_chat(state),
            ToggleNotes => Self::handle_toggle_notes(state),
            ToggleCard(card) => Self::handle_toggle_card(state, card),
            ToggleSelectedCard => {
                let selected = state.selected_card;
                match selected {
                    Some(card) => Self::handle_toggle_card(state, card),
                    None => (state, vec![]),
                }
            }
            SelectNextCard => Self::handle_select(state, true),
            SelectPrevCard => Self::handle_select(state, false),
            ClearSelection => Self::handle_clear_selection(state),
            ScrollUp { lines, limit } => Self::handle_scroll_up(state, lines, limit),
            ScrollDown(lines) => Self::handle_scroll_down(state, lines),
            ScrollToBottom => Self::handle_scroll_down(state, usize::MAX),
            ScrollNotesUp => Self::handle_scroll_notes(state, false, 0),
            ScrollNotesDown { limit } => Self::handle_scroll_notes(state, true, limit),
        }
    }

    fn handle_insert_char(mut state: ChatState, ch: char) -> (ChatState, Vec<ChatEvent>) {
        state.input.push(ch);
        (state, vec![ChatEvent::InputChanged])
    }

    fn handle_insert_text(mut state: ChatState, text: &str) -> (ChatState, Vec<ChatEvent>) {
        let flattened = text.replace("\r\n", "\n").replace(['\r', '\n'], " ");
        if flattened.is_empty() {
            return (state, vec![]);
        }
        state.input.push_str(&flattened);
        (state, vec![ChatEvent::InputChanged])
    }

    fn handle_backspace(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        if state.input.pop().is_some() {
            (state, vec![ChatEvent::InputChanged])
        } else {
            (state, vec![])
        }
    }

    fn handle_submit(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        if state.loading || state.input.trim().is_empty() {
            return (state, vec![]);
        }

        let query = std::mem::take(&mut state.input);
        let (mut state, mut events) = Self::append(state, Message::user(query.clone()));
        state.loading = true;

        events.push(ChatEvent::SearchRequested { query });
        events.push(ChatEvent::InputChanged);
        (state, events)
    }

    fn handle_fetch_all(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        state.loading = true;
        (state, vec![ChatEvent::AllPropertiesRequested])
    }

    fn handle_search_completed(
        mut state: ChatState,
        result: Result<SearchResponse, String>,
    ) -> (ChatState, Vec<ChatEvent>) {
        state.loading = false;

        let message = match result {
            Ok(response) => {
                let content = response.summary_text().unwrap_or(RESPONSE_RECEIVED).to_string();
                Message::bot(content, Some(response))
            }
            Err(e) => Message::error(&e),
        };
        Self::append(state, message)
    }

    fn handle_all_properties_completed(
        mut state: ChatState,
        result: Result<Vec<Card>, String>,
    ) -> (ChatState, Vec<ChatEvent>) {
        state.loading = false;

        let message = match result {
            Ok(cards) => Message::bot(ALL_PROPERTIES_INTRO, Some(SearchResponse::from_cards(cards))),
            Err(e) => Message::error(&e),
        };
        Self::append(state, message)
    }

    fn handle_clear_chat(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        let removed = state.messages.len();
        state.messages.clear();
        state.expanded_card = None;
        state.selected_card = None;
        state.scroll_from_bottom = 0;
        (state, vec![ChatEvent::ChatCleared { removed }])
    }

    fn handle_toggle_notes(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        state.notes_expanded = !state.notes_expanded;
        state.notes_scroll = 0;
        let expanded = state.notes_expanded;
        (state, vec![ChatEvent::NotesToggled(expanded)])
    }

    fn handle_toggle_card(mut state: ChatState, card: CardRef) -> (ChatState, Vec<ChatEvent>) {
        if state.card(card).is_none() {
            return (state, vec![]);
        }

        let expanded = if state.expanded_card == Some(card) {
            state.expanded_card = None;
            false
        } else {
            state.expanded_card = Some(card);
            true
        };
        (state, vec![ChatEvent::CardToggled { card, expanded }])
    }

    fn handle_select(mut state: ChatState, forward: bool) -> (ChatState, Vec<ChatEvent>) {
        let refs = state.card_refs();
        if refs.is_empty() {
            return (state, vec![]);
        }

        let current = state
            .selected_card
            .and_then(|selected| refs.iter().position(|r| *r == selected));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => refs.len() - 1,
            (Some(i), true) => (i + 1) % refs.len(),
            (Some(i), false) => (i + refs.len() - 1) % refs.len(),
        };

        state.selected_card = Some(refs[next]);
        let selected = state.selected_card;
        (state, vec![ChatEvent::CardSelected(selected)])
    }

    fn handle_clear_selection(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        if state.selected_card.take().is_some() {
            (state, vec![ChatEvent::CardSelected(None)])
        } else {
            (state, vec![])
        }
    }

    fn handle_scroll_up(mut state: ChatState, lines: usize, limit: usize) -> (ChatState, Vec<ChatEvent>) {
        let target = state.scroll_from_bottom.saturating_add(lines).min(limit);
        if target == state.scroll_from_bottom {
            return (state, vec![]);
        }
        state.scroll_from_bottom = target;
        (state, vec![ChatEvent::Scrolled { from_bottom: target }])
    }

    fn handle_scroll_down(mut state: ChatState, lines: usize) -> (ChatState, Vec<ChatEvent>) {
        let target = state.scroll_from_bottom.saturating_sub(lines);
        if target == state.scroll_from_bottom {
            return (state, vec![]);
        }
        state.scroll_from_bottom = target;
        (state, vec![ChatEvent::Scrolled { from_bottom: target }])
    }

    fn handle_scroll_notes(mut state: ChatState, down: bool, limit: usize) -> (ChatState, Vec<ChatEvent>) {
        if !state.notes_expanded {
            return (state, vec![]);
        }
        state.notes_scroll = if down {
            (state.notes_scroll + 1).min(limit)
        } else {
            state.notes_scroll.saturating_sub(1)
        };
        (state, vec![])
    }

    fn append(mut state: ChatState, message: Message) -> (ChatState, Vec<ChatEvent>) {
        let role = message.role;
        state.messages.push(message);
        state.scroll_from_bottom = 0;
        let index = state.messages.len() - 1;
        (state, vec![ChatEvent::MessageAppended { index, role }])
    }
}
