use crate::api::PropertyClient;
use crate::chat::effects::spawn_requests;
use crate::chat::{ChatEvent, ChatIntent, ChatState, ChatStateMachine};
use crate::config::ClientConfig;
use crate::event::{AppEvent, Event, EventHandler};
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Lines moved by PageUp / PageDown in the thread.
const PAGE_LINES: usize = 10;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Chat view state; only changed through [`ChatStateMachine`].
    pub state: ChatState,
    /// Search guide shown in the notes panel.
    pub notes: String,
    pub client: PropertyClient,
    /// Event handler.
    pub events: EventHandler,

    /// Completion intents coming back from request tasks.
    intent_tx: mpsc::UnboundedSender<ChatIntent>,
    intent_rx: mpsc::UnboundedReceiver<ChatIntent>,

    /// Scroll limits measured by the last render.
    pub thread_max_scroll: usize,
    pub notes_max_scroll: usize,
}

impl App {
    /// Constructs a new instance of [`App`] reading from the terminal.
    pub fn new(config: &ClientConfig, notes: String) -> Self {
        Self::with_events(config, notes, EventHandler::new())
    }

    pub fn with_events(config: &ClientConfig, notes: String, events: EventHandler) -> Self {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            state: ChatState::default(),
            notes,
            client: PropertyClient::from_config(config),
            events,
            intent_tx,
            intent_rx,
            thread_max_scroll: 0,
            notes_max_scroll: 0,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!("Chat started against {}", self.client.base_url());
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    match event? {
                        Event::Tick => {}
                        Event::Crossterm(event) => match event {
                            crossterm::event::Event::Key(key_event) => {
                                self.handle_key_events(key_event);
                                needs_redraw = true;
                            }
                            crossterm::event::Event::Paste(text) => {
                                self.handle_paste(text);
                                needs_redraw = true;
                            }
                            crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                            _ => {}
                        },
                        Event::App(app_event) => {
                            self.handle_app_event(app_event);
                            needs_redraw = true;
                        }
                    }
                }
                intent = self.intent_rx.recv() => {
                    if let Some(intent) = intent {
                        self.dispatch(intent);
                        needs_redraw = true;
                    }
                }
            }
        }

        info!("Chat closed with {} message(s)", self.state.messages.len());
        Ok(())
    }

    /// Handles the key events and queues the matching [`AppEvent`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        if let Some(app_event) = self.key_to_event(key_event) {
            self.events.send(app_event);
        }
    }

    /// Bracketed paste arrives as one block, so its newlines never act as Enter.
    pub fn handle_paste(&mut self, text: String) {
        self.events.send(AppEvent::Chat(ChatIntent::InsertText(text)));
    }

    fn key_to_event(&self, key_event: KeyEvent) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let intent = match key_event.code {
            KeyCode::Char('c' | 'C') if ctrl => return Some(AppEvent::Quit),
            KeyCode::Char('a' | 'A') if ctrl => ChatIntent::FetchAll,
            KeyCode::Char('l' | 'L') if ctrl => ChatIntent::ClearChat,
            KeyCode::Char('n' | 'N') if ctrl => ChatIntent::ToggleNotes,
            KeyCode::Char('o' | 'O') if ctrl => ChatIntent::ToggleSelectedCard,
            KeyCode::Char(_) if ctrl || key_event.modifiers.contains(KeyModifiers::ALT) => return None,
            KeyCode::Char(ch) => ChatIntent::InsertChar(ch),
            KeyCode::F(1) => ChatIntent::ToggleNotes,
            KeyCode::Backspace => ChatIntent::Backspace,
            KeyCode::Enter => ChatIntent::Submit,
            KeyCode::Tab => ChatIntent::SelectNextCard,
            KeyCode::BackTab => ChatIntent::SelectPrevCard,
            KeyCode::Up if self.state.notes_expanded => ChatIntent::ScrollNotesUp,
            KeyCode::Down if self.state.notes_expanded => ChatIntent::ScrollNotesDown {
                limit: self.notes_max_scroll,
            },
            KeyCode::Up => ChatIntent::ScrollUp { lines: 1, limit: self.thread_max_scroll },
            KeyCode::Down => ChatIntent::ScrollDown(1),
            KeyCode::PageUp => ChatIntent::ScrollUp {
                lines: PAGE_LINES,
                limit: self.thread_max_scroll,
            },
            KeyCode::PageDown => ChatIntent::ScrollDown(PAGE_LINES),
            KeyCode::End => ChatIntent::ScrollToBottom,
            KeyCode::Esc if self.state.selected_card.is_some() => ChatIntent::ClearSelection,
            KeyCode::Esc => return Some(AppEvent::Quit),
            _ => return None,
        };
        Some(AppEvent::Chat(intent))
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::Chat(intent) => self.dispatch(intent),
        }
    }

    /// Applies one intent and starts whatever requests it produced.
    pub fn dispatch(&mut self, intent: ChatIntent) {
        let (state, events) = ChatStateMachine::transition(std::mem::take(&mut self.state), intent);
        self.state = state;

        for event in &events {
            match event {
                ChatEvent::SearchRequested { query } => info!("Searching: {:?}", query),
                ChatEvent::AllPropertiesRequested => info!("Fetching all properties"),
                ChatEvent::ChatCleared { removed } => info!("Cleared {} message(s)", removed),
                ChatEvent::InputChanged | ChatEvent::Scrolled { .. } => {}
                other => debug!("{:?}", other),
            }
        }

        spawn_requests(&self.client, &events, &self.intent_tx);
    }

    /// Processes app events that are already queued, without waiting.
    pub fn drain_events(&mut self) {
        while let Some(event) = self.events.try_next() {
            if let Event::App(app_event) = event {
                self.handle_app_event(app_event);
            }
        }
    }

    /// Waits for the next request to finish and applies its result.
    pub async fn settle_next(&mut self) -> bool {
        match self.intent_rx.recv().await {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
