pub mod effects;
pub mod state;

pub use state::{CardRef, ChatEvent, ChatIntent, ChatState, ChatStateMachine, Message, Role};
