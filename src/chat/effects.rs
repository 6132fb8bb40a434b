// src/chat/effects.rs
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::state::{ChatEvent, ChatIntent};
use crate::api::PropertyClient;

/// Performs the network call a request event asks for and returns the
/// completion intent. Notification events yield `None`.
pub async fn perform(client: &PropertyClient, event: &ChatEvent) -> Option<ChatIntent> {
    match event {
        ChatEvent::SearchRequested { query } => {
            let result = client.search(query).await.map_err(|e| {
                warn!("Search failed: {}", e);
                e.to_string()
            });
            if let Ok(response) = &result {
                info!(
                    "Search answered: {} card(s), filters={}",
                    response.cards.as_ref().map_or(0, Vec::len),
                    response.extracted_filters.is_some()
                );
            }
            Some(ChatIntent::SearchCompleted(result))
        }
        ChatEvent::AllPropertiesRequested => {
            let result = client.all_properties().await.map_err(|e| {
                warn!("All properties failed: {}", e);
                e.to_string()
            });
            if let Ok(cards) = &result {
                info!("All properties answered: {} card(s)", cards.len());
            }
            Some(ChatIntent::AllPropertiesCompleted(result))
        }
        _ => None,
    }
}

/// Spawns one task per request event; each sends its completion back on
/// `intent_tx`. Requests are neither queued nor cancelled.
pub fn spawn_requests(
    client: &PropertyClient,
    events: &[ChatEvent],
    intent_tx: &mpsc::UnboundedSender<ChatIntent>,
) {
    for event in events {
        if !matches!(
            event,
            ChatEvent::SearchRequested { .. } | ChatEvent::AllPropertiesRequested
        ) {
            continue;
        }

        let client = client.clone();
        let event = event.clone();
        let intent_tx = intent_tx.clone();
        tokio::spawn(async move {
            if let Some(intent) = perform(&client, &event).await {
                let _ = intent_tx.send(intent);
            }
        });
    }
}
