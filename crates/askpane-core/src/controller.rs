use crate::protocol::{ChatRequest, SearchRequest};
use crate::service::QueryService;
use crate::view::{TranscriptEntry, View};

/// Event handlers behind the search box and the chat panel
///
/// Each operation is a single linear sequence with at most one suspension
/// point (the backend call). Callers fire operations from UI events without
/// awaiting earlier ones; nothing here queues or cancels, so concurrent
/// calls race freely and display writes land in response-arrival order.
/// When two searches overlap, the last response to resolve wins the result
/// region.
pub struct InteractionController<S, V> {
    service: S,
    view: V,
}

impl<S, V> InteractionController<S, V>
where
    S: QueryService,
    V: View,
{
    pub fn new(service: S, view: V) -> Self {
        Self { service, view }
    }

    /// Send the current search field value to the backend and show the reply
    ///
    /// The field value is taken as-is; an empty query is sent like any other.
    pub async fn submit_search(&self) {
        let request = SearchRequest {
            query: self.view.query_input(),
        };

        match self.service.search(request).await {
            Ok(response) => self.view.set_result_text(&response.response),
            Err(e) => {
                log::error!("search call failed: {}", e);
                self.view.set_result_text(&format!("Error: {}", e));
            }
        }
    }

    /// Clear the search field and the result region
    pub fn reset_inputs(&self) {
        self.view.set_query_input("");
        self.view.set_result_text("");
    }

    /// Flip the chat panel between hidden and visible
    ///
    /// Only an inline display state of exactly "none" counts as hidden;
    /// anything else, including unset, flips to hidden.
    pub fn toggle_panel(&self) {
        let hidden = self.view.panel_hidden();
        self.view.set_panel_hidden(!hidden);
    }

    /// Send the current chat field value and append the exchange to the
    /// transcript
    ///
    /// An empty field is a no-op: no call, no transcript change. Otherwise
    /// the user line is appended and the field cleared before the call
    /// suspends, and the reply (or error) line lands whenever the call
    /// resolves.
    pub async fn submit_chat_message(&self) {
        let message = self.view.message_input();
        if message.is_empty() {
            return;
        }

        self.view
            .append_transcript(TranscriptEntry::User(message.clone()));
        self.view.clear_message_input();

        match self.service.chat(ChatRequest { message }).await {
            Ok(response) => self
                .view
                .append_transcript(TranscriptEntry::Assistant(response.response)),
            Err(e) => {
                log::error!("chat call failed: {}", e);
                self.view
                    .append_transcript(TranscriptEntry::Error(e.to_string()));
            }
        }
        self.view.scroll_transcript_to_end();
    }
}
