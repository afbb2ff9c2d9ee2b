use beautygpt_model::AssistantProvider;

use super::{ChangeFn, Session};
use crate::assistant_client::AssistantClient;
use crate::conversation::Conversation;

/// [`Session`] builder.
pub struct SessionBuilder {
    client: AssistantClient,
    on_change: Option<ChangeFn>,
}

impl SessionBuilder {
    /// Creates a new builder with the specified assistant provider.
    #[inline]
    pub fn with_provider<P: AssistantProvider + 'static>(provider: P) -> Self {
        Self {
            client: AssistantClient::new(provider),
            on_change: None,
        }
    }

    /// Attaches a callback to be invoked whenever the conversation changes.
    ///
    /// The callback sees the conversation right after the change, so it is
    /// the place to redraw the transcript.
    #[inline]
    pub fn on_change(
        mut self,
        on_change: impl FnMut(&Conversation) + Send + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Builds the session.
    #[inline]
    pub fn build(self) -> Session {
        Session {
            client: self.client,
            conversation: Conversation::new(),
            in_flight: None,
            next_request_id: 1,
            on_change: self.on_change,
        }
    }
}
