use std::pin::Pin;
use std::sync::Arc;

use beautygpt_model::{
    AssistantProvider, ChatReply, ChatRequest, ProviderError,
};
use tracing::Instrument;

use crate::outcome::Outcome;

pub(crate) type OutcomeFuture = Pin<Box<dyn Future<Output = Outcome> + Send>>;
type HandlerFn = Arc<dyn Fn(ChatRequest) -> OutcomeFuture + Send + Sync>;

/// A wrapper around an assistant provider that turns every request into
/// an [`Outcome`] and provides a type-erased interface for the other
/// modules.
#[derive(Clone)]
pub(crate) struct AssistantClient {
    handler_fn: HandlerFn,
}

impl AssistantClient {
    #[inline]
    pub fn new<P: AssistantProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `AssistantClient` doesn't have
        // a generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("got a request: {:?}", req);
                    let reply_or_err = fut.await;
                    handle_reply::<P>(reply_or_err)
                }
                .instrument(trace_span!("assistant client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and returns a future of its outcome.
    ///
    /// The future never fails: errors are logged and replaced by
    /// [`Outcome::fallback`]. It doesn't borrow the client either.
    #[inline]
    pub fn request(&self, req: ChatRequest) -> OutcomeFuture {
        (self.handler_fn)(req)
    }
}

fn handle_reply<P: AssistantProvider + 'static>(
    reply_or_err: Result<ChatReply, P::Error>,
) -> Outcome {
    match reply_or_err {
        Ok(reply) => {
            trace!("got a reply with {} products", reply.products.len());
            Outcome::from(reply)
        }
        Err(err) => {
            warn!("request failed ({}): {err}", err.kind());
            Outcome::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use beautygpt_model::{ErrorKind, HistoryEntry, Role};
    use beautygpt_test_model::TestProvider;

    use super::*;
    use crate::outcome::FALLBACK_MESSAGE;

    fn request(message: &str, history: Vec<HistoryEntry>) -> ChatRequest {
        ChatRequest {
            message: message.to_owned(),
            history,
        }
    }

    #[tokio::test]
    async fn test_send_request() {
        let mut provider = TestProvider::default();
        provider.add_reply(ChatReply::text("Che tipo di pelle hai?"));
        provider.add_reply(ChatReply::text("Allora un gel leggero."));

        let client = AssistantClient::new(provider.clone());

        let outcome = client.request(request("Ciao", vec![])).await;
        assert_eq!(outcome.content(), "Che tipo di pelle hai?");

        let history = vec![
            HistoryEntry::new(Role::User, "Ciao"),
            HistoryEntry::new(Role::Assistant, outcome.content()),
        ];
        let outcome = client.request(request("Grassa", history)).await;
        assert_eq!(outcome.content(), "Allora un gel leggero.");
        assert!(outcome.products().is_empty());
        assert_eq!(provider.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_error_handling() {
        for kind in [ErrorKind::Transport, ErrorKind::Status, ErrorKind::Malformed]
        {
            let mut provider = TestProvider::default();
            provider.add_failure(kind);
            let client = AssistantClient::new(provider);

            let outcome = client.request(request("Ciao", vec![])).await;
            assert_eq!(outcome.content(), FALLBACK_MESSAGE);
            assert!(outcome.products().is_empty());
        }
    }
}
