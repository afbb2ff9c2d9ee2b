//! A local fake assistant for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use beautygpt_model::{
    AssistantProvider, ChatReply, ChatRequest, ErrorKind, ProviderError,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A local fake assistant for testing purpose.
///
/// Before sending requests, you need to setup the conversation script, which
/// is how the assistant should answer each turn. The preset is selected by
/// the number of completed turns in the request history, so the first
/// request gets the first preset, the second request gets the second one,
/// and so on. If there are no enough presets in the script, a request fails
/// with [`ErrorKind::Status`].
///
/// Every request is recorded and can be inspected with
/// [`TestProvider::requests`]. Clones share the same record.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestProvider {
    script: Vec<PresetReply>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl TestProvider {
    /// Creates a provider that follows the given script.
    #[inline]
    pub fn with_script(script: impl Into<Vec<PresetReply>>) -> Self {
        Self {
            script: script.into(),
            ..Default::default()
        }
    }

    /// Appends a successful turn to the script.
    #[inline]
    pub fn add_reply(&mut self, reply: ChatReply) {
        self.script.push(PresetReply::Reply(reply));
    }

    /// Appends a failed turn to the script.
    #[inline]
    pub fn add_failure(&mut self, kind: ErrorKind) {
        self.script.push(PresetReply::Failure(kind));
    }

    /// Delays every answer by `duration`.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns all requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl AssistantProvider for TestProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ChatRequest,
    ) -> impl Future<Output = Result<ChatReply, Self::Error>> + Send + 'static
    {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }

        let turn_idx = req.history.len() / 2;
        let result = match self.script.get(turn_idx) {
            Some(PresetReply::Reply(reply)) => Ok(reply.clone()),
            Some(PresetReply::Failure(kind)) => Err(Error {
                message: "preset failure",
                kind: *kind,
            }),
            None => Err(Error {
                message: "no enough steps",
                kind: ErrorKind::Status,
            }),
        };
        let delay = self.delay.unwrap_or(Duration::from_millis(1));

        async move {
            sleep(delay).await;
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use beautygpt_model::{HistoryEntry, Role};

    use super::*;

    #[tokio::test]
    async fn test_send_request() {
        let mut provider = TestProvider::default();
        provider.add_reply(ChatReply::text("Che tipo di pelle hai?"));
        provider.add_failure(ErrorKind::Malformed);

        let mut req = ChatRequest {
            message: "Ciao".to_owned(),
            history: vec![],
        };
        let reply = provider.send_request(&req).await.unwrap();
        assert_eq!(reply.response, "Che tipo di pelle hai?");

        req.history.push(HistoryEntry::new(Role::User, "Ciao"));
        req.history
            .push(HistoryEntry::new(Role::Assistant, reply.response));
        req.message = "Grassa".to_owned();
        let err = provider.send_request(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].message, "Grassa");
    }

    #[tokio::test]
    async fn test_script_exhausted() {
        let provider = TestProvider::default();
        let req = ChatRequest {
            message: "Ciao".to_owned(),
            history: vec![],
        };
        let err = provider.send_request(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Status);
    }
}
