mod builder;

use std::fmt::{self, Debug};
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use beautygpt_model::ChatRequest;

use crate::assistant_client::{AssistantClient, OutcomeFuture};
use crate::conversation::Conversation;
use crate::outcome::Outcome;
pub use builder::SessionBuilder;

pub(crate) type ChangeFn = Box<dyn FnMut(&Conversation) + Send>;

/// Something that changes a [`Session`].
#[derive(Debug)]
pub enum Action {
    /// The user submitted a message.
    Submit(String),
    /// The assistant answered an outstanding request.
    Complete(Reply),
}

/// The answer to one request, tagged with the request it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    id: u64,
    outcome: Outcome,
}

impl Reply {
    /// Returns the id of the request this reply answers.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the outcome of the request.
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// An outstanding request.
///
/// Await it to get the [`Reply`], then hand the reply back with
/// [`Action::Complete`]. The session stays pending until that happens, so
/// dropping this value leaves the session unable to accept new messages.
#[must_use = "the session stays pending until the reply is completed"]
pub struct PendingReply {
    id: u64,
    fut: OutcomeFuture,
}

impl PendingReply {
    /// Returns the id of the request.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Future for PendingReply {
    type Output = Reply;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Reply> {
        let outcome = ready!(self.fut.as_mut().poll(cx));
        Poll::Ready(Reply {
            id: self.id,
            outcome,
        })
    }
}

impl Debug for PendingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReply")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A chat session with the assistant.
///
/// The session owns the [`Conversation`] and is the only thing that
/// changes it. Every change goes through [`Session::dispatch`], which
/// enforces that at most one request is outstanding: messages submitted
/// while a request is pending, and empty messages, are dropped without
/// touching the conversation.
pub struct Session {
    client: AssistantClient,
    conversation: Conversation,
    in_flight: Option<u64>,
    next_request_id: u64,
    on_change: Option<ChangeFn>,
}

impl Session {
    /// Returns the current state of the conversation.
    #[inline]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Applies an action to the session.
    ///
    /// Submitting a message returns the outstanding request, or `None` if
    /// the message was dropped. Completing never returns anything.
    pub fn dispatch(&mut self, action: Action) -> Option<PendingReply> {
        match action {
            Action::Submit(text) => self.submit(text),
            Action::Complete(reply) => {
                self.complete(reply);
                None
            }
        }
    }

    /// Sends a message and waits for the assistant's answer.
    ///
    /// Returns `false` if the message was dropped.
    pub async fn send<S: Into<String>>(&mut self, text: S) -> bool {
        let Some(pending) = self.dispatch(Action::Submit(text.into())) else {
            return false;
        };
        let reply = pending.await;
        self.dispatch(Action::Complete(reply));
        true
    }

    fn submit(&mut self, text: String) -> Option<PendingReply> {
        // History must be taken before the new message lands in the
        // transcript, it travels separately.
        let history = self.conversation.history();
        if let Err(rejection) = self.conversation.append_user_message(&text) {
            debug!("dropped user input: {rejection}");
            return None;
        }
        self.conversation.begin_request();

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);
        debug!("request {id} started, history length: {}", history.len());

        let fut = self.client.request(ChatRequest {
            message: text,
            history,
        });
        self.notify_change();
        Some(PendingReply { id, fut })
    }

    fn complete(&mut self, reply: Reply) {
        if self.in_flight != Some(reply.id) {
            warn!("discarded reply {} which is not in flight", reply.id);
            return;
        }
        self.in_flight = None;

        if let Err(rejection) = self.conversation.complete_request(reply.outcome)
        {
            error!("internal state is inconsistent: {rejection}");
            return;
        }
        debug!("request {} completed", reply.id);
        self.notify_change();
    }

    #[inline]
    fn notify_change(&mut self) {
        if let Some(on_change) = &mut self.on_change {
            on_change(&self.conversation);
        }
    }
}
