//! Conversation-related types.

use std::error::Error;
use std::fmt::{self, Display};

use beautygpt_model::{HistoryEntry, Product, Role};

use crate::outcome::Outcome;

/// The message every conversation starts with.
pub const GREETING: &str = "Ciao! Sono BeautyGPT, la tua consulente skincare \
    personale. Dimmi di te: qual e il tuo tipo di pelle? Hai problemi \
    specifici che vorresti risolvere? Ti aiutero a trovare i prodotti \
    perfetti per te!";

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    role: Role,
    content: String,
    products: Vec<Product>,
}

impl Message {
    /// Returns who wrote this message.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the text of this message.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the products attached to this message.
    ///
    /// Only assistant messages carry products.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Why a mutation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The text was empty or only whitespace.
    EmptyInput,
    /// Another request is still outstanding.
    RequestPending,
    /// There is no outstanding request to complete.
    NoRequestPending,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyInput => write!(f, "empty input"),
            Rejection::RequestPending => write!(f, "a request is pending"),
            Rejection::NoRequestPending => write!(f, "no request is pending"),
        }
    }
}

impl Error for Rejection {}

/// Represents a conversation.
///
/// The transcript is append-only and always starts with [`GREETING`]. At
/// most one assistant request can be outstanding at a time; while it is,
/// the conversation is *pending* and refuses new user messages.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    pending: bool,
}

impl Conversation {
    /// Creates a conversation holding only the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                role: Role::Assistant,
                content: GREETING.to_owned(),
                products: vec![],
            }],
            pending: false,
        }
    }

    /// Returns all messages, oldest first.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the newest message.
    #[inline]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages, including the greeting.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when nothing but the greeting has been said.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.messages.len() == 1
    }

    /// Returns `true` while an assistant request is outstanding.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends a message written by the user.
    pub fn append_user_message(&mut self, text: &str) -> Result<(), Rejection> {
        if text.trim().is_empty() {
            return Err(Rejection::EmptyInput);
        }
        if self.pending {
            return Err(Rejection::RequestPending);
        }
        self.messages.push(Message {
            role: Role::User,
            content: text.to_owned(),
            products: vec![],
        });
        Ok(())
    }

    /// Marks an assistant request as outstanding.
    #[inline]
    pub fn begin_request(&mut self) {
        self.pending = true;
    }

    /// Ends the outstanding request and appends the assistant's answer.
    pub fn complete_request(
        &mut self,
        outcome: Outcome,
    ) -> Result<(), Rejection> {
        if !self.pending {
            return Err(Rejection::NoRequestPending);
        }
        self.pending = false;
        self.messages.push(Message {
            role: Role::Assistant,
            content: outcome.content,
            products: outcome.products,
        });
        Ok(())
    }

    /// Returns the turns to send back to the assistant.
    ///
    /// The greeting is left out, and so are products.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .skip(1)
            .map(|msg| HistoryEntry::new(msg.role, msg.content.clone()))
            .collect()
    }
}

impl Default for Conversation {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let conversation = Conversation::new();
        assert_eq!(conversation.len(), 1);
        assert!(conversation.is_fresh());
        assert!(!conversation.is_pending());

        let greeting = conversation.last().unwrap();
        assert_eq!(greeting.role(), Role::Assistant);
        assert_eq!(greeting.content(), GREETING);
        assert!(conversation.history().is_empty());
    }

    #[test]
    fn test_reject_empty_input() {
        let mut conversation = Conversation::new();
        assert_eq!(
            conversation.append_user_message(""),
            Err(Rejection::EmptyInput)
        );
        assert_eq!(
            conversation.append_user_message(" \t\n"),
            Err(Rejection::EmptyInput)
        );
        assert_eq!(conversation, Conversation::new());
    }

    #[test]
    fn test_reject_while_pending() {
        let mut conversation = Conversation::new();
        conversation.append_user_message("Ciao").unwrap();
        conversation.begin_request();
        let before = conversation.clone();

        assert_eq!(
            conversation.append_user_message("Ci sei?"),
            Err(Rejection::RequestPending)
        );
        assert_eq!(conversation, before);
    }

    #[test]
    fn test_complete_without_request() {
        let mut conversation = Conversation::new();
        assert_eq!(
            conversation.complete_request(Outcome::fallback()),
            Err(Rejection::NoRequestPending)
        );
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_history_skips_greeting() {
        let mut conversation = Conversation::new();
        conversation.append_user_message("Ho la pelle secca").unwrap();
        conversation.begin_request();
        conversation
            .complete_request(Outcome::new("Usa una crema ricca", vec![]))
            .unwrap();

        assert_eq!(
            conversation.history(),
            vec![
                HistoryEntry::new(Role::User, "Ho la pelle secca"),
                HistoryEntry::new(Role::Assistant, "Usa una crema ricca"),
            ]
        );
    }

    #[test]
    fn test_user_text_is_kept_verbatim() {
        let mut conversation = Conversation::new();
        conversation.append_user_message("  pelle mista  ").unwrap();
        assert_eq!(conversation.last().unwrap().content(), "  pelle mista  ");
    }
}
