//! The normalized result of a request cycle.

use beautygpt_model::{ChatReply, Product};

/// What the user sees when a request fails, whatever the reason.
pub const FALLBACK_MESSAGE: &str =
    "Mi dispiace, c'e stato un errore. Riprova tra poco!";

/// The assistant's answer to one request, success or not.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub(crate) content: String,
    pub(crate) products: Vec<Product>,
}

impl Outcome {
    /// Creates an outcome from its parts.
    #[inline]
    pub fn new<S: Into<String>>(content: S, products: Vec<Product>) -> Self {
        Self {
            content: content.into(),
            products,
        }
    }

    /// Creates the outcome of a failed request.
    #[inline]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_MESSAGE, vec![])
    }

    /// Returns the text of the answer.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the recommended products.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl From<ChatReply> for Outcome {
    #[inline]
    fn from(reply: ChatReply) -> Self {
        Self::new(reply.response, reply.products)
    }
}
