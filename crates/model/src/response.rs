use serde::{Deserialize, Deserializer, Serialize};

use crate::product::Product;

/// A successful reply from the assistant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's text.
    pub response: String,
    /// Products recommended in this reply, in display order.
    ///
    /// The service may omit this field or send `null`, both of which
    /// decode to an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
}

impl ChatReply {
    /// Creates a text-only reply.
    #[inline]
    pub fn text<S: Into<String>>(response: S) -> Self {
        Self {
            response: response.into(),
            products: vec![],
        }
    }

    /// Attaches products to the reply.
    #[inline]
    pub fn with_products(mut self, products: impl Into<Vec<Product>>) -> Self {
        self.products = products.into();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let products: Option<Vec<Product>> = Option::deserialize(deserializer)?;
    Ok(products.unwrap_or_default())
}
