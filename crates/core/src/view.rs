//! A render model derived from a [`Conversation`].
//!
//! Views are recomputed from the latest conversation every time it changes
//! and borrow everything they show, so building one is cheap and never
//! touches the conversation.

use beautygpt_model::{Category, Product, Role};

use crate::conversation::{Conversation, Message};

/// How many benefits a product card shows at most.
pub const MAX_BENEFITS: usize = 3;

/// Returns the glyph shown next to products of `category`.
pub fn glyph(category: Category) -> &'static str {
    match category {
        Category::Cleanser => "🧴",
        Category::Serum => "💧",
        Category::Cream => "🧴",
        Category::Spf => "☀️",
        Category::Mask => "🎭",
        Category::Toner => "💦",
        Category::EyeContour => "👁️",
        Category::Exfoliant => "✨",
        Category::Oil => "🫒",
        Category::Lip => "💋",
    }
}

/// Formats a price with exactly two decimals.
#[inline]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// The displayable part of a [`Product`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard<'a> {
    /// Stable key of the card.
    pub id: u64,
    /// Category glyph; `None` for unknown categories.
    pub glyph: Option<&'static str>,
    /// Product name.
    pub name: &'a str,
    /// Brand name.
    pub brand: &'a str,
    /// Price with two decimals, without currency.
    pub price: String,
    /// At most [`MAX_BENEFITS`] benefits.
    pub benefits: &'a [String],
    /// Where to buy the product.
    pub link: &'a str,
}

impl<'a> ProductCard<'a> {
    /// Creates the card of a product.
    pub fn new(product: &'a Product) -> Self {
        let shown = product.benefits.len().min(MAX_BENEFITS);
        Self {
            id: product.id,
            glyph: product.category_kind().map(glyph),
            name: &product.name,
            brand: &product.brand,
            price: format_price(product.price),
            benefits: &product.benefits[..shown],
            link: &product.amazon_url,
        }
    }
}

/// The displayable part of a [`Message`].
#[derive(Clone, Debug, PartialEq)]
pub struct MessageView<'a> {
    /// Who wrote the message.
    pub role: Role,
    /// The text of the message.
    pub content: &'a str,
    /// Cards of the attached products.
    pub products: Vec<ProductCard<'a>>,
}

impl<'a> MessageView<'a> {
    /// Creates the view of a message.
    pub fn new(message: &'a Message) -> Self {
        Self {
            role: message.role(),
            content: message.content(),
            products: message
                .products()
                .iter()
                .map(ProductCard::new)
                .collect(),
        }
    }
}

/// Everything needed to draw a conversation.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptView<'a> {
    /// Messages in the order they were added; the newest is last.
    pub messages: Vec<MessageView<'a>>,
    /// Whether to show a "thinking" indicator after the last message.
    pub pending: bool,
    /// Whether only the greeting is present.
    pub fresh: bool,
}

impl<'a> TranscriptView<'a> {
    /// Creates the view of a conversation.
    pub fn new(conversation: &'a Conversation) -> Self {
        Self {
            messages: conversation
                .messages()
                .iter()
                .map(MessageView::new)
                .collect(),
            pending: conversation.is_pending(),
            fresh: conversation.is_fresh(),
        }
    }
}
