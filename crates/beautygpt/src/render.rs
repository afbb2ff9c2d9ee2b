//! Terminal rendering of a conversation.

use std::io::{self, Write};

use beautygpt_core::view::{MessageView, ProductCard, TranscriptView};
use beautygpt_model::Role;
use owo_colors::{OwoColorize, Style};

use crate::input::QUICK_QUESTIONS;

/// Label of the assistant's messages.
pub const ASSISTANT_LABEL: &str = "BeautyGPT";

/// Label of the user's messages.
pub const USER_LABEL: &str = "Tu";

/// Text of the link to the product page.
pub const BUY_LABEL: &str = "Acquista su Amazon";

/// Shown while waiting for the assistant.
pub const THINKING_MESSAGE: &str = "Sto pensando...";

/// Printed once at start.
pub const DISCLAIMER: &str = "BeautyGPT puo commettere errori. Consulta \
    sempre un dermatologo per problemi seri.";

const TAGLINE: &str = "La tua consulente skincare AI";
const BAR_CHAR: &str = "▎";

const ASSISTANT_STYLE: Style = Style::new().bright_magenta().bold();
const USER_STYLE: Style = Style::new().bright_cyan().bold();
const MUTED_STYLE: Style = Style::new().bright_black();
const PRICE_STYLE: Style = Style::new().green().bold();
const LINK_STYLE: Style = Style::new().blue().underline();

/// Prints conversation snapshots to a terminal.
///
/// The transcript is append-only, so the renderer remembers how many
/// messages it has printed and only prints the ones it hasn't seen.
pub struct TerminalRenderer<W> {
    out: W,
    colored: bool,
    printed: usize,
    waiting: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing colored output to `out`.
    #[inline]
    pub fn new(out: W) -> Self {
        Self {
            out,
            colored: true,
            printed: 0,
            waiting: false,
        }
    }

    /// Turns colors on or off.
    #[inline]
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Returns the number of messages printed so far.
    #[inline]
    pub fn printed(&self) -> usize {
        self.printed
    }

    /// Returns `true` if the last rendered view was waiting for the
    /// assistant, which is when a "thinking" indicator belongs after it.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Returns the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the header and the disclaimer.
    pub fn render_intro(&mut self) -> io::Result<()> {
        let title =
            self.paint(&format!("✨ {ASSISTANT_LABEL}"), ASSISTANT_STYLE);
        writeln!(self.out, "{title}")?;
        let tagline = self.paint(TAGLINE, MUTED_STYLE);
        writeln!(self.out, "{tagline}")?;
        let disclaimer = self.paint(DISCLAIMER, MUTED_STYLE.italic());
        writeln!(self.out, "{disclaimer}")?;
        self.out.flush()
    }

    /// Prints the messages of `view` that haven't been printed yet.
    ///
    /// The quick questions follow when the conversation is still fresh.
    pub fn render(&mut self, view: &TranscriptView<'_>) -> io::Result<()> {
        if view.messages.len() < self.printed {
            warn!(
                "transcript shrank from {} to {} messages",
                self.printed,
                view.messages.len()
            );
            self.printed = view.messages.len();
        }

        let unseen = &view.messages[self.printed..];
        for message in unseen {
            self.render_message(message)?;
        }
        self.printed = view.messages.len();
        self.waiting = view.pending;

        if view.fresh && !unseen.is_empty() {
            self.render_quick_questions()?;
        }
        self.out.flush()
    }

    fn render_message(&mut self, message: &MessageView<'_>) -> io::Result<()> {
        let (label, style) = match message.role {
            Role::Assistant => (ASSISTANT_LABEL, ASSISTANT_STYLE),
            Role::User => (USER_LABEL, USER_STYLE),
        };
        let bar = self.paint(BAR_CHAR, style);
        let label = self.paint(label, style);

        writeln!(self.out)?;
        writeln!(self.out, "{bar}{label}")?;
        for line in message.content.lines() {
            writeln!(self.out, "{bar}{line}")?;
        }
        for card in &message.products {
            self.render_card(card)?;
        }
        Ok(())
    }

    fn render_card(&mut self, card: &ProductCard<'_>) -> io::Result<()> {
        let name = self.paint(card.name, Style::new().bold());
        match card.glyph {
            Some(glyph) => writeln!(self.out, "  {glyph} {name}")?,
            None => writeln!(self.out, "  {name}")?,
        }

        let brand = self.paint(card.brand, MUTED_STYLE);
        let price = self.paint(&format!("€{}", card.price), PRICE_STYLE);
        writeln!(self.out, "     {brand} · {price}")?;

        for benefit in card.benefits {
            writeln!(self.out, "     ✓ {benefit}")?;
        }

        let link = self.paint(card.link, LINK_STYLE);
        writeln!(self.out, "     {BUY_LABEL}: {link}")
    }

    fn render_quick_questions(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        let heading = self.paint("Domande frequenti:", MUTED_STYLE);
        writeln!(self.out, "{heading}")?;
        for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
            let number = self.paint(&format!("[{}]", index + 1), USER_STYLE);
            writeln!(self.out, "  {number} {question}")?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use beautygpt_core::conversation::{Conversation, GREETING};
    use beautygpt_core::outcome::Outcome;
    use beautygpt_model::Product;

    use super::*;

    fn plain_renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new()).with_colors(false)
    }

    fn take_output(renderer: &mut TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(&mut renderer.out)).unwrap()
    }

    fn serum() -> Product {
        Product {
            id: 4,
            name: "Siero Vitamina C 15%".to_owned(),
            brand: "La Roche-Posay".to_owned(),
            category: "serum".to_owned(),
            price: 29.9,
            amazon_url: "https://example.com/vitamin-c".to_owned(),
            image_url: String::new(),
            skin_types: vec!["tutti".to_owned()],
            benefits: vec![
                "illuminante".to_owned(),
                "antiossidante".to_owned(),
                "uniformante".to_owned(),
                "anti-age".to_owned(),
            ],
            description: String::new(),
        }
    }

    #[test]
    fn test_intro() {
        let mut renderer = plain_renderer();
        renderer.render_intro().unwrap();
        let output = take_output(&mut renderer);
        assert!(output.starts_with("✨ BeautyGPT\n"));
        assert!(output.contains(DISCLAIMER));
    }

    #[test]
    fn test_fresh_conversation() {
        let conversation = Conversation::new();
        let mut renderer = plain_renderer();
        renderer.render(&TranscriptView::new(&conversation)).unwrap();
        let output = take_output(&mut renderer);

        assert!(output.contains("▎BeautyGPT\n"));
        assert!(output.contains(&format!("▎{GREETING}\n")));
        for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
            assert!(output.contains(&format!("[{}] {question}", index + 1)));
        }
        assert_eq!(renderer.printed(), 1);

        // Nothing new, nothing printed.
        renderer.render(&TranscriptView::new(&conversation)).unwrap();
        assert!(take_output(&mut renderer).is_empty());
    }

    #[test]
    fn test_only_unseen_messages() {
        let mut conversation = Conversation::new();
        let mut renderer = plain_renderer();
        renderer.render(&TranscriptView::new(&conversation)).unwrap();
        take_output(&mut renderer);

        conversation.append_user_message("Cerco un siero").unwrap();
        conversation.begin_request();
        renderer.render(&TranscriptView::new(&conversation)).unwrap();
        let output = take_output(&mut renderer);
        assert_eq!(output, "\n▎Tu\n▎Cerco un siero\n");
        assert!(renderer.is_waiting());

        conversation
            .complete_request(Outcome::new("Ecco:", vec![serum()]))
            .unwrap();
        renderer.render(&TranscriptView::new(&conversation)).unwrap();
        let output = take_output(&mut renderer);
        assert_eq!(
            output,
            "\n▎BeautyGPT\n▎Ecco:\n\
             \x20 💧 Siero Vitamina C 15%\n\
             \x20    La Roche-Posay · €29.90\n\
             \x20    ✓ illuminante\n\
             \x20    ✓ antiossidante\n\
             \x20    ✓ uniformante\n\
             \x20    Acquista su Amazon: https://example.com/vitamin-c\n"
        );
        assert!(!output.contains("anti-age"));
        assert!(!output.contains("Domande frequenti"));
        assert_eq!(renderer.printed(), 3);
        assert!(!renderer.is_waiting());
    }

    #[test]
    fn test_unknown_category() {
        let mut conversation = Conversation::new();
        conversation.append_user_message("Un profumo?").unwrap();
        conversation.begin_request();
        let mut perfume = serum();
        perfume.category = "profumo".to_owned();
        perfume.benefits.clear();
        conversation
            .complete_request(Outcome::new("Prova", vec![perfume]))
            .unwrap();

        let mut renderer = plain_renderer();
        renderer.render(&TranscriptView::new(&conversation)).unwrap();
        let output = take_output(&mut renderer);
        assert!(output.contains("\n  Siero Vitamina C 15%\n"));
        assert!(!output.contains('✓'));
    }
}
