// SPDX-License-Identifier: MPL-2.0
//! Chat domain types.

pub mod sample;

pub use sample::{conversation_sample, featured_message};

/// A single chat message: who wrote it and what they wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    author: &'static str,
    body: &'static str,
}

impl ChatMessage {
    #[must_use]
    pub const fn new(author: &'static str, body: &'static str) -> Self {
        Self { author, body }
    }

    #[must_use]
    pub fn author(&self) -> &'static str {
        self.author
    }

    #[must_use]
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Number of lines in the body; at least one, even for an empty body.
    ///
    /// A trailing newline does not start a new line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.body.lines().count().max(1)
    }

    /// First line of the body, shown while a message card is collapsed.
    #[must_use]
    pub fn first_line(&self) -> &'static str {
        self.body.lines().next().unwrap_or("")
    }

    /// Uppercased first character of the author, used as avatar placeholder.
    #[must_use]
    pub fn author_initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_ignores_trailing_newline() {
        let msg = ChatMessage::new("a", "one\ntwo\n");
        assert_eq!(msg.line_count(), 2);
    }

    #[test]
    fn empty_body_has_one_line() {
        let msg = ChatMessage::new("a", "");
        assert_eq!(msg.line_count(), 1);
        assert_eq!(msg.first_line(), "");
    }

    #[test]
    fn first_line_stops_at_newline() {
        let msg = ChatMessage::new("a", "List of versions:\nKitKat");
        assert_eq!(msg.first_line(), "List of versions:");
    }

    #[test]
    fn author_initial_is_uppercase() {
        assert_eq!(ChatMessage::new("sglee487", "").author_initial(), "S");
        assert_eq!(ChatMessage::new("", "").author_initial(), "");
    }
}
