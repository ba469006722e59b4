// SPDX-License-Identifier: MPL-2.0
//! Scrolling list of message cards.

use crate::domain::chat::ChatMessage;
use crate::ui::message_card;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{scrollable, Column},
    Element, Length,
};
use std::time::{Duration, Instant};

/// One card state per message, in display order.
#[derive(Debug, Clone)]
pub struct State {
    cards: Vec<message_card::State>,
}

impl State {
    #[must_use]
    pub fn new(len: usize, animation: Duration) -> Self {
        Self {
            cards: (0..len).map(|_| message_card::State::new(animation)).collect(),
        }
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&message_card::State> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(message_card::State::is_animating)
    }

    pub fn tick(&mut self, now: Instant) {
        for card in self.cards.iter_mut().filter(|card| card.is_animating()) {
            card.tick(now);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Card(usize, message_card::Message),
}

pub fn update(state: &mut State, message: Message, now: Instant) {
    match message {
        Message::Card(index, card_message) => match state.cards.get_mut(index) {
            Some(card) => message_card::update(card, card_message, now),
            None => log::debug!("ignoring message for missing card {index}"),
        },
    }
}

/// Contextual data needed to render the conversation.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub messages: &'a [ChatMessage],
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let cards = ctx
        .messages
        .iter()
        .zip(&ctx.state.cards)
        .enumerate()
        .map(move |(index, (message, state))| {
            message_card::view(message_card::ViewContext {
                colors,
                message,
                state,
            })
            .map(move |card_message| Message::Card(index, card_message))
        });

    scrollable(Column::with_children(cards).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::conversation_sample;

    const ANIMATION: Duration = Duration::from_millis(200);

    #[test]
    fn one_collapsed_card_per_message() {
        let state = State::new(conversation_sample().len(), ANIMATION);
        assert_eq!(state.len(), 13);
        assert!((0..state.len()).all(|i| state.card(i).is_some_and(|c| !c.is_expanded())));
    }

    #[test]
    fn toggling_one_card_leaves_the_others_alone() {
        let mut state = State::new(3, ANIMATION);
        update(
            &mut state,
            Message::Card(1, message_card::Message::Toggle),
            Instant::now(),
        );

        assert!(!state.card(0).is_some_and(message_card::State::is_expanded));
        assert!(state.card(1).is_some_and(message_card::State::is_expanded));
        assert!(!state.card(2).is_some_and(message_card::State::is_expanded));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut state = State::new(2, ANIMATION);
        update(
            &mut state,
            Message::Card(7, message_card::Message::Toggle),
            Instant::now(),
        );
        assert!(!state.is_animating());
    }

    #[test]
    fn tick_finishes_every_running_card() {
        let mut state = State::new(3, ANIMATION);
        let start = Instant::now();
        update(&mut state, Message::Card(0, message_card::Message::Toggle), start);
        update(&mut state, Message::Card(2, message_card::Message::Toggle), start);
        assert!(state.is_animating());

        state.tick(start + ANIMATION);
        assert!(!state.is_animating());
    }

    #[test]
    fn view_renders_sample_conversation() {
        let colors = ColorScheme::light();
        let messages = conversation_sample();
        let state = State::new(messages.len(), ANIMATION);
        let _element = view(ViewContext {
            colors: &colors,
            messages,
            state: &state,
        });
    }
}
