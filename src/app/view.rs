// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen stacks the greeting widget, the featured message card and the
//! scrolling conversation.

use super::Message;
use crate::domain::chat::ChatMessage;
use crate::i18n::fluent::I18n;
use crate::ui::conversation;
use crate::ui::hello_button;
use crate::ui::message_card;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub hello_button: &'a hello_button::State,
    pub featured_message: &'a ChatMessage,
    pub featured: &'a message_card::State,
    pub messages: &'a [ChatMessage],
    pub conversation: &'a conversation::State,
}

/// Renders the whole screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let greeting = hello_button::view(hello_button::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        state: ctx.hello_button,
    })
    .map(Message::HelloButton);

    let featured = message_card::view(message_card::ViewContext {
        colors: ctx.colors,
        message: ctx.featured_message,
        state: ctx.featured,
    })
    .map(Message::FeaturedCard);

    let conversation = conversation::view(conversation::ViewContext {
        colors: ctx.colors,
        messages: ctx.messages,
        state: ctx.conversation,
    })
    .map(Message::Conversation);

    let column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(greeting)
        .push(featured)
        .push(conversation);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}
