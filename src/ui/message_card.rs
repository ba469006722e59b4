// SPDX-License-Identifier: MPL-2.0
//! Chat message card: avatar, author and an expandable body.
//!
//! Clicking the author/body column toggles the card. An expanded card shows
//! every line of the body on a surface tinted with the primary color; a
//! collapsed card shows a single line on the plain surface color. Both the
//! tint and the body height animate between the two; the expanded height
//! counts soft-wrapped rows at the width the card is given.

use crate::domain::chat::ChatMessage;
use crate::ui::animation::{lerp, mix, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    font::Weight,
    mouse,
    widget::{container, mouse_area, responsive, text, text::Wrapping, Column, Row},
    Element, Font, Length, Size,
};
use std::time::{Duration, Instant};

/// Local state of a single message card.
#[derive(Debug, Clone)]
pub struct State {
    is_expanded: bool,
    surface: Transition,
}

impl State {
    /// Creates a collapsed card.
    #[must_use]
    pub fn new(animation: Duration) -> Self {
        Self {
            is_expanded: false,
            surface: Transition::new(false, animation),
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// Maximum number of visible body lines; `None` means unlimited.
    #[must_use]
    pub fn max_lines(&self) -> Option<usize> {
        if self.is_expanded {
            None
        } else {
            Some(1)
        }
    }

    /// The part of `message` the card shows in its current state.
    #[must_use]
    pub fn visible_body(&self, message: &ChatMessage) -> &'static str {
        match self.max_lines() {
            None => message.body(),
            Some(_) => message.first_line(),
        }
    }

    /// Tint of the body surface in `0.0..=1.0` (surface to primary).
    #[must_use]
    pub fn surface_progress(&self) -> f32 {
        self.surface.progress()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.surface.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.surface.tick(now);
    }
}

/// Messages emitted by a message card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

pub fn update(state: &mut State, message: Message, now: Instant) {
    match message {
        Message::Toggle => {
            state.is_expanded = !state.is_expanded;
            state.surface.retarget(state.is_expanded, now);
        }
    }
}

/// Contextual data needed to render a message card.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub message: &'a ChatMessage,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        colors,
        message,
        state,
    } = ctx;

    let avatar = container(text(message.author_initial()).size(typography::AVATAR_INITIAL))
        .center_x(Length::Fixed(sizing::AVATAR))
        .center_y(Length::Fixed(sizing::AVATAR))
        .style(styles::container::avatar(colors));

    let author = text(message.author())
        .size(typography::SUBTITLE_2)
        .font(Font {
            weight: Weight::Medium,
            ..Font::DEFAULT
        })
        .color(colors.secondary_variant);

    let body = responsive(move |available: Size| {
        body_surface(colors, message, state, available.width)
    })
    .height(Length::Shrink);

    let details = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXS)
        .push(author)
        .push(container(body).padding(spacing::XXXS));

    let clickable = mouse_area(details)
        .on_press(Message::Toggle)
        .interaction(mouse::Interaction::Pointer);

    Row::new()
        .padding(spacing::XS)
        .spacing(spacing::XS)
        .push(avatar)
        .push(clickable)
        .into()
}

/// Tinted body surface laid out for a surface `width` pixels wide.
fn body_surface<'a>(
    colors: &ColorScheme,
    message: &'a ChatMessage,
    state: &State,
    width: f32,
) -> Element<'a, Message> {
    let progress = state.surface.progress();
    let background = mix(colors.surface, colors.primary, progress);
    let foreground = mix(colors.on_surface, colors.on_primary, progress);

    // While the height animates the whole body is laid out and clipped.
    let body_text = if state.is_animating() {
        message.body()
    } else {
        state.visible_body(message)
    };
    let mut body = text(body_text)
        .size(typography::BODY_2)
        .line_height(typography::LINE_HEIGHT)
        .color(foreground);
    if state.max_lines() == Some(1) && !state.is_animating() {
        body = body.wrapping(Wrapping::None);
    }

    let mut surface = container(body)
        .padding(spacing::XXS)
        .clip(true)
        .style(styles::container::message_surface(background, foreground));
    if state.is_animating() {
        let lines = visual_line_count(message.body(), width - 2.0 * spacing::XXS);
        surface = surface.height(Length::Fixed(body_height(lines, progress)));
    }

    surface.into()
}

/// Estimated number of rendered lines of `body` once wrapped to `text_width`.
///
/// Every hard line takes at least one row; longer lines take one row per
/// `text_width` of estimated glyph advance.
#[must_use]
pub fn visual_line_count(body: &str, text_width: f32) -> usize {
    let hard_lines = body.lines().count().max(1);
    if !text_width.is_finite() || text_width <= 0.0 {
        return hard_lines;
    }

    let advance = typography::BODY_2 * typography::AVERAGE_GLYPH_WIDTH;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let wrapped: usize = body
        .lines()
        .map(|line| {
            let width = line.chars().count() as f32 * advance;
            ((width / text_width).ceil() as usize).max(1)
        })
        .sum();
    wrapped.max(hard_lines)
}

/// Height of the body surface while animating between one line and `lines` lines.
fn body_height(lines: usize, progress: f32) -> f32 {
    let line = typography::BODY_2 * typography::LINE_HEIGHT;
    #[allow(clippy::cast_precision_loss)]
    let visible_lines = lerp(1.0, lines.max(1) as f32, progress);
    visible_lines * line + 2.0 * spacing::XXS
}
