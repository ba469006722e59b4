// SPDX-License-Identifier: MPL-2.0
//! Greeting button with an editable greeting and an animated illustration.
//!
//! Pressing the button replaces the greeting with one naming the host
//! platform and toggles the illustration below it. The text field edits the
//! same greeting the button displays.

use crate::i18n::fluent::I18n;
use crate::ui::animation::Transition;
use crate::ui::assets;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, svg, text, text_input, Column},
    Element, Length,
};
use std::time::{Duration, Instant};

/// Local state of the greeting widget.
#[derive(Debug, Clone)]
pub struct State {
    greeting: String,
    show_image: bool,
    image: Transition,
}

impl State {
    /// Creates the widget with the localized initial greeting and the image hidden.
    pub fn new(i18n: &I18n, animation: Duration) -> Self {
        Self {
            greeting: i18n.tr("greeting-initial"),
            show_image: false,
            image: Transition::new(false, animation),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn show_image(&self) -> bool {
        self.show_image
    }

    /// Visibility of the illustration in `0.0..=1.0`.
    pub fn image_progress(&self) -> f32 {
        self.image.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.image.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.image.tick(now);
    }
}

/// Messages emitted by the greeting widget.
#[derive(Debug, Clone)]
pub enum Message {
    GreetPressed,
    GreetingEdited(String),
}

/// Inputs needed to process a message.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub platform_name: &'a str,
    pub now: Instant,
}

pub fn update(state: &mut State, message: Message, ctx: UpdateContext<'_>) {
    match message {
        Message::GreetPressed => {
            state.greeting = ctx
                .i18n
                .tr_with_args("greeting-platform", &[("platform", ctx.platform_name)]);
            state.show_image = !state.show_image;
            state.image.retarget(state.show_image, ctx.now);
            log::debug!("greeting pressed, image visible: {}", state.show_image);
        }
        Message::GreetingEdited(greeting) => {
            state.greeting = greeting;
        }
    }
}

/// Contextual data needed to render the greeting widget.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let greet_button = button(text(state.greeting.as_str()).size(typography::BUTTON))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary(ctx.colors))
        .on_press(Message::GreetPressed);

    let greeting_field = text_input(
        &ctx.i18n.tr("greeting-field-placeholder"),
        state.greeting.as_str(),
    )
    .on_input(Message::GreetingEdited)
    .size(typography::BUTTON)
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::INPUT_WIDTH));

    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .push(greet_button)
        .push(greeting_field);

    if !state.image.is_fully_off() {
        if let Some(handle) = assets::illustration() {
            let progress = state.image.progress();
            column = column.push(
                svg(handle)
                    .width(Length::Fixed(sizing::ILLUSTRATION))
                    .height(Length::Fixed(sizing::ILLUSTRATION * progress))
                    .opacity(progress),
            );
        }
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const ANIMATION: Duration = Duration::from_millis(300);

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn press(state: &mut State, i18n: &I18n, now: Instant) {
        update(
            state,
            Message::GreetPressed,
            UpdateContext {
                i18n,
                platform_name: "TestOS",
                now,
            },
        );
    }

    #[test]
    fn starts_with_hello_world_and_hidden_image() {
        let i18n = english();
        let state = State::new(&i18n, ANIMATION);
        assert_eq!(state.greeting(), "Hello, World!");
        assert!(!state.show_image());
        assert_eq!(state.image_progress(), 0.0);
    }

    #[test]
    fn press_greets_the_platform() {
        let i18n = english();
        let mut state = State::new(&i18n, ANIMATION);
        press(&mut state, &i18n, Instant::now());
        assert_eq!(state.greeting(), "Hello, TestOS");
    }

    #[test]
    fn image_visibility_follows_press_parity() {
        let i18n = english();
        let mut state = State::new(&i18n, ANIMATION);
        for presses in 1..=6 {
            press(&mut state, &i18n, Instant::now());
            assert_eq!(state.show_image(), presses % 2 == 1);
        }
    }

    #[test]
    fn image_fades_in_over_the_animation() {
        let i18n = english();
        let mut state = State::new(&i18n, ANIMATION);
        let start = Instant::now();
        press(&mut state, &i18n, start);
        assert!(state.is_animating());

        state.tick(start + ANIMATION / 2);
        assert!(state.image_progress() > 0.0 && state.image_progress() < 1.0);

        state.tick(start + ANIMATION);
        assert_eq!(state.image_progress(), 1.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn editing_replaces_the_greeting() {
        let i18n = english();
        let mut state = State::new(&i18n, ANIMATION);
        update(
            &mut state,
            Message::GreetingEdited("Hi there".to_string()),
            UpdateContext {
                i18n: &i18n,
                platform_name: "TestOS",
                now: Instant::now(),
            },
        );
        assert_eq!(state.greeting(), "Hi there");
        assert!(!state.show_image());
    }

    #[test]
    fn press_overwrites_typed_greeting() {
        let i18n = english();
        let mut state = State::new(&i18n, ANIMATION);
        update(
            &mut state,
            Message::GreetingEdited("x".to_string()),
            UpdateContext {
                i18n: &i18n,
                platform_name: "TestOS",
                now: Instant::now(),
            },
        );
        assert_eq!(state.greeting(), "x");

        press(&mut state, &i18n, Instant::now());
        assert_eq!(state.greeting(), "Hello, TestOS");
        assert!(state.show_image());
    }

    #[test]
    fn view_renders_in_both_states() {
        let i18n = english();
        let colors = ColorScheme::light();
        let mut state = State::new(&i18n, Duration::ZERO);
        {
            let _hidden = view(ViewContext {
                i18n: &i18n,
                colors: &colors,
                state: &state,
            });
        }

        press(&mut state, &i18n, Instant::now());
        let _shown = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            state: &state,
        });
    }
}
