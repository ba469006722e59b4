// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the screen components.
//!
//! The `App` struct owns the localization, the color scheme and the local
//! state of every widget on the screen, and forwards messages to the component
//! they belong to. All widget state lives only as long as the window does.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::chat::{self, ChatMessage};
use crate::i18n::fluent::I18n;
use crate::platform;
use crate::ui::conversation;
use crate::ui::design_tokens::sizing;
use crate::ui::hello_button;
use crate::ui::message_card;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    hello_button: hello_button::State,
    featured_message: &'static ChatMessage,
    featured: message_card::State,
    messages: &'static [ChatMessage],
    conversation: conversation::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("show_image", &self.hello_button.show_image())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::MIN_WINDOW_WIDTH,
            sizing::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced requires a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences from disk and builds the initial screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            log::warn!("{warning}");
        }

        let app = Self::from_config(flags, &config);
        log::info!(
            "starting on {} with locale {} ({:?} theme)",
            platform::platform_name(),
            app.i18n.current_locale(),
            app.theme_mode,
        );

        (app, Task::none())
    }

    /// Builds the initial screen from already-loaded preferences.
    pub fn from_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);
        // The system theme is detected once; the screen keeps it for its lifetime.
        let theme_mode = flags
            .theme_mode
            .unwrap_or(config.general.theme_mode)
            .resolved();
        let colors = ColorScheme::for_mode(theme_mode);
        let animation = config.animation.duration();
        let messages = chat::conversation_sample();

        Self {
            hello_button: hello_button::State::new(&i18n, animation),
            i18n,
            theme_mode,
            colors,
            featured_message: chat::featured_message(),
            featured: message_card::State::new(animation),
            messages,
            conversation: conversation::State::new(messages.len(), animation),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating())
    }

    /// Whether any transition on the screen still needs animation ticks.
    pub fn is_animating(&self) -> bool {
        self.hello_button.is_animating()
            || self.featured.is_animating()
            || self.conversation.is_animating()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HelloButton(button_message) => hello_button::update(
                &mut self.hello_button,
                button_message,
                hello_button::UpdateContext {
                    i18n: &self.i18n,
                    platform_name: platform::platform_name(),
                    now: Instant::now(),
                },
            ),
            Message::FeaturedCard(card_message) => {
                message_card::update(&mut self.featured, card_message, Instant::now());
            }
            Message::Conversation(conversation_message) => {
                conversation::update(&mut self.conversation, conversation_message, Instant::now());
            }
            Message::Tick(now) => {
                self.hello_button.tick(now);
                self.featured.tick(now);
                self.conversation.tick(now);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            hello_button: &self.hello_button,
            featured_message: self.featured_message,
            featured: &self.featured,
            messages: self.messages,
            conversation: &self.conversation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;
    use crate::ui::message_card::Message as CardMessage;
    use std::time::Duration;

    fn english_light_app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            theme_mode: Some(ThemeMode::Light),
            config_dir: None,
        };
        App::from_config(flags, &Config::default())
    }

    #[test]
    fn initial_screen_state() {
        let app = english_light_app();
        assert_eq!(app.hello_button.greeting(), "Hello, World!");
        assert!(!app.hello_button.show_image());
        assert!(!app.featured.is_expanded());
        assert_eq!(app.featured_message.author(), "sglee487");
        assert_eq!(app.conversation.len(), app.messages.len());
        assert!(!app.is_animating());
    }

    #[test]
    fn title_is_localized() {
        let app = english_light_app();
        assert_eq!(app.title(), "Chat Preview");
    }

    #[test]
    fn theme_override_beats_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let app = App::from_config(
            Flags {
                theme_mode: Some(ThemeMode::Light),
                ..Flags::default()
            },
            &config,
        );
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.colors, ColorScheme::light());

        let dark = App::from_config(Flags::default(), &config);
        assert_eq!(dark.theme(), Theme::Dark);
        assert_eq!(dark.colors, ColorScheme::dark());
    }

    #[test]
    fn system_theme_is_pinned_at_startup() {
        let app = App::from_config(
            Flags {
                theme_mode: Some(ThemeMode::System),
                ..Flags::default()
            },
            &Config::default(),
        );
        assert_ne!(app.theme_mode, ThemeMode::System);
        assert_eq!(app.colors, ColorScheme::for_mode(app.theme_mode));
    }

    #[test]
    fn greet_button_names_the_platform_and_toggles_image() {
        let mut app = english_light_app();
        let expected = format!("Hello, {}", platform::platform_name());

        for presses in 1..=4 {
            let _ = app.update(Message::HelloButton(hello_button::Message::GreetPressed));
            assert_eq!(app.hello_button.greeting(), expected);
            assert_eq!(app.hello_button.show_image(), presses % 2 == 1);
        }
    }

    #[test]
    fn tick_drives_every_transition_to_completion() {
        let mut app = english_light_app();
        let _ = app.update(Message::HelloButton(hello_button::Message::GreetPressed));
        let _ = app.update(Message::FeaturedCard(CardMessage::Toggle));
        let _ = app.update(Message::Conversation(conversation::Message::Card(
            4,
            CardMessage::Toggle,
        )));
        assert!(app.is_animating());

        let later = Instant::now() + Duration::from_secs(5);
        let _ = app.update(Message::Tick(later));
        assert!(!app.is_animating());
        assert_eq!(app.hello_button.image_progress(), 1.0);
        assert_eq!(app.featured.surface_progress(), 1.0);
        assert!(app
            .conversation
            .card(4)
            .is_some_and(|card| card.surface_progress() == 1.0));
    }

    #[test]
    fn featured_card_toggles_line_limit() {
        let mut app = english_light_app();
        assert_eq!(app.featured.max_lines(), Some(1));
        let _ = app.update(Message::FeaturedCard(CardMessage::Toggle));
        assert_eq!(app.featured.max_lines(), None);
        let _ = app.update(Message::FeaturedCard(CardMessage::Toggle));
        assert_eq!(app.featured.max_lines(), Some(1));
    }

    #[test]
    fn disabled_animations_never_tick() {
        let config = Config {
            animation: AnimationConfig {
                duration_ms: Some(0),
            },
            ..Config::default()
        };
        let mut app = App::from_config(
            Flags {
                lang: Some("en-US".to_string()),
                ..Flags::default()
            },
            &config,
        );
        let _ = app.update(Message::FeaturedCard(CardMessage::Toggle));
        assert!(!app.is_animating());
        assert_eq!(app.featured.surface_progress(), 1.0);
    }

    #[test]
    fn view_renders() {
        let app = english_light_app();
        let _element = app.view();
    }
}
