// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::conversation;
use crate::ui::hello_button;
use crate::ui::message_card;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    HelloButton(hello_button::Message),
    FeaturedCard(message_card::Message),
    Conversation(conversation::Message),
    /// Animation frame while a transition is running.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override; takes precedence over the config file.
    pub theme_mode: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHAT_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
