// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and theme mode selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material-style color roles used by the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub secondary_variant: Color,
    pub background: Color,
    pub surface: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_background: Color,
    pub on_surface: Color,
}

impl ColorScheme {
    /// Light scheme: blue accents on white surfaces.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: palette::BLUE,
            primary_variant: palette::BLUE,
            secondary: palette::GRAY,
            secondary_variant: palette::GRAY,
            background: palette::WHITE,
            surface: palette::WHITE,
            on_primary: palette::WHITE,
            on_secondary: palette::BLACK,
            on_background: palette::BLACK,
            on_surface: palette::BLACK,
        }
    }

    /// Dark scheme: gray accents on black surfaces.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: palette::DARK_GRAY,
            primary_variant: palette::DARK_GRAY,
            secondary: palette::LIGHT_GRAY,
            secondary_variant: palette::LIGHT_GRAY,
            background: palette::BLACK,
            surface: palette::BLACK,
            on_primary: palette::BLACK,
            on_secondary: palette::WHITE,
            on_background: palette::WHITE,
            on_surface: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Unspecified or failed detection falls back to light, like the platform default.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Pins `System` to the mode detected right now; explicit modes are kept.
    #[must_use]
    pub fn resolved(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Iced built-in theme matching the effective mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Error returned when parsing an unknown theme mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid theme_mode: {} (expected light, dark or system)",
            self.0
        )
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}
