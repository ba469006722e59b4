// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::animation::mix;
use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Overlay strength of the hover state layer.
const HOVER_STATE_LAYER: f32 = 0.08;

/// Overlay strength of the pressed state layer.
const PRESSED_STATE_LAYER: f32 = 0.24;

/// Opacity of disabled content.
const DISABLED_ALPHA: f32 = 0.38;

/// Filled button in the scheme's primary color.
pub fn primary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.primary;
    let content = colors.on_primary;

    move |_theme: &Theme, status: button::Status| {
        let (background, text_color, shadow) = match status {
            button::Status::Active => (base, content, shadow::SM),
            button::Status::Hovered => (mix(base, content, HOVER_STATE_LAYER), content, shadow::SM),
            button::Status::Pressed => (
                mix(base, content, PRESSED_STATE_LAYER),
                content,
                shadow::NONE,
            ),
            button::Status::Disabled => (
                Color {
                    a: DISABLED_ALPHA,
                    ..base
                },
                Color {
                    a: DISABLED_ALPHA,
                    ..content
                },
                shadow::NONE,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_scheme_colors() {
        let colors = ColorScheme::light();
        let style = primary(&colors)(&Theme::Light, button::Status::Active);

        assert_eq!(style.background, Some(Background::Color(colors.primary)));
        assert_eq!(style.text_color, colors.on_primary);
    }

    #[test]
    fn hover_and_press_change_background() {
        let colors = ColorScheme::dark();
        let style_fn = primary(&colors);

        let active = style_fn(&Theme::Dark, button::Status::Active);
        let hovered = style_fn(&Theme::Dark, button::Status::Hovered);
        let pressed = style_fn(&Theme::Dark, button::Status::Pressed);

        assert_ne!(active.background, hovered.background);
        assert_ne!(hovered.background, pressed.background);
    }

    #[test]
    fn disabled_button_is_translucent() {
        let colors = ColorScheme::light();
        let style = primary(&colors)(&Theme::Light, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
    }
}
