// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window background in the scheme's background color.
pub fn screen(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.background;
    let text_color = colors.on_background;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Circular avatar placeholder ringed with the secondary color.
pub fn avatar(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let fill = colors.secondary_variant;
    let ring = colors.secondary;
    let text_color = colors.on_secondary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(text_color),
        border: Border {
            color: ring,
            width: border::WIDTH_AVATAR,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Raised message surface; both colors follow the expand transition.
pub fn message_surface(background: Color, text_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            color: Color {
                a: 0.12,
                ..text_color
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::ELEVATION_1,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_is_round_and_ringed() {
        let colors = ColorScheme::light();
        let style = avatar(&colors)(&Theme::Light);
        assert_eq!(style.border.color, colors.secondary);
        assert_eq!(style.border.width, border::WIDTH_AVATAR);
    }

    #[test]
    fn message_surface_uses_given_colors() {
        let style = message_surface(Color::WHITE, Color::BLACK)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(Color::WHITE)));
        assert_eq!(style.text_color, Some(Color::BLACK));
    }

    #[test]
    fn screen_uses_background_color() {
        let colors = ColorScheme::dark();
        let style = screen(&colors)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(colors.background)));
    }
}
