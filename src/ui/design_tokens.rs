// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the screen.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use chat_preview::ui::design_tokens::{palette, spacing};

let surface = palette::WHITE;
let gap = spacing::XS; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const DARK_GRAY: Color = Color::from_rgb(0.267, 0.267, 0.267); // #444444
    pub const GRAY: Color = Color::from_rgb(0.533, 0.533, 0.533); // #888888
    pub const LIGHT_GRAY: Color = Color::from_rgb(0.8, 0.8, 0.8); // #CCCCCC
    pub const BLUE: Color = Color::from_rgb(0.0, 0.0, 1.0);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXXS: f32 = 1.0;
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Profile picture diameter.
    pub const AVATAR: f32 = 40.0;

    /// Edge length of the illustration revealed by the greeting button.
    pub const ILLUSTRATION: f32 = 160.0;

    /// Width of the greeting text field.
    pub const INPUT_WIDTH: f32 = 280.0;

    /// Default window size.
    pub const WINDOW_WIDTH: f32 = 480.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Minimum window size.
    pub const MIN_WINDOW_WIDTH: f32 = 320.0;
    pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes named after the Material type scale roles they stand in for.

    /// Button labels and text fields.
    pub const BUTTON: f32 = 14.0;

    /// Author name above a message body.
    pub const SUBTITLE_2: f32 = 14.0;

    /// Message body text.
    pub const BODY_2: f32 = 14.0;

    /// Avatar initial.
    pub const AVATAR_INITIAL: f32 = 18.0;

    /// Line height multiplier applied to body text.
    pub const LINE_HEIGHT: f32 = 1.3;

    /// Average glyph advance as a fraction of the font size, for wrap estimates.
    pub const AVERAGE_GLYPH_WIDTH: f32 = 0.55;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Message body surface outline.
    pub const WIDTH_SM: f32 = 1.0;

    /// Avatar ring.
    pub const WIDTH_AVATAR: f32 = 1.5;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// One-step elevation used by message surfaces.
    pub const ELEVATION_1: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.2,
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.3,
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > spacing::XXXS);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(typography::AVERAGE_GLYPH_WIDTH > 0.0 && typography::AVERAGE_GLYPH_WIDTH < 1.0);

    assert!(sizing::WINDOW_WIDTH >= sizing::MIN_WINDOW_WIDTH);
    assert!(sizing::WINDOW_HEIGHT >= sizing::MIN_WINDOW_HEIGHT);
    assert!(sizing::INPUT_WIDTH <= sizing::MIN_WINDOW_WIDTH);

    assert!(border::WIDTH_AVATAR > border::WIDTH_SM);
    assert!(radius::MD > radius::SM);
};
