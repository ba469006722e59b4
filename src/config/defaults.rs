// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of color, size and visibility transitions (milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;

/// Minimum transition duration. Zero disables animations.
pub const MIN_ANIMATION_DURATION_MS: u32 = 0;

/// Maximum transition duration.
pub const MAX_ANIMATION_DURATION_MS: u32 = 2000;

/// Interval between animation ticks while a transition is running (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS gives a match.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(MIN_ANIMATION_DURATION_MS <= DEFAULT_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(ANIMATION_TICK_MS > 0);
};
