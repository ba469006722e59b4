// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, a `Message` enum, an `update` function and a `view`
//! function taking a `ViewContext`.
//!
//! # Components
//!
//! - [`hello_button`] - Greeting button, greeting field and animated illustration
//! - [`message_card`] - Expandable chat message card
//! - [`conversation`] - Scrolling list of message cards
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Time-driven transitions and color interpolation
//! - [`assets`] - Embedded images
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes

pub mod animation;
pub mod assets;
pub mod conversation;
pub mod design_tokens;
pub mod hello_button;
pub mod message_card;
pub mod styles;
pub mod theming;
