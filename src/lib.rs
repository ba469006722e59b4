// SPDX-License-Identifier: MPL-2.0
//! `chat_preview` is a small demo screen built with the Iced GUI framework.
//!
//! It shows a greeting button that names the host platform and reveals an
//! animated illustration, followed by a chat-style list of expandable message
//! cards built from a fixed sample conversation.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod platform;
pub mod ui;
