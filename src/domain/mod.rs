// SPDX-License-Identifier: MPL-2.0
//! Domain layer with no dependency on the UI toolkit.
//!
//! # Modules
//!
//! - [`chat`]: Chat message record ([`ChatMessage`](chat::ChatMessage)) and
//!   the fixed sample conversation.

pub mod chat;
