// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription that drives running transitions.
///
/// Idle screens subscribe to nothing, so no timer fires between interactions.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
