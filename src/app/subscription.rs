// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::carousel::DWELL;
use iced::{event, time, Subscription};

/// Routes window resize events to the layout router. Everything else is
/// handled by the widgets themselves.
pub fn create_resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates the auto-advance tick subscription.
///
/// The subscription exists only while a carousel is mounted, unzoomed,
/// and autoplay is enabled. Dropping it (zoom, unmount, or quit) stops
/// the periodic timer at the runtime level, and re-creating it starts a
/// fresh dwell window, which is exactly the restart-on-zoom-out
/// behavior the controller expects.
pub fn create_tick_subscription(running: bool) -> Subscription<Message> {
    if running {
        time::every(DWELL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
