// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Every router transition funnels through [`update`] so the carousel
//! mount state is re-derived after each one; mount/unmount is a
//! consequence of visibility, never an independent flag that could
//! drift.

use super::{App, Message};
use crate::carousel::DWELL;
use crate::ui::{penny, savvy, selection};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Selection(selection::Message::Choose(brand)) => {
            app.router.open(brand);
            app.sync_carousel_mount();
            Task::none()
        }
        Message::Savvy(savvy_message) => {
            match savvy::update(&savvy_message) {
                savvy::Event::Back => {
                    app.router.back();
                    app.sync_carousel_mount();
                }
                savvy::Event::None => {}
            }
            Task::none()
        }
        Message::Penny(penny_message) => {
            match app.penny.update(penny_message) {
                penny::Event::Back => {
                    app.router.back();
                    app.sync_carousel_mount();
                }
                penny::Event::None => {}
            }
            Task::none()
        }
        Message::ToggleFocus(brand) => {
            app.router.toggle_focus(brand);
            app.sync_carousel_mount();
            Task::none()
        }
        Message::WindowResized(size) => {
            app.router.resize(size.width);
            app.sync_carousel_mount();
            Task::none()
        }
        Message::Tick(_instant) => {
            // The subscription fires once per dwell window, so each tick
            // carries exactly one window's worth of elapsed time. Ticks
            // racing a just-unmounted carousel are discarded downstream.
            app.penny.tick(DWELL);
            Task::none()
        }
        Message::ImageFetched { url, result } => {
            app.images.resolve(url, result);
            Task::none()
        }
    }
}
