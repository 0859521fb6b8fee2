// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the router, the
//! brand pages, and the artwork cache.
//!
//! The `App` struct wires the pieces together and keeps one policy
//! decision close to the update loop: The Penny Club carousel is
//! mounted exactly while the router says that content is visible, so
//! its auto-advance subscription can never outlive the gallery it
//! drives.

pub mod layout;
mod message;
mod subscription;
mod update;
mod view;

pub use layout::{Layout, Router, SplitFocus, StackedView, SPLIT_BREAKPOINT};
pub use message::{Flags, Message};

use crate::config;
use crate::content::{penny as penny_content, savvy as savvy_content, Brand};
use crate::media::{self, ImageCache};
use crate::ui::penny;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

const WINDOW_TITLE: &str = "BeHorseSavvy & The Penny Club";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    router: Router,
    penny: penny::State,
    images: ImageCache,
    /// Whether the carousel may advance on its own (config setting).
    autoplay: bool,
}

impl Default for App {
    fn default() -> Self {
        let mut app = Self {
            router: Router::new(WINDOW_DEFAULT_WIDTH as f32),
            penny: penny::State::new(),
            images: ImageCache::new(),
            autoplay: true,
        };
        app.sync_carousel_mount();
        app
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait bound
    // while only consuming flags once (the boot closure must be Fn).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags and kicks
    /// off the artwork fetches.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref().map(Path::new)).unwrap_or_default();

        let mut app = App {
            autoplay: config.autoplay.unwrap_or(true),
            ..Self::default()
        };

        let start_brand = flags
            .brand
            .as_deref()
            .or(config.start_brand.as_deref())
            .and_then(Brand::from_identifier);
        if let Some(brand) = start_brand {
            app.router.start_on(brand);
        }
        app.sync_carousel_mount();

        let task = fetch_artwork(&mut app.images);
        (app, task)
    }

    fn title(&self) -> String {
        let focused = match self.router.layout {
            Layout::Stacked => match self.router.stacked {
                StackedView::Selection => None,
                StackedView::Savvy => Some(Brand::Savvy),
                StackedView::Penny => Some(Brand::Penny),
            },
            Layout::Split => match self.router.focus {
                SplitFocus::None => None,
                SplitFocus::Savvy => Some(Brand::Savvy),
                SplitFocus::Penny => Some(Brand::Penny),
            },
        };

        match focused {
            Some(brand) => format!("{} - {}", brand.name(), WINDOW_TITLE),
            None => WINDOW_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        // Both brand identities are dark surfaces; the chrome follows.
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = subscription::create_resize_subscription();
        let ticks = subscription::create_tick_subscription(
            self.autoplay && self.penny.autoplay_ready(),
        );

        Subscription::batch([resize, ticks])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            router: &self.router,
            penny: &self.penny,
            images: &self.images,
        })
    }

    /// Re-derives the carousel mount state from router visibility.
    fn sync_carousel_mount(&mut self) {
        self.penny.set_visible(self.router.shows_penny());
    }
}

/// Dispatches one fetch task per artwork URI not already in the cache.
fn fetch_artwork(images: &mut ImageCache) -> Task<Message> {
    let mut urls = vec![savvy_content::LOGO_URL.to_string()];
    urls.extend(penny_content::SLIDES.iter().map(|s| s.source.to_string()));

    let mut tasks = Vec::new();
    for url in urls {
        if images.mark_loading(&url) {
            tasks.push(Task::perform(
                async move {
                    let result = media::fetch_image(url.clone()).await;
                    (url, result)
                },
                |(url, result)| Message::ImageFetched { url, result },
            ));
        }
    }

    Task::batch(tasks)
}
