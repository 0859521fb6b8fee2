// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Brand;
use crate::error::Error;
use crate::ui::{penny, savvy, selection};
use iced::widget::image::Handle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Selection(selection::Message),
    Savvy(savvy::Message),
    Penny(penny::Message),
    /// Split layout: expand/restore one brand pane.
    ToggleFocus(Brand),
    /// The window was resized; the layout may switch across the breakpoint.
    WindowResized(iced::Size),
    /// One auto-advance dwell window elapsed.
    Tick(Instant),
    /// A remote artwork fetch finished.
    ImageFetched {
        url: String,
        result: Result<Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Optional brand to open focused (`savvy` or `penny`). Takes
    /// precedence over the config file's `start_brand`.
    pub brand: Option<String>,
}
