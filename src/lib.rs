// SPDX-License-Identifier: MPL-2.0
//! `split_stage` is a dual-brand promotional showcase built with the Iced
//! GUI framework.
//!
//! One window presents two unrelated equestrian businesses side by side:
//! a split-screen layout on wide windows and a stacked selection flow on
//! narrow ones. All content is literal promotional copy; the one piece
//! of live machinery is the gallery carousel with its auto-advance
//! timer and zoom interrupt.

pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod media;
pub mod ui;
