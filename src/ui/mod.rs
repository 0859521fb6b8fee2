// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`selection`] - Stacked-layout landing with one tappable panel per brand
//! - [`savvy`] - BeHorseSavvy page (hero plus static content sections)
//! - [`penny`] - The Penny Club page (hero, gallery carousel, content sections)
//!
//! # Shared Infrastructure
//!
//! - [`carousel`] - Widget layer over the carousel state machine
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel;
pub mod design_tokens;
pub mod penny;
pub mod savvy;
pub mod selection;
pub mod styles;
