// SPDX-License-Identifier: MPL-2.0
//! View routing: layout mode plus the per-layout brand selectors.
//!
//! Two independent selectors drive what is on screen. The stacked
//! (narrow) layout shows either the selection screen or one brand page;
//! the split (wide) layout shows both panes side by side unless one is
//! focused to full width. Which selector applies follows from the
//! window width, so resizing across the breakpoint switches layouts
//! without losing either selector's state.

use crate::content::Brand;

/// Window width at which the layout switches from stacked to split.
pub const SPLIT_BREAKPOINT: f32 = 1024.0;

/// Overall page arrangement, derived from window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Narrow window: one thing at a time, entered from a selection screen.
    Stacked,
    /// Wide window: both brand panes side by side.
    Split,
}

impl Layout {
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        if width < SPLIT_BREAKPOINT {
            Layout::Stacked
        } else {
            Layout::Split
        }
    }
}

/// What the stacked layout is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackedView {
    #[default]
    Selection,
    Savvy,
    Penny,
}

impl StackedView {
    #[must_use]
    pub fn for_brand(brand: Brand) -> Self {
        match brand {
            Brand::Savvy => StackedView::Savvy,
            Brand::Penny => StackedView::Penny,
        }
    }
}

/// Which split pane, if any, is expanded to full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitFocus {
    #[default]
    None,
    Savvy,
    Penny,
}

impl SplitFocus {
    #[must_use]
    pub fn for_brand(brand: Brand) -> Self {
        match brand {
            Brand::Savvy => SplitFocus::Savvy,
            Brand::Penny => SplitFocus::Penny,
        }
    }
}

/// Local routing state. All transitions are pure; the only downstream
/// effect is the carousel mount/unmount the application derives from
/// [`Router::shows_penny`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    pub layout: Layout,
    pub stacked: StackedView,
    pub focus: SplitFocus,
}

impl Router {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            layout: Layout::for_width(width),
            stacked: StackedView::default(),
            focus: SplitFocus::default(),
        }
    }

    /// Opens both selectors on the given brand (launch deep-link).
    pub fn start_on(&mut self, brand: Brand) {
        self.stacked = StackedView::for_brand(brand);
        self.focus = SplitFocus::for_brand(brand);
    }

    /// Recomputes the layout after a window resize.
    pub fn resize(&mut self, width: f32) {
        self.layout = Layout::for_width(width);
    }

    /// Stacked layout: enter a brand page from the selection screen.
    pub fn open(&mut self, brand: Brand) {
        self.stacked = StackedView::for_brand(brand);
    }

    /// Stacked layout: return to the selection screen.
    pub fn back(&mut self) {
        self.stacked = StackedView::Selection;
    }

    /// Split layout: expand one pane to full width, or restore the
    /// half-and-half arrangement when that pane is already focused.
    pub fn toggle_focus(&mut self, brand: Brand) {
        let target = SplitFocus::for_brand(brand);
        self.focus = if self.focus == target {
            SplitFocus::None
        } else {
            target
        };
    }

    /// Whether The Penny Club content is on screen. Drives the carousel
    /// mount/unmount in the application layer.
    #[must_use]
    pub fn shows_penny(&self) -> bool {
        match self.layout {
            Layout::Stacked => self.stacked == StackedView::Penny,
            Layout::Split => self.focus != SplitFocus::Savvy,
        }
    }

    /// Whether the BeHorseSavvy content is on screen.
    #[must_use]
    pub fn shows_savvy(&self) -> bool {
        match self.layout {
            Layout::Stacked => self.stacked == StackedView::Savvy,
            Layout::Split => self.focus != SplitFocus::Penny,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_the_breakpoint() {
        assert_eq!(Layout::for_width(800.0), Layout::Stacked);
        assert_eq!(Layout::for_width(1023.9), Layout::Stacked);
        assert_eq!(Layout::for_width(1024.0), Layout::Split);
        assert_eq!(Layout::for_width(1920.0), Layout::Split);
    }

    #[test]
    fn new_router_starts_on_selection_with_no_focus() {
        let router = Router::new(1280.0);
        assert_eq!(router.layout, Layout::Split);
        assert_eq!(router.stacked, StackedView::Selection);
        assert_eq!(router.focus, SplitFocus::None);
    }

    #[test]
    fn stacked_open_and_back_round_trip() {
        let mut router = Router::new(800.0);

        router.open(Brand::Penny);
        assert_eq!(router.stacked, StackedView::Penny);
        assert!(router.shows_penny());

        router.back();
        assert_eq!(router.stacked, StackedView::Selection);
        assert!(!router.shows_penny());
    }

    #[test]
    fn focus_toggle_cycles_through_none() {
        let mut router = Router::new(1280.0);

        router.toggle_focus(Brand::Savvy);
        assert_eq!(router.focus, SplitFocus::Savvy);
        assert!(!router.shows_penny());

        router.toggle_focus(Brand::Savvy);
        assert_eq!(router.focus, SplitFocus::None);
        assert!(router.shows_penny());

        router.toggle_focus(Brand::Penny);
        assert_eq!(router.focus, SplitFocus::Penny);
        assert!(router.shows_penny());
        assert!(!router.shows_savvy());
    }

    #[test]
    fn split_shows_both_brands_without_focus() {
        let router = Router::new(1280.0);
        assert!(router.shows_penny());
        assert!(router.shows_savvy());
    }

    #[test]
    fn resizing_across_the_breakpoint_preserves_selectors() {
        let mut router = Router::new(1280.0);
        router.toggle_focus(Brand::Penny);
        router.open(Brand::Savvy);

        router.resize(700.0);
        assert_eq!(router.layout, Layout::Stacked);
        assert_eq!(router.stacked, StackedView::Savvy);

        router.resize(1400.0);
        assert_eq!(router.layout, Layout::Split);
        assert_eq!(router.focus, SplitFocus::Penny);
    }

    #[test]
    fn start_on_aligns_both_selectors() {
        let mut router = Router::new(800.0);
        router.start_on(Brand::Penny);
        assert_eq!(router.stacked, StackedView::Penny);
        assert_eq!(router.focus, SplitFocus::Penny);
    }
}
