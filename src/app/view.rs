// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches on the router: the stacked layout shows one screen at a
//! time, the split layout composes both brand panes with a focus toggle
//! floating over each.

use super::layout::{Layout, Router, SplitFocus, StackedView};
use super::Message;
use crate::content::Brand;
use crate::media::ImageCache;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::{penny, savvy, selection, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub router: &'a Router,
    pub penny: &'a penny::State,
    pub images: &'a ImageCache,
}

/// Renders the current application view based on the router state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.router.layout {
        Layout::Stacked => view_stacked(&ctx),
        Layout::Split => view_split(&ctx),
    }
}

fn view_stacked<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.router.stacked {
        StackedView::Selection => selection::view(ctx.images).map(Message::Selection),
        StackedView::Savvy => savvy::view(savvy::ViewContext {
            images: ctx.images,
            show_back: true,
        })
        .map(Message::Savvy),
        StackedView::Penny => penny::view(penny::ViewContext {
            state: ctx.penny,
            images: ctx.images,
            show_back: true,
        })
        .map(Message::Penny),
    }
}

fn view_split<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let savvy_pane = || {
        split_pane(
            Brand::Savvy,
            savvy::view(savvy::ViewContext {
                images: ctx.images,
                show_back: false,
            })
            .map(Message::Savvy),
        )
    };
    let penny_pane = || {
        split_pane(
            Brand::Penny,
            penny::view(penny::ViewContext {
                state: ctx.penny,
                images: ctx.images,
                show_back: false,
            })
            .map(Message::Penny),
        )
    };

    match ctx.router.focus {
        SplitFocus::None => Row::new()
            .push(Container::new(savvy_pane()).width(Length::FillPortion(1)))
            .push(Container::new(penny_pane()).width(Length::FillPortion(1)))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        SplitFocus::Savvy => savvy_pane(),
        SplitFocus::Penny => penny_pane(),
    }
}

/// Wraps a brand pane with its floating focus toggle.
fn split_pane(brand: Brand, content: Element<'_, Message>) -> Element<'_, Message> {
    let toggle = button(Text::new("⌕").size(typography::TITLE_SM))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::ToggleFocus(brand));

    // The toggle hugs the inner edge of its pane, matching the side the
    // other pane sits on.
    let side = match brand {
        Brand::Savvy => Horizontal::Right,
        Brand::Penny => Horizontal::Left,
    };

    Stack::new()
        .push(content)
        .push(
            Container::new(toggle)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(side)
                .align_y(Vertical::Top),
        )
        .into()
}
