// SPDX-License-Identifier: MPL-2.0
//! Carousel widget layer.
//!
//! Renders the active slide with its overlay controls and maps UI events
//! onto the operations of [`crate::carousel::Carousel`]. All timing
//! lives in the state machine; this module only draws and forwards.

use crate::carousel::Carousel;
use crate::media::{ImageCache, RemoteImage};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, Container, Row, Stack, Text};
use iced::{mouse, Border, ContentFit, Element, Length, Theme};

/// User interactions on the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// "Next" arrow.
    Next,
    /// "Previous" arrow.
    Previous,
    /// Index-selector dot.
    Select(usize),
    /// Zoom button, close button, or a click on the slide itself.
    ToggleZoom,
}

/// Applies a UI interaction to the controller.
pub fn apply(carousel: &mut Carousel, message: Message) {
    match message {
        Message::Next => carousel.advance(),
        Message::Previous => carousel.retreat(),
        Message::Select(index) => {
            // Out-of-range selections are rejected by the controller.
            let _ = carousel.jump_to(index);
        }
        Message::ToggleZoom => carousel.toggle_zoom(),
    }
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub carousel: &'a Carousel,
    pub images: &'a ImageCache,
}

/// Render the carousel viewport with its overlay controls.
///
/// While zoomed, the navigation arrows, zoom button, and dots are
/// hidden; only the close control floats over the enlarged slide.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let zoomed = ctx.carousel.is_zoomed();
    let height = if zoomed {
        sizing::CAROUSEL_ZOOM_HEIGHT
    } else {
        sizing::CAROUSEL_HEIGHT
    };

    let slide = ctx.carousel.active_slide();
    let surface: Element<'_, Message> = match ctx.images.get(&slide.source) {
        Some(RemoteImage::Ready(handle)) => {
            let fit = if zoomed {
                ContentFit::Cover
            } else {
                ContentFit::Contain
            };
            Image::new(handle.clone())
                .content_fit(fit)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        Some(RemoteImage::Loading) => placeholder("Loading image…"),
        _ => placeholder(slide.alt),
    };

    let cursor = if zoomed {
        mouse::Interaction::Pointer
    } else {
        mouse::Interaction::ZoomIn
    };
    let clickable_surface = mouse_area(
        Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .interaction(cursor)
    .on_release(Message::ToggleZoom);

    let mut stack = Stack::new().push(clickable_surface);

    if zoomed {
        stack = stack.push(corner_control("×", Message::ToggleZoom));
    } else {
        stack = stack.push(edge_arrow("◀", Horizontal::Left, Message::Previous));
        stack = stack.push(edge_arrow("▶", Horizontal::Right, Message::Next));
        stack = stack.push(corner_control("+", Message::ToggleZoom));
        stack = stack.push(dot_row(ctx.carousel));
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(palette::BLACK)),
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            ..iced::widget::container::Style::default()
        })
        .into()
}

/// Dark panel with the alt text, shown until the image is available.
fn placeholder<'a>(caption: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(caption).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .style(styles::container::image_placeholder)
        .into()
}

/// Previous/next arrow pinned to one vertical edge.
fn edge_arrow<'a>(
    glyph: &'a str,
    side: Horizontal,
    message: Message,
) -> Element<'a, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_SM))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message);

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

/// Zoom or close control pinned to the top-right corner.
fn corner_control<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    let control = button(Text::new(glyph).size(typography::TITLE_SM))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message);

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

/// Index-selector dots pinned to the bottom center.
fn dot_row(carousel: &Carousel) -> Element<'_, Message> {
    let mut dots = Row::new().spacing(spacing::XS);
    for index in 0..carousel.slide_count() {
        let dot = button(Text::new(""))
            .width(Length::Fixed(sizing::DOT_SIZE))
            .height(Length::Fixed(sizing::DOT_SIZE))
            .padding(0.0)
            .style(styles::button::dot(index == carousel.active_index()))
            .on_press(Message::Select(index));
        dots = dots.push(dot);
    }

    Container::new(dots)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Slide;

    fn sample_carousel() -> Carousel {
        let slides = vec![
            Slide {
                source: "https://images.example/one.jpg".to_string(),
                alt: "one",
            },
            Slide {
                source: "https://images.example/two.jpg".to_string(),
                alt: "two",
            },
            Slide {
                source: "https://images.example/three.jpg".to_string(),
                alt: "three",
            },
        ];
        Carousel::new(slides).expect("non-empty deck")
    }

    #[test]
    fn apply_maps_messages_to_operations() {
        let mut carousel = sample_carousel();

        apply(&mut carousel, Message::Next);
        assert_eq!(carousel.active_index(), 1);

        apply(&mut carousel, Message::Previous);
        assert_eq!(carousel.active_index(), 0);

        apply(&mut carousel, Message::Select(2));
        assert_eq!(carousel.active_index(), 2);

        apply(&mut carousel, Message::ToggleZoom);
        assert!(carousel.is_zoomed());
    }

    #[test]
    fn apply_rejects_out_of_range_selection() {
        let mut carousel = sample_carousel();
        apply(&mut carousel, Message::Select(99));
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn view_renders_without_fetched_images() {
        let carousel = sample_carousel();
        let images = ImageCache::new();
        let _element = view(ViewContext {
            carousel: &carousel,
            images: &images,
        });
    }

    #[test]
    fn view_renders_while_zoomed() {
        let mut carousel = sample_carousel();
        carousel.toggle_zoom();
        let images = ImageCache::new();
        let _element = view(ViewContext {
            carousel: &carousel,
            images: &images,
        });
    }
}
