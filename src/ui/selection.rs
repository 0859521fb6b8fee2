// SPDX-License-Identifier: MPL-2.0
//! Stacked-layout landing screen: one tappable panel per brand.

use crate::content::{savvy, Brand};
use crate::media::ImageCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::image::Image;
use iced::widget::{button, Column, Text};
use iced::{Color, ContentFit, Element, Font, Length};

/// Messages emitted by the selection screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Choose(Brand),
}

/// Render the two stacked brand panels, each filling half the window.
pub fn view(images: &ImageCache) -> Element<'_, Message> {
    let savvy_logo: Element<'_, Message> = match images.handle(savvy::LOGO_URL) {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .height(Length::Fixed(sizing::LOGO_HEIGHT_SM))
            .into(),
        None => Text::new(savvy::NAME)
            .size(typography::TITLE_MD)
            .color(palette::GOLD_500)
            .into(),
    };

    let savvy_panel = button(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(savvy_logo)
            .push(
                Text::new(savvy::TAGLINE)
                    .size(typography::TITLE_MD)
                    .color(palette::GOLD_500)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            ),
    )
    .width(Length::Fill)
    .height(Length::FillPortion(1))
    .padding(spacing::XL)
    .style(styles::button::selection_panel(
        palette::CHARCOAL_900,
        Color::from_rgb(0.15, 0.15, 0.15),
    ))
    .on_press(Message::Choose(Brand::Savvy));

    let penny_panel = button(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("★").size(typography::TITLE_LG).color(palette::RED_500))
            .push(
                Text::new(crate::content::penny::NAME)
                    .size(typography::TITLE_MD)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            ),
    )
    .width(Length::Fill)
    .height(Length::FillPortion(1))
    .padding(spacing::XL)
    .style(styles::button::selection_panel(
        palette::NAVY_800,
        palette::NAVY_900,
    ))
    .on_press(Message::Choose(Brand::Penny));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(savvy_panel)
        .push(penny_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_without_fetched_images() {
        let images = ImageCache::new();
        let _element = view(&images);
    }
}
