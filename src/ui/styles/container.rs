// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// BeHorseSavvy page backdrop: near-black.
pub fn savvy_page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CHARCOAL_900)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// The Penny Club page backdrop: deep navy.
pub fn penny_page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_800)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Content card: translucent surface with a subtle accent border.
pub fn card(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE_TINT,
            ..palette::BLACK
        })),
        border: Border {
            color: Color {
                a: opacity::BORDER_SUBTLE,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Credential chip in The Penny Club hero: faint white surface.
pub fn hero_chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::BORDER_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Placeholder shown while a remote image loads or after it fails.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        border: Border {
            color: Color {
                a: opacity::BORDER_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        }),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_use_their_brand_backdrop() {
        let theme = Theme::Dark;
        let savvy = savvy_page(&theme);
        let penny = penny_page(&theme);

        assert_ne!(savvy.background, penny.background);
    }

    #[test]
    fn card_border_carries_the_accent_hue() {
        let theme = Theme::Dark;
        let style = card(palette::GOLD_500)(&theme);

        assert_eq!(style.border.color.r, palette::GOLD_500.r);
        assert!(style.border.color.a < 1.0);
    }
}
