// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Brand call-to-action button.
///
/// Disabled status renders identically to active: the promotional
/// buttons on this page are visual placeholders without handlers, and
/// must not look grayed out.
pub fn cta(
    background: Color,
    background_hover: Color,
    text_color: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let bg = match status {
            button::Status::Hovered => background_hover,
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Secondary call-to-action: transparent surface with an accent outline.
pub fn outline(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let bg_alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: bg_alpha,
                ..palette::BLACK
            })),
            text_color: accent,
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Overlay buttons floating over the carousel (arrows, zoom, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Index-selector dot under the carousel. The active dot is solid white;
/// the rest sit at half opacity until hovered.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else {
            match status {
                button::Status::Hovered => opacity::OVERLAY_HOVER,
                _ => opacity::OVERLAY_MEDIUM,
            }
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Full-bleed panel button on the stacked selection screen.
pub fn selection_panel(
    background: Color,
    background_hover: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => background_hover,
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(bg)),
            text_color: palette::WHITE,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text button (the stacked-view back control).
pub fn ghost(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text = match status {
            button::Status::Hovered => Color {
                a: opacity::OVERLAY_HOVER,
                ..text_color
            },
            _ => text_color,
        };

        button::Style {
            background: None,
            text_color: text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_ignores_disabled_status() {
        let theme = Theme::Dark;
        let style_fn = cta(palette::GOLD_500, palette::GOLD_600, palette::BLACK);

        let active = style_fn(&theme, button::Status::Active);
        let disabled = style_fn(&theme, button::Status::Disabled);

        assert_eq!(active.background, disabled.background);
        assert_eq!(active.text_color, disabled.text_color);
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(palette::WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_dot_is_opaque() {
        let theme = Theme::Dark;
        let active = dot(true)(&theme, button::Status::Active);
        let inactive = dot(false)(&theme, button::Status::Active);

        assert_ne!(active.background, inactive.background);
    }
}
