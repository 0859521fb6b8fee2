// SPDX-License-Identifier: MPL-2.0
//! Design tokens for both brand identities.
//!
//! BeHorseSavvy renders gold on near-black; The Penny Club renders white
//! and red on deep navy. Everything else (spacing, typography, radii,
//! shadows) is shared between the two sides so the page reads as one
//! composition.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const CHARCOAL_900: Color = Color::from_rgb(0.102, 0.102, 0.102);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // BeHorseSavvy brand (gold scale)
    pub const GOLD_500: Color = Color::from_rgb(0.714, 0.553, 0.251);
    pub const GOLD_600: Color = Color::from_rgb(0.604, 0.471, 0.208);

    // The Penny Club brand (navy and red scales)
    pub const NAVY_800: Color = Color::from_rgb(0.0, 0.125, 0.357);
    pub const NAVY_900: Color = Color::from_rgb(0.0, 0.094, 0.271);
    pub const RED_500: Color = Color::from_rgb(0.784, 0.063, 0.180);
    pub const RED_600: Color = Color::from_rgb(0.627, 0.051, 0.141);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Card borders before hover highlights them.
    pub const BORDER_SUBTLE: f32 = 0.2;
    /// Card surfaces layered over the page gradient.
    pub const SURFACE_TINT: f32 = 0.5;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Secondary copy inside cards.
    pub const TEXT_MUTED: f32 = 0.7;
    /// Tertiary copy (fine print under card titles).
    pub const TEXT_FAINT: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Height of the carousel viewport.
    pub const CAROUSEL_HEIGHT: f32 = 384.0;
    /// Taller viewport used while a slide is enlarged.
    pub const CAROUSEL_ZOOM_HEIGHT: f32 = 520.0;
    /// Diameter of an index-selector dot.
    pub const DOT_SIZE: f32 = 10.0;

    /// Brand logo heights in the hero and the stacked selection screen.
    pub const LOGO_HEIGHT: f32 = 96.0;
    pub const LOGO_HEIGHT_SM: f32 = 56.0;

    /// Content column cap so sections stay readable on wide panes.
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headlines.
    pub const TITLE_XL: f32 = 40.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Brand names, card titles on large cards.
    pub const TITLE_MD: f32 = 22.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;

    /// Emphasis text (prices, calls to action).
    pub const BODY_LG: f32 = 16.0;

    /// Most copy.
    pub const BODY: f32 = 14.0;

    /// Fine print (roles, availability lines).
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BORDER_SUBTLE < opacity::SURFACE_TINT);
    assert!(opacity::TEXT_FAINT < opacity::TEXT_MUTED);

    assert!(sizing::CAROUSEL_ZOOM_HEIGHT > sizing::CAROUSEL_HEIGHT);
    assert!(sizing::LOGO_HEIGHT > sizing::LOGO_HEIGHT_SM);

    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(palette::GOLD_500.r >= 0.0 && palette::GOLD_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_palettes_are_distinct() {
        assert_ne!(palette::GOLD_500, palette::RED_500);
        assert_ne!(palette::NAVY_800, palette::CHARCOAL_900);
    }
}
