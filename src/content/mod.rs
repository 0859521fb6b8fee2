// SPDX-License-Identifier: MPL-2.0
//! Static promotional content.
//!
//! Everything the page displays is literal data declared in the two
//! brand modules and rendered as-is. The types here are plain records;
//! the only behavior is the long-quote check that decides whether a
//! testimonial gets an expand/collapse control.

pub mod penny;
pub mod savvy;

use crate::carousel::Slide;

/// Quotes longer than this render collapsed with a "View More" control.
pub const LONG_QUOTE_THRESHOLD: usize = 200;

/// The two businesses sharing the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Savvy,
    Penny,
}

impl Brand {
    /// Display name of the brand.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Brand::Savvy => savvy::NAME,
            Brand::Penny => penny::NAME,
        }
    }

    /// Parses the short brand identifier used by the CLI and config file.
    #[must_use]
    pub fn from_identifier(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "savvy" | "behorsesavvy" => Some(Brand::Savvy),
            "penny" | "pennyclub" => Some(Brand::Penny),
            _ => None,
        }
    }
}

/// A short feature or service card: icon-less title plus one line of copy.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub detail: &'static str,
}

/// A course category with volume and duration figures.
#[derive(Debug, Clone, Copy)]
pub struct CourseCategory {
    pub title: &'static str,
    pub detail: &'static str,
    pub lessons: u32,
    pub duration: &'static str,
}

/// A purchasable course with availability, level, and price labels.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedCourse {
    pub title: &'static str,
    pub availability: &'static str,
    pub level: &'static str,
    pub price: &'static str,
}

/// A customer testimonial. `role` may be empty.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Whether the quote is long enough to warrant collapsing.
    #[must_use]
    pub fn has_long_quote(&self) -> bool {
        self.quote.len() > LONG_QUOTE_THRESHOLD
    }
}

/// A bookable event with date, audience, and price labels.
#[derive(Debug, Clone, Copy)]
pub struct EventCard {
    pub title: &'static str,
    pub date: &'static str,
    pub spots: &'static str,
    pub price: &'static str,
}

/// Declaration of one carousel slide; turned into an owned
/// [`Slide`] when a carousel is mounted.
#[derive(Debug, Clone, Copy)]
pub struct SlideSpec {
    pub source: &'static str,
    pub alt: &'static str,
}

impl SlideSpec {
    #[must_use]
    pub fn to_slide(self) -> Slide {
        Slide {
            source: self.source.to_string(),
            alt: self.alt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_quote_detection_uses_threshold() {
        let short = Testimonial {
            name: "A",
            role: "",
            quote: "Lovely yard.",
        };
        assert!(!short.has_long_quote());

        let long = Testimonial {
            name: "B",
            role: "",
            quote: penny::TESTIMONIALS[1].quote,
        };
        assert!(long.has_long_quote());
    }

    #[test]
    fn brand_identifiers_parse_case_insensitively() {
        assert_eq!(Brand::from_identifier("savvy"), Some(Brand::Savvy));
        assert_eq!(Brand::from_identifier("PennyClub"), Some(Brand::Penny));
        assert_eq!(Brand::from_identifier("unknown"), None);
    }

    #[test]
    fn brand_names_match_their_modules() {
        assert_eq!(Brand::Savvy.name(), savvy::NAME);
        assert_eq!(Brand::Penny.name(), penny::NAME);
    }

    #[test]
    fn slide_spec_converts_to_owned_slide() {
        let spec = penny::SLIDES[0];
        let slide = spec.to_slide();
        assert_eq!(slide.source, spec.source);
        assert_eq!(slide.alt, spec.alt);
    }
}
