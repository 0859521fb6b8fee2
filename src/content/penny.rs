// SPDX-License-Identifier: MPL-2.0
//! The Penny Club: the training yard brand.

use super::{EventCard, Feature, SlideSpec, Testimonial};

pub const NAME: &str = "The Penny Club";
pub const HEADLINE: &str = "Expert Equestrian\nTraining & Coaching";

pub const CTA_PRIMARY: &str = "Book an Event";
pub const CTA_MERCH: &str = "View Our Merchandise";
pub const CTA_SECONDARY: &str = "Find Out More";

/// Accreditation rows shown in the hero panel.
pub static CREDENTIALS: [&str; 3] = [
    "SSADL & NCPA Panel Member",
    "BHS Accredited Coach",
    "BSPS Course Builder",
];

/// Gallery deck, in display order. The deck must stay non-empty; the
/// carousel constructor rejects an empty one.
pub static SLIDES: [SlideSpec; 4] = [
    SlideSpec {
        source: "https://i.ibb.co/Z1x90Y2H/22c1b149-ff83-46ac-8fcc-80295910e301.jpg",
        alt: "Challenge Awards Achievement - Bronze and Introduction to Horse Care certificates",
    },
    SlideSpec {
        source: "https://i.ibb.co/8gysTTkX/bc058fb6-e384-4dc8-a9af-5a51772857a0.jpg",
        alt: "Horse Riding Lesson",
    },
    SlideSpec {
        source: "https://i.ibb.co/pvFg8ddc/372ed90b-45bf-4897-9821-453bfbb0cee0.jpg",
        alt: "Dressage Training",
    },
    SlideSpec {
        source: "https://images.unsplash.com/photo-1594768816441-1dd241ffaa67",
        alt: "Show Jumping Training",
    },
];

pub static SERVICES: [Feature; 6] = [
    Feature {
        title: "Private Lessons",
        detail: "One-on-one instruction tailored to your needs",
    },
    Feature {
        title: "Group Training",
        detail: "Learn alongside fellow enthusiasts",
    },
    Feature {
        title: "Show Preparation",
        detail: "Get ready for competitions",
    },
    Feature {
        title: "Specialised Clinics",
        detail: "Focus on specific disciplines",
    },
    Feature {
        title: "Regular Events",
        detail: "Join our community activities",
    },
    Feature {
        title: "Assessment Days",
        detail: "Track your progress",
    },
];

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Thompson",
        role: "Amateur Show Jumper",
        quote: "The training at The Penny Club has transformed my riding. The \
attention to detail and personalised coaching has helped me achieve \
competition success I never thought possible. The instructors' dedication to \
each student's progress is truly remarkable, and the facilities are \
top-notch. I've seen incredible improvement in both my technique and my \
horse's performance.",
    },
    Testimonial {
        name: "Julie Taylor",
        role: "",
        quote: "Penny is the most enthusiastic trainer I've ever met, putting her \
heart and soul into everything she does. She's incredibly encouraging and \
works brilliantly with riders of all levels. She helped me tackle numerous \
challenges with my Welsh Section D, always keeping things fun and \
lighthearted even on difficult days. Beyond training, she organizes themed \
show jumping competitions for charity, creating a wonderful community \
atmosphere. When I faced health challenges and cancer treatment, Penny \
supported me not just as a trainer but as a friend, helping me return to \
riding. Her dedication to both her students and charitable causes makes her \
truly special.",
    },
    Testimonial {
        name: "Emma Roberts",
        role: "Youth Competitor",
        quote: "Starting my equestrian journey at The Penny Club was the best \
decision. The supportive environment and expert guidance have given me the \
confidence to compete at higher levels. The coaches' ability to break down \
complex movements into understandable steps has been invaluable.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Adult Learner",
        quote: "As a beginner, I was nervous about starting riding lessons, but \
the instructors here made me feel completely at ease. Their patience and \
expertise are unmatched. The progressive learning approach has helped me \
build confidence and skills at a comfortable pace.",
    },
];

pub static EVENTS: [EventCard; 4] = [
    EventCard {
        title: "Summer Training Camp",
        date: "July 15-20, 2024",
        spots: "Limited spots available",
        price: "£499",
    },
    EventCard {
        title: "Show Jumping Clinic",
        date: "August 5-6, 2024",
        spots: "Intermediate & Advanced",
        price: "£199",
    },
    EventCard {
        title: "Dressage Workshop",
        date: "August 12, 2024",
        spots: "All levels welcome",
        price: "£150",
    },
    EventCard {
        title: "Cross Country Training",
        date: "August 19-20, 2024",
        spots: "Advanced riders only",
        price: "£250",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;

    #[test]
    fn slide_deck_builds_a_carousel() {
        let deck = SLIDES.iter().map(|spec| spec.to_slide()).collect();
        let carousel = Carousel::new(deck).expect("declared deck is non-empty");
        assert_eq!(carousel.slide_count(), SLIDES.len());
    }

    #[test]
    fn every_slide_has_source_and_alt() {
        for slide in &SLIDES {
            assert!(slide.source.starts_with("https://"));
            assert!(!slide.alt.is_empty());
        }
    }

    #[test]
    fn only_long_quotes_offer_expansion() {
        let expandable: Vec<bool> = TESTIMONIALS
            .iter()
            .map(Testimonial::has_long_quote)
            .collect();
        // All four yard testimonials exceed the collapse threshold.
        assert_eq!(expandable, vec![true, true, true, true]);
    }

    #[test]
    fn event_cards_are_fully_populated() {
        for event in &EVENTS {
            assert!(!event.title.is_empty());
            assert!(!event.date.is_empty());
            assert!(!event.spots.is_empty());
            assert!(event.price.starts_with('£'));
        }
    }
}
