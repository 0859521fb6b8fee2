// SPDX-License-Identifier: MPL-2.0
//! BeHorseSavvy: the online learning platform brand.

use super::{CourseCategory, Feature, FeaturedCourse, Testimonial};

pub const NAME: &str = "BeHorseSavvy";
pub const TAGLINE: &str = "Online Learning Platform";

pub const LOGO_URL: &str =
    "https://i.ibb.co/W4Y1CckC/485100798-1131021162370244-5394707563202930473-n-1.jpg";
pub const LOGO_ALT: &str = "BeHorseSavvy Logo";

/// Hero card copy shown above the calls to action.
pub const HERO_CARD_TITLE: &str = "Digital Courses";
pub const HERO_CARD_DETAIL: &str =
    "Access comprehensive equestrian education anytime, anywhere";

pub const CTA_PRIMARY: &str = "Start Learning";
pub const CTA_SECONDARY: &str = "Find Out More";

pub static FEATURES: [Feature; 6] = [
    Feature {
        title: "HD Video Lessons",
        detail: "Crystal clear instruction with multiple camera angles",
    },
    Feature {
        title: "Learn at Your Pace",
        detail: "Access content 24/7, study when it suits you",
    },
    Feature {
        title: "Detailed Resources",
        detail: "Comprehensive study materials and guides",
    },
    Feature {
        title: "Expert Support",
        detail: "Direct access to experienced instructors",
    },
    Feature {
        title: "Multi-device Access",
        detail: "Learn on any device, anywhere",
    },
    Feature {
        title: "Track Progress",
        detail: "Monitor your development with assessments",
    },
];

pub static COURSE_CATEGORIES: [CourseCategory; 4] = [
    CourseCategory {
        title: "Beginner Fundamentals",
        detail: "Master the basics of horsemanship",
        lessons: 12,
        duration: "6 weeks",
    },
    CourseCategory {
        title: "Advanced Techniques",
        detail: "Refine your skills and expertise",
        lessons: 18,
        duration: "8 weeks",
    },
    CourseCategory {
        title: "Competition Preparation",
        detail: "Get ready for show success",
        lessons: 15,
        duration: "10 weeks",
    },
    CourseCategory {
        title: "Horse Care & Management",
        detail: "Essential knowledge for every equestrian",
        lessons: 20,
        duration: "12 weeks",
    },
];

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Emily Parker",
        role: "Online Student",
        quote: "The BeHorseSavvy platform has revolutionized how I learn about \
horsemanship. The video lessons are incredibly detailed, and being able to \
learn at my own pace has made all the difference. The support from \
instructors is outstanding.",
    },
    Testimonial {
        name: "David Miller",
        role: "Competition Rider",
        quote: "The competition preparation course gave me the edge I needed. The \
detailed breakdown of techniques and strategy has significantly improved my \
performance. The ability to review lessons multiple times is invaluable.",
    },
    Testimonial {
        name: "Sophie Williams",
        role: "Horse Owner",
        quote: "The horse care and management course has been eye-opening. I've \
learned so much about proper care techniques and preventative health \
measures. The course has made me a more confident and knowledgeable horse \
owner.",
    },
    Testimonial {
        name: "Alex Thompson",
        role: "Beginner Rider",
        quote: "Starting from zero knowledge, this platform made learning about \
horses accessible and enjoyable. The structured approach and supportive \
community have helped me progress faster than I expected.",
    },
];

pub static FEATURED_COURSES: [FeaturedCourse; 4] = [
    FeaturedCourse {
        title: "Horsemanship Basics",
        availability: "Start Anytime",
        level: "Beginner Friendly",
        price: "£299",
    },
    FeaturedCourse {
        title: "Show Jumping Mastery",
        availability: "New Content Weekly",
        level: "Intermediate & Advanced",
        price: "£399",
    },
    FeaturedCourse {
        title: "Horse Care Essentials",
        availability: "Lifetime Access",
        level: "All Levels",
        price: "£249",
    },
    FeaturedCourse {
        title: "Competition Strategy",
        availability: "Monthly Updates",
        level: "Advanced",
        price: "£449",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_list_is_fully_populated() {
        for feature in &FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.detail.is_empty());
        }
        for course in &COURSE_CATEGORIES {
            assert!(course.lessons > 0);
            assert!(!course.duration.is_empty());
        }
        for course in &FEATURED_COURSES {
            assert!(course.price.starts_with('£'));
        }
        for testimonial in &TESTIMONIALS {
            assert!(!testimonial.name.is_empty());
            assert!(!testimonial.quote.is_empty());
        }
    }
}
