// SPDX-License-Identifier: MPL-2.0
//! BeHorseSavvy page: hero panel plus the static content sections.
//!
//! This side of the page is entirely read-only. The calls to action are
//! visual placeholders carried over from the promotional copy; the only
//! live control is the back button shown in the stacked layout.

use crate::content::savvy;
use crate::media::ImageCache;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::image::Image;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{Color, ContentFit, Element, Font, Length};

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub images: &'a ImageCache,
    /// Whether the stacked-layout back control is shown.
    pub show_back: bool,
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
}

/// Process a page message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Render the full BeHorseSavvy page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXL)
        .padding(spacing::XL);

    if ctx.show_back {
        let back = button(Text::new("← Back").size(typography::BODY))
            .style(styles::button::ghost(palette::GOLD_500))
            .on_press(Message::Back);
        content = content.push(back);
    }

    content = content
        .push(build_hero(&ctx))
        .push(section_heading("Why Choose Our Online Platform?"))
        .push(grid(savvy::FEATURES.iter().map(feature_card).collect(), 3))
        .push(section_heading("Course Categories"))
        .push(grid(
            savvy::COURSE_CATEGORIES.iter().map(category_card).collect(),
            2,
        ))
        .push(section_heading("Student Success Stories"))
        .push(grid(
            savvy::TESTIMONIALS.iter().map(testimonial_card).collect(),
            2,
        ))
        .push(section_heading("Featured Courses"))
        .push(grid(
            savvy::FEATURED_COURSES.iter().map(featured_card).collect(),
            2,
        ));

    let column = Container::new(content).max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(scrollable(
        Container::new(column)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::savvy_page)
    .into()
}

/// Hero panel: logo, tagline, intro card, and calls to action.
fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo: Element<'_, Message> = match ctx.images.handle(savvy::LOGO_URL) {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .height(Length::Fixed(sizing::LOGO_HEIGHT))
            .into(),
        None => Text::new(savvy::LOGO_ALT)
            .size(typography::TITLE_MD)
            .color(palette::GOLD_500)
            .into(),
    };

    let tagline = Text::new(savvy::TAGLINE)
        .size(typography::TITLE_XL)
        .color(palette::GOLD_500);

    let intro_card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(savvy::HERO_CARD_TITLE)
                    .size(typography::TITLE_SM)
                    .color(palette::GOLD_500),
            )
            .push(Text::new(savvy::HERO_CARD_DETAIL).size(typography::BODY).color(muted())),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card(palette::GOLD_500));

    let primary = button(
        Text::new(format!("{} ›", savvy::CTA_PRIMARY)).size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::XL])
    .width(Length::Fill)
    .style(styles::button::cta(
        palette::GOLD_500,
        palette::GOLD_600,
        palette::BLACK,
    ));

    let secondary = button(
        Text::new(format!("{} ›", savvy::CTA_SECONDARY)).size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::XL])
    .width(Length::Fill)
    .style(styles::button::outline(palette::GOLD_500));

    Column::new()
        .spacing(spacing::LG)
        .push(logo)
        .push(tagline)
        .push(intro_card)
        .push(Column::new().spacing(spacing::SM).push(primary).push(secondary))
        .into()
}

fn section_heading<'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_LG)
        .color(palette::GOLD_500)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .into()
}

fn feature_card<'a>(feature: &'a crate::content::Feature) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(feature.title)
                .size(typography::TITLE_SM)
                .color(palette::GOLD_500),
        )
        .push(Text::new(feature.detail).size(typography::BODY).color(muted()));

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::GOLD_500))
        .into()
}

fn category_card<'a>(course: &'a crate::content::CourseCategory) -> Element<'a, Message> {
    let figures = Row::new()
        .push(
            Text::new(format!("{} lessons", course.lessons))
                .size(typography::BODY)
                .color(faint()),
        )
        .push(Space::new().width(Length::Fill))
        .push(Text::new(course.duration).size(typography::BODY).color(faint()));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(course.title)
                .size(typography::TITLE_SM)
                .color(palette::GOLD_500),
        )
        .push(Text::new(course.detail).size(typography::BODY).color(muted()))
        .push(figures);

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::GOLD_500))
        .into()
}

fn testimonial_card<'a>(testimonial: &'a crate::content::Testimonial) -> Element<'a, Message> {
    let mut signature = Column::new().push(
        Text::new(testimonial.name)
            .size(typography::BODY)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
    );
    if !testimonial.role.is_empty() {
        signature = signature.push(
            Text::new(testimonial.role)
                .size(typography::CAPTION)
                .color(palette::GOLD_500),
        );
    }

    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(format!("\u{201c}{}\u{201d}", testimonial.quote))
                .size(typography::BODY)
                .color(muted()),
        )
        .push(signature);

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::GOLD_500))
        .into()
}

fn featured_card<'a>(course: &'a crate::content::FeaturedCourse) -> Element<'a, Message> {
    let enroll = button(Text::new("Enroll Now").size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::cta(
            palette::GOLD_500,
            palette::GOLD_600,
            palette::BLACK,
        ));

    let footer = Row::new()
        .push(
            Text::new(course.price)
                .size(typography::BODY_LG)
                .color(palette::GOLD_500),
        )
        .push(Space::new().width(Length::Fill))
        .push(enroll);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(course.title)
                .size(typography::TITLE_SM)
                .color(palette::GOLD_500),
        )
        .push(Text::new(course.availability).size(typography::BODY).color(muted()))
        .push(Text::new(course.level).size(typography::BODY).color(faint()))
        .push(footer);

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::GOLD_500))
        .into()
}

/// Lay cells out left to right, `columns` per row.
fn grid(cells: Vec<Element<'_, Message>>, columns: usize) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(spacing::MD);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut row = Row::new().spacing(spacing::MD);
        for _ in 0..columns {
            match cells.next() {
                Some(cell) => {
                    row = row.push(Container::new(cell).width(Length::FillPortion(1)));
                }
                None => {
                    row = row.push(Space::new().width(Length::FillPortion(1)));
                }
            }
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn muted() -> Color {
    Color {
        a: opacity::TEXT_MUTED,
        ..palette::WHITE
    }
}

fn faint() -> Color {
    Color {
        a: opacity::TEXT_FAINT,
        ..palette::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_message_emits_back_event() {
        assert!(matches!(update(&Message::Back), Event::Back));
    }

    #[test]
    fn view_renders_with_back_control() {
        let images = ImageCache::new();
        let _element = view(ViewContext {
            images: &images,
            show_back: true,
        });
    }

    #[test]
    fn view_renders_without_back_control() {
        let images = ImageCache::new();
        let _element = view(ViewContext {
            images: &images,
            show_back: false,
        });
    }
}
