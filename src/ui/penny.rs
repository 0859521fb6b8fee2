// SPDX-License-Identifier: MPL-2.0
//! The Penny Club page: hero panel, gallery carousel, and the static
//! content sections.
//!
//! This is the only stateful side of the page. The carousel controller
//! exists exactly while the page is visible: [`State::set_visible`]
//! mounts a fresh instance on entry and drops it on exit, so the
//! auto-advance subscription upstream disappears with it and no tick can
//! mutate a dismissed gallery. Success stories with long quotes carry an
//! independent expand/collapse flag per card.

use crate::carousel::Carousel;
use crate::content::{self, penny};
use crate::media::ImageCache;
use crate::ui::carousel as carousel_ui;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{Color, Element, Font, Length};
use std::collections::HashSet;
use std::time::Duration;

/// Page state: the mounted carousel (if the page is visible) and the set
/// of expanded success stories.
#[derive(Debug, Clone, Default)]
pub struct State {
    carousel: Option<Carousel>,
    expanded: HashSet<usize>,
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Carousel(carousel_ui::Message),
    ToggleStory(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts or unmounts the page content.
    ///
    /// Mounting builds a fresh carousel (initial slide, unzoomed) and
    /// clears any expanded stories; unmounting drops both. Re-entering
    /// the page therefore never resumes stale display state.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            if self.carousel.is_none() {
                self.carousel = mount_carousel();
                self.expanded.clear();
            }
        } else if self.carousel.is_some() {
            self.carousel = None;
            self.expanded.clear();
        }
    }

    /// Whether the page content is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.carousel.is_some()
    }

    /// Whether the auto-advance timer should be running: a carousel is
    /// mounted and no slide is enlarged.
    #[must_use]
    pub fn autoplay_ready(&self) -> bool {
        self.carousel.as_ref().is_some_and(|c| !c.is_zoomed())
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Process a page message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Back => Event::Back,
            Message::Carousel(carousel_message) => {
                if let Some(carousel) = &mut self.carousel {
                    carousel_ui::apply(carousel, carousel_message);
                }
                Event::None
            }
            Message::ToggleStory(index) => {
                if self.expanded.contains(&index) {
                    self.expanded.remove(&index);
                } else {
                    self.expanded.insert(index);
                }
                Event::None
            }
        }
    }

    /// Feeds elapsed time into the mounted carousel. Ticks arriving
    /// after unmount are discarded.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(carousel) = &mut self.carousel {
            carousel.tick(delta);
        }
    }
}

fn mount_carousel() -> Option<Carousel> {
    let deck = penny::SLIDES.iter().map(|spec| spec.to_slide()).collect();
    // The declared deck is non-empty, so this only fails if the content
    // tables are edited down to nothing.
    Carousel::new(deck).ok()
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub images: &'a ImageCache,
    /// Whether the stacked-layout back control is shown.
    pub show_back: bool,
}

/// Render the full Penny Club page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXL)
        .padding(spacing::XL);

    if ctx.show_back {
        let back = button(Text::new("← Back").size(typography::BODY))
            .style(styles::button::ghost(palette::WHITE))
            .on_press(Message::Back);
        content = content.push(back);
    }

    content = content.push(build_hero());

    if let Some(carousel) = ctx.state.carousel() {
        content = content.push(
            carousel_ui::view(carousel_ui::ViewContext {
                carousel,
                images: ctx.images,
            })
            .map(Message::Carousel),
        );
    }

    content = content
        .push(section_heading("Our Services"))
        .push(grid(penny::SERVICES.iter().map(service_card).collect(), 3))
        .push(section_heading("Success Stories"))
        .push(grid(
            penny::TESTIMONIALS
                .iter()
                .enumerate()
                .map(|(index, testimonial)| {
                    story_card(index, testimonial, ctx.state.is_expanded(index))
                })
                .collect(),
            2,
        ))
        .push(section_heading("Upcoming Events"))
        .push(grid(penny::EVENTS.iter().map(event_card).collect(), 2));

    let column = Container::new(content).max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(scrollable(
        Container::new(column)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::penny_page)
    .into()
}

/// Hero panel: brand name, headline, credential chips, calls to action.
fn build_hero<'a>() -> Element<'a, Message> {
    let brand = Container::new(
        Text::new(penny::NAME)
            .size(typography::TITLE_MD)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    let headline = Text::new(penny::HEADLINE).size(typography::TITLE_XL);

    let mut chips = Column::new().spacing(spacing::SM);
    for credential in penny::CREDENTIALS {
        let chip = Container::new(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new("★").size(typography::BODY_LG).color(palette::RED_500))
                .push(Text::new(credential).size(typography::BODY)),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::hero_chip);
        chips = chips.push(chip);
    }

    let book = button(
        Text::new(format!("{} ›", penny::CTA_PRIMARY)).size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::XL])
    .width(Length::Fill)
    .style(styles::button::cta(
        palette::RED_500,
        palette::RED_600,
        palette::WHITE,
    ));

    let merchandise = button(Text::new(penny::CTA_MERCH).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .width(Length::Fill)
        .style(styles::button::cta(
            palette::WHITE,
            palette::GRAY_200,
            palette::NAVY_800,
        ));

    let more = button(
        Text::new(format!("{} ›", penny::CTA_SECONDARY)).size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::XL])
    .width(Length::Fill)
    .style(styles::button::outline(palette::WHITE));

    Column::new()
        .spacing(spacing::LG)
        .push(brand)
        .push(headline)
        .push(chips)
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(book)
                .push(merchandise)
                .push(more),
        )
        .into()
}

fn section_heading<'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .into()
}

fn service_card<'a>(service: &'a content::Feature) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(service.title).size(typography::TITLE_SM))
        .push(Text::new(service.detail).size(typography::BODY).color(muted()));

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::WHITE))
        .into()
}

/// A success story card, collapsed to a preview when the quote is long
/// and the card is not expanded.
fn story_card(
    index: usize,
    testimonial: &content::Testimonial,
    expanded: bool,
) -> Element<'_, Message> {
    let collapsible = testimonial.has_long_quote();
    let quote = if collapsible && !expanded {
        collapsed_quote(testimonial.quote)
    } else {
        format!("\u{201c}{}\u{201d}", testimonial.quote)
    };

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(quote).size(typography::BODY).color(muted()));

    if collapsible {
        let label = if expanded { "Show Less" } else { "View More" };
        body = body.push(
            button(Text::new(label).size(typography::BODY))
                .style(styles::button::ghost(palette::RED_500))
                .on_press(Message::ToggleStory(index)),
        );
    }

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
                .color(palette::RED_500),
        );
    }
    body = body.push(signature);

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::WHITE))
        .into()
}

/// First part of a long quote, cut on a character boundary.
fn collapsed_quote(quote: &str) -> String {
    let cut = quote
        .char_indices()
        .nth(content::LONG_QUOTE_THRESHOLD)
        .map_or(quote.len(), |(offset, _)| offset);
    format!("\u{201c}{}…\u{201d}", quote[..cut].trim_end())
}

fn event_card<'a>(event: &'a content::EventCard) -> Element<'a, Message> {
    let book = button(Text::new("Book Now").size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::cta(
            palette::RED_500,
            palette::RED_600,
            palette::WHITE,
        ));

    let footer = Row::new()
        .push(
            Text::new(event.price)
                .size(typography::BODY_LG)
                .color(palette::RED_500),
        )
        .push(Space::new().width(Length::Fill))
        .push(book);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(event.title).size(typography::TITLE_SM))
        .push(Text::new(event.date).size(typography::BODY).color(muted()))
        .push(Text::new(event.spots).size(typography::BODY).color(faint()))
        .push(footer);

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(palette::WHITE))
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
    use crate::carousel::DWELL;

    #[test]
    fn set_visible_mounts_a_fresh_carousel() {
        let mut state = State::new();
        assert!(!state.is_mounted());

        state.set_visible(true);
        assert!(state.is_mounted());
        assert_eq!(state.carousel().map(Carousel::active_index), Some(0));
    }

    #[test]
    fn set_visible_is_idempotent_while_mounted() {
        let mut state = State::new();
        state.set_visible(true);
        state.update(Message::Carousel(carousel_ui::Message::Next));

        state.set_visible(true);
        // Still the same instance: no reset to slide zero.
        assert_eq!(state.carousel().map(Carousel::active_index), Some(1));
    }

    #[test]
    fn unmount_discards_carousel_and_expanded_stories() {
        let mut state = State::new();
        state.set_visible(true);
        state.update(Message::Carousel(carousel_ui::Message::Next));
        state.update(Message::ToggleStory(1));

        state.set_visible(false);
        assert!(!state.is_mounted());

        // Remounting starts from scratch.
        state.set_visible(true);
        assert_eq!(state.carousel().map(Carousel::active_index), Some(0));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn ticks_after_unmount_are_discarded() {
        let mut state = State::new();
        state.set_visible(true);
        state.set_visible(false);

        state.tick(DWELL);
        state.tick(DWELL);
        assert!(!state.is_mounted());

        state.set_visible(true);
        assert_eq!(state.carousel().map(Carousel::active_index), Some(0));
    }

    #[test]
    fn autoplay_pauses_while_zoomed() {
        let mut state = State::new();
        assert!(!state.autoplay_ready());

        state.set_visible(true);
        assert!(state.autoplay_ready());

        state.update(Message::Carousel(carousel_ui::Message::ToggleZoom));
        assert!(!state.autoplay_ready());

        state.update(Message::Carousel(carousel_ui::Message::ToggleZoom));
        assert!(state.autoplay_ready());
    }

    #[test]
    fn toggle_story_flips_independent_flags() {
        let mut state = State::new();
        state.set_visible(true);

        state.update(Message::ToggleStory(0));
        state.update(Message::ToggleStory(2));
        assert!(state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert!(state.is_expanded(2));

        state.update(Message::ToggleStory(0));
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn back_message_emits_back_event() {
        let mut state = State::new();
        assert!(matches!(state.update(Message::Back), Event::Back));
    }

    #[test]
    fn collapsed_quote_cuts_on_character_boundary() {
        let preview = collapsed_quote(penny::TESTIMONIALS[1].quote);
        assert!(preview.ends_with("…\u{201d}"));
        assert!(preview.chars().count() < penny::TESTIMONIALS[1].quote.chars().count());
    }

    #[test]
    fn view_renders_mounted_and_unmounted() {
        let images = ImageCache::new();

        let unmounted = State::new();
        let _element = view(ViewContext {
            state: &unmounted,
            images: &images,
            show_back: false,
        });

        let mut mounted = State::new();
        mounted.set_visible(true);
        let _element = view(ViewContext {
            state: &mounted,
            images: &images,
            show_back: true,
        });
    }
}
