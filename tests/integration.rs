// SPDX-License-Identifier: MPL-2.0
use split_stage::app::layout::Router;
use split_stage::carousel::{Carousel, DWELL};
use split_stage::config::{self, Config};
use split_stage::content::{penny, Brand};
use split_stage::ui::carousel as carousel_ui;
use split_stage::ui::penny::{Message as PennyMessage, State as PennyState};
use std::time::Duration;
use tempfile::tempdir;

fn yard_carousel() -> Carousel {
    let deck = penny::SLIDES.iter().map(|spec| spec.to_slide()).collect();
    Carousel::new(deck).expect("declared deck is non-empty")
}

#[test]
fn test_full_gallery_session() {
    // A visitor lets two slides pass, browses back, zooms in for a
    // while, and resumes watching. End to end through the public API.
    let mut carousel = yard_carousel();

    carousel.tick(DWELL);
    carousel.tick(DWELL);
    assert_eq!(carousel.active_index(), 2);

    carousel.retreat();
    assert_eq!(carousel.active_index(), 1);

    carousel.tick(Duration::from_millis(4000));
    carousel.toggle_zoom();
    carousel.tick(Duration::from_millis(60_000));
    assert_eq!(carousel.active_index(), 1, "no auto-advance while zoomed");

    carousel.toggle_zoom();
    carousel.tick(Duration::from_millis(4000));
    assert_eq!(carousel.active_index(), 1, "dwell window restarted on zoom-out");

    carousel.tick(Duration::from_millis(1000));
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn test_router_visibility_drives_page_lifecycle() {
    // Wide window with both panes: the yard page is mounted. Focusing
    // the other brand unmounts it; restoring the split remounts fresh.
    let mut router = Router::new(1280.0);
    let mut page = PennyState::new();
    page.set_visible(router.shows_penny());
    assert!(page.is_mounted());

    page.update(PennyMessage::Carousel(carousel_ui::Message::Next));
    page.update(PennyMessage::ToggleStory(0));

    router.toggle_focus(Brand::Savvy);
    page.set_visible(router.shows_penny());
    assert!(!page.is_mounted());

    // Ticks delivered after disposal must not resurrect anything.
    page.tick(DWELL);
    assert!(!page.is_mounted());

    router.toggle_focus(Brand::Savvy);
    page.set_visible(router.shows_penny());
    assert!(page.is_mounted());
    assert_eq!(
        page.carousel().map(Carousel::active_index),
        Some(0),
        "remount starts on the first slide"
    );
    assert!(!page.is_expanded(0), "expanded stories were discarded");
}

#[test]
fn test_autoplay_preference_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let written = Config {
        autoplay: Some(false),
        start_brand: Some("penny".to_string()),
    };
    config::save_to_path(&written, &config_path).expect("Failed to write config file");

    let loaded = config::load(Some(dir.path())).expect("Failed to load config from dir");
    assert_eq!(loaded.autoplay, Some(false));
    assert_eq!(
        loaded.start_brand.as_deref().and_then(Brand::from_identifier),
        Some(Brand::Penny)
    );

    dir.close().expect("Failed to close temporary directory");
}
