//! End-to-end page flows driven the way a browser host would drive them.

use std::time::Duration;

use pretty_assertions::assert_eq;
use zyvara::prelude::*;
use zyvara::core::TweenConfig;

const FRAME: Duration = Duration::from_millis(16);

fn desktop(scroll_left: f64) -> StripMeasure {
    StripMeasure {
        scroll_left,
        scroll_width: 2000.0,
        client_width: 800.0,
        card_width: 300.0,
        window_width: 1440.0,
    }
}

/// Play `cmd` frame by frame, feeding every intermediate offset back as a
/// scroll event. Returns the offset the strip settled on.
fn animate(browser: &mut VenueBrowser<'_>, from: f64, cmd: &ScrollCommand) -> f64 {
    let mut tween = ScrollTween::for_command(from, cmd, TweenConfig::default());
    let mut frames = 0;
    while tween.tick(FRAME) {
        browser.on_scroll(&desktop(tween.position()));
        frames += 1;
        assert!(frames < 100, "tween never settled");
    }
    let settled = tween.position();
    browser.on_scroll(&desktop(settled));
    settled
}

#[test]
fn browser_with_arrow_navigation() {
    let site = Site::new().expect("builtin site");

    let mut browser = site.browser();
    browser.on_scroll(&desktop(0.0));
    assert_eq!(browser.indicator().current, "01");
    assert_eq!(browser.controls(), NavControls::PREV_DISABLED);

    let cmd = browser.next(&desktop(0.0)).expect("can advance");
    assert_eq!(cmd.behavior, ScrollBehavior::Smooth);
    let at = animate(&mut browser, 0.0, &cmd);
    assert_eq!(at, 348.0);
    assert_eq!(browser.active_index(), 1);
    assert_eq!(browser.active_venue().map(|v| v.slug.as_str()), Some("grace"));
    assert_eq!(browser.controls(), NavControls::empty());

    let cmd = browser.next(&desktop(at)).expect("can advance");
    let at = animate(&mut browser, at, &cmd);
    assert_eq!(at, 696.0);
    assert_eq!(browser.indicator().current, "03");

    let cmd = browser.previous(&desktop(at)).expect("can go back");
    assert_eq!(cmd.index, 1);
}

#[test]
fn card_click_opens_detail_and_zoom_is_released_on_leave() {
    let site = Site::new().expect("builtin site");
    let doc = DocumentScrollLock::new();

    let browser = site.browser();
    let cmd = browser.select(4, &desktop(0.0)).expect("catalog has venues");
    assert_eq!(cmd.index, 4);
    // 4 * 348 = 1392, clamped to the 1200 px of scroll.
    assert_eq!(cmd.target_offset, 1200.0);

    let slug = site.catalog().venues()[cmd.index].slug.clone();

    {
        let mut page = site.venue_detail(&slug, doc.handle()).expect("venue exists");
        assert_eq!(page.venue().name, "Soleil");
        page.handle(ZoomEvent::Activate);
        assert!(doc.is_locked());
        assert!(!page.content_panel_visible());
    }
    assert!(!doc.is_locked());
    assert_eq!(doc.holder_count(), 0);
}

#[test]
fn unknown_venue_is_a_recoverable_error() {
    let site = Site::new().expect("builtin site");
    let doc = DocumentScrollLock::new();
    let err = site
        .venue_detail("atlantis", doc.handle())
        .expect_err("no such venue");
    assert!(err.is_recoverable());
    assert_eq!(err.error_type(), "venue_not_found");
    assert!(!doc.is_locked());
}

#[test]
fn about_page_counts_and_rotates() {
    let site = Site::new().expect("builtin site");
    let mut about = site.about();
    let first = about.testimonial().map(|r| r.author.clone());
    about.next_testimonial();
    about.next_testimonial();
    about.next_testimonial();
    assert_eq!(about.testimonial().map(|r| r.author.clone()), first);

    // 300 ms at 20 ms per step of 10.
    for _ in 0..15 {
        about.tick(Duration::from_millis(20));
    }
    assert_eq!(about.events_label(), "150+");
    about.tick(Duration::from_secs(5));
    assert_eq!(about.events_label(), "500+");
}
