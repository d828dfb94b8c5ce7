use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use timeline_nav::{Event, TimelineOptions};

fn events(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let e = Event::new(format!("2024-01-{:02}T10:00:00Z", i + 1))
                .with_title(format!("Event {i}"));
            if i % 2 == 0 {
                e.with_description(format!("Long description for event {i}"))
            } else {
                e
            }
        })
        .collect()
}

fn controller(n: usize) -> Controller {
    Controller::new(TimelineOptions::new(events(n)), 0)
}

#[test]
fn drag_follows_pointer_without_easing() {
    let mut c = controller(5);
    assert!(c.handle(InputEvent::PointerDown { x: 500.0 }, 0));
    assert!(c.handle(InputEvent::PointerMove { x: 420.0 }, 16));
    assert!(!c.is_animating());
    assert_eq!(c.rendered_offset(), 80.0);
    assert_eq!(c.tick(32), 80.0);

    let v = c.visuals();
    assert_eq!(v.cursor, Cursor::Grabbing);
    assert_eq!(v.track.transition, Transition::None);
    assert_eq!(v.track.offset, 80.0);
}

#[test]
fn release_snaps_with_tween() {
    let mut c = controller(5);
    c.dispatch(
        [
            InputEvent::PointerDown { x: 500.0 },
            InputEvent::PointerMove { x: 300.0 },
        ],
        0,
    );
    assert_eq!(c.rendered_offset(), 200.0);

    assert!(c.handle(InputEvent::PointerUp, 100));
    assert_eq!(c.timeline().current_index(), 1);
    assert_eq!(c.timeline().translate_x(), 340);
    assert!(c.is_animating());

    let mut last = c.rendered_offset();
    for now_ms in [150u64, 200, 250, 300, 350, 400] {
        let off = c.tick(now_ms);
        assert!(off >= last);
        assert!(off <= 340.0);
        last = off;
    }
    assert!(!c.is_animating());
    assert_eq!(c.rendered_offset(), 340.0);
    assert_eq!(c.visuals().cursor, Cursor::Grab);
}

#[test]
fn touch_uses_first_contact_and_ignores_empty_lists() {
    let mut c = controller(5);
    assert!(!c.handle(InputEvent::TouchStart { touches: Vec::new() }, 0));
    assert!(!c.timeline().is_dragging());

    let touches = vec![TouchPoint { x: 600.0 }, TouchPoint { x: 10.0 }];
    assert!(c.handle(InputEvent::TouchStart { touches }, 0));
    assert!(c.handle(InputEvent::touch_move(250.0), 10));
    assert_eq!(c.timeline().drag_offset(), 350.0);
    assert!(!c.handle(InputEvent::TouchMove { touches: Vec::new() }, 20));

    c.handle(InputEvent::TouchEnd, 30);
    assert_eq!(c.timeline().current_index(), 1);
}

#[test]
fn touch_cancel_ends_gesture_like_release() {
    let mut c = controller(5);
    c.handle(InputEvent::touch_start(700.0), 0);
    c.handle(InputEvent::touch_move(0.0), 0);
    c.handle(InputEvent::TouchCancel, 0);
    assert!(!c.timeline().is_dragging());
    assert_eq!(c.timeline().current_index(), 2);
}

#[test]
fn events_apply_strictly_in_order() {
    let mut c = controller(5);
    let changed = c.dispatch(
        [
            InputEvent::PointerDown { x: 500.0 },
            InputEvent::PointerMove { x: 300.0 },
            InputEvent::PointerUp,
            InputEvent::NextClicked,
        ],
        0,
    );
    assert!(changed);
    assert_eq!(c.timeline().current_index(), 2);
    assert_eq!(c.timeline().translate_x(), 680);
}

#[test]
fn pointer_leave_commits_gesture() {
    let mut c = controller(5);
    c.handle(InputEvent::PointerDown { x: 100.0 }, 0);
    c.handle(InputEvent::PointerMove { x: 600.0 }, 0);
    assert_eq!(c.timeline().live_offset(), -500.0);
    c.handle(InputEvent::PointerLeave, 0);
    assert!(!c.timeline().is_dragging());
    assert_eq!(c.timeline().current_index(), 0);
    assert_eq!(c.timeline().translate_x(), 0);
}

#[test]
fn arrows_and_bullets_navigate_without_wrap() {
    let mut c = controller(3);
    assert!(!c.handle(InputEvent::PreviousClicked, 0));
    assert_eq!(c.visuals().arrows, Some(ArrowVisuals {
        previous_disabled: true,
        next_disabled: false,
    }));

    assert!(c.handle(InputEvent::BulletClicked(2), 0));
    assert_eq!(c.timeline().current_index(), 2);
    assert!(!c.handle(InputEvent::NextClicked, 0));
    assert_eq!(c.visuals().arrows, Some(ArrowVisuals {
        previous_disabled: false,
        next_disabled: true,
    }));

    // Out-of-range bullet clamps to the last card.
    assert!(c.handle(InputEvent::BulletClicked(0), 0));
    assert!(c.handle(InputEvent::BulletClicked(99), 0));
    assert_eq!(c.timeline().current_index(), 2);
}

#[test]
fn expand_toggle_reports_change_only_in_range() {
    let mut c = controller(3);
    assert!(c.handle(InputEvent::ExpandToggled(0), 0));
    assert!(c.timeline().is_expanded(0));
    assert!(!c.handle(InputEvent::ExpandToggled(7), 0));

    let v = c.visuals();
    assert_eq!(v.cards[0].expand, Some(ExpandAffordance::ShowLess));
    assert!(v.cards[0].show_description);
    assert_eq!(v.cards[1].expand, None);
    assert_eq!(v.cards[2].expand, Some(ExpandAffordance::ReadMore));
    assert!(!v.cards[2].show_description);

    assert!(c.handle(InputEvent::ExpandToggled(0), 0));
    assert!(!c.timeline().is_expanded(0));
}

#[test]
fn resize_reclamps_committed_offset() {
    let mut c = controller(5);
    c.handle(InputEvent::BulletClicked(4), 0);
    assert_eq!(c.timeline().translate_x(), 900);
    c.tick(1_000);
    assert_eq!(c.rendered_offset(), 900.0);

    assert!(c.handle(InputEvent::Resized { width: 1400 }, 1_000));
    assert_eq!(c.timeline().max_translate(), 300);
    assert_eq!(c.timeline().translate_x(), 300);
    assert_eq!(c.timeline().current_index(), 4);
    assert!(c.is_animating());
    c.tick(2_000);
    assert_eq!(c.rendered_offset(), 300.0);
}

#[test]
fn autoplay_ticks_advance_and_animate() {
    let opts = TimelineOptions::<()>::new(events(3)).with_autoplay(true, 1_000);
    let mut c = Controller::new(opts, 0);
    assert_eq!(c.tick(999), 0.0);
    assert_eq!(c.timeline().current_index(), 0);

    c.tick(1_000);
    assert_eq!(c.timeline().current_index(), 1);
    assert!(c.is_animating());
    c.tick(1_300);
    assert!(!c.is_animating());
    // Three cards in an 800px viewport: max_translate = 3 * 340 - 800.
    assert_eq!(c.timeline().translate_x(), 220);
    assert_eq!(c.rendered_offset(), 220.0);

    c.tick(2_000);
    c.tick(3_000);
    assert_eq!(c.timeline().current_index(), 0);
}

#[test]
fn unmount_stops_autoplay() {
    let opts = TimelineOptions::<()>::new(events(3)).with_autoplay(true, 1_000);
    let mut c = Controller::new(opts, 0);
    c.tick(1_000);
    let mut t = c.unmount();
    assert!(t.is_torn_down());
    assert!(!t.is_autoplay_scheduled());
    assert_eq!(t.tick(10_000), 0);
    assert_eq!(t.current_index(), 1);
}

#[test]
fn set_options_can_disable_autoplay() {
    let opts = TimelineOptions::<()>::new(events(3)).with_autoplay(true, 1_000);
    let mut c = Controller::new(opts.clone(), 0);
    c.set_options(opts.with_autoplay(false, 1_000), 500);
    assert!(!c.timeline().is_autoplay_scheduled());
    c.tick(5_000);
    assert_eq!(c.timeline().current_index(), 0);

    c.update_options(|o| o.autoplay = true, 5_000);
    c.tick(5_999);
    assert_eq!(c.timeline().current_index(), 0);
    c.tick(6_000);
    assert_eq!(c.timeline().current_index(), 1);
}

#[test]
fn disabled_drag_uses_default_cursor() {
    let opts = TimelineOptions::<()>::new(events(3)).with_drag_enabled(false);
    let mut c = Controller::new(opts, 0);
    assert!(!c.handle(InputEvent::PointerDown { x: 10.0 }, 0));
    assert_eq!(c.visuals().cursor, Cursor::Default);
}

#[test]
fn visuals_follow_options() {
    let mut list = events(2);
    list[1] = list[1]
        .clone()
        .with_image("b.png", None, Some(String::from("caption")))
        .with_background_color("#222222");
    let opts = TimelineOptions::<&str>::new(list)
        .with_colors("#000000", "#ff5722")
        .with_custom_components([(1, "chart"), (5, "ignored")]);
    let c = Controller::new(opts, 0);
    let v = c.visuals();

    assert_eq!(v.background, "#000000");
    assert_eq!(v.accent, "#ff5722");
    assert_eq!(v.track.width, 680);
    assert_eq!(v.track.gap, 20);
    assert_eq!(v.track.transition, Transition::EaseOut {
        duration_ms: DEFAULT_SNAP_DURATION_MS,
    });

    assert_eq!(v.bullets.len(), 2);
    assert!(v.bullets[0].active);
    assert_eq!(v.bullets[0].color, "#ff5722");
    assert_eq!(v.bullets[1].color, INACTIVE_BULLET_COLOR);

    assert_eq!(v.cards[0].background, CARD_BACKGROUND);
    assert_eq!(v.cards[0].image_alt, None);
    assert!(!v.cards[0].has_custom_component);
    assert_eq!(v.cards[1].background, "#222222");
    assert_eq!(v.cards[1].image_alt.as_deref(), Some("Event 1"));
    assert!(v.cards[1].has_custom_component);
    assert_eq!(v.cards[1].width, 320);
    assert_eq!(v.cards[1].min_height, 400);
}

#[test]
fn hidden_chrome_produces_no_arrows_or_bullets() {
    let opts = TimelineOptions::<()>::new(events(3))
        .with_show_arrows(false)
        .with_show_bullets(false);
    let v = Controller::new(opts, 0).visuals();
    assert_eq!(v.arrows, None);
    assert!(v.bullets.is_empty());

    let empty = controller(0).visuals();
    assert_eq!(empty.arrows, None);
    assert!(empty.cards.is_empty());
}

#[test]
fn tag_hover_tints_with_accent() {
    let opts = TimelineOptions::<()>::new(events(1));
    let idle = tag_visuals(&opts, false);
    assert_eq!(idle.border_color, "#1976d2");
    assert_eq!(idle.color, "#1976d2");
    assert_eq!(idle.background, TRANSPARENT);
    assert_eq!(tag_visuals(&opts, true).background, "#1976d220");
}

#[test]
fn expand_affordance_labels() {
    assert_eq!(ExpandAffordance::ReadMore.label(), "Read More");
    assert_eq!(ExpandAffordance::ShowLess.label(), "Show Less");
    assert_eq!(ExpandAffordance::ReadMore.glyph(), '▼');
    assert_eq!(ExpandAffordance::ShowLess.glyph(), '▲');
}

#[test]
fn easing_endpoints_are_exact() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOut,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    assert!(Easing::EaseOut.sample(0.5) > 0.5);
}

#[test]
fn retargeting_mid_tween_starts_from_current_sample() {
    let mut c = controller(5).with_snap_animation(100, Easing::Linear);
    c.handle(InputEvent::NextClicked, 0);
    assert_eq!(c.tick(50), 170.0);

    c.handle(InputEvent::NextClicked, 50);
    assert_eq!(c.tick(50), 170.0);
    assert_eq!(c.tick(100), 425.0);
    assert_eq!(c.tick(150), 680.0);
    assert!(!c.is_animating());
}

#[test]
fn cancel_animation_jumps_to_target() {
    let mut c = controller(5);
    c.handle(InputEvent::NextClicked, 0);
    assert!(c.is_animating());
    c.cancel_animation();
    assert!(!c.is_animating());
    assert_eq!(c.rendered_offset(), 340.0);
}
