use timeline_nav::{Event, TimelineOptions};
use timeline_nav_adapter::{Controller, InputEvent};

fn main() {
    // Example: a framework-neutral controller turning raw pointer input into rendered offsets.
    //
    // An adapter would:
    // - forward pointer/touch/click events to `handle` as they arrive
    // - call tick(now_ms) in a frame loop / timer
    // - translate the card track by the returned offset
    let events: Vec<Event> = (0..8)
        .map(|i| Event::new(format!("2024-03-{:02}", i + 1)).with_title(format!("Milestone {i}")))
        .collect();
    let mut c: Controller = Controller::new(
        TimelineOptions::new(events)
            .with_card_size(350, 400)
            .with_spacing(24),
        0,
    );
    c.handle(InputEvent::Resized { width: 1024 }, 0);

    let mut now_ms = 0u64;
    c.handle(InputEvent::PointerDown { x: 700.0 }, now_ms);
    for x in [660.0, 590.0, 510.0, 470.0] {
        now_ms += 16;
        c.handle(InputEvent::PointerMove { x }, now_ms);
        println!("t={now_ms} dragging offset={}", c.tick(now_ms));
    }

    now_ms += 16;
    c.handle(InputEvent::PointerUp, now_ms);
    println!(
        "released: index={} translate_x={}",
        c.timeline().current_index(),
        c.timeline().translate_x()
    );

    while c.is_animating() {
        now_ms += 16;
        let off = c.tick(now_ms);
        if now_ms % 64 == 0 {
            println!("t={now_ms} snapping offset={off:.1}");
        }
    }
    println!("settled at {}", c.rendered_offset());
}
