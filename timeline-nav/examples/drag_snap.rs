// Example: a drag gesture rendered frame by frame, then snapped on release.
use timeline_nav::{Event, Timeline, TimelineOptions};

fn main() {
    let events: Vec<Event> = (0..10)
        .map(|i| Event::new("2024-01-15").with_title(format!("#{i}")))
        .collect();
    let mut t: Timeline = Timeline::new(
        TimelineOptions::new(events)
            .with_card_size(350, 400)
            .with_spacing(24),
    );
    t.set_index(2);

    // Pointer moves right-to-left: the timeline advances.
    t.on_drag_start(600.0);
    for x in [580.0, 540.0, 480.0, 420.0, 390.0] {
        t.on_drag_move(x);
        println!(
            "x={x} drag_offset={} live_offset={} index={}",
            t.drag_offset(),
            t.live_offset(),
            t.current_index()
        );
    }
    let committed = t.on_drag_end();
    println!(
        "released: committed={committed:?} translate_x={}",
        t.translate_x()
    );

    // Toggling expansion is independent of navigation.
    t.toggle_expanded(3);
    t.set_index(0);
    println!("card 3 expanded after navigating away: {}", t.is_expanded(3));
}
