// Example: host-clock driven autoplay with teardown.
use timeline_nav::{Event, Timeline, TimelineOptions};

fn main() {
    let events: Vec<Event> = (0..5)
        .map(|i| Event::new("2024-01-15").with_title(format!("#{i}")))
        .collect();
    let mut t: Timeline = Timeline::new(TimelineOptions::new(events).with_autoplay(true, 3000));

    // Mount at t=0.
    t.sync_clock(0);

    let mut now_ms = 0u64;
    while now_ms <= 18_000 {
        let fired = t.tick(now_ms);
        if fired > 0 {
            println!("t={now_ms}ms fired={fired} index={}", t.current_index());
        }
        now_ms += 500;
    }

    // Unmount: nothing fires afterwards.
    t.teardown();
    println!("after teardown: fired={} index={}", t.tick(60_000), t.current_index());
}
