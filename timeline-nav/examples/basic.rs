// Example: minimal usage with arrow/bullet style commands.
use timeline_nav::{Event, Timeline, TimelineOptions};

fn main() {
    let events: Vec<Event> = (1..=6)
        .map(|i| Event::new(format!("2024-0{i}-01")).with_title(format!("Milestone {i}")))
        .collect();

    let mut t: Timeline = Timeline::new(
        TimelineOptions::new(events)
            .with_card_size(350, 400)
            .with_spacing(24),
    );
    println!(
        "total_width={} max_translate={}",
        t.total_width(),
        t.max_translate()
    );

    t.next();
    t.next();
    println!("after next x2: {:?}", t.frame());

    // Bullet click on the last card: the offset stops at max_translate.
    t.set_index(5);
    println!("after bullet 5: {:?}", t.frame());

    t.next(); // no wrap
    println!("can_go_next={} index={}", t.can_go_next(), t.current_index());
}
