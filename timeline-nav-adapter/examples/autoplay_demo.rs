use timeline_nav::{Event, TimelineOptions};
use timeline_nav_adapter::{Controller, InputEvent, visuals};

fn demo_events() -> Vec<Event> {
    vec![
        Event::new("2024-01-15T10:00:00Z")
            .with_title("Project Kickoff")
            .with_short_description("Team assembled and goals defined.")
            .with_description("The initial planning session set the roadmap for the year.")
            .with_tags(["planning", "team"]),
        Event::new("2024-03-20T14:30:00Z")
            .with_title("First Release")
            .with_short_description("Version 1.0 shipped to early users.")
            .with_image("release.png", None, Some("Launch day".to_string())),
        Event::new("2024-06-10T09:00:00Z")
            .with_title("User Feedback Round")
            .with_short_description("Collected feedback from 500+ users.")
            .with_background_color("#fff8e1"),
        Event::new("2024-09-05T16:00:00Z")
            .with_title("Major Update")
            .with_short_description("Redesigned interface and new features.")
            .with_description("Navigation was reworked and drag support added."),
    ]
}

fn main() {
    // Example: clock-driven autoplay with a render snapshot after every advance.
    let opts = TimelineOptions::new(demo_events())
        .with_card_size(350, 400)
        .with_spacing(24)
        .with_autoplay(true, 3_000);
    let mut c: Controller = Controller::new(opts, 0);

    let mut now_ms = 0u64;
    let mut last = c.timeline().current_index();
    while now_ms < 14_000 {
        now_ms += 100;
        if now_ms == 7_000 {
            c.handle(InputEvent::ExpandToggled(0), now_ms);
        }
        c.tick(now_ms);
        let index = c.timeline().current_index();
        if index != last {
            last = index;
            let v = visuals(c.timeline());
            let card = &v.cards[index];
            println!(
                "t={now_ms} index={index} date={} bullets={:?}",
                card.date_label,
                v.bullets.iter().map(|b| b.active).collect::<Vec<_>>()
            );
        }
    }

    let t = c.unmount();
    println!("unmounted at index {} (expanded: {:?})", t.current_index(), t.is_expanded(0));
}
