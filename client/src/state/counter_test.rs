use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_extracts_target_and_decorations() {
    let format = CounterFormat::parse("$1,250+").unwrap();
    assert_eq!(format.target, 1250.0);
    assert!(format.dollar);
    assert!(format.plus);
    assert!(!format.percent);
    assert!(!format.slash);
}

#[test]
fn parse_takes_leading_float_prefix() {
    assert_eq!(CounterFormat::parse("1.2.3").unwrap().target, 1.2);
    assert_eq!(CounterFormat::parse(".5").unwrap().target, 0.5);
    assert_eq!(CounterFormat::parse("7.").unwrap().target, 7.0);
    assert_eq!(CounterFormat::parse("98%").unwrap().target, 98.0);
}

#[test]
fn parse_rejects_non_numeric_text() {
    assert_eq!(CounterFormat::parse("Award winning"), None);
    assert_eq!(CounterFormat::parse("."), None);
    assert_eq!(CounterFormat::parse("$"), None);
    assert_eq!(CounterFormat::parse(""), None);
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn render_abbreviates_by_target_magnitude() {
    let thousands = CounterFormat::parse("$1,250+").unwrap();
    assert_eq!(thousands.render(500.0), "$0.5K+");

    let millions = CounterFormat::parse("1,500,000").unwrap();
    assert_eq!(millions.render(1_200_000.0), "1.2M");

    let billions = CounterFormat::parse("$2,000,000,000").unwrap();
    assert_eq!(billions.render(1_000_000_000.0), "$1.0B");
}

#[test]
fn render_floors_small_targets() {
    let format = CounterFormat::parse("98%").unwrap();
    assert_eq!(format.render(49.9), "49%");
    assert_eq!(format.render(0.3), "0%");
}

#[test]
fn render_slash_keeps_digits_and_appends_seven() {
    let format = CounterFormat::parse("24/7").unwrap();
    assert_eq!(format.target, 247.0);
    assert_eq!(format.render(12.4), "12/7");
}

// =============================================================
// Animation
// =============================================================

#[test]
fn animation_round_trips_original_text() {
    let mut anim = CounterAnimation::new("$1,250+", DEFAULT_STEPS).unwrap();
    let first = anim.tick();
    assert_eq!(first, CounterFrame { text: "$0.0K+".to_owned(), done: false });

    let mut last = first;
    let mut frames = 1;
    while !last.done {
        last = anim.tick();
        frames += 1;
    }
    assert_eq!(frames, DEFAULT_STEPS);
    assert_eq!(last.text, "$1,250+");
    assert!(anim.is_done());
}

#[test]
fn ticks_after_completion_keep_original() {
    let mut anim = CounterAnimation::new("24/7", 2).unwrap();
    assert!(!anim.tick().done);
    assert_eq!(anim.tick(), CounterFrame { text: "24/7".to_owned(), done: true });
    assert_eq!(anim.tick(), CounterFrame { text: "24/7".to_owned(), done: true });
}

#[test]
fn zero_steps_finishes_immediately() {
    let mut anim = CounterAnimation::new("500+", 0).unwrap();
    assert_eq!(anim.tick(), CounterFrame { text: "500+".to_owned(), done: true });
}

#[test]
fn non_numeric_text_has_no_animation() {
    assert_eq!(CounterAnimation::new("Trusted", DEFAULT_STEPS), None);
}

#[test]
fn frame_interval_splits_duration() {
    assert_eq!(CounterAnimation::frame_interval_ms(DEFAULT_DURATION_MS, DEFAULT_STEPS), 33);
    assert_eq!(CounterAnimation::frame_interval_ms(1000, 0), 1000);
}
