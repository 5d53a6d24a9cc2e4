use super::*;

#[test]
fn one_shot_fires_exactly_once() {
    let mut shot = OneShot::default();
    assert!(!shot.has_fired());
    assert!(shot.fire());
    assert!(shot.has_fired());
    assert!(!shot.fire());
    assert_eq!(shot, OneShot::Fired);
}

#[test]
fn reveal_delay_staggers_by_batch_position() {
    assert_eq!(reveal_delay_ms(0, 100), 0);
    assert_eq!(reveal_delay_ms(1, 100), 100);
    assert_eq!(reveal_delay_ms(4, 100), 400);
}

#[test]
fn reveal_delay_saturates() {
    assert_eq!(reveal_delay_ms(usize::MAX, 100), u32::MAX);
}

#[test]
fn hidden_and_revealed_styles_cover_the_same_properties() {
    for (property, _) in REVEALED_STYLE {
        assert!(HIDDEN_STYLE.iter().any(|(p, _)| *p == property));
    }
    assert_eq!(HIDDEN_STYLE[1], ("transform", "translateY(30px)"));
}
