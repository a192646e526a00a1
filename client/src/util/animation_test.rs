use super::*;

#[test]
fn first_item_has_no_delay() {
    let anim = EntranceAnimation::for_index(0);
    assert_eq!(anim.duration_ms, 200);
    assert_eq!(anim.delay_ms, 0);
}

#[test]
fn delay_staggers_by_index() {
    assert_eq!(EntranceAnimation::for_index(1).delay_ms, 40);
    assert_eq!(EntranceAnimation::for_index(5).delay_ms, 200);
}

#[test]
fn duration_is_constant_across_items() {
    assert_eq!(
        EntranceAnimation::for_index(0).duration_ms,
        EntranceAnimation::for_index(50).duration_ms
    );
}

#[test]
fn huge_index_saturates_instead_of_overflowing() {
    assert_eq!(EntranceAnimation::for_index(usize::MAX).delay_ms, u32::MAX);
}

#[test]
fn style_renders_inline_declarations() {
    assert_eq!(
        EntranceAnimation::for_index(2).style(),
        "animation-duration: 200ms; animation-delay: 80ms;"
    );
}
