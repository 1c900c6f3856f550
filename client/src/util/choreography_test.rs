use super::*;

fn cfg() -> MotionConfig {
    MotionConfig::default()
}

fn tween_for<T: Copy + PartialEq + std::fmt::Debug>(timeline: &Timeline<T>, target: T) -> &Tween<T> {
    timeline
        .tweens
        .iter()
        .find(|tween| tween.target == target)
        .unwrap_or_else(|| panic!("no tween for {target:?}"))
}

fn translate_y(style: &Style) -> Length {
    style.transform.expect("style has a transform").y
}

// =============================================================
// Timeline mechanics
// =============================================================

#[test]
fn stagger_offsets_each_target() {
    let tweens = stagger(0..3, Style::default(), Style::default(), 1000.0, 750.0, 100.0, Ease::Linear);
    let delays = tweens.iter().map(|t| t.delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![750.0, 850.0, 950.0]);
}

#[test]
fn completion_defaults_to_slowest_member() {
    let timeline = Timeline::default()
        .push(Tween::new(1, Style::default(), Style::default(), 500.0, Ease::Linear))
        .push(Tween::new(2, Style::default(), Style::default(), 400.0, Ease::Linear).delayed(300.0));
    assert_eq!(timeline.completion_ms(), 700.0);
}

#[test]
fn completing_on_ignores_other_members() {
    let timeline = Timeline::default()
        .push(Tween::new(1, Style::default(), Style::default(), 500.0, Ease::Linear))
        .push(Tween::new(2, Style::default(), Style::default(), 4000.0, Ease::Linear))
        .completing_on(1);
    assert_eq!(timeline.completion_ms(), 500.0);
    assert!(!timeline.gates_completion(&timeline.tweens[1]));
}

// =============================================================
// Menu
// =============================================================

#[test]
fn open_completes_on_overlay_clip() {
    let timeline = menu_open(&cfg(), 8);
    let overlay = tween_for(&timeline, MenuTarget::Overlay);
    assert_eq!(overlay.from.clip, Some(ClipPolygon::TOP_EDGE));
    assert_eq!(overlay.to.clip, Some(ClipPolygon::FULL));
    assert_eq!(timeline.completion_ms(), 1250.0);
}

#[test]
fn open_staggers_every_reveal_entry() {
    let timeline = menu_open(&cfg(), 8);
    let reveals = timeline
        .tweens
        .iter()
        .filter(|t| matches!(t.target, MenuTarget::Reveal(_)))
        .collect::<Vec<_>>();
    assert_eq!(reveals.len(), 8);
    assert_eq!(reveals[0].delay_ms, 750.0);
    assert_eq!(reveals[7].delay_ms, 1450.0);
    assert!(reveals.iter().all(|t| t.ease == Ease::Power3Out && t.duration_ms == 1000.0));
}

#[test]
fn open_swaps_labels_with_offsets() {
    let timeline = menu_open(&cfg(), 0);
    let leaving = tween_for(&timeline, MenuTarget::OpenLabel);
    let entering = tween_for(&timeline, MenuTarget::CloseLabel);
    assert_eq!(leaving.delay_ms, 250.0);
    assert_eq!(entering.delay_ms, 500.0);
    assert_eq!(leaving.to, label_hidden(-1.0));
    assert_eq!(entering.from, label_hidden(1.0));
    assert_eq!(entering.to, label_shown());
}

#[test]
fn close_mirrors_open() {
    let open = menu_open(&cfg(), 0);
    let close = menu_close(&cfg());
    for target in [MenuTarget::Container, MenuTarget::Content, MenuTarget::Overlay] {
        let forward = tween_for(&open, target);
        let backward = tween_for(&close, target);
        assert_eq!(forward.from, backward.to, "{target:?}");
        assert_eq!(forward.to, backward.from, "{target:?}");
    }
    assert_eq!(tween_for(&close, MenuTarget::CloseLabel).to, label_hidden(1.0));
    assert_eq!(tween_for(&close, MenuTarget::OpenLabel).to, label_shown());
}

#[test]
fn close_leaves_reveals_to_the_completion_reset() {
    let close = menu_close(&cfg());
    assert!(!close.tweens.iter().any(|t| matches!(t.target, MenuTarget::Reveal(_))));
    assert!(overlay_closed().clip.is_some_and(ClipPolygon::is_collapsed));
}

#[test]
fn menu_tweens_keep_property_sets_aligned() {
    for timeline in [menu_open(&cfg(), 4), menu_close(&cfg())] {
        for tween in &timeline.tweens {
            assert!(tween.from.same_properties(&tween.to), "{:?}", tween.target);
        }
    }
}

#[test]
fn menu_duration_follows_config() {
    let fast = MotionConfig { menu_duration_ms: 600.0, ..MotionConfig::default() };
    assert_eq!(menu_close(&fast).completion_ms(), 600.0);
}

#[test]
fn preview_reveal_lands_on_identity() {
    let timeline = preview_reveal();
    let tween = &timeline.tweens[0];
    assert_eq!(tween.from, preview_enter());
    assert_eq!(tween.to.transform, Some(Transform::IDENTITY));
    assert_eq!(tween.to.opacity, Some(1.0));
    assert_eq!(timeline.completion_ms(), 750.0);
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn slide_group_is_fully_synchronized() {
    for direction in [Direction::Down, Direction::Up] {
        let timeline = slide_timeline(direction, &cfg());
        assert_eq!(timeline.tweens.len(), 11);
        for tween in &timeline.tweens {
            assert_eq!(tween.delay_ms, 0.0);
            assert_eq!(tween.duration_ms, 1250.0);
            assert_eq!(tween.ease, Ease::Power2InOut);
            assert!(tween.from.same_properties(&tween.to), "{:?}", tween.target);
        }
        assert_eq!(timeline.completion_ms(), 1250.0);
    }
}

#[test]
fn incoming_parts_settle_at_rest() {
    let timeline = slide_timeline(Direction::Down, &cfg());
    for part in [SlidePart::Title, SlidePart::Description, SlidePart::Counter] {
        let tween = tween_for(&timeline, SlideTarget::Incoming(part));
        assert_eq!(translate_y(&tween.to), Length::ZERO);
    }
    let image = tween_for(&timeline, SlideTarget::Incoming(SlidePart::MainImage));
    assert_eq!(translate_y(&image.to), Length::Percent(0.0));
}

#[test]
fn down_moves_text_upward_and_up_mirrors_it() {
    let down = slide_timeline(Direction::Down, &cfg());
    let up = slide_timeline(Direction::Up, &cfg());
    let out_down = tween_for(&down, SlideTarget::Outgoing(SlidePart::Title));
    let out_up = tween_for(&up, SlideTarget::Outgoing(SlidePart::Title));
    assert_eq!(translate_y(&out_down.to), Length::Px(-50.0));
    assert_eq!(translate_y(&out_up.to), Length::Px(50.0));

    let in_down = tween_for(&down, SlideTarget::Incoming(SlidePart::Counter));
    assert_eq!(translate_y(&in_down.from), Length::Px(18.0));
}

#[test]
fn main_image_travels_with_direction() {
    let down = slide_timeline(Direction::Down, &cfg());
    let outgoing = tween_for(&down, SlideTarget::Outgoing(SlidePart::MainImage));
    let incoming = tween_for(&down, SlideTarget::Incoming(SlidePart::MainImage));
    assert_eq!(translate_y(&outgoing.to), Length::Percent(50.0));
    assert_eq!(translate_y(&incoming.from), Length::Percent(-50.0));
}

#[test]
fn clip_sweeps_mirror_between_directions() {
    let down = slide_timeline(Direction::Down, &cfg());
    let up = slide_timeline(Direction::Up, &cfg());

    let bg_down = tween_for(&down, SlideTarget::Incoming(SlidePart::Background));
    assert_eq!(bg_down.from.clip, Some(ClipPolygon::BOTTOM_EDGE));
    assert_eq!(bg_down.to.clip, Some(ClipPolygon::FULL_FROM_BOTTOM));

    let bg_up = tween_for(&up, SlideTarget::Incoming(SlidePart::Background));
    assert_eq!(bg_up.from.clip, Some(ClipPolygon::TOP_EDGE));
    assert_eq!(bg_up.to.clip, Some(ClipPolygon::FULL));

    let wrap_down = tween_for(&down, SlideTarget::Incoming(SlidePart::MainWrapper));
    let wrap_up = tween_for(&up, SlideTarget::Incoming(SlidePart::MainWrapper));
    assert_eq!(wrap_down.from.clip, Some(ClipPolygon::TOP_EDGE));
    assert_eq!(wrap_up.from.clip, Some(ClipPolygon::BOTTOM_EDGE));
}

#[test]
fn old_background_scales_up() {
    let timeline = slide_timeline(Direction::Up, &cfg());
    let tween = tween_for(&timeline, SlideTarget::Outgoing(SlidePart::BackgroundImage));
    assert_eq!(tween.to.transform.map(|t| t.scale), Some(1.5));
}

#[test]
fn entry_styles_match_timeline_start() {
    for direction in [Direction::Down, Direction::Up] {
        let timeline = slide_timeline(direction, &cfg());
        let entries = slide_entry_styles(direction);
        assert_eq!(entries.len(), 6);
        for (part, style) in entries {
            let tween = tween_for(&timeline, SlideTarget::Incoming(part));
            assert_eq!(tween.from, style, "{part:?} {direction:?}");
        }
    }
}
