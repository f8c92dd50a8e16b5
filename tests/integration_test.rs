use rcarousel::{
    CarouselConfig, CarouselController, Command, Deck, DeckWriter, InputEvent, Key,
    KeyBinding, ManualNavigation, MarkerView, PlayGlyph, Scheduler, SlideView, TimerHandle,
    VirtualScheduler,
};
use anyhow::Result;
use std::env;
use std::fs;
use std::time::Duration;

type Carousel = CarouselController<MarkerView, VirtualScheduler>;

fn carousel(slides: usize) -> Carousel {
    CarouselController::new(
        MarkerView::new(slides),
        VirtualScheduler::new(),
        slides,
        CarouselConfig::default(),
    )
    .unwrap()
}

fn assert_active(c: &Carousel, index: usize) {
    assert_eq!(c.current_slide(), index);
    assert_eq!(c.view().active_slides(), vec![index]);
    assert_eq!(c.view().active_indicators(), vec![index]);
}

/// Delivers every timer firing within `elapsed` to the controller.
fn run_for(c: &mut Carousel, elapsed: Duration) {
    let fired = c.scheduler_mut().advance(elapsed);
    for handle in fired {
        c.handle(InputEvent::TimerFired(handle));
    }
}

#[test]
fn test_next_button_walks_and_wraps() {
    let mut c = carousel(3);
    assert_active(&c, 0);

    c.handle(InputEvent::NextClicked);
    assert_active(&c, 1);
    c.handle(InputEvent::NextClicked);
    assert_active(&c, 2);
    c.handle(InputEvent::NextClicked);
    assert_active(&c, 0);
}

#[test]
fn test_prev_button_wraps_to_last() {
    let mut c = carousel(3);
    c.handle(InputEvent::PrevClicked);
    assert_active(&c, 2);
    assert!(c.is_playing());
}

#[test]
fn test_goto_normalizes_any_integer() {
    for count in 1..=7usize {
        let mut c = carousel(count);
        for k in -20i64..=20 {
            c.goto(k);
            let expected = (((k % count as i64) + count as i64) % count as i64) as usize;
            assert_active(&c, expected);
        }
    }
}

#[test]
fn test_indicator_click_jumps_and_restarts_timer() {
    let mut c = carousel(3);
    let before = c.timer_handle().unwrap();

    let outcome = c.handle(InputEvent::IndicatorClicked(2));
    assert!(outcome.handled);
    assert_active(&c, 2);

    let after = c.timer_handle().unwrap();
    assert_ne!(before, after);
    assert!(!c.scheduler().is_live(before));
    assert_eq!(c.scheduler().live_timers(), 1);
}

#[test]
fn test_manual_navigation_never_accumulates_timers() {
    let mut c = carousel(4);
    for event in [
        InputEvent::NextClicked,
        InputEvent::PrevClicked,
        InputEvent::IndicatorClicked(3),
        InputEvent::KeyDown(Key::ArrowRight),
        InputEvent::KeyDown(Key::ArrowLeft),
    ] {
        c.handle(event);
        assert_eq!(c.scheduler().live_timers(), 1, "after {:?}", event);
    }
}

#[test]
fn test_manual_navigation_resets_autoplay_phase() {
    let mut c = carousel(5);

    run_for(&mut c, Duration::from_millis(1500));
    c.handle(InputEvent::NextClicked);
    assert_active(&c, 1);

    // The old cycle would have fired at 2000 ms; the new one fires 2000 ms after the click
    run_for(&mut c, Duration::from_millis(1000));
    assert_active(&c, 1);
    run_for(&mut c, Duration::from_millis(1000));
    assert_active(&c, 2);
}

#[test]
fn test_autoplay_advances_once_per_interval() {
    let mut c = carousel(3);

    run_for(&mut c, Duration::from_millis(1999));
    assert_active(&c, 0);
    run_for(&mut c, Duration::from_millis(1));
    assert_active(&c, 1);
    run_for(&mut c, Duration::from_millis(4000));
    assert_active(&c, 0);
}

#[test]
fn test_custom_interval() {
    let config = CarouselConfig { timer_interval_ms: 500, ..Default::default() };
    let mut c = CarouselController::new(MarkerView::new(4), VirtualScheduler::new(), 4, config).unwrap();

    run_for(&mut c, Duration::from_millis(1500));
    assert_active(&c, 3);
}

#[test]
fn test_play_pause_button_toggles() {
    let mut c = carousel(3);

    c.handle(InputEvent::PlayPauseClicked);
    assert!(!c.is_playing());
    assert_eq!(c.view().glyph(), PlayGlyph::Play);
    assert_eq!(c.scheduler().live_timers(), 0);

    c.handle(InputEvent::PlayPauseClicked);
    assert!(c.is_playing());
    assert_eq!(c.view().glyph(), PlayGlyph::Pause);
    assert_eq!(c.scheduler().armed_total(), 2);
}

#[test]
fn test_paused_carousel_stays_put() {
    let mut c = carousel(3);
    c.pause();
    c.pause();

    run_for(&mut c, Duration::from_secs(30));
    assert_active(&c, 0);
    assert_eq!(c.view().glyph(), PlayGlyph::Play);
}

#[test]
fn test_space_toggles_and_suppresses_default() {
    let mut c = carousel(3);

    let outcome = c.handle(InputEvent::KeyDown(Key::Space));
    assert!(outcome.handled);
    assert!(outcome.prevent_default);
    assert!(!c.is_playing());
    assert_eq!(c.view().glyph(), PlayGlyph::Play);

    c.handle(InputEvent::KeyDown(Key::Space));
    assert!(c.is_playing());
}

#[test]
fn test_arrow_keys_navigate_without_suppressing_default() {
    let mut c = carousel(3);

    let outcome = c.handle(InputEvent::KeyDown(Key::ArrowRight));
    assert!(outcome.handled);
    assert!(!outcome.prevent_default);
    assert_active(&c, 1);

    c.handle(InputEvent::KeyDown(Key::ArrowLeft));
    assert_active(&c, 0);
}

#[test]
fn test_swipe_thresholds() {
    let mut c = carousel(3);

    // Right by 101: previous slide
    c.handle(InputEvent::PointerDown { x: 300.0 });
    c.handle(InputEvent::PointerUp { x: 401.0 });
    assert_active(&c, 2);

    // Left by 101: next slide
    c.handle(InputEvent::PointerDown { x: 300.0 });
    c.handle(InputEvent::PointerUp { x: 199.0 });
    assert_active(&c, 0);

    // Below the threshold either way: nothing
    for end in [350.0, 250.0, 400.0, 200.0] {
        c.handle(InputEvent::PointerDown { x: 300.0 });
        let outcome = c.handle(InputEvent::PointerUp { x: end });
        assert!(!outcome.handled);
        assert_active(&c, 0);
    }
}

#[test]
fn test_long_swipes_navigate_once() {
    let mut c = carousel(3);

    c.handle(InputEvent::PointerDown { x: 300.0 });
    c.handle(InputEvent::PointerUp { x: 450.0 });
    assert_active(&c, 2);

    c.handle(InputEvent::PointerDown { x: 300.0 });
    c.handle(InputEvent::PointerUp { x: 150.0 });
    assert_active(&c, 0);
}

#[test]
fn test_custom_swipe_threshold() {
    let config = CarouselConfig { swipe_threshold_px: 20.0, ..Default::default() };
    let mut c = CarouselController::new(MarkerView::new(3), VirtualScheduler::new(), 3, config).unwrap();

    c.handle(InputEvent::PointerDown { x: 100.0 });
    c.handle(InputEvent::PointerUp { x: 75.0 });
    assert_active(&c, 1);
}

#[test]
fn test_custom_key_bindings() {
    let mut bindings = rcarousel::input::default_key_bindings();
    bindings.push(KeyBinding::new(Key::End, Command::Goto(-1)));
    bindings.push(KeyBinding::new(Key::Home, Command::Goto(0)));
    let config = CarouselConfig { key_bindings: bindings, ..Default::default() };
    let mut c = CarouselController::new(MarkerView::new(4), VirtualScheduler::new(), 4, config).unwrap();

    c.handle(InputEvent::KeyDown(Key::End));
    assert_active(&c, 3);
    c.handle(InputEvent::KeyDown(Key::Home));
    assert_active(&c, 0);
}

#[test]
fn test_stop_policy_leaves_autoplay_off_after_navigation() {
    let config = CarouselConfig { manual_navigation: ManualNavigation::Stop, ..Default::default() };
    let mut c = CarouselController::new(MarkerView::new(3), VirtualScheduler::new(), 3, config).unwrap();

    c.handle(InputEvent::NextClicked);
    run_for(&mut c, Duration::from_secs(10));
    assert_active(&c, 1);
    assert_eq!(c.view().glyph(), PlayGlyph::Play);

    c.handle(InputEvent::PlayPauseClicked);
    run_for(&mut c, Duration::from_millis(2000));
    assert_active(&c, 2);
}

/// View that logs every call, to check the order the controller writes in.
#[derive(Default)]
struct CallLog {
    calls: Vec<String>,
}

impl SlideView for CallLog {
    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.calls.push(format!("slide {} {}", index, active));
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.calls.push(format!("indicator {} {}", index, active));
    }

    fn set_play_glyph(&mut self, glyph: PlayGlyph) {
        self.calls.push(format!("glyph {:?}", glyph));
    }
}

/// Scheduler that logs arm/cancel calls in order and never fires on its own.
#[derive(Default)]
struct RecordingScheduler {
    next: u64,
    calls: Vec<String>,
}

impl Scheduler for RecordingScheduler {
    fn arm_repeating(&mut self, _period_ms: u64) -> TimerHandle {
        self.next += 1;
        self.calls.push(format!("arm {}", self.next));
        TimerHandle::new(self.next)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.calls.push(format!("cancel {}", handle.raw()));
    }
}

#[test]
fn test_goto_deactivates_before_activating() {
    let mut view = CallLog::default();
    let mut scheduler = RecordingScheduler::default();
    {
        let mut c = CarouselController::new(&mut view, &mut scheduler, 3, CarouselConfig::default()).unwrap();
        c.goto(2);
    }

    let tail: Vec<&str> = view.calls.iter().rev().take(4).rev().map(|s| s.as_str()).collect();
    assert_eq!(tail, vec!["slide 0 false", "indicator 0 false", "slide 2 true", "indicator 2 true"]);
}

#[test]
fn test_cancel_always_precedes_rearm() {
    let mut view = CallLog::default();
    let mut scheduler = RecordingScheduler::default();
    {
        let mut c = CarouselController::new(&mut view, &mut scheduler, 3, CarouselConfig::default()).unwrap();
        c.handle(InputEvent::NextClicked);
        c.handle(InputEvent::IndicatorClicked(0));
        c.handle(InputEvent::KeyDown(Key::ArrowLeft));
        c.handle(InputEvent::PointerDown { x: 300.0 });
        c.handle(InputEvent::PointerUp { x: 150.0 });
        c.handle(InputEvent::PlayPauseClicked);
    }

    assert_eq!(
        scheduler.calls,
        vec![
            "arm 1", "cancel 1", "arm 2", "cancel 2", "arm 3", "cancel 3", "arm 4", "cancel 4", "arm 5",
            "cancel 5",
        ]
    );

    // Every arm happens with no other timer outstanding
    let mut live: Option<&str> = None;
    for call in &scheduler.calls {
        match call.split_once(' ') {
            Some(("arm", id)) => {
                assert_eq!(live, None, "armed {} while {:?} was live", id, live);
                live = Some(id);
            }
            Some(("cancel", id)) => {
                assert_eq!(live, Some(id));
                live = None;
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn test_empty_carousel_is_a_configuration_error() {
    let result = CarouselController::new(MarkerView::new(0), VirtualScheduler::new(), 0, CarouselConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_config_file_round_trip() -> Result<()> {
    let path = env::temp_dir().join("rcarousel_test_config.json");
    let _ = fs::remove_file(&path);

    let config = CarouselConfig {
        timer_interval_ms: 3500,
        swipe_threshold_px: 60.0,
        autoplay: false,
        manual_navigation: ManualNavigation::KeepState,
        ..Default::default()
    };
    config.save(&path)?;

    let loaded = CarouselConfig::load(&path)?;
    assert_eq!(loaded, config);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_deck_written_then_loaded_drives_carousel() -> Result<()> {
    let path = env::temp_dir().join("rcarousel_test_deck.json");
    let path_str = path.to_str().unwrap();
    let _ = fs::remove_file(&path);

    let generated = Deck::generate("Trip", 4, 99);
    let mut writer = DeckWriter::new(path_str, &generated.name);
    writer.write_deck(&generated);
    assert_eq!(writer.finish()?, 4);

    let deck = Deck::load(&path)?;
    assert_eq!(deck, generated);

    let mut c = carousel(deck.len());
    c.handle(InputEvent::PrevClicked);
    assert_active(&c, 3);
    assert!(deck.get(c.current_slide()).is_some());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_empty_deck_is_not_written() {
    let path = env::temp_dir().join("rcarousel_test_empty_deck.json");
    let writer = DeckWriter::new(path.to_str().unwrap(), "Empty");
    assert!(writer.finish().is_err());
    assert!(!path.exists());
}
