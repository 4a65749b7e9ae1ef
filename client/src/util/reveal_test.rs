use super::*;

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Observe(&'static str),
    Unobserve(&'static str),
}

#[derive(Clone, Default)]
struct RecordingWatcher {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingWatcher {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ViewportWatcher for RecordingWatcher {
    type Target = &'static str;

    fn observe(&self, target: &Self::Target) {
        self.calls.borrow_mut().push(Call::Observe(target));
    }

    fn unobserve(&self, target: &Self::Target) {
        self.calls.borrow_mut().push(Call::Unobserve(target));
    }
}

fn sample(target: &'static str, is_intersecting: bool, ratio: f64) -> IntersectionSample<&'static str> {
    IntersectionSample { target, is_intersecting, ratio }
}

fn attach(watcher: &RecordingWatcher, target: &'static str) -> RevealController<RecordingWatcher> {
    RevealController::attach(watcher.clone(), target, RevealOptions::default())
}

// =============================================================
// RevealState
// =============================================================

#[test]
fn state_defaults_to_hidden() {
    assert_eq!(RevealState::default(), RevealState::Hidden);
    assert!(!RevealState::Hidden.is_revealed());
    assert!(RevealState::Revealed.is_revealed());
}

#[test]
fn hidden_style_is_transparent_and_shifted_left() {
    assert_eq!(RevealState::Hidden.opacity(), 0);
    assert_eq!(RevealState::Hidden.offset_px(), -20);
    assert_eq!(
        RevealState::Hidden.style(),
        "opacity: 0; transform: translateX(-20px); transition: opacity 0.6s ease, transform 0.6s ease;"
    );
}

#[test]
fn revealed_style_is_opaque_and_in_place() {
    assert_eq!(RevealState::Revealed.opacity(), 1);
    assert_eq!(RevealState::Revealed.offset_px(), 0);
    assert_eq!(
        RevealState::Revealed.style(),
        "opacity: 1; transform: translateX(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    );
}

#[test]
fn default_options_use_ten_percent_and_zero_margin() {
    let options = RevealOptions::default();
    assert!((options.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(options.root_margin, "0px");
}

// =============================================================
// meets_threshold
// =============================================================

#[test]
fn meets_threshold_requires_intersection_and_ratio() {
    assert!(meets_threshold(true, 0.1, 0.1));
    assert!(meets_threshold(true, 1.0, 0.1));
    assert!(!meets_threshold(true, 0.05, 0.1));
    assert!(!meets_threshold(false, 0.5, 0.1));
}

#[test]
fn meets_threshold_tolerates_rounding_at_crossing() {
    assert!(meets_threshold(true, 0.099_999_9, 0.1));
}

// =============================================================
// RevealController
// =============================================================

#[test]
fn attach_registers_target_once_and_starts_hidden() {
    let watcher = RecordingWatcher::default();
    let controller = attach(&watcher, "card-0");
    assert_eq!(controller.state(), RevealState::Hidden);
    assert!(controller.is_observing());
    assert_eq!(*controller.target(), "card-0");
    assert_eq!(watcher.calls(), vec![Call::Observe("card-0")]);
}

#[test]
fn non_intersecting_sample_keeps_card_hidden() {
    let watcher = RecordingWatcher::default();
    let mut controller = attach(&watcher, "card-0");
    assert!(!controller.handle(&sample("card-0", false, 0.0)));
    assert_eq!(controller.state(), RevealState::Hidden);
    assert!(controller.is_observing());
}

#[test]
fn sample_below_threshold_keeps_card_hidden() {
    let watcher = RecordingWatcher::default();
    let mut controller = attach(&watcher, "card-0");
    assert!(!controller.handle(&sample("card-0", true, 0.02)));
    assert_eq!(controller.state(), RevealState::Hidden);
}

#[test]
fn qualifying_sample_reveals_and_releases_observation() {
    let watcher = RecordingWatcher::default();
    let mut controller = attach(&watcher, "card-0");
    assert!(controller.handle(&sample("card-0", true, 0.25)));
    assert_eq!(controller.state(), RevealState::Revealed);
    assert!(!controller.is_observing());
    assert_eq!(watcher.calls(), vec![Call::Observe("card-0"), Call::Unobserve("card-0")]);
}

#[test]
fn reveal_happens_exactly_once_and_never_reverts() {
    let watcher = RecordingWatcher::default();
    let mut controller = attach(&watcher, "card-0");
    assert!(controller.handle(&sample("card-0", true, 0.5)));
    assert!(!controller.handle(&sample("card-0", true, 0.9)));
    assert!(!controller.handle(&sample("card-0", false, 0.0)));
    assert_eq!(controller.state(), RevealState::Revealed);
}

#[test]
fn samples_for_other_targets_are_ignored() {
    let watcher = RecordingWatcher::default();
    let mut controller = attach(&watcher, "card-0");
    assert!(!controller.handle(&sample("card-1", true, 1.0)));
    assert_eq!(controller.state(), RevealState::Hidden);
    assert!(controller.is_observing());
}

#[test]
fn drop_before_any_intersection_unobserves_captured_target() {
    let watcher = RecordingWatcher::default();
    let controller = attach(&watcher, "card-0");
    drop(controller);
    assert_eq!(watcher.calls(), vec![Call::Observe("card-0"), Call::Unobserve("card-0")]);
}

#[test]
fn drop_after_reveal_does_not_unobserve_twice() {
    let watcher = RecordingWatcher::default();
    let mut controller = attach(&watcher, "card-0");
    controller.handle(&sample("card-0", true, 1.0));
    drop(controller);
    let unobserves = watcher.calls().into_iter().filter(|c| matches!(c, Call::Unobserve(_))).count();
    assert_eq!(unobserves, 1);
}

#[test]
fn cards_keep_independent_state() {
    let watcher = RecordingWatcher::default();
    let mut first = attach(&watcher, "card-0");
    let mut second = attach(&watcher, "card-1");
    assert!(second.handle(&sample("card-1", true, 0.3)));
    assert_eq!(first.state(), RevealState::Hidden);
    assert!(!first.handle(&sample("card-1", true, 0.3)));
    assert_eq!(second.state(), RevealState::Revealed);
}

#[test]
fn custom_threshold_is_respected() {
    let watcher = RecordingWatcher::default();
    let mut controller =
        RevealController::attach(watcher.clone(), "card-0", RevealOptions { threshold: 0.5, root_margin: "0px" });
    assert!(!controller.handle(&sample("card-0", true, 0.3)));
    assert!(controller.handle(&sample("card-0", true, 0.5)));
}
