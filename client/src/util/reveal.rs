//! Scroll-triggered reveal state machine for promo cards.
//!
//! DESIGN
//! ======
//! A card starts `Hidden` and becomes `Revealed` the first time its root
//! element intersects the viewport by at least `threshold` of its area.
//! `Revealed` is terminal. The viewport mechanism sits behind the
//! `ViewportWatcher` trait: the browser build plugs in an
//! `IntersectionObserver` wrapper (`util::viewport`), tests plug in a
//! recording mock.
//!
//! RESOURCE MODEL
//! ==============
//! `RevealController` is the scoped observation handle. `attach` registers
//! the target once; the target captured there is the only one ever passed to
//! `unobserve`. Observation is released at most once per controller, either
//! when the card reveals or when the controller is dropped on unmount.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of the card's area that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Viewport margin passed to the observer.
pub const REVEAL_ROOT_MARGIN: &str = "0px";
/// Horizontal offset of a hidden card, in CSS pixels.
pub const HIDDEN_OFFSET_PX: i32 = -20;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Ratios reported at the crossing can land marginally below the threshold.
const RATIO_TOLERANCE: f64 = 1e-6;

/// Visibility of one reveal card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    #[must_use]
    pub fn opacity(self) -> u8 {
        match self {
            Self::Hidden => 0,
            Self::Revealed => 1,
        }
    }

    #[must_use]
    pub fn offset_px(self) -> i32 {
        match self {
            Self::Hidden => HIDDEN_OFFSET_PX,
            Self::Revealed => 0,
        }
    }

    /// Inline style for the card root.
    #[must_use]
    pub fn style(self) -> String {
        let translate = match self.offset_px() {
            0 => "translateX(0)".to_owned(),
            px => format!("translateX({px}px)"),
        };
        format!(
            "opacity: {}; transform: {translate}; transition: {REVEAL_TRANSITION};",
            self.opacity()
        )
    }
}

/// Observer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN }
    }
}

/// One intersection notification for a watched element.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionSample<T> {
    pub target: T,
    pub is_intersecting: bool,
    /// Visible fraction of the target's area, `0.0..=1.0`.
    pub ratio: f64,
}

/// Subscribe/unsubscribe to enter-viewport notifications for an element.
pub trait ViewportWatcher {
    type Target: PartialEq;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
}

/// Whether a sample meets the reveal threshold.
#[must_use]
pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Scoped observation of one card: registered on `attach`, released on
/// reveal or drop.
pub struct RevealController<W: ViewportWatcher> {
    watcher: W,
    target: W::Target,
    threshold: f64,
    state: RevealState,
    observing: bool,
}

impl<W: ViewportWatcher> RevealController<W> {
    /// Register `target` with `watcher`. Called once per card mount.
    pub fn attach(watcher: W, target: W::Target, options: RevealOptions) -> Self {
        watcher.observe(&target);
        Self { watcher, target, threshold: options.threshold, state: RevealState::Hidden, observing: true }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    #[must_use]
    pub fn target(&self) -> &W::Target {
        &self.target
    }

    /// Apply one notification. Returns `true` only for the sample that
    /// performs the `Hidden -> Revealed` transition.
    pub fn handle(&mut self, sample: &IntersectionSample<W::Target>) -> bool {
        if self.state.is_revealed() || !self.observing {
            return false;
        }
        if sample.target != self.target {
            return false;
        }
        if !meets_threshold(sample.is_intersecting, sample.ratio, self.threshold) {
            return false;
        }
        self.state = RevealState::Revealed;
        self.release();
        true
    }

    fn release(&mut self) {
        if self.observing {
            self.watcher.unobserve(&self.target);
            self.observing = false;
        }
    }
}

impl<W: ViewportWatcher> Drop for RevealController<W> {
    fn drop(&mut self) {
        self.release();
    }
}
