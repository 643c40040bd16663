//! Reveal-on-scroll state machine.
//!
//! A section starts `Hidden`. The first time enough of it is on screen it
//! moves to `Revealing` and its items are shown one by one on a fixed stagger.
//! `Revealed` is terminal: scrolling away does not hide anything again.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing { shown: usize, total: usize },
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// The visibility threshold was crossed; `items` is how many children to show.
    ThresholdCrossed { items: usize },
    /// The stagger timer for the next item fired.
    ItemShown,
}

impl RevealState {
    pub fn transition(self, event: RevealEvent) -> Self {
        match (self, event) {
            (Self::Hidden, RevealEvent::ThresholdCrossed { items: 0 }) => Self::Revealed,
            (Self::Hidden, RevealEvent::ThresholdCrossed { items }) => Self::Revealing {
                shown: 0,
                total: items,
            },
            (Self::Revealing { shown, total }, RevealEvent::ItemShown) => {
                if shown + 1 >= total {
                    Self::Revealed
                } else {
                    Self::Revealing {
                        shown: shown + 1,
                        total,
                    }
                }
            }
            (state, _) => state,
        }
    }

    pub fn is_item_visible(&self, index: usize) -> bool {
        match self {
            Self::Hidden => false,
            Self::Revealing { shown, .. } => index < *shown,
            Self::Revealed => true,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the observed element (0.0..=1.0) that must be on screen.
    pub threshold: f64,
    /// Delay between consecutive items.
    pub stagger: Duration,
}

impl RevealConfig {
    pub const ABOUT: Self = Self::new(0.3, 300);
    pub const SKILLS: Self = Self::new(0.2, 200);
    pub const PROJECTS: Self = Self::new(0.1, 150);
    pub const PLAYGROUND: Self = Self::new(0.2, 0);
    pub const BLOG: Self = Self::new(0.1, 150);
    pub const CONTACT: Self = Self::new(0.2, 0);

    pub const fn new(threshold: f64, stagger_ms: u64) -> Self {
        Self {
            threshold,
            stagger: Duration::from_millis(stagger_ms),
        }
    }
}

/// Start delay of each item, relative to the threshold crossing.
pub fn stagger_delays(items: usize, step: Duration) -> Vec<Duration> {
    (0..items).map(|i| step * i as u32).collect()
}

/// Fraction of an element's height inside a viewport of `viewport_height`.
///
/// `top` is the element's top relative to the viewport. Elements with no
/// height are never considered visible.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: RevealState, events: &[RevealEvent]) -> RevealState {
        events.iter().fold(state, |s, e| s.transition(*e))
    }

    #[test]
    fn test_hidden_until_threshold() {
        let state = RevealState::Hidden;
        assert_eq!(state.transition(RevealEvent::ItemShown), RevealState::Hidden);
        assert!(!state.is_item_visible(0));
        assert!(state.is_armed());
    }

    #[test]
    fn test_items_revealed_in_index_order() {
        let mut state = RevealState::Hidden.transition(RevealEvent::ThresholdCrossed { items: 4 });
        assert_eq!(state, RevealState::Revealing { shown: 0, total: 4 });
        for step in 1..=4 {
            state = state.transition(RevealEvent::ItemShown);
            let visible = (0..4).filter(|i| state.is_item_visible(*i)).collect::<Vec<_>>();
            // visible items always form a prefix
            assert_eq!(visible, (0..step).collect::<Vec<_>>());
        }
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn test_recrossing_does_not_restart() {
        let midway = run(
            RevealState::Hidden,
            &[
                RevealEvent::ThresholdCrossed { items: 3 },
                RevealEvent::ItemShown,
            ],
        );
        assert_eq!(
            midway.transition(RevealEvent::ThresholdCrossed { items: 3 }),
            midway
        );

        let done = run(
            midway,
            &[RevealEvent::ItemShown, RevealEvent::ItemShown],
        );
        assert_eq!(done, RevealState::Revealed);
        assert_eq!(
            done.transition(RevealEvent::ThresholdCrossed { items: 3 }),
            RevealState::Revealed
        );
        assert_eq!(done.transition(RevealEvent::ItemShown), RevealState::Revealed);
        assert!(!done.is_armed());
    }

    #[test]
    fn test_empty_section_reveals_immediately() {
        assert_eq!(
            RevealState::Hidden.transition(RevealEvent::ThresholdCrossed { items: 0 }),
            RevealState::Revealed
        );
    }

    #[test]
    fn test_stagger_delays_increase() {
        let delays = stagger_delays(5, RevealConfig::ABOUT.stagger);
        assert_eq!(delays[0], Duration::ZERO);
        assert_eq!(delays[4], Duration::from_millis(1200));
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!(stagger_delays(0, Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn test_visible_fraction() {
        // fully inside
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
        // below the fold
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
        // scrolled past
        assert_eq!(visible_fraction(-300.0, 200.0, 800.0), 0.0);
        // top half cut off
        assert_eq!(visible_fraction(-100.0, 200.0, 800.0), 0.5);
        // taller than the viewport
        assert_eq!(visible_fraction(0.0, 1600.0, 800.0), 0.5);
        assert_eq!(visible_fraction(0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_thresholds_cross() {
        let config = RevealConfig::ABOUT;
        // 25% on screen is not enough for a 30% threshold
        assert!(visible_fraction(600.0, 800.0, 800.0) < config.threshold);
        assert!(visible_fraction(500.0, 800.0, 800.0) >= config.threshold);
    }
}
