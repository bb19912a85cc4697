//! Held-button sampling.
//!
//! The pad has left, right and drop buttons. Pressing left and right together
//! means rotate. Shifts and rotations fire once per press; a held drop button
//! asks for a soft drop on every tick.

use crate::types::Intent;

/// One sample of the physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub drop: bool,
}

impl Buttons {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn both() -> Self {
        Self {
            left: true,
            right: true,
            drop: false,
        }
    }

    pub fn drop() -> Self {
        Self {
            drop: true,
            ..Self::default()
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.drop
    }
}

/// Which directional gesture is currently latched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Idle,
    Left,
    Right,
    Rotate,
}

/// Edge detector from button samples to intents.
///
/// Precedence: rotate (both directions held), then a single shift, then soft
/// drop. Moving from a single button to both counts as a new rotate press.
#[derive(Debug, Clone)]
pub struct IntentLatch {
    gesture: Gesture,
}

impl IntentLatch {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    /// Resolve one sample to at most one intent.
    pub fn sample(&mut self, buttons: Buttons) -> Intent {
        if !buttons.any() {
            self.gesture = Gesture::Idle;
            return Intent::None;
        }

        let gesture = match (buttons.left, buttons.right) {
            (true, true) => Gesture::Rotate,
            (true, false) => Gesture::Left,
            (false, true) => Gesture::Right,
            (false, false) => Gesture::Idle,
        };

        // Letting go of one button after a rotate must not read as a shift press.
        let fresh = gesture != self.gesture
            && !(self.gesture == Gesture::Rotate && gesture != Gesture::Idle);
        self.gesture = gesture;

        match gesture {
            Gesture::Rotate if fresh => Intent::RotateCcw,
            Gesture::Left if fresh => Intent::ShiftLeft,
            Gesture::Right if fresh => Intent::ShiftRight,
            _ if buttons.drop => Intent::SoftDrop,
            _ => Intent::None,
        }
    }

    /// Forget the latched gesture, e.g. after a reset.
    pub fn clear(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

impl Default for IntentLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_press_shifts_once() {
        let mut latch = IntentLatch::new();
        assert_eq!(latch.sample(Buttons::left()), Intent::ShiftLeft);
        assert_eq!(latch.sample(Buttons::left()), Intent::None);
        assert_eq!(latch.sample(Buttons::default()), Intent::None);
        assert_eq!(latch.sample(Buttons::left()), Intent::ShiftLeft);
    }

    #[test]
    fn test_both_buttons_rotate_over_shift() {
        let mut latch = IntentLatch::new();
        assert_eq!(latch.sample(Buttons::both()), Intent::RotateCcw);
        assert_eq!(latch.sample(Buttons::both()), Intent::None);
    }

    #[test]
    fn test_second_button_turns_shift_into_rotate() {
        let mut latch = IntentLatch::new();
        assert_eq!(latch.sample(Buttons::right()), Intent::ShiftRight);
        assert_eq!(latch.sample(Buttons::both()), Intent::RotateCcw);
    }

    #[test]
    fn test_partial_release_after_rotate_does_not_shift() {
        let mut latch = IntentLatch::new();
        assert_eq!(latch.sample(Buttons::both()), Intent::RotateCcw);
        assert_eq!(latch.sample(Buttons::left()), Intent::None);
        assert_eq!(latch.sample(Buttons::default()), Intent::None);
        assert_eq!(latch.sample(Buttons::left()), Intent::ShiftLeft);
    }

    #[test]
    fn test_held_drop_repeats() {
        let mut latch = IntentLatch::new();
        for _ in 0..5 {
            assert_eq!(latch.sample(Buttons::drop()), Intent::SoftDrop);
        }
    }

    #[test]
    fn test_shift_beats_drop_on_press_only() {
        let mut latch = IntentLatch::new();
        let held = Buttons {
            left: true,
            drop: true,
            ..Buttons::default()
        };
        assert_eq!(latch.sample(held), Intent::ShiftLeft);
        assert_eq!(latch.sample(held), Intent::SoftDrop);
    }

    #[test]
    fn test_clear_rearms() {
        let mut latch = IntentLatch::new();
        latch.sample(Buttons::right());
        latch.clear();
        assert_eq!(latch.sample(Buttons::right()), Intent::ShiftRight);
    }
}
