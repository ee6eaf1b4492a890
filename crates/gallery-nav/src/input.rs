//! Lightbox input handling: commands and swipe detection

use gallery_types::Direction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightboxCommand {
    Close,
    Step(Direction),
}

impl LightboxCommand {
    pub const PREVIOUS: Self = Self::Step(Direction::Previous);
    pub const NEXT: Self = Self::Step(Direction::Next);
}

/// Turns a touch press/release pair into a navigation direction.
///
/// A swipe navigates only when the horizontal travel strictly exceeds the
/// threshold. Swiping left moves to the next image, swiping right to the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn finish(&mut self, end_x: f32) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        let diff = start_x - end_x;

        if diff.abs() <= self.threshold {
            return None;
        }

        Some(if diff > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        })
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_goes_next() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.finish(200.0), Some(Direction::Next));
    }

    #[test]
    fn test_swipe_right_goes_previous() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(220.0), Some(Direction::Previous));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut swipe = SwipeTracker::default();

        swipe.begin(200.0);
        assert_eq!(swipe.finish(149.0), Some(Direction::Next)); // 51px

        swipe.begin(200.0);
        assert_eq!(swipe.finish(150.0), None); // exactly 50px

        swipe.begin(200.0);
        assert_eq!(swipe.finish(151.0), None); // 49px
    }

    #[test]
    fn test_finish_without_begin() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.finish(0.0), None);

        swipe.begin(0.0);
        swipe.cancel();
        assert_eq!(swipe.finish(500.0), None);
    }

    #[test]
    fn test_release_consumes_start() {
        let mut swipe = SwipeTracker::new(10.0);
        swipe.begin(100.0);
        assert!(swipe.finish(0.0).is_some());
        assert_eq!(swipe.finish(0.0), None);
    }
}
