pub mod input;
pub mod transition;

pub use gallery_types::Direction;
pub use input::{LightboxCommand, SwipeTracker};
pub use transition::Fade;

use shared::Ticket;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("Index {index} is out of range for {count} images")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Open/closed state of the lightbox over `count` images.
///
/// `current_index` is always in `[0, count)` while open; stepping wraps
/// instead of running off either end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    count: usize,
    current_index: usize,
    is_open: bool,
}

impl LightboxState {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current_index: 0,
            is_open: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current index, only while open.
    pub fn current(&self) -> Option<usize> {
        self.is_open.then_some(self.current_index)
    }

    pub fn open(&mut self, index: usize) -> Result<usize, NavError> {
        if index >= self.count {
            return Err(NavError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        self.current_index = index;
        self.is_open = true;
        Ok(index)
    }

    /// Returns whether the lightbox was open. Closing twice is harmless.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }

    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        if !self.is_open || self.count == 0 {
            return None;
        }

        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % self.count,
            Direction::Previous => (self.current_index + self.count - 1) % self.count,
        };
        Some(self.current_index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step(Direction::Next)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.step(Direction::Previous)
    }

    /// One-based position and total, for the "3 / 9" counter.
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.current().map(|idx| (idx + 1, self.count))
    }

    /// Indices of the previous and next images around the current one.
    pub fn neighbors(&self) -> Option<(usize, usize)> {
        let current = self.current()?;
        Some((
            (current + self.count - 1) % self.count,
            (current + 1) % self.count,
        ))
    }
}

/// What the view needs after the lightbox moved to a new image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub index: usize,
    pub neighbors: (usize, usize),
    /// Present when the image faded out and must be faded back in once the
    /// ticket's timer has elapsed.
    pub fade_in: Option<Ticket>,
}

/// Lightbox state plus the fade transition that accompanies navigation.
#[derive(Debug, Clone)]
pub struct Lightbox {
    state: LightboxState,
    fade: Fade,
}

impl Lightbox {
    pub fn new(count: usize, fade_delay: Duration) -> Self {
        Self {
            state: LightboxState::new(count),
            fade: Fade::new(fade_delay),
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn current(&self) -> Option<usize> {
        self.state.current()
    }

    pub fn fade_delay(&self) -> Duration {
        self.fade.delay()
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn open(&mut self, index: usize) -> Result<Navigation, NavError> {
        let index = self.state.open(index)?;
        self.fade.reset();

        tracing::debug!("lightbox opened at {index}");

        Ok(self.navigation(index, None))
    }

    /// Fade out, move one image in `direction`, and hand back the ticket that
    /// fades the new image in.
    pub fn navigate(&mut self, direction: Direction) -> Option<Navigation> {
        if !self.state.is_open() {
            return None;
        }

        let ticket = self.fade.fade_out();
        let index = self.state.step(direction)?;

        Some(self.navigation(index, Some(ticket)))
    }

    pub fn finish_fade(&mut self, ticket: Ticket) -> bool {
        self.fade.fade_in(ticket)
    }

    pub fn close(&mut self) -> bool {
        self.fade.reset();
        self.state.close()
    }

    fn navigation(&self, index: usize, fade_in: Option<Ticket>) -> Navigation {
        Navigation {
            index,
            neighbors: self.state.neighbors().unwrap_or((index, index)),
            fade_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = LightboxState::new(9);
        assert!(!state.is_open());
        assert_eq!(state.current(), None);
        assert_eq!(state.counter(), None);
    }

    #[test]
    fn test_open_rejects_out_of_range() {
        let mut state = LightboxState::new(3);
        assert_eq!(
            state.open(3),
            Err(NavError::IndexOutOfRange { index: 3, count: 3 })
        );
        assert!(!state.is_open());

        let mut empty = LightboxState::new(0);
        assert!(empty.open(0).is_err());
    }

    #[test]
    fn test_step_when_closed_is_noop() {
        let mut state = LightboxState::new(4);
        assert_eq!(state.next(), None);
        assert_eq!(state.previous(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut state = LightboxState::new(9);
        state.open(8).unwrap();
        assert_eq!(state.next(), Some(0));
        assert_eq!(state.previous(), Some(8));

        state.open(0).unwrap();
        assert_eq!(state.previous(), Some(8));
    }

    #[test]
    fn test_counter_and_neighbors() {
        let mut state = LightboxState::new(9);
        state.open(0).unwrap();
        assert_eq!(state.counter(), Some((1, 9)));
        assert_eq!(state.neighbors(), Some((8, 1)));

        let mut single = LightboxState::new(1);
        single.open(0).unwrap();
        assert_eq!(single.next(), Some(0));
        assert_eq!(single.neighbors(), Some((0, 0)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = LightboxState::new(2);
        state.open(1).unwrap();
        assert!(state.close());
        assert!(!state.close());
        assert!(!state.is_open());
    }

    #[test]
    fn test_navigate_fades_out_then_in() {
        let mut lightbox = Lightbox::new(5, Duration::from_millis(150));
        let opened = lightbox.open(2).unwrap();
        assert_eq!(opened.fade_in, None);
        assert_eq!(lightbox.opacity(), 1.0);

        let nav = lightbox.navigate(Direction::Next).unwrap();
        assert_eq!(nav.index, 3);
        assert_eq!(nav.neighbors, (2, 4));
        assert_eq!(lightbox.opacity(), 0.0);

        let ticket = nav.fade_in.unwrap();
        assert!(lightbox.finish_fade(ticket));
        assert_eq!(lightbox.opacity(), 1.0);
    }

    #[test]
    fn test_rapid_navigation_only_last_fade_completes() {
        let mut lightbox = Lightbox::new(5, Duration::from_millis(150));
        lightbox.open(0).unwrap();

        let first = lightbox.navigate(Direction::Next).unwrap().fade_in.unwrap();
        let second = lightbox.navigate(Direction::Next).unwrap().fade_in.unwrap();

        assert!(!lightbox.finish_fade(first));
        assert_eq!(lightbox.opacity(), 0.0);
        assert!(lightbox.finish_fade(second));
        assert_eq!(lightbox.opacity(), 1.0);
    }

    #[test]
    fn test_navigate_closed_does_nothing() {
        let mut lightbox = Lightbox::new(5, Duration::from_millis(150));
        assert_eq!(lightbox.navigate(Direction::Next), None);
        assert_eq!(lightbox.opacity(), 1.0);
    }

    #[test]
    fn test_close_cancels_pending_fade() {
        let mut lightbox = Lightbox::new(5, Duration::from_millis(150));
        lightbox.open(0).unwrap();
        let ticket = lightbox.navigate(Direction::Previous).unwrap().fade_in.unwrap();

        assert!(lightbox.close());
        assert!(!lightbox.finish_fade(ticket));
        assert_eq!(lightbox.opacity(), 1.0);
    }
}
