use shared::{Debouncer, Ticket};
use std::time::Duration;

/// Opacity of the lightbox image across a fade-out/fade-in pair.
#[derive(Debug, Clone)]
pub struct Fade {
    timer: Debouncer<()>,
    visible: bool,
}

impl Fade {
    pub fn new(delay: Duration) -> Self {
        Self {
            timer: Debouncer::new(delay),
            visible: true,
        }
    }

    pub fn delay(&self) -> Duration {
        self.timer.delay()
    }

    pub fn opacity(&self) -> f32 {
        if self.visible { 1.0 } else { 0.0 }
    }

    /// Hide the image. A newer fade-out supersedes any pending fade-in.
    pub fn fade_out(&mut self) -> Ticket {
        self.visible = false;
        self.timer.schedule(())
    }

    pub fn fade_in(&mut self, ticket: Ticket) -> bool {
        if self.timer.settle(ticket).is_some() {
            self.visible = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.timer.cancel();
        self.visible = true;
    }
}
