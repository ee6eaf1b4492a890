#[cfg(test)]
mod tests {
    use shared::debounce::{self, Debouncer};
    use std::time::Duration;
    use tokio::time::{self, Instant};

    const RESIZE_DELAY: Duration = Duration::from_millis(250);

    #[tokio::test(start_paused = true)]
    async fn test_resize_burst_recomputes_once_with_last_width() {
        let mut debounce = Debouncer::new(RESIZE_DELAY);
        let mut timers = Vec::new();

        // Three resize events, each 100ms apart
        for width in [900_u32, 1000, 1100] {
            let ticket = debounce.schedule(width);
            timers.push(tokio::spawn(debounce::elapsed(debounce.delay(), ticket)));
            time::advance(Duration::from_millis(100)).await;
        }

        let mut recomputed = Vec::new();
        for timer in timers {
            let ticket = timer.await.expect("timer task should not panic");
            if let Some(width) = debounce.settle(ticket) {
                recomputed.push(width);
            }
        }

        assert_eq!(recomputed, vec![1100]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_recompute() {
        let mut debounce = Debouncer::new(RESIZE_DELAY);

        let first = debounce.schedule(800_u32);
        let first = debounce::elapsed(debounce.delay(), first).await;
        assert_eq!(debounce.settle(first), Some(800));

        let second = debounce.schedule(1200_u32);
        let second = debounce::elapsed(debounce.delay(), second).await;
        assert_eq!(debounce.settle(second), Some(1200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_waits_full_delay() {
        let mut debounce = Debouncer::new(RESIZE_DELAY);
        let start = Instant::now();

        let ticket = debounce.schedule(640_u32);
        let ticket = debounce::elapsed(debounce.delay(), ticket).await;

        assert!(start.elapsed() >= RESIZE_DELAY);
        assert_eq!(debounce.settle(ticket), Some(640));
    }
}
