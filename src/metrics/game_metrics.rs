use std::time::{Duration, Instant};

/// Session statistics shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub rounds_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            rounds_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Track the longest snake seen so far
    pub fn observe_length(&mut self, length: usize) {
        self.best_length = self.best_length.max(length);
    }

    fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, final_length: usize) {
        self.rounds_played += 1;
        self.observe_length(final_length);
        self.on_round_start();
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_length_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_round_over(10);
        assert_eq!(metrics.best_length, 10);
        assert_eq!(metrics.rounds_played, 1);

        metrics.on_round_over(5);
        assert_eq!(metrics.best_length, 10); // Should not decrease
        assert_eq!(metrics.rounds_played, 2);

        metrics.observe_length(15);
        assert_eq!(metrics.best_length, 15);
        assert_eq!(metrics.rounds_played, 2);
    }

    #[test]
    fn test_round_over_restarts_clock() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_over(3);
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
