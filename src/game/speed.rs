use std::time::Duration;

/// Loop speed in ticks per second, kept within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate(u32);

impl TickRate {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 60;
    pub const STEP: u32 = 5;
    pub const DEFAULT: u32 = 20;

    pub fn new(tps: u32) -> Self {
        Self(tps.clamp(Self::MIN, Self::MAX))
    }

    pub fn tps(&self) -> u32 {
        self.0
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.0))
    }

    pub fn faster(&self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn slower(&self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
