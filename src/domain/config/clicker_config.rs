use std::time::Duration;

pub struct ClickerConfig;

impl ClickerConfig {
    pub const CYCLE_INTERVAL_SECS: u64 = 60;

    // Pointer pacing
    pub const MOVE_DURATION: Duration = Duration::from_millis(200);
    pub const BETWEEN_CLICKS_PAUSE: Duration = Duration::from_millis(500);
    pub const CYCLE_INTERVAL: Duration = Duration::from_secs(Self::CYCLE_INTERVAL_SECS);

    // Input simulation delays
    pub const MOUSE_CLICK_DELAY_MS: u64 = 10;
    pub const TWEEN_MIN_STEP: Duration = Duration::from_millis(50);
    pub const TWEEN_MIN_DURATION: Duration = Duration::from_millis(100);
}
