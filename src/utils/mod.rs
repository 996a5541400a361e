use std::time::Duration;

use crate::domain::config::ClickerConfig;
use crate::domain::models::TargetPoint;

/// Splits an animated move into absolute waypoints, each preceded by a pause.
///
/// The path is linear. Short durations and zero-length moves collapse into a
/// single jump. Otherwise one step per pixel of the longer axis is used, unless
/// that would pause for less than `TWEEN_MIN_STEP`, in which case the step count
/// is reduced so every pause is at least that long. The last waypoint is always
/// the destination.
pub fn tween_path(from: TargetPoint, to: TargetPoint, duration: Duration) -> Vec<(TargetPoint, Duration)> {
    if duration <= ClickerConfig::TWEEN_MIN_DURATION || from == to {
        return vec![(to, Duration::ZERO)];
    }

    let dx = f64::from(to.x) - f64::from(from.x);
    let dy = f64::from(to.y) - f64::from(from.y);
    let distance = dx.abs().max(dy.abs()) as u32;

    let mut steps = distance.max(1);
    let mut pause = duration / steps;
    if pause < ClickerConfig::TWEEN_MIN_STEP {
        let by_step = duration.as_millis() / ClickerConfig::TWEEN_MIN_STEP.as_millis();
        steps = (by_step as u32).max(1);
        pause = duration / steps;
    }

    let mut path: Vec<(TargetPoint, Duration)> = (0..steps)
        .map(|n| {
            let t = f64::from(n) / f64::from(steps);
            let x = (f64::from(from.x) + dx * t).round() as u32;
            let y = (f64::from(from.y) + dy * t).round() as u32;
            (TargetPoint::new(x, y), pause)
        })
        .collect();
    path.push((to, pause));
    path
}
