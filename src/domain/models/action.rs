use std::time::Duration;

use crate::domain::config::ClickerConfig;
use crate::domain::models::{ClickTargets, Side, TargetPoint};

/// One step of the idle-click cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MouseMove { side: Side, point: TargetPoint, duration: Duration },
    MouseClick { side: Side, point: TargetPoint },
    Pause { duration: Duration },
}

impl Action {
    /// Builds the repeating sequence: left move, click, short pause, right move, click, long pause
    pub fn cycle(targets: &ClickTargets) -> Vec<Action> {
        let mut actions = Vec::with_capacity(6);
        for (side, pause) in [
            (Side::Left, ClickerConfig::BETWEEN_CLICKS_PAUSE),
            (Side::Right, ClickerConfig::CYCLE_INTERVAL),
        ] {
            let point = targets.get(side);
            actions.push(Action::MouseMove {
                side,
                point,
                duration: ClickerConfig::MOVE_DURATION,
            });
            actions.push(Action::MouseClick { side, point });
            actions.push(Action::Pause { duration: pause });
        }
        actions
    }
}
