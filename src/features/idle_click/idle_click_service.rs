use anyhow::Result;
use crate::domain::config::ClickerConfig;
use crate::domain::models::{Action, ClickTargets, Side, TargetPoint};
use crate::features::shutdown::shutdown_signal::ShutdownSignal;
use crate::input::InputHandlerTrait;

const STOPPED_MESSAGE: &str = "Idle clicker stopped manually.";

/// Service that alternates clicks between both halves of the screen until interrupted
pub struct IdleClickService<H: InputHandlerTrait> {
    handler: H,
    shutdown: ShutdownSignal,
    targets: ClickTargets,
}

impl<H: InputHandlerTrait> IdleClickService<H> {
    /// Reads the screen size once and fixes both click targets for the process lifetime
    pub fn new(handler: H, shutdown: ShutdownSignal) -> Result<Self> {
        let dims = handler.screen_size()?;
        let targets = ClickTargets::from_dimensions(dims);
        log::info!(
            "Screen is {}x{}, targets {} and {}",
            dims.width(),
            dims.height(),
            targets.left,
            targets.right
        );

        Ok(Self {
            handler,
            shutdown,
            targets,
        })
    }

    /// Runs the click cycle until the shutdown signal fires
    pub async fn run(&self) -> Result<()> {
        println!("{}", startup_message(&self.targets));

        let cycle = Action::cycle(&self.targets);
        for action in cycle.iter().cycle() {
            if self.shutdown.is_triggered() || !self.perform(action).await? {
                break;
            }
        }

        println!("{}", STOPPED_MESSAGE);
        Ok(())
    }

    /// Returns false when a pause was interrupted
    async fn perform(&self, action: &Action) -> Result<bool> {
        match *action {
            Action::MouseMove { side, point, duration } => {
                log::debug!("Moving {} to {} over {:?}", side, point, duration);
                self.handler.move_smoothly(point, duration).await?;
            }
            Action::MouseClick { side, point } => {
                self.handler.mouse_click().await?;
                println!("{}", click_message(side, point));
            }
            Action::Pause { duration } => return Ok(self.shutdown.sleep(duration).await),
        }
        Ok(true)
    }
}

fn startup_message(targets: &ClickTargets) -> String {
    format!(
        "Starting idle clicker... clicking at {} then {} every {} seconds.",
        targets.left,
        targets.right,
        ClickerConfig::CYCLE_INTERVAL_SECS
    )
}

fn click_message(side: Side, point: TargetPoint) -> String {
    format!("Clicked {} at {}", side, point)
}
