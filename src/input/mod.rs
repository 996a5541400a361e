#[cfg(target_os = "linux")]
mod unix;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(windows)]
mod windows;
mod error;

use std::time::Duration;

use anyhow::Result;
use crate::domain::models::{ScreenDimensions, TargetPoint};
use crate::utils::tween_path;

pub use error::InputError;

#[cfg(target_os = "linux")]
use unix::InputHandlerImpl;

#[cfg(target_os = "macos")]
use macos::InputHandlerImpl;

#[cfg(windows)]
use windows::InputHandlerImpl;

/// Drives the real pointer through the platform-specific implementation
pub struct InputHandler {
    inner: InputHandlerImpl,
}

impl InputHandler {
    /// Creates a new InputHandler with platform-specific implementation
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: InputHandlerImpl::new()?,
        })
    }
}

#[async_trait::async_trait]
impl InputHandlerTrait for InputHandler {
    fn screen_size(&self) -> Result<ScreenDimensions> {
        self.inner.screen_size()
    }

    fn cursor_position(&self) -> Option<TargetPoint> {
        self.inner.cursor_position()
    }

    async fn mouse_move_to(&self, point: TargetPoint) -> Result<()> {
        self.inner.mouse_move_to(point).await
    }

    async fn mouse_click(&self) -> Result<()> {
        self.inner.mouse_click().await
    }
}

#[async_trait::async_trait]
pub trait InputHandlerTrait: Send + Sync {
    fn screen_size(&self) -> Result<ScreenDimensions>;
    fn cursor_position(&self) -> Option<TargetPoint>;
    async fn mouse_move_to(&self, point: TargetPoint) -> Result<()>;
    /// Presses and releases the primary button at the current position
    async fn mouse_click(&self) -> Result<()>;

    /// Moves to `point` along a linear path spread over `duration`.
    /// Jumps straight there when the current position is unknown.
    async fn move_smoothly(&self, point: TargetPoint, duration: Duration) -> Result<()> {
        let Some(start) = self.cursor_position() else {
            log::debug!("Cursor position unknown, jumping to {}", point);
            return self.mouse_move_to(point).await;
        };

        for (waypoint, pause) in tween_path(start, point, duration) {
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            self.mouse_move_to(waypoint).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Recorded {
        Move(TargetPoint),
        Click(TargetPoint),
    }

    /// In-memory stand-in for the platform layer
    pub(crate) struct FakeInput {
        pub(crate) screen: (u32, u32),
        pub(crate) track_cursor: bool,
        pub(crate) position: Mutex<Option<TargetPoint>>,
        pub(crate) events: Mutex<Vec<(Instant, Recorded)>>,
        pub(crate) fail_clicks: bool,
    }

    impl FakeInput {
        pub(crate) fn new(width: u32, height: u32) -> Self {
            Self {
                screen: (width, height),
                track_cursor: false,
                position: Mutex::new(None),
                events: Mutex::new(Vec::new()),
                fail_clicks: false,
            }
        }

        pub(crate) fn recorded(&self) -> Vec<Recorded> {
            self.events.lock().unwrap().iter().map(|(_, e)| *e).collect()
        }
    }

    #[async_trait::async_trait]
    impl InputHandlerTrait for FakeInput {
        fn screen_size(&self) -> Result<ScreenDimensions> {
            Ok(ScreenDimensions::new(self.screen.0, self.screen.1)?)
        }

        fn cursor_position(&self) -> Option<TargetPoint> {
            if self.track_cursor {
                *self.position.lock().unwrap()
            } else {
                None
            }
        }

        async fn mouse_move_to(&self, point: TargetPoint) -> Result<()> {
            *self.position.lock().unwrap() = Some(point);
            self.events.lock().unwrap().push((Instant::now(), Recorded::Move(point)));
            Ok(())
        }

        async fn mouse_click(&self) -> Result<()> {
            if self.fail_clicks {
                return Err(InputError::Simulate("ButtonPress(Left)".to_string()).into());
            }
            let point = self.position.lock().unwrap().unwrap_or(TargetPoint::new(0, 0));
            self.events.lock().unwrap().push((Instant::now(), Recorded::Click(point)));
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_move_smoothly_walks_tween_path() {
        let mut fake = FakeInput::new(1920, 1080);
        fake.track_cursor = true;
        *fake.position.get_mut().unwrap() = Some(TargetPoint::new(0, 0));

        let start = Instant::now();
        fake.move_smoothly(TargetPoint::new(480, 540), Duration::from_millis(200))
            .await
            .unwrap();

        let events = fake.events.lock().unwrap().clone();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].0 - start, Duration::from_millis(50));
        assert_eq!(events[4].0 - start, Duration::from_millis(250));
        assert_eq!(events[4].1, Recorded::Move(TargetPoint::new(480, 540)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_move_smoothly_jumps_without_cursor_position() {
        let fake = FakeInput::new(1920, 1080);

        let start = Instant::now();
        fake.move_smoothly(TargetPoint::new(480, 540), Duration::from_millis(200))
            .await
            .unwrap();

        let events = fake.events.lock().unwrap().clone();
        assert_eq!(events, vec![(start, Recorded::Move(TargetPoint::new(480, 540)))]);
    }
}
