use anyhow::Result;
use crate::input::{InputError, InputHandlerTrait};
use crate::domain::config::ClickerConfig;
use crate::domain::models::{ScreenDimensions, TargetPoint};
use rdev::{simulate, Button, EventType, SimulateError};
use std::time::Duration;

use x11::xlib;

pub struct InputHandlerImpl;

impl InputHandlerImpl {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Opens the default X display for the duration of `f`
    fn with_display<T>(f: impl FnOnce(*mut xlib::Display) -> T) -> Option<T> {
        unsafe {
            let display = xlib::XOpenDisplay(std::ptr::null());
            if display.is_null() {
                return None;
            }
            let result = f(display);
            xlib::XCloseDisplay(display);
            Some(result)
        }
    }
}

fn send_event(event_type: EventType) -> Result<()> {
    log::debug!("Simulating {:?}", event_type);
    match simulate(&event_type) {
        Ok(()) => Ok(()),
        Err(SimulateError) => Err(InputError::Simulate(format!("{:?}", event_type)).into()),
    }
}

#[async_trait::async_trait]
impl InputHandlerTrait for InputHandlerImpl {
    fn screen_size(&self) -> Result<ScreenDimensions> {
        let (width, height) = Self::with_display(|display| unsafe {
            let screen = xlib::XDefaultScreen(display);
            (
                xlib::XDisplayWidth(display, screen),
                xlib::XDisplayHeight(display, screen),
            )
        })
        .ok_or(InputError::DisplayUnavailable)?;

        Ok(ScreenDimensions::new(width.max(0) as u32, height.max(0) as u32)?)
    }

    fn cursor_position(&self) -> Option<TargetPoint> {
        Self::with_display(|display| unsafe {
            let mut root = 0;
            let mut child = 0;
            let mut root_x = 0;
            let mut root_y = 0;
            let mut win_x = 0;
            let mut win_y = 0;
            let mut mask = 0;

            let found = xlib::XQueryPointer(
                display,
                xlib::XRootWindow(display, xlib::XDefaultScreen(display)),
                &mut root,
                &mut child,
                &mut root_x,
                &mut root_y,
                &mut win_x,
                &mut win_y,
                &mut mask,
            );

            (found != 0).then(|| TargetPoint::new(root_x.max(0) as u32, root_y.max(0) as u32))
        })
        .flatten()
    }

    async fn mouse_move_to(&self, point: TargetPoint) -> Result<()> {
        send_event(EventType::MouseMove {
            x: f64::from(point.x),
            y: f64::from(point.y),
        })
    }

    async fn mouse_click(&self) -> Result<()> {
        send_event(EventType::ButtonPress(Button::Left))?;
        tokio::time::sleep(Duration::from_millis(ClickerConfig::MOUSE_CLICK_DELAY_MS)).await;
        send_event(EventType::ButtonRelease(Button::Left))?;
        Ok(())
    }
}
