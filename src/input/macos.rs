use crate::domain::config::ClickerConfig;
use crate::domain::models::{ScreenDimensions, TargetPoint};
use crate::input::{InputError, InputHandlerTrait};
use anyhow::Result;
use rdev::{simulate, EventType, SimulateError};
use std::sync::Mutex;
use std::time::Duration;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {}

#[repr(C)]
#[derive(Clone, Copy)]
struct CGPoint {
    x: f64,
    y: f64,
}

extern "C" {
    fn CGMainDisplayID() -> u32;
    fn CGDisplayPixelsWide(display: u32) -> usize;
    fn CGDisplayPixelsHigh(display: u32) -> usize;
    fn CGEventCreate(source: *const std::ffi::c_void) -> *const std::ffi::c_void;
    fn CGEventGetLocation(event: *const std::ffi::c_void) -> CGPoint;
    fn CGEventCreateMouseEvent(
        source: *const std::ffi::c_void,
        mouseType: u32,
        mouseCursorPosition: CGPoint,
        mouseButton: u32,
    ) -> *const std::ffi::c_void;
    fn CGEventPost(tap: u32, event: *const std::ffi::c_void) -> i32;
    fn CFRelease(ptr: *const std::ffi::c_void);
}

const LEFT_DOWN: u32 = 1;
const LEFT_UP: u32 = 2;
const LEFT_BUTTON: u32 = 0;

pub struct InputHandlerImpl {
    current_pos: Mutex<Option<TargetPoint>>,
}

impl InputHandlerImpl {
    pub fn new() -> Result<Self> {
        Ok(Self {
            current_pos: Mutex::new(None),
        })
    }

    fn query_cursor_position() -> Option<TargetPoint> {
        unsafe {
            let event = CGEventCreate(std::ptr::null());
            if event.is_null() {
                return None;
            }
            let location = CGEventGetLocation(event);
            CFRelease(event);
            Some(TargetPoint::new(location.x.max(0.0) as u32, location.y.max(0.0) as u32))
        }
    }

    /// Clicks have to carry a location on macOS, so use the last known one
    fn resolve_pointer_position(&self) -> TargetPoint {
        let known = *self
            .current_pos
            .lock()
            .expect("Cursor position mutex poisoned");
        known
            .or_else(Self::query_cursor_position)
            .unwrap_or(TargetPoint::new(0, 0))
    }

    fn send_mouse_button_event(position: TargetPoint, is_press: bool) -> Result<()> {
        let event_type = if is_press { LEFT_DOWN } else { LEFT_UP };
        log::debug!("Posting mouse button event {} at {}", event_type, position);

        unsafe {
            let point = CGPoint {
                x: f64::from(position.x),
                y: f64::from(position.y),
            };
            let event = CGEventCreateMouseEvent(std::ptr::null(), event_type, point, LEFT_BUTTON);

            if event.is_null() {
                return Err(InputError::Simulate("mouse button event".to_string()).into());
            }

            CGEventPost(0, event);
            CFRelease(event);
        }

        Ok(())
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
        let (width, height) = unsafe {
            let display = CGMainDisplayID();
            (CGDisplayPixelsWide(display), CGDisplayPixelsHigh(display))
        };
        if width == 0 || height == 0 {
            return Err(InputError::DisplayUnavailable.into());
        }
        Ok(ScreenDimensions::new(
            u32::try_from(width)?,
            u32::try_from(height)?,
        )?)
    }

    fn cursor_position(&self) -> Option<TargetPoint> {
        Self::query_cursor_position()
    }

    async fn mouse_move_to(&self, point: TargetPoint) -> Result<()> {
        *self
            .current_pos
            .lock()
            .expect("Cursor position mutex poisoned") = Some(point);

        send_event(EventType::MouseMove {
            x: f64::from(point.x),
            y: f64::from(point.y),
        })
    }

    async fn mouse_click(&self) -> Result<()> {
        let position = self.resolve_pointer_position();

        Self::send_mouse_button_event(position, true)?;
        tokio::time::sleep(Duration::from_millis(ClickerConfig::MOUSE_CLICK_DELAY_MS)).await;
        Self::send_mouse_button_event(position, false)?;
        Ok(())
    }
}
