use anyhow::Result;
use crate::input::{InputError, InputHandlerTrait};
use crate::domain::config::ClickerConfig;
use crate::domain::models::{ScreenDimensions, TargetPoint};
use std::time::Duration;
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SetCursorPos, SM_CXSCREEN, SM_CYSCREEN,
};
use windows::{
    Win32::Foundation::POINT,
    Win32::UI::Input::KeyboardAndMouse::*,
};

pub struct InputHandlerImpl;

impl InputHandlerImpl {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    fn send_button(flags: MOUSE_EVENT_FLAGS) -> Result<()> {
        log::debug!("Sending mouse input {:?}", flags);
        let sent = unsafe {
            let input = INPUT {
                r#type: INPUT_MOUSE,
                Anonymous: windows::Win32::UI::Input::KeyboardAndMouse::INPUT_0 {
                    mi: MOUSEINPUT {
                        dx: 0,
                        dy: 0,
                        mouseData: 0,
                        dwFlags: flags,
                        time: 0,
                        dwExtraInfo: 0,
                    },
                },
            };
            SendInput(&[input], std::mem::size_of::<INPUT>() as i32)
        };

        if sent == 0 {
            return Err(InputError::Simulate(format!("{:?}", flags)).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl InputHandlerTrait for InputHandlerImpl {
    fn screen_size(&self) -> Result<ScreenDimensions> {
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if width == 0 || height == 0 {
            return Err(InputError::DisplayUnavailable.into());
        }
        Ok(ScreenDimensions::new(width.max(0) as u32, height.max(0) as u32)?)
    }

    fn cursor_position(&self) -> Option<TargetPoint> {
        unsafe {
            let mut point = POINT { x: 0, y: 0 };
            if GetCursorPos(&mut point).is_ok() {
                Some(TargetPoint::new(point.x.max(0) as u32, point.y.max(0) as u32))
            } else {
                None
            }
        }
    }

    async fn mouse_move_to(&self, point: TargetPoint) -> Result<()> {
        log::debug!("Moving cursor to {}", point);
        unsafe {
            SetCursorPos(point.x as i32, point.y as i32)?;
        }
        Ok(())
    }

    async fn mouse_click(&self) -> Result<()> {
        Self::send_button(MOUSEEVENTF_LEFTDOWN)?;
        tokio::time::sleep(Duration::from_millis(ClickerConfig::MOUSE_CLICK_DELAY_MS)).await;
        Self::send_button(MOUSEEVENTF_LEFTUP)?;
        Ok(())
    }
}
