pub mod action;
pub mod geometry;

pub use action::Action;
pub use geometry::{ClickTargets, ScreenDimensions, Side, TargetPoint};
