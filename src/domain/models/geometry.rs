use std::fmt;

use crate::input::InputError;

/// Size of the primary display in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDimensions {
    width: u32,
    height: u32,
}

impl ScreenDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::InvalidScreenSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Absolute pixel coordinate on the primary display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPoint {
    pub x: u32,
    pub y: u32,
}

impl TargetPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TargetPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// The two click targets: centers of the left and right screen halves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTargets {
    pub left: TargetPoint,
    pub right: TargetPoint,
}

impl ClickTargets {
    pub fn from_dimensions(dims: ScreenDimensions) -> Self {
        // u64 keeps 3 * width from overflowing on absurd widths
        let width = u64::from(dims.width());
        let y = dims.height() / 2;

        Self {
            left: TargetPoint::new((width / 4) as u32, y),
            right: TargetPoint::new((3 * width / 4) as u32, y),
        }
    }

    pub fn get(&self, side: Side) -> TargetPoint {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(width: u32, height: u32) -> ClickTargets {
        ClickTargets::from_dimensions(ScreenDimensions::new(width, height).unwrap())
    }

    #[test]
    fn test_full_hd_targets() {
        let t = targets(1920, 1080);
        assert_eq!(t.left, TargetPoint::new(480, 540));
        assert_eq!(t.right, TargetPoint::new(1440, 540));
    }

    #[test]
    fn test_odd_dimensions_truncate() {
        let t = targets(1921, 1081);
        assert_eq!(t.left, TargetPoint::new(480, 540));
        assert_eq!(t.right, TargetPoint::new(1440, 540));
    }

    #[test]
    fn test_left_is_left_of_right() {
        for width in [4, 5, 7, 800, 1366, 2560, 3841, 7680] {
            let t = targets(width, 600);
            assert!(t.left.x < t.right.x, "width {}", width);
        }
    }

    #[test]
    fn test_targets_share_vertical_center() {
        for (width, height) in [(1, 1), (3, 2), (1280, 720), (1280, 1023), (5120, 2880)] {
            let t = targets(width, height);
            assert_eq!(t.left.y, height / 2);
            assert_eq!(t.right.y, height / 2);
        }
    }

    #[test]
    fn test_huge_width_does_not_overflow() {
        let t = targets(u32::MAX, 2);
        assert_eq!(t.left.x, u32::MAX / 4);
        assert_eq!(t.right.x, ((3 * u64::from(u32::MAX)) / 4) as u32);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            ScreenDimensions::new(0, 1080),
            Err(InputError::InvalidScreenSize { width: 0, height: 1080 })
        ));
        assert!(ScreenDimensions::new(1920, 0).is_err());
    }

    #[test]
    fn test_get_by_side() {
        let t = targets(1920, 1080);
        assert_eq!(t.get(Side::Left), t.left);
        assert_eq!(t.get(Side::Right), t.right);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(TargetPoint::new(480, 540).to_string(), "(480, 540)");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
