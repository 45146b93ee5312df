use std::ops::{Add, Div, Mul, Sub};

/// Lightweight 2D vector shared by display-space and image-space coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction angle in radians, measured from the +x axis.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Integer pixel coordinate containing this point, or `None` for negative positions.
    pub fn to_pixel(self) -> Option<(u32, u32)> {
        let (x, y) = (self.x.floor(), self.y.floor());
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        Some((x as u32, y as u32))
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

/// Convenience helper to measure the distance between two positions.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_floor_rejects_negative() {
        assert_eq!(Vec2::new(3.9, 0.2).to_pixel(), Some((3, 0)));
        assert_eq!(Vec2::new(-0.1, 4.0).to_pixel(), None);
        assert_eq!(Vec2::new(f32::NAN, 4.0).to_pixel(), None);
    }

    #[test]
    fn distance_and_angle() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        assert!((Vec2::new(0.0, 2.0).angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
