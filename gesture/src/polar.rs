//! Geometry of the knob and conversion of pointer positions to polar form.

use core::f32::consts::PI;

use libm::{atan2f, cosf, sinf, sqrtf};

// Tuning of distances is expressed relative to a knob of this size.
const REFERENCE_SIZE: f32 = 54.0;

const DEFAULT_SIZE: f32 = 64.0;

/// Pointer position in the local frame of the knob.
///
/// The origin is the top-left corner of the knob's bounding square and `y`
/// grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pointer position relative to the center of the knob.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polar {
    /// Degrees within [-180, 180], zero pointing up, clockwise positive.
    pub angle: f32,
    pub radius: f32,
}

/// Size and center of the knob on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Diameter of the knob.
    pub size: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl Geometry {
    #[must_use]
    pub const fn new(size: f32) -> Self {
        Self { size }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size * 0.5, self.size * 0.5)
    }

    /// Multiplier of distances tuned for the reference knob size.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.size / REFERENCE_SIZE
    }

    /// Convert the pointer position to polar coordinates.
    ///
    /// Returns `None` when the distance from the center cannot be
    /// calculated, e.g. for non-finite positions.
    #[must_use]
    pub fn polar(&self, point: Point) -> Option<Polar> {
        let center = self.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let radius = sqrtf(dx * dx + dy * dy);
        if !radius.is_finite() {
            return None;
        }
        let angle = atan2f(dx, -dy) * 180.0 / PI;
        Some(Polar { angle, radius })
    }

    /// Position of a point at the given angle and distance from the center.
    #[must_use]
    pub fn point_at(&self, degrees: f32, radius: f32) -> Point {
        let center = self.center();
        let radians = degrees * PI / 180.0;
        Point::new(
            center.x + radius * sinf(radians),
            center.y - radius * cosf(radians),
        )
    }
}
