//! Linear mapping between the value range and the rotation of the knob.

use crate::range::Range;

/// Angular extent of the knob, in degrees.
///
/// Zero degrees points up, positive angles rotate clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sweep {
    pub min_angle: f32,
    pub max_angle: f32,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            min_angle: -135.0,
            max_angle: 135.0,
        }
    }
}

impl Sweep {
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max_angle - self.min_angle
    }

    #[must_use]
    pub fn clamp(&self, degrees: f32) -> f32 {
        if degrees < self.min_angle {
            self.min_angle
        } else if degrees > self.max_angle {
            self.max_angle
        } else {
            degrees
        }
    }

    /// Angle of the knob pointer for the given value.
    #[must_use]
    pub fn angle_for_value(&self, range: &Range, value: f32) -> f32 {
        self.min_angle + range.normalize(value) * self.span()
    }

    /// Value represented by the given pointer angle.
    ///
    /// Angles beyond the sweep are limited to its ends.
    #[must_use]
    pub fn value_for_angle(&self, range: &Range, degrees: f32) -> f32 {
        let ratio = (self.clamp(degrees) - self.min_angle) / self.span();
        range.denormalize(ratio)
    }
}
