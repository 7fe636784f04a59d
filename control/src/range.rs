//! Closed interval the controlled value lives in.

/// Closed interval `[min, max]` of the controlled value.
///
/// The interval is expected to satisfy `min < max`. This is validated by
/// [`ControlSpec::new`](crate::spec::ControlSpec::new); a zero span is still
/// handled gracefully by all the conversions here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Limit the value to the bounds of the range.
    ///
    /// Unlike `f32::clamp`, this does not panic on a malformed range. NaN
    /// stays NaN and is dealt with by the caller.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of the value within the range, between 0.0 and 1.0.
    ///
    /// A range with zero span is considered to sit in the middle.
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.span();
        if span == 0.0 {
            return 0.5;
        }
        (self.clamp(value) - self.min) / span
    }

    /// Value at the given position of the range.
    #[must_use]
    pub fn denormalize(&self, position: f32) -> f32 {
        self.min + position * self.span()
    }
}
