//! Immutable configuration of the control.

use crate::range::Range;

/// Configuration shared by the reducer and the state construction.
///
/// This is created once when the control is instantiated and never changes
/// afterwards. Use [`ControlSpec::new`] to build a validated instance, or
/// [`ControlSpec::default`] for a ±40 dB level control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlSpec {
    pub range: Range,
    /// The neutral value the control resets to.
    pub flat_value: f32,
    /// Weight of each step towards the target when set through the slider.
    pub slider_smoothing_factor: f32,
}

/// Reason a configuration was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidSpec {
    /// The range is empty, inverted or not finite.
    Range,
    /// The flat value lies outside of the range.
    FlatValue,
    /// Smoothing factor is not within (0, 1].
    SmoothingFactor,
}

impl Default for ControlSpec {
    fn default() -> Self {
        Self {
            range: Range::new(-40.0, 40.0),
            flat_value: 0.0,
            slider_smoothing_factor: 0.32,
        }
    }
}

impl ControlSpec {
    /// # Errors
    ///
    /// Returns `InvalidSpec` when the range is not a finite interval with
    /// `min < max`, when `flat_value` falls outside of it, or when the
    /// smoothing factor is not within (0, 1].
    pub fn new(
        range: Range,
        flat_value: f32,
        slider_smoothing_factor: f32,
    ) -> Result<Self, InvalidSpec> {
        if !range.min.is_finite() || !range.max.is_finite() || range.min >= range.max {
            return Err(InvalidSpec::Range);
        }
        if !range.contains(flat_value) {
            return Err(InvalidSpec::FlatValue);
        }
        if !(slider_smoothing_factor > 0.0 && slider_smoothing_factor <= 1.0) {
            return Err(InvalidSpec::SmoothingFactor);
        }
        Ok(Self {
            range,
            flat_value,
            slider_smoothing_factor,
        })
    }
}
