//! Constants shaping how drag gestures translate into value changes.

use dial_control::Sweep;

/// Tuning of the gesture mapper.
///
/// The defaults are tuned for a comfortable feel on touch screens. Keep
/// `reject_jump_delta_degrees` and `delta_gain` in mind together: a fast
/// legitimate spin approaching the threshold gets rejected as a jump.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuning {
    pub sweep: Sweep,
    /// Touches closer to the center are ignored, in units of a 54 wide knob.
    pub min_interactive_radius: f32,
    /// Larger angular difference between two samples is treated as a jump.
    pub reject_jump_delta_degrees: f32,
    pub delta_gain: f32,
    /// Weight of each step towards the value under the pointer.
    pub value_smoothing: f32,
    /// Largest portion of the range a single sample may move the value by.
    pub max_step_ratio_per_event: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidTuning {
    /// The value range is empty, inverted or not finite.
    Range,
    Sweep,
    MinInteractiveRadius,
    RejectJumpDelta,
    DeltaGain,
    ValueSmoothing,
    MaxStepRatio,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sweep: Sweep::default(),
            min_interactive_radius: 6.0,
            reject_jump_delta_degrees: 80.0,
            delta_gain: 1.35,
            value_smoothing: 0.55,
            max_step_ratio_per_event: 0.12,
        }
    }
}

impl Tuning {
    /// # Errors
    ///
    /// Returns `InvalidTuning` naming the first parameter that would make
    /// the mapper misbehave: an empty sweep, negative radius, jump threshold
    /// outside of (0, 180], non-positive gain, or smoothing and step ratio
    /// outside of (0, 1].
    pub fn validate(self) -> Result<Self, InvalidTuning> {
        let within_unit = |x: f32| x > 0.0 && x <= 1.0;

        if !(self.sweep.min_angle < self.sweep.max_angle) {
            return Err(InvalidTuning::Sweep);
        }
        if !(self.min_interactive_radius >= 0.0) {
            return Err(InvalidTuning::MinInteractiveRadius);
        }
        if !(self.reject_jump_delta_degrees > 0.0 && self.reject_jump_delta_degrees <= 180.0) {
            return Err(InvalidTuning::RejectJumpDelta);
        }
        if !(self.delta_gain > 0.0 && self.delta_gain.is_finite()) {
            return Err(InvalidTuning::DeltaGain);
        }
        if !within_unit(self.value_smoothing) {
            return Err(InvalidTuning::ValueSmoothing);
        }
        if !within_unit(self.max_step_ratio_per_event) {
            return Err(InvalidTuning::MaxStepRatio);
        }
        Ok(self)
    }
}
