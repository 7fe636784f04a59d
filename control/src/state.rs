//! Value object describing the current state of the control.

#[allow(unused_imports)]
use micromath::F32Ext;

// Values closer than this to the flat value are displayed as flat.
const FLAT_TOLERANCE: f32 = 0.001;

/// Current state of the control.
///
/// New instances are only produced by [`reduce`](crate::reducer::reduce),
/// the state is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// The output value, always within the range.
    pub value: f32,
    /// The last value above the floor of the range, restored on unmute.
    pub last_active_value: f32,
    pub is_muted: bool,
}

impl ControlState {
    #[must_use]
    pub fn initial(flat_value: f32) -> Self {
        Self {
            value: flat_value,
            last_active_value: flat_value,
            is_muted: false,
        }
    }

    #[must_use]
    pub fn is_flat(&self, flat_value: f32) -> bool {
        !self.is_muted && (self.value - flat_value).abs() < FLAT_TOLERANCE
    }
}
